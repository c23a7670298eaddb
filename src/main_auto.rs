// Copyright (C) 2020-2026 Andy Kurnia.

use rand::prelude::*;
use wordhook::{bag, build, error, game_config, logger, movegen, play, play_scorer, rack};

thread_local! {
    static RNG: std::cell::RefCell<Box<dyn RngCore>> =
        std::cell::RefCell::new(Box::new(rand_chacha::ChaCha20Rng::from_os_rng()));
}

#[derive(serde::Serialize)]
struct TrialRow {
    trial: usize,
    anchor: String,
    anchor_row: i8,
    anchor_col: i8,
    anchor_orientation: play::Orientation,
    rack: String,
    word: Option<String>,
    row: Option<i8>,
    col: Option<i8>,
    orientation: Option<play::Orientation>,
    score: Option<i32>,
}

// a random board word from the list, placed anywhere it fits.
fn random_anchor(
    rng: &mut dyn RngCore,
    words: &[Box<[u8]>],
    game_config: &game_config::GameConfig,
) -> error::Returns<play::BoardWord> {
    let dim = game_config.dim();
    let orientation = if rng.random_bool(0.5) {
        play::Orientation::Vertical
    } else {
        play::Orientation::Horizontal
    };
    let lane_len = dim.lane_len(orientation.is_down()) as usize;
    let Some(word) = words.iter().filter(|w| w.len() <= lane_len).choose(rng) else {
        wordhook::return_error!("no word fits on the board".into());
    };
    let len = word.len() as i8;
    let (row, col) = if orientation.is_down() {
        (
            rng.random_range(0..=dim.rows - len),
            rng.random_range(0..dim.cols),
        )
    } else {
        (
            rng.random_range(0..dim.rows),
            rng.random_range(0..=dim.cols - len),
        )
    };
    play::BoardWord::new(
        &String::from_utf8_lossy(word),
        row,
        col,
        orientation,
        dim,
    )
}

fn main() -> error::Returns<()> {
    logger::init();
    let args = std::env::args().collect::<Vec<_>>();
    if args.len() <= 1 {
        return Err("need argument: word list file [number of trials]".into());
    }
    let num_trials = match args.get(2) {
        Some(s) => s.parse::<usize>()?,
        None => 10_000,
    };
    let words = build::read_english_words(&std::fs::read_to_string(&args[1])?)?;
    if words.is_empty() {
        return Err("word list is empty".into());
    }
    let trie = std::sync::Arc::new(build::build_trie(&words));
    let words = std::sync::Arc::new(words);
    let game_config = std::sync::Arc::new(game_config::make_english_game_config());
    let num_threads = num_cpus::get();
    log::info!("running {} trials on {} threads", num_trials, num_threads);
    let num_processed_trials = std::sync::Arc::new(std::sync::atomic::AtomicUsize::new(0));
    let mut threads = vec![];
    let (tx, rx) = std::sync::mpsc::channel();
    for _ in 0..num_threads {
        let tx = tx.clone();
        let game_config = std::sync::Arc::clone(&game_config);
        let trie = std::sync::Arc::clone(&trie);
        let words = std::sync::Arc::clone(&words);
        let num_processed_trials = std::sync::Arc::clone(&num_processed_trials);
        threads.push(std::thread::spawn(move || -> error::Returns<()> {
            RNG.with(|rng| -> error::Returns<()> {
                let mut rng_ref = rng.borrow_mut();
                let rng: &mut dyn RngCore = &mut **rng_ref;
                let rack_size = game_config.rack_size() as usize;
                let full_bag = bag::Bag::new(game_config.alphabet());
                let mut bag = full_bag.clone();
                let mut word_finder = movegen::WordFinder::new(&game_config);
                let scorer = play_scorer::FaceValueScorer::new(game_config.alphabet());
                loop {
                    let trial =
                        num_processed_trials.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
                    if trial >= num_trials {
                        num_processed_trials.fetch_sub(1, std::sync::atomic::Ordering::Relaxed);
                        break;
                    }

                    let anchor = random_anchor(rng, &words, &game_config)?;
                    bag.clone_from(&full_bag);
                    bag.shuffle(rng);
                    let mut rack = rack::Rack::empty();
                    bag.replenish(&mut rack, rack_size);
                    let rack_ser = rack.to_string();

                    let board_snapshot = movegen::BoardSnapshot {
                        trie: &trie,
                        game_config: &game_config,
                        anchor: &anchor,
                    };
                    let found = word_finder.find_best_move(&board_snapshot, &scorer, &mut rack);
                    if rack.to_string() != rack_ser {
                        wordhook::return_error!(format!(
                            "rack changed from {} to {}",
                            rack_ser, rack
                        ));
                    }

                    let row = TrialRow {
                        trial,
                        anchor: String::from_utf8_lossy(anchor.word()).into_owned(),
                        anchor_row: anchor.row(),
                        anchor_col: anchor.col(),
                        anchor_orientation: anchor.orientation(),
                        rack: rack_ser,
                        word: found.as_ref().map(|p| p.word.clone()),
                        row: found.as_ref().map(|p| p.row),
                        col: found.as_ref().map(|p| p.col),
                        orientation: found.as_ref().map(|p| p.orientation),
                        score: found.as_ref().map(|p| p.score),
                    };
                    if tx.send(row).is_err() {
                        // the writer is gone.
                        break;
                    }
                }
                Ok(())
            })
        }));
    }
    drop(tx);

    let epoch_secs = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_secs();
    let run_identifier = format!("log-{:08x}", epoch_secs);
    println!("logging to {}", run_identifier);
    let mut csv_log = csv::Writer::from_path(&run_identifier)?;
    let mut completed_trials = 0u64;
    let mut found_plays = 0u64;
    let t0 = std::time::Instant::now();
    let mut last_tick = 0;
    for row in rx.iter() {
        if row.score.is_some() {
            found_plays += 1;
        }
        csv_log.serialize(row)?;
        completed_trials += 1;
        let elapsed_secs = t0.elapsed().as_secs();
        if elapsed_secs > last_tick {
            last_tick = elapsed_secs;
            println!(
                "After {} seconds, have logged {} trials ({} with a play) into {}",
                elapsed_secs, completed_trials, found_plays, run_identifier
            );
        }
    }
    csv_log.flush()?;
    println!(
        "After {} ms, have logged {} trials ({} with a play) into {}",
        t0.elapsed().as_millis(),
        completed_trials,
        found_plays,
        run_identifier
    );

    for thread in threads {
        match thread.join() {
            Ok(Ok(())) => {}
            Ok(Err(e)) => println!("{}", e),
            Err(e) => println!("{:?}", e),
        }
    }

    Ok(())
}
