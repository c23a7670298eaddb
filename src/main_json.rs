// Copyright (C) 2020-2026 Andy Kurnia.

use std::io::Read;
use wordhook::{build, error, game_config, logger, movegen, play, play_scorer, rack};

// lexicon: path to a word list, one word per line.
// word, row, col, orientation: the board word. row and col are 0-based,
// orientation is "horizontal"/"h" or "vertical"/"v".
// rack: letters, with ? for blanks (blanks are never played).
// scoring: "face" (default) or "premium".
#[derive(serde::Deserialize)]
struct Question {
    lexicon: String,
    word: String,
    row: i8,
    col: i8,
    orientation: String,
    rack: String,
    #[serde(default)]
    scoring: Option<String>,
}

#[derive(serde::Serialize)]
struct Answer<'a> {
    anchor: &'a str,
    rack: &'a str,
    play: Option<play::Play>,
}

fn answer(question: &Question) -> error::Returns<Option<play::Play>> {
    let game_config = game_config::make_english_game_config();
    let trie = build::read_trie_from_file(&question.lexicon)?;
    let anchor = play::BoardWord::new(
        &question.word,
        question.row,
        question.col,
        question.orientation.parse()?,
        game_config.dim(),
    )?;
    let mut rack = rack::Rack::from_letters(&question.rack, game_config.rack_size() as usize)?;
    let board_snapshot = movegen::BoardSnapshot {
        trie: &trie,
        game_config: &game_config,
        anchor: &anchor,
    };
    let mut word_finder = movegen::WordFinder::new(&game_config);
    Ok(match question.scoring.as_deref().unwrap_or("face") {
        "face" => word_finder.find_best_move(
            &board_snapshot,
            &play_scorer::FaceValueScorer::new(game_config.alphabet()),
            &mut rack,
        ),
        "premium" => word_finder.find_best_move(
            &board_snapshot,
            &play_scorer::PremiumScorer::new(
                game_config.alphabet(),
                game_config.board_layout(),
                &anchor,
            ),
            &mut rack,
        ),
        other => {
            wordhook::return_error!(format!("invalid scoring {:?}", other));
        }
    })
}

fn main() -> error::Returns<()> {
    logger::init();
    let args = std::env::args().collect::<Vec<_>>();
    let data = if args.len() > 1 && args[1] != "-" {
        std::fs::read_to_string(&args[1])?
    } else {
        let mut s = String::new();
        std::io::stdin().read_to_string(&mut s)?;
        s
    };
    let question = serde_json::from_str::<Question>(&data)?;
    let play = answer(&question)?;
    let ret = serde_json::to_value(Answer {
        anchor: &question.word,
        rack: &question.rack,
        play,
    })?;
    println!("{}", serde_json::to_string_pretty(&ret)?);

    Ok(())
}
