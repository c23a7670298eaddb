// Copyright (C) 2020-2026 Andy Kurnia.

use wordhook::{
    build, display, error, game_config, logger, movegen, play, play_scorer, rack, rlhelper, trie,
};

static HELP: &str = "\
lex <file>                       load a word list, one word per line
anchor <word> <row> <col> <h|v>  place the board word (0-based row and col)
rack <tiles>                     set the rack, ? or _ for blanks
best [face|premium]              find the best placement (default face)
board                            show the board with the last placement
check <word>...                  look words up in the lexicon
verbose                          toggle debug logging
source <file>                    run commands from a file
help                             this
exit                             leave";

enum Scoring {
    FaceValue,
    Premium,
}

impl std::str::FromStr for Scoring {
    type Err = error::BoxAnyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "face" => Ok(Scoring::FaceValue),
            "premium" => Ok(Scoring::Premium),
            _ => Err(error::new(format!("invalid scoring {:?}", s)).into()),
        }
    }
}

struct Shell<'a> {
    game_config: &'a game_config::GameConfig<'a>,
    word_finder: movegen::WordFinder,
    trie: Option<trie::Trie>,
    anchor: Option<play::BoardWord>,
    rack: rack::Rack,
    last_play: Option<play::Play>,
    initial_level: log::LevelFilter,
}

fn need_args(strings: &[String], n: usize) -> error::Returns<()> {
    if strings.len() <= n {
        wordhook::return_error!(format!("{} needs {} args", strings[0], n));
    }
    Ok(())
}

impl Shell<'_> {
    fn best(&mut self, scoring: Scoring) -> error::Returns<()> {
        let Some(trie) = &self.trie else {
            wordhook::return_error!("no lexicon, use lex first".into());
        };
        let Some(anchor) = &self.anchor else {
            wordhook::return_error!("no board word, use anchor first".into());
        };
        let board_snapshot = movegen::BoardSnapshot {
            trie,
            game_config: self.game_config,
            anchor,
        };
        let t0 = std::time::Instant::now();
        let found = match scoring {
            Scoring::FaceValue => {
                let scorer = play_scorer::FaceValueScorer::new(self.game_config.alphabet());
                self.word_finder
                    .find_best_move(&board_snapshot, &scorer, &mut self.rack)
            }
            Scoring::Premium => {
                let scorer = play_scorer::PremiumScorer::new(
                    self.game_config.alphabet(),
                    self.game_config.board_layout(),
                    anchor,
                );
                self.word_finder
                    .find_best_move(&board_snapshot, &scorer, &mut self.rack)
            }
        };
        log::debug!("search took {:?}", t0.elapsed());
        match &found {
            Some(play) => println!("{}", play),
            None => println!("no placement"),
        }
        self.last_play = found;
        Ok(())
    }

    fn execute(&mut self, strings: &[String]) -> error::Returns<()> {
        match strings[0].as_str() {
            "lex" => {
                need_args(strings, 1)?;
                let trie = build::read_trie_from_file(&strings[1])?;
                println!("{} words", trie.len());
                self.trie = Some(trie);
                self.last_play = None;
            }
            "anchor" => {
                need_args(strings, 4)?;
                let row = strings[2].parse::<i8>()?;
                let col = strings[3].parse::<i8>()?;
                let orientation = strings[4].parse::<play::Orientation>()?;
                self.anchor = Some(play::BoardWord::new(
                    &strings[1],
                    row,
                    col,
                    orientation,
                    self.game_config.dim(),
                )?);
                self.last_play = None;
            }
            "rack" => {
                let letters = strings.get(1).map_or("", |s| s.as_str());
                self.rack =
                    rack::Rack::from_letters(letters, self.game_config.rack_size() as usize)?;
                println!("rack: {}", self.game_config.alphabet().fmt_rack(self.rack.tiles()));
            }
            "best" => {
                let scoring = match strings.get(1) {
                    Some(s) => s.parse::<Scoring>()?,
                    None => Scoring::FaceValue,
                };
                self.best(scoring)?;
            }
            "board" => {
                display::print_board(
                    self.game_config.board_layout(),
                    self.anchor.as_ref(),
                    self.last_play.as_ref(),
                );
            }
            "check" => {
                need_args(strings, 1)?;
                let Some(trie) = &self.trie else {
                    wordhook::return_error!("no lexicon, use lex first".into());
                };
                for word in &strings[1..] {
                    let valid = trie.contains(word.to_ascii_uppercase().as_bytes());
                    println!("{} is {}", word, if valid { "valid" } else { "invalid" });
                }
            }
            "verbose" => {
                let level = logger::toggled_level(log::max_level(), self.initial_level);
                logger::set_level(level);
                println!("logging at {}", level);
            }
            "help" => {
                println!("{}", HELP);
            }
            _ => {
                println!("invalid input, help for help");
            }
        }
        Ok(())
    }
}

fn main() -> error::Returns<()> {
    let initial_level = logger::init();
    let game_config = game_config::make_english_game_config();
    let mut shell = Shell {
        game_config: &game_config,
        word_finder: movegen::WordFinder::new(&game_config),
        trie: None,
        anchor: None,
        rack: rack::Rack::empty(),
        last_play: None,
        initial_level,
    };
    let mut rl = rlhelper::new_rl_editor()?;
    let mut cmd_stack = Vec::<(String, Option<(String, usize)>)>::new();
    for filename in std::env::args().skip(1) {
        cmd_stack.push((format!("source {}", shell_words::quote(&filename)), None));
    }
    cmd_stack.reverse();
    loop {
        if let Some((line, source)) = cmd_stack.pop() {
            if let Some((filename, line_num)) = source {
                println!("{}:{}> {}", filename, line_num, line);
            }
            match shell_words::split(&line) {
                Ok(strings) => {
                    if !strings.is_empty() {
                        match strings[0].as_str() {
                            "exit" => {
                                break;
                            }
                            "source" => {
                                if strings.len() > 1 {
                                    match std::fs::read_to_string(&strings[1]) {
                                        Ok(whole_file) => {
                                            let v = cmd_stack.len();
                                            for (line_num, line) in whole_file.lines().enumerate() {
                                                cmd_stack.push((
                                                    line.to_string(),
                                                    Some((strings[1].clone(), line_num + 1)),
                                                ));
                                            }
                                            cmd_stack[v..].reverse();
                                        }
                                        Err(err) => {
                                            println!("cannot open file: {:?}", err);
                                        }
                                    }
                                } else {
                                    println!("need another arg");
                                }
                            }
                            _ => {
                                if let Err(err) = shell.execute(&strings) {
                                    println!("{}", err);
                                }
                            }
                        }
                    }
                }
                Err(err) => {
                    println!("Bad quoting: {:?}", err);
                }
            }
        } else {
            match rl.readline("wordhook> ") {
                Ok(line) => {
                    rl.add_history_entry(line.as_str())?;
                    cmd_stack.push((line, None));
                }
                Err(rustyline::error::ReadlineError::Interrupted) => {
                    println!("CTRL-C");
                    break;
                }
                Err(rustyline::error::ReadlineError::Eof) => {
                    println!("CTRL-D");
                    break;
                }
                Err(err) => {
                    println!("Error: {:?}", err);
                    break;
                }
            }
        }
    }

    Ok(())
}
