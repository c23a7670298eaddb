// Copyright (C) 2020-2026 Andy Kurnia.

#[macro_use]
pub mod error;

pub mod alphabet;
pub mod bag;
pub mod board_layout;
pub mod build;
pub mod display;
pub mod game_config;
pub mod logger;
pub mod matrix;
pub mod movegen;
pub mod play;
pub mod play_scorer;
pub mod rack;
pub mod rlhelper;
pub mod trie;
