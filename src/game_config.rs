// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, board_layout, matrix};

pub struct StaticGameConfig<'a> {
    alphabet: &'a alphabet::Alphabet<'a>,
    board_layout: board_layout::BoardLayout,
    rack_size: i8,
}

pub enum GameConfig<'a> {
    Static(StaticGameConfig<'a>),
}

impl<'a> GameConfig<'a> {
    #[inline(always)]
    pub fn alphabet(&self) -> &'a alphabet::Alphabet<'a> {
        match self {
            GameConfig::Static(x) => x.alphabet,
        }
    }

    #[inline(always)]
    pub fn board_layout(&self) -> &board_layout::BoardLayout {
        match self {
            GameConfig::Static(x) => &x.board_layout,
        }
    }

    #[inline(always)]
    pub fn dim(&self) -> matrix::Dim {
        self.board_layout().dim()
    }

    // also the rack capacity.
    #[inline(always)]
    pub fn rack_size(&self) -> i8 {
        match self {
            GameConfig::Static(x) => x.rack_size,
        }
    }
}

pub fn make_english_game_config() -> GameConfig<'static> {
    GameConfig::Static(StaticGameConfig {
        alphabet: &alphabet::ENGLISH_ALPHABET,
        board_layout: board_layout::make_standard_board_layout(),
        rack_size: 7,
    })
}
