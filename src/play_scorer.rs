// Copyright (C) 2020-2026 Andy Kurnia.

use super::play::{BoardWord, Orientation, Play};
use super::{alphabet, board_layout};

/// Values and orders candidate plays. The search only asks for these two things.
pub trait Scorer {
    fn score(&self, word: &[u8], row: i8, col: i8, orientation: Orientation) -> i32;

    // strictly better. higher score wins; ties go to the smaller word, then the
    // earlier square, then across before down, so the order is total.
    fn outranks(&self, candidate: &Play, best: &Play) -> bool {
        candidate
            .score
            .cmp(&best.score)
            .then_with(|| best.word.cmp(&candidate.word))
            .then_with(|| best.row.cmp(&candidate.row))
            .then_with(|| best.col.cmp(&candidate.col))
            .then_with(|| best.orientation.cmp(&candidate.orientation))
            .is_gt()
    }

    fn make_play(&self, word: &[u8], row: i8, col: i8, orientation: Orientation) -> Play {
        Play {
            word: String::from_utf8_lossy(word).into_owned(),
            row,
            col,
            orientation,
            score: self.score(word, row, col, orientation),
        }
    }
}

/// Sum of tile face values.
pub struct FaceValueScorer<'a> {
    alphabet: &'a alphabet::Alphabet<'a>,
}

impl<'a> FaceValueScorer<'a> {
    pub fn new(alphabet: &'a alphabet::Alphabet<'a>) -> Self {
        Self { alphabet }
    }
}

impl Scorer for FaceValueScorer<'_> {
    fn score(&self, word: &[u8], _row: i8, _col: i8, _orientation: Orientation) -> i32 {
        word.iter()
            .map(|&letter| self.alphabet.score(letter) as i32)
            .sum()
    }
}

/// Face values with premium squares. Squares under the anchor word were paid
/// for when it was played, so their premiums do not count again.
pub struct PremiumScorer<'a> {
    alphabet: &'a alphabet::Alphabet<'a>,
    board_layout: &'a board_layout::BoardLayout,
    anchor: &'a BoardWord,
}

impl<'a> PremiumScorer<'a> {
    pub fn new(
        alphabet: &'a alphabet::Alphabet<'a>,
        board_layout: &'a board_layout::BoardLayout,
        anchor: &'a BoardWord,
    ) -> Self {
        Self {
            alphabet,
            board_layout,
            anchor,
        }
    }
}

impl Scorer for PremiumScorer<'_> {
    fn score(&self, word: &[u8], row: i8, col: i8, orientation: Orientation) -> i32 {
        let dim = self.board_layout.dim();
        let (dr, dc) = if orientation.is_down() { (1, 0) } else { (0, 1) };
        let mut word_multiplier = 1;
        let mut word_score = 0i32;
        for (i, &letter) in word.iter().enumerate() {
            let r = row + dr * i as i8;
            let c = col + dc * i as i8;
            let face_value = self.alphabet.score(letter) as i32;
            if dim.contains(r, c) && !self.anchor.covers(r, c) {
                let premium = self.board_layout.premium_at(r, c);
                word_multiplier *= premium.word_multiplier as i32;
                word_score += face_value * premium.tile_multiplier as i32;
            } else {
                word_score += face_value;
            }
        }
        word_score * word_multiplier
    }
}
