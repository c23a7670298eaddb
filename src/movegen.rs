// Copyright (C) 2020-2026 Andy Kurnia.

use super::play::{BoardWord, Orientation, Play};
use super::play_scorer::Scorer;
use super::rack::{Rack, SlotCursor};
use super::trie::{Trie, TrieNode};
use super::{game_config, matrix};

pub struct BoardSnapshot<'a> {
    pub trie: &'a Trie,
    pub game_config: &'a game_config::GameConfig<'a>,
    pub anchor: &'a BoardWord,
}

#[derive(Clone, Copy)]
struct Target {
    row: i8,
    col: i8,
    orientation: Orientation,
}

struct Env<'a, S: Scorer + ?Sized> {
    board_snapshot: &'a BoardSnapshot<'a>,
    dim: matrix::Dim,
    scorer: &'a S,
    // letters of the word under construction, prefix first.
    word_buffer: &'a mut Vec<u8>,
    best: Option<Play>,
}

fn record<S: Scorer + ?Sized>(env: &mut Env<'_, S>, target: Target) {
    let word = &env.word_buffer[..];
    if word == env.board_snapshot.anchor.word() {
        return;
    }
    let play = env
        .scorer
        .make_play(word, target.row, target.col, target.orientation);
    if let Some(best) = &env.best {
        if !env.scorer.outranks(&play, best) {
            return;
        }
    }
    log::trace!("new best {}", play);
    env.best = Some(play);
}

// explores rack permutations under node. word_buffer holds the letters that led to node.
fn search_suffixes<S: Scorer + ?Sized>(
    env: &mut Env<'_, S>,
    rack: &mut Rack,
    node: &TrieNode,
    remaining: i16,
    target: Target,
) {
    if node.is_end() {
        record(env, target);
    }
    if remaining > 0 {
        let mut cursor = SlotCursor::default();
        while let Some((idx, letter)) = cursor.next_slot(rack) {
            if let Some(child) = node.child(letter) {
                let mut slot = rack.take(idx);
                env.word_buffer.push(letter);
                search_suffixes(env, &mut slot, child, remaining - 1, target);
                env.word_buffer.pop();
            }
        }
    }
}

// word_buffer holds prefix_len rack letters placed before the anchor.
fn extend_board_word<S: Scorer + ?Sized>(env: &mut Env<'_, S>, rack: &mut Rack, prefix_len: i16) {
    let board_snapshot = env.board_snapshot;
    let anchor = board_snapshot.anchor;
    let orientation = anchor.orientation();
    let len = anchor.word().len() as i16;
    let (row, col, remaining) = if orientation.is_down() {
        (
            anchor.row() as i16 - prefix_len,
            anchor.col() as i16,
            env.dim.rows as i16 - (anchor.row() as i16 + len),
        )
    } else {
        (
            anchor.row() as i16,
            anchor.col() as i16 - prefix_len,
            env.dim.cols as i16 - (anchor.col() as i16 + len),
        )
    };
    if row < 0 || col < 0 {
        return;
    }
    let restore_len = env.word_buffer.len();
    env.word_buffer.extend_from_slice(anchor.word());
    if let Some(node) = board_snapshot.trie.lookup_prefix(&env.word_buffer[..]) {
        search_suffixes(
            env,
            rack,
            node,
            remaining,
            Target {
                row: row as i8,
                col: col as i8,
                orientation,
            },
        );
    }
    env.word_buffer.truncate(restore_len);
}

// perpendicular words crossing the anchor, each starting with the prefix that led to node.
fn start_on_board_letter<S: Scorer + ?Sized>(
    env: &mut Env<'_, S>,
    rack: &mut Rack,
    node: &TrieNode,
    prefix_len: i16,
) {
    let anchor = env.board_snapshot.anchor;
    let down = anchor.orientation().is_down();
    let orientation = anchor.orientation().perpendicular();
    for (i, &letter) in anchor.word().iter().enumerate() {
        let Some(child) = node.child(letter) else {
            continue;
        };
        let (row, col, remaining) = if down {
            (
                anchor.row() as i16 + i as i16,
                anchor.col() as i16 - prefix_len,
                env.dim.cols as i16 - (anchor.col() as i16 + 1),
            )
        } else {
            (
                anchor.row() as i16 - prefix_len,
                anchor.col() as i16 + i as i16,
                env.dim.rows as i16 - (anchor.row() as i16 + 1),
            )
        };
        if row < 0 || col < 0 {
            continue;
        }
        env.word_buffer.push(letter);
        search_suffixes(
            env,
            rack,
            child,
            remaining,
            Target {
                row: row as i8,
                col: col as i8,
                orientation,
            },
        );
        env.word_buffer.pop();
    }
}

// depth is bounded by the squares before the anchor across its orientation.
fn prefix_before_board_letter<S: Scorer + ?Sized>(
    env: &mut Env<'_, S>,
    rack: &mut Rack,
    node: &TrieNode,
    depth: i16,
) {
    let anchor = env.board_snapshot.anchor;
    let space_before = (if anchor.orientation().is_down() {
        anchor.col()
    } else {
        anchor.row()
    }) as i16;
    start_on_board_letter(env, rack, node, depth);
    if space_before <= depth {
        return;
    }
    extend_board_word(env, rack, depth);
    let mut cursor = SlotCursor::default();
    while let Some((idx, letter)) = cursor.next_slot(rack) {
        if let Some(child) = node.child(letter) {
            let mut slot = rack.take(idx);
            env.word_buffer.push(letter);
            prefix_before_board_letter(env, &mut slot, child, depth + 1);
            env.word_buffer.pop();
        }
    }
}

/// Finds the best placement hooking onto one board word.
///
/// The rack is borrowed mutably for in-place marking during the search and is
/// identical to its input on return. The word buffer is kept between calls.
pub struct WordFinder {
    word_buffer: Vec<u8>,
}

impl WordFinder {
    pub fn new(game_config: &game_config::GameConfig) -> Self {
        let dim = game_config.dim();
        Self {
            word_buffer: Vec::with_capacity(std::cmp::max(dim.rows, dim.cols) as usize),
        }
    }

    fn run<'a, S: Scorer + ?Sized, F: FnOnce(&mut Env<'_, S>)>(
        &'a mut self,
        board_snapshot: &'a BoardSnapshot<'a>,
        scorer: &'a S,
        f: F,
    ) -> Option<Play> {
        self.word_buffer.clear();
        let mut env = Env {
            board_snapshot,
            dim: board_snapshot.game_config.dim(),
            scorer,
            word_buffer: &mut self.word_buffer,
            best: None,
        };
        f(&mut env);
        env.best
    }

    pub fn find_best_move<S: Scorer + ?Sized>(
        &mut self,
        board_snapshot: &BoardSnapshot,
        scorer: &S,
        rack: &mut Rack,
    ) -> Option<Play> {
        let root = board_snapshot.trie.root();
        self.run(board_snapshot, scorer, |env| {
            extend_board_word(env, rack, 0);
            log::debug!("after extending: {:?}", env.best);
            start_on_board_letter(env, rack, root, 0);
            log::debug!("after crossing: {:?}", env.best);
            if env.best.as_ref().is_some_and(|play| play.score > 0) {
                return;
            }
            prefix_before_board_letter(env, rack, root, 0);
            log::debug!("after prefixing: {:?}", env.best);
        })
    }

    // only words that begin with the board word, placed along it.
    pub fn best_extension<S: Scorer + ?Sized>(
        &mut self,
        board_snapshot: &BoardSnapshot,
        scorer: &S,
        rack: &mut Rack,
    ) -> Option<Play> {
        self.run(board_snapshot, scorer, |env| extend_board_word(env, rack, 0))
    }

    // only perpendicular words that begin on a board letter.
    pub fn best_crossing<S: Scorer + ?Sized>(
        &mut self,
        board_snapshot: &BoardSnapshot,
        scorer: &S,
        rack: &mut Rack,
    ) -> Option<Play> {
        let root = board_snapshot.trie.root();
        self.run(board_snapshot, scorer, |env| {
            start_on_board_letter(env, rack, root, 0)
        })
    }

    // words with rack letters before the board word or before a board letter.
    pub fn best_with_prefix<S: Scorer + ?Sized>(
        &mut self,
        board_snapshot: &BoardSnapshot,
        scorer: &S,
        rack: &mut Rack,
    ) -> Option<Play> {
        let root = board_snapshot.trie.root();
        self.run(board_snapshot, scorer, |env| {
            prefix_before_board_letter(env, rack, root, 0)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::play_scorer::FaceValueScorer;
    use crate::rack::BLANK;

    struct Fixture {
        trie: Trie,
        game_config: game_config::GameConfig<'static>,
    }

    impl Fixture {
        fn new(words: &[&str]) -> Self {
            let mut trie = Trie::new();
            for word in words {
                trie.insert(word.as_bytes());
            }
            Self {
                trie,
                game_config: game_config::make_english_game_config(),
            }
        }

        fn anchor(&self, word: &str, row: i8, col: i8, orientation: Orientation) -> BoardWord {
            BoardWord::new(word, row, col, orientation, self.game_config.dim()).unwrap()
        }

        fn rack(&self, letters: &str) -> Rack {
            Rack::from_letters(letters, self.game_config.rack_size() as usize).unwrap()
        }

        fn search(
            &self,
            anchor: &BoardWord,
            rack: &mut Rack,
            which: fn(
                &mut WordFinder,
                &BoardSnapshot,
                &FaceValueScorer,
                &mut Rack,
            ) -> Option<Play>,
        ) -> Option<Play> {
            let board_snapshot = BoardSnapshot {
                trie: &self.trie,
                game_config: &self.game_config,
                anchor,
            };
            let scorer = FaceValueScorer::new(self.game_config.alphabet());
            let mut word_finder = WordFinder::new(&self.game_config);
            which(&mut word_finder, &board_snapshot, &scorer, rack)
        }
    }

    fn best(
        word_finder: &mut WordFinder,
        board_snapshot: &BoardSnapshot,
        scorer: &FaceValueScorer,
        rack: &mut Rack,
    ) -> Option<Play> {
        word_finder.find_best_move(board_snapshot, scorer, rack)
    }

    fn extension(
        word_finder: &mut WordFinder,
        board_snapshot: &BoardSnapshot,
        scorer: &FaceValueScorer,
        rack: &mut Rack,
    ) -> Option<Play> {
        word_finder.best_extension(board_snapshot, scorer, rack)
    }

    fn crossing(
        word_finder: &mut WordFinder,
        board_snapshot: &BoardSnapshot,
        scorer: &FaceValueScorer,
        rack: &mut Rack,
    ) -> Option<Play> {
        word_finder.best_crossing(board_snapshot, scorer, rack)
    }

    fn with_prefix(
        word_finder: &mut WordFinder,
        board_snapshot: &BoardSnapshot,
        scorer: &FaceValueScorer,
        rack: &mut Rack,
    ) -> Option<Play> {
        word_finder.best_with_prefix(board_snapshot, scorer, rack)
    }

    #[test]
    fn extends_with_suffix_from_rack() {
        let f = Fixture::new(&["CAT", "CATS", "CATERS"]);
        let anchor = f.anchor("CAT", 7, 7, Orientation::Horizontal);
        let mut rack = f.rack("S");
        let play = f.search(&anchor, &mut rack, extension).unwrap();
        assert_eq!(play.word, "CATS");
        assert_eq!((play.row, play.col), (7, 7));
        assert_eq!(play.orientation, Orientation::Horizontal);
        assert_eq!(play.squares().last(), Some((7, 10, b'S')));
        assert_eq!(rack.tiles(), b"S");
    }

    #[test]
    fn extension_never_returns_board_word() {
        let f = Fixture::new(&["CAT", "CATS"]);
        let anchor = f.anchor("CAT", 7, 7, Orientation::Horizontal);
        assert_eq!(f.search(&anchor, &mut f.rack("XYZ"), extension), None);
        assert_eq!(f.search(&anchor, &mut f.rack(""), best), None);
    }

    #[test]
    fn extension_respects_board_edge() {
        let f = Fixture::new(&["CAT", "CATS", "CATSS"]);
        // only one free square after T at column 14.
        let anchor = f.anchor("CAT", 3, 11, Orientation::Horizontal);
        let play = f.search(&anchor, &mut f.rack("SS"), extension).unwrap();
        assert_eq!(play.word, "CATS");
        // no free square at all.
        let anchor = f.anchor("CAT", 12, 3, Orientation::Vertical);
        assert_eq!(f.search(&anchor, &mut f.rack("SS"), extension), None);
    }

    #[test]
    fn crossing_starts_on_board_letter() {
        let f = Fixture::new(&["DOG", "GO"]);
        let anchor = f.anchor("DOG", 5, 5, Orientation::Horizontal);
        let mut rack = f.rack("GO");
        let play = f.search(&anchor, &mut rack, crossing).unwrap();
        assert_eq!(play.word, "GO");
        assert_eq!((play.row, play.col), (5, 7));
        assert_eq!(play.orientation, Orientation::Vertical);
        assert_eq!(rack.tiles(), b"GO");
    }

    #[test]
    fn crossing_a_vertical_word_runs_across() {
        let f = Fixture::new(&["DOG", "OX"]);
        let anchor = f.anchor("DOG", 2, 4, Orientation::Vertical);
        let play = f.search(&anchor, &mut f.rack("XQ"), crossing).unwrap();
        assert_eq!(play.word, "OX");
        assert_eq!((play.row, play.col), (3, 4));
        assert_eq!(play.orientation, Orientation::Horizontal);
    }

    #[test]
    fn crossing_does_not_reuse_board_word_text() {
        let f = Fixture::new(&["DOG"]);
        // D + O + G from the rack spells DOG down from the D.
        let anchor = f.anchor("DOG", 5, 5, Orientation::Horizontal);
        assert_eq!(f.search(&anchor, &mut f.rack("OG"), crossing), None);
    }

    #[test]
    fn prefix_before_board_word() {
        let f = Fixture::new(&["CAT", "SCAT", "SCATS"]);
        let anchor = f.anchor("CAT", 7, 7, Orientation::Horizontal);
        let mut rack = f.rack("SS");
        let play = f.search(&anchor, &mut rack, with_prefix).unwrap();
        assert_eq!(play.word, "SCATS");
        assert_eq!((play.row, play.col), (7, 6));
        assert_eq!(play.orientation, Orientation::Horizontal);
        assert_eq!(rack.tiles(), b"SS");
    }

    #[test]
    fn prefix_before_board_letter_goes_above_it() {
        let f = Fixture::new(&["DOG", "AGO"]);
        let anchor = f.anchor("DOG", 5, 5, Orientation::Horizontal);
        let play = f.search(&anchor, &mut f.rack("AO"), with_prefix).unwrap();
        assert_eq!(play.word, "AGO");
        assert_eq!((play.row, play.col), (4, 7));
        assert_eq!(play.orientation, Orientation::Vertical);
    }

    #[test]
    fn prefix_depth_is_bounded_by_space_before() {
        let f = Fixture::new(&["DOG", "AGO", "ZAGO"]);
        // one free row above the anchor: AGO fits, ZAGO does not.
        let anchor = f.anchor("DOG", 1, 5, Orientation::Horizontal);
        let play = f.search(&anchor, &mut f.rack("ZAO"), with_prefix).unwrap();
        assert_eq!(play.word, "AGO");
        assert_eq!(play.row, 0);
        // no room at all.
        let anchor = f.anchor("DOG", 0, 5, Orientation::Horizontal);
        assert_eq!(f.search(&anchor, &mut f.rack("ZAO"), with_prefix), None);
    }

    #[test]
    fn prefix_past_left_edge_is_dropped() {
        let f = Fixture::new(&["CAT", "SCAT"]);
        // SCAT would start at column -1.
        let anchor = f.anchor("CAT", 7, 0, Orientation::Horizontal);
        let mut rack = f.rack("S");
        assert_eq!(f.search(&anchor, &mut rack, with_prefix), None);
        assert_eq!(f.search(&anchor, &mut rack, best), None);
        assert_eq!(rack.tiles(), b"S");
    }

    #[test]
    fn vertical_anchor_prefix_goes_left_of_it() {
        let f = Fixture::new(&["DOG", "AGO", "ZAGO"]);
        // one free column before the anchor: AGO fits, ZAGO does not.
        let anchor = f.anchor("DOG", 5, 1, Orientation::Vertical);
        let mut rack = f.rack("ZAO");
        let prefixed = f.search(&anchor, &mut rack, with_prefix);
        let play = f.search(&anchor, &mut rack, best).unwrap();
        assert_eq!(prefixed.as_ref(), Some(&play));
        assert_eq!(play.word, "AGO");
        assert_eq!((play.row, play.col), (7, 0));
        assert_eq!(play.orientation, Orientation::Horizontal);
        assert_eq!(play.score, 4);
        assert_eq!(rack.tiles(), b"ZAO");
    }

    #[test]
    fn positive_crossing_skips_prefix_search() {
        let f = Fixture::new(&["DOG", "GO", "ZAGO"]);
        let anchor = f.anchor("DOG", 5, 5, Orientation::Horizontal);
        // ZAGO would score more but GO is found first and scores.
        let play = f.search(&anchor, &mut f.rack("ZAO"), best).unwrap();
        assert_eq!(play.word, "GO");
        let play = f.search(&anchor, &mut f.rack("ZAO"), with_prefix).unwrap();
        assert_eq!(play.word, "ZAGO");
    }

    #[test]
    fn falls_through_to_prefix_search() {
        let f = Fixture::new(&["DOG", "ZAGO"]);
        let anchor = f.anchor("DOG", 5, 5, Orientation::Horizontal);
        let play = f.search(&anchor, &mut f.rack("ZAO"), best).unwrap();
        assert_eq!(play.word, "ZAGO");
        assert_eq!((play.row, play.col), (3, 7));
    }

    #[test]
    fn blanks_are_never_played() {
        let f = Fixture::new(&["CAT", "CATS"]);
        let anchor = f.anchor("CAT", 7, 7, Orientation::Horizontal);
        let mut rack = f.rack("??");
        assert_eq!(f.search(&anchor, &mut rack, best), None);
        assert_eq!(rack.tiles(), &[BLANK, BLANK]);
    }

    #[test]
    fn duplicate_letters_can_both_be_used() {
        let f = Fixture::new(&["AB", "ABBA"]);
        let anchor = f.anchor("AB", 7, 7, Orientation::Horizontal);
        let mut rack = f.rack("BA");
        assert_eq!(f.search(&anchor, &mut rack, extension).unwrap().word, "ABBA");
        let anchor = f.anchor("AB", 7, 7, Orientation::Horizontal);
        let f = Fixture::new(&["AB", "ABEE"]);
        assert_eq!(f.search(&anchor, &mut f.rack("EE"), extension).unwrap().word, "ABEE");
        assert_eq!(f.search(&anchor, &mut f.rack("E"), extension), None);
    }
}
