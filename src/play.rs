// Copyright (C) 2020-2026 Andy Kurnia.

use super::alphabet::ALPHABET_INDEX;
use super::{error, matrix};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    #[inline(always)]
    pub fn is_down(self) -> bool {
        matches!(self, Orientation::Vertical)
    }

    #[inline(always)]
    pub fn perpendicular(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }
}

impl std::str::FromStr for Orientation {
    type Err = error::BoxAnyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "h" | "H" | "across" | "horizontal" => Ok(Orientation::Horizontal),
            "v" | "V" | "down" | "vertical" => Ok(Orientation::Vertical),
            _ => Err(error::new(format!("invalid orientation {:?}", s)).into()),
        }
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Orientation::Horizontal => "h",
            Orientation::Vertical => "v",
        })
    }
}

/// The word already on the board that every placement hooks onto.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardWord {
    word: Box<[u8]>,
    row: i8,
    col: i8,
    orientation: Orientation,
}

impl BoardWord {
    // validates letters and bounds. the word is uppercased.
    pub fn new(
        word: &str,
        row: i8,
        col: i8,
        orientation: Orientation,
        dim: matrix::Dim,
    ) -> error::Returns<Self> {
        if word.is_empty() {
            return_error!("board word is empty".into());
        }
        let word = word.to_ascii_uppercase().into_bytes();
        if let Some(&bad) = word.iter().find(|&&b| !ALPHABET_INDEX.contains(b)) {
            return_error!(format!(
                "invalid letter {:?} in board word {:?}",
                bad as char,
                String::from_utf8_lossy(&word)
            ));
        }
        let len = word.len() as isize;
        let (last_row, last_col) = if orientation.is_down() {
            (row as isize + len - 1, col as isize)
        } else {
            (row as isize, col as isize + len - 1)
        };
        if !dim.contains(row, col)
            || last_row >= dim.rows as isize
            || last_col >= dim.cols as isize
        {
            return_error!(format!(
                "board word {:?} at ({}, {}) {} does not fit on a {}x{} board",
                String::from_utf8_lossy(&word),
                row,
                col,
                orientation,
                dim.rows,
                dim.cols
            ));
        }
        Ok(Self {
            word: word.into_boxed_slice(),
            row,
            col,
            orientation,
        })
    }

    #[inline(always)]
    pub fn word(&self) -> &[u8] {
        &self.word
    }

    #[inline(always)]
    pub fn row(&self) -> i8 {
        self.row
    }

    #[inline(always)]
    pub fn col(&self) -> i8 {
        self.col
    }

    #[inline(always)]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    // whether (row, col) is one of the anchor's squares.
    pub fn covers(&self, row: i8, col: i8) -> bool {
        let len = self.word.len() as isize;
        if self.orientation.is_down() {
            col == self.col
                && (row as isize) >= self.row as isize
                && (row as isize) < self.row as isize + len
        } else {
            row == self.row
                && (col as isize) >= self.col as isize
                && (col as isize) < self.col as isize + len
        }
    }
}

/// A placement found by the search.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Play {
    pub word: String,
    pub row: i8,
    pub col: i8,
    pub orientation: Orientation,
    pub score: i32,
}

impl Play {
    #[inline(always)]
    pub fn word_bytes(&self) -> &[u8] {
        self.word.as_bytes()
    }

    // squares in reading order.
    pub fn squares(&self) -> impl Iterator<Item = (i8, i8, u8)> + '_ {
        let (dr, dc) = if self.orientation.is_down() {
            (1, 0)
        } else {
            (0, 1)
        };
        self.word
            .bytes()
            .enumerate()
            .map(move |(i, b)| (self.row + dr * i as i8, self.col + dc * i as i8, b))
    }
}

// 8H for across (row number, column letter), H8 for down.
pub fn fmt_coordinates(row: i8, col: i8, orientation: Orientation) -> String {
    let col_label = (b'A' + col as u8) as char;
    if orientation.is_down() {
        format!("{}{}", col_label, row + 1)
    } else {
        format!("{}{}", row + 1, col_label)
    }
}

impl std::fmt::Display for Play {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {}",
            fmt_coordinates(self.row, self.col, self.orientation),
            self.word,
            self.score
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static DIM: matrix::Dim = matrix::Dim { rows: 15, cols: 15 };

    #[test]
    fn orientation_parsing() {
        assert_eq!("h".parse::<Orientation>().unwrap(), Orientation::Horizontal);
        assert_eq!("down".parse::<Orientation>().unwrap(), Orientation::Vertical);
        assert!("x".parse::<Orientation>().is_err());
        assert_eq!(Orientation::Horizontal.perpendicular(), Orientation::Vertical);
        assert_eq!(Orientation::Vertical.to_string(), "v");
    }

    #[test]
    fn board_word_validation() {
        let w = BoardWord::new("cat", 7, 7, Orientation::Horizontal, DIM).unwrap();
        assert_eq!(w.word(), b"CAT");
        assert!(BoardWord::new("", 7, 7, Orientation::Horizontal, DIM).is_err());
        assert!(BoardWord::new("C4T", 7, 7, Orientation::Horizontal, DIM).is_err());
        assert!(BoardWord::new("CAT", 7, 13, Orientation::Horizontal, DIM).is_err());
        assert!(BoardWord::new("CAT", 13, 7, Orientation::Vertical, DIM).is_err());
        assert!(BoardWord::new("CAT", 12, 7, Orientation::Vertical, DIM).is_ok());
        assert!(BoardWord::new("CAT", -1, 7, Orientation::Horizontal, DIM).is_err());
    }

    #[test]
    fn covers_only_anchor_squares() {
        let w = BoardWord::new("DOG", 5, 5, Orientation::Horizontal, DIM).unwrap();
        assert!(w.covers(5, 5));
        assert!(w.covers(5, 7));
        assert!(!w.covers(5, 8));
        assert!(!w.covers(6, 6));
        let v = BoardWord::new("DOG", 5, 5, Orientation::Vertical, DIM).unwrap();
        assert!(v.covers(7, 5));
        assert!(!v.covers(5, 6));
    }

    #[test]
    fn play_display_and_squares() {
        let play = Play {
            word: "CATS".into(),
            row: 7,
            col: 7,
            orientation: Orientation::Horizontal,
            score: 6,
        };
        assert_eq!(play.to_string(), "8H CATS 6");
        assert_eq!(play.squares().last(), Some((7, 10, b'S')));
        let down = Play {
            word: "GO".into(),
            row: 5,
            col: 6,
            orientation: Orientation::Vertical,
            score: 3,
        };
        assert_eq!(down.to_string(), "G6 GO 3");
        assert_eq!(down.squares().collect::<Vec<_>>(), vec![(5, 6, b'G'), (6, 6, b'O')]);
    }

    #[test]
    fn play_serializes_to_json() {
        let play = Play {
            word: "GO".into(),
            row: 5,
            col: 6,
            orientation: Orientation::Vertical,
            score: 3,
        };
        assert_eq!(
            serde_json::to_string(&play).unwrap(),
            r#"{"word":"GO","row":5,"col":6,"orientation":"vertical","score":3}"#
        );
    }
}
