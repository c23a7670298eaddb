// Copyright (C) 2020-2026 Andy Kurnia.

#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct Dim {
    pub rows: i8,
    pub cols: i8,
}

impl Dim {
    // number of squares in a line, across lines run along columns.
    #[inline(always)]
    pub fn lane_len(&self, down: bool) -> i8 {
        if down { self.rows } else { self.cols }
    }

    #[inline(always)]
    pub fn contains(&self, row: i8, col: i8) -> bool {
        row >= 0 && col >= 0 && row < self.rows && col < self.cols
    }

    #[inline(always)]
    pub fn at_row_col(&self, row: i8, col: i8) -> usize {
        (((row as isize) * (self.cols as isize)) + (col as isize)) as usize
    }

    #[inline(always)]
    pub fn num_squares(&self) -> usize {
        (self.rows as usize) * (self.cols as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_major_indexing() {
        let dim = Dim { rows: 15, cols: 15 };
        assert_eq!(dim.at_row_col(0, 0), 0);
        assert_eq!(dim.at_row_col(1, 0), 15);
        assert_eq!(dim.at_row_col(14, 14), 224);
        assert_eq!(dim.num_squares(), 225);
        assert!(dim.contains(7, 14));
        assert!(!dim.contains(-1, 3));
        assert!(!dim.contains(3, 15));
        assert_eq!(Dim { rows: 5, cols: 9 }.lane_len(true), 5);
        assert_eq!(Dim { rows: 5, cols: 9 }.lane_len(false), 9);
    }
}
