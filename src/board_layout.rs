// Copyright (C) 2020-2026 Andy Kurnia.

use super::matrix;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Premium {
    pub word_multiplier: i8,
    pub tile_multiplier: i8,
}

static TWS: Premium = Premium {
    word_multiplier: 3,
    tile_multiplier: 1,
};
static DWS: Premium = Premium {
    word_multiplier: 2,
    tile_multiplier: 1,
};
static TLS: Premium = Premium {
    word_multiplier: 1,
    tile_multiplier: 3,
};
static DLS: Premium = Premium {
    word_multiplier: 1,
    tile_multiplier: 2,
};
static FVS: Premium = Premium {
    word_multiplier: 1,
    tile_multiplier: 1,
};

pub struct StaticBoardLayout {
    premiums: Box<[Premium]>,
    dim: matrix::Dim,
    star_row: i8,
    star_col: i8,
}

pub enum BoardLayout {
    Static(StaticBoardLayout),
}

impl BoardLayout {
    #[inline(always)]
    pub fn dim(&self) -> matrix::Dim {
        match self {
            BoardLayout::Static(x) => x.dim,
        }
    }

    #[inline(always)]
    pub fn star_row(&self) -> i8 {
        match self {
            BoardLayout::Static(x) => x.star_row,
        }
    }

    #[inline(always)]
    pub fn star_col(&self) -> i8 {
        match self {
            BoardLayout::Static(x) => x.star_col,
        }
    }

    #[inline(always)]
    pub fn premiums(&self) -> &[Premium] {
        match self {
            BoardLayout::Static(x) => &x.premiums,
        }
    }

    #[inline(always)]
    pub fn premium_at(&self, row: i8, col: i8) -> Premium {
        self.premiums()[self.dim().at_row_col(row, col)]
    }
}

pub fn make_standard_board_layout() -> BoardLayout {
    BoardLayout::Static(StaticBoardLayout {
        premiums: Box::new([
            TWS, FVS, FVS, DLS, FVS, FVS, FVS, TWS, FVS, FVS, FVS, DLS, FVS, FVS, TWS, //
            FVS, DWS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, DWS, FVS, //
            FVS, FVS, DWS, FVS, FVS, FVS, DLS, FVS, DLS, FVS, FVS, FVS, DWS, FVS, FVS, //
            DLS, FVS, FVS, DWS, FVS, FVS, FVS, DLS, FVS, FVS, FVS, DWS, FVS, FVS, DLS, //
            FVS, FVS, FVS, FVS, DWS, FVS, FVS, FVS, FVS, FVS, DWS, FVS, FVS, FVS, FVS, //
            FVS, TLS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, TLS, FVS, //
            FVS, FVS, DLS, FVS, FVS, FVS, DLS, FVS, DLS, FVS, FVS, FVS, DLS, FVS, FVS, //
            TWS, FVS, FVS, DLS, FVS, FVS, FVS, DWS, FVS, FVS, FVS, DLS, FVS, FVS, TWS, //
            FVS, FVS, DLS, FVS, FVS, FVS, DLS, FVS, DLS, FVS, FVS, FVS, DLS, FVS, FVS, //
            FVS, TLS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, TLS, FVS, //
            FVS, FVS, FVS, FVS, DWS, FVS, FVS, FVS, FVS, FVS, DWS, FVS, FVS, FVS, FVS, //
            DLS, FVS, FVS, DWS, FVS, FVS, FVS, DLS, FVS, FVS, FVS, DWS, FVS, FVS, DLS, //
            FVS, FVS, DWS, FVS, FVS, FVS, DLS, FVS, DLS, FVS, FVS, FVS, DWS, FVS, FVS, //
            FVS, DWS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, DWS, FVS, //
            TWS, FVS, FVS, DLS, FVS, FVS, FVS, TWS, FVS, FVS, FVS, DLS, FVS, FVS, TWS, //
        ]),
        dim: matrix::Dim { rows: 15, cols: 15 },
        star_row: 7,
        star_col: 7,
    })
}

// no premiums anywhere, handy when only face values should count.
pub fn make_plain_board_layout(rows: i8, cols: i8) -> BoardLayout {
    let dim = matrix::Dim { rows, cols };
    BoardLayout::Static(StaticBoardLayout {
        premiums: vec![FVS; dim.num_squares()].into_boxed_slice(),
        dim,
        star_row: rows / 2,
        star_col: cols / 2,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_layout_is_symmetric() {
        let layout = make_standard_board_layout();
        let dim = layout.dim();
        assert_eq!(layout.premiums().len(), dim.num_squares());
        for r in 0..dim.rows {
            for c in 0..dim.cols {
                assert_eq!(layout.premium_at(r, c), layout.premium_at(c, r));
                assert_eq!(
                    layout.premium_at(r, c),
                    layout.premium_at(dim.rows - 1 - r, dim.cols - 1 - c)
                );
            }
        }
        assert_eq!(layout.premium_at(0, 0), TWS);
        assert_eq!(layout.premium_at(layout.star_row(), layout.star_col()), DWS);
        assert_eq!(layout.premium_at(1, 5), TLS);
    }

    #[test]
    fn plain_layout_has_no_premiums() {
        let layout = make_plain_board_layout(5, 7);
        assert_eq!(layout.dim(), matrix::Dim { rows: 5, cols: 7 });
        assert!(layout.premiums().iter().all(|&p| p == FVS));
        assert_eq!((layout.star_row(), layout.star_col()), (2, 3));
    }
}
