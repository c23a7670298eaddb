// Copyright (C) 2020-2026 Andy Kurnia.

use super::play::{BoardWord, Play};
use super::{board_layout, matrix};
use std::fmt::Write;

#[inline(always)]
pub fn empty_label(board_layout: &board_layout::BoardLayout, row: i8, col: i8) -> &'static str {
    if row == board_layout.star_row() && col == board_layout.star_col() {
        return "*";
    }
    let premium = board_layout.premium_at(row, col);
    match (premium.word_multiplier, premium.tile_multiplier) {
        (3, _) => "=",
        (2, _) => "-",
        (_, 3) => "\"",
        (_, 2) => "\'",
        _ => " ",
    }
}

// letters of the anchor in uppercase, newly placed letters in lowercase.
fn overlay(dim: matrix::Dim, anchor: Option<&BoardWord>, play: Option<&Play>) -> Vec<u8> {
    let mut board_tiles = vec![0u8; dim.num_squares()];
    if let Some(anchor) = anchor {
        let (dr, dc) = if anchor.orientation().is_down() { (1, 0) } else { (0, 1) };
        for (i, &letter) in anchor.word().iter().enumerate() {
            let row = anchor.row() + dr * i as i8;
            let col = anchor.col() + dc * i as i8;
            board_tiles[dim.at_row_col(row, col)] = letter;
        }
    }
    if let Some(play) = play {
        for (row, col, letter) in play.squares() {
            if dim.contains(row, col) {
                let square = &mut board_tiles[dim.at_row_col(row, col)];
                if *square == 0 {
                    *square = letter.to_ascii_lowercase();
                }
            }
        }
    }
    board_tiles
}

fn write_col_labels(s: &mut String, dim: matrix::Dim) -> std::fmt::Result {
    write!(s, "  ")?;
    for c in 0..dim.cols {
        write!(s, " {}", ((c as u8) + 0x61) as char)?;
    }
    writeln!(s)
}

fn write_border(s: &mut String, dim: matrix::Dim) -> std::fmt::Result {
    write!(s, "  +")?;
    for _ in 1..dim.cols {
        write!(s, "--")?;
    }
    writeln!(s, "-+")
}

pub fn render_board(
    board_layout: &board_layout::BoardLayout,
    anchor: Option<&BoardWord>,
    play: Option<&Play>,
) -> Result<String, std::fmt::Error> {
    let dim = board_layout.dim();
    let board_tiles = overlay(dim, anchor, play);
    let mut s = String::new();
    write_col_labels(&mut s, dim)?;
    write_border(&mut s, dim)?;
    for r in 0..dim.rows {
        write!(s, "{:2}|", r + 1)?;
        for c in 0..dim.cols {
            if c > 0 {
                s.push(' ');
            }
            match board_tiles[dim.at_row_col(r, c)] {
                0 => s.push_str(empty_label(board_layout, r, c)),
                letter => s.push(letter as char),
            }
        }
        writeln!(s, "|{}", r + 1)?;
    }
    write_border(&mut s, dim)?;
    write_col_labels(&mut s, dim)?;
    Ok(s)
}

pub fn print_board(
    board_layout: &board_layout::BoardLayout,
    anchor: Option<&BoardWord>,
    play: Option<&Play>,
) {
    match render_board(board_layout, anchor, play) {
        Ok(s) => print!("{}", s),
        Err(e) => log::warn!("cannot render board: {}", e),
    }
}
