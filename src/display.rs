// Copyright (C) 2020-2026 Andy Kurnia.

use super::{board, board_layout};
use std::fmt::Write;

#[inline(always)]
pub fn empty_label(powerup: board_layout::Powerup) -> char {
    match powerup {
        board_layout::Powerup::Center => '*',
        board_layout::Powerup::TripleWord => '=',
        board_layout::Powerup::DoubleWord => '-',
        board_layout::Powerup::TripleLetter => '"',
        board_layout::Powerup::DoubleLetter => '\'',
        board_layout::Powerup::None => ' ',
    }
}

#[inline(always)]
pub fn board_label(cell: &board::Cell) -> char {
    cell.letter().unwrap_or_else(|| empty_label(cell.powerup()))
}

fn fmt_column_header(s: &mut String, cols: i8) {
    s.push_str("  ");
    for c in 0..cols {
        s.push(' ');
        s.push(((c as u8) + 0x61) as char);
    }
    s.push('\n');
}

fn fmt_border(s: &mut String, cols: i8) {
    s.push_str("  +");
    for _ in 1..cols {
        s.push_str("--");
    }
    s.push_str("-+\n");
}

// rows numbered from 1, columns lettered from a.
pub fn fmt_board(board: &board::Board) -> String {
    let dim = board.dim();
    let mut s = String::new();
    fmt_column_header(&mut s, dim.cols);
    fmt_border(&mut s, dim.cols);
    for r in 0..dim.rows {
        let _ = write!(s, "{:2}|", r + 1);
        let strider = dim.across(r);
        for c in 0..strider.len() {
            if c > 0 {
                s.push(' ');
            }
            s.push(board_label(&board.cells()[strider.at(c)]));
        }
        let _ = writeln!(s, "|{}", r + 1);
    }
    fmt_border(&mut s, dim.cols);
    fmt_column_header(&mut s, dim.cols);
    s
}

pub fn print_board(board: &board::Board) {
    print!("{}", fmt_board(board));
}

pub fn fmt_hand(hand: &[char]) -> String {
    let mut s = String::with_capacity(hand.len() * 2);
    for (i, &tile) in hand.iter().enumerate() {
        if i > 0 {
            s.push(' ');
        }
        s.push(tile);
    }
    s
}
