// Copyright (C) 2020-2026 Andy Kurnia.

use super::{board, matrix};

fn scan_lane(
    board: &board::Board,
    strider: &matrix::Strider,
    word: &mut String,
    words: &mut Vec<String>,
) {
    word.clear();
    for i in 0..strider.len() {
        match board.cells()[strider.at(i)].letter() {
            Some(c) => word.push(c),
            None => {
                if word.chars().count() > 1 {
                    words.push(word.clone());
                }
                word.clear();
            }
        }
    }
    if word.chars().count() > 1 {
        words.push(word.clone());
    }
}

// Every run of two or more letters: rows top to bottom, then columns left to
// right. Recomputed from scratch on each call.
pub fn extract_words(board: &board::Board) -> Vec<String> {
    let dim = board.dim();
    let mut words = Vec::new();
    let mut word = String::with_capacity(dim.rows.max(dim.cols) as usize);
    for down in [false, true] {
        let num_lanes = if down { dim.cols } else { dim.rows };
        for lane in 0..num_lanes {
            scan_lane(board, &dim.lane(down, lane), &mut word, &mut words);
        }
    }
    words
}
