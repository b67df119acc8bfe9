// Copyright (C) 2020-2026 Andy Kurnia.

use super::{board_layout, error, matrix};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    powerup: board_layout::Powerup,
    letter: Option<char>,
}

impl Cell {
    #[inline(always)]
    pub fn powerup(&self) -> board_layout::Powerup {
        self.powerup
    }

    #[inline(always)]
    pub fn letter(&self) -> Option<char> {
        self.letter
    }
}

// Clone is the snapshot used for speculative placement; nothing is shared.
#[derive(Clone, Debug)]
pub struct Board {
    cells: Box<[Cell]>,
    dim: matrix::Dim,
    star_row: i8,
    star_col: i8,
    empty: bool,
}

impl Board {
    pub fn new(board_layout: &board_layout::BoardLayout) -> Self {
        Self {
            cells: board_layout
                .powerups()
                .iter()
                .map(|&powerup| Cell {
                    powerup,
                    letter: None,
                })
                .collect(),
            dim: board_layout.dim(),
            star_row: board_layout.star_row(),
            star_col: board_layout.star_col(),
            empty: true,
        }
    }

    #[inline(always)]
    pub fn dim(&self) -> matrix::Dim {
        self.dim
    }

    #[inline(always)]
    pub fn is_star(&self, row: i8, col: i8) -> bool {
        row == self.star_row && col == self.star_col
    }

    // true until the first committed turn, whatever the cells say.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.empty
    }

    pub fn mark_not_empty(&mut self) {
        self.empty = false;
    }

    #[inline(always)]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cell(&self, row: isize, col: isize) -> Option<&Cell> {
        if self.dim.contains(row, col) {
            Some(&self.cells[self.dim.at_row_col(row as i8, col as i8)])
        } else {
            None
        }
    }

    pub fn letter_at(&self, row: isize, col: isize) -> Option<char> {
        self.cell(row, col).and_then(|cell| cell.letter)
    }

    pub fn snapshot(&self) -> Self {
        self.clone()
    }

    // A cell takes one letter for the life of the board. Placing the same
    // letter again is a no-op.
    pub fn place(
        &mut self,
        row: isize,
        col: isize,
        letter: char,
    ) -> Result<board_layout::Powerup, error::PlacementError> {
        if !self.dim.contains(row, col) {
            return Err(error::PlacementError::OutOfBounds { row, col });
        }
        let letter = letter.to_ascii_uppercase();
        let cell = &mut self.cells[self.dim.at_row_col(row as i8, col as i8)];
        match cell.letter {
            Some(existing) if existing != letter => Err(error::PlacementError::Conflict {
                row: row as i8,
                col: col as i8,
                existing,
                wanted: letter,
            }),
            _ => {
                cell.letter = Some(letter);
                Ok(cell.powerup)
            }
        }
    }
}
