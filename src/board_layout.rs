// Copyright (C) 2020-2026 Andy Kurnia.

use super::matrix;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Powerup {
    None,
    DoubleLetter,
    TripleLetter,
    DoubleWord,
    TripleWord,
    Center,
}

impl Powerup {
    #[inline(always)]
    pub fn letter_multiplier(self) -> i16 {
        match self {
            Powerup::DoubleLetter => 2,
            Powerup::TripleLetter => 3,
            _ => 1,
        }
    }

    #[inline(always)]
    pub fn word_multiplier(self) -> i16 {
        match self {
            Powerup::DoubleWord => 2,
            Powerup::TripleWord => 3,
            _ => 1,
        }
    }
}

use Powerup::{
    Center as CTR, DoubleLetter as DLS, DoubleWord as DWS, None as FVS, TripleLetter as TLS,
    TripleWord as TWS,
};

// Rows 0 to 7. Rows 8 to 14 mirror rows 6 to 0, so the layout is unchanged
// by a half turn.
static HALF_BOARD: [[Powerup; 15]; 8] = [
    [TWS, FVS, FVS, DLS, FVS, FVS, FVS, TWS, FVS, FVS, FVS, DLS, FVS, FVS, TWS],
    [FVS, DWS, FVS, FVS, FVS, FVS, FVS, FVS, FVS, FVS, FVS, FVS, FVS, DWS, FVS],
    [FVS, FVS, DWS, FVS, FVS, FVS, FVS, FVS, FVS, FVS, FVS, FVS, DWS, FVS, FVS],
    [DLS, FVS, FVS, DWS, FVS, FVS, FVS, FVS, FVS, FVS, FVS, DWS, FVS, FVS, DLS],
    [FVS, FVS, FVS, FVS, DWS, FVS, FVS, FVS, FVS, FVS, DWS, FVS, FVS, FVS, FVS],
    [FVS, TLS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, TLS, FVS],
    [FVS, FVS, DLS, FVS, FVS, FVS, DLS, FVS, DLS, FVS, FVS, FVS, DLS, FVS, FVS],
    [TWS, FVS, FVS, DLS, FVS, FVS, FVS, CTR, FVS, FVS, FVS, DLS, FVS, FVS, TWS],
];

pub struct BoardLayout {
    powerups: Box<[Powerup]>,
    dim: matrix::Dim,
    star_row: i8,
    star_col: i8,
}

impl BoardLayout {
    #[inline(always)]
    pub fn dim(&self) -> matrix::Dim {
        self.dim
    }

    #[inline(always)]
    pub fn star_row(&self) -> i8 {
        self.star_row
    }

    #[inline(always)]
    pub fn star_col(&self) -> i8 {
        self.star_col
    }

    #[inline(always)]
    pub fn powerups(&self) -> &[Powerup] {
        &self.powerups
    }

    #[inline(always)]
    pub fn powerup_at(&self, row: i8, col: i8) -> Powerup {
        self.powerups[self.dim.at_row_col(row, col)]
    }
}

pub fn make_standard_board_layout() -> BoardLayout {
    let dim = matrix::Dim { rows: 15, cols: 15 };
    let mut powerups = Vec::with_capacity(dim.num_cells());
    for row in 0..dim.rows as usize {
        powerups.extend_from_slice(&HALF_BOARD[row.min(dim.rows as usize - 1 - row)]);
    }
    BoardLayout {
        powerups: powerups.into_boxed_slice(),
        dim,
        star_row: 7,
        star_col: 7,
    }
}
