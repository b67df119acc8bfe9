// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, board, error};

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Right,
    Down,
}

impl Direction {
    #[inline(always)]
    pub fn step(self) -> (isize, isize) {
        match self {
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
        }
    }
}

impl std::str::FromStr for Direction {
    type Err = error::MyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "r" | "right" => Ok(Direction::Right),
            "d" | "down" => Ok(Direction::Down),
            _ => Err(error::new(format!(
                "direction must be r(ight) or d(own), not {:?}",
                s
            ))),
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Right => write!(f, "right"),
            Direction::Down => write!(f, "down"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlacementRequest {
    pub row: isize,
    pub col: isize,
    pub direction: Direction,
    pub word: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlacementOutcome {
    pub score: i16,
    // hand tiles used, '*' where a blank stood in for a letter.
    pub consumed: Vec<char>,
    pub hits_center: bool,
    pub intersects: bool,
}

// exact letter first, then a blank. returns the tile taken.
pub fn take_tile(hand: &mut Vec<char>, letter: char) -> Option<char> {
    let pos = hand
        .iter()
        .rposition(|&t| t == letter)
        .or_else(|| hand.iter().rposition(|&t| t == alphabet::BLANK))?;
    Some(hand.remove(pos))
}

// Lays `request.word` onto `board` one letter at a time, drawing tiles for
// empty cells from `hand`, and scores it.
//
// Every letter of the word is scored with its cell's powerup, including
// letters already on the board. Blanks score as the letter they stand for.
// Letter powerups apply immediately; word powerups are collected and applied
// in order once the whole word is down.
//
// On error, `board` and `hand` may be partly modified. Callers run this on
// copies first.
pub fn attempt_placement(
    board: &mut board::Board,
    request: &PlacementRequest,
    alphabet: &alphabet::Alphabet,
    hand: &mut Vec<char>,
) -> Result<PlacementOutcome, error::PlacementError> {
    let was_empty = board.is_empty();
    let (step_row, step_col) = request.direction.step();
    let (mut row, mut col) = (request.row, request.col);
    let mut outcome = PlacementOutcome {
        score: 0,
        consumed: Vec::with_capacity(request.word.len()),
        hits_center: false,
        intersects: false,
    };
    let mut word_powerups = Vec::with_capacity(request.word.len());

    for c in request.word.chars() {
        let letter = c.to_ascii_uppercase();
        let face_value = alphabet
            .score(letter)
            .ok_or(error::PlacementError::UnknownLetter(c))? as i16;
        let cell = board
            .cell(row, col)
            .ok_or(error::PlacementError::OutOfBounds { row, col })?;
        match cell.letter() {
            Some(existing) => {
                if existing != letter {
                    return Err(error::PlacementError::Conflict {
                        row: row as i8,
                        col: col as i8,
                        existing,
                        wanted: letter,
                    });
                }
                outcome.intersects = true;
            }
            None => {
                let tile = take_tile(hand, letter)
                    .ok_or(error::PlacementError::TileUnavailable(letter))?;
                outcome.consumed.push(tile);
            }
        }

        let powerup = board.place(row, col, letter)?;
        if board.is_star(row as i8, col as i8) {
            outcome.hits_center = true;
        }
        let letter_multiplier = powerup.letter_multiplier();
        if letter_multiplier == 1 {
            word_powerups.push(powerup);
        }
        outcome.score += face_value * letter_multiplier;

        row += step_row;
        col += step_col;
    }

    for powerup in word_powerups {
        outcome.score *= powerup.word_multiplier();
    }

    if was_empty {
        if !outcome.hits_center {
            return Err(error::PlacementError::NotAnchored);
        }
    } else if !outcome.intersects {
        return Err(error::PlacementError::Disconnected);
    }
    Ok(outcome)
}
