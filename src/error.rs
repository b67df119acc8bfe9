// Copyright (C) 2020-2026 Andy Kurnia.

pub struct MyError {
    s: String,
}

impl std::fmt::Display for MyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.s)
    }
}

impl std::fmt::Debug for MyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        (self as &dyn std::fmt::Display).fmt(f)
    }
}

impl std::error::Error for MyError {}

pub fn new(s: String) -> MyError {
    MyError { s }
}

pub type BoxAnyError = Box<dyn std::error::Error>;
pub type Returns<T> = Result<T, BoxAnyError>;

#[macro_export]
macro_rules! return_error {
    ($error:expr) => {
        return Err($crate::error::new($error).into());
    };
}

// Expected rule rejections. None of these are fatal; the turn can be retried.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlacementError {
    OutOfBounds { row: isize, col: isize },
    Conflict { row: i8, col: i8, existing: char, wanted: char },
    TileUnavailable(char),
    UnknownLetter(char),
    NotAnchored,
    Disconnected,
    IllegalWord(String),
    NotStarted,
}

impl std::fmt::Display for PlacementError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlacementError::OutOfBounds { row, col } => {
                write!(f, "({}, {}) is off the board", row, col)
            }
            PlacementError::Conflict {
                row,
                col,
                existing,
                wanted,
            } => write!(
                f,
                "({}, {}) already holds {}, cannot place {}",
                row, col, existing, wanted
            ),
            PlacementError::TileUnavailable(c) => {
                write!(f, "no {} or blank left in hand", c)
            }
            PlacementError::UnknownLetter(c) => write!(f, "{:?} is not a playable letter", c),
            PlacementError::NotAnchored => write!(f, "the first word must cover the center"),
            PlacementError::Disconnected => {
                write!(f, "the word must connect to a word already on the board")
            }
            PlacementError::IllegalWord(word) => write!(f, "{} is not in the dictionary", word),
            PlacementError::NotStarted => write!(f, "the game has not started"),
        }
    }
}

impl std::error::Error for PlacementError {}
