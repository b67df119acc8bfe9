// Copyright (C) 2020-2026 Andy Kurnia.

use wordgrid::{board, dictionary, error, game_config, placement, return_error, turn_committer};

// board: one string per row, '.' for an empty cell.
// row, col: 0-based start of the word.
// words: the dictionary to validate against.
#[derive(serde::Deserialize)]
struct Question {
    board: Vec<String>,
    hand: String,
    row: isize,
    col: isize,
    direction: placement::Direction,
    word: String,
    words: Vec<String>,
}

#[derive(Debug, PartialEq, serde::Serialize)]
struct Answer {
    ok: bool,
    score: i16,
    bonus: i16,
    consumed: String,
    words: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
}

fn build_board(game_config: &game_config::GameConfig, rows: &[String]) -> error::Returns<board::Board> {
    let mut board = board::Board::new(game_config.board_layout());
    let dim = board.dim();
    if rows.len() != dim.rows as usize {
        return_error!(format!("board needs {} rows, got {}", dim.rows, rows.len()));
    }
    let mut any_letter = false;
    for (r, line) in (0..).zip(rows.iter()) {
        if line.chars().count() != dim.cols as usize {
            return_error!(format!("row {} needs {} cells: {:?}", r + 1, dim.cols, line));
        }
        for (c, letter) in (0..).zip(line.chars()) {
            if letter == '.' {
                continue;
            }
            if game_config.alphabet().score(letter).is_none() {
                return_error!(format!("bad letter {:?} on row {}", letter, r + 1));
            }
            board.place(r, c, letter)?;
            any_letter = true;
        }
    }
    if any_letter {
        board.mark_not_empty();
    }
    Ok(board)
}

fn answer(question: &Question) -> error::Returns<Answer> {
    let game_config = game_config::make_english_game_config(2)?;
    let dictionary = dictionary::Dictionary::from_words(&question.words);
    let committer = turn_committer::TurnCommitter::new(&game_config, &dictionary);
    let board = build_board(&game_config, &question.board)?;
    let hand = question
        .hand
        .chars()
        .map(|c| c.to_ascii_uppercase())
        .collect::<Vec<_>>();
    let request = placement::PlacementRequest {
        row: question.row,
        col: question.col,
        direction: question.direction,
        word: question.word.clone(),
    };
    Ok(match committer.check(&board, &hand, &request) {
        Ok(outcome) => Answer {
            ok: true,
            score: outcome.score,
            bonus: outcome.bonus,
            consumed: outcome.consumed.iter().collect(),
            words: outcome.words,
            reason: None,
        },
        Err(err) => Answer {
            ok: false,
            score: 0,
            bonus: 0,
            consumed: String::new(),
            words: Vec::new(),
            reason: Some(err.to_string()),
        },
    })
}

fn main() -> error::Returns<()> {
    wordgrid::init_logging();
    let data = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(path)?,
        None => std::io::read_to_string(std::io::stdin())?,
    };
    let question = serde_json::from_str::<Question>(&data)?;
    let answer = answer(&question)?;
    tracing::debug!(ok = answer.ok, score = answer.score, "answered");
    println!("{}", serde_json::to_string_pretty(&answer)?);
    Ok(())
}
