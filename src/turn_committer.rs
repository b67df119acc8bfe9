// Copyright (C) 2020-2026 Andy Kurnia.

use super::{board, dictionary, error, game_config, game_state, placement, word_scanner};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnOutcome {
    pub score: i16,
    pub bonus: i16,
    pub consumed: Vec<char>,
    // every word on the board after the placement.
    pub words: Vec<String>,
}

impl TurnOutcome {
    #[inline(always)]
    pub fn total(&self) -> i32 {
        self.score as i32 + self.bonus as i32
    }
}

// Speculate on a copy, validate the copy, then replay on the real board.
// Turns are serialized by the caller; nothing here locks.
pub struct TurnCommitter<'a> {
    game_config: &'a game_config::GameConfig<'a>,
    word_validator: &'a dyn dictionary::WordValidator,
}

impl<'a> TurnCommitter<'a> {
    pub fn new(
        game_config: &'a game_config::GameConfig<'a>,
        word_validator: &'a dyn dictionary::WordValidator,
    ) -> Self {
        Self {
            game_config,
            word_validator,
        }
    }

    // Runs the placement on copies of board and hand. Returns the outcome and
    // the board as it would look afterwards.
    pub fn speculate(
        &self,
        board: &board::Board,
        hand: &[char],
        request: &placement::PlacementRequest,
    ) -> Result<(placement::PlacementOutcome, board::Board), error::PlacementError> {
        let mut scratch_board = board.snapshot();
        let mut scratch_hand = hand.to_vec();
        let outcome = placement::attempt_placement(
            &mut scratch_board,
            request,
            self.game_config.alphabet(),
            &mut scratch_hand,
        )?;
        Ok((outcome, scratch_board))
    }

    pub fn validate(&self, scratch_board: &board::Board) -> Result<Vec<String>, error::PlacementError> {
        let words = word_scanner::extract_words(scratch_board);
        if let Some(bad) = words.iter().find(|word| !self.word_validator.is_valid(word)) {
            return Err(error::PlacementError::IllegalWord(bad.clone()));
        }
        Ok(words)
    }

    // speculate and validate without touching anything.
    pub fn check(
        &self,
        board: &board::Board,
        hand: &[char],
        request: &placement::PlacementRequest,
    ) -> Result<TurnOutcome, error::PlacementError> {
        let (outcome, scratch_board) = self.speculate(board, hand, request)?;
        let words = self.validate(&scratch_board)?;
        Ok(TurnOutcome {
            score: outcome.score,
            bonus: self
                .game_config
                .word_length_bonus(request.word.chars().count()),
            consumed: outcome.consumed,
            words,
        })
    }

    // All or nothing: on Err the board and the player are as they were.
    pub fn commit(
        &self,
        board: &mut board::Board,
        player: &mut game_state::GamePlayer,
        request: &placement::PlacementRequest,
    ) -> Result<TurnOutcome, error::PlacementError> {
        let checked = match self.check(board, &player.rack, request) {
            Ok(checked) => checked,
            Err(err) => {
                tracing::warn!(player = %player.name, %err, "placement rejected");
                return Err(err);
            }
        };
        tracing::debug!(
            player = %player.name,
            score = checked.score,
            words = ?checked.words,
            "speculation passed"
        );

        // same inputs as the speculative run, so this cannot fail.
        let outcome = placement::attempt_placement(
            board,
            request,
            self.game_config.alphabet(),
            &mut player.rack,
        )?;
        debug_assert_eq!(outcome.score, checked.score);
        debug_assert_eq!(outcome.consumed, checked.consumed);

        // a word laid over itself scores again every turn.
        player.score = player.score.saturating_add(checked.total());
        board.mark_not_empty();
        tracing::info!(
            player = %player.name,
            word = %request.word.to_ascii_uppercase(),
            score = checked.score,
            bonus = checked.bonus,
            total = player.score,
            "word committed"
        );
        Ok(checked)
    }
}
