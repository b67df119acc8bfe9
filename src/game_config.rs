// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, board_layout, error};

pub struct StaticGameConfig<'a> {
    alphabet: &'a alphabet::Alphabet<'a>,
    board_layout: board_layout::BoardLayout,
    rack_size: u8,
    num_players: u8,
    num_passes_per_player_to_end: u8,
    bingo_length: usize,
    bingo_bonus: i16,
    max_name_len: usize,
}

pub enum GameConfig<'a> {
    Static(StaticGameConfig<'a>),
}

impl<'a> GameConfig<'a> {
    #[inline(always)]
    pub fn alphabet(&self) -> &alphabet::Alphabet<'a> {
        match self {
            GameConfig::Static(x) => x.alphabet,
        }
    }

    #[inline(always)]
    pub fn board_layout(&self) -> &board_layout::BoardLayout {
        match self {
            GameConfig::Static(x) => &x.board_layout,
        }
    }

    #[inline(always)]
    pub fn rack_size(&self) -> u8 {
        match self {
            GameConfig::Static(x) => x.rack_size,
        }
    }

    #[inline(always)]
    pub fn num_players(&self) -> u8 {
        match self {
            GameConfig::Static(x) => x.num_players,
        }
    }

    // consecutive passes that end the game.
    #[inline(always)]
    pub fn num_passes_to_end(&self) -> u8 {
        match self {
            GameConfig::Static(x) => x.num_players * x.num_passes_per_player_to_end,
        }
    }

    #[inline(always)]
    pub fn max_name_len(&self) -> usize {
        match self {
            GameConfig::Static(x) => x.max_name_len,
        }
    }

    // keyed on the length of the word as typed, not on tiles played.
    #[inline(always)]
    pub fn word_length_bonus(&self, word_len: usize) -> i16 {
        match self {
            GameConfig::Static(x) => {
                if word_len == x.bingo_length {
                    x.bingo_bonus
                } else {
                    0
                }
            }
        }
    }
}

pub fn make_english_game_config<'a>(num_players: u8) -> error::Returns<GameConfig<'a>> {
    if !(2..=4).contains(&num_players) {
        return_error!(format!("need 2 to 4 players, not {}", num_players));
    }
    Ok(GameConfig::Static(StaticGameConfig {
        alphabet: &alphabet::ENGLISH_ALPHABET,
        board_layout: board_layout::make_standard_board_layout(),
        rack_size: 7,
        num_players,
        num_passes_per_player_to_end: 2,
        bingo_length: 7,
        bingo_bonus: 50,
        max_name_len: 24,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_config_defaults() {
        let game_config = make_english_game_config(3).unwrap();
        assert_eq!(game_config.rack_size(), 7);
        assert_eq!(game_config.num_players(), 3);
        assert_eq!(game_config.num_passes_to_end(), 6);
        assert_eq!(game_config.max_name_len(), 24);
        assert_eq!(game_config.alphabet().num_tiles(), 100);
        assert_eq!(game_config.board_layout().dim().rows, 15);
    }

    #[test]
    fn bonus_only_for_seven_letters() {
        let game_config = make_english_game_config(2).unwrap();
        assert_eq!(game_config.word_length_bonus(7), 50);
        assert_eq!(game_config.word_length_bonus(6), 0);
        assert_eq!(game_config.word_length_bonus(8), 0);
    }

    #[test]
    fn player_count_is_bounded() {
        assert!(make_english_game_config(1).is_err());
        assert!(make_english_game_config(5).is_err());
        assert!(make_english_game_config(4).is_ok());
    }
}
