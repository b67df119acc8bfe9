// Copyright (C) 2020-2026 Andy Kurnia.

use super::{bag, board, error, game_config, placement, turn_committer};
use rand::prelude::*;

fn use_tiles<II: IntoIterator<Item = char>>(rack: &mut Vec<char>, tiles_iter: II) -> error::Returns<()> {
    for tile in tiles_iter {
        let tile = tile.to_ascii_uppercase();
        let pos = rack
            .iter()
            .rposition(|&t| t == tile)
            .ok_or_else(|| error::new(format!("no {} in hand", tile)))?;
        rack.remove(pos);
    }
    Ok(())
}

#[derive(Clone, Debug)]
pub struct GamePlayer {
    pub name: String,
    pub score: i32,
    pub rack: Vec<char>,
}

#[derive(Clone)]
pub struct GameState<'a> {
    pub game_config: &'a game_config::GameConfig<'a>,
    pub players: Vec<GamePlayer>,
    pub board: board::Board,
    pub bag: bag::Bag,
    pub turn: u8,
    pub consecutive_passes: u8,
    pub started: bool,
}

impl<'a> GameState<'a> {
    pub fn new(game_config: &'a game_config::GameConfig) -> Self {
        Self {
            game_config,
            players: Vec::with_capacity(game_config.num_players() as usize),
            board: board::Board::new(game_config.board_layout()),
            bag: bag::Bag::new(game_config.alphabet()),
            turn: 0,
            consecutive_passes: 0,
            started: false,
        }
    }

    pub fn add_player(&mut self, name: &str) -> error::Returns<()> {
        if self.started {
            return_error!("game already started".into());
        }
        if self.players.len() >= self.game_config.num_players() as usize {
            return_error!(format!(
                "already have {} players",
                self.game_config.num_players()
            ));
        }
        let name_len = name.chars().count();
        if name_len == 0 {
            return_error!("name is too short".into());
        }
        if name_len > self.game_config.max_name_len() {
            return_error!("name is too long".into());
        }
        if name.chars().any(|c| c.is_control()) {
            return_error!("name must be printable".into());
        }
        self.players.push(GamePlayer {
            name: name.to_string(),
            score: 0,
            rack: Vec::with_capacity(self.game_config.rack_size() as usize),
        });
        Ok(())
    }

    pub fn start(&mut self, rng: &mut dyn RngCore) -> error::Returns<()> {
        if self.started {
            return_error!("game already started".into());
        }
        if self.players.len() != self.game_config.num_players() as usize {
            return_error!(format!(
                "need {} players, have {}",
                self.game_config.num_players(),
                self.players.len()
            ));
        }
        self.bag.shuffle(rng);
        let rack_size = self.game_config.rack_size() as usize;
        for player in self.players.iter_mut() {
            self.bag.replenish(&mut player.rack, rack_size);
        }
        self.started = true;
        tracing::info!(players = self.players.len(), "game started");
        Ok(())
    }

    // None until the game has started.
    pub fn current_player(&self) -> Option<&GamePlayer> {
        if !self.started {
            return None;
        }
        self.players.get(self.turn as usize)
    }

    pub fn next_turn(&mut self) {
        self.turn += 1;
        if self.turn as usize >= self.players.len() {
            self.turn = 0;
        }
    }

    // Places a word for the current player. On success the hand is topped up
    // from the bag; on rejection nothing changes.
    pub fn play_word(
        &mut self,
        committer: &turn_committer::TurnCommitter,
        request: &placement::PlacementRequest,
    ) -> Result<turn_committer::TurnOutcome, error::PlacementError> {
        if !self.started {
            return Err(error::PlacementError::NotStarted);
        }
        let current_player = &mut self.players[self.turn as usize];
        let outcome = committer.commit(&mut self.board, current_player, request)?;
        self.bag.replenish(
            &mut current_player.rack,
            self.game_config.rack_size() as usize,
        );
        self.consecutive_passes = 0;
        Ok(outcome)
    }

    // Trades tiles with the bag in one step: the replacements are drawn
    // before the old tiles go back in, so a tile is never swapped for itself.
    pub fn swap(&mut self, rng: &mut dyn RngCore, tiles: &[char]) -> error::Returns<()> {
        if !self.started {
            return_error!("game has not started".into());
        }
        let current_player = &mut self.players[self.turn as usize];
        if tiles.is_empty() || tiles.len() >= current_player.rack.len() {
            return_error!(format!(
                "can swap 1 to {} tiles",
                current_player.rack.len().saturating_sub(1)
            ));
        }
        if tiles.len() > self.bag.len() {
            return_error!(format!("only {} tiles left in bag", self.bag.len()));
        }
        let mut new_rack = current_player.rack.clone();
        use_tiles(&mut new_rack, tiles.iter().copied())?;
        new_rack.extend(self.bag.draw(tiles.len()));
        let returned = tiles
            .iter()
            .map(|c| c.to_ascii_uppercase())
            .collect::<Vec<_>>();
        self.bag.put_back(rng, &returned);
        current_player.rack = new_rack;
        self.consecutive_passes = 0;
        tracing::info!(player = %current_player.name, count = tiles.len(), "tiles swapped");
        Ok(())
    }

    // a forfeited turn counts too.
    pub fn pass(&mut self) {
        self.consecutive_passes += 1;
        tracing::info!(
            player = self.current_player().map(|player| player.name.as_str()),
            passes = self.consecutive_passes,
            "turn passed"
        );
    }

    pub fn is_game_over(&self) -> bool {
        (self.bag.is_empty() && self.players.iter().any(|player| player.rack.is_empty()))
            || self.consecutive_passes >= self.game_config.num_passes_to_end()
    }

    // highest score first, ties in seating order.
    pub fn final_standings(&self) -> Vec<&GamePlayer> {
        let mut standings = self.players.iter().collect::<Vec<_>>();
        standings.sort_by(|a, b| b.score.cmp(&a.score));
        standings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary;
    use crate::placement::Direction;

    fn started_game<'a>(game_config: &'a game_config::GameConfig<'a>) -> GameState<'a> {
        let mut rng = rand_chacha::ChaCha20Rng::seed_from_u64(42);
        let mut game_state = GameState::new(game_config);
        game_state.add_player("Nonni").unwrap();
        game_state.add_player("Adam").unwrap();
        game_state.start(&mut rng).unwrap();
        game_state
    }

    #[test]
    fn start_deals_seven_each() {
        let game_config = game_config::make_english_game_config(2).unwrap();
        let game_state = started_game(&game_config);
        assert!(game_state.players.iter().all(|p| p.rack.len() == 7));
        assert_eq!(game_state.bag.len(), 86);
        assert!(!game_state.is_game_over());
    }

    #[test]
    fn player_names_are_checked() {
        let game_config = game_config::make_english_game_config(2).unwrap();
        let mut game_state = GameState::new(&game_config);
        assert!(game_state.add_player("").is_err());
        assert!(game_state.add_player(&"x".repeat(25)).is_err());
        assert!(game_state.add_player("tab\there").is_err());
        assert!(game_state.add_player(&"x".repeat(24)).is_ok());
        assert!(game_state.add_player("Adam").is_ok());
        assert!(game_state.add_player("Third").is_err());
    }

    #[test]
    fn start_requires_all_players() {
        let game_config = game_config::make_english_game_config(3).unwrap();
        let mut rng = rand_chacha::ChaCha20Rng::seed_from_u64(1);
        let mut game_state = GameState::new(&game_config);
        game_state.add_player("A").unwrap();
        assert!(game_state.start(&mut rng).is_err());
    }

    #[test]
    fn turns_wrap_around() {
        let game_config = game_config::make_english_game_config(2).unwrap();
        let mut game_state = started_game(&game_config);
        assert_eq!(game_state.current_player().unwrap().name, "Nonni");
        game_state.next_turn();
        assert_eq!(game_state.current_player().unwrap().name, "Adam");
        game_state.next_turn();
        assert_eq!(game_state.current_player().unwrap().name, "Nonni");
    }

    #[test]
    fn turns_need_a_started_game() {
        let game_config = game_config::make_english_game_config(2).unwrap();
        let dictionary = dictionary::Dictionary::from_words(["CAT"]);
        let committer = turn_committer::TurnCommitter::new(&game_config, &dictionary);
        let mut rng = rand_chacha::ChaCha20Rng::seed_from_u64(3);
        let mut game_state = GameState::new(&game_config);
        assert!(game_state.current_player().is_none());
        assert_eq!(
            game_state.play_word(
                &committer,
                &placement::PlacementRequest {
                    row: 7,
                    col: 7,
                    direction: Direction::Right,
                    word: "CAT".into(),
                },
            ),
            Err(error::PlacementError::NotStarted)
        );
        assert!(game_state.swap(&mut rng, &['A']).is_err());
        game_state.pass();
        game_state.add_player("Nonni").unwrap();
        assert!(game_state.current_player().is_none());
        assert!(game_state.swap(&mut rng, &['A']).is_err());
        assert!(game_state.board.is_empty());
        assert_eq!(game_state.bag.len(), 100);
    }

    #[test]
    fn swap_keeps_hand_size_and_bag_size() {
        let game_config = game_config::make_english_game_config(2).unwrap();
        let mut game_state = started_game(&game_config);
        let mut rng = rand_chacha::ChaCha20Rng::seed_from_u64(9);
        game_state.players[0].rack = "ABCDEFG".chars().collect();
        game_state.consecutive_passes = 1;
        game_state.swap(&mut rng, &['b', 'D', 'G']).unwrap();
        let rack = &game_state.players[0].rack;
        assert_eq!(rack.len(), 7);
        assert_eq!(&rack[..4], &['A', 'C', 'E', 'F']);
        assert_eq!(game_state.bag.len(), 86);
        assert_eq!(game_state.consecutive_passes, 0);
    }

    #[test]
    fn bad_swaps_change_nothing() {
        let game_config = game_config::make_english_game_config(2).unwrap();
        let mut game_state = started_game(&game_config);
        let mut rng = rand_chacha::ChaCha20Rng::seed_from_u64(9);
        game_state.players[0].rack = "ABCDEFG".chars().collect();
        assert!(game_state.swap(&mut rng, &['Z']).is_err());
        assert!(game_state.swap(&mut rng, &[]).is_err());
        assert!(game_state.swap(&mut rng, &['A'; 7]).is_err());
        game_state.bag.0.truncate(1);
        assert!(game_state.swap(&mut rng, &['A', 'B']).is_err());
        assert_eq!(game_state.players[0].rack, "ABCDEFG".chars().collect::<Vec<_>>());
        assert_eq!(game_state.bag.len(), 1);
    }

    #[test]
    fn play_word_refills_hand() {
        let game_config = game_config::make_english_game_config(2).unwrap();
        let dictionary = dictionary::Dictionary::from_words(["CAT"]);
        let committer = turn_committer::TurnCommitter::new(&game_config, &dictionary);
        let mut game_state = started_game(&game_config);
        game_state.players[0].rack = "CATQQQQ".chars().collect();
        game_state.consecutive_passes = 2;
        let outcome = game_state
            .play_word(
                &committer,
                &placement::PlacementRequest {
                    row: 7,
                    col: 7,
                    direction: Direction::Right,
                    word: "CAT".into(),
                },
            )
            .unwrap();
        assert_eq!(outcome.total(), 5);
        assert_eq!(game_state.players[0].rack.len(), 7);
        assert_eq!(game_state.players[0].score, 5);
        assert_eq!(game_state.bag.len(), 83);
        assert_eq!(game_state.consecutive_passes, 0);
    }

    #[test]
    fn game_over_when_bag_and_a_hand_are_empty() {
        let game_config = game_config::make_english_game_config(2).unwrap();
        let mut game_state = started_game(&game_config);
        game_state.bag.0.clear();
        assert!(!game_state.is_game_over());
        game_state.players[1].rack.clear();
        assert!(game_state.is_game_over());
    }

    #[test]
    fn empty_hand_alone_is_not_game_over() {
        let game_config = game_config::make_english_game_config(2).unwrap();
        let mut game_state = started_game(&game_config);
        game_state.players[1].rack.clear();
        assert!(!game_state.is_game_over());
    }

    #[test]
    fn game_over_after_two_passes_each() {
        let game_config = game_config::make_english_game_config(2).unwrap();
        let mut game_state = started_game(&game_config);
        for _ in 0..3 {
            game_state.pass();
            game_state.next_turn();
        }
        assert!(!game_state.is_game_over());
        game_state.pass();
        assert!(game_state.is_game_over());
    }

    #[test]
    fn standings_sort_by_score() {
        let game_config = game_config::make_english_game_config(2).unwrap();
        let mut game_state = started_game(&game_config);
        game_state.players[1].score = 12;
        let standings = game_state.final_standings();
        assert_eq!(standings[0].name, "Adam");
        assert_eq!(standings[1].name, "Nonni");
    }
}
