// Copyright (C) 2020-2026 Andy Kurnia.

use super::alphabet;
use rand::prelude::*;

#[derive(Clone, Debug)]
pub struct Bag(pub Vec<char>);

impl Bag {
    pub fn new(alphabet: &alphabet::Alphabet) -> Bag {
        let mut bag = Vec::with_capacity(alphabet.num_tiles() as usize);
        bag.extend(alphabet.all_tiles());
        Bag(bag)
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn shuffle(&mut self, rng: &mut dyn RngCore) {
        self.0.shuffle(rng);
    }

    // may return fewer than amount when the bag runs low.
    pub fn draw(&mut self, amount: usize) -> Vec<char> {
        let n = amount.min(self.0.len());
        let mut tiles = self.0.split_off(self.0.len() - n);
        tiles.reverse();
        tiles
    }

    pub fn replenish(&mut self, rack: &mut Vec<char>, rack_size: usize) {
        let wanted = rack_size.saturating_sub(rack.len());
        rack.extend(self.draw(wanted));
    }

    // each returned tile goes to a random position; the rest keep their order.
    pub fn put_back(&mut self, rng: &mut dyn RngCore, tiles: &[char]) {
        self.0.reserve(tiles.len());
        for &tile in tiles {
            let idx = rng.random_range(0..=self.0.len());
            self.0.insert(idx, tile);
        }
    }
}
