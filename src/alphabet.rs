// Copyright (C) 2020-2026 Andy Kurnia.

pub const BLANK: char = '*';

pub struct Tile {
    letter: char,
    freq: u8,
    score: i8,
}

pub struct StaticAlphabet<'a> {
    tiles: &'a [Tile],
}

pub enum Alphabet<'a> {
    Static(StaticAlphabet<'a>),
}

impl<'a> Alphabet<'a> {
    #[inline(always)]
    fn tiles(&self) -> &'a [Tile] {
        match self {
            Alphabet::Static(x) => x.tiles,
        }
    }

    #[inline(always)]
    pub fn len(&self) -> u8 {
        self.tiles().len() as u8
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline(always)]
    fn find(&self, c: char) -> Option<&'a Tile> {
        let c = c.to_ascii_uppercase();
        self.tiles().iter().find(|tile| tile.letter == c)
    }

    // face value of a letter. blanks are never looked up here: a blank in
    // hand is scored as the letter it stands for.
    #[inline(always)]
    pub fn score(&self, c: char) -> Option<i8> {
        if c == BLANK {
            return None;
        }
        self.find(c).map(|tile| tile.score)
    }

    pub fn num_tiles(&self) -> u16 {
        self.tiles().iter().map(|tile| tile.freq as u16).sum()
    }

    // every tile in the distribution, blanks first.
    pub fn all_tiles(&self) -> impl Iterator<Item = char> {
        self.tiles()
            .iter()
            .flat_map(|tile| std::iter::repeat_n(tile.letter, tile.freq as usize))
    }
}

macro_rules! tile {
    ($letter:expr, $freq:expr, $score:expr) => {
        Tile {
            letter: $letter,
            freq: $freq,
            score: $score,
        }
    };
}

pub static ENGLISH_ALPHABET: Alphabet = Alphabet::Static(StaticAlphabet {
    tiles: &[
        tile!(BLANK, 2, 0),
        tile!('A', 9, 1),
        tile!('B', 2, 3),
        tile!('C', 2, 3),
        tile!('D', 4, 2),
        tile!('E', 12, 1),
        tile!('F', 2, 4),
        tile!('G', 3, 2),
        tile!('H', 2, 4),
        tile!('I', 9, 1),
        tile!('J', 1, 8),
        tile!('K', 1, 5),
        tile!('L', 4, 1),
        tile!('M', 2, 3),
        tile!('N', 6, 1),
        tile!('O', 8, 1),
        tile!('P', 2, 3),
        tile!('Q', 1, 10),
        tile!('R', 6, 1),
        tile!('S', 4, 1),
        tile!('T', 6, 1),
        tile!('U', 4, 1),
        tile!('V', 2, 4),
        tile!('W', 2, 4),
        tile!('X', 1, 8),
        tile!('Y', 2, 4),
        tile!('Z', 1, 10),
    ],
});
