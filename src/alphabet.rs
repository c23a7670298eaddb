// Copyright (C) 2020-2026 Andy Kurnia.

pub const NUM_LETTERS: usize = 26;

// marker for bytes outside the alphabet; child tables treat it as absent.
pub const NOT_A_LETTER: u8 = 0xff;

pub struct Tile<'a> {
    label: &'a str,
    freq: u8,
    score: i8,
}

pub struct StaticAlphabet<'a> {
    letters: &'a [u8; NUM_LETTERS],
    tiles: &'a [Tile<'a>; NUM_LETTERS],
    num_blanks: u8,
}

pub enum Alphabet<'a> {
    Static(StaticAlphabet<'a>),
}

impl<'a> Alphabet<'a> {
    #[inline(always)]
    pub fn len(&self) -> u8 {
        match self {
            Alphabet::Static(x) => x.tiles.len() as u8,
        }
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline(always)]
    fn get(&self, idx: u8) -> &'a Tile<'a> {
        match self {
            Alphabet::Static(x) => &x.tiles[idx as usize],
        }
    }

    // byte for dense position idx, e.g. 0 -> b'A'.
    #[inline(always)]
    pub fn letter(&self, idx: u8) -> u8 {
        match self {
            Alphabet::Static(x) => x.letters[idx as usize],
        }
    }

    #[inline(always)]
    pub fn num_blanks(&self) -> u8 {
        match self {
            Alphabet::Static(x) => x.num_blanks,
        }
    }

    #[inline(always)]
    pub fn label(&self, letter: u8) -> Option<&'a str> {
        let idx = ALPHABET_INDEX.index(letter);
        if idx >= self.len() as usize {
            None
        } else {
            Some(self.get(idx as u8).label)
        }
    }

    // face value of a letter byte. anything outside the alphabet (blank, in-use) scores 0.
    #[inline(always)]
    pub fn score(&self, letter: u8) -> i8 {
        let idx = ALPHABET_INDEX.index(letter);
        if idx >= self.len() as usize {
            0
        } else {
            self.get(idx as u8).score
        }
    }

    #[inline(always)]
    pub fn freq(&self, idx: u8) -> u8 {
        self.get(idx).freq
    }

    pub fn fmt_rack<'b>(&'b self, rack: &'b [u8]) -> ReadableRack<'b> {
        ReadableRack {
            alphabet: self,
            rack,
        }
    }
}

pub struct ReadableRack<'a> {
    alphabet: &'a Alphabet<'a>,
    rack: &'a [u8],
}

impl std::fmt::Display for ReadableRack<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for &letter in self.rack {
            match self.alphabet.label(letter) {
                Some(label) => write!(f, "{}", label)?,
                None => write!(f, "{}", letter as char)?,
            }
        }
        Ok(())
    }
}

/// Direct lookup from a letter byte to its dense alphabet position.
///
/// The table covers all 256 byte values so lookups never go out of bounds;
/// only `A..=Z` have meaningful entries.
pub struct AlphabetIndex {
    table: [u8; 256],
}

impl AlphabetIndex {
    pub const fn new(letters: &[u8; NUM_LETTERS]) -> Self {
        let mut table = [NOT_A_LETTER; 256];
        let mut i = 0;
        while i < NUM_LETTERS {
            table[letters[i] as usize] = i as u8;
            i += 1;
        }
        Self { table }
    }

    #[inline(always)]
    pub fn index(&self, letter: u8) -> usize {
        self.table[letter as usize] as usize
    }

    #[inline(always)]
    pub fn contains(&self, letter: u8) -> bool {
        self.table[letter as usize] != NOT_A_LETTER
    }
}

const ENGLISH_LETTERS: [u8; NUM_LETTERS] = *b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

pub static ALPHABET_INDEX: AlphabetIndex = AlphabetIndex::new(&ENGLISH_LETTERS);

pub static ENGLISH_ALPHABET: Alphabet = Alphabet::Static(StaticAlphabet {
    letters: &ENGLISH_LETTERS,
    tiles: &[
        Tile {
            label: "A",
            freq: 9,
            score: 1,
        },
        Tile {
            label: "B",
            freq: 2,
            score: 3,
        },
        Tile {
            label: "C",
            freq: 2,
            score: 3,
        },
        Tile {
            label: "D",
            freq: 4,
            score: 2,
        },
        Tile {
            label: "E",
            freq: 12,
            score: 1,
        },
        Tile {
            label: "F",
            freq: 2,
            score: 4,
        },
        Tile {
            label: "G",
            freq: 3,
            score: 2,
        },
        Tile {
            label: "H",
            freq: 2,
            score: 4,
        },
        Tile {
            label: "I",
            freq: 9,
            score: 1,
        },
        Tile {
            label: "J",
            freq: 1,
            score: 8,
        },
        Tile {
            label: "K",
            freq: 1,
            score: 5,
        },
        Tile {
            label: "L",
            freq: 4,
            score: 1,
        },
        Tile {
            label: "M",
            freq: 2,
            score: 3,
        },
        Tile {
            label: "N",
            freq: 6,
            score: 1,
        },
        Tile {
            label: "O",
            freq: 8,
            score: 1,
        },
        Tile {
            label: "P",
            freq: 2,
            score: 3,
        },
        Tile {
            label: "Q",
            freq: 1,
            score: 10,
        },
        Tile {
            label: "R",
            freq: 6,
            score: 1,
        },
        Tile {
            label: "S",
            freq: 4,
            score: 1,
        },
        Tile {
            label: "T",
            freq: 6,
            score: 1,
        },
        Tile {
            label: "U",
            freq: 4,
            score: 1,
        },
        Tile {
            label: "V",
            freq: 2,
            score: 4,
        },
        Tile {
            label: "W",
            freq: 2,
            score: 4,
        },
        Tile {
            label: "X",
            freq: 1,
            score: 8,
        },
        Tile {
            label: "Y",
            freq: 2,
            score: 4,
        },
        Tile {
            label: "Z",
            freq: 1,
            score: 10,
        },
    ],
    num_blanks: 2,
});
