// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, rack};
use rand::prelude::*;

pub struct Bag(pub Vec<u8>);

impl Bag {
    // letter bytes per the alphabet's frequencies, then its blanks.
    pub fn new(alphabet: &alphabet::Alphabet) -> Bag {
        let mut bag = Vec::with_capacity(
            (0..alphabet.len())
                .map(|idx| alphabet.freq(idx) as usize)
                .sum::<usize>()
                + alphabet.num_blanks() as usize,
        );
        for idx in 0..alphabet.len() {
            for _ in 0..alphabet.freq(idx) {
                bag.push(alphabet.letter(idx));
            }
        }
        for _ in 0..alphabet.num_blanks() {
            bag.push(rack::BLANK);
        }
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

    pub fn shuffle(&mut self, mut rng: &mut dyn RngCore) {
        self.0.shuffle(&mut rng);
    }

    pub fn pop(&mut self) -> Option<u8> {
        self.0.pop()
    }

    // draws until the rack holds rack_size tiles or the bag runs out.
    pub fn replenish(&mut self, rack: &mut rack::Rack, rack_size: usize) {
        while rack.len() < rack_size {
            match self.pop() {
                Some(tile) => rack.push(tile),
                None => break,
            }
        }
    }
}

impl Clone for Bag {
    #[inline(always)]
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }

    #[inline(always)]
    fn clone_from(&mut self, source: &Self) {
        self.0.clone_from(&source.0);
    }
}
