// Copyright (C) 2020-2026 Andy Kurnia.

use super::alphabet::{ALPHABET_INDEX, NUM_LETTERS};
use super::error;

// slot temporarily consumed by the search.
pub const IN_USE: u8 = b'!';
// wildcard tile. never substituted for a letter by the search.
pub const BLANK: u8 = b'?';

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rack {
    tiles: Vec<u8>,
}

impl Rack {
    pub fn empty() -> Self {
        Self { tiles: Vec::new() }
    }

    // accepts A-Z (either case), and ? or _ for blanks.
    pub fn from_letters(s: &str, capacity: usize) -> error::Returns<Self> {
        let mut tiles = Vec::with_capacity(s.len());
        for c in s.chars() {
            let tile = match c {
                '?' | '_' => BLANK,
                'a'..='z' | 'A'..='Z' => c.to_ascii_uppercase() as u8,
                _ => {
                    return_error!(format!("invalid tile {:?} in rack {:?}", c, s));
                }
            };
            tiles.push(tile);
        }
        if tiles.len() > capacity {
            return_error!(format!(
                "rack {:?} has {} tiles, capacity is {}",
                s,
                tiles.len(),
                capacity
            ));
        }
        Ok(Self { tiles })
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    #[inline(always)]
    pub fn tiles(&self) -> &[u8] {
        &self.tiles
    }

    pub fn push(&mut self, tile: u8) {
        self.tiles.push(tile);
    }

    pub fn num_blanks(&self) -> usize {
        self.tiles.iter().filter(|&&t| t == BLANK).count()
    }

    /// Marks slot `idx` in use until the returned guard is dropped.
    #[inline(always)]
    pub fn take(&mut self, idx: usize) -> RackSlot<'_> {
        let tile = std::mem::replace(&mut self.tiles[idx], IN_USE);
        RackSlot {
            rack: self,
            idx,
            tile,
        }
    }
}

impl std::fmt::Display for Rack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for &tile in &self.tiles {
            write!(f, "{}", tile as char)?;
        }
        Ok(())
    }
}

/// Walks the slots the search may branch on at one step, in rack order.
///
/// In-use slots and blanks are skipped, and each letter value appears once (its
/// first available slot). The rack is not borrowed between steps, so the caller
/// can take slots in between; taken slots must be restored before the next step.
#[derive(Default)]
pub struct SlotCursor {
    idx: usize,
    seen: u32,
}

impl SlotCursor {
    pub fn next_slot(&mut self, rack: &Rack) -> Option<(usize, u8)> {
        while self.idx < rack.tiles.len() {
            let idx = self.idx;
            let tile = rack.tiles[idx];
            self.idx += 1;
            let letter_idx = ALPHABET_INDEX.index(tile);
            if letter_idx >= NUM_LETTERS {
                // IN_USE, BLANK
                continue;
            }
            let bit = 1u32 << letter_idx;
            if self.seen & bit != 0 {
                continue;
            }
            self.seen |= bit;
            return Some((idx, tile));
        }
        None
    }
}

/// A rack slot held in use. Restores the original tile on drop, on every exit path.
pub struct RackSlot<'a> {
    rack: &'a mut Rack,
    idx: usize,
    tile: u8,
}

impl std::ops::Deref for RackSlot<'_> {
    type Target = Rack;

    #[inline(always)]
    fn deref(&self) -> &Rack {
        self.rack
    }
}

impl std::ops::DerefMut for RackSlot<'_> {
    #[inline(always)]
    fn deref_mut(&mut self) -> &mut Rack {
        self.rack
    }
}

impl Drop for RackSlot<'_> {
    #[inline(always)]
    fn drop(&mut self) {
        self.rack.tiles[self.idx] = self.tile;
    }
}
