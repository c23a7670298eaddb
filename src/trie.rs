// Copyright (C) 2020-2026 Andy Kurnia.

use super::alphabet::{ALPHABET_INDEX, NUM_LETTERS};

#[derive(Default)]
pub struct TrieNode {
    is_end: bool,
    children: [Option<Box<TrieNode>>; NUM_LETTERS],
}

impl TrieNode {
    #[inline(always)]
    pub fn is_end(&self) -> bool {
        self.is_end
    }

    // bytes outside the alphabet have no child.
    #[inline(always)]
    pub fn child(&self, letter: u8) -> Option<&TrieNode> {
        self.children
            .get(ALPHABET_INDEX.index(letter))
            .and_then(|c| c.as_deref())
    }

    pub fn follow(&self, letters: &[u8]) -> Option<&TrieNode> {
        let mut node = self;
        for &letter in letters {
            node = node.child(letter)?;
        }
        Some(node)
    }
}

/// Dictionary stored as a prefix tree with one 26-slot child table per node.
#[derive(Default)]
pub struct Trie {
    root: TrieNode,
    num_words: usize,
}

impl Trie {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline(always)]
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.num_words
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.num_words == 0
    }

    // word must be A-Z, anything else panics. the empty word is ignored.
    pub fn insert(&mut self, word: &[u8]) {
        if word.is_empty() {
            return;
        }
        let mut node = &mut self.root;
        for &letter in word {
            debug_assert!(
                ALPHABET_INDEX.contains(letter),
                "cannot insert {:?}: {:?} is not A-Z",
                String::from_utf8_lossy(word),
                letter as char
            );
            node = &mut **node.children[ALPHABET_INDEX.index(letter)].get_or_insert_with(Box::default);
        }
        if !node.is_end {
            node.is_end = true;
            self.num_words += 1;
        }
    }

    #[inline(always)]
    pub fn lookup_prefix(&self, prefix: &[u8]) -> Option<&TrieNode> {
        self.root.follow(prefix)
    }

    pub fn contains(&self, word: &[u8]) -> bool {
        self.lookup_prefix(word).is_some_and(|node| node.is_end)
    }

    // number of nodes including the root.
    pub fn count_nodes(&self) -> usize {
        fn count(node: &TrieNode) -> usize {
            1 + node
                .children
                .iter()
                .flatten()
                .map(|child| count(child))
                .sum::<usize>()
        }
        count(&self.root)
    }
}
