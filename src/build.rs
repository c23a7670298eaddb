// Copyright (C) 2020-2026 Andy Kurnia.

use super::{error, trie};

// one word per line. blank lines and words shorter than 2 letters are skipped.
// the result is sorted and deduplicated.
pub fn read_english_words(giant_string: &str) -> error::Returns<Box<[Box<[u8]>]>> {
    let mut words = Vec::<Box<[u8]>>::new();
    let mut v = Vec::new();
    for (line_num, s) in giant_string.lines().enumerate() {
        let s = s.trim();
        v.clear();
        v.reserve(s.len());
        for c in s.chars() {
            if c.is_ascii_alphabetic() {
                v.push(c.to_ascii_uppercase() as u8);
            } else {
                return_error!(format!(
                    "invalid letter {:?} in {:?} on line {}",
                    c,
                    s,
                    line_num + 1
                ));
            }
        }
        if v.len() < 2 {
            continue;
        }
        words.push(v[..].into());
    }
    words.sort_unstable();
    words.dedup();
    Ok(words.into_boxed_slice())
}

pub fn build_trie(words: &[Box<[u8]>]) -> trie::Trie {
    let mut trie = trie::Trie::new();
    for word in words {
        trie.insert(word);
    }
    log::info!(
        "built trie of {} words ({} nodes)",
        trie.len(),
        trie.count_nodes()
    );
    trie
}

pub fn read_trie_from_file(path: &str) -> error::Returns<trie::Trie> {
    let giant_string = std::fs::read_to_string(path)?;
    let words = read_english_words(&giant_string)?;
    log::debug!("read {} words from {}", words.len(), path);
    Ok(build_trie(&words))
}
