//! word.rs
//! Decoder-side word table.
//!
//! Each learned sequence is stored as `(parent code, appended symbol, length)`
//! and materialized on demand by walking parent links back to the empty
//! word. Entries are immutable once written; a new code never changes an
//! older one, and no byte storage is shared or reallocated per append.

use crate::code::{Code, EMPTY_CODE, START_CODE, STOP_CODE};

#[derive(Debug, Clone, Copy)]
struct Entry {
    parent: Code,
    sym: u8,
    len: u32,
}

// Slots below START_CODE: STOP_CODE (never materialized) and EMPTY_CODE.
const RESERVED: [Entry; START_CODE as usize] = [Entry { parent: STOP_CODE, sym: 0, len: 0 }; START_CODE as usize];

/// Code-indexed table of every sequence the decoder has learned since the
/// last reset.
#[derive(Debug, Clone)]
pub struct WordTable {
    entries: Vec<Entry>,
}

impl Default for WordTable {
    fn default() -> Self {
        Self::new()
    }
}

impl WordTable {
    /// A table holding only the empty word at `EMPTY_CODE`.
    pub fn new() -> Self {
        Self { entries: RESERVED.to_vec() }
    }

    /// Code the next appended word will be stored at.
    #[inline]
    pub fn next_code(&self) -> Code {
        self.entries.len() as Code
    }

    /// Whether `code` names a word in the table (the empty word included).
    #[inline]
    pub fn contains(&self, code: Code) -> bool {
        code == EMPTY_CODE || (code >= START_CODE && (code as usize) < self.entries.len())
    }

    /// Length of the word at `code`.
    pub fn word_len(&self, code: Code) -> Option<usize> {
        self.contains(code).then(|| self.entries[code as usize].len as usize)
    }

    /// Store `word(code) + sym` at `next_code()` and return the new code.
    ///
    /// Returns `None` if `code` is not in the table.
    pub fn append(&mut self, code: Code, sym: u8) -> Option<Code> {
        if !self.contains(code) {
            return None;
        }
        let len = self.entries[code as usize].len + 1;
        let new_code = self.next_code();
        self.entries.push(Entry { parent: code, sym, len });
        Some(new_code)
    }

    /// Write the bytes of the word at `code` into `scratch` and return them.
    pub fn materialize<'a>(&self, code: Code, scratch: &'a mut Vec<u8>) -> Option<&'a [u8]> {
        let len = self.word_len(code)?;
        scratch.clear();
        scratch.resize(len, 0);

        // Walk towards the empty word, filling from the back.
        let mut cur = code;
        for slot in scratch.iter_mut().rev() {
            let entry = self.entries[cur as usize];
            *slot = entry.sym;
            cur = entry.parent;
        }
        debug_assert_eq!(cur, EMPTY_CODE);

        Some(&scratch[..])
    }

    /// Drop every word except the empty word.
    pub fn reset(&mut self) {
        self.entries.truncate(START_CODE as usize);
    }

    /// Learned words (the empty word excluded).
    pub fn len(&self) -> usize {
        self.entries.len() - START_CODE as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
