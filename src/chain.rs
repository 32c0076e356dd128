//! Collision chain owned by a single bucket.

use std::collections::TryReserveError;

/// Head-first iterator over the words of a chain.
pub(crate) type Words<'a> = core::iter::Rev<core::slice::Iter<'a, Box<str>>>;

/// Words stored oldest first; the chain head is the last element, so a head
/// insert is a push and a head-first walk is a reverse iteration.
#[derive(Debug, Default)]
pub(crate) struct Chain {
    entries: Vec<Box<str>>,
}

impl Chain {
    pub(crate) const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Insert at the head. Storage growth is fallible; on error the chain is unchanged.
    pub(crate) fn push_front(&mut self, word: Box<str>) -> Result<(), TryReserveError> {
        self.entries.try_reserve(1)?;
        self.entries.push(word);
        Ok(())
    }

    pub(crate) fn words(&self) -> Words<'_> {
        self.entries.iter().rev()
    }

    /// Head-to-tail search with ASCII case folding on both sides.
    pub(crate) fn contains_ignore_ascii_case(&self, word: &[u8]) -> bool {
        self.words().any(|w| w.as_bytes().eq_ignore_ascii_case(word))
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Free every entry and the chain storage, returning how many entries were freed.
    pub(crate) fn release(&mut self) -> usize {
        let entries = core::mem::take(&mut self.entries);
        let n = entries.len();
        drop(entries);
        n
    }
}
