//! Table configuration fixed at construction.

use crate::hash::{DEFAULT_BUCKETS, MAX_WORD_LEN};
use core::num::NonZeroU32;

/// Shape of a `Dictionary`. The bucket count never changes after the table
/// is built.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct DictionaryConfig {
    buckets: NonZeroU32,
    max_word_len: usize,
}

impl DictionaryConfig {
    pub const fn new(buckets: NonZeroU32, max_word_len: usize) -> Self {
        Self {
            buckets,
            max_word_len,
        }
    }

    pub const fn with_buckets(self, buckets: NonZeroU32) -> Self {
        Self { buckets, ..self }
    }

    pub const fn with_max_word_len(self, max_word_len: usize) -> Self {
        Self {
            max_word_len,
            ..self
        }
    }

    pub const fn buckets(&self) -> NonZeroU32 {
        self.buckets
    }

    pub const fn max_word_len(&self) -> usize {
        self.max_word_len
    }
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BUCKETS, MAX_WORD_LEN)
    }
}
