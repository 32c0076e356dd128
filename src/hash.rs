//! Bucket hashing: a shift-by-two, xor rolling hash over the raw word bytes.
//!
//! The accumulator is a `u32` and wraps on shift. Each byte is sign-extended
//! (as a C `char` would be) before the xor, so ASCII input hashes the same as
//! an unsigned byte while bytes above 0x7F hash as negative values.
//! No case folding happens here: `Apple` and `apple` usually land in
//! different buckets.

use core::num::NonZeroU32;

/// Number of buckets in a default table.
pub const DEFAULT_BUCKETS: NonZeroU32 = match NonZeroU32::new(20_000) {
    Some(n) => n,
    None => panic!("bucket count must be non-zero"),
};

/// Longest word accepted by a default table, in bytes.
pub const MAX_WORD_LEN: usize = 45;

/// Raw accumulator before reduction to a bucket index.
#[inline]
pub fn rolling_hash(word: &[u8]) -> u32 {
    word.iter().fold(0u32, |acc, &b| (acc << 2) ^ (b as i8 as u32))
}

/// Bucket index of `word` in a table of `buckets` buckets.
#[inline]
pub fn bucket_index(word: &[u8], buckets: NonZeroU32) -> usize {
    (rolling_hash(word) % buckets.get()) as usize
}
