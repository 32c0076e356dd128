//! speller-dictionary: a fixed-bucket, chained hash table holding a
//! spell-checker word list, with case-insensitive membership queries.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: load a whitespace-separated word list once, answer `check`
//!   queries, report the word count, and free everything on `unload`.
//! - Layers:
//!   - `hash`: shift-by-two, xor rolling hash reduced modulo the bucket
//!     count. Case-sensitive; no folding.
//!   - `tokens`: streaming tokenizer over a `BufRead`, bounded scratch
//!     buffer, oversized tokens reported with their real length.
//!   - `chain`: the owned collision chain of one bucket; head insertion,
//!     head-first walk, fallible growth.
//!   - `Dictionary`: the table itself, `load`/`check`/`size`/`unload`.
//!
//! Constraints
//! - Single-threaded; no interior mutability, no locking.
//! - Bucket count is fixed for the table's lifetime; there is no resizing.
//! - Duplicates are stored and counted; nothing is deduplicated.
//! - One load per table. A second `load` fails with `AlreadyLoaded`.
//! - `unload` consumes the table, so no query can follow it.
//!
//! Partial loads
//! - Errors raised after the source is opened (read failure, oversized
//!   word, invalid UTF-8, allocation failure) stop the load but keep what
//!   was already inserted. The word counter always equals the number of
//!   reachable entries, and every entry sits in the bucket its word hashes
//!   to.
//!
//! Case folding
//! - `check` hashes the query exactly as given, then compares within that
//!   one chain ignoring ASCII case. A query whose case differs from the
//!   stored word is found only when both spellings share a bucket. Word
//!   lists are conventionally lowercase, which hides this.
//!
//! Logging
//! - Goes through the `log` facade: load progress at `debug`, the final
//!   occupancy at `info`, aborted loads at `warn`. No logger is installed
//!   by the library.

mod chain;
mod config;
mod dictionary;
mod error;
pub mod hash;
mod tokens;

// Public surface
pub use config::DictionaryConfig;
pub use dictionary::{Dictionary, Iter, TableStats};
pub use error::{LoadError, UnloadError};
pub use hash::{DEFAULT_BUCKETS, MAX_WORD_LEN};
