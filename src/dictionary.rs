//! Dictionary: a fixed array of buckets, each owning a collision chain.

use crate::chain::{Chain, Words};
use crate::config::DictionaryConfig;
use crate::error::{LoadError, UnloadError};
use crate::hash;
use crate::tokens::{Token, Tokenizer};
use log::{debug, info, warn};
use std::collections::TryReserveError;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

/// In-memory word list with case-insensitive membership queries.
///
/// Lifecycle: construct, `load` once, then any number of `check`/`size`
/// calls, then `unload`, which consumes the table.
pub struct Dictionary {
    config: DictionaryConfig,
    buckets: Box<[Chain]>,
    word_count: usize,
    // Set once a load has opened its source, even if that load later failed.
    loaded: bool,
}

/// Occupancy snapshot of a `Dictionary`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct TableStats {
    pub buckets: usize,
    pub occupied: usize,
    pub longest_chain: usize,
    pub words: usize,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::with_config(DictionaryConfig::default())
    }

    pub fn with_config(config: DictionaryConfig) -> Self {
        let buckets = (0..config.buckets().get()).map(|_| Chain::new()).collect();
        Self {
            config,
            buckets,
            word_count: 0,
            loaded: false,
        }
    }

    pub fn config(&self) -> &DictionaryConfig {
        &self.config
    }

    /// Number of words inserted so far, duplicates included.
    pub fn size(&self) -> usize {
        self.word_count
    }

    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Bucket searched by `check(word)`. Case-sensitive.
    pub fn bucket_of(&self, word: &str) -> usize {
        hash::bucket_index(word.as_bytes(), self.config.buckets())
    }

    /// Load whitespace-separated words from the file at `path`.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<(), LoadError> {
        let path = path.as_ref();
        if self.loaded {
            return Err(LoadError::AlreadyLoaded);
        }
        let file = File::open(path).map_err(|source| {
            warn!("could not open dictionary file {}: {}", path.display(), source);
            LoadError::Open {
                path: path.to_path_buf(),
                source,
            }
        })?;
        debug!("loading dictionary from {}", path.display());
        self.load_from_reader(file)
    }

    /// Load whitespace-separated words from any byte source.
    ///
    /// Each word goes to the head of the chain for its bucket; duplicates are
    /// not detected. On error the words read before the failing token stay
    /// loaded and counted, and the table refuses further loads.
    pub fn load_from_reader<R: Read>(&mut self, reader: R) -> Result<(), LoadError> {
        if self.loaded {
            return Err(LoadError::AlreadyLoaded);
        }
        self.loaded = true;

        let result = self.insert_all(BufReader::new(reader));
        match &result {
            Ok(()) => {
                let stats = self.stats();
                info!(
                    "loaded {} words into {} of {} buckets, longest chain {}",
                    stats.words, stats.occupied, stats.buckets, stats.longest_chain
                );
            }
            Err(e) => warn!("dictionary load stopped after {} words: {}", self.word_count, e),
        }
        result
    }

    fn insert_all<R: BufRead>(&mut self, reader: R) -> Result<(), LoadError> {
        let max = self.config.max_word_len();
        let mut tokens = Tokenizer::new(reader, max);
        let mut index = 0usize;
        while let Some(token) = tokens.next_token().map_err(LoadError::Read)? {
            index += 1;
            let word = match token {
                Token::Word(bytes) => bytes,
                Token::TooLong { len } => {
                    return Err(LoadError::WordTooLong { index, len, max });
                }
            };
            let word = core::str::from_utf8(word).map_err(|_| LoadError::InvalidUtf8 { index })?;
            self.insert(word).map_err(|_| LoadError::Allocation { index })?;
        }
        Ok(())
    }

    fn insert(&mut self, word: &str) -> Result<(), TryReserveError> {
        let mut stored = String::new();
        stored.try_reserve_exact(word.len())?;
        stored.push_str(word);

        let bucket = self.bucket_of(word);
        self.buckets[bucket].push_front(stored.into_boxed_str())?;
        self.word_count += 1;
        Ok(())
    }

    /// Whether `word` is in the dictionary, ignoring ASCII case.
    ///
    /// Only the bucket of `word` as given is searched. A word loaded as
    /// `Hello` is found by `check("HeLLo")` only if both spellings hash to the
    /// same bucket.
    pub fn check(&self, word: &str) -> bool {
        self.buckets[self.bucket_of(word)].contains_ignore_ascii_case(word.as_bytes())
    }

    /// `(bucket, word)` pairs, buckets ascending, each chain head-first.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            buckets: self.buckets.iter().enumerate(),
            current: None,
        }
    }

    pub fn stats(&self) -> TableStats {
        let (occupied, longest_chain) = self
            .buckets
            .iter()
            .filter(|c| !c.is_empty())
            .fold((0, 0), |(n, longest), c| (n + 1, longest.max(c.len())));
        TableStats {
            buckets: self.buckets.len(),
            occupied,
            longest_chain,
            words: self.word_count,
        }
    }

    /// Free every entry, returning how many were released.
    pub fn unload(self) -> Result<usize, UnloadError> {
        let Dictionary {
            mut buckets,
            word_count,
            ..
        } = self;
        let released: usize = buckets.iter_mut().map(Chain::release).sum();
        drop(buckets);
        debug!("unloaded dictionary, released {} words", released);

        if released != word_count {
            return Err(UnloadError::CountMismatch {
                expected: word_count,
                released,
            });
        }
        Ok(released)
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for Dictionary {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Dictionary")
            .field("config", &self.config)
            .field("word_count", &self.word_count)
            .field("loaded", &self.loaded)
            .finish_non_exhaustive()
    }
}

/// Iterator over the words of a `Dictionary` with their bucket index.
pub struct Iter<'a> {
    buckets: core::iter::Enumerate<core::slice::Iter<'a, Chain>>,
    current: Option<(usize, Words<'a>)>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (usize, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((i, words)) = &mut self.current {
                if let Some(w) = words.next() {
                    return Some((*i, &**w));
                }
            }
            let (i, chain) = self.buckets.next()?;
            self.current = Some((i, chain.words()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::num::NonZeroU32;
    use std::io;

    fn loaded(src: &str) -> Dictionary {
        let mut d = Dictionary::new();
        d.load_from_reader(src.as_bytes()).unwrap();
        d
    }

    fn small(buckets: u32) -> Dictionary {
        Dictionary::with_config(
            DictionaryConfig::default().with_buckets(NonZeroU32::new(buckets).unwrap()),
        )
    }

    /// Invariant: a fresh table is empty and answers every query with false.
    #[test]
    fn fresh_table_is_empty() {
        let d = Dictionary::new();
        assert_eq!(d.size(), 0);
        assert!(d.is_empty());
        assert!(!d.check("anything"));
        assert!(!d.check(""));
        assert_eq!(d.stats().buckets, 20_000);
        assert_eq!(d.stats().occupied, 0);
    }

    /// Invariant: duplicates are counted, not merged.
    #[test]
    fn duplicates_are_counted() {
        let d = loaded("alpha\nbeta\nbeta\n");
        assert_eq!(d.size(), 3);
        assert!(d.check("beta"));
        assert!(d.check("alpha"));
        assert!(!d.check("gamma"));
    }

    /// Invariant: every entry sits in the bucket its word hashes to.
    #[test]
    fn entries_live_in_their_hash_bucket() {
        let d = loaded("the quick Brown fox JUMPS over the lazy dog");
        for (bucket, word) in d.iter() {
            assert_eq!(bucket, d.bucket_of(word), "{word} misplaced");
        }
        assert_eq!(d.iter().count(), d.size());
    }

    /// Invariant: within a single bucket the newest word comes first.
    #[test]
    fn chain_is_reverse_load_order() {
        let d = {
            let mut d = small(1);
            d.load_from_reader(&b"one two three"[..]).unwrap();
            d
        };
        let words: Vec<&str> = d.iter().map(|(_, w)| w).collect();
        assert_eq!(words, ["three", "two", "one"]);
        assert_eq!(d.stats().longest_chain, 3);
        assert_eq!(d.stats().occupied, 1);
    }

    /// Colliding words are told apart by the chain comparison.
    #[test]
    fn colliding_words_are_distinguished() {
        let d = loaded("aaa");
        assert_eq!(d.bucket_of("aaa"), d.bucket_of("abm"));
        assert!(d.check("aaa"));
        assert!(!d.check("abm"));
    }

    /// Lookups hash the word as given, so a case-flipped query can miss.
    #[test]
    fn case_flip_lookup_depends_on_bucket() {
        let d = loaded("Hello");
        assert!(d.check("Hello"));
        assert_ne!(d.bucket_of("Hello"), d.bucket_of("hello"));
        assert!(!d.check("hello"));

        let mut d = small(8);
        d.load_from_reader(&b"Hello"[..]).unwrap();
        assert_eq!(d.bucket_of("Hello"), d.bucket_of("hello"));
        assert!(d.check("hello"));
        assert!(d.check("HELLO"));
    }

    /// A second load is refused, and the first load's words are untouched.
    #[test]
    fn second_load_is_rejected() {
        let mut d = loaded("one two");
        match d.load_from_reader(&b"three"[..]) {
            Err(LoadError::AlreadyLoaded) => {}
            other => panic!("unexpected result: {:?}", other),
        }
        assert_eq!(d.size(), 2);
        assert!(!d.check("three"));
    }

    /// An oversized token stops the load; earlier words remain.
    #[test]
    fn too_long_word_leaves_partial_table() {
        let mut d = Dictionary::with_config(DictionaryConfig::default().with_max_word_len(4));
        match d.load_from_reader(&b"cat dog horse emu"[..]) {
            Err(LoadError::WordTooLong { index, len, max }) => {
                assert_eq!((index, len, max), (3, 5, 4));
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert_eq!(d.size(), 2);
        assert!(d.check("cat"));
        assert!(d.check("dog"));
        assert!(!d.check("emu"));
        assert_eq!(d.iter().count(), 2);
    }

    #[test]
    fn invalid_utf8_is_rejected() {
        let mut d = Dictionary::new();
        match d.load_from_reader(&b"ok \xff\xfe after"[..]) {
            Err(LoadError::InvalidUtf8 { index }) => assert_eq!(index, 2),
            other => panic!("unexpected result: {:?}", other),
        }
        assert_eq!(d.size(), 1);
        assert!(d.check("ok"));
    }

    /// A read failure mid-stream keeps the words that arrived before it.
    #[test]
    fn read_error_leaves_partial_table() {
        struct FailAfter<'a>(&'a [u8]);
        impl Read for FailAfter<'_> {
            fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
                if self.0.is_empty() {
                    return Err(io::Error::new(io::ErrorKind::Other, "device gone"));
                }
                self.0.read(buf)
            }
        }

        let mut d = Dictionary::new();
        let res = d.load_from_reader(FailAfter(b"alpha beta "));
        assert!(matches!(res, Err(LoadError::Read(_))));
        assert_eq!(d.size(), 2);
        assert!(d.check("alpha"));
        assert!(d.check("beta"));
        assert!(matches!(
            d.load_from_reader(&b"gamma"[..]),
            Err(LoadError::AlreadyLoaded)
        ));
    }

    /// Unload releases exactly the counted entries.
    #[test]
    fn unload_releases_all_words() {
        let d = loaded("a b c a");
        assert_eq!(d.unload().unwrap(), 4);
        assert_eq!(Dictionary::new().unload().unwrap(), 0);
    }

    #[test]
    fn empty_source_loads_nothing() {
        let d = loaded(" \n\n\t ");
        assert_eq!(d.size(), 0);
        assert!(!d.check(""));
    }
}
