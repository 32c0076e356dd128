//! Whitespace tokenizer over a buffered byte source.
//!
//! Tokens are split on the C-locale `isspace` set. At most `max_len` bytes of
//! a token are kept in the scratch buffer; longer tokens are still consumed to
//! their end so the next token starts at the right place.

use std::io::{self, BufRead};

#[inline]
pub(crate) fn is_separator(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

#[derive(Debug, Eq, PartialEq)]
pub(crate) enum Token<'a> {
    Word(&'a [u8]),
    TooLong { len: usize },
}

pub(crate) struct Tokenizer<R> {
    reader: R,
    max_len: usize,
    scratch: Vec<u8>,
}

impl<R: BufRead> Tokenizer<R> {
    pub(crate) fn new(reader: R, max_len: usize) -> Self {
        Self {
            reader,
            max_len,
            scratch: Vec::new(),
        }
    }

    /// Next token, or `None` at end of input.
    pub(crate) fn next_token(&mut self) -> io::Result<Option<Token<'_>>> {
        self.scratch.clear();
        let mut len = 0usize;
        loop {
            let buf = match self.reader.fill_buf() {
                Ok(buf) => buf,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            if buf.is_empty() {
                break;
            }
            let mut consumed = 0;
            let mut ended = false;
            for &b in buf {
                consumed += 1;
                if is_separator(b) {
                    if len > 0 {
                        ended = true;
                        break;
                    }
                } else {
                    if len < self.max_len {
                        self.scratch.push(b);
                    }
                    len += 1;
                }
            }
            self.reader.consume(consumed);
            if ended {
                break;
            }
        }

        if len == 0 {
            Ok(None)
        } else if len > self.max_len {
            Ok(Some(Token::TooLong { len }))
        } else {
            Ok(Some(Token::Word(&self.scratch)))
        }
    }
}
