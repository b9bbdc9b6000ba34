use core::fmt;
use core::str::Chars;

use super::{Cursor, ReadCursor};
use crate::Sequence;

#[cfg(feature = "alloc")]
use alloc::string::String;

/// A read-only cursor over the `char`s of a string.
///
/// Positions compare by the number of bytes left, counting the current
/// `char`. Strings can only be bound read-only: a `char` can't be replaced in
/// place without possibly changing the string's length.
#[derive(Clone)]
pub struct CharCursor<'a> {
    current: Option<char>,
    rest: Chars<'a>,
    remaining: usize,
}

impl<'a> CharCursor<'a> {
    fn start(s: &'a str) -> Self {
        let mut rest = s.chars();
        let current = rest.next();
        Self {
            current,
            rest,
            remaining: s.len(),
        }
    }

    fn end() -> Self {
        Self {
            current: None,
            rest: "".chars(),
            remaining: 0,
        }
    }

    /// How many bytes are left, counting the `char` under the cursor.
    pub fn remaining(&self) -> usize {
        self.remaining
    }
}

impl<'a> Cursor for CharCursor<'a> {
    type Item<'c> = &'c char where Self: 'c;

    fn get(&mut self) -> Self::Item<'_> {
        self.current()
    }

    fn advance(&mut self) {
        if let Some(c) = self.current.take() {
            self.remaining -= c.len_utf8();
            self.current = self.rest.next();
        }
    }
}

impl<'a> ReadCursor for CharCursor<'a> {
    type Target = char;

    fn current(&self) -> &char {
        self.current
            .as_ref()
            .expect("cursor dereferenced past the end of its sequence")
    }
}

impl<'a> PartialEq for CharCursor<'a> {
    fn eq(&self, other: &Self) -> bool {
        self.remaining == other.remaining
    }
}

impl<'a> fmt::Debug for CharCursor<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CharCursor")
            .field("current", &self.current)
            .field("remaining", &self.remaining)
            .finish()
    }
}

impl<'a> Sequence for &'a str {
    type Cursor = CharCursor<'a>;

    fn bounds(self) -> (Self::Cursor, Self::Cursor) {
        (CharCursor::start(self), CharCursor::end())
    }
}

#[cfg(feature = "alloc")]
impl<'a> Sequence for &'a String {
    type Cursor = CharCursor<'a>;

    fn bounds(self) -> (Self::Cursor, Self::Cursor) {
        self.as_str().bounds()
    }
}
