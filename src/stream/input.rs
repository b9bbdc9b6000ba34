use core::any::type_name;
use core::fmt::{self, Display};
use core::marker::PhantomData;
use core::mem;
use core::str::FromStr;
use std::io::{self, BufRead};

use log::{debug, trace};

use crate::cursor::{Cursor, ReadCursor};
use crate::{Sequence, StreamError};

/// Treat a buffered reader as a sequence of whitespace-separated `T`s.
///
/// The start cursor reads its first value as soon as the sequence is zipped.
///
/// # Examples
///
/// ```
/// use lockstep::prelude::*;
/// use lockstep::stream;
///
/// let mut source = "0.1 0.2 0.3 0.4".as_bytes();
/// let mut totals = std::collections::LinkedList::from([2.1, 3.2, 4.3, 5.4]);
///
/// let numbers = stream::input::<f64, _>(&mut source);
/// (numbers, &mut totals).lockstep().for_each(|step| {
///     step.apply(|n, total| *total += *n);
/// });
///
/// let expected = [2.2, 3.4, 4.6, 5.8];
/// for (total, expected) in totals.iter().zip(expected) {
///     assert!((total - expected).abs() < 1e-9);
/// }
/// ```
pub fn input<T, R>(reader: &mut R) -> Input<'_, T, R>
where
    T: FromStr,
    R: BufRead + ?Sized,
{
    Input {
        reader,
        _item: PhantomData,
    }
}

/// A buffered reader viewed as a sequence of `T`s.
///
/// This `struct` is created by the [`input`] function. See its documentation
/// for more.
pub struct Input<'r, T, R: ?Sized> {
    reader: &'r mut R,
    _item: PhantomData<fn() -> T>,
}

impl<'r, T, R: ?Sized> fmt::Debug for Input<'r, T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Input")
            .field("item", &type_name::<T>())
            .finish()
    }
}

impl<'r, T, R> Sequence for Input<'r, T, R>
where
    T: FromStr,
    T::Err: Display,
    R: BufRead + ?Sized,
{
    type Cursor = InputCursor<'r, T, R>;

    fn bounds(self) -> (Self::Cursor, Self::Cursor) {
        (InputCursor::new(self.reader), InputCursor::end())
    }
}

/// A cursor holding the last value parsed from a reader.
///
/// Each read takes the longest prefix of the next whitespace-delimited token
/// that parses as `T`. Whatever follows that prefix is where the next read
/// starts, so `"0.5, 0.6"` yields `0.5` and then stops on the `,`.
///
/// Once the reader runs dry, or a read or parse fails, the cursor becomes
/// indistinguishable from the end sentinel and lets go of the reader.
pub struct InputCursor<'r, T, R: ?Sized> {
    reader: Option<&'r mut R>,
    pending: String,
    value: Option<T>,
    error: Option<StreamError>,
}

impl<'r, T, R> InputCursor<'r, T, R>
where
    T: FromStr,
    T::Err: Display,
    R: BufRead + ?Sized,
{
    fn new(reader: &'r mut R) -> Self {
        let mut cursor = Self {
            reader: Some(reader),
            pending: String::new(),
            value: None,
            error: None,
        };
        cursor.read_next();
        cursor
    }

    fn read_next(&mut self) {
        let Some(reader) = self.reader.as_deref_mut() else {
            self.value = None;
            return;
        };

        let token = if self.pending.is_empty() {
            read_token(reader)
        } else {
            Ok(Some(mem::take(&mut self.pending)))
        };

        match token {
            Ok(Some(token)) => match parse_prefix::<T>(&token) {
                Ok((value, len)) => {
                    self.pending = token[len..].to_owned();
                    self.value = Some(value);
                    return;
                }
                Err(err) => {
                    debug!("input stream stopped at unparsable token {token:?}: {err}");
                    self.error = Some(StreamError::Parse {
                        token,
                        target: type_name::<T>(),
                        reason: err.to_string(),
                    });
                }
            },
            Ok(None) => trace!("input stream exhausted"),
            Err(err) => {
                debug!("input stream stopped on read failure: {err}");
                self.error = Some(StreamError::Read(err));
            }
        }

        self.reader = None;
        self.pending.clear();
        self.value = None;
    }
}

impl<'r, T, R: ?Sized> InputCursor<'r, T, R> {
    fn end() -> Self {
        Self {
            reader: None,
            pending: String::new(),
            value: None,
            error: None,
        }
    }

    /// Returns `true` once the cursor has degraded to the end sentinel.
    pub fn is_end(&self) -> bool {
        self.value.is_none()
    }

    /// Why the cursor stopped, if it stopped on a failure rather than at the
    /// end of the input.
    pub fn error(&self) -> Option<&StreamError> {
        self.error.as_ref()
    }
}

impl<'r, T, R> Cursor for InputCursor<'r, T, R>
where
    T: FromStr,
    T::Err: Display,
    R: BufRead + ?Sized,
{
    type Item<'c> = &'c T where Self: 'c;

    fn get(&mut self) -> Self::Item<'_> {
        self.current()
    }

    fn advance(&mut self) {
        self.read_next();
    }
}

impl<'r, T, R> ReadCursor for InputCursor<'r, T, R>
where
    T: FromStr,
    T::Err: Display,
    R: BufRead + ?Sized,
{
    type Target = T;

    fn current(&self) -> &T {
        self.value
            .as_ref()
            .expect("input cursor dereferenced past the end of the stream")
    }
}

/// Live cursors hold the reader exclusively, so only two sentinels can ever
/// share a position.
impl<'r, T, R: ?Sized> PartialEq for InputCursor<'r, T, R> {
    fn eq(&self, other: &Self) -> bool {
        self.is_end() && other.is_end()
    }
}

impl<'r, T: fmt::Debug, R: ?Sized> fmt::Debug for InputCursor<'r, T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputCursor")
            .field("value", &self.value)
            .field("pending", &self.pending)
            .field("error", &self.error)
            .finish()
    }
}

/// Parse the longest prefix of `token` that is a valid `T`.
///
/// Returns the value with the length of the prefix, or the error from parsing
/// the whole token if no prefix parses.
fn parse_prefix<T: FromStr>(token: &str) -> Result<(T, usize), T::Err> {
    let err = match token.parse() {
        Ok(value) => return Ok((value, token.len())),
        Err(err) => err,
    };
    token
        .char_indices()
        .map(|(end, _)| end)
        .filter(|&end| end > 0)
        .rev()
        .find_map(|end| token[..end].parse().ok().map(|value| (value, end)))
        .ok_or(err)
}

/// Read one whitespace-delimited token, leaving the delimiter in the reader.
///
/// Returns `Ok(None)` if the reader holds nothing but whitespace.
fn read_token<R: BufRead + ?Sized>(reader: &mut R) -> io::Result<Option<String>> {
    let mut token = Vec::new();
    loop {
        let buf = match reader.fill_buf() {
            Ok(buf) => buf,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(err),
        };
        if buf.is_empty() {
            break;
        }

        let mut used = 0;
        let mut done = false;
        for &byte in buf {
            if byte.is_ascii_whitespace() {
                if !token.is_empty() {
                    done = true;
                    break;
                }
            } else {
                token.push(byte);
            }
            used += 1;
        }
        reader.consume(used);
        if done {
            break;
        }
    }

    if token.is_empty() {
        return Ok(None);
    }
    String::from_utf8(token)
        .map(Some)
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))
}
