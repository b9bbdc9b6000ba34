use core::any::type_name;
use core::fmt::{self, Display};
use core::marker::PhantomData;
use std::io::Write;

use log::warn;

use crate::cursor::Cursor;
use crate::{Sequence, StreamError};

/// Treat a writer as an endless sequence of slots for `T`s.
///
/// Every value set through a slot is formatted with [`Display`] and written
/// straight away, followed by the separator if one was configured with
/// [`Output::separated_by`].
///
/// An output sequence never runs out, so it has to be zipped with at least one
/// bounded sequence.
///
/// # Examples
///
/// ```
/// use lockstep::prelude::*;
/// use lockstep::stream;
///
/// let mut sink = Vec::new();
/// let out = stream::output::<u8, _>(&mut sink);
///
/// (out, &[1u8, 2, 3]).lockstep().for_each(|step| {
///     step.apply(|slot, n| slot.set(*n));
/// });
/// assert_eq!(sink, b"123");
/// ```
pub fn output<T, W>(writer: &mut W) -> Output<'_, T, W>
where
    T: Display,
    W: Write + ?Sized,
{
    Output {
        writer,
        separator: None,
        _item: PhantomData,
    }
}

/// A writer viewed as a sequence of `T` slots.
///
/// This `struct` is created by the [`output`] function. See its documentation
/// for more.
pub struct Output<'w, T, W: ?Sized> {
    writer: &'w mut W,
    separator: Option<String>,
    _item: PhantomData<fn(T)>,
}

impl<'w, T, W: ?Sized> Output<'w, T, W> {
    /// Write `separator` after every value.
    pub fn separated_by(mut self, separator: impl Into<String>) -> Self {
        let separator = separator.into();
        self.separator = (!separator.is_empty()).then_some(separator);
        self
    }
}

impl<'w, T, W: ?Sized> fmt::Debug for Output<'w, T, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Output")
            .field("item", &type_name::<T>())
            .field("separator", &self.separator)
            .finish()
    }
}

impl<'w, T, W> Sequence for Output<'w, T, W>
where
    T: Display,
    W: Write + ?Sized,
{
    type Cursor = OutputCursor<'w, T, W>;

    fn bounds(self) -> (Self::Cursor, Self::Cursor) {
        let start = OutputCursor {
            writer: Some(self.writer),
            separator: self.separator,
            error: None,
            _item: PhantomData,
        };
        (start, OutputCursor::detached())
    }
}

/// A write cursor bound to a writer.
///
/// Advancing does nothing, and two output cursors are never equal, so this
/// cursor never ends a zip on its own.
///
/// The end cursor of an [`Output`] is detached: the writer can only be
/// borrowed once, and the start cursor holds it. Values set through a
/// detached cursor are dropped.
pub struct OutputCursor<'w, T, W: ?Sized> {
    writer: Option<&'w mut W>,
    separator: Option<String>,
    error: Option<StreamError>,
    _item: PhantomData<fn(T)>,
}

impl<'w, T, W: ?Sized> OutputCursor<'w, T, W> {
    fn detached() -> Self {
        Self {
            writer: None,
            separator: None,
            error: None,
            _item: PhantomData,
        }
    }

    /// The first write failure, if any.
    ///
    /// After a failure every later value is skipped.
    pub fn error(&self) -> Option<&StreamError> {
        self.error.as_ref()
    }
}

impl<'w, T, W> OutputCursor<'w, T, W>
where
    T: Display,
    W: Write + ?Sized,
{
    fn write(&mut self, value: &T) {
        if self.error.is_some() {
            return;
        }
        let Some(writer) = self.writer.as_deref_mut() else {
            warn!("value written through a detached output cursor was dropped");
            return;
        };

        let res = match &self.separator {
            Some(separator) => write!(writer, "{value}{separator}"),
            None => write!(writer, "{value}"),
        };
        if let Err(err) = res {
            warn!("output stream failed, skipping further writes: {err}");
            self.error = Some(StreamError::Write(err));
        }
    }
}

impl<'w, T, W> Cursor for OutputCursor<'w, T, W>
where
    T: Display,
    W: Write + ?Sized,
{
    type Item<'c> = Emit<'c, 'w, T, W> where Self: 'c;

    fn get(&mut self) -> Self::Item<'_> {
        Emit { cursor: self }
    }

    fn advance(&mut self) {}
}

impl<'w, T, W: ?Sized> PartialEq for OutputCursor<'w, T, W> {
    fn eq(&self, _other: &Self) -> bool {
        false
    }
}

impl<'w, T, W: ?Sized> fmt::Debug for OutputCursor<'w, T, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OutputCursor")
            .field("detached", &self.writer.is_none())
            .field("separator", &self.separator)
            .field("error", &self.error)
            .finish()
    }
}

/// A single write slot handed out by an [`OutputCursor`].
pub struct Emit<'c, 'w, T, W: ?Sized> {
    cursor: &'c mut OutputCursor<'w, T, W>,
}

impl<'c, 'w, T, W> Emit<'c, 'w, T, W>
where
    T: Display,
    W: Write + ?Sized,
{
    /// Write `value`, followed by the separator.
    pub fn set(self, value: T) {
        self.cursor.write(&value);
    }
}

impl<'c, 'w, T, W: ?Sized> fmt::Debug for Emit<'c, 'w, T, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Emit").field(&*self.cursor).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn writes_value_then_separator() {
        let mut sink = Vec::new();
        let (mut start, _) = output::<i32, _>(&mut sink).separated_by("; ").bounds();
        start.get().set(1);
        start.advance();
        start.get().set(-2);
        drop(start);
        assert_eq!(sink, b"1; -2; ");
    }

    #[test]
    fn empty_separator_is_no_separator() {
        let mut sink = Vec::new();
        let (mut start, _) = output::<char, _>(&mut sink).separated_by("").bounds();
        start.get().set('a');
        start.get().set('b');
        drop(start);
        assert_eq!(sink, b"ab");
    }

    #[test]
    fn never_equal() {
        let mut sink = Vec::new();
        let (start, end) = output::<u8, _>(&mut sink).bounds();
        assert!(start != end);
        assert!(end != start);
    }

    #[test]
    fn detached_cursor_drops_writes() {
        let mut sink = Vec::new();
        let (start, mut end) = output::<u8, _>(&mut sink).bounds();
        end.get().set(9);
        assert!(end.error().is_none());
        drop((start, end));
        assert!(sink.is_empty());
    }

    #[test]
    fn first_write_failure_is_sticky() {
        struct Full {
            calls: usize,
        }

        impl Write for Full {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                self.calls += 1;
                Err(io::Error::new(io::ErrorKind::WriteZero, "full"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let mut sink = Full { calls: 0 };
        {
            let (mut start, _) = output::<u8, _>(&mut sink).bounds();
            start.get().set(1);
            start.get().set(2);
            assert!(matches!(start.error(), Some(StreamError::Write(_))));
        }
        assert_eq!(sink.calls, 1);
    }
}
