//! Single-position handles into a sequence.
//!
//! A cursor points either at one element of its sequence or one past the last
//! element. Two cursors over the same sequence compare equal when they point at
//! the same position. That is all the zip core needs to detect the end of a
//! sequence: it compares a start cursor that keeps advancing against the end
//! cursor it captured up front.

mod chars;
mod container;

pub use chars::CharCursor;
pub use container::{MutCursor, RefCursor};

/// A single-position handle into a sequence.
///
/// [`PartialEq`] is the position check: `a == b` when both cursors point at the
/// same position of the same sequence. Cursor kinds that can never run out
/// (such as [`OutputCursor`](crate::stream::OutputCursor)) are never equal to
/// anything.
pub trait Cursor: PartialEq {
    /// What [`get`](Cursor::get) hands out for the current element.
    ///
    /// This is `&T` when the sequence was bound read-only and `&mut T` when it
    /// was bound mutably.
    type Item<'c>
    where
        Self: 'c;

    /// Access the element under the cursor.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is positioned past the last element.
    fn get(&mut self) -> Self::Item<'_>;

    /// Move the cursor forward by one position.
    fn advance(&mut self);
}

/// A cursor whose current element can be read through a shared borrow.
///
/// This is the read-only view of a slot. It's available for every cursor kind
/// that can produce a value, regardless of whether the sequence was bound
/// mutably.
pub trait ReadCursor: Cursor {
    /// The element type.
    type Target: ?Sized;

    /// Read the element under the cursor.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is positioned past the last element.
    fn current(&self) -> &Self::Target;
}
