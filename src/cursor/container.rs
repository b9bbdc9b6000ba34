use core::fmt;

use super::{Cursor, ReadCursor};
use crate::Sequence;

#[cfg(feature = "alloc")]
use alloc::collections::{LinkedList, VecDeque};
#[cfg(feature = "alloc")]
use alloc::vec::Vec;

const PAST_END: &str = "cursor dereferenced past the end of its sequence";

/// A read-only cursor into a container.
///
/// This is the cursor kind of every container bound by shared reference
/// (`&v`). It hands out `&T` and can be freely cloned.
pub struct RefCursor<'a, T: ?Sized, I> {
    current: Option<&'a T>,
    rest: Option<I>,
    remaining: usize,
}

impl<'a, T: ?Sized, I> RefCursor<'a, T, I>
where
    I: ExactSizeIterator<Item = &'a T>,
{
    pub(crate) fn start(mut iter: I) -> Self {
        let remaining = iter.len();
        let current = iter.next();
        Self {
            current,
            rest: Some(iter),
            remaining,
        }
    }
}

impl<'a, T: ?Sized, I> RefCursor<'a, T, I> {
    pub(crate) fn end() -> Self {
        Self {
            current: None,
            rest: None,
            remaining: 0,
        }
    }

    /// How many elements are left, counting the one under the cursor.
    pub fn remaining(&self) -> usize {
        self.remaining
    }
}

impl<'a, T, I> Cursor for RefCursor<'a, T, I>
where
    T: ?Sized,
    I: Iterator<Item = &'a T>,
{
    type Item<'c> = &'a T where Self: 'c;

    fn get(&mut self) -> Self::Item<'_> {
        self.current.expect(PAST_END)
    }

    fn advance(&mut self) {
        if self.current.take().is_some() {
            self.remaining -= 1;
            self.current = self.rest.as_mut().and_then(Iterator::next);
        }
    }
}

impl<'a, T, I> ReadCursor for RefCursor<'a, T, I>
where
    T: ?Sized,
    I: Iterator<Item = &'a T>,
{
    type Target = T;

    fn current(&self) -> &T {
        self.current.expect(PAST_END)
    }
}

impl<'a, T: ?Sized, I> PartialEq for RefCursor<'a, T, I> {
    fn eq(&self, other: &Self) -> bool {
        self.remaining == other.remaining
    }
}

impl<'a, T: ?Sized, I: Clone> Clone for RefCursor<'a, T, I> {
    fn clone(&self) -> Self {
        Self {
            current: self.current,
            rest: self.rest.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, T: ?Sized, I> fmt::Debug for RefCursor<'a, T, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RefCursor")
            .field("remaining", &self.remaining)
            .finish()
    }
}

/// A mutable cursor into a container.
///
/// This is the cursor kind of every container bound by mutable reference
/// (`&mut v`). It hands out `&mut T` reborrowed from the cursor, so at most
/// one reference to the current element is live at a time.
pub struct MutCursor<'a, T: ?Sized, I> {
    current: Option<&'a mut T>,
    rest: Option<I>,
    remaining: usize,
}

impl<'a, T: ?Sized, I> MutCursor<'a, T, I>
where
    I: ExactSizeIterator<Item = &'a mut T>,
{
    pub(crate) fn start(mut iter: I) -> Self {
        let remaining = iter.len();
        let current = iter.next();
        Self {
            current,
            rest: Some(iter),
            remaining,
        }
    }
}

impl<'a, T: ?Sized, I> MutCursor<'a, T, I> {
    pub(crate) fn end() -> Self {
        Self {
            current: None,
            rest: None,
            remaining: 0,
        }
    }

    /// How many elements are left, counting the one under the cursor.
    pub fn remaining(&self) -> usize {
        self.remaining
    }
}

impl<'a, T, I> Cursor for MutCursor<'a, T, I>
where
    T: ?Sized,
    I: Iterator<Item = &'a mut T>,
{
    type Item<'c> = &'c mut T where Self: 'c;

    fn get(&mut self) -> Self::Item<'_> {
        self.current.as_deref_mut().expect(PAST_END)
    }

    fn advance(&mut self) {
        if self.current.take().is_some() {
            self.remaining -= 1;
            self.current = self.rest.as_mut().and_then(Iterator::next);
        }
    }
}

impl<'a, T, I> ReadCursor for MutCursor<'a, T, I>
where
    T: ?Sized,
    I: Iterator<Item = &'a mut T>,
{
    type Target = T;

    fn current(&self) -> &T {
        self.current.as_deref().expect(PAST_END)
    }
}

impl<'a, T: ?Sized, I> PartialEq for MutCursor<'a, T, I> {
    fn eq(&self, other: &Self) -> bool {
        self.remaining == other.remaining
    }
}

impl<'a, T: ?Sized, I> fmt::Debug for MutCursor<'a, T, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MutCursor")
            .field("remaining", &self.remaining)
            .finish()
    }
}

/// Implement `Sequence` for shared and mutable references to a container.
///
/// `&C` produces a `RefCursor` and `&mut C` produces a `MutCursor`, which is
/// how read-only provenance gets fixed at binding time.
macro_rules! impl_sequence {
    ($({$($gen:tt)*} $Container:ty;)+) => {$(
        impl<'a, T: 'a, $($gen)*> Sequence for &'a $Container {
            type Cursor = RefCursor<'a, T, <&'a $Container as IntoIterator>::IntoIter>;

            fn bounds(self) -> (Self::Cursor, Self::Cursor) {
                (RefCursor::start(self.into_iter()), RefCursor::end())
            }
        }

        impl<'a, T: 'a, $($gen)*> Sequence for &'a mut $Container {
            type Cursor = MutCursor<'a, T, <&'a mut $Container as IntoIterator>::IntoIter>;

            fn bounds(self) -> (Self::Cursor, Self::Cursor) {
                (MutCursor::start(self.into_iter()), MutCursor::end())
            }
        }
    )+};
}

impl_sequence! {
    {} [T];
    {const N: usize} [T; N];
}

#[cfg(feature = "alloc")]
impl_sequence! {
    {} Vec<T>;
    {} VecDeque<T>;
    {} LinkedList<T>;
}
