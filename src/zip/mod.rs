//! Lockstep iteration over several sequences.
//!
//! A [`Zip`] holds one cursor per sequence for the start, and one per sequence
//! for the end. Each step of the loop is a [`Step`]: the current cursor of
//! every slot, advanced together. The loop ends as soon as any slot reaches
//! its own end, so the shortest bounded sequence decides how many steps run.
//!
//! # Examples
//!
//! ```
//! use lockstep::prelude::*;
//!
//! let mut v1 = vec![1, 2, 3];
//! let v2 = [-2, -3, -4, -5];
//!
//! let mut steps = 0;
//! (&mut v1, &v2).lockstep().for_each(|step| {
//!     let delta = *step.peek::<1>();
//!     *step.get::<0>() += delta;
//!     steps += 1;
//! });
//!
//! assert_eq!(v1, [-1, -1, -1]);
//! assert_eq!(steps, 3);
//! ```
//!
//! Writing through a slot that was bound read-only doesn't compile:
//!
//! ```compile_fail
//! use lockstep::prelude::*;
//!
//! let v1 = [4, 5, 6];
//! let v2 = [-2, -3, -4, -5];
//!
//! (&v1, &v2).lockstep().for_each(|step| {
//!     *step.get::<0>() += 1;
//! });
//! ```
//!
//! Neither does mutating through the arguments of `apply_ref`, even for slots
//! that were bound mutably:
//!
//! ```compile_fail
//! use lockstep::prelude::*;
//!
//! let mut v1 = [1, 2, 3];
//! let v2 = [4, 5, 6];
//!
//! (&mut v1, &v2).lockstep().for_each(|step| {
//!     step.apply_ref(|a: &mut i32, b: &i32| *a += *b);
//! });
//! ```

use core::fmt;
use core::ops::{Deref, DerefMut};

use crate::cursor::{Cursor, ReadCursor};
use crate::private_decl;

mod array;
mod tuple;
#[cfg(feature = "alloc")]
mod vec;

/// Iterate several sequences in lockstep.
///
/// Implemented for tuples of up to twelve [`Sequence`](crate::Sequence)s of any mix of kinds,
/// for arrays of sequences and, with the `alloc` feature, for vectors of
/// sequences.
pub trait Lockstep {
    /// The cursors of every slot, in the order the sequences were given.
    type Cursors: Cursors;

    /// Capture the start and end cursor of every sequence.
    ///
    /// Cursors are captured once, slot by slot, start before end.
    fn lockstep(self) -> Zip<Self::Cursors>;
}

/// Iterate several sequences in lockstep.
///
/// This is a free-function form of [`Lockstep::lockstep`].
///
/// # Examples
///
/// ```
/// let names = ["ada", "grace"];
/// let mut years = vec![0, 0, 0];
///
/// lockstep::lockstep((&names, &mut years)).for_each(|step| {
///     step.apply(|name, year| *year = name.len());
/// });
/// assert_eq!(years, [3, 5, 0]);
/// ```
pub fn lockstep<L: Lockstep>(sequences: L) -> Zip<L::Cursors> {
    sequences.lockstep()
}

/// A fixed collection of cursors, one per slot, that move together.
///
/// This trait is sealed. It's implemented for tuples and arrays of
/// [`Cursor`]s, and for vectors of them with the `alloc` feature.
pub trait Cursors {
    private_decl! {}

    /// Advance every slot by one position, in slot order.
    fn advance(&mut self);

    /// Returns `true` if every slot sits at a different position than the
    /// matching slot of `other`.
    fn all_differ(&self, other: &Self) -> bool;
}

/// Access to the cursor at compile-time index `I`.
pub trait Slot<const I: usize> {
    /// The cursor kind of slot `I`.
    type Cursor: Cursor;

    /// Borrow the cursor of slot `I`.
    fn slot(&self) -> &Self::Cursor;

    /// Mutably borrow the cursor of slot `I`.
    fn slot_mut(&mut self) -> &mut Self::Cursor;
}

/// Sequences zipped together, ready to be iterated in lockstep.
///
/// This `struct` is created by the [`lockstep`] method on the [`Lockstep`]
/// trait. See its documentation for more.
///
/// [`lockstep`]: Lockstep::lockstep
#[derive(Clone)]
#[must_use = "a zip does nothing unless it is iterated"]
pub struct Zip<C> {
    start: Step<C>,
    end: Step<C>,
}

impl<C: Cursors> Zip<C> {
    pub(crate) fn new(start: C, end: C) -> Self {
        Self {
            start: Step { cursors: start },
            end: Step { cursors: end },
        }
    }

    /// A copy of the start position.
    ///
    /// Only available when every cursor can be copied, which is the case for
    /// sequences bound read-only. Use [`into_bounds`](Zip::into_bounds) for
    /// the general case.
    pub fn start(&self) -> Proxy<C>
    where
        C: Clone,
    {
        Proxy {
            step: self.start.clone(),
        }
    }

    /// A copy of the end position.
    ///
    /// Only available when every cursor can be copied.
    pub fn end(&self) -> Proxy<C>
    where
        C: Clone,
    {
        Proxy {
            step: self.end.clone(),
        }
    }

    /// Split into the start and end positions.
    ///
    /// # Examples
    ///
    /// ```
    /// use lockstep::prelude::*;
    ///
    /// let mut a = [1, 2, 3];
    /// let b = vec![10, 20];
    ///
    /// let (mut it, end) = (&mut a, &b).lockstep().into_bounds();
    /// while it != end {
    ///     it.apply(|a, b| *a += *b);
    ///     it.advance();
    /// }
    /// assert_eq!(a, [11, 22, 3]);
    /// ```
    pub fn into_bounds(self) -> (Proxy<C>, Proxy<C>) {
        (Proxy { step: self.start }, Proxy { step: self.end })
    }

    /// Drive the loop one step at a time.
    pub fn walk(self) -> Walk<C> {
        let (current, end) = self.into_bounds();
        Walk {
            current,
            end,
            state: WalkState::Fresh,
        }
    }

    /// Call `f` once per step, until the shortest sequence runs out.
    pub fn for_each<F>(self, mut f: F)
    where
        F: FnMut(&mut Step<C>),
    {
        let mut walk = self.walk();
        while let Some(step) = walk.next() {
            f(step);
        }
    }
}

impl<C: fmt::Debug> fmt::Debug for Zip<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Zip")
            .field("start", &self.start.cursors)
            .field("end", &self.end.cursors)
            .finish()
    }
}

/// The cursors of every slot at the current position.
///
/// A `Step` is what the loop body works with. Through `&mut Step` each slot
/// hands out what its sequence allows: `&mut T` for sequences bound mutably,
/// `&T` for sequences bound read-only. Through `&Step` every slot is
/// read-only.
#[derive(Clone)]
pub struct Step<C> {
    pub(crate) cursors: C,
}

impl<C: Cursors> Step<C> {
    /// Advance every slot by one position.
    pub fn advance(&mut self) -> &mut Self {
        self.cursors.advance();
        self
    }

    /// The current element of slot `I`, as its sequence allows.
    ///
    /// # Panics
    ///
    /// Panics if slot `I` is past its end.
    pub fn get<const I: usize>(&mut self) -> <C::Cursor as Cursor>::Item<'_>
    where
        C: Slot<I>,
    {
        self.cursors.slot_mut().get()
    }

    /// A read-only view of the current element of slot `I`.
    ///
    /// # Panics
    ///
    /// Panics if slot `I` is past its end.
    pub fn peek<const I: usize>(&self) -> &<C::Cursor as ReadCursor>::Target
    where
        C: Slot<I>,
        C::Cursor: ReadCursor,
    {
        self.cursors.slot().current()
    }

    /// The cursor of slot `I`.
    pub fn cursor<const I: usize>(&self) -> &C::Cursor
    where
        C: Slot<I>,
    {
        self.cursors.slot()
    }

    /// The cursors of every slot.
    pub fn cursors(&self) -> &C {
        &self.cursors
    }

    /// Take the cursors out of the step.
    pub fn into_cursors(self) -> C {
        self.cursors
    }
}

impl<C: fmt::Debug> fmt::Debug for Step<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Step").field(&self.cursors).finish()
    }
}

/// The position of a zip, compared against the end to stop the loop.
///
/// Dereferences to the [`Step`] it wraps. Two proxies are unequal only while
/// every slot differs: as soon as one slot reaches the position of its
/// counterpart, the proxies compare equal.
#[derive(Clone)]
pub struct Proxy<C> {
    step: Step<C>,
}

impl<C: Cursors> Proxy<C> {
    /// Advance every slot, then return the advanced proxy.
    pub fn advance(&mut self) -> &mut Self {
        self.step.advance();
        self
    }

    /// Advance every slot, returning the position from before the advance.
    pub fn post_advance(&mut self) -> Self
    where
        C: Clone,
    {
        let previous = self.clone();
        self.step.advance();
        previous
    }

    /// Unwrap the step.
    pub fn into_step(self) -> Step<C> {
        self.step
    }
}

impl<C> Deref for Proxy<C> {
    type Target = Step<C>;

    fn deref(&self) -> &Step<C> {
        &self.step
    }
}

impl<C> DerefMut for Proxy<C> {
    fn deref_mut(&mut self) -> &mut Step<C> {
        &mut self.step
    }
}

impl<C: Cursors> PartialEq for Proxy<C> {
    fn eq(&self, other: &Self) -> bool {
        !self.step.cursors.all_differ(&other.step.cursors)
    }
}

impl<C: fmt::Debug> fmt::Debug for Proxy<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Proxy").field(&self.step.cursors).finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WalkState {
    Fresh,
    Running,
    Done,
}

/// Drives a zip one step at a time.
///
/// `Walk` is a lending iterator: every step borrows from the walk, so it can
/// hand out mutable access to the current elements. Loop over it with
/// `while let`.
///
/// This `struct` is created by the [`walk`] method on [`Zip`]. See its
/// documentation for more.
///
/// [`walk`]: Zip::walk
///
/// # Examples
///
/// ```
/// use lockstep::prelude::*;
///
/// let v1 = [1, -1, 2, -2, 3, -3];
/// let v2 = [4, 5, -6, 7, 8];
///
/// let mut res = 0;
/// let mut walk = (&v1, &v2).lockstep().walk();
/// while let Some(step) = walk.next() {
///     let (i1, i2) = (*step.peek::<0>(), *step.peek::<1>());
///     if i1 <= 0 || i2 <= 0 {
///         continue;
///     }
///     res += i1 * i2;
/// }
/// assert_eq!(res, 1 * 4 + 3 * 8);
/// ```
#[derive(Debug)]
pub struct Walk<C> {
    current: Proxy<C>,
    end: Proxy<C>,
    state: WalkState,
}

impl<C: Cursors> Walk<C> {
    /// Advance to the next step, or return `None` once any slot has run out.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<&mut Step<C>> {
        match self.state {
            WalkState::Done => return None,
            WalkState::Fresh => self.state = WalkState::Running,
            WalkState::Running => {
                self.current.advance();
            }
        }

        if self.current != self.end {
            Some(&mut self.current.step)
        } else {
            self.state = WalkState::Done;
            None
        }
    }

    /// Give back the current and end positions.
    pub fn into_bounds(self) -> (Proxy<C>, Proxy<C>) {
        (self.current, self.end)
    }
}
