use alloc::vec::Vec;

use super::{Cursors, Lockstep, Step, Zip};
use crate::cursor::{Cursor, ReadCursor};
use crate::{private_impl, Sequence};

impl<C> Cursors for Vec<C>
where
    C: Cursor,
{
    private_impl! {}

    fn advance(&mut self) {
        for cursor in self.iter_mut() {
            cursor.advance();
        }
    }

    fn all_differ(&self, other: &Self) -> bool {
        self.iter().zip(other.iter()).all(|(a, b)| a != b)
    }
}

/// Zips any number of sequences of the same kind.
///
/// # Panics
///
/// Panics if the vector is empty: a zip needs at least one sequence to know
/// when to stop.
impl<S> Lockstep for Vec<S>
where
    S: Sequence,
{
    type Cursors = Vec<S::Cursor>;

    fn lockstep(self) -> Zip<Self::Cursors> {
        assert!(!self.is_empty(), "cannot iterate zero sequences in lockstep");
        let (start, end) = self.into_iter().map(Sequence::bounds).unzip();
        Zip::new(start, end)
    }
}

impl<C> Step<Vec<C>>
where
    C: Cursor,
{
    /// Call `f` with the current element of every slot, in slot order.
    ///
    /// Returns whatever `f` returns.
    pub fn apply<'s, Func, R>(&'s mut self, f: Func) -> R
    where
        C: 's,
        Func: FnOnce(Vec<C::Item<'s>>) -> R,
    {
        f(self.cursors.iter_mut().map(|cursor| cursor.get()).collect())
    }

    /// Call `f` with a read-only view of the current element of every slot,
    /// in slot order.
    pub fn apply_ref<'s, Func, R>(&'s self, f: Func) -> R
    where
        C: ReadCursor + 's,
        Func: FnOnce(Vec<&'s C::Target>) -> R,
    {
        f(self.cursors.iter().map(|cursor| cursor.current()).collect())
    }

    /// The current element of slot `index`, or `None` if there is no such
    /// slot.
    pub fn get_at(&mut self, index: usize) -> Option<C::Item<'_>> {
        self.cursors.get_mut(index).map(|cursor| cursor.get())
    }

    /// A read-only view of the current element of slot `index`, or `None` if
    /// there is no such slot.
    pub fn peek_at(&self, index: usize) -> Option<&C::Target>
    where
        C: ReadCursor,
    {
        self.cursors.get(index).map(|cursor| cursor.current())
    }

    /// How many slots this step has.
    pub fn len(&self) -> usize {
        self.cursors.len()
    }

    /// Returns `true` if the step has no slots, which never happens for a
    /// step of a built zip.
    pub fn is_empty(&self) -> bool {
        self.cursors.is_empty()
    }
}
