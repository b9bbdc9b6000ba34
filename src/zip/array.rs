use super::{Cursors, Lockstep, Slot, Step, Zip};
use crate::cursor::{Cursor, ReadCursor};
use crate::utils;
use crate::{private_impl, Sequence};

impl<C, const N: usize> Cursors for [C; N]
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

impl<C, const N: usize, const I: usize> Slot<I> for [C; N]
where
    C: Cursor,
{
    type Cursor = C;

    fn slot(&self) -> &C {
        &self[I]
    }

    fn slot_mut(&mut self) -> &mut C {
        &mut self[I]
    }
}

/// Zips `N` sequences of the same kind.
///
/// # Panics
///
/// Panics if `N` is zero: a zip needs at least one sequence to know when to
/// stop.
impl<S, const N: usize> Lockstep for [S; N]
where
    S: Sequence,
{
    type Cursors = [S::Cursor; N];

    fn lockstep(self) -> Zip<Self::Cursors> {
        assert!(N > 0, "cannot iterate zero sequences in lockstep");
        let (start, end) = utils::unzip_array(self.map(Sequence::bounds));
        Zip::new(start, end)
    }
}

impl<C, const N: usize> Step<[C; N]>
where
    C: Cursor,
{
    /// Call `f` with the current element of every slot, in slot order.
    ///
    /// Returns whatever `f` returns.
    pub fn apply<'s, Func, R>(&'s mut self, f: Func) -> R
    where
        C: 's,
        Func: FnOnce([C::Item<'s>; N]) -> R,
    {
        f(self.cursors.each_mut().map(|cursor| cursor.get()))
    }

    /// Call `f` with a read-only view of the current element of every slot,
    /// in slot order.
    pub fn apply_ref<'s, Func, R>(&'s self, f: Func) -> R
    where
        C: ReadCursor + 's,
        Func: FnOnce([&'s C::Target; N]) -> R,
    {
        f(self.cursors.each_ref().map(|cursor| cursor.current()))
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
}
