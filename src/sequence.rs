use crate::cursor::Cursor;

/// Anything that can produce a start and an end cursor.
///
/// This is the one capability the zip core asks of every sequence it
/// combines. Containers implement it through references: `&v` produces
/// read-only cursors and `&mut v` produces mutable ones, so the mutability of
/// each slot is decided by how the sequence is bound.
///
/// # Examples
///
/// ```
/// use lockstep::cursor::Cursor;
/// use lockstep::Sequence;
///
/// let v = vec![1, 2, 3];
/// let (mut start, end) = (&v).bounds();
///
/// let mut sum = 0;
/// while start != end {
///     sum += *start.get();
///     start.advance();
/// }
/// assert_eq!(sum, 6);
/// ```
pub trait Sequence {
    /// Which kind of cursor does this sequence produce?
    type Cursor: Cursor;

    /// Produce the start cursor, then the end cursor.
    fn bounds(self) -> (Self::Cursor, Self::Cursor);
}
