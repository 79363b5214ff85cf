//! Pull-based cursor protocol
//!
//! A cursor is a traversal handle over a sequence: dereference the current
//! position, advance, compare against the end. Capabilities are layered as
//! traits so that adaptors can state, per impl block, exactly how much
//! traversal power they require — nothing is decided at runtime.
//!
//! Tiers:
//! 1. [`Cursor`] — single-pass pull traversal
//! 2. [`ForwardCursor`] — multi-pass: copies replay the same elements
//! 3. [`BidirectionalCursor`] — adds backward stepping

mod slice;

pub use slice::SliceCursor;

/// A pull-based traversal handle over a sequence borrowed for `'s`.
///
/// Dereferencing hands out `&'s` references tied to the underlying sequence,
/// not to the cursor borrow, so elements stay usable while the cursor moves
/// on.
pub trait Cursor<'s> {
    /// Element type of the traversed sequence.
    type Item;

    /// Returns the element at the current position.
    ///
    /// # Panics
    /// May panic if the cursor sits at the end; calling `current` there is a
    /// contract violation.
    fn current(&self) -> &'s Self::Item;

    /// Moves the cursor one position forward.
    ///
    /// Advancing a cursor that already sits at the end is a contract
    /// violation.
    fn advance(&mut self);

    /// Returns `true` when the cursor sits one past the last element.
    fn at_end(&self) -> bool;
}

/// Multi-pass forward traversal.
///
/// A forward cursor can be copied and compared; a copy resumes from the same
/// position and replays the same elements. Blanket-implemented for every
/// cursor that is `Clone + PartialEq`.
pub trait ForwardCursor<'s>: Cursor<'s> + Clone + PartialEq {}

impl<'s, C> ForwardCursor<'s> for C where C: Cursor<'s> + Clone + PartialEq {}

/// Forward traversal plus backward stepping.
pub trait BidirectionalCursor<'s>: Cursor<'s> {
    /// Moves the cursor one position back.
    ///
    /// Retreating a cursor that sits at the first element is a contract
    /// violation.
    fn retreat(&mut self);

    /// Returns `true` when the cursor sits at the first element.
    fn at_begin(&self) -> bool;
}

/// A type that can hand out cursors over its elements.
pub trait Sequence {
    /// Element type.
    type Item;

    /// Cursor type for a borrow of length `'s`.
    type Cursor<'s>: Cursor<'s, Item = Self::Item>
    where
        Self: 's;

    /// Returns a cursor positioned at the first element.
    fn begin(&self) -> Self::Cursor<'_>;

    /// Returns `true` when the sequence holds no elements.
    fn is_empty(&self) -> bool {
        self.begin().at_end()
    }
}

/// A sequence whose end position is directly reachable as a cursor.
///
/// This is what makes symmetric backward traversal possible: an end cursor
/// can be compared against (and retreated from) like any other position.
pub trait BoundedSequence: Sequence {
    /// Returns a cursor positioned one past the last element.
    fn end(&self) -> Self::Cursor<'_>;
}

impl<'r, S> Sequence for &'r S
where
    S: Sequence + ?Sized,
{
    type Item = S::Item;

    type Cursor<'s>
        = S::Cursor<'s>
    where
        Self: 's;

    fn begin(&self) -> Self::Cursor<'_> {
        (**self).begin()
    }
}

impl<'r, S> BoundedSequence for &'r S
where
    S: BoundedSequence + ?Sized,
{
    fn end(&self) -> Self::Cursor<'_> {
        (**self).end()
    }
}
