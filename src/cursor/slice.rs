//! Position-index cursor over contiguous storage.

use std::fmt;

use super::{BidirectionalCursor, BoundedSequence, Cursor, Sequence};

/// Cursor over a borrowed slice.
///
/// Tracks a position index into the slice; the full capability ladder
/// (forward, bidirectional, bounded) is available. Equality holds when two
/// cursors point into the same slice at the same position.
pub struct SliceCursor<'s, T> {
    items: &'s [T],
    pos: usize,
}

impl<'s, T> SliceCursor<'s, T> {
    /// Creates a cursor at the first element of `items`.
    pub fn begin(items: &'s [T]) -> Self {
        Self { items, pos: 0 }
    }

    /// Creates a cursor one past the last element of `items`.
    pub fn end(items: &'s [T]) -> Self {
        Self {
            items,
            pos: items.len(),
        }
    }

    /// Current position index.
    pub fn position(&self) -> usize {
        self.pos
    }
}

impl<'s, T> Cursor<'s> for SliceCursor<'s, T> {
    type Item = T;

    fn current(&self) -> &'s T {
        &self.items[self.pos]
    }

    fn advance(&mut self) {
        debug_assert!(
            self.pos < self.items.len(),
            "advance past the end of a slice cursor"
        );
        self.pos += 1;
    }

    fn at_end(&self) -> bool {
        self.pos == self.items.len()
    }
}

impl<'s, T> BidirectionalCursor<'s> for SliceCursor<'s, T> {
    fn retreat(&mut self) {
        debug_assert!(self.pos > 0, "retreat past the begin of a slice cursor");
        self.pos -= 1;
    }

    fn at_begin(&self) -> bool {
        self.pos == 0
    }
}

impl<T> Clone for SliceCursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SliceCursor<'_, T> {}

impl<T> PartialEq for SliceCursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.items, other.items) && self.pos == other.pos
    }
}

impl<T> Eq for SliceCursor<'_, T> {}

impl<T> fmt::Debug for SliceCursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliceCursor")
            .field("pos", &self.pos)
            .field("len", &self.items.len())
            .finish()
    }
}

impl<T> Sequence for [T] {
    type Item = T;

    type Cursor<'s>
        = SliceCursor<'s, T>
    where
        Self: 's;

    fn begin(&self) -> SliceCursor<'_, T> {
        SliceCursor::begin(self)
    }
}

impl<T> BoundedSequence for [T] {
    fn end(&self) -> SliceCursor<'_, T> {
        SliceCursor::end(self)
    }
}

impl<T> Sequence for Vec<T> {
    type Item = T;

    type Cursor<'s>
        = SliceCursor<'s, T>
    where
        Self: 's;

    fn begin(&self) -> SliceCursor<'_, T> {
        SliceCursor::begin(self.as_slice())
    }
}

impl<T> BoundedSequence for Vec<T> {
    fn end(&self) -> SliceCursor<'_, T> {
        SliceCursor::end(self.as_slice())
    }
}

impl<T, const N: usize> Sequence for [T; N] {
    type Item = T;

    type Cursor<'s>
        = SliceCursor<'s, T>
    where
        Self: 's;

    fn begin(&self) -> SliceCursor<'_, T> {
        SliceCursor::begin(self.as_slice())
    }
}

impl<T, const N: usize> BoundedSequence for [T; N] {
    fn end(&self) -> SliceCursor<'_, T> {
        SliceCursor::end(self.as_slice())
    }
}
