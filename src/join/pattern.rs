//! Length-one pattern wrapper.

use crate::cursor::{BoundedSequence, Sequence, SliceCursor};

/// A pattern sequence holding exactly one separator element.
///
/// Produced by [`join_with_element`](crate::join::join_with_element) so that
/// a lone separator composes with the view machinery like any other pattern.
/// Backed by a one-element array, it reuses the slice cursor and therefore
/// offers the full capability ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Single<T> {
    element: [T; 1],
}

impl<T> Single<T> {
    /// Wraps `element` into a length-one pattern.
    pub fn new(element: T) -> Self {
        Self { element: [element] }
    }

    /// The wrapped element.
    pub fn get(&self) -> &T {
        &self.element[0]
    }

    /// Unwraps the element.
    pub fn into_inner(self) -> T {
        let [element] = self.element;
        element
    }
}

impl<T> Sequence for Single<T> {
    type Item = T;

    type Cursor<'s>
        = SliceCursor<'s, T>
    where
        Self: 's;

    fn begin(&self) -> SliceCursor<'_, T> {
        SliceCursor::begin(&self.element)
    }
}

impl<T> BoundedSequence for Single<T> {
    fn end(&self) -> SliceCursor<'_, T> {
        SliceCursor::end(&self.element)
    }
}
