//! Join-with adaptor
//!
//! Flattens a sequence of sequences into one lazy sequence with a fresh
//! copy of a separator pattern between every pair of consecutive outer
//! elements. Two shapes cover the two ways inner sequences can be reached:
//!
//! - [`JoinView`] — inner sequences are borrowed through the outer cursor;
//!   traversal can be multi-pass and, when every constituent permits,
//!   bidirectional.
//! - [`JoinStream`] — inner sequences arrive by value from an iterator;
//!   traversal is single-pass and elements come out owned.
//!
//! Entry points: [`join_with`], [`join_with_element`], the deferred
//! [`Joiner`], and the [`JoinWithExt`] iterator extension.

mod cache;
mod pattern;
mod stream;
mod view;

pub use cache::InnerSlot;
pub use pattern::Single;
pub use stream::{JoinStream, JoinWithExt};
pub use view::{EndMarker, Iter, JoinCursor, JoinView, RevIter};

use crate::cursor::Sequence;

/// Joins the elements of `outer` with the separator `pattern`.
///
/// Both arguments may be owned or borrowed. The pattern's element type must
/// equal the inner element type; an incompatible pairing is rejected when
/// the call is type-checked, never at traversal time.
///
/// ```
/// use suture::join_with;
///
/// let contigs = vec![b"ACGT".to_vec(), b"GG".to_vec()];
/// let spacer = b"NN".to_vec();
/// let view = join_with(&contigs, &spacer);
/// let joined: Vec<u8> = view.iter().copied().collect();
/// assert_eq!(joined, b"ACGTNNGG");
/// ```
pub fn join_with<O, P>(outer: O, pattern: P) -> JoinView<O, P>
where
    O: Sequence,
    O::Item: Sequence,
    P: Sequence<Item = <<O as Sequence>::Item as Sequence>::Item>,
{
    JoinView::new(outer, pattern)
}

/// Joins the elements of `outer` with a single separator element, wrapped
/// into a length-one pattern automatically.
pub fn join_with_element<O>(
    outer: O,
    element: <<O as Sequence>::Item as Sequence>::Item,
) -> JoinView<O, Single<<<O as Sequence>::Item as Sequence>::Item>>
where
    O: Sequence,
    O::Item: Sequence,
{
    JoinView::new(outer, Single::new(element))
}

/// A join adaptor with the pattern bound but the outer sequence deferred.
///
/// Useful for pipeline-style composition: build the joiner once, apply it
/// to any number of outer sequences later without restating the pattern.
///
/// ```
/// use suture::Joiner;
///
/// let joiner = Joiner::new(vec![0u8]);
/// let a: Vec<u8> = joiner.apply(vec![vec![1], vec![2]]).iter().copied().collect();
/// let b: Vec<u8> = joiner.apply(vec![vec![3], vec![4]]).iter().copied().collect();
/// assert_eq!(a, vec![1, 0, 2]);
/// assert_eq!(b, vec![3, 0, 4]);
/// ```
#[derive(Debug, Clone)]
pub struct Joiner<P> {
    pattern: P,
}

impl<P> Joiner<P> {
    /// Creates a deferred joiner holding only the pattern.
    pub fn new(pattern: P) -> Self {
        Self { pattern }
    }

    /// The held pattern.
    pub fn pattern(&self) -> &P {
        &self.pattern
    }

    /// Applies the joiner to an outer sequence, leaving the joiner reusable.
    pub fn apply<O>(&self, outer: O) -> JoinView<O, P>
    where
        O: Sequence,
        O::Item: Sequence,
        P: Sequence<Item = <<O as Sequence>::Item as Sequence>::Item> + Clone,
    {
        JoinView::new(outer, self.pattern.clone())
    }

    /// Consumes the joiner, moving the pattern into the view.
    pub fn into_view<O>(self, outer: O) -> JoinView<O, P>
    where
        O: Sequence,
        O::Item: Sequence,
        P: Sequence<Item = <<O as Sequence>::Item as Sequence>::Item>,
    {
        JoinView::new(outer, self.pattern)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_element_separator_wraps_automatically() {
        let outer = vec![vec![1, 2], vec![3]];
        let view = join_with_element(&outer, 0);
        let joined: Vec<i32> = view.iter().copied().collect();
        assert_eq!(joined, vec![1, 2, 0, 3]);
    }

    #[test]
    fn joiner_is_reusable() {
        let joiner = Joiner::new(vec![0]);
        let first = vec![vec![1], vec![2]];
        let second = vec![vec![3], vec![4], vec![5]];
        let a: Vec<i32> = joiner.apply(&first).iter().copied().collect();
        let b: Vec<i32> = joiner.apply(&second).iter().copied().collect();
        assert_eq!(a, vec![1, 0, 2]);
        assert_eq!(b, vec![3, 0, 4, 0, 5]);
        assert_eq!(joiner.pattern(), &vec![0]);
    }

    #[test]
    fn joiner_into_view_moves_the_pattern() {
        let joiner = Joiner::new(vec![9]);
        let outer = vec![vec![1], vec![2]];
        let view = joiner.into_view(&outer);
        let joined: Vec<i32> = view.iter().copied().collect();
        assert_eq!(joined, vec![1, 9, 2]);
    }
}
