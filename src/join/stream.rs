//! Single-pass join over by-value inner sequences
//!
//! When the outer traversal synthesizes its inner sequences by value — any
//! `Iterator` whose items own their elements — no multi-pass or backward
//! capability can be offered, regardless of how capable the constituents
//! are: there is a single slot for the materialized inner sequence, so a
//! second independently advancing traversal would invalidate the first.
//! Ownership makes that hazard unrepresentable here; [`JoinStream`] owns the
//! slot and is a plain single-pass [`Iterator`].
//!
//! Elements come out by value: inner elements are relocated, never cloned,
//! while a fresh copy of the pattern is played between every pair of
//! consecutive outer items.

use std::fmt;
use std::iter::FusedIterator;

use super::cache::InnerSlot;

/// Which phase of the traversal the stream currently sits in.
enum StreamPhase<I, PC> {
    /// Inside the current inner sequence.
    Inner(I),
    /// Inside a separator occurrence; the next inner sequence waits in the
    /// slot meanwhile.
    Pattern(PC),
    /// The outer iterator is exhausted.
    Exhausted,
}

impl<I, PC> StreamPhase<I, PC> {
    fn name(&self) -> &'static str {
        match self {
            StreamPhase::Inner(_) => "inner",
            StreamPhase::Pattern(_) => "pattern",
            StreamPhase::Exhausted => "exhausted",
        }
    }
}

/// Single-pass lazy join of an iterator of owned sequences with a separator
/// pattern.
///
/// Built through [`JoinWithExt::join_with`] or
/// [`JoinWithExt::join_with_element`].
pub struct JoinStream<O, P>
where
    O: Iterator,
    O::Item: IntoIterator,
{
    outer: O,
    pattern: P,
    slot: InnerSlot<O::Item>,
    phase: StreamPhase<<O::Item as IntoIterator>::IntoIter, P>,
}

impl<O, P> JoinStream<O, P>
where
    O: Iterator,
    O::Item: IntoIterator,
    P: Iterator<Item = <O::Item as IntoIterator>::Item> + Clone,
{
    pub(crate) fn new(mut outer: O, pattern: P) -> Self {
        let phase = match outer.next() {
            Some(first) => StreamPhase::Inner(first.into_iter()),
            None => StreamPhase::Exhausted,
        };
        Self {
            outer,
            pattern,
            slot: InnerSlot::empty(),
            phase,
        }
    }
}

impl<O, P> Iterator for JoinStream<O, P>
where
    O: Iterator,
    O::Item: IntoIterator,
    P: Iterator<Item = <O::Item as IntoIterator>::Item> + Clone,
{
    type Item = P::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match &mut self.phase {
                StreamPhase::Inner(inner) => {
                    if let Some(element) = inner.next() {
                        return Some(element);
                    }
                    // Inner exhausted: cross the outer boundary. The next
                    // inner sequence parks in the slot until the separator
                    // has played out.
                    match self.outer.next() {
                        Some(next_inner) => {
                            self.slot.materialize(next_inner);
                            self.phase = StreamPhase::Pattern(self.pattern.clone());
                        }
                        None => {
                            self.phase = StreamPhase::Exhausted;
                            return None;
                        }
                    }
                }
                StreamPhase::Pattern(separator) => {
                    if let Some(element) = separator.next() {
                        return Some(element);
                    }
                    let inner = self.slot.take();
                    self.phase = StreamPhase::Inner(inner.into_iter());
                }
                StreamPhase::Exhausted => return None,
            }
        }
    }
}

impl<O, P> FusedIterator for JoinStream<O, P>
where
    O: Iterator,
    O::Item: IntoIterator,
    P: Iterator<Item = <O::Item as IntoIterator>::Item> + Clone,
{
}

impl<O, P> fmt::Debug for JoinStream<O, P>
where
    O: Iterator,
    O::Item: IntoIterator,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JoinStream")
            .field("phase", &self.phase.name())
            .field("slot", &self.slot)
            .finish_non_exhaustive()
    }
}

/// Pipeline entry points for joining iterators of owned sequences.
///
/// Blanket-implemented for every `Iterator`, so the adaptor composes like
/// any other iterator combinator:
///
/// ```
/// use suture::JoinWithExt;
///
/// let reads = vec![b"ACGT".to_vec(), b"GG".to_vec()];
/// let joined: Vec<u8> = reads.into_iter().join_with(b"NN".to_vec()).collect();
/// assert_eq!(joined, b"ACGTNNGG");
/// ```
pub trait JoinWithExt: Iterator + Sized {
    /// Joins the inner sequences with a fresh copy of `pattern` between
    /// every pair of consecutive items.
    ///
    /// The pattern's element type must equal the inner element type; an
    /// incompatible pairing fails to type-check.
    fn join_with<P>(self, pattern: P) -> JoinStream<Self, P::IntoIter>
    where
        Self::Item: IntoIterator,
        P: IntoIterator<Item = <Self::Item as IntoIterator>::Item>,
        P::IntoIter: Clone,
    {
        JoinStream::new(self, pattern.into_iter())
    }

    /// Joins the inner sequences with a single separator element, wrapped
    /// into a length-one pattern automatically.
    fn join_with_element(
        self,
        element: <Self::Item as IntoIterator>::Item,
    ) -> JoinStream<Self, std::iter::Once<<Self::Item as IntoIterator>::Item>>
    where
        Self::Item: IntoIterator,
        <Self::Item as IntoIterator>::Item: Clone,
    {
        JoinStream::new(self, std::iter::once(element))
    }
}

impl<I: Iterator> JoinWithExt for I {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_owned_sequences() {
        let outer = vec![vec![1, 2], vec![3], vec![4, 5, 6]];
        let joined: Vec<i32> = outer.into_iter().join_with(vec![0]).collect();
        assert_eq!(joined, vec![1, 2, 0, 3, 0, 4, 5, 6]);
    }

    #[test]
    fn separator_spans_empty_inner_sequences() {
        let outer = vec![vec![1, 2], vec![], vec![3]];
        let joined: Vec<i32> = outer.into_iter().join_with(vec![9, 9]).collect();
        assert_eq!(joined, vec![1, 2, 9, 9, 9, 9, 3]);
    }

    #[test]
    fn empty_outer_yields_nothing() {
        let outer: Vec<Vec<i32>> = vec![];
        let mut stream = outer.into_iter().join_with(vec![1]);
        assert_eq!(stream.next(), None);
        assert_eq!(stream.next(), None);
    }

    #[test]
    fn singleton_outer_is_identity() {
        let outer = vec![vec![1]];
        let joined: Vec<i32> = outer.into_iter().join_with(vec![9, 9]).collect();
        assert_eq!(joined, vec![1]);
    }

    #[test]
    fn empty_pattern_is_plain_concatenation() {
        let outer = vec![vec![1], vec![2]];
        let joined: Vec<i32> = outer.into_iter().join_with(Vec::new()).collect();
        assert_eq!(joined, vec![1, 2]);
    }

    #[test]
    fn single_element_separator() {
        let outer = vec![vec![1, 2], vec![3], vec![], vec![4]];
        let joined: Vec<i32> = outer.into_iter().join_with_element(42).collect();
        assert_eq!(joined, vec![1, 2, 42, 3, 42, 42, 4]);
    }

    #[test]
    fn works_with_non_clone_inner_elements() {
        // Inner elements are relocated, not cloned; only the pattern's
        // elements need Clone.
        #[derive(Debug, PartialEq)]
        struct Opaque(u8);

        let outer = vec![vec![Opaque(1)], vec![Opaque(2)]];
        let joined: Vec<Opaque> = outer.into_iter().join_with(std::iter::empty()).collect();
        assert_eq!(joined, vec![Opaque(1), Opaque(2)]);
    }

    #[test]
    fn stream_is_fused() {
        let outer = vec![vec![1]];
        let mut stream = outer.into_iter().join_with(vec![0]);
        assert_eq!(stream.next(), Some(1));
        assert_eq!(stream.next(), None);
        assert_eq!(stream.next(), None);
    }

    #[test]
    fn pattern_replays_from_its_begin_each_occurrence() {
        let outer = vec![vec![1], vec![2], vec![3]];
        let joined: Vec<i32> = outer.into_iter().join_with(vec![7, 8]).collect();
        assert_eq!(joined, vec![1, 7, 8, 2, 7, 8, 3]);
    }
}
