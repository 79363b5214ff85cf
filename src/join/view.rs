//! Multi-pass join view
//!
//! [`JoinView`] lazily presents a sequence of sequences as one flat sequence
//! with a separator pattern between every pair of consecutive outer
//! elements. Inner sequences are reached by reference through the outer
//! cursor, so no caching is involved and cursors can be copied, compared and
//! — when every constituent allows it — stepped backwards.
//!
//! The traversal is a two-phase state machine: a [`JoinCursor`] is either
//! inside an inner sequence or inside the separator pattern, and `satisfy`
//! skips whichever phase turns out to be empty before a position ever
//! becomes observable.

use std::fmt;
use std::iter::FusedIterator;

use crate::cursor::{BidirectionalCursor, BoundedSequence, Cursor, Sequence};

type ItemOf<O> = <<O as Sequence>::Item as Sequence>::Item;
type OuterCursor<'v, O> = <O as Sequence>::Cursor<'v>;
type InnerCursor<'v, O> = <<O as Sequence>::Item as Sequence>::Cursor<'v>;
type PatternCursor<'v, P> = <P as Sequence>::Cursor<'v>;

/// Lazy view joining the elements of an outer sequence with a separator
/// pattern.
///
/// `O` is a sequence whose elements are themselves sequences; `P` is the
/// pattern, whose element type must equal the inner element type (enforced
/// as a trait bound, so an incompatible pairing fails to type-check rather
/// than at runtime). Both can be owned or borrowed — `&S` is a `Sequence`
/// whenever `S` is.
#[derive(Debug, Clone)]
pub struct JoinView<O, P> {
    outer: O,
    pattern: P,
}

/// Which phase of the traversal a [`JoinCursor`] currently sits in.
enum Phase<PC, IC> {
    /// Inside the separator pattern.
    Pattern(PC),
    /// Inside the inner sequence selected by the outer cursor.
    Inner(IC),
    /// The outer cursor reached its end; no phase is active.
    Exhausted,
}

impl<PC: Clone, IC: Clone> Clone for Phase<PC, IC> {
    fn clone(&self) -> Self {
        match self {
            Phase::Pattern(cur) => Phase::Pattern(cur.clone()),
            Phase::Inner(cur) => Phase::Inner(cur.clone()),
            Phase::Exhausted => Phase::Exhausted,
        }
    }
}

impl<PC: PartialEq, IC: PartialEq> PartialEq for Phase<PC, IC> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Phase::Pattern(a), Phase::Pattern(b)) => a == b,
            (Phase::Inner(a), Phase::Inner(b)) => a == b,
            (Phase::Exhausted, Phase::Exhausted) => true,
            _ => false,
        }
    }
}

impl<PC, IC> Phase<PC, IC> {
    fn name(&self) -> &'static str {
        match self {
            Phase::Pattern(_) => "pattern",
            Phase::Inner(_) => "inner",
            Phase::Exhausted => "exhausted",
        }
    }
}

/// Traversal cursor over a [`JoinView`].
///
/// Composes the outer cursor with either a pattern cursor or an inner
/// cursor. Capabilities follow the constituents: the cursor is copyable and
/// comparable when all three underlying cursors are, and supports
/// [`retreat`](JoinCursor::retreat) when all three are bidirectional and the
/// inner and pattern sequences are bounded.
pub struct JoinCursor<'v, O, P>
where
    O: Sequence + 'v,
    O::Item: Sequence + 'v,
    P: Sequence<Item = ItemOf<O>> + 'v,
{
    view: &'v JoinView<O, P>,
    outer: OuterCursor<'v, O>,
    phase: Phase<PatternCursor<'v, P>, InnerCursor<'v, O>>,
}

impl<O, P> JoinView<O, P>
where
    O: Sequence,
    O::Item: Sequence,
    P: Sequence<Item = ItemOf<O>>,
{
    /// Creates the view. The result is lazy: nothing is traversed until a
    /// cursor is pulled.
    pub fn new(outer: O, pattern: P) -> Self {
        Self { outer, pattern }
    }

    /// Returns a cursor at the first visible element (or terminal, when the
    /// joined result is empty).
    pub fn begin(&self) -> JoinCursor<'_, O, P> {
        let outer = self.outer.begin();
        let mut cursor = JoinCursor {
            view: self,
            outer,
            phase: Phase::Exhausted,
        };
        if !cursor.outer.at_end() {
            let inner = cursor.outer.current();
            cursor.phase = Phase::Inner(inner.begin());
            cursor.satisfy();
        }
        cursor
    }

    /// Returns a cursor at the terminal position.
    ///
    /// Available when the outer sequence is bounded; with it, equality of a
    /// live cursor against the end is a plain cursor comparison.
    pub fn end<'a>(&'a self) -> JoinCursor<'a, O, P>
    where
        O: BoundedSequence,
    {
        JoinCursor {
            view: self,
            outer: self.outer.end(),
            phase: Phase::Exhausted,
        }
    }

    /// Returns the boundary marker for this view, usable with
    /// [`JoinCursor::at_end`] style comparisons when no end cursor exists.
    pub fn end_marker(&self) -> EndMarker {
        EndMarker
    }

    /// Forward iterator over references to the joined elements.
    pub fn iter(&self) -> Iter<'_, O, P> {
        Iter {
            cursor: self.begin(),
        }
    }

    /// Backward iterator over references to the joined elements.
    ///
    /// Requires the bidirectional capability tier: every constituent cursor
    /// can step backwards, and the inner and pattern sequences expose their
    /// end as a cursor.
    pub fn iter_rev<'a>(&'a self) -> RevIter<'a, O, P>
    where
        O: BoundedSequence,
        O::Item: BoundedSequence,
        P: BoundedSequence,
        OuterCursor<'a, O>: BidirectionalCursor<'a> + PartialEq,
        InnerCursor<'a, O>: BidirectionalCursor<'a> + PartialEq,
        PatternCursor<'a, P>: BidirectionalCursor<'a> + PartialEq,
    {
        RevIter {
            cursor: self.end(),
            begin: self.begin(),
        }
    }

    /// The outer sequence.
    pub fn outer(&self) -> &O {
        &self.outer
    }

    /// The separator pattern.
    pub fn pattern(&self) -> &P {
        &self.pattern
    }

    /// Consumes the view and returns its parts.
    pub fn into_parts(self) -> (O, P) {
        (self.outer, self.pattern)
    }
}

impl<'v, O, P> JoinCursor<'v, O, P>
where
    O: Sequence + 'v,
    O::Item: Sequence + 'v,
    P: Sequence<Item = ItemOf<O>> + 'v,
{
    /// Returns the element at the current position.
    ///
    /// The reference borrows from the view's sequences, not from the cursor,
    /// so it stays valid while the cursor keeps moving.
    ///
    /// # Panics
    /// Panics when the cursor sits at the terminal position.
    pub fn current(&self) -> &'v ItemOf<O> {
        match &self.phase {
            Phase::Pattern(cur) => cur.current(),
            Phase::Inner(cur) => cur.current(),
            Phase::Exhausted => panic!("current() on a join cursor at the end of its view"),
        }
    }

    /// Steps one position forward, skipping any empty phases.
    ///
    /// # Panics
    /// Panics when the cursor already sits at the terminal position.
    pub fn advance(&mut self) {
        match &mut self.phase {
            Phase::Pattern(cur) => cur.advance(),
            Phase::Inner(cur) => cur.advance(),
            Phase::Exhausted => panic!("advance() on a join cursor at the end of its view"),
        }
        self.satisfy();
    }

    /// Returns `true` once the outer sequence is exhausted.
    pub fn at_end(&self) -> bool {
        matches!(self.phase, Phase::Exhausted)
    }

    /// Returns `true` while the cursor sits inside a separator occurrence.
    pub fn in_separator(&self) -> bool {
        matches!(self.phase, Phase::Pattern(_))
    }

    /// Restores the cursor invariant: never rest on an exhausted phase.
    ///
    /// Skips an exhausted pattern into the next inner sequence and an
    /// exhausted inner sequence into the next separator occurrence, crossing
    /// as many empty phases as needed. An empty pattern therefore never
    /// becomes visible, and empty inner sequences never block progress —
    /// but a separator occurrence still lies between every pair of
    /// consecutive outer positions, whether or not their contents are empty.
    fn satisfy(&mut self) {
        loop {
            match &self.phase {
                Phase::Pattern(cur) => {
                    if !cur.at_end() {
                        return;
                    }
                    let inner = self.outer.current();
                    self.phase = Phase::Inner(inner.begin());
                }
                Phase::Inner(cur) => {
                    if !cur.at_end() {
                        return;
                    }
                    self.outer.advance();
                    if self.outer.at_end() {
                        self.phase = Phase::Exhausted;
                        return;
                    }
                    self.phase = Phase::Pattern(self.view.pattern.begin());
                }
                Phase::Exhausted => return,
            }
        }
    }
}

impl<'v, O, P> JoinCursor<'v, O, P>
where
    O: Sequence + 'v,
    O::Item: BoundedSequence + 'v,
    P: BoundedSequence<Item = ItemOf<O>> + 'v,
    OuterCursor<'v, O>: BidirectionalCursor<'v>,
    InnerCursor<'v, O>: BidirectionalCursor<'v>,
    PatternCursor<'v, P>: BidirectionalCursor<'v>,
{
    /// Steps one position back, mirroring [`advance`](JoinCursor::advance).
    ///
    /// From the terminal position this re-enters the last inner sequence at
    /// its end; empty phases are then crossed backwards (checking begin
    /// instead of end) until a dereferenceable position is reached.
    ///
    /// # Panics
    /// Panics when no earlier position exists.
    pub fn retreat(&mut self) {
        if matches!(self.phase, Phase::Exhausted) {
            self.outer.retreat();
            let inner = self.outer.current();
            self.phase = Phase::Inner(inner.end());
        }
        loop {
            match &self.phase {
                Phase::Pattern(cur) => {
                    if !cur.at_begin() {
                        break;
                    }
                    self.outer.retreat();
                    let inner = self.outer.current();
                    self.phase = Phase::Inner(inner.end());
                }
                Phase::Inner(cur) => {
                    if !cur.at_begin() {
                        break;
                    }
                    self.phase = Phase::Pattern(self.view.pattern.end());
                }
                Phase::Exhausted => unreachable!("terminal phase was replaced above"),
            }
        }
        match &mut self.phase {
            Phase::Pattern(cur) => cur.retreat(),
            Phase::Inner(cur) => cur.retreat(),
            Phase::Exhausted => unreachable!("terminal phase was replaced above"),
        }
    }
}

impl<'v, O, P> Clone for JoinCursor<'v, O, P>
where
    O: Sequence + 'v,
    O::Item: Sequence + 'v,
    P: Sequence<Item = ItemOf<O>> + 'v,
    OuterCursor<'v, O>: Clone,
    InnerCursor<'v, O>: Clone,
    PatternCursor<'v, P>: Clone,
{
    fn clone(&self) -> Self {
        Self {
            view: self.view,
            outer: self.outer.clone(),
            phase: self.phase.clone(),
        }
    }
}

impl<'v, O, P> PartialEq for JoinCursor<'v, O, P>
where
    O: Sequence + 'v,
    O::Item: Sequence + 'v,
    P: Sequence<Item = ItemOf<O>> + 'v,
    OuterCursor<'v, O>: PartialEq,
    InnerCursor<'v, O>: PartialEq,
    PatternCursor<'v, P>: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.outer == other.outer && self.phase == other.phase
    }
}

impl<'v, O, P> fmt::Debug for JoinCursor<'v, O, P>
where
    O: Sequence + 'v,
    O::Item: Sequence + 'v,
    P: Sequence<Item = ItemOf<O>> + 'v,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JoinCursor")
            .field("phase", &self.phase.name())
            .finish_non_exhaustive()
    }
}

/// Boundary marker standing in for the terminal position.
///
/// Compares equal to a [`JoinCursor`] exactly when the cursor's outer
/// position has reached the outer end; which phase the cursor was nominally
/// in is irrelevant, since outer exhaustion is the sole terminal condition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EndMarker;

impl<'v, O, P> PartialEq<EndMarker> for JoinCursor<'v, O, P>
where
    O: Sequence + 'v,
    O::Item: Sequence + 'v,
    P: Sequence<Item = ItemOf<O>> + 'v,
{
    fn eq(&self, _: &EndMarker) -> bool {
        self.at_end()
    }
}

impl<'v, O, P> PartialEq<JoinCursor<'v, O, P>> for EndMarker
where
    O: Sequence + 'v,
    O::Item: Sequence + 'v,
    P: Sequence<Item = ItemOf<O>> + 'v,
{
    fn eq(&self, cursor: &JoinCursor<'v, O, P>) -> bool {
        cursor.at_end()
    }
}

/// Forward iterator over a [`JoinView`], yielding element references.
pub struct Iter<'v, O, P>
where
    O: Sequence + 'v,
    O::Item: Sequence + 'v,
    P: Sequence<Item = ItemOf<O>> + 'v,
{
    cursor: JoinCursor<'v, O, P>,
}

impl<'v, O, P> Iterator for Iter<'v, O, P>
where
    O: Sequence + 'v,
    O::Item: Sequence + 'v,
    P: Sequence<Item = ItemOf<O>> + 'v,
{
    type Item = &'v ItemOf<O>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor.at_end() {
            return None;
        }
        let item = self.cursor.current();
        self.cursor.advance();
        Some(item)
    }
}

impl<'v, O, P> FusedIterator for Iter<'v, O, P>
where
    O: Sequence + 'v,
    O::Item: Sequence + 'v,
    P: Sequence<Item = ItemOf<O>> + 'v,
{
}

impl<'v, O, P> fmt::Debug for Iter<'v, O, P>
where
    O: Sequence + 'v,
    O::Item: Sequence + 'v,
    P: Sequence<Item = ItemOf<O>> + 'v,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("phase", &self.cursor.phase.name())
            .finish_non_exhaustive()
    }
}

impl<'v, O, P> IntoIterator for &'v JoinView<O, P>
where
    O: Sequence + 'v,
    O::Item: Sequence + 'v,
    P: Sequence<Item = ItemOf<O>> + 'v,
{
    type Item = &'v ItemOf<O>;
    type IntoIter = Iter<'v, O, P>;

    fn into_iter(self) -> Iter<'v, O, P> {
        self.iter()
    }
}

/// Backward iterator over a [`JoinView`], yielding element references from
/// the last joined element to the first.
pub struct RevIter<'v, O, P>
where
    O: Sequence + 'v,
    O::Item: Sequence + 'v,
    P: Sequence<Item = ItemOf<O>> + 'v,
{
    cursor: JoinCursor<'v, O, P>,
    begin: JoinCursor<'v, O, P>,
}

impl<'v, O, P> Iterator for RevIter<'v, O, P>
where
    O: Sequence + 'v,
    O::Item: BoundedSequence + 'v,
    P: BoundedSequence<Item = ItemOf<O>> + 'v,
    OuterCursor<'v, O>: BidirectionalCursor<'v> + PartialEq,
    InnerCursor<'v, O>: BidirectionalCursor<'v> + PartialEq,
    PatternCursor<'v, P>: BidirectionalCursor<'v> + PartialEq,
{
    type Item = &'v ItemOf<O>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor == self.begin {
            return None;
        }
        self.cursor.retreat();
        Some(self.cursor.current())
    }
}

impl<'v, O, P> fmt::Debug for RevIter<'v, O, P>
where
    O: Sequence + 'v,
    O::Item: Sequence + 'v,
    P: Sequence<Item = ItemOf<O>> + 'v,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RevIter")
            .field("phase", &self.cursor.phase.name())
            .finish_non_exhaustive()
    }
}
