//! Single-slot storage for inner sequences synthesized by value.

use std::fmt;

/// Holds at most one materialized inner sequence.
///
/// Used only when the outer traversal produces inner sequences by value:
/// the sequence parked here stays alive while the separator pattern plays
/// out, then moves into the active traversal. The slot is valid for exactly
/// one outer position; advancing the outer traversal without re-filling it
/// invalidates the contents.
pub struct InnerSlot<S> {
    slot: Option<S>,
}

impl<S> InnerSlot<S> {
    /// Creates an empty slot.
    pub fn empty() -> Self {
        Self { slot: None }
    }

    /// Fills (or overwrites) the slot with the inner sequence for the
    /// current outer position.
    pub fn materialize(&mut self, inner: S) {
        self.slot = Some(inner);
    }

    /// Moves the materialized inner sequence out of the slot.
    ///
    /// # Panics
    /// Panics when the slot was not filled for the current outer position;
    /// reading an unfilled slot is a contract violation, not a recoverable
    /// condition.
    pub fn take(&mut self) -> S {
        self.slot
            .take()
            .expect("inner slot read before materialize")
    }

    /// Returns `true` while an inner sequence is parked in the slot.
    pub fn is_filled(&self) -> bool {
        self.slot.is_some()
    }
}

impl<S> Default for InnerSlot<S> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<S> fmt::Debug for InnerSlot<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InnerSlot")
            .field("filled", &self.is_filled())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn materialize_then_take() {
        let mut slot = InnerSlot::empty();
        assert!(!slot.is_filled());
        slot.materialize(vec![1, 2, 3]);
        assert!(slot.is_filled());
        assert_eq!(slot.take(), vec![1, 2, 3]);
        assert!(!slot.is_filled());
    }

    #[test]
    fn refill_overwrites() {
        let mut slot = InnerSlot::empty();
        slot.materialize(vec![1]);
        slot.materialize(vec![2]);
        assert_eq!(slot.take(), vec![2]);
    }

    #[test]
    #[should_panic(expected = "inner slot read before materialize")]
    fn taking_an_empty_slot_panics() {
        let mut slot: InnerSlot<Vec<u8>> = InnerSlot::empty();
        let _ = slot.take();
    }
}
