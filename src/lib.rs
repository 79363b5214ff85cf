//! # Lazy separator-joined sequence views
//!
//! Flattens a sequence of sequences into one logical sequence with a
//! separator pattern stitched between every pair of consecutive inner
//! sequences — lazily, without allocating the joined result.
//!
//! Two adaptors cover the two ownership shapes:
//!
//! 1. **Borrowed sources** — [`join_with`] builds a [`JoinView`] over any
//!    [`Sequence`] of sequences. The view is multi-pass and, when every
//!    constituent allows it, traversable backwards.
//! 2. **Owned sources** — [`JoinWithExt::join_with`] adapts any iterator of
//!    owned sequences into a single-pass [`JoinStream`] yielding elements
//!    by value.
//!
//! ```
//! use suture::{join_with, JoinWithExt};
//!
//! let contigs = vec![b"ACGT".to_vec(), b"GGCC".to_vec()];
//! let spacer = b"NN".to_vec();
//!
//! // Borrowed: a reusable view over the contigs.
//! let view = join_with(&contigs, &spacer);
//! let scaffold: Vec<u8> = view.iter().copied().collect();
//! assert_eq!(scaffold, b"ACGTNNGGCC");
//!
//! // Owned: a one-shot stream consuming the contigs.
//! let scaffold: Vec<u8> = contigs.into_iter().join_with(spacer).collect();
//! assert_eq!(scaffold, b"ACGTNNGGCC");
//! ```
//!
//! The separator is driven by outer boundaries, not by element counts: an
//! empty inner sequence still gets a separator on both sides, so splitting
//! by the separator recovers the original outer structure.

#![warn(missing_docs, missing_debug_implementations)]

pub mod cursor;
pub mod fasta;
pub mod join;

pub use cursor::{BidirectionalCursor, BoundedSequence, Cursor, ForwardCursor, Sequence, SliceCursor};
pub use join::{
    join_with, join_with_element, EndMarker, InnerSlot, Iter, JoinCursor, JoinStream, JoinView,
    JoinWithExt, Joiner, RevIter, Single,
};
