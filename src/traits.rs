//! Core trait definitions for linear-gap global alignment.
//!
//! Two seams separate the engine from the data it aligns:
//! - [`Symbol`]: the element type of a sequence, plus the marker written into
//!   an aligned row wherever the other sequence advances alone.
//! - [`Scorer`]: the scoring function applied by the matrix fill and the
//!   traceback.
//!
//! The engine only ever talks to these two traits. Implementations must be
//! pure: the same inputs always produce the same outputs, otherwise the
//! traceback cannot retrace the path the fill took.

/// A single element of a sequence.
///
/// Implementors are compared with `==` by the scoring function. The
/// [`GAP`](Symbol::GAP) constant is only ever *written* into aligned output;
/// it is never compared against input symbols during the fill.
pub trait Symbol: Copy + Eq {
    /// Marker placed in an aligned row opposite a symbol of the other
    /// sequence.
    const GAP: Self;
}

impl Symbol for u8 {
    const GAP: Self = b'-';
}

impl Symbol for char {
    const GAP: Self = '-';
}

/// Scoring function for global alignment with a linear gap cost.
///
/// Semantics:
/// - [`pair`](Scorer::pair) scores one symbol of `S1` aligned against one
///   symbol of `S2` (a diagonal move in the DP table).
/// - [`gap`](Scorer::gap) scores one symbol of either sequence aligned
///   against a gap (a vertical or horizontal move).
///
/// `pair` must never fall back to the gap score; a symbol pair is always
/// either a match or a mismatch.
pub trait Scorer {
    /// Score of aligning `a` (from `S1`) against `b` (from `S2`).
    fn pair<T: Symbol>(&self, a: T, b: T) -> i32;

    /// Score of consuming one symbol against a gap.
    fn gap(&self) -> i32;
}

impl<S: Scorer> Scorer for &S {
    #[inline]
    fn pair<T: Symbol>(&self, a: T, b: T) -> i32 {
        (**self).pair(a, b)
    }

    #[inline]
    fn gap(&self) -> i32 {
        (**self).gap()
    }
}
