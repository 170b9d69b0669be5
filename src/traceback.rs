//! Reconstruction of one optimal path through a filled [`DpMatrix`].
//!
//! The walk starts at `(m, n)` and stops at `(0, 0)`. At every cell the
//! predecessors are tested in a fixed order, up, then left, then diagonal;
//! the first one that reproduces the cell's value is taken. When several
//! predecessors tie, this order alone decides which alignment is returned,
//! so it must not change.

use crate::alignment::{AlignOp, Alignment};
use crate::matrix::DpMatrix;
use crate::traits::{Scorer, Symbol};

/// Retrace `matrix` (as filled for `s1` against `s2`) into an alignment.
///
/// `scorer` must be the one used to fill `matrix`; only its gap score is
/// consulted.
///
/// # Panics
/// Panics if `matrix` does not have `(len(s1) + 1) x (len(s2) + 1)` cells.
pub fn traceback<T, S>(matrix: &DpMatrix, s1: &[T], s2: &[T], scorer: &S) -> Alignment<T>
where
    T: Symbol,
    S: Scorer,
{
    assert_eq!(
        (matrix.rows(), matrix.cols()),
        (s1.len() + 1, s2.len() + 1),
        "matrix shape does not match the sequences"
    );

    #[cfg(feature = "tracing")]
    let span = tracing::trace_span!("traceback", rows = matrix.rows(), cols = matrix.cols());
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    let gap = scorer.gap();
    let capacity = s1.len() + s2.len();
    let mut aligned_s1 = Vec::with_capacity(capacity);
    let mut aligned_s2 = Vec::with_capacity(capacity);
    let mut ops = Vec::with_capacity(capacity);

    let (mut i, mut j) = (s1.len(), s2.len());
    while i > 0 || j > 0 {
        let here = matrix.get(i, j);
        if i > 0 && here == matrix.get(i - 1, j) + gap {
            aligned_s1.push(s1[i - 1]);
            aligned_s2.push(T::GAP);
            ops.push(AlignOp::Deletion);
            i -= 1;
        } else if j > 0 && here == matrix.get(i, j - 1) + gap {
            aligned_s1.push(T::GAP);
            aligned_s2.push(s2[j - 1]);
            ops.push(AlignOp::Insertion);
            j -= 1;
        } else {
            // Row 0 and column 0 always satisfy one of the gap tests above,
            // so both indices are positive here.
            let (a, b) = (s1[i - 1], s2[j - 1]);
            aligned_s1.push(a);
            aligned_s2.push(b);
            ops.push(if a == b {
                AlignOp::Match
            } else {
                AlignOp::Mismatch
            });
            i -= 1;
            j -= 1;
        }
    }

    Alignment::from_reversed(aligned_s1, aligned_s2, ops, matrix.score())
}
