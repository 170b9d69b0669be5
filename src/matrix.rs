//! Dense Needleman–Wunsch score table.
//!
//! `F[i][j]` holds the optimal score of `S1[..i]` against `S2[..j]`. Row 0 and
//! column 0 align a prefix entirely against gaps. The table is built once by
//! [`DpMatrix::fill`] and is read-only afterwards.

use std::ops::Index;

use crate::traits::{Scorer, Symbol};

/// Row-major `(m + 1) x (n + 1)` table of alignment scores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DpMatrix {
    cells: Vec<i32>,
    rows: usize,
    cols: usize,
}

impl DpMatrix {
    /// Build and fill the table for `s1` (rows) against `s2` (columns).
    ///
    /// Fill order is increasing `i`, then increasing `j`, so every cell's
    /// three predecessors are final before it is computed.
    pub fn fill<T, S>(s1: &[T], s2: &[T], scorer: &S) -> Self
    where
        T: Symbol,
        S: Scorer,
    {
        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!("fill", rows = s1.len() + 1, cols = s2.len() + 1);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let rows = s1.len() + 1;
        let cols = s2.len() + 1;
        let gap = scorer.gap();
        let mut cells = vec![0i32; rows * cols];

        for j in 1..cols {
            cells[j] = gap * j as i32;
        }
        for i in 1..rows {
            cells[i * cols] = gap * i as i32;
        }

        for i in 1..rows {
            let a = s1[i - 1];
            let (prev, curr) = cells.split_at_mut(i * cols);
            let prev = &prev[(i - 1) * cols..];
            for j in 1..cols {
                let diag = prev[j - 1] + scorer.pair(a, s2[j - 1]);
                let left = curr[j - 1] + gap;
                let up = prev[j] + gap;
                curr[j] = diag.max(left).max(up);
            }
        }

        Self { cells, rows, cols }
    }

    /// Number of rows, `len(S1) + 1`.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns, `len(S2) + 1`.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> i32 {
        self.cells[i * self.cols + j]
    }

    /// One full row of the table.
    pub fn row(&self, i: usize) -> &[i32] {
        &self.cells[i * self.cols..(i + 1) * self.cols]
    }

    /// The bottom-right cell: the optimal global alignment score.
    #[inline]
    pub fn score(&self) -> i32 {
        self.cells[self.cells.len() - 1]
    }
}

impl Index<(usize, usize)> for DpMatrix {
    type Output = i32;

    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        &self.cells[i * self.cols + j]
    }
}

/// Compute only the last row of the table for `x` against `y`.
///
/// Uses two rolling rows, so memory is O(len(y)). The final entry equals
/// [`DpMatrix::score`] for the same inputs.
pub fn last_row<T, S>(x: &[T], y: &[T], scorer: &S) -> Vec<i32>
where
    T: Symbol,
    S: Scorer,
{
    let m = y.len();
    let gap = scorer.gap();
    let mut prev = Vec::with_capacity(m + 1);
    let mut curr = vec![0i32; m + 1];

    // row 0
    prev.push(0);
    for j in 1..=m {
        prev.push(prev[j - 1] + gap);
    }

    for &cx in x {
        curr[0] = prev[0] + gap;
        for j in 1..=m {
            let diag = prev[j - 1] + scorer.pair(cx, y[j - 1]);
            let left = curr[j - 1] + gap;
            let up = prev[j] + gap;
            curr[j] = diag.max(left).max(up);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev
}
