//! Alignment engine.
//!
//! An [`Aligner`] owns a scorer and runs the two-phase pipeline for each
//! pair it is given:
//! 1. fill the full DP table ([`DpMatrix::fill`]),
//! 2. retrace one optimal path through it ([`traceback`]).
//!
//! Every call allocates its own table and drops it before returning, so an
//! `Aligner` can be shared freely between threads.

use crate::alignment::Alignment;
use crate::error::{Error, Result};
use crate::matrix::{last_row, DpMatrix};
use crate::scoring::ScoringScheme;
use crate::traceback::traceback;
use crate::traits::{Scorer, Symbol};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Needleman–Wunsch aligner for a fixed scorer.
///
/// Typical usage:
/// ```
/// use nw_dp::{Aligner, ScoringScheme};
///
/// let aligner = Aligner::new(ScoringScheme::new(1, -1, -2));
/// let aln = aligner.align(b"GATTACA", b"GCATGCU");
/// assert_eq!(aln.score(), -1);
/// assert_eq!(aln.aligned_s1().len(), aln.aligned_s2().len());
/// ```
#[derive(Debug, Clone)]
pub struct Aligner<S = ScoringScheme> {
    scorer: S,
    max_cells: Option<usize>,
}

impl Default for Aligner<ScoringScheme> {
    fn default() -> Self {
        Self::new(ScoringScheme::default())
    }
}

impl<S: Scorer> Aligner<S> {
    /// Create an aligner without a size limit.
    pub fn new(scorer: S) -> Self {
        Self {
            scorer,
            max_cells: None,
        }
    }

    /// Create an aligner whose [`try_align`](Self::try_align) refuses tables
    /// larger than `max_cells`.
    ///
    /// # Panics
    /// Panics if `max_cells == 0`.
    pub fn with_max_cells(scorer: S, max_cells: usize) -> Self {
        assert!(max_cells > 0, "max_cells must be positive");
        Self {
            scorer,
            max_cells: Some(max_cells),
        }
    }

    pub fn scorer(&self) -> &S {
        &self.scorer
    }

    pub fn max_cells(&self) -> Option<usize> {
        self.max_cells
    }

    /// Globally align `s1` against `s2`.
    ///
    /// Total: empty inputs give an all-gap (or empty) alignment. Memory is
    /// `O(len(s1) * len(s2))`; see [`try_align`](Self::try_align) for a
    /// guarded variant.
    pub fn align<T: Symbol>(&self, s1: &[T], s2: &[T]) -> Alignment<T> {
        #[cfg(feature = "tracing")]
        let span = tracing::debug_span!("align", len_s1 = s1.len(), len_s2 = s2.len());
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let matrix = DpMatrix::fill(s1, s2, &self.scorer);
        traceback(&matrix, s1, s2, &self.scorer)
    }

    /// Like [`align`](Self::align), but first checks the table size against
    /// the configured limit.
    pub fn try_align<T: Symbol>(&self, s1: &[T], s2: &[T]) -> Result<Alignment<T>> {
        self.check_size(s1.len(), s2.len())?;
        Ok(self.align(s1, s2))
    }

    /// Optimal score only, using two rolling rows instead of the full table.
    pub fn score<T: Symbol>(&self, s1: &[T], s2: &[T]) -> i32 {
        // Roll over the shorter sequence's axis.
        let row = if s2.len() <= s1.len() {
            last_row(s1, s2, &self.scorer)
        } else {
            last_row(s2, s1, &Transposed(&self.scorer))
        };
        row.last().copied().unwrap_or(0)
    }

    /// Check a pair of sequence lengths against the configured cell limit.
    pub fn check_size(&self, len_s1: usize, len_s2: usize) -> Result<()> {
        let Some(limit) = self.max_cells else {
            return Ok(());
        };
        let (rows, cols) = (len_s1 + 1, len_s2 + 1);
        match rows.checked_mul(cols) {
            Some(cells) if cells <= limit => Ok(()),
            _ => Err(Error::MatrixTooLarge { rows, cols, limit }),
        }
    }
}

#[cfg(not(feature = "parallel"))]
impl<S: Scorer> Aligner<S> {
    /// Align every pair independently, preserving input order.
    pub fn align_batch<T, A, B>(&self, pairs: &[(A, B)]) -> Vec<Alignment<T>>
    where
        T: Symbol,
        A: AsRef<[T]>,
        B: AsRef<[T]>,
    {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("align_batch", pairs = pairs.len());
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        pairs
            .iter()
            .map(|(a, b)| self.align(a.as_ref(), b.as_ref()))
            .collect()
    }
}

#[cfg(feature = "parallel")]
impl<S: Scorer + Sync> Aligner<S> {
    /// Align every pair independently on the rayon pool, preserving input
    /// order.
    ///
    /// Pairs are the unit of parallelism; each table is still filled by a
    /// single thread.
    pub fn align_batch<T, A, B>(&self, pairs: &[(A, B)]) -> Vec<Alignment<T>>
    where
        T: Symbol + Send + Sync,
        A: AsRef<[T]> + Sync,
        B: AsRef<[T]> + Sync,
    {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("align_batch", pairs = pairs.len());
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        pairs
            .par_iter()
            .map(|(a, b)| self.align(a.as_ref(), b.as_ref()))
            .collect()
    }
}

/// Scorer view with the pair arguments swapped, so a table can be rolled
/// along either sequence without changing asymmetric scorers' results.
struct Transposed<'a, S>(&'a S);

impl<S: Scorer> Scorer for Transposed<'_, S> {
    #[inline]
    fn pair<T: Symbol>(&self, a: T, b: T) -> i32 {
        self.0.pair(b, a)
    }

    #[inline]
    fn gap(&self) -> i32 {
        self.0.gap()
    }
}

/// Align `s1` against `s2` under `scheme`.
///
/// ```
/// use nw_dp::{align, ScoringScheme};
///
/// let aln = align(b"AC", b"", &ScoringScheme::default());
/// assert_eq!(aln.aligned_s1(), b"AC");
/// assert_eq!(aln.aligned_s2(), b"--");
/// assert_eq!(aln.score(), -4);
/// ```
pub fn align<T: Symbol>(s1: &[T], s2: &[T], scheme: &ScoringScheme) -> Alignment<T> {
    Aligner::new(scheme).align(s1, s2)
}

/// Align two strings symbol-by-symbol over Unicode scalar values.
pub fn align_str(s1: &str, s2: &str, scheme: &ScoringScheme) -> Alignment<char> {
    let a: Vec<char> = s1.chars().collect();
    let b: Vec<char> = s2.chars().collect();
    align(&a, &b, scheme)
}
