//! The result of a global alignment.

use std::fmt;

use crate::traits::Symbol;

/// One column of an alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlignOp {
    /// Diagonal move with equal symbols.
    Match,
    /// Diagonal move with different symbols.
    Mismatch,
    /// `S1` advances against a gap in `S2` (an up move).
    Deletion,
    /// `S2` advances against a gap in `S1` (a left move).
    Insertion,
}

/// Column counts for an alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlignmentStats {
    pub matches: usize,
    pub mismatches: usize,
    pub deletions: usize,
    pub insertions: usize,
}

impl AlignmentStats {
    pub fn gaps(&self) -> usize {
        self.deletions + self.insertions
    }

    /// Fraction of columns that are matches, `0.0` for an empty alignment.
    pub fn identity(&self) -> f64 {
        let columns = self.matches + self.mismatches + self.gaps();
        if columns == 0 {
            0.0
        } else {
            self.matches as f64 / columns as f64
        }
    }
}

/// Two equal-length aligned rows and the optimal score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alignment<T> {
    aligned_s1: Vec<T>,
    aligned_s2: Vec<T>,
    ops: Vec<AlignOp>,
    score: i32,
}

impl<T: Symbol> Alignment<T> {
    /// Assemble an alignment from rows produced back-to-front.
    ///
    /// All three vectors must have the same length.
    pub(crate) fn from_reversed(
        mut aligned_s1: Vec<T>,
        mut aligned_s2: Vec<T>,
        mut ops: Vec<AlignOp>,
        score: i32,
    ) -> Self {
        debug_assert_eq!(aligned_s1.len(), aligned_s2.len());
        debug_assert_eq!(aligned_s1.len(), ops.len());
        aligned_s1.reverse();
        aligned_s2.reverse();
        ops.reverse();
        Self {
            aligned_s1,
            aligned_s2,
            ops,
            score,
        }
    }

    pub fn aligned_s1(&self) -> &[T] {
        &self.aligned_s1
    }

    pub fn aligned_s2(&self) -> &[T] {
        &self.aligned_s2
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    /// Per-column operations, left to right.
    pub fn ops(&self) -> &[AlignOp] {
        &self.ops
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.aligned_s1.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aligned_s1.is_empty()
    }

    /// `aligned_s1` with gap markers removed.
    pub fn degapped_s1(&self) -> Vec<T> {
        degap(&self.aligned_s1)
    }

    /// `aligned_s2` with gap markers removed.
    pub fn degapped_s2(&self) -> Vec<T> {
        degap(&self.aligned_s2)
    }

    pub fn stats(&self) -> AlignmentStats {
        self.ops
            .iter()
            .fold(AlignmentStats::default(), |mut acc, op| {
                match op {
                    AlignOp::Match => acc.matches += 1,
                    AlignOp::Mismatch => acc.mismatches += 1,
                    AlignOp::Deletion => acc.deletions += 1,
                    AlignOp::Insertion => acc.insertions += 1,
                }
                acc
            })
    }

    /// Split into `(aligned_s1, aligned_s2, score)`.
    pub fn into_parts(self) -> (Vec<T>, Vec<T>, i32) {
        (self.aligned_s1, self.aligned_s2, self.score)
    }
}

fn degap<T: Symbol>(row: &[T]) -> Vec<T> {
    row.iter().copied().filter(|&s| s != T::GAP).collect()
}

impl Alignment<char> {
    pub fn aligned_s1_string(&self) -> String {
        self.aligned_s1.iter().collect()
    }

    pub fn aligned_s2_string(&self) -> String {
        self.aligned_s2.iter().collect()
    }
}

impl Alignment<u8> {
    pub fn aligned_s1_string(&self) -> String {
        String::from_utf8_lossy(&self.aligned_s1).into_owned()
    }

    pub fn aligned_s2_string(&self) -> String {
        String::from_utf8_lossy(&self.aligned_s2).into_owned()
    }
}

/// `"<aligned_s1> <aligned_s2> <score>"`, the record output format.
impl fmt::Display for Alignment<char> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.aligned_s1_string(),
            self.aligned_s2_string(),
            self.score
        )
    }
}

impl fmt::Display for Alignment<u8> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.aligned_s1_string(),
            self.aligned_s2_string(),
            self.score
        )
    }
}
