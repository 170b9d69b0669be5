//! Needleman–Wunsch global alignment.
//!
//! This crate aligns two sequences end to end under a linear scoring scheme
//! (match reward, mismatch penalty, gap penalty) and returns two equal-length
//! gapped rows together with the optimal score.
//!
//! ## Core idea
//! 1. Fill the full `(m + 1) x (n + 1)` score table with the classic
//!    recurrence ([`matrix::DpMatrix`]).
//! 2. Walk back from the bottom-right cell, preferring up, then left, then
//!    diagonal moves ([`traceback::traceback`]).
//!
//! The tie-break order is fixed, so the same inputs always yield the same
//! alignment even when several optimal alignments exist.
//!
//! ## Quick start
//! ```
//! use nw_dp::{align, ScoringScheme};
//!
//! let aln = align(b"GATTACA", b"GCATGCU", &ScoringScheme::new(1, -1, -2));
//! assert_eq!(aln.score(), -1);
//! assert_eq!(aln.aligned_s1(), b"GATTACA");
//! assert_eq!(aln.aligned_s2(), b"GCATGCU");
//! ```
//!
//! ## Cargo features
//! - `parallel`: align batches of independent pairs on the rayon pool.
//! - `tracing`: emit spans for fills, tracebacks and batches.
//! - `cli` (default): build the `nw-align` binary.

pub mod alignment;
pub mod builder;
pub mod engine;
pub mod error;
pub mod matrix;
pub mod records;
pub mod scoring;
pub mod traceback;
pub mod traits;

pub use crate::alignment::{AlignOp, Alignment, AlignmentStats};
pub use crate::builder::AlignerBuilder;
pub use crate::engine::{align, align_str, Aligner};
pub use crate::error::{Error, Result};
pub use crate::scoring::ScoringScheme;
pub use crate::traits::{Scorer, Symbol};
