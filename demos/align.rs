//! Example: Needleman–Wunsch global alignment.
//!
//! Run with:
//! `cargo run --example align`

use nw_dp::{align_str, AlignerBuilder, ScoringScheme};

fn main() {
    let s = "GATTACA";
    let t = "GCATGCU";

    // Reference scheme: +1 match, -1 mismatch, -2 gap.
    let aln = align_str(s, t, &ScoringScheme::default());
    println!("Global alignment score: {}", aln.score());
    println!("S': {}", aln.aligned_s1_string());
    println!("T': {}", aln.aligned_s2_string());

    // Cheaper gaps open room for an insertion/deletion pair.
    let aligner = AlignerBuilder::new().with_gap_penalty(-1).build();
    let aln = aligner.align(s.as_bytes(), t.as_bytes());
    let stats = aln.stats();
    println!();
    println!("With gap penalty -1: {aln}");
    println!(
        "matches={} mismatches={} gaps={} identity={:.2}",
        stats.matches,
        stats.mismatches,
        stats.gaps(),
        stats.identity()
    );
}
