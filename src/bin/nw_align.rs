//! `nw-align`: globally align sequence pairs read from a delimited file.
//!
//! Each valid input row produces one output line,
//! `<aligned_s1> <aligned_s2> <score>`, in input order. Rows with fewer than
//! two fields or with numeric characters in a sequence are skipped.
//!
//! ```bash
//! nw-align pairs.csv
//! nw-align --gap-penalty=-3 --delimiter '\t' pairs.tsv
//! NW_ALIGN_LOG=debug nw-align pairs.csv
//! ```

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process;

use anyhow::Context;
use clap::Parser;
use nw_dp::records::{Record, RecordReader, DEFAULT_DELIMITER};
use nw_dp::{Aligner, AlignerBuilder, Error};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Pairs aligned per batch; bounds memory on large inputs.
const CHUNK_PAIRS: usize = 1024;

#[derive(Debug, Parser)]
#[command(name = "nw-align", version, about = "Needleman-Wunsch global alignment of sequence pairs")]
struct Cli {
    /// Delimited text file with one sequence pair per line
    input: PathBuf,

    /// Score for aligning two equal symbols
    #[arg(long, env = "NW_MATCH_REWARD", default_value_t = 1, allow_negative_numbers = true)]
    match_reward: i32,

    /// Score for aligning two different symbols
    #[arg(long, env = "NW_MISMATCH_PENALTY", default_value_t = -1, allow_negative_numbers = true)]
    mismatch_penalty: i32,

    /// Score for aligning a symbol against a gap
    #[arg(long, env = "NW_GAP_PENALTY", default_value_t = -2, allow_negative_numbers = true)]
    gap_penalty: i32,

    /// Field separator; `\t` is accepted for tab
    #[arg(short, long, default_value_t = DEFAULT_DELIMITER.to_string())]
    delimiter: String,

    /// Refuse pairs whose DP table would exceed this many cells
    #[arg(long, env = "NW_MAX_CELLS")]
    max_cells: Option<usize>,
}

fn main() {
    let log_level = std::env::var("NW_ALIGN_LOG").unwrap_or_else(|_| "warn".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&log_level).unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("nw-align: {e:#}");
        let exit_code = match e.downcast_ref::<Error>() {
            Some(Error::InvalidDelimiter(_)) => 2,
            Some(Error::Io(_)) => 3,
            Some(Error::MatrixTooLarge { .. }) => 4,
            None => 1,
        };
        process::exit(exit_code);
    }
}

fn parse_delimiter(raw: &str) -> anyhow::Result<char> {
    if raw == "\\t" {
        return Ok('\t');
    }
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => anyhow::bail!("delimiter must be a single character, got {raw:?}"),
    }
}

fn open_records(path: &Path, delimiter: char) -> anyhow::Result<RecordReader<BufReader<File>>> {
    let file = File::open(path)
        .map_err(Error::from)
        .with_context(|| format!("cannot open {}", path.display()))?;
    Ok(RecordReader::with_delimiter(BufReader::new(file), delimiter)?)
}

/// Align the buffered pairs, write them in order and empty the buffer.
fn flush_chunk<W: Write>(
    aligner: &Aligner,
    chunk: &mut Vec<(Vec<char>, Vec<char>)>,
    out: &mut W,
) -> io::Result<usize> {
    for aln in aligner.align_batch(chunk.as_slice()) {
        writeln!(out, "{aln}")?;
    }
    let written = chunk.len();
    chunk.clear();
    Ok(written)
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let delimiter = parse_delimiter(&cli.delimiter)?;

    let mut builder = AlignerBuilder::new()
        .with_match_reward(cli.match_reward)
        .with_mismatch_penalty(cli.mismatch_penalty)
        .with_gap_penalty(cli.gap_penalty);
    if let Some(limit) = cli.max_cells {
        anyhow::ensure!(limit > 0, "--max-cells must be positive");
        builder = builder.with_max_cells(limit);
    }
    let aligner = builder.build();
    info!(scheme = ?aligner.scorer(), input = %cli.input.display(), "starting");

    // With a cell limit the whole file is checked before anything is
    // written, so a refused run produces no output.
    if aligner.max_cells().is_some() {
        for record in open_records(&cli.input, delimiter)? {
            let record = record.with_context(|| format!("reading {}", cli.input.display()))?;
            if let Record::Pair(pair) = record {
                aligner
                    .check_size(pair.s1.chars().count(), pair.s2.chars().count())
                    .with_context(|| format!("line {}", pair.line))?;
            }
        }
        debug!("size check passed");
    }

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut chunk = Vec::with_capacity(CHUNK_PAIRS);
    let mut aligned = 0usize;
    let mut skipped = 0usize;
    for record in open_records(&cli.input, delimiter)? {
        match record.with_context(|| format!("reading {}", cli.input.display()))? {
            Record::Pair(pair) => {
                chunk.push((pair.s1.chars().collect(), pair.s2.chars().collect()));
                if chunk.len() == CHUNK_PAIRS {
                    aligned += flush_chunk(&aligner, &mut chunk, &mut out)?;
                }
            }
            Record::Skipped { line, reason } => {
                debug!(line, ?reason, "skipping row");
                skipped += 1;
            }
        }
    }
    aligned += flush_chunk(&aligner, &mut chunk, &mut out)?;
    out.flush()?;

    info!(aligned, skipped, "done");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_characters_are_delimiters() {
        assert_eq!(parse_delimiter(",").unwrap(), ',');
        assert_eq!(parse_delimiter(";").unwrap(), ';');
        assert_eq!(parse_delimiter("\t").unwrap(), '\t');
        assert_eq!(parse_delimiter("\u{2502}").unwrap(), '\u{2502}');
    }

    #[test]
    fn backslash_t_means_tab() {
        assert_eq!(parse_delimiter("\\t").unwrap(), '\t');
    }

    #[test]
    fn empty_and_multi_character_delimiters_are_rejected() {
        for raw in ["", ";;", "\\n", "ab"] {
            let err = parse_delimiter(raw).unwrap_err();
            assert!(
                err.to_string().contains("single character"),
                "{raw:?}: {err}"
            );
        }
    }

    #[test]
    fn flush_chunk_keeps_order_and_empties_the_buffer() {
        let aligner = Aligner::default();
        let mut chunk: Vec<(Vec<char>, Vec<char>)> = vec![
            ("GATTACA".chars().collect(), "GCATGCU".chars().collect()),
            ("AC".chars().collect(), Vec::new()),
        ];
        let mut out = Vec::new();
        assert_eq!(flush_chunk(&aligner, &mut chunk, &mut out).unwrap(), 2);
        assert!(chunk.is_empty());
        assert_eq!(String::from_utf8(out).unwrap(), "GATTACA GCATGCU -1\nAC -- -4\n");
    }
}
