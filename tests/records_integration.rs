use std::fs::File;
use std::io::{BufReader, Write};

use nw_dp::records::{Record, RecordReader, SkipReason};
use nw_dp::{align_str, ScoringScheme};

/// Read `path`, align every valid row and render the output lines.
fn run_file(path: &std::path::Path, scheme: &ScoringScheme) -> (Vec<String>, Vec<(usize, SkipReason)>) {
    let reader = RecordReader::new(BufReader::new(File::open(path).unwrap()));
    let mut lines = Vec::new();
    let mut skipped = Vec::new();
    for record in reader {
        match record.unwrap() {
            Record::Pair(p) => lines.push(align_str(&p.s1, &p.s2, scheme).to_string()),
            Record::Skipped { line, reason } => skipped.push((line, reason)),
        }
    }
    (lines, skipped)
}

#[test]
fn csv_file_end_to_end() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        "\u{feff}GATTACA,GCATGCU\n\
         seq1,seq2\n\
         AC,\n\
         lonely\n\
         ACGT,ACGT,comment\n\
         \n\
         AGTACGCA,TATGC\r\n"
    )
    .unwrap();
    file.flush().unwrap();

    let (lines, skipped) = run_file(file.path(), &ScoringScheme::default());
    assert_eq!(
        lines,
        vec![
            "GATTACA GCATGCU -1",
            "AC -- -4",
            "ACGT ACGT 4",
            "AGTACGCA --TATGC- -3",
        ]
    );
    assert_eq!(
        skipped,
        vec![
            (2, SkipReason::ContainsDigit),
            (4, SkipReason::TooFewFields),
            (6, SkipReason::TooFewFields),
        ]
    );
}

#[test]
fn tab_separated_with_custom_scheme() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "GATTACA\tGCATGCU").unwrap();
    writeln!(file, "AB\tBA").unwrap();
    file.flush().unwrap();

    let reader =
        RecordReader::with_delimiter(BufReader::new(File::open(file.path()).unwrap()), '\t').unwrap();
    let scheme = ScoringScheme::new(1, -1, -1);
    let out: Vec<String> = reader
        .map(|r| match r.unwrap() {
            Record::Pair(p) => align_str(&p.s1, &p.s2, &scheme).to_string(),
            other => panic!("unexpected {other:?}"),
        })
        .collect();
    assert_eq!(out, vec!["G-ATTACA GCATG-CU 0", "-AB BA- -1"]);
}

