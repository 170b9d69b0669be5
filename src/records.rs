//! Delimited sequence-pair records.
//!
//! Each line of the input holds at least two delimiter-separated fields; the
//! first two are the sequences to align and any further fields are ignored.
//! Lines are stripped of surrounding whitespace (and, on the first line, of a
//! UTF-8 byte-order mark) before splitting. Fields themselves are kept
//! verbatim.
//!
//! Rows are screened with a deliberately loose heuristic: a row is skipped if
//! either sequence contains a numeric character. Anything else, including
//! empty fields and non-nucleotide letters, is passed through.
//!
//! "Numeric" is [`char::is_numeric`]: every character in the Unicode `Nd`,
//! `Nl` and `No` categories. That is wider than a decimal-digit test, so
//! vulgar fractions (`½`) and Roman numerals (`Ⅻ`) also skip a row, while
//! a screen built on decimal digits alone would let them through to the
//! aligner.

use std::io::BufRead;

use crate::error::{Error, Result};

pub const DEFAULT_DELIMITER: char = ',';

const BOM: char = '\u{feff}';

/// Two sequences read from one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequencePair {
    /// 1-based line number.
    pub line: usize,
    pub s1: String,
    pub s2: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    TooFewFields,
    ContainsDigit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    Pair(SequencePair),
    Skipped { line: usize, reason: SkipReason },
}

/// True if `field` passes the numeric-character screen (no `Nd`, `Nl` or
/// `No` characters).
pub fn is_plausible_sequence(field: &str) -> bool {
    !field.chars().any(char::is_numeric)
}

/// Classify one raw input line (without its line terminator).
pub fn parse_line(line_no: usize, line: &str, delimiter: char) -> Record {
    let mut fields = line.trim().split(delimiter);
    let (s1, s2) = match (fields.next(), fields.next()) {
        (Some(s1), Some(s2)) => (s1, s2),
        _ => {
            return Record::Skipped {
                line: line_no,
                reason: SkipReason::TooFewFields,
            }
        }
    };
    if !is_plausible_sequence(s1) || !is_plausible_sequence(s2) {
        return Record::Skipped {
            line: line_no,
            reason: SkipReason::ContainsDigit,
        };
    }
    Record::Pair(SequencePair {
        line: line_no,
        s1: s1.to_owned(),
        s2: s2.to_owned(),
    })
}

/// Iterator over the records of a buffered reader.
pub struct RecordReader<R> {
    inner: R,
    delimiter: char,
    line_no: usize,
    buf: String,
}

impl<R: BufRead> RecordReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            delimiter: DEFAULT_DELIMITER,
            line_no: 0,
            buf: String::new(),
        }
    }

    /// Use `delimiter` between fields. Line terminators are rejected.
    pub fn with_delimiter(inner: R, delimiter: char) -> Result<Self> {
        if delimiter == '\n' || delimiter == '\r' {
            return Err(Error::InvalidDelimiter(delimiter));
        }
        Ok(Self {
            delimiter,
            ..Self::new(inner)
        })
    }

    pub fn delimiter(&self) -> char {
        self.delimiter
    }
}

impl<R: BufRead> Iterator for RecordReader<R> {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.clear();
        match self.inner.read_line(&mut self.buf) {
            Ok(0) => None,
            Ok(_) => {
                self.line_no += 1;
                let mut line = self.buf.as_str();
                if self.line_no == 1 {
                    line = line.strip_prefix(BOM).unwrap_or(line);
                }
                Some(Ok(parse_line(self.line_no, line, self.delimiter)))
            }
            Err(e) => Some(Err(Error::Io(e))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn pair(line: usize, s1: &str, s2: &str) -> Record {
        Record::Pair(SequencePair {
            line,
            s1: s1.into(),
            s2: s2.into(),
        })
    }

    #[test]
    fn parse_line_takes_first_two_fields() {
        assert_eq!(parse_line(1, "ACGT,AGT,extra\n", ','), pair(1, "ACGT", "AGT"));
    }

    #[test]
    fn inner_whitespace_is_kept() {
        assert_eq!(parse_line(3, "  AC, GT  ", ','), pair(3, "AC", " GT"));
    }

    #[test]
    fn empty_fields_are_valid_sequences() {
        assert_eq!(parse_line(1, ",ACG", ','), pair(1, "", "ACG"));
        assert_eq!(parse_line(1, ",", ','), pair(1, "", ""));
    }

    #[test]
    fn single_field_and_blank_lines_are_skipped() {
        for line in ["ACGT", "", "   \n"] {
            assert_eq!(
                parse_line(7, line, ','),
                Record::Skipped {
                    line: 7,
                    reason: SkipReason::TooFewFields
                }
            );
        }
    }

    #[test]
    fn digits_in_either_field_skip_the_row() {
        for line in ["seq1,ACGT", "ACGT,AC9T", "12,34"] {
            assert_eq!(
                parse_line(2, line, ','),
                Record::Skipped {
                    line: 2,
                    reason: SkipReason::ContainsDigit
                }
            );
        }
        // Only the two sequence fields are screened.
        assert_eq!(parse_line(2, "AC,GT,42", ','), pair(2, "AC", "GT"));
    }

    #[test]
    fn screen_covers_all_numeric_categories() {
        // Nd outside ASCII, Nl, and two flavours of No.
        for line in ["A\u{0663},C", "A\u{216b},C", "A\u{bd},C", "A\u{b2},C"] {
            assert_eq!(
                parse_line(4, line, ','),
                Record::Skipped {
                    line: 4,
                    reason: SkipReason::ContainsDigit
                },
                "{line:?}"
            );
        }
        // Letters that merely look like numerals are not numeric.
        assert_eq!(parse_line(4, "OIl,GT", ','), pair(4, "OIl", "GT"));
        assert!(is_plausible_sequence("\u{3b1}\u{3b2}"));
    }

    #[test]
    fn reader_strips_bom_on_first_line_only() {
        let input = "\u{feff}AC,GT\n\u{feff}AC,GT\n";
        let records: Vec<_> = RecordReader::new(Cursor::new(input))
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(records[0], pair(1, "AC", "GT"));
        assert_eq!(records[1], pair(2, "\u{feff}AC", "GT"));
    }

    #[test]
    fn reader_handles_crlf_and_missing_final_newline() {
        let input = "A,C\r\nG,T";
        let records: Vec<_> = RecordReader::new(Cursor::new(input))
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(records, vec![pair(1, "A", "C"), pair(2, "G", "T")]);
    }

    #[test]
    fn custom_delimiter() {
        let reader = RecordReader::with_delimiter(Cursor::new("AC\tGT\n"), '\t').unwrap();
        assert_eq!(reader.delimiter(), '\t');
        let records: Vec<_> = reader.collect::<Result<_>>().unwrap();
        assert_eq!(records, vec![pair(1, "AC", "GT")]);
    }

    #[test]
    fn newline_delimiter_is_rejected() {
        assert!(matches!(
            RecordReader::with_delimiter(Cursor::new(""), '\n'),
            Err(Error::InvalidDelimiter('\n'))
        ));
    }

    #[test]
    fn invalid_utf8_surfaces_as_io_error() {
        let bytes: &[u8] = &[0x41, 0x2c, 0xff, b'\n'];
        let mut reader = RecordReader::new(Cursor::new(bytes));
        assert!(matches!(reader.next(), Some(Err(Error::Io(_)))));
    }
}
