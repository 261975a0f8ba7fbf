//! Turns uploaded comma-separated text into a [`Dataset`].
//!
//! Rows that do not hold at least two finite numbers are dropped without
//! being reported; only the caller decides whether what is left is enough.
use std::{fs, path::Path};

use log::debug;

use super::dataset::{Dataset, Sample};
use crate::error::{LabErr, Result};

/// Largest upload accepted, in bytes (2 MiB).
pub const MAX_UPLOAD_BYTES: usize = 2 * 1024 * 1024;

/// Checks `text` against `limit` and parses it.
///
/// # Arguments
/// * `text` - The raw upload.
/// * `limit` - Maximum accepted size in bytes.
///
/// # Errors
/// `LabErr::SizeLimitExceeded` if `text` is longer than `limit` bytes. The
/// text is not looked at in that case.
pub fn ingest(text: &str, limit: usize) -> Result<Dataset> {
    check_size(text.len(), limit)?;
    Ok(parse_csv(text))
}

/// Reads the file at `path` and parses it, refusing files over `limit`
/// bytes before reading them.
///
/// The bytes are decoded as UTF-8 with invalid sequences replaced, and a
/// leading byte order mark is skipped.
///
/// # Errors
/// `LabErr::SizeLimitExceeded` for oversized files, `LabErr::Io` if the
/// file cannot be stat'ed or read.
pub fn ingest_file<P: AsRef<Path>>(path: P, limit: usize) -> Result<Dataset> {
    let path = path.as_ref();
    let size = fs::metadata(path)?.len();
    check_size(usize::try_from(size).unwrap_or(usize::MAX), limit)?;

    let bytes = fs::read(path)?;
    let text = String::from_utf8_lossy(&bytes);
    ingest(strip_bom(&text), limit)
}

/// Parses comma-separated rows into samples.
///
/// Lines may end in `\n`, `\r\n` or `\r`. Each field is trimmed and parsed
/// as a float, an empty field reading as `0`. A row survives only if it has
/// two or more fields and all of them are finite numbers; its first two
/// fields become `(x, y)`.
pub fn parse_csv(text: &str) -> Dataset {
    let mut rows = 0usize;
    let samples: Vec<Sample> = text
        .split(['\r', '\n'])
        .filter(|line| !line.trim().is_empty())
        .inspect(|_| rows += 1)
        .filter_map(parse_row)
        .collect();

    debug!(kept = samples.len(), dropped = rows - samples.len(); "parsed csv");
    Dataset::new(samples)
}

fn check_size(size: usize, limit: usize) -> Result<()> {
    if size > limit {
        return Err(LabErr::SizeLimitExceeded { size, limit });
    }

    Ok(())
}

fn strip_bom(text: &str) -> &str {
    text.strip_prefix('\u{FEFF}').unwrap_or(text)
}

fn parse_row(line: &str) -> Option<Sample> {
    let mut fields = line.split(',').map(parse_field);
    let x = fields.next()??;
    let y = fields.next()??;

    // extra columns are ignored but must still be numeric
    if fields.any(|f| f.is_none()) {
        return None;
    }

    Sample::new(x, y)
}

fn parse_field(field: &str) -> Option<f64> {
    let field = field.trim();
    if field.is_empty() {
        return Some(0.0);
    }

    field.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_malformed_rows_and_extra_columns() {
        let ds = parse_csv("1,2\nfoo,3\n4,5,6\n7\n8,9");
        assert_eq!(ds.to_pairs(), vec![(1.0, 2.0), (4.0, 5.0), (8.0, 9.0)]);
    }

    #[test]
    fn keeps_input_order() {
        let ds = parse_csv("5,5\n1,1\n3,3");
        assert_eq!(ds.to_pairs(), vec![(5.0, 5.0), (1.0, 1.0), (3.0, 3.0)]);
    }

    #[test]
    fn accepts_every_newline_convention() {
        let ds = parse_csv("1,1\r\n2,2\r3,3\n4,4\r\n");
        assert_eq!(ds.len(), 4);
        assert_eq!(ds.samples()[2], Sample { x: 3.0, y: 3.0 });
    }

    #[test]
    fn trims_whitespace_around_fields() {
        let ds = parse_csv("  1.5 ,\t-2e1  \n");
        assert_eq!(ds.to_pairs(), vec![(1.5, -20.0)]);
    }

    #[test]
    fn rejects_non_finite_fields() {
        let ds = parse_csv("NaN,1\n1,inf\n-infinity,2\n2,2,x\n3,3\n4,4,nan");
        assert_eq!(ds.to_pairs(), vec![(3.0, 3.0)]);
    }

    #[test]
    fn empty_fields_read_as_zero() {
        let ds = parse_csv("1,\n,1\n , \n2,2,  ");
        assert_eq!(
            ds.to_pairs(),
            vec![(1.0, 0.0), (0.0, 1.0), (0.0, 0.0), (2.0, 2.0)]
        );
    }

    #[test]
    fn trailing_commas_keep_rows() {
        let ds = parse_csv("1,2,\n3,4,");
        assert_eq!(ds.to_pairs(), vec![(1.0, 2.0), (3.0, 4.0)]);

        let ds = parse_csv("1,2,\n3,4,\n5,6,");
        assert_eq!(ds.len(), 3);
    }

    #[test]
    fn leading_byte_order_mark_is_skipped() {
        assert_eq!(strip_bom("\u{FEFF}1,2"), "1,2");
        assert_eq!(strip_bom("1,2"), "1,2");
        // only the first one is a byte order mark
        assert_eq!(strip_bom("\u{FEFF}\u{FEFF}1,2"), "\u{FEFF}1,2");
    }

    #[test]
    fn single_valid_row_is_still_parsed() {
        let ds = ingest("1,1", MAX_UPLOAD_BYTES).unwrap();
        assert_eq!(ds.len(), 1);
    }

    #[test]
    fn oversized_input_is_rejected_before_parsing() {
        let text = "1,1\n".repeat(MAX_UPLOAD_BYTES / 4 + 1);
        assert!(text.len() > MAX_UPLOAD_BYTES);

        match ingest(&text, MAX_UPLOAD_BYTES) {
            Err(LabErr::SizeLimitExceeded { size, limit }) => {
                assert_eq!(size, text.len());
                assert_eq!(limit, MAX_UPLOAD_BYTES);
            }
            other => panic!("expected SizeLimitExceeded, got {other:?}"),
        }
    }

    #[test]
    fn input_exactly_at_the_limit_is_accepted() {
        let text = "1,2\n";
        let ds = ingest(text, text.len()).unwrap();
        assert_eq!(ds.len(), 1);
    }

    #[test]
    fn empty_input_yields_empty_dataset() {
        assert!(parse_csv("").is_empty());
        assert!(parse_csv("\n\n  \n").is_empty());
    }
}
