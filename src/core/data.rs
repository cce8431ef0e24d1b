//! One-number-per-line reader with zero-allocation float parsing.

use std::{
    borrow::Cow,
    io::{BufRead, BufReader, Read},
};

use thiserror::Error;

// --- Error Handling ---
#[derive(Debug, Error)]
#[error("line {line}: {kind}")]
pub struct ParseInputError {
    /// 1-based; 0 when the fault is not tied to a line.
    pub line: usize,
    pub kind: ParseErrorKind,
}

#[derive(Debug, Error)]
pub enum ParseErrorKind {
    #[error("I/O error: {0}")]
    Io(std::io::Error),
    #[error("invalid number '{text}'")]
    BadFloat { text: String },
    #[error("no values in input")]
    Empty,
}

// --- Helpers ---
#[inline]
fn trim(mut b: &[u8]) -> &[u8] {
    while let [first, rest @ ..] = b {
        if !first.is_ascii_whitespace() {
            break;
        }
        b = rest;
    }
    while let [rest @ .., last] = b {
        if !last.is_ascii_whitespace() {
            break;
        }
        b = rest;
    }
    b
}

/// U+2212 MINUS SIGN as UTF-8.
const UNICODE_MINUS: &[u8] = "\u{2212}".as_bytes();

/// Swap every U+2212 for ASCII `-`; borrows when there is none.
fn ascii_minus(bytes: &[u8]) -> Cow<'_, [u8]> {
    if !bytes.windows(UNICODE_MINUS.len()).any(|w| w == UNICODE_MINUS) {
        return Cow::Borrowed(bytes);
    }
    let mut out = Vec::with_capacity(bytes.len());
    let mut rest = bytes;
    while let [first, tail @ ..] = rest {
        if let Some(after) = rest.strip_prefix(UNICODE_MINUS) {
            out.push(b'-');
            rest = after;
        } else {
            out.push(*first);
            rest = tail;
        }
    }
    Cow::Owned(out)
}

#[inline]
fn parse_f64(bytes: &[u8], line: usize) -> Result<f64, ParseInputError> {
    let bad = || ParseInputError {
        line,
        kind: ParseErrorKind::BadFloat {
            text: String::from_utf8_lossy(bytes).into_owned(),
        },
    };
    let val = lexical_core::parse::<f64>(&ascii_minus(bytes)).map_err(|_| bad())?;
    if val.is_finite() { Ok(val) } else { Err(bad()) }
}

// --- Ingest ---
const BUF_CAP: usize = 64 * 1024;

/// Read one number per line. Blank or unparsable lines are errors.
pub fn read_values<R: Read>(src: R) -> Result<Vec<f64>, ParseInputError> {
    let mut rdr = BufReader::with_capacity(BUF_CAP, src);
    let mut buf = Vec::<u8>::with_capacity(64);
    let mut values = Vec::<f64>::new();
    let mut line_no = 0usize;

    loop {
        buf.clear();
        let n = rdr
            .read_until(b'\n', &mut buf)
            .map_err(|e| ParseInputError {
                line: line_no + 1,
                kind: ParseErrorKind::Io(e),
            })?;
        if n == 0 {
            break;
        }
        line_no += 1;

        if buf.ends_with(b"\n") {
            buf.pop();
        }
        if buf.ends_with(b"\r") {
            buf.pop();
        }

        values.push(parse_f64(trim(&buf), line_no)?);
    }

    if values.is_empty() {
        return Err(ParseInputError {
            line: 0,
            kind: ParseErrorKind::Empty,
        });
    }
    tracing::debug!(lines = line_no, "read input values");
    Ok(values)
}

/// `-` reads stdin, anything else is opened as a file.
pub fn read_values_from_path(path: &str) -> Result<Vec<f64>, ParseInputError> {
    if path == "-" {
        read_values(std::io::stdin().lock())
    } else {
        use std::fs::File;
        read_values(File::open(path).map_err(|e| ParseInputError {
            line: 0,
            kind: ParseErrorKind::Io(e),
        })?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trim_strips_both_ends() {
        assert_eq!(trim(b"  1.5\t"), b"1.5");
        assert_eq!(trim(b"   "), b"");
        assert_eq!(trim(b""), b"");
    }

    #[test]
    fn unicode_minus_becomes_ascii() {
        assert_eq!(&*ascii_minus("\u{2212}2.5".as_bytes()), b"-2.5");
        assert_eq!(&*ascii_minus("1e\u{2212}3".as_bytes()), b"1e-3");
        assert!(matches!(ascii_minus(b"-2.5"), Cow::Borrowed(_)));
    }
}
