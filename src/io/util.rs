//! Line and field helpers shared by the readers and writers.

use super::{Format, error::Error};
use std::io::BufRead;

/// Pulls numbered lines from a reader one at a time, so a parser can stop
/// as soon as it has what it needs and leave the rest of the stream unread.
pub struct LineReader<R> {
    reader: R,
    line_no: usize,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(reader: R) -> Self {
        Self { reader, line_no: 0 }
    }

    /// Number of the last line consumed (0 before the first).
    pub fn line_no(&self) -> usize {
        self.line_no
    }

    /// The next line without its terminator, or `None` at end of input.
    pub fn next_line(&mut self) -> Result<Option<(usize, String)>, Error> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        self.line_no += 1;
        Ok(Some((self.line_no, line)))
    }

    /// Consumes one line without decoding it. Returns `false` at end of input.
    pub fn skip_line(&mut self) -> Result<bool, Error> {
        let mut raw = Vec::new();
        if self.reader.read_until(b'\n', &mut raw)? == 0 {
            return Ok(false);
        }
        self.line_no += 1;
        Ok(true)
    }
}

/// Characters `[start, end)` of `line`. Columns past the end of the line
/// are treated as empty, so a short line yields a short or empty field.
pub fn column(line: &str, start: usize, end: usize) -> &str {
    if start >= end {
        return "";
    }
    let byte_at = |n: usize| {
        line.char_indices()
            .nth(n)
            .map_or(line.len(), |(idx, _)| idx)
    };
    &line[byte_at(start)..byte_at(end)]
}

/// Parses a trimmed fixed-width integer field.
pub fn int_field(
    line: &str,
    start: usize,
    end: usize,
    format: Format,
    line_no: usize,
    what: &str,
) -> Result<usize, Error> {
    let field = column(line, start, end).trim();
    field.parse::<usize>().map_err(|_| {
        Error::parse(
            format,
            line_no,
            format!("invalid {} '{}' in columns {}-{}", what, field, start + 1, end),
        )
    })
}

pub fn fortran_bool(value: bool) -> &'static str {
    if value { ".TRUE." } else { ".FALSE." }
}

/// Shortest decimal text that reads back as `value`.
pub fn number(value: f64) -> String {
    format!("{:?}", value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn columns_clip_to_line() {
        assert_eq!(column("  3   2", 1, 5), " 3  ");
        assert_eq!(column("ab", 1, 5), "b");
        assert_eq!(column("ab", 4, 8), "");
        assert_eq!(column("abc", 2, 2), "");
    }

    #[test]
    fn columns_count_characters_not_bytes() {
        assert_eq!(column("µCr", 1, 3), "Cr");
    }

    #[test]
    fn int_field_reports_columns() {
        assert_eq!(int_field("  12   4", 1, 5, Format::Dat, 2, "count").unwrap(), 12);
        let err = int_field(" abc", 1, 5, Format::Dat, 2, "element count").unwrap_err();
        assert_eq!(
            err.to_string(),
            "failed to parse DAT data: invalid element count 'abc' in columns 2-5 (at line ~2)"
        );
    }

    #[test]
    fn lines_are_numbered_from_one() {
        let mut lines = LineReader::new(Cursor::new("a\r\nb\n\nc"));
        assert_eq!(lines.next_line().unwrap(), Some((1, "a".to_string())));
        assert_eq!(lines.next_line().unwrap(), Some((2, "b".to_string())));
        assert_eq!(lines.next_line().unwrap(), Some((3, String::new())));
        assert_eq!(lines.next_line().unwrap(), Some((4, "c".to_string())));
        assert_eq!(lines.next_line().unwrap(), None);
        assert_eq!(lines.line_no(), 4);
    }

    #[test]
    fn skipped_lines_are_not_decoded() {
        let mut lines = LineReader::new(Cursor::new(&b"ok\n\xE9\xE0 bad\nnext\n"[..]));
        assert_eq!(lines.next_line().unwrap(), Some((1, "ok".to_string())));
        assert!(lines.skip_line().unwrap());
        assert_eq!(lines.next_line().unwrap(), Some((3, "next".to_string())));
        assert!(!lines.skip_line().unwrap());
    }

    #[test]
    fn undecodable_lines_are_io_errors() {
        let mut lines = LineReader::new(Cursor::new(&b"\xFF\n"[..]));
        assert!(matches!(lines.next_line(), Err(Error::Io { .. })));
    }

    #[test]
    fn scalar_text() {
        assert_eq!(fortran_bool(true), ".TRUE.");
        assert_eq!(fortran_bool(false), ".FALSE.");
        assert_eq!(number(300.0), "300.0");
        assert_eq!(number(0.5), "0.5");
    }
}
