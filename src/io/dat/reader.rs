use crate::io::{Format, error::Error, util};
use crate::model::{record::ElementRecord, types::Element};
use log::{debug, warn};
use std::io::BufRead;

/// Distance between the starts of neighbouring symbol fields.
const FIELD_PITCH: usize = 25;
/// Characters read per field; the last column of each pitch is never read.
const SYMBOL_WIDTH: usize = 24;
const SYMBOLS_PER_ROW: usize = 3;
/// Electron and other pseudo-element entries start with this character.
const PSEUDO_PREFIX: char = 'e';

/// Reads the element layout from the head of a data file.
///
/// Consumes the comment and header lines, any lines up to the first one
/// holding a letter, the element rows, and exactly one line after them.
/// Everything beyond that is left in `reader`.
pub fn read<R: BufRead>(reader: R) -> Result<ElementRecord, Error> {
    let mut lines = util::LineReader::new(reader);

    lines
        .next_line()?
        .ok_or_else(|| Error::parse(Format::Dat, 1, "missing comment line"))?;
    let (header_no, header) = lines
        .next_line()?
        .ok_or_else(|| Error::parse(Format::Dat, 2, "missing header line"))?;
    let declared = util::int_field(&header, 1, 5, Format::Dat, header_no, "element count")?;
    let phase_count = util::int_field(&header, 6, 10, Format::Dat, header_no, "phase count")?;

    let (first_no, first_row) = loop {
        match lines.next_line()? {
            Some((ln, line)) if line.chars().any(char::is_alphabetic) => break (ln, line),
            Some(_) => continue,
            None => {
                return Err(Error::parse(
                    Format::Dat,
                    lines.line_no() + 1,
                    "no element symbol block found",
                ));
            }
        }
    };

    let rows = declared.div_ceil(SYMBOLS_PER_ROW);
    let symbols = read_symbol_rows(&mut lines, first_row, rows)?;

    // One line beyond the block is consumed as well; running out there is fine.
    if rows > 0 && lines.skip_line()? {
        debug!("skipped line {} after element block", lines.line_no());
    }

    let elements = validate(&symbols);
    if elements.is_empty() {
        return Err(Error::parse(
            Format::Dat,
            first_no,
            "no valid element symbols in element block",
        ));
    }

    Ok(ElementRecord {
        elements,
        declared_elements: declared,
        phase_count,
    })
}

fn read_symbol_rows<R: BufRead>(
    lines: &mut util::LineReader<R>,
    first: String,
    rows: usize,
) -> Result<Vec<String>, Error> {
    let mut symbols = Vec::with_capacity(rows * SYMBOLS_PER_ROW);
    let mut line = first;
    for row in 1..=rows {
        symbols.extend(split_row(&line));
        if row == rows {
            break;
        }
        line = lines.next_line()?.map(|(_, l)| l).ok_or_else(|| {
            Error::parse(
                Format::Dat,
                lines.line_no() + 1,
                format!("element block ended after {} of {} rows", row, rows),
            )
        })?;
    }
    Ok(symbols)
}

fn split_row(line: &str) -> impl Iterator<Item = String> + '_ {
    (0..SYMBOLS_PER_ROW).map(move |j| {
        let begin = 1 + j * FIELD_PITCH;
        util::column(line, begin, begin + SYMBOL_WIDTH)
            .trim()
            .to_string()
    })
}

fn validate(symbols: &[String]) -> Vec<Element> {
    symbols
        .iter()
        .filter_map(|symbol| match symbol.parse::<Element>() {
            Ok(element) => Some(element),
            Err(_) if symbol.is_empty() || symbol.starts_with(PSEUDO_PREFIX) => None,
            Err(e) => {
                warn!("dropping entry from element block: {}", e);
                None
            }
        })
        .collect()
}
