//! Readers and writers for the files that surround a thermochemistry run.
//!
//! | Format | Direction | Content |
//! |--------|-----------|---------|
//! | [`Format::Dat`] | read | element layout of a legacy data file |
//! | [`Format::Json`] | read | calculation results keyed by index |
//! | [`Format::PlotScript`] | write | standalone matplotlib script |
//! | [`Format::InputScript`] | write | solver input in script mode |
//! | [`Format::CalculationList`] | write | solver input in calculation-list mode |
//!
//! Every function here is available in a stream flavour (`read_*` /
//! `write_*`, generic over [`BufRead`], [`Read`] or [`Write`]) and a path
//! flavour (`load_*` / `save_*`).

use crate::model::{
    input::{CalculationList, InputScript},
    record::ElementRecord,
    store::ResultStore,
};
use crate::plot::PlotDocument;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Read, Write};
use std::path::Path;

pub mod error;
pub mod util;

mod dat {
    pub mod reader;
}
mod json {
    pub mod reader;
}
mod script {
    pub mod writer;
}
mod input {
    pub mod writer;
}

pub use error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Dat,
    Json,
    PlotScript,
    InputScript,
    CalculationList,
}

impl Format {
    /// Maps a file extension (without the dot, any case) to a format.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "dat" => Some(Format::Dat),
            "json" => Some(Format::Json),
            "py" => Some(Format::PlotScript),
            "ti" => Some(Format::InputScript),
            "tl" => Some(Format::CalculationList),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Dat => write!(f, "DAT"),
            Format::Json => write!(f, "JSON"),
            Format::PlotScript => write!(f, "plot script"),
            Format::InputScript => write!(f, "input script"),
            Format::CalculationList => write!(f, "calculation list"),
        }
    }
}

pub fn read_elements<R: BufRead>(reader: R) -> Result<ElementRecord, Error> {
    dat::reader::read(reader)
}

pub fn read_results<R: Read>(reader: R) -> Result<ResultStore, Error> {
    json::reader::read(reader)
}

pub fn write_plot_script<W: Write>(writer: W, doc: &PlotDocument) -> Result<(), Error> {
    script::writer::write(writer, doc)
}

pub fn write_input_script<W: Write>(writer: W, input: &InputScript) -> Result<(), Error> {
    input::writer::write_input_script(writer, input)
}

pub fn write_calculation_list<W: Write>(writer: W, list: &CalculationList) -> Result<(), Error> {
    input::writer::write_calculation_list(writer, list)
}

/// Opens and parses a data file. A path whose extension names another
/// known format is rejected before the file is opened.
pub fn load_elements(path: impl AsRef<Path>) -> Result<ElementRecord, Error> {
    let path = path.as_ref();
    expect_format(path, Format::Dat, "element data")?;
    read_elements(BufReader::new(File::open(path)?))
}

pub fn load_results(path: impl AsRef<Path>) -> Result<ResultStore, Error> {
    let path = path.as_ref();
    expect_format(path, Format::Json, "calculation results")?;
    read_results(BufReader::new(File::open(path)?))
}

pub fn save_plot_script(path: impl AsRef<Path>, doc: &PlotDocument) -> Result<(), Error> {
    write_plot_script(BufWriter::new(File::create(path)?), doc)
}

pub fn save_input_script(path: impl AsRef<Path>, input: &InputScript) -> Result<(), Error> {
    write_input_script(BufWriter::new(File::create(path)?), input)
}

pub fn save_calculation_list(path: impl AsRef<Path>, list: &CalculationList) -> Result<(), Error> {
    write_calculation_list(BufWriter::new(File::create(path)?), list)
}

fn expect_format(path: &Path, expected: Format, what: &'static str) -> Result<(), Error> {
    match Format::from_path(path) {
        Some(found) if found != expected => Err(Error::UnsupportedFormat(found, what)),
        _ => Ok(()),
    }
}
