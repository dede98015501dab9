mod infer;

pub use infer::{format as infer_format, input_mode as infer_input_mode};

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, IsTerminal, Read, Stdin, StdoutLock, Write};
use std::path::Path;

use anyhow::{Context, Result, bail};

use thermoplot::io::Format;

pub fn stderr_is_tty() -> bool {
    io::stderr().is_terminal()
}

pub fn stdin_is_tty() -> bool {
    io::stdin().is_terminal()
}

pub enum InputSource {
    File(BufReader<File>),
    Stdin(BufReader<Stdin>),
}

impl Read for InputSource {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            InputSource::File(r) => r.read(buf),
            InputSource::Stdin(r) => r.read(buf),
        }
    }
}

impl BufRead for InputSource {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        match self {
            InputSource::File(r) => r.fill_buf(),
            InputSource::Stdin(r) => r.fill_buf(),
        }
    }

    fn consume(&mut self, amt: usize) {
        match self {
            InputSource::File(r) => r.consume(amt),
            InputSource::Stdin(r) => r.consume(amt),
        }
    }
}

/// Opens `path`, or stdin when it is `None`. A path whose extension names a
/// different known format than `expected` is refused up front.
pub fn open_input(path: Option<&Path>, expected: Format) -> Result<InputSource> {
    match path {
        Some(p) => {
            if let Some(found) = infer_format(p).filter(|f| *f != expected) {
                bail!(
                    "'{}' looks like a {} file, expected {} input",
                    p.display(),
                    found,
                    expected
                );
            }
            let file = File::open(p)
                .with_context(|| format!("Failed to open input file: {}", p.display()))?;
            Ok(InputSource::File(BufReader::new(file)))
        }
        None => {
            if stdin_is_tty() {
                bail!(
                    "No input file specified and stdin is a terminal.\n\nUse -i <FILE> or pipe {} data via stdin.",
                    expected
                );
            }
            Ok(InputSource::Stdin(BufReader::new(io::stdin())))
        }
    }
}

pub enum OutputTarget {
    File(BufWriter<File>),
    Stdout(BufWriter<StdoutLock<'static>>),
}

impl Write for OutputTarget {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            OutputTarget::File(w) => w.write(buf),
            OutputTarget::Stdout(w) => w.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            OutputTarget::File(w) => w.flush(),
            OutputTarget::Stdout(w) => w.flush(),
        }
    }
}

pub fn create_output(path: Option<&Path>) -> Result<OutputTarget> {
    match path {
        Some(p) => {
            let file = File::create(p)
                .with_context(|| format!("Failed to create output file: {}", p.display()))?;
            Ok(OutputTarget::File(BufWriter::new(file)))
        }
        None => Ok(OutputTarget::Stdout(BufWriter::new(io::stdout().lock()))),
    }
}

/// Short name of an output destination for progress lines.
pub fn target_name(path: Option<&Path>) -> String {
    path.and_then(|p| p.file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "stdout".to_string())
}
