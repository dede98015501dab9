use std::io::{self, Write};

use anyhow::Error;

use thermoplot::extract::Error as ExtractError;
use thermoplot::io::{Error as IoError, Format};
use thermoplot::plot::Error as PlotError;

use crate::util::text::wrap;

#[rustfmt::skip]
pub fn print_error(err: &Error) {
    let mut stderr = io::stderr().lock();

    let _ = writeln!(stderr);
    let _ = writeln!(stderr, "   ╔══════════════════════════════════════════════════════════════╗");
    let _ = writeln!(stderr, "   ║  ✗ Error                                                     ║");
    let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");

    for line in wrap(&err.to_string(), 59) {
        let _ = writeln!(stderr, "   ║  {:<59} ║", line);
    }

    for cause in err.chain().skip(1) {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Caused by:                                                  ║");
        for line in wrap(&cause.to_string(), 57) {
            let _ = writeln!(stderr, "   ║    {:<57} ║", line);
        }
    }

    let hints = hints_for(err);
    if !hints.is_empty() {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Hints:                                                      ║");
        for hint in hints {
            let wrapped = wrap(&hint, 55);
            if let Some((first, rest)) = wrapped.split_first() {
                let _ = writeln!(stderr, "   ║    • {:<55} ║", first);
                for line in rest {
                    let _ = writeln!(stderr, "   ║      {:<55} ║", line);
                }
            }
        }
    }

    let _ = writeln!(stderr, "   ╚══════════════════════════════════════════════════════════════╝");
    let _ = writeln!(stderr);
}

fn hints_for(err: &Error) -> Vec<String> {
    let mut collector = HintCollector::default();

    for cause in err.chain() {
        if let Some(e) = cause.downcast_ref::<IoError>() {
            collector.io(e);
        } else if let Some(e) = cause.downcast_ref::<ExtractError>() {
            collector.extract(e);
        } else if let Some(e) = cause.downcast_ref::<PlotError>() {
            collector.plot(e);
        } else if cause.downcast_ref::<toml::de::Error>().is_some() {
            collector.toml();
        }
    }

    if collector.hints.is_empty() {
        collector.fallback(err);
    }
    collector.hints
}

#[derive(Default)]
struct HintCollector {
    hints: Vec<String>,
}

impl HintCollector {
    fn add(&mut self, hint: impl Into<String>) {
        self.hints.push(hint.into());
    }

    fn io(&mut self, err: &IoError) {
        match err {
            IoError::Io { source } => self.std_io(source),

            IoError::Parse { format, line, .. } => {
                self.add(format!("The {} parser stopped near line {}", format, line));
                self.format_hints(*format);
            }

            IoError::UnsupportedFormat(found, wanted) => {
                self.add(format!("A {} file cannot supply {}", found, wanted));
                self.add("Data files end in .dat, calculation results in .json");
            }

            IoError::Conversion(_) => {
                self.add("Each element needs exactly one mass, in the same order");
                self.add("Check 'masses' and every [[calculations]] entry in the request");
            }
        }
    }

    fn std_io(&mut self, source: &std::io::Error) {
        use std::io::ErrorKind;

        match source.kind() {
            ErrorKind::NotFound => {
                self.add("File or directory not found");
                self.add("Check the path spelling and ensure the file exists");
            }
            ErrorKind::PermissionDenied => {
                self.add("Permission denied accessing the file");
                self.add("Check file permissions with `ls -la`");
            }
            ErrorKind::InvalidData => {
                self.add("File is not valid UTF-8 text");
                self.add("Verify the file is not truncated or binary");
            }
            ErrorKind::BrokenPipe => {
                self.add("Output consumer closed the pipe early");
                self.add("This may occur when piping to commands like `head`");
            }
            _ => {
                self.add("I/O operation failed");
                self.add("Check file path, permissions, and disk space");
            }
        }
    }

    fn format_hints(&mut self, format: Format) {
        match format {
            Format::Dat => {
                self.add("DAT: line 2 must hold the element count in columns 2-5");
                self.add("DAT: element symbols sit in 25-character fields, three per row");
            }
            Format::Json => {
                self.add("JSON: the document must be an object keyed by calculation index");
                self.add("Was the solver run with 'write json = .TRUE.'?");
            }
            Format::PlotScript | Format::InputScript | Format::CalculationList => {}
        }
    }

    fn extract(&mut self, err: &ExtractError) {
        match err {
            ExtractError::UnsupportedPath { path, source, .. } => {
                self.add(format!(
                    "'{}' has {} keys; paths need 1, 3, or 5 keys",
                    path, source.0
                ));
                self.add("Separate keys with '/', e.g. solution phases/gas/species/Cl2/moles");
            }
            ExtractError::SelectionLength { .. } => {
                self.add("Every series entry needs a path, a legend, and an enabled flag");
            }
        }
    }

    fn plot(&mut self, err: &PlotError) {
        match err {
            PlotError::LegendMismatch { axis, .. } => {
                self.add(format!(
                    "Give one legend per {} series, or omit legends to use defaults",
                    axis
                ));
            }
        }
    }

    fn toml(&mut self) {
        self.add("The request file is not valid TOML");
        self.add("Check for missing quotes, brackets, or misspelled keys");
    }

    fn fallback(&mut self, err: &Error) {
        let text = err
            .chain()
            .map(|c| c.to_string().to_lowercase())
            .collect::<Vec<_>>()
            .join("\n");

        if text.contains("stdin") || text.contains("terminal") {
            self.add("Provide input via -i/--input or pipe data to stdin");
        } else if text.contains("no series") {
            self.add("Add --y PATH, or [[series]] entries in the request");
        } else if text.contains("no such file") || text.contains("not found") {
            self.add("Check that the file path is correct");
        }
    }
}
