use std::path::Path;

use thermoplot::io::Format;

use crate::cli::InputMode;

/// Format named by the path's extension, if it is one of ours.
pub fn format(path: &Path) -> Option<Format> {
    Format::from_path(path)
}

/// Solver input flavour implied by an output path (`.ti` or `.tl`).
pub fn input_mode(path: &Path) -> Option<InputMode> {
    match format(path)? {
        Format::InputScript => Some(InputMode::Script),
        Format::CalculationList => Some(InputMode::List),
        _ => None,
    }
}
