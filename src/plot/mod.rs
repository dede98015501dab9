//! Plot snapshots: rendering decisions captured as data, then rendered into
//! a re-executable script.
//!
//! A [`PlotDocument`] is built once from assembled series and a
//! [`RenderConfig`]; [`python::render`] turns it into matplotlib source, and
//! [`crate::io::write_plot_script`] puts that on disk.

mod color;
mod config;
mod document;
mod error;
pub mod python;

pub use color::{Rgb, rainbow, rainbow_cycle};
pub use config::{
    AxisStyle, ColorMode, DEFAULT_PRIMARY_MARKER, DEFAULT_SECONDARY_MARKER, ParseColorModeError,
    RenderConfig,
};
pub use document::{AxisData, AxisGroup, PlotDocument, PlotSeries};
pub use error::Error;
