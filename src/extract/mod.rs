//! Extraction of plottable series from schema-free calculation results.
//!
//! [`resolve`] follows one [`KeyPath`](crate::KeyPath) through one record;
//! [`assemble`] applies it across a whole [`ResultStore`](crate::ResultStore)
//! and keeps every returned series aligned by dropping records that cannot
//! supply all requested values.

mod assemble;
mod error;
mod resolve;
mod selection;

pub use assemble::{AssembledSeries, SkippedRecord, assemble, x_axis_label, y_axis_label};
pub use error::{Error, ResolveError};
pub use resolve::{ITERATION, lookup_x, resolve};
pub use selection::{
    SelectedSeries, SeriesEntry, SeriesSelection, assemble_selection, default_legend,
};
