//! Result extraction and plot reproduction for equilibrium thermochemistry runs.
//!
//! A solver run leaves two kinds of files behind: a legacy fixed-width data
//! file describing the chemical system, and a JSON document holding one
//! nested result tree per calculation. This crate reads both, pulls
//! index-aligned numeric series out of the result trees by key path, and
//! writes those series back out as a standalone matplotlib script that
//! redraws the plot without the original data.
//!
//! # Features
//!
//! - **Data file parsing**: element symbols from the fixed-width header
//!   block, validated against the periodic table
//! - **Key-path resolution**: depth-routed lookups into schema-free result
//!   trees, including vapor pressure derived from mole fraction and total
//!   pressure
//! - **Series assembly**: one aligned row per calculation, with records that
//!   cannot supply every value skipped and reported
//! - **Plot export**: deterministic matplotlib scripts with literal data,
//!   dual y-axes, and per-axis colour and scale settings
//! - **Solver input**: input-script and calculation-list files for the next run
//!
//! # Quick Start
//!
//! ```
//! use thermoplot::{KeyPath, ResultStore, extract, io};
//! use thermoplot::plot::{AxisData, PlotDocument, RenderConfig};
//!
//! let json = r#"{
//!     "1": {"temperature": 500.0, "pressure": 2.0,
//!           "solution phases": {"gas": {"species": {"Cl2": {"mole fraction": 0.25}}}}},
//!     "2": {"temperature": 700.0, "pressure": 2.0,
//!           "solution phases": {"gas": {"species": {"Cl2": {"mole fraction": 0.5}}}}},
//!     "3": {"temperature": 900.0}
//! }"#;
//! let store: ResultStore = io::read_results(json.as_bytes())?;
//!
//! let vapor: KeyPath = "solution phases/gas/species/Cl2/vapor pressure".parse()?;
//! let series = extract::assemble(&store, "temperature", &[vapor], &[])?;
//!
//! // Calculation 3 has no gas phase and is left out of every series.
//! assert_eq!(series.x, vec![500.0, 700.0]);
//! assert_eq!(series.y, vec![vec![0.5, 1.0]]);
//! assert_eq!(series.skipped.len(), 1);
//!
//! let doc = PlotDocument::new(
//!     series.x,
//!     "Temperature [K]",
//!     AxisData::new(series.y, "vapor pressure", vec!["gas: Cl2".into()]),
//!     None,
//!     &RenderConfig::default(),
//! )?;
//!
//! let mut script = Vec::new();
//! io::write_plot_script(&mut script, &doc)?;
//! assert!(String::from_utf8(script)?.contains("x = [500.0, 700.0]"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Module Organization
//!
//! - [`io`]: data file and result readers, script and solver input writers
//! - [`extract`]: key-path resolution and series assembly
//! - [`plot`]: plot documents, colours, and the matplotlib renderer
//!
//! # Data Types
//!
//! - [`Element`]: chemical element (H through Og)
//! - [`ElementRecord`]: element layout read from a data file
//! - [`ResultStore`]: calculation results keyed by index, in source order
//! - [`KeyPath`]: ordered keys into one result tree, and its [`Route`]
//! - [`Series`] / [`Axis`]: numeric series and the axis group they belong to
//! - [`InputScript`] / [`CalculationList`]: solver input descriptions

mod model;

pub mod extract;
pub mod io;
pub mod plot;

#[cfg(test)]
mod test_log;

pub use model::types::{ELEMENT_COUNT, Element, ParseElementError};

pub use model::record::ElementRecord;
pub use model::store::ResultStore;

pub use model::path::{
    KeyPath, MOLE_FRACTION, PATH_SEPARATOR, PRESSURE, ParseKeyPathError, Route, UnsupportedDepth,
    VAPOR_PRESSURE,
};
pub use model::series::{Axis, Series};

pub use model::input::{Calculation, CalculationList, InputScript, SolverFlags, Sweep, Units};
