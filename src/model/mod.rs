//! Core data structures shared by the parsers, the extraction engine, and
//! the writers.
//!
//! - [`types`] – Periodic table symbol table.
//! - [`record`] – Element layout parsed from a legacy data file.
//! - [`store`] – Schema-free calculation results keyed by calculation index.
//! - [`path`] – Key paths into a result tree and their depth-based routing.
//! - [`series`] – Plot series and axis groups.
//! - [`input`] – Solver input descriptions (script and calculation-list modes).

pub mod input;
pub mod path;
pub mod record;
pub mod series;
pub mod store;
pub mod types;
