use super::error::{Error, ResolveError};
use super::resolve::{ITERATION, lookup_x, resolve};
use crate::model::path::KeyPath;
use crate::model::series::{Axis, Series};
use crate::model::store::ResultStore;
use log::{debug, info};
use serde_json::Value;

/// A calculation left out of the assembled series, with the reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    pub index: String,
    pub reason: ResolveError,
}

/// Index-aligned plot series extracted from a [`ResultStore`].
///
/// `x`, every entry of `y`, and every entry of `y2` always have the same
/// length: a record contributes to all of them or to none.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssembledSeries {
    pub x: Series,
    pub y: Vec<Series>,
    pub y2: Vec<Series>,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    pub y2_label: Option<String>,
    pub skipped: Vec<SkippedRecord>,
}

impl AssembledSeries {
    #[inline]
    pub fn row_count(&self) -> usize {
        self.x.len()
    }

    pub fn has_secondary(&self) -> bool {
        !self.y2.is_empty()
    }

    pub fn is_aligned(&self) -> bool {
        let n = self.x.len();
        self.y.iter().chain(&self.y2).all(|s| s.len() == n)
    }

    fn push_row(&mut self, row: Row) {
        self.x.push(row.x);
        for (series, value) in self.y.iter_mut().zip(row.y) {
            series.push(value);
        }
        for (series, value) in self.y2.iter_mut().zip(row.y2) {
            series.push(value);
        }
    }
}

struct Row {
    x: f64,
    y: Vec<f64>,
    y2: Vec<f64>,
}

/// Axis label implied by a reserved x key, if any.
pub fn x_axis_label(x_key: &str) -> Option<&'static str> {
    match x_key {
        "temperature" => Some("Temperature [K]"),
        "pressure" => Some("Pressure [atm]"),
        ITERATION => Some("Iteration"),
        _ => None,
    }
}

/// Terminal key shared by every path of a group, used as that axis' label.
pub fn y_axis_label(paths: &[KeyPath]) -> Option<String> {
    let first = paths.first()?.terminal()?;
    paths
        .iter()
        .all(|p| p.terminal() == Some(first))
        .then(|| first.to_string())
}

/// Walks `store` in its own order and extracts one x value plus one value
/// per requested path from every record.
///
/// Records that cannot supply the x value or any requested path are left
/// out entirely and listed in [`AssembledSeries::skipped`]. Paths with an
/// unsupported depth are rejected before any record is visited.
pub fn assemble(
    store: &ResultStore,
    x_key: &str,
    paths: &[KeyPath],
    paths2: &[KeyPath],
) -> Result<AssembledSeries, Error> {
    validate_paths(paths, Axis::Primary)?;
    validate_paths(paths2, Axis::Secondary)?;

    let mut out = AssembledSeries {
        y: vec![Series::new(); paths.len()],
        y2: vec![Series::new(); paths2.len()],
        x_label: x_axis_label(x_key).map(str::to_string),
        y_label: y_axis_label(paths),
        y2_label: y_axis_label(paths2),
        ..AssembledSeries::default()
    };

    for (index, record) in store.iter() {
        match resolve_row(record, index, x_key, paths, paths2) {
            Ok(row) => out.push_row(row),
            Err(reason) => {
                debug!("skipping calculation {}: {}", index, reason);
                out.skipped.push(SkippedRecord {
                    index: index.to_string(),
                    reason,
                });
            }
        }
    }

    info!(
        "assembled {} of {} calculations ({} primary, {} secondary series)",
        out.row_count(),
        store.len(),
        out.y.len(),
        out.y2.len()
    );

    Ok(out)
}

fn validate_paths(paths: &[KeyPath], axis: Axis) -> Result<(), Error> {
    for path in paths {
        if let Err(source) = path.route() {
            return Err(Error::UnsupportedPath {
                axis,
                path: path.to_string(),
                source,
            });
        }
    }
    Ok(())
}

fn resolve_row(
    record: &Value,
    index: &str,
    x_key: &str,
    paths: &[KeyPath],
    paths2: &[KeyPath],
) -> Result<Row, ResolveError> {
    let y = resolve_all(record, paths)?;
    let y2 = resolve_all(record, paths2)?;
    let x = lookup_x(record, index, x_key)?;
    Ok(Row { x, y, y2 })
}

fn resolve_all(record: &Value, paths: &[KeyPath]) -> Result<Vec<f64>, ResolveError> {
    paths.iter().map(|p| resolve(record, p)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::path::UnsupportedDepth;
    use serde_json::json;

    fn store(entries: Vec<(&str, Value)>) -> ResultStore {
        entries.into_iter().collect()
    }

    #[test]
    fn temperature_against_itself() {
        let store = store(vec![
            ("0", json!({ "temperature": 500 })),
            ("1", json!({ "temperature": 900 })),
        ]);
        let out = assemble(&store, "temperature", &[KeyPath::new(["temperature"])], &[]).unwrap();

        assert_eq!(out.x, vec![500.0, 900.0]);
        assert_eq!(out.y, vec![vec![500.0, 900.0]]);
        assert!(out.y2.is_empty());
        assert_eq!(out.x_label.as_deref(), Some("Temperature [K]"));
        assert!(out.skipped.is_empty());
    }

    #[test]
    fn record_missing_a_path_is_dropped_whole() {
        let path = KeyPath::new(["pure condensed phases", "CrCl2_s", "moles"]);
        let store = store(vec![
            (
                "0",
                json!({ "temperature": 500, "pure condensed phases": { "CrCl2_s": { "moles": 0.5 } } }),
            ),
            (
                "1",
                json!({ "temperature": 700, "pure condensed phases": { "CrCl3_s": { "moles": 0.1 } } }),
            ),
            (
                "2",
                json!({ "temperature": 900, "pure condensed phases": { "CrCl2_s": { "moles": 0.9 } } }),
            ),
        ]);
        let out = assemble(&store, "temperature", &[path], &[]).unwrap();

        assert_eq!(out.x, vec![500.0, 900.0]);
        assert_eq!(out.y, vec![vec![0.5, 0.9]]);
        assert_eq!(out.skipped.len(), 1);
        assert_eq!(out.skipped[0].index, "1");
        assert_eq!(
            out.skipped[0].reason,
            ResolveError::MissingKey {
                key: "CrCl2_s".into(),
                depth: 2
            }
        );
    }

    #[test]
    fn secondary_failure_drops_primary_values_too() {
        let store = store(vec![
            ("0", json!({ "temperature": 500, "pressure": 1, "moles": 2 })),
            ("1", json!({ "temperature": 600, "pressure": 2 })),
        ]);
        let out = assemble(
            &store,
            "temperature",
            &[KeyPath::new(["pressure"])],
            &[KeyPath::new(["moles"])],
        )
        .unwrap();

        assert_eq!(out.x, vec![500.0]);
        assert_eq!(out.y, vec![vec![1.0]]);
        assert_eq!(out.y2, vec![vec![2.0]]);
        assert!(out.is_aligned());
        assert!(out.has_secondary());
    }

    #[test]
    fn missing_x_value_drops_the_record() {
        let store = store(vec![
            ("0", json!({ "temperature": 500, "pressure": 1 })),
            ("1", json!({ "pressure": 2 })),
        ]);
        let out = assemble(&store, "temperature", &[KeyPath::new(["pressure"])], &[]).unwrap();
        assert_eq!(out.x, vec![500.0]);
        assert_eq!(out.y, vec![vec![1.0]]);
        assert_eq!(out.skipped[0].index, "1");
    }

    #[test]
    fn series_lengths_always_match() {
        let store = store(vec![
            ("0", json!({ "temperature": 1, "a": 1, "b": 1 })),
            ("1", json!({ "temperature": 2, "a": 2 })),
            ("2", json!({ "temperature": 3, "b": 3 })),
            ("3", json!({ "a": 4, "b": 4 })),
            ("4", json!({ "temperature": 5, "a": 5, "b": "n/a" })),
            ("5", json!({ "temperature": 6, "a": 6, "b": 6 })),
        ]);
        let out = assemble(
            &store,
            "temperature",
            &[KeyPath::new(["a"]), KeyPath::new(["b"])],
            &[KeyPath::new(["a"])],
        )
        .unwrap();

        assert!(out.is_aligned());
        assert_eq!(out.x, vec![1.0, 6.0]);
        assert_eq!(out.row_count() + out.skipped.len(), store.len());
    }

    #[test]
    fn iteration_keeps_store_order() {
        let store = store(vec![
            ("3", json!({ "pressure": 3 })),
            ("1", json!({ "pressure": 1 })),
            ("2", json!({ "pressure": 2 })),
        ]);
        let out = assemble(&store, "iteration", &[KeyPath::new(["pressure"])], &[]).unwrap();

        assert_eq!(out.x, vec![3.0, 1.0, 2.0]);
        assert_eq!(out.x_label.as_deref(), Some("Iteration"));
    }

    #[test]
    fn unknown_x_key_leaves_label_unset() {
        let store = store(vec![("0", json!({ "volume": 1.0, "pressure": 1 }))]);
        let out = assemble(&store, "volume", &[KeyPath::new(["pressure"])], &[]).unwrap();
        assert_eq!(out.x, vec![1.0]);
        assert!(out.x_label.is_none());

        let out = assemble(&store, "pressure", &[], &[]).unwrap();
        assert_eq!(out.x_label.as_deref(), Some("Pressure [atm]"));
    }

    #[test]
    fn empty_path_lists_yield_empty_series() {
        let store = store(vec![("0", json!({ "temperature": 500 }))]);
        let out = assemble(&store, "temperature", &[], &[]).unwrap();
        assert_eq!(out.x, vec![500.0]);
        assert!(out.y.is_empty());
        assert!(out.y2.is_empty());
        assert!(out.y_label.is_none());
    }

    #[test]
    fn output_order_follows_path_order() {
        let store = store(vec![("0", json!({ "temperature": 1, "a": 10, "b": 20, "c": 30 }))]);
        let out = assemble(
            &store,
            "temperature",
            &[KeyPath::new(["c"]), KeyPath::new(["a"]), KeyPath::new(["b"])],
            &[],
        )
        .unwrap();
        assert_eq!(out.y, vec![vec![30.0], vec![10.0], vec![20.0]]);
    }

    #[test]
    fn unsupported_depth_aborts_before_reading_data() {
        let store = store(vec![("0", json!({ "temperature": 1 }))]);
        let err = assemble(
            &store,
            "temperature",
            &[],
            &[KeyPath::new(["solution phases", "A"])],
        )
        .unwrap_err();

        assert_eq!(
            err,
            Error::UnsupportedPath {
                axis: Axis::Secondary,
                path: "solution phases/A".into(),
                source: UnsupportedDepth(2),
            }
        );
    }

    #[test]
    fn y_label_is_shared_terminal_key() {
        let same = [
            KeyPath::new(["solution phases", "A", "species", "X", "mole fraction"]),
            KeyPath::new(["solution phases", "B", "species", "Y", "mole fraction"]),
        ];
        assert_eq!(y_axis_label(&same).as_deref(), Some("mole fraction"));

        let mixed = [KeyPath::new(["temperature"]), KeyPath::new(["pressure"])];
        assert_eq!(y_axis_label(&mixed), None);
        assert_eq!(y_axis_label(&[]), None);
    }
}
