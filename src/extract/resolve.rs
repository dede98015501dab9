use super::error::ResolveError;
use crate::model::path::{KeyPath, MOLE_FRACTION, PRESSURE, Route};
use serde_json::Value;

/// Reserved x key: use the calculation index itself as the abscissa.
pub const ITERATION: &str = "iteration";

/// Resolves one key path against a single calculation's result tree.
///
/// Depth-1, depth-3 and depth-5 paths are plain nested lookups. A depth-5
/// path ending in `vapor pressure` is computed as the entry's
/// `mole fraction` times the calculation's top-level `pressure`.
pub fn resolve(record: &Value, path: &KeyPath) -> Result<f64, ResolveError> {
    match path.route()? {
        Route::Depth1(key) => leaf(record, &[key]),
        Route::Depth3(keys) => leaf(record, &keys),
        Route::Depth5Direct(keys) => leaf(record, &keys),
        Route::Depth5Derived(keys) => {
            let entry = descend(record, &keys)?;
            let fraction = number(child(entry, MOLE_FRACTION, keys.len() + 1)?, MOLE_FRACTION)?;
            let pressure = leaf(record, &[PRESSURE])?;
            Ok(fraction * pressure)
        }
    }
}

/// Resolves the x value of a record.
///
/// [`ITERATION`] maps to the record's own index, parsed as an integer; any
/// other key is a top-level lookup.
pub fn lookup_x(record: &Value, index: &str, x_key: &str) -> Result<f64, ResolveError> {
    if x_key == ITERATION {
        return index
            .trim()
            .parse::<i64>()
            .map(|i| i as f64)
            .map_err(|_| ResolveError::InvalidIndex(index.to_string()));
    }
    leaf(record, &[x_key])
}

fn leaf(root: &Value, keys: &[&str]) -> Result<f64, ResolveError> {
    let node = descend(root, keys)?;
    number(node, keys.last().copied().unwrap_or_default())
}

fn descend<'v>(root: &'v Value, keys: &[&str]) -> Result<&'v Value, ResolveError> {
    keys.iter()
        .enumerate()
        .try_fold(root, |node, (i, key)| child(node, key, i + 1))
}

fn child<'v>(node: &'v Value, key: &str, depth: usize) -> Result<&'v Value, ResolveError> {
    node.as_object()
        .and_then(|map| map.get(key))
        .ok_or_else(|| ResolveError::missing(key, depth))
}

fn number(node: &Value, key: &str) -> Result<f64, ResolveError> {
    node.as_f64().ok_or_else(|| ResolveError::not_numeric(key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::path::UnsupportedDepth;
    use serde_json::json;

    fn sample() -> Value {
        json!({
            "temperature": 900,
            "pressure": 10,
            "integral Gibbs energy": -1.25e5,
            "pure condensed phases": {
                "CrCl2_s": { "moles": 0.75, "chemical potential": -3.2e5 }
            },
            "solution phases": {
                "A": {
                    "moles": 1.5,
                    "species": {
                        "X": { "mole fraction": 0.2, "chemical potential": -4.0e4 },
                        "Y": { "mole fraction": 0.8 }
                    }
                }
            }
        })
    }

    #[test]
    fn resolves_top_level_scalar() {
        let v = resolve(&sample(), &KeyPath::new(["temperature"])).unwrap();
        assert_eq!(v, 900.0);
    }

    #[test]
    fn resolves_depth_three() {
        let path = KeyPath::new(["pure condensed phases", "CrCl2_s", "moles"]);
        assert_eq!(resolve(&sample(), &path).unwrap(), 0.75);
    }

    #[test]
    fn resolves_depth_five_direct() {
        let path = KeyPath::new(["solution phases", "A", "species", "Y", "mole fraction"]);
        assert_eq!(resolve(&sample(), &path).unwrap(), 0.8);
    }

    #[test]
    fn derives_vapor_pressure_from_mole_fraction_and_pressure() {
        let record = json!({
            "solution phases": { "A": { "species": { "X": { "mole fraction": 0.2 } } } },
            "pressure": 10
        });
        let path = KeyPath::new(["solution phases", "A", "species", "X", "vapor pressure"]);
        assert_eq!(resolve(&record, &path).unwrap(), 2.0);
    }

    #[test]
    fn derived_value_equals_product_of_operands() {
        let record = sample();
        for species in ["X", "Y"] {
            let path = KeyPath::new(["solution phases", "A", "species", species, "vapor pressure"]);
            let direct = KeyPath::new(["solution phases", "A", "species", species, "mole fraction"]);
            let expected = resolve(&record, &direct).unwrap() * resolve(&record, &KeyPath::new(["pressure"])).unwrap();
            assert_eq!(resolve(&record, &path).unwrap(), expected);
        }
    }

    #[test]
    fn derived_path_without_pressure_fails() {
        let record = json!({
            "solution phases": { "A": { "species": { "X": { "mole fraction": 0.2 } } } }
        });
        let path = KeyPath::new(["solution phases", "A", "species", "X", "vapor pressure"]);
        assert_eq!(
            resolve(&record, &path).unwrap_err(),
            ResolveError::MissingKey {
                key: "pressure".into(),
                depth: 1
            }
        );
    }

    #[test]
    fn derived_path_without_mole_fraction_fails() {
        let record = json!({
            "solution phases": { "A": { "species": { "X": { "moles": 0.2 } } } },
            "pressure": 1
        });
        let path = KeyPath::new(["solution phases", "A", "species", "X", "vapor pressure"]);
        assert_eq!(
            resolve(&record, &path).unwrap_err(),
            ResolveError::MissingKey {
                key: "mole fraction".into(),
                depth: 5
            }
        );
    }

    #[test]
    fn reports_depth_of_missing_key() {
        let path = KeyPath::new(["solution phases", "B", "moles"]);
        assert_eq!(
            resolve(&sample(), &path).unwrap_err(),
            ResolveError::MissingKey {
                key: "B".into(),
                depth: 2
            }
        );
    }

    #[test]
    fn descending_through_a_scalar_is_a_missing_key() {
        let path = KeyPath::new(["temperature", "value", "K"]);
        assert!(matches!(
            resolve(&sample(), &path).unwrap_err(),
            ResolveError::MissingKey { depth: 2, .. }
        ));
    }

    #[test]
    fn non_numeric_leaf_is_rejected() {
        let path = KeyPath::new(["solution phases", "A", "species"]);
        assert_eq!(
            resolve(&sample(), &path).unwrap_err(),
            ResolveError::NotNumeric {
                key: "species".into()
            }
        );
    }

    #[test]
    fn unsupported_depth_is_distinct_from_missing_key() {
        let path = KeyPath::new(["solution phases", "A"]);
        assert_eq!(
            resolve(&sample(), &path).unwrap_err(),
            ResolveError::UnsupportedDepth(UnsupportedDepth(2))
        );
    }

    #[test]
    fn iteration_uses_the_record_index() {
        assert_eq!(lookup_x(&sample(), "12", ITERATION).unwrap(), 12.0);
        assert_eq!(
            lookup_x(&sample(), "first", ITERATION).unwrap_err(),
            ResolveError::InvalidIndex("first".into())
        );
    }

    #[test]
    fn other_x_keys_are_top_level_lookups() {
        assert_eq!(lookup_x(&sample(), "0", "temperature").unwrap(), 900.0);
        assert!(lookup_x(&sample(), "0", "volume").is_err());
    }
}
