use serde_json::{Map, Value};

/// Calculation results keyed by calculation index.
///
/// Each entry is an untyped tree of string-keyed mappings ending in numbers.
/// Entries keep the order in which they were inserted (or appeared in the
/// source document); that order is authoritative for series assembly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultStore {
    records: Map<String, Value>,
}

impl ResultStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_map(records: Map<String, Value>) -> Self {
        Self { records }
    }

    /// Adds or replaces a calculation. A replaced entry keeps its position.
    pub fn insert(&mut self, index: impl Into<String>, record: Value) -> Option<Value> {
        self.records.insert(index.into(), record)
    }

    pub fn get(&self, index: &str) -> Option<&Value> {
        self.records.get(index)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn indices(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.records.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for ResultStore {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
