use super::assemble::{AssembledSeries, assemble};
use super::error::Error;
use crate::model::path::KeyPath;
use crate::model::store::ResultStore;

/// One candidate series: where to find it, what to call it, and whether it
/// is currently switched on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesEntry {
    pub path: KeyPath,
    pub legend: String,
    pub enabled: bool,
}

/// An ordered set of candidate series for one axis group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeriesSelection {
    entries: Vec<SeriesEntry>,
}

impl SeriesSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a selection from parallel lists, as kept by a checkbox list.
    pub fn from_parts(
        paths: Vec<KeyPath>,
        legends: Vec<String>,
        enabled: Vec<bool>,
    ) -> Result<Self, Error> {
        if paths.len() != legends.len() || paths.len() != enabled.len() {
            return Err(Error::SelectionLength {
                paths: paths.len(),
                legends: legends.len(),
                flags: enabled.len(),
            });
        }
        let entries = paths
            .into_iter()
            .zip(legends)
            .zip(enabled)
            .map(|((path, legend), enabled)| SeriesEntry {
                path,
                legend,
                enabled,
            })
            .collect();
        Ok(Self { entries })
    }

    pub fn push(&mut self, path: KeyPath, legend: impl Into<String>) {
        self.push_entry(path, legend, true);
    }

    pub fn push_entry(&mut self, path: KeyPath, legend: impl Into<String>, enabled: bool) {
        self.entries.push(SeriesEntry {
            path,
            legend: legend.into(),
            enabled,
        });
    }

    pub fn entries(&self) -> &[SeriesEntry] {
        &self.entries
    }

    pub fn has_enabled(&self) -> bool {
        self.entries.iter().any(|e| e.enabled)
    }

    pub fn enabled_paths(&self) -> Vec<KeyPath> {
        self.enabled().map(|e| e.path.clone()).collect()
    }

    pub fn enabled_legends(&self) -> Vec<String> {
        self.enabled().map(|e| e.legend.clone()).collect()
    }

    fn enabled(&self) -> impl Iterator<Item = &SeriesEntry> {
        self.entries.iter().filter(|e| e.enabled)
    }
}

/// Legend text for a path when the caller gives none: `phase: species` for
/// depth-5 paths, the entry name for depth-3 paths, the key itself otherwise.
pub fn default_legend(path: &KeyPath) -> String {
    match path.keys() {
        [_, phase, _, species, _] => format!("{}: {}", phase, species),
        [_, entry, _] => entry.clone(),
        keys => keys.join(" "),
    }
}

/// Assembled series together with the legends of the series that were used.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedSeries {
    pub series: AssembledSeries,
    pub legend: Vec<String>,
    pub legend2: Vec<String>,
}

/// Assembles only the enabled entries of each selection.
pub fn assemble_selection(
    store: &ResultStore,
    x_key: &str,
    primary: &SeriesSelection,
    secondary: &SeriesSelection,
) -> Result<SelectedSeries, Error> {
    let series = assemble(
        store,
        x_key,
        &primary.enabled_paths(),
        &secondary.enabled_paths(),
    )?;
    Ok(SelectedSeries {
        series,
        legend: primary.enabled_legends(),
        legend2: secondary.enabled_legends(),
    })
}
