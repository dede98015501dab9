use super::types::Element;

/// A linear range of state points. `steps == 0` means a single point at `start`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sweep {
    pub start: f64,
    pub end: f64,
    pub steps: u32,
}

impl Sweep {
    pub fn fixed(value: f64) -> Self {
        Self {
            start: value,
            end: value,
            steps: 0,
        }
    }

    pub fn new(start: f64, end: f64, steps: u32) -> Self {
        Self { start, end, steps }
    }

    pub fn step_size(&self) -> Option<f64> {
        (self.steps > 0).then(|| (self.end - self.start) / f64::from(self.steps))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Units {
    pub temperature: String,
    pub pressure: String,
    pub mass: String,
}

impl Default for Units {
    fn default() -> Self {
        Self {
            temperature: "K".to_string(),
            pressure: "atm".to_string(),
            mass: "moles".to_string(),
        }
    }
}

/// Solver switches shared by both input formats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverFlags {
    pub print_mode: u8,
    pub heat_capacity: bool,
    pub write_json: bool,
    pub debug_mode: bool,
    pub reinitialization: bool,
    /// Left unset to keep the solver's own default.
    pub min_species: Option<u32>,
}

impl Default for SolverFlags {
    fn default() -> Self {
        Self {
            print_mode: 2,
            heat_capacity: false,
            write_json: true,
            debug_mode: false,
            reinitialization: false,
            min_species: None,
        }
    }
}

/// Input for the solver's script mode: one composition swept over
/// temperature and pressure.
#[derive(Debug, Clone, PartialEq)]
pub struct InputScript {
    pub data_file: String,
    pub elements: Vec<Element>,
    /// One amount per entry of `elements`.
    pub masses: Vec<f64>,
    pub temperature: Sweep,
    pub pressure: Sweep,
    pub step_together: bool,
    pub units: Units,
    pub flags: SolverFlags,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Calculation {
    pub temperature: f64,
    pub pressure: f64,
    pub masses: Vec<f64>,
}

/// Input for the solver's calculation-list mode: explicit state points,
/// each with its own composition.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationList {
    pub data_file: String,
    pub elements: Vec<Element>,
    pub calculations: Vec<Calculation>,
    pub units: Units,
    pub flags: SolverFlags,
}
