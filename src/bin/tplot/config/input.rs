use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use thermoplot::{
    Calculation, CalculationList, Element, InputScript, SolverFlags, Sweep, Units, io,
};

use crate::cli::InputMode;

/// Solver input request as written in a TOML file.
#[derive(Debug, Deserialize)]
pub struct InputRequest {
    pub mode: Option<ModeSpec>,
    pub data_file: PathBuf,
    /// Element symbols; read from `data_file` when omitted.
    pub elements: Option<Vec<String>>,
    #[serde(default)]
    pub masses: Vec<f64>,
    pub temperature: Option<SweepSpec>,
    pub pressure: Option<SweepSpec>,
    #[serde(default)]
    pub step_together: bool,
    #[serde(default)]
    pub units: UnitsSpec,
    #[serde(default)]
    pub flags: FlagsSpec,
    #[serde(default)]
    pub calculations: Vec<CalculationSpec>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModeSpec {
    Script,
    List,
}

/// A single value, or a range split into `steps` intervals.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(untagged)]
pub enum SweepSpec {
    Fixed(f64),
    Range {
        start: f64,
        end: f64,
        #[serde(default)]
        steps: u32,
    },
}

impl From<SweepSpec> for Sweep {
    fn from(spec: SweepSpec) -> Self {
        match spec {
            SweepSpec::Fixed(value) => Sweep::fixed(value),
            SweepSpec::Range { start, end, steps } => Sweep::new(start, end, steps),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UnitsSpec {
    #[serde(default = "default_temperature_unit")]
    pub temperature: String,
    #[serde(default = "default_pressure_unit")]
    pub pressure: String,
    #[serde(default = "default_mass_unit")]
    pub mass: String,
}

fn default_temperature_unit() -> String {
    Units::default().temperature
}
fn default_pressure_unit() -> String {
    Units::default().pressure
}
fn default_mass_unit() -> String {
    Units::default().mass
}

impl Default for UnitsSpec {
    fn default() -> Self {
        let units = Units::default();
        Self {
            temperature: units.temperature,
            pressure: units.pressure,
            mass: units.mass,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct FlagsSpec {
    #[serde(default = "default_print_mode")]
    pub print_mode: u8,
    #[serde(default)]
    pub heat_capacity: bool,
    #[serde(default = "default_write_json")]
    pub write_json: bool,
    #[serde(default)]
    pub debug_mode: bool,
    #[serde(default)]
    pub reinitialization: bool,
    pub min_species: Option<u32>,
}

fn default_print_mode() -> u8 {
    SolverFlags::default().print_mode
}
fn default_write_json() -> bool {
    SolverFlags::default().write_json
}

impl Default for FlagsSpec {
    fn default() -> Self {
        Self {
            print_mode: default_print_mode(),
            heat_capacity: false,
            write_json: default_write_json(),
            debug_mode: false,
            reinitialization: false,
            min_species: None,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CalculationSpec {
    pub temperature: f64,
    pub pressure: f64,
    pub masses: Vec<f64>,
}

/// A fully resolved solver input, ready to be written.
#[derive(Debug)]
pub enum SolverInput {
    Script(InputScript),
    List(CalculationList),
}

pub fn load_input_request(path: &Path) -> Result<InputRequest> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read input request: {}", path.display()))?;
    parse_input_request(&text)
        .with_context(|| format!("Invalid input request: {}", path.display()))
}

pub fn parse_input_request(text: &str) -> Result<InputRequest> {
    Ok(toml::from_str(text)?)
}

/// Picks the input flavour: flag first, then request, then the output
/// extension, then script mode.
pub fn resolve_mode(
    flag: Option<InputMode>,
    request: Option<ModeSpec>,
    output: Option<&Path>,
) -> InputMode {
    flag.or(request.map(Into::into))
        .or_else(|| output.and_then(crate::io::infer_input_mode))
        .unwrap_or(InputMode::Script)
}

/// Builds the solver input. `base` is the directory the request file lives
/// in; a relative `data_file` is looked up there when elements must be read
/// from it, but is written out exactly as given.
pub fn build_solver_input(
    request: InputRequest,
    mode: InputMode,
    base: Option<&Path>,
) -> Result<SolverInput> {
    let elements = resolve_elements(&request, base)?;
    let data_file = request.data_file.to_string_lossy().into_owned();
    let units = Units {
        temperature: request.units.temperature,
        pressure: request.units.pressure,
        mass: request.units.mass,
    };
    let flags = SolverFlags {
        print_mode: request.flags.print_mode,
        heat_capacity: request.flags.heat_capacity,
        write_json: request.flags.write_json,
        debug_mode: request.flags.debug_mode,
        reinitialization: request.flags.reinitialization,
        min_species: request.flags.min_species,
    };

    match mode {
        InputMode::Script => {
            let Some(temperature) = request.temperature else {
                bail!("Script mode requires a 'temperature' value or range");
            };
            let Some(pressure) = request.pressure else {
                bail!("Script mode requires a 'pressure' value or range");
            };
            Ok(SolverInput::Script(InputScript {
                data_file,
                elements,
                masses: request.masses,
                temperature: temperature.into(),
                pressure: pressure.into(),
                step_together: request.step_together,
                units,
                flags,
            }))
        }
        InputMode::List => {
            if request.calculations.is_empty() {
                bail!("List mode requires at least one [[calculations]] entry");
            }
            let calculations = request
                .calculations
                .into_iter()
                .map(|c| Calculation {
                    temperature: c.temperature,
                    pressure: c.pressure,
                    masses: c.masses,
                })
                .collect();
            Ok(SolverInput::List(CalculationList {
                data_file,
                elements,
                calculations,
                units,
                flags,
            }))
        }
    }
}

fn resolve_elements(request: &InputRequest, base: Option<&Path>) -> Result<Vec<Element>> {
    if let Some(symbols) = &request.elements {
        return symbols
            .iter()
            .map(|s| {
                s.parse::<Element>()
                    .with_context(|| format!("Invalid element in request: '{}'", s))
            })
            .collect();
    }

    let path = match base {
        Some(dir) if request.data_file.is_relative() => dir.join(&request.data_file),
        _ => request.data_file.clone(),
    };
    let record = io::load_elements(&path)
        .with_context(|| format!("Failed to read elements from {}", path.display()))?;
    Ok(record.elements)
}

impl From<ModeSpec> for InputMode {
    fn from(mode: ModeSpec) -> Self {
        match mode {
            ModeSpec::Script => InputMode::Script,
            ModeSpec::List => InputMode::List,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCRIPT: &str = r#"
data_file = "data/CrCl.dat"
elements = ["Cr", "Cl"]
masses = [1.0, 2.0]
temperature = { start = 300.0, end = 1000.0, steps = 7 }
pressure = 1.0

[flags]
min_species = 3
"#;

    const LIST: &str = r#"
mode = "list"
data_file = "CrCl.dat"
elements = ["Cr", "Cl"]

[units]
mass = "grams"

[[calculations]]
temperature = 500.0
pressure = 1.0
masses = [1.0, 2.0]
"#;

    #[test]
    fn script_request_builds_input_script() {
        let request = parse_input_request(SCRIPT).unwrap();
        let mode = resolve_mode(None, request.mode, None);
        assert_eq!(mode, InputMode::Script);

        let SolverInput::Script(script) = build_solver_input(request, mode, None).unwrap() else {
            panic!("expected input script");
        };
        assert_eq!(script.data_file, "data/CrCl.dat");
        assert_eq!(script.elements, vec![Element::Cr, Element::Cl]);
        assert_eq!(script.temperature, Sweep::new(300.0, 1000.0, 7));
        assert_eq!(script.pressure, Sweep::fixed(1.0));
        assert_eq!(script.units, Units::default());
        assert_eq!(script.flags.min_species, Some(3));
        assert!(script.flags.write_json);
        assert_eq!(script.flags.print_mode, 2);
    }

    #[test]
    fn list_request_builds_calculation_list() {
        let request = parse_input_request(LIST).unwrap();
        let mode = resolve_mode(None, request.mode, None);
        assert_eq!(mode, InputMode::List);

        let SolverInput::List(list) = build_solver_input(request, mode, None).unwrap() else {
            panic!("expected calculation list");
        };
        assert_eq!(list.calculations.len(), 1);
        assert_eq!(list.units.mass, "grams");
        assert_eq!(list.units.temperature, "K");
    }

    #[test]
    fn mode_resolution_order() {
        let tl = Path::new("run.tl");
        assert_eq!(
            resolve_mode(Some(InputMode::Script), Some(ModeSpec::List), Some(tl)),
            InputMode::Script
        );
        assert_eq!(
            resolve_mode(None, Some(ModeSpec::Script), Some(tl)),
            InputMode::Script
        );
        assert_eq!(resolve_mode(None, None, Some(tl)), InputMode::List);
        assert_eq!(
            resolve_mode(None, None, Some(Path::new("run.txt"))),
            InputMode::Script
        );
    }

    #[test]
    fn missing_sweeps_and_calculations_fail() {
        let request = parse_input_request(LIST).unwrap();
        let err = build_solver_input(request, InputMode::Script, None).unwrap_err();
        assert!(err.to_string().contains("temperature"));

        let request = parse_input_request(SCRIPT).unwrap();
        let err = build_solver_input(request, InputMode::List, None).unwrap_err();
        assert!(err.to_string().contains("[[calculations]]"));
    }

    #[test]
    fn elements_can_come_from_the_data_file() {
        let dir = std::env::temp_dir().join(format!("tplot-input-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(
            dir.join("CrCl.dat"),
            " CrCl\n    3    2\n Cr                       Cl                       e(g)\n\n",
        )
        .unwrap();

        let request = parse_input_request(
            "data_file = \"CrCl.dat\"\nmasses = [1.0, 1.0]\ntemperature = 500.0\npressure = 1.0\n",
        )
        .unwrap();
        let SolverInput::Script(script) =
            build_solver_input(request, InputMode::Script, Some(&dir)).unwrap()
        else {
            panic!("expected input script");
        };
        assert_eq!(script.elements, vec![Element::Cr, Element::Cl]);
        assert_eq!(script.data_file, "CrCl.dat");

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn unknown_symbols_are_rejected() {
        let request = parse_input_request(
            "data_file = \"x.dat\"\nelements = [\"Xx\"]\ntemperature = 1.0\npressure = 1.0\n",
        )
        .unwrap();
        let err = build_solver_input(request, InputMode::Script, None).unwrap_err();
        assert!(err.to_string().contains("'Xx'"));
    }
}
