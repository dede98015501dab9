use crate::io::{error::Error, util};
use crate::model::input::{CalculationList, InputScript, SolverFlags, Sweep, Units};
use crate::model::types::Element;
use std::fmt::Display;
use std::io::Write;

const HEADER: &str = "! thermoplot-generated input file for Thermochimica";
const KEY_WIDTH: usize = 18;

pub fn write_input_script<W: Write>(mut writer: W, input: &InputScript) -> Result<(), Error> {
    check_masses(&input.elements, &input.masses, "input script")?;

    writeln!(writer, "{}", HEADER)?;
    setting(&mut writer, "temperature", sweep(&input.temperature))?;
    setting(&mut writer, "pressure", sweep(&input.pressure))?;
    for (element, mass) in input.elements.iter().zip(&input.masses) {
        setting(
            &mut writer,
            &format!("mass({})", element.atomic_number()),
            util::number(*mass),
        )?;
    }
    setting(&mut writer, "temperature unit", &input.units.temperature)?;
    setting(&mut writer, "pressure unit", &input.units.pressure)?;
    setting(
        &mut writer,
        "step together",
        util::fortran_bool(input.step_together),
    )?;
    setting(&mut writer, "mass unit", &input.units.mass)?;
    setting(&mut writer, "data file", &input.data_file)?;
    write_flags(&mut writer, &input.flags)?;
    writer.flush()?;
    Ok(())
}

pub fn write_calculation_list<W: Write>(
    mut writer: W,
    list: &CalculationList,
) -> Result<(), Error> {
    for (i, calc) in list.calculations.iter().enumerate() {
        check_masses(
            &list.elements,
            &calc.masses,
            &format!("calculation {}", i + 1),
        )?;
    }

    writeln!(writer, "{}", HEADER)?;
    setting(&mut writer, "data file", &list.data_file)?;
    write_units(&mut writer, &list.units)?;
    write_flags(&mut writer, &list.flags)?;
    setting(&mut writer, "nEl", list.elements.len())?;
    let numbers: Vec<String> = list
        .elements
        .iter()
        .map(|e| e.atomic_number().to_string())
        .collect();
    setting(&mut writer, "iEl", numbers.join(" "))?;
    setting(&mut writer, "nCalc", list.calculations.len())?;

    for calc in &list.calculations {
        let mut fields = vec![util::number(calc.temperature), util::number(calc.pressure)];
        fields.extend(calc.masses.iter().map(|&m| util::number(m)));
        writeln!(writer, "{}", fields.join(" "))?;
    }
    writer.flush()?;
    Ok(())
}

fn setting<W: Write>(writer: &mut W, key: &str, value: impl Display) -> Result<(), Error> {
    writeln!(writer, "{:<width$}= {}", key, value, width = KEY_WIDTH)?;
    Ok(())
}

fn sweep(range: &Sweep) -> String {
    match range.step_size() {
        Some(step) => format!(
            "{}:{}:{}",
            util::number(range.start),
            util::number(range.end),
            util::number(step)
        ),
        None => util::number(range.start),
    }
}

fn write_units<W: Write>(writer: &mut W, units: &Units) -> Result<(), Error> {
    setting(writer, "temperature unit", &units.temperature)?;
    setting(writer, "pressure unit", &units.pressure)?;
    setting(writer, "mass unit", format!("'{}'", units.mass))
}

fn write_flags<W: Write>(writer: &mut W, flags: &SolverFlags) -> Result<(), Error> {
    setting(writer, "print mode", flags.print_mode)?;
    setting(writer, "heat capacity", util::fortran_bool(flags.heat_capacity))?;
    setting(writer, "write json", util::fortran_bool(flags.write_json))?;
    setting(writer, "debug mode", util::fortran_bool(flags.debug_mode))?;
    setting(
        writer,
        "reinitialization",
        util::fortran_bool(flags.reinitialization),
    )?;
    if let Some(min) = flags.min_species {
        setting(writer, "min species", min)?;
    }
    Ok(())
}

fn check_masses(elements: &[Element], masses: &[f64], what: &str) -> Result<(), Error> {
    if elements.len() != masses.len() {
        return Err(Error::conversion(format!(
            "{} has {} masses for {} elements",
            what,
            masses.len(),
            elements.len()
        )));
    }
    Ok(())
}
