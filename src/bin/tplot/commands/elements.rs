use std::io::Write;

use anyhow::{Context, Result};

use thermoplot::ElementRecord;
use thermoplot::io::{Format, read_elements};

use crate::cli::ElementsArgs;
use crate::display::{Context as DisplayContext, Progress, print_element_table};
use crate::io::{create_output, open_input, target_name};

const TOTAL_STEPS: u8 = 2;

pub fn run_elements(args: ElementsArgs, ctx: DisplayContext) -> Result<()> {
    let mut progress = Progress::new(ctx.interactive, TOTAL_STEPS);

    progress.step("Reading data file");
    let input = open_input(args.input.as_deref(), Format::Dat)?;
    let record = read_elements(input).context("Failed to read data file")?;
    progress.complete_step(
        "Reading data file",
        &[format!(
            "{} of {} declared elements valid",
            record.element_count(),
            record.declared_elements
        )],
    );

    if ctx.interactive {
        print_element_table(&record);
    }

    progress.step("Writing element list");
    let mut out = create_output(args.io.output.as_deref())?;
    write_element_list(&mut out, &record).context("Failed to write element list")?;
    progress.complete_step(
        "Writing element list",
        &[format!("→ {}", target_name(args.io.output.as_deref()))],
    );

    progress.finish("Elements listed");
    Ok(())
}

/// One `symbol<TAB>atomic number` line per valid element, in file order.
fn write_element_list(out: &mut impl Write, record: &ElementRecord) -> std::io::Result<()> {
    for element in &record.elements {
        writeln!(out, "{}\t{}", element.symbol(), element.atomic_number())?;
    }
    out.flush()
}
