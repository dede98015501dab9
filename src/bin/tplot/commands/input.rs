use anyhow::{Context, Result};

use thermoplot::io::{write_calculation_list, write_input_script};

use crate::cli::InputArgs;
use crate::config::{SolverInput, build_solver_input, load_input_request, resolve_mode};
use crate::display::{Context as DisplayContext, Progress, print_input_summary};
use crate::io::{create_output, target_name};

const TOTAL_STEPS: u8 = 2;

pub fn run_input(args: InputArgs, ctx: DisplayContext) -> Result<()> {
    let mut progress = Progress::new(ctx.interactive, TOTAL_STEPS);
    let output = args.io.output.as_deref();

    progress.step("Reading input request");
    let request = load_input_request(&args.config)?;
    let mode = resolve_mode(args.mode, request.mode, output);
    let base = args.config.parent();
    let input = build_solver_input(request, mode, base)?;
    progress.complete_step(
        "Reading input request",
        &[format!("{:?} mode", mode).to_lowercase()],
    );

    if ctx.interactive {
        print_input_summary(&input);
    }

    progress.step("Writing solver input");
    let mut out = create_output(output)?;
    match &input {
        SolverInput::Script(script) => {
            write_input_script(&mut out, script).context("Failed to write input script")?
        }
        SolverInput::List(list) => {
            write_calculation_list(&mut out, list).context("Failed to write calculation list")?
        }
    }
    progress.complete_step("Writing solver input", &[format!("→ {}", target_name(output))]);

    progress.finish("Solver input written");
    Ok(())
}
