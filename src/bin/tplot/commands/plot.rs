use anyhow::{Context, Result, bail};
use log::warn;

use thermoplot::extract::{SelectedSeries, assemble_selection};
use thermoplot::io::{Format, read_results, write_plot_script};
use thermoplot::plot::{AxisData, PlotDocument};

use crate::cli::PlotArgs;
use crate::config::{PlotPlan, PlotRequest, build_plot_plan, load_plot_request};
use crate::display::{Context as DisplayContext, Progress, print_series_summary};
use crate::io::{create_output, open_input, target_name};

const TOTAL_STEPS: u8 = 3;

pub fn run_plot(args: PlotArgs, ctx: DisplayContext) -> Result<()> {
    let request = match &args.config {
        Some(path) => load_plot_request(path)?,
        None => PlotRequest::default(),
    };
    let plan = build_plot_plan(request, &args)?;
    if !plan.primary.has_enabled() && !plan.secondary.has_enabled() {
        bail!("No series selected for plotting");
    }

    let mut progress = Progress::new(ctx.interactive, TOTAL_STEPS);

    progress.step("Reading calculation results");
    let input = open_input(args.input.as_deref(), Format::Json)?;
    let store = read_results(input).context("Failed to read calculation results")?;
    progress.complete_step(
        "Reading calculation results",
        &[format!("{} calculations", store.len())],
    );

    progress.step("Assembling series");
    let selected = assemble_selection(&store, &plan.x_key, &plan.primary, &plan.secondary)
        .context("Failed to assemble series")?;
    let series = &selected.series;
    if series.row_count() == 0 && !store.is_empty() {
        warn!(
            "every calculation was skipped; the plot script will contain no data points"
        );
    }
    progress.complete_step(
        "Assembling series",
        &[
            format!("{} rows against '{}'", series.row_count(), plan.x_key),
            format!("{} calculations skipped", series.skipped.len()),
        ],
    );

    if ctx.interactive {
        print_series_summary(series, store.len(), &plan.x_key);
    }

    progress.step("Writing plot script");
    let doc = build_document(selected, &plan)?;
    let mut out = create_output(args.io.output.as_deref())?;
    write_plot_script(&mut out, &doc).context("Failed to write plot script")?;
    progress.complete_step(
        "Writing plot script",
        &[format!(
            "{} series → {}",
            doc.series_count(),
            target_name(args.io.output.as_deref())
        )],
    );

    progress.finish("Plot script exported");
    Ok(())
}

/// Labels fall back from the plan to what the assembler derived, then to
/// the x key itself for the x axis and an empty string for y axes.
fn build_document(selected: SelectedSeries, plan: &PlotPlan) -> Result<PlotDocument> {
    let SelectedSeries {
        series,
        legend,
        legend2,
    } = selected;

    let x_label = plan
        .x_label
        .clone()
        .or(series.x_label)
        .unwrap_or_else(|| plan.x_key.clone());
    let y_label = plan.y_label.clone().or(series.y_label).unwrap_or_default();
    let y2_label = plan.y2_label.clone().or(series.y2_label).unwrap_or_default();

    let doc = PlotDocument::new(
        series.x,
        x_label,
        AxisData::new(series.y, y_label, legend),
        Some(AxisData::new(series.y2, y2_label, legend2)),
        &plan.render,
    )?;
    Ok(doc)
}
