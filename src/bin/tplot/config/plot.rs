use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::Deserialize;

use thermoplot::KeyPath;
use thermoplot::extract::{ITERATION, SeriesSelection, default_legend};
use thermoplot::plot::{AxisStyle, ColorMode, RenderConfig};

use crate::cli::{ColorChoice, PlotArgs, RenderOptions, SeriesOptions};

/// Plot request as written in a TOML file. Every field may be omitted.
#[derive(Debug, Default, Deserialize)]
pub struct PlotRequest {
    pub x: Option<String>,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    pub y2_label: Option<String>,
    #[serde(default)]
    pub series: Vec<SeriesSpec>,
    #[serde(default)]
    pub series2: Vec<SeriesSpec>,
    #[serde(default)]
    pub render: RenderSpec,
}

#[derive(Debug, Deserialize)]
pub struct SeriesSpec {
    pub path: PathSpec,
    pub legend: Option<String>,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

/// A key path written either as an array of keys or as one `/`-joined string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum PathSpec {
    Keys(Vec<String>),
    Joined(String),
}

impl PathSpec {
    fn to_key_path(&self) -> Result<KeyPath> {
        match self {
            PathSpec::Keys(keys) if keys.is_empty() => Err(anyhow!("Series path is empty")),
            PathSpec::Keys(keys) => Ok(KeyPath::new(keys.iter().cloned())),
            PathSpec::Joined(text) => text
                .parse()
                .with_context(|| format!("Invalid series path '{}'", text)),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct RenderSpec {
    #[serde(default)]
    pub x_log: bool,
    #[serde(default)]
    pub primary: AxisSpec,
    #[serde(default)]
    pub secondary: AxisSpec,
}

#[derive(Debug, Default, Deserialize)]
pub struct AxisSpec {
    pub marker: Option<String>,
    pub color: Option<String>,
    #[serde(default)]
    pub log: bool,
}

/// Everything the plot command needs, merged from request and flags.
#[derive(Debug)]
pub struct PlotPlan {
    pub x_key: String,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    pub y2_label: Option<String>,
    pub primary: SeriesSelection,
    pub secondary: SeriesSelection,
    pub render: RenderConfig,
}

pub fn load_plot_request(path: &Path) -> Result<PlotRequest> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read plot request: {}", path.display()))?;
    parse_plot_request(&text)
        .with_context(|| format!("Invalid plot request: {}", path.display()))
}

pub fn parse_plot_request(text: &str) -> Result<PlotRequest> {
    Ok(toml::from_str(text)?)
}

pub fn build_plot_plan(request: PlotRequest, args: &PlotArgs) -> Result<PlotPlan> {
    let SeriesOptions {
        x,
        y,
        y2,
        x_label,
        y_label,
        y2_label,
    } = &args.series;

    let x_key = x
        .clone()
        .or(request.x)
        .unwrap_or_else(|| ITERATION.to_string());

    let primary = build_selection(&request.series, y)?;
    let secondary = build_selection(&request.series2, y2)?;
    let render = build_render_config(&request.render, &args.render)?;

    Ok(PlotPlan {
        x_key,
        x_label: x_label.clone().or(request.x_label),
        y_label: y_label.clone().or(request.y_label),
        y2_label: y2_label.clone().or(request.y2_label),
        primary,
        secondary,
        render,
    })
}

fn build_selection(specs: &[SeriesSpec], extra: &[String]) -> Result<SeriesSelection> {
    let mut selection = SeriesSelection::new();

    for spec in specs {
        let path = spec.path.to_key_path()?;
        let legend = spec
            .legend
            .clone()
            .unwrap_or_else(|| default_legend(&path));
        selection.push_entry(path, legend, spec.enabled);
    }

    for text in extra {
        let path: KeyPath = text
            .parse()
            .with_context(|| format!("Invalid series path '{}'", text))?;
        let legend = default_legend(&path);
        selection.push(path, legend);
    }

    Ok(selection)
}

fn build_render_config(spec: &RenderSpec, opts: &RenderOptions) -> Result<RenderConfig> {
    let mut config = RenderConfig::default();
    config.x_log = spec.x_log || opts.xlog;

    apply_axis(&mut config.primary, &spec.primary, "primary")?;
    apply_axis(&mut config.secondary, &spec.secondary, "secondary")?;

    config.primary.log |= opts.ylog;
    config.secondary.log |= opts.ylog2;
    if let Some(choice) = opts.color {
        config.primary.color = choice.into();
    }
    if let Some(choice) = opts.color2 {
        config.secondary.color = choice.into();
    }
    if let Some(marker) = &opts.marker {
        config.primary.marker = marker.clone();
    }
    if let Some(marker) = &opts.marker2 {
        config.secondary.marker = marker.clone();
    }

    Ok(config)
}

fn apply_axis(style: &mut AxisStyle, spec: &AxisSpec, axis: &str) -> Result<()> {
    if let Some(marker) = &spec.marker {
        style.marker = marker.clone();
    }
    if let Some(color) = &spec.color {
        style.color = color
            .parse()
            .with_context(|| format!("Invalid colour for the {} axis", axis))?;
    }
    style.log = spec.log;
    Ok(())
}

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Colorful => ColorMode::Colorful,
            ColorChoice::Uniform => ColorMode::Uniform,
        }
    }
}
