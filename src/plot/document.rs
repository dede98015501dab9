use super::color::{Rgb, rainbow_cycle};
use super::config::{AxisStyle, ColorMode, RenderConfig};
use super::error::Error;
use crate::model::series::{Axis, Series};

/// Values, label, and legend entries for one y-axis group.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AxisData {
    pub series: Vec<Series>,
    pub label: String,
    pub legend: Vec<String>,
}

impl AxisData {
    pub fn new(series: Vec<Series>, label: impl Into<String>, legend: Vec<String>) -> Self {
        Self {
            series,
            label: label.into(),
            legend,
        }
    }
}

/// One drawn line with every presentation decision already made.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotSeries {
    pub values: Series,
    pub legend: String,
    pub color: Rgb,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AxisGroup {
    pub label: String,
    pub marker: String,
    pub log: bool,
    pub series: Vec<PlotSeries>,
}

/// A complete, data-carrying description of a plot.
///
/// Holds literal values rather than references into a result store, so a
/// rendering of it stays reproducible after the source data is gone. The
/// secondary group exists only when at least one secondary series was given.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotDocument {
    pub x: Series,
    pub x_label: String,
    pub x_log: bool,
    pub primary: AxisGroup,
    pub secondary: Option<AxisGroup>,
}

impl PlotDocument {
    pub fn new(
        x: Series,
        x_label: impl Into<String>,
        primary: AxisData,
        secondary: Option<AxisData>,
        config: &RenderConfig,
    ) -> Result<Self, Error> {
        let primary = build_group(primary, &config.primary, Axis::Primary)?;
        let secondary = secondary
            .filter(|data| !data.series.is_empty())
            .map(|data| build_group(data, &config.secondary, Axis::Secondary))
            .transpose()?;

        Ok(Self {
            x,
            x_label: x_label.into(),
            x_log: config.x_log,
            primary,
            secondary,
        })
    }

    pub fn has_secondary(&self) -> bool {
        self.secondary.is_some()
    }

    pub fn series_count(&self) -> usize {
        self.primary.series.len() + self.secondary.as_ref().map_or(0, |g| g.series.len())
    }
}

fn build_group(data: AxisData, style: &AxisStyle, axis: Axis) -> Result<AxisGroup, Error> {
    if data.series.len() != data.legend.len() {
        return Err(Error::LegendMismatch {
            axis,
            series: data.series.len(),
            legends: data.legend.len(),
        });
    }

    let colors = match style.color {
        ColorMode::Colorful => rainbow_cycle(data.series.len()),
        ColorMode::Uniform => vec![Rgb::BLACK; data.series.len()],
    };

    let series = data
        .series
        .into_iter()
        .zip(data.legend)
        .zip(colors)
        .map(|((values, legend), color)| PlotSeries {
            values,
            legend,
            color,
        })
        .collect();

    Ok(AxisGroup {
        label: data.label,
        marker: style.marker.clone(),
        log: style.log,
        series,
    })
}
