use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const DEFAULT_PRIMARY_MARKER: &str = "-.";
pub const DEFAULT_SECONDARY_MARKER: &str = "--*";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid color mode '{0}': expected 'colorful' or 'uniform'")]
pub struct ParseColorModeError(String);

/// How series of one axis group are coloured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Rainbow colormap sampled evenly across the group's series.
    #[default]
    Colorful,
    /// Every series of the group in black.
    Uniform,
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorMode::Colorful => write!(f, "colorful"),
            ColorMode::Uniform => write!(f, "uniform"),
        }
    }
}

impl FromStr for ColorMode {
    type Err = ParseColorModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "colorful" | "colourful" | "rainbow" => Ok(ColorMode::Colorful),
            "uniform" | "black" | "bland" => Ok(ColorMode::Uniform),
            _ => Err(ParseColorModeError(s.to_string())),
        }
    }
}

/// Presentation of one y-axis group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxisStyle {
    /// Matplotlib format string, e.g. `-.` or `--*`.
    pub marker: String,
    pub color: ColorMode,
    pub log: bool,
}

impl AxisStyle {
    pub fn with_marker(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
            color: ColorMode::default(),
            log: false,
        }
    }
}

/// Caller-chosen presentation of a plot. Never alters the data itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    pub x_log: bool,
    pub primary: AxisStyle,
    pub secondary: AxisStyle,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            x_log: false,
            primary: AxisStyle::with_marker(DEFAULT_PRIMARY_MARKER),
            secondary: AxisStyle::with_marker(DEFAULT_SECONDARY_MARKER),
        }
    }
}
