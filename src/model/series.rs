use std::fmt;

/// Numeric values index-aligned with an x series.
pub type Series = Vec<f64>;

/// The two independent y-axis groups of a plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Primary,
    Secondary,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Primary => write!(f, "primary"),
            Axis::Secondary => write!(f, "secondary"),
        }
    }
}
