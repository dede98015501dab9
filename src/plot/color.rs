use std::f64::consts::PI;
use std::fmt;

/// Entries in matplotlib's default colormap lookup table.
const LUT_SIZE: usize = 256;

/// An sRGB colour with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    pub fn from_unit(r: f64, g: f64, b: f64) -> Self {
        let channel = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self {
            r: channel(r),
            g: channel(g),
            b: channel(b),
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Samples matplotlib's `rainbow` colormap at `t` in `[0, 1]`.
///
/// Follows the colormap's 256-entry lookup table, so the result matches what
/// `plt.cm.rainbow(t)` would hand to a plot call.
pub fn rainbow(t: f64) -> Rgb {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    let idx = ((t * LUT_SIZE as f64) as usize).min(LUT_SIZE - 1);
    let x = idx as f64 / (LUT_SIZE - 1) as f64;
    Rgb::from_unit(
        (2.0 * x - 0.5).abs(),
        (x * PI).sin(),
        (x * PI / 2.0).cos(),
    )
}

/// `n` colours spread evenly over the rainbow, first at 0 and last at 1.
pub fn rainbow_cycle(n: usize) -> Vec<Rgb> {
    match n {
        0 => Vec::new(),
        1 => vec![rainbow(0.0)],
        _ => (0..n)
            .map(|i| rainbow(i as f64 / (n - 1) as f64))
            .collect(),
    }
}
