use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "tplot",
    about = "Thermochemistry result extraction and plot reproduction",
    version,
    author,
    before_help = crate::display::banner_for_help(),
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the elements declared by a thermodynamic data file (.dat)
    #[command(visible_alias = "e")]
    Elements(ElementsArgs),

    /// Extract series from calculation results and export a plot script
    #[command(visible_alias = "p")]
    Plot(PlotArgs),

    /// Write a solver input script or calculation list
    #[command(visible_alias = "i")]
    Input(InputArgs),
}

impl Command {
    pub fn quiet(&self) -> bool {
        match self {
            Command::Elements(args) => args.io.quiet,
            Command::Plot(args) => args.io.quiet,
            Command::Input(args) => args.io.quiet,
        }
    }
}

/// I/O options shared by all commands.
#[derive(Args)]
pub struct IoOptions {
    /// Output file (stdout if omitted)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Suppress banner, progress, and summary tables (for scripting)
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Args)]
pub struct ElementsArgs {
    /// Data file (stdin if omitted)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    #[command(flatten)]
    pub io: IoOptions,
}

#[derive(Args)]
pub struct PlotArgs {
    /// Calculation results in JSON (stdin if omitted)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Plot request (TOML)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub io: IoOptions,

    #[command(flatten)]
    pub series: SeriesOptions,

    #[command(flatten)]
    pub render: RenderOptions,
}

/// Series given on the command line are appended to those of the request.
#[derive(Args)]
#[command(next_help_heading = "Series")]
pub struct SeriesOptions {
    /// Top-level key for the x axis (temperature, pressure, iteration, ...)
    #[arg(long = "x", value_name = "KEY")]
    pub x: Option<String>,

    /// Key path for a primary-axis series, keys separated by '/', repeatable
    #[arg(long = "y", value_name = "PATH", action = clap::ArgAction::Append)]
    pub y: Vec<String>,

    /// Key path for a secondary-axis series, repeatable
    #[arg(long = "y2", value_name = "PATH", action = clap::ArgAction::Append)]
    pub y2: Vec<String>,

    /// Override the x axis label
    #[arg(long = "xlabel", value_name = "TEXT")]
    pub x_label: Option<String>,

    /// Override the primary y axis label
    #[arg(long = "ylabel", value_name = "TEXT")]
    pub y_label: Option<String>,

    /// Override the secondary y axis label
    #[arg(long = "y2label", value_name = "TEXT")]
    pub y2_label: Option<String>,
}

/// Rendering flags; each one overrides the request when given.
#[derive(Args)]
#[command(next_help_heading = "Rendering")]
pub struct RenderOptions {
    /// Logarithmic x axis
    #[arg(long)]
    pub xlog: bool,

    /// Logarithmic primary y axis
    #[arg(long)]
    pub ylog: bool,

    /// Logarithmic secondary y axis
    #[arg(long)]
    pub ylog2: bool,

    /// Colour mode for primary series
    #[arg(long, value_name = "MODE")]
    pub color: Option<ColorChoice>,

    /// Colour mode for secondary series
    #[arg(long, value_name = "MODE")]
    pub color2: Option<ColorChoice>,

    /// matplotlib format string for primary series
    #[arg(long, value_name = "FMT", allow_hyphen_values = true)]
    pub marker: Option<String>,

    /// matplotlib format string for secondary series
    #[arg(long, value_name = "FMT", allow_hyphen_values = true)]
    pub marker2: Option<String>,
}

#[derive(Args)]
pub struct InputArgs {
    /// Solver input request (TOML)
    #[arg(short, long, value_name = "FILE")]
    pub config: PathBuf,

    /// Input flavour (default: from the request, then the output extension)
    #[arg(long, value_name = "MODE")]
    pub mode: Option<InputMode>,

    #[command(flatten)]
    pub io: IoOptions,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Spread series over the rainbow colormap
    #[value(alias = "rainbow")]
    Colorful,
    /// Draw every series in black
    #[value(alias = "black")]
    Uniform,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum InputMode {
    /// Temperature/pressure sweep over one composition (.ti)
    Script,
    /// Explicit list of state points (.tl)
    List,
}

pub fn parse() -> Cli {
    Cli::parse()
}
