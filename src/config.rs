use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::data::curve::{CurveOptions, QuantileOrder};
use crate::data::loader::LoadOptions;
use crate::render::png::{DEFAULT_HEIGHT, DEFAULT_WIDTH};

// ---------------------------------------------------------------------------
// Command line
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Plot an exponential PDF shaded between the quantiles listed in a CSV file"
)]
pub struct Cli {
    /// File whose first row is the rate and whose remaining rows are quantiles.
    #[arg(default_value = "bins.csv", value_hint = clap::ValueHint::FilePath)]
    pub input: PathBuf,

    /// Fail on rows whose first field is not a number instead of skipping them.
    #[arg(long)]
    pub strict_rows: bool,

    /// How to treat quantiles that are not in ascending order.
    #[arg(long, value_enum, default_value_t = OrderArg::AsGiven)]
    pub order: OrderArg,

    /// Save the chart as PNG instead of opening a window.
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// PNG width in pixels.
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: u32,

    /// PNG height in pixels.
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: u32,

    /// Print the computed curve and segments as JSON.
    #[arg(long)]
    pub summary: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OrderArg {
    /// Shade in file order.
    AsGiven,
    /// Sort ascending first.
    Sorted,
    /// Reject out-of-order quantiles.
    Strict,
}

impl From<OrderArg> for QuantileOrder {
    fn from(arg: OrderArg) -> Self {
        match arg {
            OrderArg::AsGiven => QuantileOrder::AsGiven,
            OrderArg::Sorted => QuantileOrder::Sorted,
            OrderArg::Strict => QuantileOrder::Strict,
        }
    }
}

// ---------------------------------------------------------------------------
// Settings – what the pipeline and the output stage consume
// ---------------------------------------------------------------------------

/// Where the finished figure goes.
#[derive(Debug, Clone, PartialEq)]
pub enum Output {
    /// Interactive window; blocks until it is closed.
    Window,
    Png {
        path: PathBuf,
        width: u32,
        height: u32,
    },
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PipelineOptions {
    pub load: LoadOptions,
    pub curve: CurveOptions,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub input: PathBuf,
    pub pipeline: PipelineOptions,
    pub output: Output,
    pub summary: bool,
}

impl From<Cli> for Settings {
    fn from(cli: Cli) -> Self {
        let output = match cli.output {
            Some(path) => Output::Png {
                path,
                width: cli.width,
                height: cli.height,
            },
            None => Output::Window,
        };
        Settings {
            input: cli.input,
            pipeline: PipelineOptions {
                load: LoadOptions {
                    skip_invalid_rows: !cli.strict_rows,
                },
                curve: CurveOptions {
                    order: cli.order.into(),
                },
            },
            output,
            summary: cli.summary,
        }
    }
}
