//! asciiplot - draw an ASCII scatter plot from coordinates on stdin.
//!
//! ```text
//! $ printf '1 10\n-2 -2\n5.1 -3\n' | asciiplot -w 20 -l 5
//! ```

#![cfg_attr(test, allow(clippy::unwrap_used))]

use std::io::{self, BufWriter};
use std::process::ExitCode;

use anyhow::Result;
use clap::{ArgAction, Parser};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use ascii_plot::pipeline::{self, PlotConfig};
use ascii_plot::theme::{BorderStyle, Theme};

/// Largest accepted `-w`/`-l` value.
const MAX_DIMENSION: u16 = 10_000;

const AFTER_HELP: &str = "\
Coordinates should be one pair per line, separated by white space.
Example:
\t1 10
\t-2 -2
\t5.1 -3";

/// Draw an ASCII graph based on the coordinates from stdin.
#[derive(Parser, Debug)]
#[command(name = "asciiplot")]
#[command(version)]
#[command(about = "Draw an ASCII graph based on the coordinates from stdin.", long_about = None)]
#[command(after_help = AFTER_HELP)]
struct Cli {
    /// Width of graph in characters (at most 10000)
    #[arg(
        short = 'w',
        long = "width",
        default_value_t = 80,
        value_parser = clap::value_parser!(u16).range(0..=i64::from(MAX_DIMENSION))
    )]
    width: u16,

    /// Height of graph in lines (at most 10000)
    #[arg(
        short = 'l',
        long = "lines",
        default_value_t = 24,
        value_parser = clap::value_parser!(u16).range(0..=i64::from(MAX_DIMENSION))
    )]
    lines: u16,

    /// Border style: heavy, light, double, rounded or ascii
    #[arg(long, default_value_t = BorderStyle::Heavy)]
    border: BorderStyle,

    /// Character for empty cells
    #[arg(long, default_value_t = '.')]
    empty: char,

    /// Character for plotted cells
    #[arg(long, default_value_t = '#')]
    marker: char,

    /// Log to stderr (-v debug, -vv trace); RUST_LOG is used otherwise
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn config(&self) -> PlotConfig {
        let theme = Theme::default()
            .with_empty(self.empty)
            .with_plotted(self.marker)
            .with_border(self.border.border_set());

        PlotConfig { width: usize::from(self.width), height: usize::from(self.lines), theme }
    }
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt().with_writer(io::stderr).with_env_filter(filter).init();
}

fn run(cli: &Cli) -> Result<()> {
    let config = cli.config();
    debug!(?config, "starting");

    let stdin = io::stdin().lock();
    let mut stdout = BufWriter::new(io::stdout().lock());
    pipeline::run(stdin, &mut stdout, &config)?;

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
