use crate::build_info;
use crate::driver::{RunConfig, DEFAULT_OUTPUT};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Heat diffusion over a checkerboard, written out as a PGM image.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Grid width in cells.
    #[arg(
        required_unless_present = "build_info",
        value_parser = clap::value_parser!(u32).range(1..=i32::MAX as i64)
    )]
    pub nx: Option<u32>,

    /// Grid height in cells.
    #[arg(
        required_unless_present = "build_info",
        value_parser = clap::value_parser!(u32).range(1..=i32::MAX as i64)
    )]
    pub ny: Option<u32>,

    /// Number of iterations, each applies the stencil twice.
    #[arg(required_unless_present = "build_info")]
    pub niters: Option<usize>,

    /// Grayscale PGM output file.
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Also write a false color PNG preview.
    #[arg(long)]
    pub png: Option<PathBuf>,

    /// Also write the final field as CSV.
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Log per-phase detail.
    #[arg(short, long)]
    pub verbose: bool,

    /// Only log errors.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Print build information and quit.
    #[arg(long)]
    pub build_info: bool,
}

impl Args {
    pub fn cli_setup(name: &str) -> Self {
        let args = Args::parse();
        if args.build_info {
            build_info::print_report(name);
            std::process::exit(0);
        }
        setup_logging(args.verbose, args.quiet);
        args
    }

    /// `None` only when the grid arguments were skipped for `--build-info`.
    pub fn run_config(&self) -> Option<RunConfig> {
        let nx = self.nx? as usize;
        let ny = self.ny? as usize;
        let mut config = RunConfig::new(nx, ny, self.niters?)
            .with_output(self.output.clone());
        config.png = self.png.clone();
        config.csv = self.csv.clone();
        Some(config)
    }
}

/// Log to stderr. `RUST_LOG` wins over the flags when set.
pub fn setup_logging(verbose: bool, quiet: bool) {
    let default = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
