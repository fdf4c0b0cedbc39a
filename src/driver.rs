//! Runs one complete stencil computation: allocate, initialize,
//! evolve, report the runtime, then write the result.

use crate::domain::*;
use crate::error::{Error, Result};
use crate::init::{self, Checkerboard};
use crate::output;
use crate::solver;
use crate::stencil::{standard_stencils, FivePoint};
use crate::util::*;
use std::path::PathBuf;
use std::time::{Duration, Instant};

pub const DEFAULT_OUTPUT: &str = "stencil.pgm";

/// Everything a run needs, passed explicitly to `run`.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub nx: usize,
    pub ny: usize,
    /// Each iteration applies the stencil twice.
    pub iterations: usize,
    /// Grayscale PGM destination.
    pub output: PathBuf,
    /// Optional false color PNG preview.
    pub png: Option<PathBuf>,
    /// Optional CSV dump of the final field.
    pub csv: Option<PathBuf>,
    pub pattern: Checkerboard,
    pub stencil: FivePoint,
}

impl RunConfig {
    pub fn new(nx: usize, ny: usize, iterations: usize) -> Self {
        RunConfig {
            nx,
            ny,
            iterations,
            output: PathBuf::from(DEFAULT_OUTPUT),
            png: None,
            csv: None,
            pattern: Checkerboard::default(),
            stencil: standard_stencils::heat_5pt(),
        }
    }

    pub fn with_output<P: Into<PathBuf>>(mut self, output: P) -> Self {
        self.output = output.into();
        self
    }

    pub fn grid_bounds(&self) -> Result<AABB<2>> {
        let (nx, ny) = (self.nx, self.ny);
        if nx == 0 || ny == 0 {
            return Err(Error::EmptyGrid { nx, ny });
        }
        let too_large = |_| Error::GridTooLarge { nx, ny };
        let width = i32::try_from(nx).map_err(too_large)?;
        let height = i32::try_from(ny).map_err(too_large)?;
        Ok(AABB::from_exclusive_bounds(vector![width, height]))
    }
}

/// Summary of a finished run.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RunReport {
    /// Wall clock time of the iteration loop only.
    pub runtime: Duration,
    pub total_heat: f64,
    pub energy: f64,
    pub maximum: f64,
}

pub fn print_runtime(runtime: Duration) {
    println!("------------------------------------");
    println!(" runtime: {:.6} s", runtime.as_secs_f64());
    println!("------------------------------------");
}

fn log_field<DomainType: DomainView>(stage: &str, domain: &DomainType) {
    tracing::info!(
        total_heat = domain.sum(),
        energy = domain.energy(),
        maximum = domain.max_value(),
        "{stage} field"
    );
}

pub fn run(config: &RunConfig) -> Result<RunReport> {
    let aabb = config.grid_bounds()?;
    tracing::info!(
        nx = config.nx,
        ny = config.ny,
        iterations = config.iterations,
        "starting run"
    );

    let mut pair = DomainPair::new(aabb)?;
    init::checkerboard(&mut pair, &config.pattern);
    log_field("initial", pair.current());

    let now = Instant::now();
    solver::evolve(&config.stencil, &mut pair, config.iterations);
    let runtime = now.elapsed();
    print_runtime(runtime);

    let result = pair.current();
    log_field("final", result);
    output::write_pgm(&config.output, result)?;
    if let Some(ref path) = config.png {
        output::write_png(path, result)?;
    }
    if let Some(ref path) = config.csv {
        output::write_csv(path, result)?;
    }

    Ok(RunReport {
        runtime,
        total_heat: result.sum(),
        energy: result.energy(),
        maximum: result.max_value(),
    })
}
