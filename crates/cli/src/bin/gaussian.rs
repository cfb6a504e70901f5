use std::{fs, path::PathBuf};

use anyhow::Context;
use clap::Parser;
use numsolve_cli::{format_linear_solution, logging, parse_linear_system, solution_path};
use numsolve_solvers::linear::Strategy;
use tracing::{debug, info};

/// Solve a square linear system read from a `.lin` file.
///
/// The solution is written next to the input with a `.sol` extension.
#[derive(Parser, Debug)]
#[command(name = "gaussian", version)]
struct Cli {
    /// Use Gaussian elimination with scaled partial pivoting
    #[arg(long)]
    spp: bool,

    /// Log each stage at debug level
    #[arg(short, long)]
    verbose: bool,

    /// Input file in `.lin` format
    file: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let strategy = if cli.spp {
        Strategy::ScaledPartialPivoting
    } else {
        Strategy::Naive
    };

    let text = fs::read_to_string(&cli.file)
        .with_context(|| format!("failed to read {}", cli.file.display()))?;
    let system = parse_linear_system(&text)
        .with_context(|| format!("failed to parse {}", cli.file.display()))?;

    info!(unknowns = system.dim(), "solving with {}", strategy.name());
    let x = strategy.solve(system);
    debug!(solution = ?x.to_vec(), "solved");

    let out = solution_path(&cli.file);
    fs::write(&out, format_linear_solution(&x))
        .with_context(|| format!("failed to write {}", out.display()))?;
    info!("solution written to {}", out.display());

    Ok(())
}
