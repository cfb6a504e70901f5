use std::{fs, path::PathBuf};

use anyhow::{Context, bail};
use clap::{ArgGroup, Parser};
use numsolve_cli::{format_root_solution, logging, parse_polynomial, solution_path};
use numsolve_observers::Tracing;
use numsolve_solvers::equation::{Config, Method};
use tracing::{info, warn};

/// Find a root of a polynomial read from a `.pol` file.
///
/// Bisection is the default. Newton takes one initial point; the other
/// methods take two. The result is written next to the input with a `.sol`
/// extension as `<root> <iterations> <success|fail>`.
#[derive(Parser, Debug)]
#[command(name = "polroot", version)]
#[command(group(ArgGroup::new("method").args(["newt", "sec", "hybrid"])))]
struct Cli {
    /// Use Newton's method
    #[arg(long)]
    newt: bool,

    /// Use the secant method
    #[arg(long)]
    sec: bool,

    /// Use bisection with Newton refinement
    #[arg(long)]
    hybrid: bool,

    /// Maximum number of iterations
    #[arg(long, default_value_t = 10_000)]
    max_iter: usize,

    /// Convergence tolerance on the step or bracket
    #[arg(long, default_value_t = 1e-7)]
    eps: f64,

    /// Smallest derivative magnitude Newton will divide by
    #[arg(long, default_value_t = 1e-7)]
    delta: f64,

    /// Log every iteration at debug level
    #[arg(short, long)]
    verbose: bool,

    /// First initial point
    #[arg(value_name = "INIT", allow_negative_numbers = true)]
    init: f64,

    /// Second initial point, or the `.pol` file when only one point is given
    #[arg(value_name = "INIT2|FILE", allow_negative_numbers = true)]
    next: String,

    /// The `.pol` file, after two initial points
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,
}

impl Cli {
    /// Splits the operands into the selected method and the input path.
    fn method_and_file(&self) -> anyhow::Result<(Method, PathBuf)> {
        let (points, file) = match &self.file {
            Some(file) => {
                let init2 = self
                    .next
                    .parse::<f64>()
                    .with_context(|| format!("invalid initial point `{}`", self.next))?;
                (vec![self.init, init2], file.clone())
            }
            None => (vec![self.init], PathBuf::from(&self.next)),
        };

        let method = match (self.newt, self.sec, self.hybrid, points.as_slice()) {
            (true, _, _, &[x0]) => Method::Newton { x0 },
            (true, _, _, _) => bail!("Newton's method takes exactly one initial point"),
            (_, true, _, &[a, b]) => Method::Secant { a, b },
            (_, _, true, &[a, b]) => Method::Hybrid { a, b },
            (false, false, false, &[a, b]) => Method::Bisection { a, b },
            _ => bail!("this method takes two initial points"),
        };

        Ok((method, file))
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let (method, file) = cli.method_and_file()?;
    let config = Config::new(cli.max_iter, cli.eps, cli.delta)?;

    let text = fs::read_to_string(&file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    let polynomial =
        parse_polynomial(&text).with_context(|| format!("failed to parse {}", file.display()))?;

    let f = |x| polynomial.eval(x);
    let df = |x| polynomial.eval_derivative(x);

    if method.uses_derivative() && polynomial.degree().unwrap_or(0) == 0 {
        warn!("{} method needs a derivative, but the polynomial is constant", method.name());
    }
    info!(
        method = method.name(),
        degree = polynomial.degree(),
        max_iters = config.max_iters(),
        "solving"
    );
    let solution = if cli.verbose {
        method.solve(f, df, &config, Tracing)?
    } else {
        method.solve(f, df, &config, ())?
    };

    match solution.x {
        Some(root) if solution.is_success() => info!(
            "{} method: root = {root:.8}, iterations = {}, status = {:?}",
            method.name(),
            solution.iters,
            solution.status,
        ),
        _ => info!(
            "{} method failed after {} iterations: {:?}",
            method.name(),
            solution.iters,
            solution.status,
        ),
    }

    let out = solution_path(&file);
    fs::write(&out, format_root_solution(&solution))
        .with_context(|| format!("failed to write {}", out.display()))?;
    info!("solution written to {}", out.display());

    Ok(())
}
