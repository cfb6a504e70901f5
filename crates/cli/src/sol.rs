use std::path::{Path, PathBuf};

use ndarray::Array1;
use numsolve_solvers::equation::Solution;

/// Returns the output path for an input file: same stem, `.sol` extension.
#[must_use]
pub fn solution_path(input: &Path) -> PathBuf {
    input.with_extension("sol")
}

/// Formats a linear solution as one line of space-separated values.
#[must_use]
pub fn format_linear_solution(x: &Array1<f64>) -> String {
    let values: Vec<String> = x.iter().map(f64::to_string).collect();
    format!("{}\n", values.join(" "))
}

/// Formats a root-finding result as `<root> <iterations> <outcome>`.
///
/// A missing root is written as `None`.
#[must_use]
pub fn format_root_solution(solution: &Solution) -> String {
    let root = solution
        .x
        .map_or_else(|| "None".to_owned(), |x| x.to_string());
    format!("{root} {} {}\n", solution.iters, solution.outcome())
}

#[cfg(test)]
mod tests {
    use super::*;

    use ndarray::array;
    use numsolve_solvers::equation::{Config, bisection, newton};

    #[test]
    fn replaces_the_extension() {
        assert_eq!(
            solution_path(Path::new("data/sys1.lin")),
            PathBuf::from("data/sys1.sol")
        );
        assert_eq!(solution_path(Path::new("fun")), PathBuf::from("fun.sol"));
    }

    #[test]
    fn linear_solution_line() {
        assert_eq!(format_linear_solution(&array![2.0, 3.0, -1.5]), "2 3 -1.5\n");
    }

    #[test]
    fn root_solution_lines() {
        let config = Config::default();

        let found = newton::solve_unobserved(|x| x - 0.5, |_| 1.0, 0.0, &config).expect("finite");
        assert_eq!(format_root_solution(&found), "0.5 2 success\n");

        let missing = bisection::solve_unobserved(|x| x * x + 1.0, [0.0, 1.0], &config)
            .expect("finite");
        assert_eq!(format_root_solution(&missing), "None 0 fail\n");
    }
}
