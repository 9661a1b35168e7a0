//! `qmb run` — load a container and execute its entrypoint.

use std::path::Path;

use anyhow::{Context, Result};
use console::style;
use qmb_algebra::Matrix;
use qmb_container::Runner;

use super::matrix_io::{print_matrix, read_matrix_json};

pub fn execute(file: &Path, input: Option<&Path>) -> Result<()> {
    let bytes =
        std::fs::read(file).with_context(|| format!("reading container file {}", file.display()))?;
    let runner = Runner::load(&bytes).with_context(|| format!("loading {}", file.display()))?;

    println!(
        "{} {} ({})",
        style("→").cyan().bold(),
        style(runner.name()).green(),
        runner.version()
    );

    let input_matrix = match input {
        Some(path) => read_matrix_json(path)?,
        None => {
            let dim = runner.entrypoint_circuit().domain.dimension() as usize;
            Matrix::identity(dim)
        }
    };

    let output = runner.run(&input_matrix).context("executing entrypoint")?;
    print_matrix(&output);
    Ok(())
}
