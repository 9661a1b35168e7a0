//! `qmb inspect` — print header fields without executing anything.

use std::path::Path;

use anyhow::{Context, Result};
use console::style;
use qmb_container::Runner;

pub fn execute(file: &Path) -> Result<()> {
    let bytes =
        std::fs::read(file).with_context(|| format!("reading container file {}", file.display()))?;
    let runner = Runner::load(&bytes).with_context(|| format!("loading {}", file.display()))?;

    println!("{}        {}", style("name:").bold(), runner.name());
    println!("{}     {}", style("version:").bold(), runner.version());
    println!("{}   {}", style("entrypoint:").bold(), runner.entrypoint());
    println!(
        "{} {} byte(s)",
        style("store payload:").bold(),
        runner.store_payload_len()
    );
    println!(
        "{}     {} circuit(s), {} value(s)",
        style("store:").bold(),
        runner.circuit_count(),
        runner.value_count()
    );
    Ok(())
}
