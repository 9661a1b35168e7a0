//! `qmb info` — print the supported primitive set and their ordinals.

use console::style;
use qmb_ir::PrimitiveTag;

pub fn execute() {
    println!(
        "{} {} - a typed quantum-circuit executor over finite-dimensional C*-algebras",
        style("qmb").cyan().bold(),
        style(format!("v{}", env!("CARGO_PKG_VERSION"))).yellow()
    );
    println!();
    println!("Primitive tags (ordinal is part of the QGID contract, stable):");
    for tag in PrimitiveTag::ALL {
        println!("  {:>2}  {}", tag.ordinal(), tag.name());
    }
    println!();
    println!(
        "Repository: {}",
        style("https://github.com/hiq-lab/qmb").underlined()
    );
    println!("License:    {}", style("Apache-2.0").dim());
}
