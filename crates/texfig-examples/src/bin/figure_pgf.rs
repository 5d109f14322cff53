// File: crates/texfig-examples/src/bin/figure_pgf.rs
// Summary: Writes figure.pgf; optional TOML config path as the first argument.

use anyhow::Result;
use texfig_core::export::BackendKind;

fn main() -> Result<()> {
    let path = texfig_examples::run(BackendKind::Pgf)?;
    println!("Wrote {}", path.display());
    Ok(())
}
