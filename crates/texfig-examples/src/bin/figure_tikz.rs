// File: crates/texfig-examples/src/bin/figure_tikz.rs
// Summary: Writes figure.tikz; optional TOML config path as the first argument.

use anyhow::Result;
use texfig_core::export::BackendKind;

fn main() -> Result<()> {
    let path = texfig_examples::run(BackendKind::Tikz)?;
    println!("Wrote {}", path.display());
    Ok(())
}
