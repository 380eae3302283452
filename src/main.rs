//! pt: inspect the `.pt.yaml` project file
//!
//! Finds the project file governing the current directory and reports the
//! settings it holds.

use anyhow::Result;

mod cli;

fn main() -> Result<()> {
    cli::run()
}
