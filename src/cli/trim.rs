//! `trim` 子命令。

use anyhow::{Context, Result};
use std::path::PathBuf;

#[derive(clap::Args)]
pub struct TrimArgs {
    /// Input text file
    pub file: PathBuf,

    /// Pattern to start grabbing text after
    pub start: String,

    /// Pattern to finish grabbing text before
    pub end: String,
}

pub fn run(args: TrimArgs) -> Result<()> {
    let text = std::fs::read_to_string(&args.file)
        .with_context(|| format!("reading {}", args.file.display()))?;
    for span in crate::trim::between(&text, &args.start, &args.end)? {
        println!("{span}");
    }
    Ok(())
}
