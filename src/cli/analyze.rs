//! `analyze` 子命令。

use anyhow::Result;
use std::path::Path;
use tracing::debug;

use crate::io::{load_sequence, InputFormat};
use crate::metrics::SequenceMetrics;
use crate::report::{render, DisplayOptions, DEFAULT_DISPLAY_WIDTH};

#[derive(clap::Args)]
pub struct AnalyzeArgs {
    /// Sequence file (plain, gzip or zip) or a literal DNA sequence
    pub sequence: String,

    /// Truncate printing of long strands to reduce console output
    #[arg(long)]
    pub truncate: bool,

    /// Characters shown per strand when truncating
    #[arg(long, default_value_t = DEFAULT_DISPLAY_WIDTH)]
    pub width: usize,

    /// Input container format (detected from the file content if omitted)
    #[arg(long, value_enum)]
    pub format: Option<InputFormat>,

    /// Leave non-ACGT characters out of the length instead of failing
    #[arg(long)]
    pub lenient: bool,
}

pub fn run(args: AnalyzeArgs) -> Result<()> {
    let path = Path::new(&args.sequence);
    let text = if path.is_file() {
        let format = match args.format {
            Some(format) => format,
            None => InputFormat::detect(path)?,
        };
        debug!(path = %path.display(), ?format, "loading sequence file");
        load_sequence(path, format)?
    } else {
        args.sequence.clone()
    };

    // 文件末尾换行不算碱基
    let metrics = SequenceMetrics::new(text.trim(), super::validation(args.lenient))?;
    let opts = DisplayOptions {
        truncate: args.truncate,
        width: args.width,
    };
    print!("{}", render(&metrics, opts)?);
    Ok(())
}
