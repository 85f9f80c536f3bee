//! `barcode-id` 子命令。

use anyhow::{Context, Result};
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use tracing::{debug, info};

use crate::anchor::{
    AnchorConfig, WindowOverflow, DEFAULT_BARCODE_PATTERN, DEFAULT_BARCODE_SKIP,
    DEFAULT_BARCODE_WINDOW, DEFAULT_ID_PATTERN, DEFAULT_ID_WINDOW,
};
use crate::batch::BatchCompiler;
use crate::io::{read_rows_from_path, write_table};

#[derive(clap::Args)]
pub struct BarcodeArgs {
    /// Read 1 rows, reverse complemented before searching
    pub r1_input: PathBuf,

    /// Read 2 rows
    pub r2_input: PathBuf,

    /// Output table (seq,id,barcode)
    pub output: PathBuf,

    /// Pattern that follows the ID
    #[arg(long, default_value = DEFAULT_ID_PATTERN)]
    pub id_pattern: String,

    /// Pattern the barcode window is measured from
    #[arg(long, default_value = DEFAULT_BARCODE_PATTERN)]
    pub bc_pattern: String,

    /// Number of bp to return before the ID pattern
    #[arg(long, default_value_t = DEFAULT_ID_WINDOW)]
    pub n_id: usize,

    /// Number of bp to trim the barcode to
    #[arg(long, default_value_t = DEFAULT_BARCODE_WINDOW)]
    pub n_bc: usize,

    /// Number of bp between the barcode pattern start and the barcode
    #[arg(long, default_value_t = DEFAULT_BARCODE_SKIP)]
    pub bc_skip: usize,

    /// ID window behavior when the pattern is too close to the read start
    #[arg(long, value_enum, default_value_t = WindowOverflow::Clamp)]
    pub overflow: WindowOverflow,

    /// Complement unknown bases to N instead of failing
    #[arg(long)]
    pub lenient: bool,
}

pub fn run(args: BarcodeArgs) -> Result<()> {
    let id = AnchorConfig::before(&args.id_pattern, args.n_id)?.with_overflow(args.overflow);
    let barcode = AnchorConfig::after(&args.bc_pattern, args.bc_skip, args.n_bc)?;
    let compiler = BatchCompiler::new(id, barcode).validation(super::validation(args.lenient));
    debug!(
        id_pattern = compiler.id.pattern(),
        n_id = compiler.id.window(),
        bc_pattern = compiler.barcode.pattern(),
        n_bc = compiler.barcode.window(),
        "anchors"
    );

    let r1_rows = read_rows_from_path(&args.r1_input)?;
    let mut table = compiler
        .clone()
        .reverse_complement(true)
        .compile(&r1_rows)
        .with_context(|| format!("compiling {}", args.r1_input.display()))?;

    let r2_rows = read_rows_from_path(&args.r2_input)?;
    let r2_table = compiler
        .compile(&r2_rows)
        .with_context(|| format!("compiling {}", args.r2_input.display()))?;
    table.append(r2_table);

    let file = File::create(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    write_table(BufWriter::with_capacity(4 << 20, file), &table)
        .with_context(|| format!("writing {}", args.output.display()))?;

    let summary = table.summary();
    info!(
        rows = summary.rows,
        with_id = summary.with_id,
        with_barcode = summary.with_barcode,
        output = %args.output.display(),
        "wrote barcode table"
    );
    Ok(())
}
