//! 命令行接口。
//!
//! ```text
//! # read 1 先反向互补，read 2 原样搜索
//! seq-barcode-tools barcode-id r1.txt r2.txt out.csv --n-bc 20
//!
//! # 序列文件或直接给出的序列的指标
//! seq-barcode-tools analyze seq.txt.gz --truncate
//! seq-barcode-tools analyze ATGCATGC
//!
//! # 两个模式之间的文本
//! seq-barcode-tools trim notes.txt START END
//! ```

use clap::{Parser, Subcommand};

use crate::complement::BaseValidation;

pub mod analyze;
pub mod barcode;
pub mod trim;

#[derive(Parser)]
#[command(name = "seq-barcode-tools")]
#[command(version)]
#[command(about = "Extract anchored barcodes/IDs from reads and analyze DNA sequences")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output showing progress
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compile IDs and barcodes from read 1 and read 2 rows
    BarcodeId(barcode::BarcodeArgs),

    /// Print base counts, GC content, Tm and molar mass of a sequence
    Analyze(analyze::AnalyzeArgs),

    /// Print the text found between two patterns
    Trim(trim::TrimArgs),
}

pub(crate) fn validation(lenient: bool) -> BaseValidation {
    if lenient {
        BaseValidation::Lenient
    } else {
        BaseValidation::Strict
    }
}
