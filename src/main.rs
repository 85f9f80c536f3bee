use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use seq_barcode_tools::cli::{self, Cli, Commands};

fn main() -> Result<()> {
    let args = Cli::parse();

    let filter = if args.verbose {
        EnvFilter::new("seq_barcode_tools=debug,info")
    } else {
        EnvFilter::new("seq_barcode_tools=warn")
    };

    // 日志写 stderr，stdout 留给报告输出
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    match args.command {
        Commands::BarcodeId(args) => cli::barcode::run(args)?,
        Commands::Analyze(args) => cli::analyze::run(args)?,
        Commands::Trim(args) => cli::trim::run(args)?,
    }

    Ok(())
}
