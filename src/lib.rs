// lib.rs - 库函数
//
// Anchor-relative barcode/ID extraction from sequencing reads, plus
// composition and chemistry metrics for a single DNA sequence.

pub mod anchor;
pub mod batch;
pub mod cli;
pub mod complement;
pub mod error;
pub mod io;
pub mod metrics;
pub mod report;
pub mod trim;

pub use anchor::{locate_after, locate_before, AnchorConfig, AnchorSide, WindowOverflow};
pub use batch::{BatchCompiler, ExtractionResult, ExtractionTable};
pub use complement::{complement_base, reverse_complement, BaseValidation, NucleicAcid};
pub use error::SeqError;
pub use metrics::{BaseCounts, SequenceMetrics};
