//! 序列指标的控制台文本报告，长链可截断显示。

use std::fmt::Write;

use crate::complement::NucleicAcid;
use crate::error::SeqError;
use crate::metrics::SequenceMetrics;

pub const DEFAULT_DISPLAY_WIDTH: usize = 80;
const TRUNCATION_MARKER: &str = "...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayOptions {
    pub truncate: bool,
    pub width: usize,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        DisplayOptions {
            truncate: false,
            width: DEFAULT_DISPLAY_WIDTH,
        }
    }
}

impl DisplayOptions {
    fn clip<'a>(&self, strand: &'a [u8]) -> (&'a [u8], &'static str) {
        if self.truncate && strand.len() > self.width {
            (&strand[..self.width], TRUNCATION_MARKER)
        } else {
            (strand, "")
        }
    }
}

/// Human-readable metrics report.
pub fn render(metrics: &SequenceMetrics, opts: DisplayOptions) -> Result<String, SeqError> {
    let dna = metrics.reverse_complement(NucleicAcid::Dna)?;
    let rna = metrics.reverse_complement(NucleicAcid::Rna)?;
    let gc = metrics.gc_content()?;
    let mut out = String::new();
    write_report(&mut out, metrics, opts, &dna, &rna, gc)?;
    Ok(out)
}

fn write_report(
    out: &mut String,
    metrics: &SequenceMetrics,
    opts: DisplayOptions,
    dna: &[u8],
    rna: &[u8],
    gc: f64,
) -> std::fmt::Result {
    let counts = metrics.base_counts();
    write_strand(out, "Sequence", "5`", "3`", opts.clip(metrics.sequence()))?;
    write_strand(out, "Reverse complement", "3`", "5`", opts.clip(dna))?;
    write_strand(out, "RNA reverse complement", "3`", "5`", opts.clip(rna))?;
    writeln!(out, "\nLength: {} bp", metrics.length())?;
    writeln!(
        out,
        "\nBase counts: A: {}, T: {}, G: {}, C: {}",
        counts.a, counts.t, counts.g, counts.c
    )?;
    writeln!(out, "\nGC content: {gc:.3} %")?;
    writeln!(out, "\nMelting temperature (Tm): {:.3} C", metrics.melting_temperature())?;
    writeln!(out, "\nMolar mass: {:.3} g/mol", metrics.molar_mass())
}

fn write_strand(
    out: &mut String,
    label: &str,
    left: &str,
    right: &str,
    (strand, marker): (&[u8], &str),
) -> std::fmt::Result {
    writeln!(
        out,
        "\n{label}:\n    {left}-{}{marker}-{right}",
        String::from_utf8_lossy(strand)
    )
}
