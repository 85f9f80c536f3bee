//! 单条 DNA 序列的碱基组成、GC 含量、Tm 与分子量。

use crate::complement::{reverse_complement, BaseValidation, NucleicAcid};
use crate::error::SeqError;

/// Wallace rule applies below this many recognized bases.
const WALLACE_MAX_LEN: usize = 14;

const MASS_A: f64 = 313.21;
const MASS_T: f64 = 304.2;
const MASS_C: f64 = 289.18;
const MASS_G: f64 = 329.21;
const MASS_ADJUST: f64 = 61.96;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BaseCounts {
    pub a: usize,
    pub t: usize,
    pub g: usize,
    pub c: usize,
}

impl BaseCounts {
    pub fn from_sequence(seq: &[u8]) -> Self {
        let mut counts = BaseCounts::default();
        for b in seq {
            match b.to_ascii_uppercase() {
                b'A' => counts.a += 1,
                b'T' => counts.t += 1,
                b'G' => counts.g += 1,
                b'C' => counts.c += 1,
                _ => {}
            }
        }
        counts
    }

    #[inline(always)]
    pub fn total(&self) -> usize {
        self.a + self.t + self.g + self.c
    }

    #[inline(always)]
    pub fn gc(&self) -> usize {
        self.g + self.c
    }

    #[inline(always)]
    pub fn at(&self) -> usize {
        self.a + self.t
    }
}

/// 保留 3 位小数：按 x 的精确二进制值舍入，恰好一半时取偶。
fn round3(x: f64) -> f64 {
    format!("{x:.3}").parse().unwrap_or(x)
}

/// Metrics of one sequence, computed once at construction.
#[derive(Debug, Clone)]
pub struct SequenceMetrics {
    sequence: Vec<u8>,
    counts: BaseCounts,
    validation: BaseValidation,
}

impl SequenceMetrics {
    /// Upper-cases and counts `seq`.
    ///
    /// Under [`BaseValidation::Strict`] anything other than A/T/G/C fails with
    /// [`SeqError::UnknownBase`]; under `Lenient` such characters are kept in
    /// the sequence but left out of [`length`](Self::length).
    pub fn new(seq: impl AsRef<[u8]>, validation: BaseValidation) -> Result<Self, SeqError> {
        let sequence = seq.as_ref().to_ascii_uppercase();
        if validation == BaseValidation::Strict {
            if let Some(position) = sequence
                .iter()
                .position(|b| !matches!(b, b'A' | b'T' | b'G' | b'C'))
            {
                return Err(SeqError::UnknownBase {
                    base: seq.as_ref()[position],
                    position,
                });
            }
        }
        let counts = BaseCounts::from_sequence(&sequence);
        Ok(SequenceMetrics {
            sequence,
            counts,
            validation,
        })
    }

    pub fn sequence(&self) -> &[u8] {
        &self.sequence
    }

    pub fn base_counts(&self) -> BaseCounts {
        self.counts
    }

    /// Recognized length, A + T + G + C.
    pub fn length(&self) -> usize {
        self.counts.total()
    }

    pub fn raw_length(&self) -> usize {
        self.sequence.len()
    }

    /// Percent G + C, rounded to 3 decimals.
    pub fn gc_content(&self) -> Result<f64, SeqError> {
        let len = self.length();
        if len == 0 {
            return Err(SeqError::EmptySequence);
        }
        Ok(round3(self.counts.gc() as f64 / len as f64 * 100.0))
    }

    /// Wallace rule below 14 bases, GC formula from 14 on.
    pub fn melting_temperature(&self) -> f64 {
        let at = self.counts.at() as f64;
        let gc = self.counts.gc() as f64;
        if self.length() < WALLACE_MAX_LEN {
            round3(2.0 * at + 4.0 * gc)
        } else {
            round3(64.9 + 41.0 * (gc - 16.4) / (at + gc))
        }
    }

    /// Anhydrous single-stranded DNA mass in g/mol.
    pub fn molar_mass(&self) -> f64 {
        let c = &self.counts;
        round3(
            c.a as f64 * MASS_A + c.t as f64 * MASS_T + c.c as f64 * MASS_C + c.g as f64 * MASS_G
                - MASS_ADJUST,
        )
    }

    pub fn reverse_complement(&self, acid: NucleicAcid) -> Result<Vec<u8>, SeqError> {
        reverse_complement(&self.sequence, acid, self.validation)
    }
}
