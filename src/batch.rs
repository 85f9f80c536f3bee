//! 逐行提取 ID 与 barcode，组装结果表。

use tracing::debug;

use crate::anchor::AnchorConfig;
use crate::complement::{reverse_complement, BaseValidation, NucleicAcid};
use crate::error::SeqError;

/// One output row. Empty `id` / `barcode` means the anchor was not found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionResult {
    pub seq: Vec<u8>,
    pub id: Vec<u8>,
    pub barcode: Vec<u8>,
}

/// Ordered result rows, one per input row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionTable {
    rows: Vec<ExtractionResult>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TableSummary {
    pub rows: usize,
    pub with_id: usize,
    pub with_barcode: usize,
}

impl ExtractionTable {
    pub fn rows(&self) -> &[ExtractionResult] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Appends `other` after the existing rows. No sorting, no dedup.
    pub fn append(&mut self, mut other: ExtractionTable) {
        self.rows.append(&mut other.rows);
    }

    pub fn summary(&self) -> TableSummary {
        TableSummary {
            rows: self.rows.len(),
            with_id: self.rows.iter().filter(|r| !r.id.is_empty()).count(),
            with_barcode: self.rows.iter().filter(|r| !r.barcode.is_empty()).count(),
        }
    }
}

impl IntoIterator for ExtractionTable {
    type Item = ExtractionResult;
    type IntoIter = std::vec::IntoIter<ExtractionResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

/// Runs the ID and barcode locators over every row of a batch.
#[derive(Debug, Clone)]
pub struct BatchCompiler {
    pub id: AnchorConfig,
    pub barcode: AnchorConfig,
    /// Read 1 orientation: reverse complement (DNA) before searching.
    pub reverse_complement: bool,
    pub validation: BaseValidation,
}

impl BatchCompiler {
    pub fn new(id: AnchorConfig, barcode: AnchorConfig) -> Self {
        BatchCompiler {
            id,
            barcode,
            reverse_complement: false,
            validation: BaseValidation::default(),
        }
    }

    pub fn reverse_complement(mut self, yes: bool) -> Self {
        self.reverse_complement = yes;
        self
    }

    pub fn validation(mut self, validation: BaseValidation) -> Self {
        self.validation = validation;
        self
    }

    fn process_row(&self, row: &[u8]) -> Result<ExtractionResult, SeqError> {
        let seq = if self.reverse_complement {
            reverse_complement(row, NucleicAcid::Dna, self.validation)?
        } else {
            row.to_vec()
        };
        let id = self.id.locate(&seq).to_vec();
        let barcode = self.barcode.locate(&seq).to_vec();
        Ok(ExtractionResult { seq, id, barcode })
    }

    /// Compiles every row in order. The first malformed row aborts the batch.
    pub fn compile<I, S>(&self, rows: I) -> Result<ExtractionTable, SeqError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<[u8]>,
    {
        let rows = rows.into_iter();
        let mut out = Vec::with_capacity(rows.size_hint().0);
        for (i, row) in rows.enumerate() {
            let result = self.process_row(row.as_ref()).map_err(|e| e.in_row(i))?;
            out.push(result);
        }

        let table = ExtractionTable { rows: out };
        let summary = table.summary();
        debug!(
            rows = summary.rows,
            with_id = summary.with_id,
            with_barcode = summary.with_barcode,
            reverse_complement = self.reverse_complement,
            "compiled batch"
        );
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compiler() -> BatchCompiler {
        BatchCompiler::new(
            AnchorConfig::default_id().unwrap(),
            AnchorConfig::after("GGGGGT", 3, 5).unwrap(),
        )
    }

    #[test]
    fn test_two_rows_keep_order() {
        let table = compiler()
            .compile(["CGATCGAAACAAACTT", "TTTTTTTTTTTT"])
            .unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows()[0].id, b"CGATCG");
        assert_eq!(table.rows()[1].id, b"");
        assert_eq!(table.rows()[1].seq, b"TTTTTTTTTTTT");
    }

    #[test]
    fn test_misses_are_not_dropped() {
        let rows = vec!["ACGT"; 5];
        let table = compiler().compile(&rows).unwrap();
        assert_eq!(table.len(), 5);
        assert_eq!(table.summary(), TableSummary { rows: 5, with_id: 0, with_barcode: 0 });
    }

    #[test]
    fn test_reverse_complement_before_search() {
        // window starts 3 bp into the match
        let row = "TTTTACCCCCAA";
        let plain = compiler().compile([row]).unwrap();
        assert_eq!(plain.rows()[0].barcode, b"");

        let rc = compiler().reverse_complement(true).compile([row]).unwrap();
        assert_eq!(rc.rows()[0].seq, b"TTGGGGGTAAAA");
        assert_eq!(rc.rows()[0].barcode, b"GGTAA");
    }

    #[test]
    fn test_malformed_row_aborts() {
        let err = compiler()
            .reverse_complement(true)
            .compile(["ACGT", "ACGU", "ACGT"])
            .unwrap_err();
        match err {
            SeqError::MalformedRow { row, source } => {
                assert_eq!(row, 1);
                assert!(matches!(*source, SeqError::UnknownBase { base: b'U', position: 3 }));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_lenient_keeps_going() {
        let table = compiler()
            .reverse_complement(true)
            .validation(BaseValidation::Lenient)
            .compile(["ACGU"])
            .unwrap();
        assert_eq!(table.rows()[0].seq, b"NCGT");
    }

    #[test]
    fn test_append_keeps_batch_order() {
        let c = compiler();
        let mut first = c.compile(["AAAA", "CCCC"]).unwrap();
        let second = c.compile(["GGGG", "AAAA"]).unwrap();
        first.append(second);
        let seqs: Vec<_> = first.into_iter().map(|r| r.seq).collect();
        assert_eq!(seqs, vec![b"AAAA".to_vec(), b"CCCC".to_vec(), b"GGGG".to_vec(), b"AAAA".to_vec()]);
    }
}
