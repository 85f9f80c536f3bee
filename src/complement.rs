//! 碱基互补表与反向互补。

use crate::error::SeqError;

/// Output alphabet of a complement strand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NucleicAcid {
    Dna,
    Rna,
}

/// How characters outside the recognized alphabet are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BaseValidation {
    /// Fail with [`SeqError::UnknownBase`].
    #[default]
    Strict,
    /// Complement to `N`; metrics leave them out of the length.
    Lenient,
}

/// Complement of a single character, or `None` when it has no table entry.
///
/// Lowercase bases complement to uppercase, except `n` which stays `n`.
/// Whitespace and commas pass through unchanged.
pub fn complement_base(base: u8, acid: NucleicAcid) -> Option<u8> {
    let out = match (base, acid) {
        (b'A' | b'a', NucleicAcid::Dna) => b'T',
        (b'A' | b'a', NucleicAcid::Rna) => b'U',
        (b'T' | b't', _) => b'A',
        (b'G' | b'g', _) => b'C',
        (b'C' | b'c', _) => b'G',
        (b'N', _) => b'N',
        (b'n', _) => b'n',
        (b' ' | b'\t' | b'\n' | b',', _) => base,
        _ => return None,
    };
    Some(out)
}

/// Reverse complement of `seq`, reported 3' to 5'.
///
/// Substitution happens first, then the whole string is reversed.
pub fn reverse_complement(
    seq: &[u8],
    acid: NucleicAcid,
    validation: BaseValidation,
) -> Result<Vec<u8>, SeqError> {
    let mut out = Vec::with_capacity(seq.len());
    for (position, &base) in seq.iter().enumerate() {
        match complement_base(base, acid) {
            Some(c) => out.push(c),
            None => match validation {
                BaseValidation::Strict => return Err(SeqError::UnknownBase { base, position }),
                BaseValidation::Lenient => out.push(b'N'),
            },
        }
    }
    out.reverse();
    Ok(out)
}
