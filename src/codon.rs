//! Standard genetic code and codon translation.

use crate::error::Error;

/// Marker emitted for stop codons.
pub const STOP: u8 = b'*';

/// Amino acid emitted for the start codon AUG.
pub const START: u8 = b'M';

/// Process-wide standard codon table.
pub static STANDARD: CodonTable = CodonTable::standard();

/// Lookup table for translating RNA codons to amino acids.
///
/// Indexed by 6-bit codon encoding: A=0, C=1, G=2, U=3.
/// Index = first*16 + second*4 + third.
pub struct CodonTable {
    table: [u8; 64],
}

fn base_to_index(b: u8) -> Option<usize> {
    match b {
        b'A' => Some(0),
        b'C' => Some(1),
        b'G' => Some(2),
        b'U' => Some(3),
        _ => None,
    }
}

impl CodonTable {
    /// Standard genetic code (NCBI translation table 1).
    #[must_use]
    pub const fn standard() -> Self {
        #[rustfmt::skip]
        let table: [u8; 64] = [
            b'K', b'N', b'K', b'N',  // AA*: AAA=K, AAC=N, AAG=K, AAU=N
            b'T', b'T', b'T', b'T',  // AC*: ACA=T, ACC=T, ACG=T, ACU=T
            b'R', b'S', b'R', b'S',  // AG*: AGA=R, AGC=S, AGG=R, AGU=S
            b'I', b'I', b'M', b'I',  // AU*: AUA=I, AUC=I, AUG=M, AUU=I
            b'Q', b'H', b'Q', b'H',  // CA*: CAA=Q, CAC=H, CAG=Q, CAU=H
            b'P', b'P', b'P', b'P',  // CC*
            b'R', b'R', b'R', b'R',  // CG*
            b'L', b'L', b'L', b'L',  // CU*
            b'E', b'D', b'E', b'D',  // GA*: GAA=E, GAC=D, GAG=E, GAU=D
            b'A', b'A', b'A', b'A',  // GC*
            b'G', b'G', b'G', b'G',  // GG*
            b'V', b'V', b'V', b'V',  // GU*
            b'*', b'Y', b'*', b'Y',  // UA*: UAA=*, UAC=Y, UAG=*, UAU=Y
            b'S', b'S', b'S', b'S',  // UC*
            b'*', b'C', b'W', b'C',  // UG*: UGA=*, UGC=C, UGG=W, UGU=C
            b'L', b'F', b'L', b'F',  // UU*: UUA=L, UUC=F, UUG=L, UUU=F
        ];
        Self { table }
    }

    /// Translate a single RNA codon to its amino acid or [`STOP`].
    ///
    /// The codon must be exactly three uppercase RNA bases; anything else is
    /// a [`Error::MalformedCodon`].
    pub fn translate_codon(&self, codon: &str) -> Result<u8, Error> {
        let malformed = || Error::MalformedCodon(codon.to_string());
        let &[b0, b1, b2] = codon.as_bytes() else {
            return Err(malformed());
        };
        match (base_to_index(b0), base_to_index(b1), base_to_index(b2)) {
            (Some(a), Some(b), Some(c)) => Ok(self.table[a * 16 + b * 4 + c]),
            _ => Err(malformed()),
        }
    }
}

/// Translate a codon sequence with the standard table, one letter per codon.
pub fn translate<S: AsRef<str>>(codons: &[S]) -> Result<String, Error> {
    let mut protein = String::with_capacity(codons.len());
    for codon in codons {
        protein.push(char::from(STANDARD.translate_codon(codon.as_ref())?));
    }
    Ok(protein)
}
