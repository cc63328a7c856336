//! DNA alphabet validation, reverse complement and transcription.

use crate::error::Error;

fn is_dna_base(c: char) -> bool {
    matches!(c, 'A' | 'T' | 'C' | 'G')
}

fn complement(c: char) -> Option<char> {
    match c {
        'A' => Some('T'),
        'T' => Some('A'),
        'C' => Some('G'),
        'G' => Some('C'),
        _ => None,
    }
}

/// Returns true if every character is one of `A`, `T`, `C`, `G`.
///
/// The empty sequence is valid.
#[must_use]
pub fn is_valid_sequence(sequence: &str) -> bool {
    sequence.chars().all(is_dna_base)
}

/// Like [`is_valid_sequence`], but reports the first offending character.
pub fn validate_sequence(sequence: &str) -> Result<(), Error> {
    match sequence.chars().enumerate().find(|&(_, c)| !is_dna_base(c)) {
        Some((position, base)) => Err(Error::InvalidAlphabet { position, base }),
        None => Ok(()),
    }
}

/// Reverse complement of a DNA strand (A<->T, C<->G).
///
/// Characters outside the DNA alphabet are dropped.
#[must_use]
pub fn reverse_complement(dna: &str) -> String {
    dna.chars().rev().filter_map(complement).collect()
}

/// RNA transcript obtained when `dna` is the template strand: the reverse
/// complement with T replaced by U.
#[must_use]
pub fn transcribe(dna: &str) -> String {
    reverse_complement(dna)
        .chars()
        .map(|c| if c == 'T' { 'U' } else { c })
        .collect()
}
