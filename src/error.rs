//! Error types for the orfscan library.

use thiserror::Error;

/// Errors that can occur while processing a sequence.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The input contains a character outside {A, T, C, G}.
    #[error("invalid base '{base}' at position {position}")]
    InvalidAlphabet { position: usize, base: char },

    /// A string that is not one of the 64 RNA codons reached the translator.
    #[error("malformed codon: '{0}'")]
    MalformedCodon(String),

    /// A textual value could not be parsed.
    #[error("{0}")]
    Parse(String),
}
