//! orfscan: DNA validation, six-frame translation and longest open reading
//! frame extraction.

pub mod error;

pub mod cli;
pub mod codon;
pub mod config;
pub mod frame;
pub mod orf;
pub mod sequence;
pub mod strand;

pub use codon::translate;
pub use frame::enumerate_frames;
pub use orf::longest_orf;
pub use sequence::{is_valid_sequence, reverse_complement, transcribe};
