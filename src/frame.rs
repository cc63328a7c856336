//! Six-frame codon enumeration.
//!
//! Three forward frames are read from the RNA transcript of the input, three
//! antiparallel frames from the input itself in the RNA alphabet. Frames are
//! always produced in the order forward 0, 1, 2 then antiparallel 0, 1, 2;
//! longest-ORF tie-breaking depends on it.

use serde::Serialize;

use crate::sequence;
use crate::strand::Strand;

/// Number of frame offsets per strand.
pub const OFFSETS: usize = 3;

/// Number of reading frames per input sequence.
pub const FRAME_COUNT: usize = 2 * OFFSETS;

/// Codons of one (strand, offset) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReadingFrame {
    pub strand: Strand,
    pub offset: usize,
    pub codons: Vec<String>,
}

/// Partition RNA bases into non-overlapping codons, discarding any trailing
/// one or two characters.
fn codons(rna: &[char]) -> Vec<String> {
    rna.chunks_exact(3).map(|c| c.iter().collect()).collect()
}

/// Forward frame `offset`: drop the last `offset` characters, then partition
/// the transcript of what remains.
fn forward_frame(dna: &[char], offset: usize) -> ReadingFrame {
    let end = dna.len().saturating_sub(offset);
    let head: String = dna[..end].iter().collect();
    let transcript: Vec<char> = sequence::transcribe(&head).chars().collect();
    ReadingFrame {
        strand: Strand::Forward,
        offset,
        codons: codons(&transcript),
    }
}

/// Antiparallel frame `offset`: skip the first `offset` characters of the
/// input read as RNA.
fn antiparallel_frame(rna: &[char], offset: usize) -> ReadingFrame {
    let start = offset.min(rna.len());
    ReadingFrame {
        strand: Strand::Antiparallel,
        offset,
        codons: codons(&rna[start..]),
    }
}

/// Enumerate all six reading frames of a DNA sequence.
///
/// Input is expected to be validated; the forward frames drop characters
/// outside the DNA alphabet (see [`sequence::reverse_complement`]) while the
/// antiparallel frames keep them, so they surface later as malformed codons.
#[must_use]
pub fn enumerate_frames(dna: &str) -> [ReadingFrame; FRAME_COUNT] {
    let dna: Vec<char> = dna.chars().collect();
    let rna: Vec<char> = dna.iter().map(|&c| if c == 'T' { 'U' } else { c }).collect();
    [
        forward_frame(&dna, 0),
        forward_frame(&dna, 1),
        forward_frame(&dna, 2),
        antiparallel_frame(&rna, 0),
        antiparallel_frame(&rna, 1),
        antiparallel_frame(&rna, 2),
    ]
}
