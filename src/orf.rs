//! Longest open reading frame across all six frames.

use serde::Serialize;

use crate::codon::{self, START, STOP};
use crate::error::Error;
use crate::frame::{self, ReadingFrame};
use crate::strand::Strand;

/// Translation of one reading frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranslatedFrame {
    pub strand: Strand,
    pub offset: usize,
    pub protein: String,
}

impl TranslatedFrame {
    fn from_frame(frame: &ReadingFrame) -> Result<Self, Error> {
        Ok(Self {
            strand: frame.strand,
            offset: frame.offset,
            protein: codon::translate(&frame.codons)?,
        })
    }
}

/// An open reading frame: `M`, zero or more residues, then `*`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Orf {
    pub strand: Strand,
    pub offset: usize,
    /// Index of the start codon within its frame.
    pub codon_start: usize,
    pub protein: String,
}

impl Orf {
    /// Number of residues between the start and stop markers.
    #[must_use]
    pub fn residues(&self) -> usize {
        self.protein.len().saturating_sub(2)
    }
}

/// Translate all six reading frames, in frame enumeration order.
pub fn translate_frames(dna: &str) -> Result<Vec<TranslatedFrame>, Error> {
    frame::enumerate_frames(dna)
        .iter()
        .map(TranslatedFrame::from_frame)
        .collect()
}

/// Scan one translated frame, replacing `best` with any terminated ORF that
/// has strictly more residues.
fn scan_frame(frame: &TranslatedFrame, best: &mut Option<Orf>) {
    let best_len = |best: &Option<Orf>| best.as_ref().map_or(0, Orf::residues);

    // (codon index of M, residue count) while inside a candidate
    let mut open: Option<(usize, usize)> = None;
    for (i, aa) in frame.protein.bytes().enumerate() {
        match open {
            None if aa == START => open = Some((i, 0)),
            None => {}
            Some((start, len)) if aa == STOP => {
                if len > best_len(best) {
                    *best = Some(Orf {
                        strand: frame.strand,
                        offset: frame.offset,
                        codon_start: start,
                        protein: frame.protein[start..=i].to_string(),
                    });
                }
                open = None;
            }
            Some((start, len)) => open = Some((start, len + 1)),
        }
    }
    // an unterminated candidate is dropped with `open`
}

/// Longest ORF over already translated frames, scanned in the given order.
///
/// Ties go to the earliest frame, then the leftmost candidate. Returns `None`
/// if no frame holds a terminated ORF with at least one residue.
#[must_use]
pub fn longest_in_frames(frames: &[TranslatedFrame]) -> Option<Orf> {
    let mut best = None;
    for frame in frames {
        scan_frame(frame, &mut best);
    }
    best
}

/// Find the longest ORF over the six frames of `dna`.
pub fn find_longest_orf(dna: &str) -> Result<Option<Orf>, Error> {
    Ok(longest_in_frames(&translate_frames(dna)?))
}

/// Longest ORF as a protein string including `M` and `*`, or empty if none.
pub fn longest_orf(dna: &str) -> Result<String, Error> {
    Ok(find_longest_orf(dna)?.map(|orf| orf.protein).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(protein: &str) -> TranslatedFrame {
        TranslatedFrame {
            strand: Strand::Forward,
            offset: 0,
            protein: protein.to_string(),
        }
    }

    fn scan(proteins: &[&str]) -> Option<String> {
        let mut best = None;
        for p in proteins {
            scan_frame(&frame(p), &mut best);
        }
        best.map(|orf| orf.protein)
    }

    #[test]
    fn simple_orf() {
        assert_eq!(longest_orf("ATGAAATAG").unwrap(), "MK*");
        let orf = find_longest_orf("ATGAAATAG").unwrap().unwrap();
        assert_eq!(orf.strand, Strand::Antiparallel);
        assert_eq!(orf.offset, 0);
        assert_eq!(orf.codon_start, 0);
        assert_eq!(orf.residues(), 1);
    }

    #[test]
    fn no_start_codon() {
        assert_eq!(longest_orf("CCCCCCCCC").unwrap(), "");
        assert_eq!(longest_orf("").unwrap(), "");
        assert!(find_longest_orf("GGG").unwrap().is_none());
    }

    #[test]
    fn unterminated_candidate_is_discarded() {
        assert_eq!(scan(&["AMKKK"]), None);
        assert_eq!(scan(&["MKK*MKKKKK"]).as_deref(), Some("MKK*"));
    }

    #[test]
    fn empty_orf_is_not_reported() {
        assert_eq!(scan(&["M*"]), None);
        assert_eq!(scan(&["M*MA*"]).as_deref(), Some("MA*"));
    }

    #[test]
    fn inner_methionine_is_a_residue() {
        assert_eq!(scan(&["MMM*"]).as_deref(), Some("MMM*"));
        assert_eq!(scan(&["AMAMA*"]).as_deref(), Some("MAMA*"));
    }

    #[test]
    fn longest_within_frame() {
        assert_eq!(scan(&["MA*LLMAAA*MAA*"]).as_deref(), Some("MAAA*"));
    }

    #[test]
    fn candidate_does_not_span_frames() {
        // an open candidate at the end of one frame must not absorb the next
        assert_eq!(scan(&["MAAAA", "LL*"]), None);
    }

    #[test]
    fn first_of_equal_length_wins() {
        assert_eq!(scan(&["MAB*", "MCD*"]).as_deref(), Some("MAB*"));
        assert_eq!(scan(&["MAB*MCD*"]).as_deref(), Some("MAB*"));
        assert_eq!(scan(&["MAB*", "MCDE*"]).as_deref(), Some("MCDE*"));
    }

    #[test]
    fn tie_break_follows_frame_order() {
        // The input is its own reverse complement, so forward frame 0 and
        // antiparallel frame 0 both translate to M K * L F H.
        let dna = "ATGAAATAGCTATTTCAT";
        let orf = find_longest_orf(dna).unwrap().unwrap();
        assert_eq!(orf.protein, "MK*");
        assert_eq!(orf.strand, Strand::Forward);
        assert_eq!(orf.offset, 0);
    }

    #[test]
    fn translate_frames_in_order() {
        let frames = translate_frames("ATGAAATAG").unwrap();
        let proteins: Vec<&str> = frames.iter().map(|f| f.protein.as_str()).collect();
        assert_eq!(proteins, vec!["LFH", "YF", "IS", "MK*", "*N", "EI"]);
    }

    #[test]
    fn invalid_base_fails_translation() {
        let err = longest_orf("ATGNAATAG").unwrap_err();
        assert!(matches!(err, Error::MalformedCodon(_)));
    }
}
