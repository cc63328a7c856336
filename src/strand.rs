//! Strand a reading frame is read from.

use std::fmt;

use serde::Serialize;

use crate::error::Error;

/// Strand of a reading frame.
///
/// `Forward` frames are read from the RNA transcript of the input (its
/// reverse complement). `Antiparallel` frames read the input strand itself
/// with T replaced by U.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Strand {
    Forward,
    Antiparallel,
}

impl Strand {
    /// Both strands in frame enumeration order.
    pub const ALL: [Strand; 2] = [Strand::Forward, Strand::Antiparallel];

    #[must_use]
    pub fn is_antiparallel(self) -> bool {
        self == Self::Antiparallel
    }

    /// Short `+` / `-` symbol.
    #[must_use]
    pub fn symbol(self) -> char {
        match self {
            Self::Forward => '+',
            Self::Antiparallel => '-',
        }
    }
}

impl std::str::FromStr for Strand {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "forward" | "+" => Ok(Self::Forward),
            "antiparallel" | "-" => Ok(Self::Antiparallel),
            _ => Err(Error::Parse(format!("unrecognized strand: {s}"))),
        }
    }
}

impl fmt::Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Forward => write!(f, "forward"),
            Self::Antiparallel => write!(f, "antiparallel"),
        }
    }
}
