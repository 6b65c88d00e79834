//! Purity rating normalization.

use serde::{Deserialize, Serialize};

/// Three-level quality rating attached to resource nodes.
///
/// Serialized as its integer rank (`1..=3`), which is what the map viewer
/// consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Purity {
    Impure = 1,
    Normal = 2,
    Pure = 3,
}

impl Purity {
    #[must_use]
    pub fn rank(self) -> u8 {
        self as u8
    }
}

impl From<Purity> for u8 {
    fn from(purity: Purity) -> Self {
        purity.rank()
    }
}

impl TryFrom<u8> for Purity {
    type Error = String;

    fn try_from(rank: u8) -> Result<Self, Self::Error> {
        match rank {
            1 => Ok(Purity::Impure),
            2 => Ok(Purity::Normal),
            3 => Ok(Purity::Pure),
            other => Err(format!("purity rank out of range: {other}")),
        }
    }
}

const PURITY_TABLE: [(&str, Purity); 3] = [
    ("impure", Purity::Impure),
    ("normal", Purity::Normal),
    ("pure", Purity::Pure),
];

/// Maps an upstream purity label to its rank.
///
/// Matching is case-insensitive. Missing, empty and unrecognized labels all
/// resolve to `None`; this never fails.
#[must_use]
pub fn normalize_purity(label: Option<&str>) -> Option<Purity> {
    let label = label.filter(|s| !s.is_empty())?.to_lowercase();
    PURITY_TABLE
        .iter()
        .find(|(key, _)| *key == label)
        .map(|(_, purity)| *purity)
}
