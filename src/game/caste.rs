//! Snake castes and the scoring/growth rules each one plays by.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Scoring and growth parameters shared by every snake of a caste
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CasteProfile {
    /// Points added per food eaten
    pub score_increment: u32,
    /// Factor applied to speed per food eaten
    pub speed_multiplier: f64,
    /// Chance that eating food adds a segment
    pub growth_probability: f64,
}

impl CasteProfile {
    /// Draw whether this capture grows the snake. Certain growth does not
    /// consume randomness.
    pub fn grows<R: Rng + ?Sized>(&self, rng: &mut R) -> bool {
        if self.growth_probability >= 1.0 {
            return true;
        }
        if self.growth_probability <= 0.0 {
            return false;
        }
        rng.gen_bool(self.growth_probability)
    }
}

/// The four snake castes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Caste {
    #[default]
    Sssish,
    Hssish,
    Tssish,
    Kssish,
}

impl Caste {
    pub const ALL: [Caste; 4] = [Caste::Sssish, Caste::Hssish, Caste::Tssish, Caste::Kssish];

    pub fn profile(&self) -> CasteProfile {
        match self {
            Caste::Sssish => CasteProfile {
                score_increment: 10,
                speed_multiplier: 1.05,
                growth_probability: 1.0,
            },
            Caste::Hssish => CasteProfile {
                score_increment: 12,
                speed_multiplier: 1.05,
                growth_probability: 1.0,
            },
            Caste::Tssish => CasteProfile {
                score_increment: 10,
                speed_multiplier: 1.01,
                growth_probability: 1.0,
            },
            Caste::Kssish => CasteProfile {
                score_increment: 10,
                speed_multiplier: 1.05,
                growth_probability: 0.5,
            },
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Caste::Sssish => "Sss'ish",
            Caste::Hssish => "Hss'ish",
            Caste::Tssish => "Tss'ish",
            Caste::Kssish => "Kss'ish",
        }
    }

    /// One-letter code used on the command line and in config files
    pub fn code(&self) -> char {
        match self {
            Caste::Sssish => 's',
            Caste::Hssish => 'h',
            Caste::Tssish => 't',
            Caste::Kssish => 'k',
        }
    }
}

impl fmt::Display for Caste {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Caste {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('\'', "");
        Caste::ALL
            .into_iter()
            .find(|caste| {
                wanted == caste.code().to_string()
                    || wanted == caste.label().to_ascii_lowercase().replace('\'', "")
            })
            .ok_or_else(|| format!("unknown caste '{s}', expected one of s, h, t, k"))
    }
}
