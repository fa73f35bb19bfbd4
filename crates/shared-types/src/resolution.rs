//! Target display resolutions for the estimators
//!
//! `Ultrawide` only appears in the bottleneck results view; FPS estimation
//! supports the three standard 16:9 targets.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Resolution {
    #[serde(rename = "1080p")]
    FullHd,
    #[serde(rename = "1440p")]
    Qhd,
    #[serde(rename = "4k")]
    UltraHd,
    #[serde(rename = "ultrawide")]
    Ultrawide,
}

impl Resolution {
    /// The stable lookup key, matching the selection values the
    /// presentation layer submits
    pub fn key(&self) -> &'static str {
        match self {
            Resolution::FullHd => "1080p",
            Resolution::Qhd => "1440p",
            Resolution::UltraHd => "4k",
            Resolution::Ultrawide => "ultrawide",
        }
    }

    /// Human-readable label for choosers
    pub fn label(&self) -> &'static str {
        match self {
            Resolution::FullHd => "1080p (FHD)",
            Resolution::Qhd => "1440p (QHD)",
            Resolution::UltraHd => "4K (UHD)",
            Resolution::Ultrawide => "Ultrawide (21:9)",
        }
    }

    /// Parse from a selection key or common alias (case-insensitive)
    pub fn parse_key(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "1080p" | "fhd" | "full hd" => Some(Resolution::FullHd),
            "1440p" | "qhd" => Some(Resolution::Qhd),
            "4k" | "2160p" | "uhd" => Some(Resolution::UltraHd),
            "ultrawide" | "uwqhd" => Some(Resolution::Ultrawide),
            _ => None,
        }
    }

    /// All resolutions shown in the bottleneck results view
    pub fn all() -> [Self; 4] {
        [
            Resolution::FullHd,
            Resolution::Qhd,
            Resolution::UltraHd,
            Resolution::Ultrawide,
        ]
    }
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}
