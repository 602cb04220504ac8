//! Positioning configuration.
//!
//! Field names deserialize in camelCase (`nodeSep`, `rankDir`, ...) so a layout config can be
//! loaded from the same JSON objects diagram front-ends already pass around.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
pub enum RankDir {
    #[default]
    #[serde(alias = "tb")]
    TB,
    #[serde(alias = "bt")]
    BT,
    #[serde(alias = "lr")]
    LR,
    #[serde(alias = "rl")]
    RL,
}

impl RankDir {
    pub fn as_str(self) -> &'static str {
        match self {
            RankDir::TB => "TB",
            RankDir::BT => "BT",
            RankDir::LR => "LR",
            RankDir::RL => "RL",
        }
    }
}

impl fmt::Display for RankDir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RankDir {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "TB" => Ok(RankDir::TB),
            "BT" => Ok(RankDir::BT),
            "LR" => Ok(RankDir::LR),
            "RL" => Ok(RankDir::RL),
            _ => Err(Error::UnknownRankDir(s.to_string())),
        }
    }
}

/// One of the four Brandes–Köpf passes: vertical direction (align with predecessors going
/// down the ranks, or with successors going up) crossed with horizontal bias.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Alignment {
    #[serde(rename = "ul", alias = "UL", alias = "up-left")]
    UpLeft,
    #[serde(rename = "ur", alias = "UR", alias = "up-right")]
    UpRight,
    #[serde(rename = "dl", alias = "DL", alias = "down-left")]
    DownLeft,
    #[serde(rename = "dr", alias = "DR", alias = "down-right")]
    DownRight,
}

impl Alignment {
    /// Canonical pass order; also the tie-break order when picking the narrowest pass.
    pub const ALL: [Alignment; 4] = [
        Alignment::UpLeft,
        Alignment::UpRight,
        Alignment::DownLeft,
        Alignment::DownRight,
    ];

    pub fn is_up(self) -> bool {
        matches!(self, Alignment::UpLeft | Alignment::UpRight)
    }

    pub fn is_left(self) -> bool {
        matches!(self, Alignment::UpLeft | Alignment::DownLeft)
    }

    pub fn index(self) -> usize {
        match self {
            Alignment::UpLeft => 0,
            Alignment::UpRight => 1,
            Alignment::DownLeft => 2,
            Alignment::DownRight => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Alignment::UpLeft => "ul",
            Alignment::UpRight => "ur",
            Alignment::DownLeft => "dl",
            Alignment::DownRight => "dr",
        }
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Alignment {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ul" | "up-left" => Ok(Alignment::UpLeft),
            "ur" | "up-right" => Ok(Alignment::UpRight),
            "dl" | "down-left" => Ok(Alignment::DownLeft),
            "dr" | "down-right" => Ok(Alignment::DownRight),
            _ => Err(Error::UnknownAlignment(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PositionConfig {
    /// Gap between adjacent real nodes, net of their widths.
    pub node_sep: f64,
    /// Gap between adjacent dummy (edge chain) nodes.
    pub edge_sep: f64,
    /// Gap between adjacent ranks on the perpendicular axis.
    pub rank_sep: f64,
    pub rank_dir: RankDir,
    /// Skip balancing and use the raw coordinates of this one pass.
    pub debug_alignment: Option<Alignment>,
    /// Report per-phase timings through `tracing`.
    pub debug_timing: bool,
}

impl Default for PositionConfig {
    fn default() -> Self {
        Self {
            node_sep: 50.0,
            edge_sep: 10.0,
            rank_sep: 30.0,
            rank_dir: RankDir::TB,
            debug_alignment: None,
            debug_timing: false,
        }
    }
}

impl PositionConfig {
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("nodeSep", self.node_sep),
            ("edgeSep", self.edge_sep),
            ("rankSep", self.rank_sep),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidSeparation { name, value });
            }
        }
        Ok(())
    }
}
