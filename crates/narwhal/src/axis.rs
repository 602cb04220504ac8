//! Axis mapping for the configured rank direction.
//!
//! Positioning is written once, in terms of an "along" axis (inside a rank) and an "across"
//! axis (between ranks). For top-to-bottom and bottom-to-top layouts along is `x`/`width`; for
//! left-to-right and right-to-left layouts the axes are swapped so the same compaction produces a
//! horizontally flowing drawing.

use crate::{NodeLabel, RankDir};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Axis {
    rank_dir: RankDir,
}

impl Axis {
    pub fn from_rank_dir(rank_dir: RankDir) -> Self {
        Self { rank_dir }
    }

    pub fn rank_dir(self) -> RankDir {
        self.rank_dir
    }

    fn swapped(self) -> bool {
        matches!(self.rank_dir, RankDir::LR | RankDir::RL)
    }

    /// Ranks are laid out from the far edge back towards the origin (`BT`, `RL`).
    pub fn reverses_ranks(self) -> bool {
        matches!(self.rank_dir, RankDir::BT | RankDir::RL)
    }

    /// Size of `node` along its rank.
    pub fn extent(self, node: &NodeLabel) -> f64 {
        if self.swapped() {
            node.height
        } else {
            node.width
        }
    }

    /// Size of `node` across ranks.
    pub fn depth(self, node: &NodeLabel) -> f64 {
        if self.swapped() {
            node.width
        } else {
            node.height
        }
    }

    /// Reads back the along-axis coordinate written by [`Axis::place`].
    pub fn along(self, node: &NodeLabel) -> Option<f64> {
        if self.swapped() { node.y } else { node.x }
    }

    /// Reads back the across-axis coordinate written by [`Axis::place`].
    pub fn across(self, node: &NodeLabel) -> Option<f64> {
        if self.swapped() { node.x } else { node.y }
    }

    pub fn place(self, node: &mut NodeLabel, along: f64, across: f64) {
        if self.swapped() {
            node.x = Some(across);
            node.y = Some(along);
        } else {
            node.x = Some(along);
            node.y = Some(across);
        }
    }
}
