//! Brandes & Köpf (BK) horizontal coordinate assignment.
//!
//! The graph is first snapshotted into a [`LayerGraph`]: every node gets a dense index assigned
//! layer by layer, and all per-node data the four passes need (extents, dummy flags, adjacency)
//! lives in index-addressed vectors. Each pass then reads the snapshot through a traversal
//! direction instead of reversing layers in place, so the passes are independent of each other.

use crate::config::{Alignment, PositionConfig};
use crate::layering::build_layer_matrix;
use crate::util;
use crate::{Axis, LayoutGraph};
use rustc_hash::FxHashMap as HashMap;

mod align;
mod balance;
mod compact;
mod conflicts;

pub use align::{BlockAlignment, vertical_alignment};
pub use balance::{align_coordinates, alignment_bounds, balance, find_smallest_width_alignment};
pub use compact::horizontal_compaction;
pub use conflicts::{Conflicts, find_type1_conflicts};

/// Raw coordinates of the four passes, indexed by [`Alignment::index`].
pub type Candidates = [Vec<f64>; 4];

#[derive(Debug, Clone, Default)]
pub struct LayerGraph {
    ids: Vec<String>,
    index: HashMap<String, usize>,
    layers: Vec<Vec<usize>>,
    rank: Vec<usize>,
    order: Vec<usize>,
    extent: Vec<f64>,
    depth: Vec<f64>,
    dummy: Vec<bool>,
    preds: Vec<Vec<usize>>,
    succs: Vec<Vec<usize>>,
}

impl LayerGraph {
    pub fn new(g: &LayoutGraph, axis: Axis) -> Self {
        let layering = build_layer_matrix(g);
        let mut lg = LayerGraph::default();

        for (rank, layer) in layering.iter().enumerate() {
            let mut members = Vec::with_capacity(layer.len());
            for (order, id) in layer.iter().enumerate() {
                let Some(node) = g.node(id) else {
                    continue;
                };
                let v = lg.ids.len();
                lg.ids.push(id.clone());
                lg.index.insert(id.clone(), v);
                lg.rank.push(rank);
                lg.order.push(order);
                lg.extent.push(axis.extent(node));
                lg.depth.push(axis.depth(node));
                lg.dummy.push(node.dummy);
                members.push(v);
            }
            lg.layers.push(members);
        }

        let resolve = |ids: Vec<&str>| -> Vec<usize> {
            ids.into_iter()
                .filter_map(|id| lg.index.get(id).copied())
                .collect()
        };
        let preds: Vec<Vec<usize>> = lg.ids.iter().map(|id| resolve(g.predecessors(id))).collect();
        let succs: Vec<Vec<usize>> = lg.ids.iter().map(|id| resolve(g.successors(id))).collect();
        lg.preds = preds;
        lg.succs = succs;
        lg
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn id(&self, v: usize) -> &str {
        &self.ids[v]
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Layers in rank order, each in natural (left-to-right) order.
    pub fn layers(&self) -> &[Vec<usize>] {
        &self.layers
    }

    pub fn rank(&self, v: usize) -> usize {
        self.rank[v]
    }

    /// Position of `v` inside its layer, left to right.
    pub fn order(&self, v: usize) -> usize {
        self.order[v]
    }

    pub fn extent(&self, v: usize) -> f64 {
        self.extent[v]
    }

    pub fn depth(&self, v: usize) -> f64 {
        self.depth[v]
    }

    pub fn is_dummy(&self, v: usize) -> bool {
        self.dummy[v]
    }

    pub fn predecessors(&self, v: usize) -> &[usize] {
        &self.preds[v]
    }

    pub fn successors(&self, v: usize) -> &[usize] {
        &self.succs[v]
    }

    /// Ranks in the order a pass visits them: top-down for up passes, bottom-up otherwise.
    pub(crate) fn rank_sequence(&self, dir: Alignment) -> impl Iterator<Item = usize> {
        let n = self.layers.len();
        let up = dir.is_up();
        (0..n).map(move |i| if up { i } else { n - 1 - i })
    }

    /// The `i`-th node of `layer` in the pass's horizontal traversal order.
    pub(crate) fn at(&self, layer: &[usize], i: usize, dir: Alignment) -> usize {
        if dir.is_left() {
            layer[i]
        } else {
            layer[layer.len() - 1 - i]
        }
    }

    /// Position of `v` inside its layer in the pass's horizontal traversal order.
    pub(crate) fn position(&self, v: usize, dir: Alignment) -> usize {
        if dir.is_left() {
            self.order[v]
        } else {
            self.layers[self.rank[v]].len() - 1 - self.order[v]
        }
    }

    /// Nodes in the adjacent, already visited layer.
    pub(crate) fn neighbors(&self, v: usize, dir: Alignment) -> &[usize] {
        if dir.is_up() {
            &self.preds[v]
        } else {
            &self.succs[v]
        }
    }

    /// Minimum distance from `v`'s center to the boundary it shares with a neighbor.
    pub(crate) fn half_sep(&self, v: usize, config: &PositionConfig) -> f64 {
        let sep = if self.dummy[v] {
            config.edge_sep
        } else {
            config.node_sep
        };
        self.extent[v] / 2.0 + sep / 2.0
    }
}

fn run_pass(
    lg: &LayerGraph,
    conflicts: &Conflicts,
    dir: Alignment,
    config: &PositionConfig,
) -> Vec<f64> {
    let alignment = vertical_alignment(lg, conflicts, dir);
    horizontal_compaction(lg, &alignment, dir, config)
}

/// Runs all four passes. Results are in [`Alignment::ALL`] order regardless of scheduling.
#[cfg(not(feature = "parallel"))]
pub fn alignment_candidates(
    lg: &LayerGraph,
    conflicts: &Conflicts,
    config: &PositionConfig,
) -> Candidates {
    Alignment::ALL.map(|dir| run_pass(lg, conflicts, dir, config))
}

/// Runs all four passes. Results are in [`Alignment::ALL`] order regardless of scheduling.
#[cfg(feature = "parallel")]
pub fn alignment_candidates(
    lg: &LayerGraph,
    conflicts: &Conflicts,
    config: &PositionConfig,
) -> Candidates {
    let pass = |dir: Alignment| run_pass(lg, conflicts, dir, config);
    let ((ul, ur), (dl, dr)) = rayon::join(
        || rayon::join(|| pass(Alignment::UpLeft), || pass(Alignment::UpRight)),
        || rayon::join(|| pass(Alignment::DownLeft), || pass(Alignment::DownRight)),
    );
    [ul, ur, dl, dr]
}

/// Along-axis node centers, indexed like `lg`, before translation to the origin.
pub fn position_x(lg: &LayerGraph, config: &PositionConfig) -> Vec<f64> {
    if lg.is_empty() {
        return Vec::new();
    }

    let conflicts = util::time("find conflicts", config.debug_timing, || {
        find_type1_conflicts(lg)
    });
    tracing::trace!(conflicts = conflicts.len(), "type-1 conflicts");

    if let Some(dir) = config.debug_alignment {
        tracing::debug!(alignment = %dir, "using a single alignment, balancing skipped");
        return run_pass(lg, &conflicts, dir, config);
    }

    let mut xss = util::time("alignment passes", config.debug_timing, || {
        alignment_candidates(lg, &conflicts, config)
    });
    let smallest = find_smallest_width_alignment(lg, &xss);
    tracing::trace!(alignment = %smallest, "narrowest alignment");
    align_coordinates(lg, &mut xss, smallest);
    balance(&xss)
}
