//! Node and graph label types consumed and written by positioning.

use crate::graphlib::Graph;

/// Per-node input from the ranking/ordering stage plus the coordinates written by
/// [`position`](crate::position::position).
///
/// `x`/`y` are node centers and stay `None` until a run writes them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeLabel {
    pub width: f64,
    pub height: f64,
    pub rank: usize,
    pub order: usize,
    /// Synthetic node carrying one segment of an edge that spans several ranks.
    pub dummy: bool,
    pub x: Option<f64>,
    pub y: Option<f64>,
}

impl NodeLabel {
    pub fn new(rank: usize, order: usize) -> Self {
        Self {
            rank,
            order,
            ..Default::default()
        }
    }

    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn dummy(mut self) -> Self {
        self.dummy = true;
        self
    }
}

/// The layered graph positioning operates on. Edges carry no data.
pub type LayoutGraph = Graph<NodeLabel, ()>;
