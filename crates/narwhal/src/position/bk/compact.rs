//! Horizontal compaction.
//!
//! Two deviations from the textbook algorithm: separation depends on node extents (and on whether
//! a node is a dummy), and blocks in different sink classes never push each other directly.
//! Instead the left class records a deferred shift, following Carstens, "Node and Label
//! Placement in a Layered Layout Algorithm". Without that fix compaction stretches drawings far
//! wider than needed.

use super::{BlockAlignment, LayerGraph};
use crate::config::{Alignment, PositionConfig};

struct Compactor<'a> {
    lg: &'a LayerGraph,
    config: &'a PositionConfig,
    root: &'a [usize],
    align: &'a [usize],
    /// In-layer neighbor on the side the pass starts from.
    pred: Vec<Option<usize>>,
    sink: Vec<usize>,
    /// Deferred shift per sink class.
    shift: Vec<f64>,
    xs: Vec<f64>,
    placed: Vec<bool>,
}

impl Compactor<'_> {
    /// Places the block rooted at `start` relative to its sink, placing every block to its left
    /// first. Uses an explicit stack of `(block root, member being examined)` so long chains of
    /// dependent blocks cannot overflow the call stack.
    fn place_block(&mut self, start: usize) {
        if self.placed[start] {
            return;
        }
        self.placed[start] = true;
        self.xs[start] = 0.0;

        let mut stack: Vec<(usize, usize)> = vec![(start, start)];
        while let Some(&(v, w)) = stack.last() {
            if let Some(p) = self.pred[w] {
                let u = self.root[p];
                if !self.placed[u] {
                    self.placed[u] = true;
                    self.xs[u] = 0.0;
                    stack.push((u, u));
                    continue;
                }

                if self.sink[v] == v {
                    self.sink[v] = self.sink[u];
                }
                let delta = self.lg.half_sep(p, self.config) + self.lg.half_sep(w, self.config);
                if self.sink[v] != self.sink[u] {
                    let s = self.sink[u];
                    self.shift[s] = self.shift[s].min(self.xs[v] - self.xs[u] - delta);
                } else {
                    self.xs[v] = self.xs[v].max(self.xs[u] + delta);
                }
            }

            let next = self.align[w];
            if next == v {
                stack.pop();
            } else if let Some(top) = stack.last_mut() {
                top.1 = next;
            }
        }
    }
}

/// Coordinates for one pass, indexed like `lg`, read left to right.
pub fn horizontal_compaction(
    lg: &LayerGraph,
    alignment: &BlockAlignment,
    dir: Alignment,
    config: &PositionConfig,
) -> Vec<f64> {
    let n = lg.len();
    let layers = lg.layers();

    let mut pred: Vec<Option<usize>> = vec![None; n];
    for layer in layers {
        for i in 1..layer.len() {
            pred[lg.at(layer, i, dir)] = Some(lg.at(layer, i - 1, dir));
        }
    }

    let mut c = Compactor {
        lg,
        config,
        root: &alignment.root,
        align: &alignment.align,
        pred,
        sink: (0..n).collect(),
        shift: vec![f64::INFINITY; n],
        xs: vec![0.0; n],
        placed: vec![false; n],
    };

    for r in lg.rank_sequence(dir) {
        let layer = &layers[r];
        for i in 0..layer.len() {
            let v = lg.at(layer, i, dir);
            c.place_block(alignment.root[v]);
        }
    }

    // Roots sit in an earlier layer than the rest of their block, so visiting in pass order
    // resolves each root before its members copy it.
    let Compactor {
        sink,
        shift,
        mut xs,
        ..
    } = c;
    for r in lg.rank_sequence(dir) {
        let layer = &layers[r];
        for i in 0..layer.len() {
            let v = lg.at(layer, i, dir);
            let root = alignment.root[v];
            xs[v] = xs[root];
            let delta = shift[sink[v]];
            if root == v && delta.is_finite() {
                xs[v] += delta;
            }
        }
    }

    if !dir.is_left() {
        for x in &mut xs {
            *x = -*x;
        }
    }
    xs
}
