//! Positioning.
//!
//! Along each rank, coordinates come from Brandes & Köpf ([`bk`]). Across ranks, every layer is
//! centered on a row whose height is the tallest node in the layer, separated by `rank_sep`.

use crate::config::PositionConfig;
use crate::util;
use crate::{Axis, LayoutGraph};

pub mod bk;

pub use bk::LayerGraph;

/// Writes `x`/`y` for every node of `g`.
///
/// Ranks and orders must already be assigned. An empty graph is left untouched.
pub fn position(g: &mut LayoutGraph, config: &PositionConfig) {
    let span = tracing::debug_span!(
        "position",
        nodes = g.node_count(),
        rank_dir = %config.rank_dir
    );
    let _guard = span.enter();

    util::time("position phase", config.debug_timing, || {
        let axis = Axis::from_rank_dir(config.rank_dir);
        let lg = LayerGraph::new(g, axis);
        if lg.is_empty() {
            return;
        }

        let mut xs = bk::position_x(&lg, config);
        translate_to_origin(&lg, &mut xs);
        let ys = position_y(&lg, config);

        for v in 0..lg.len() {
            if let Some(node) = g.node_mut(lg.id(v)) {
                axis.place(node, xs[v], ys[v]);
            }
        }
    });
}

/// Shifts along-axis centers so the leftmost node edge sits at 0.
pub fn translate_to_origin(lg: &LayerGraph, xs: &mut [f64]) {
    let min_x = (0..lg.len())
        .map(|v| xs[v] - lg.extent(v) / 2.0)
        .fold(f64::INFINITY, f64::min);
    if !min_x.is_finite() {
        return;
    }
    for x in xs.iter_mut() {
        *x -= min_x;
    }
}

/// Across-axis centers, one row per rank.
pub fn position_y(lg: &LayerGraph, config: &PositionConfig) -> Vec<f64> {
    let mut ys = vec![0.0; lg.len()];
    let mut offset: f64 = 0.0;
    for layer in lg.layers() {
        let max_depth = layer
            .iter()
            .map(|&v| lg.depth(v))
            .fold(0.0_f64, f64::max);
        for &v in layer {
            ys[v] = offset + max_depth / 2.0;
        }
        offset += max_depth + config.rank_sep;
    }

    if Axis::from_rank_dir(config.rank_dir).reverses_ranks() {
        let total = offset - config.rank_sep;
        for y in &mut ys {
            *y = total - *y;
        }
    }
    ys
}
