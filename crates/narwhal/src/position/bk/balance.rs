use super::{Candidates, LayerGraph};
use crate::config::Alignment;

/// Left edge of the leftmost and right edge of the rightmost node over all layers.
pub fn alignment_bounds(lg: &LayerGraph, xs: &[f64]) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for layer in lg.layers() {
        let (Some(&first), Some(&last)) = (layer.first(), layer.last()) else {
            continue;
        };
        min = min.min(xs[first] - lg.extent(first) / 2.0);
        max = max.max(xs[last] + lg.extent(last) / 2.0);
    }
    (min, max)
}

/// The pass with the narrowest drawing; ties go to the earlier pass in [`Alignment::ALL`].
pub fn find_smallest_width_alignment(lg: &LayerGraph, xss: &Candidates) -> Alignment {
    let mut best = Alignment::UpLeft;
    let mut best_width = f64::INFINITY;
    for dir in Alignment::ALL {
        let (min, max) = alignment_bounds(lg, &xss[dir.index()]);
        let width = max - min;
        if width < best_width {
            best_width = width;
            best = dir;
        }
    }
    best
}

/// Moves every pass into the frame of `align_to`: left-biased passes share its left edge,
/// right-biased passes share its right edge.
pub fn align_coordinates(lg: &LayerGraph, xss: &mut Candidates, align_to: Alignment) {
    let (ref_min, ref_max) = alignment_bounds(lg, &xss[align_to.index()]);

    for dir in Alignment::ALL {
        let xs = &mut xss[dir.index()];
        let (min, max) = alignment_bounds(lg, xs);
        let delta = if dir.is_left() {
            ref_min - min
        } else {
            ref_max - max
        };
        if delta != 0.0 {
            for x in xs.iter_mut() {
                *x += delta;
            }
        }
    }
}

/// Per node, the mean of the two middle candidates of four.
pub fn balance(xss: &Candidates) -> Vec<f64> {
    let n = xss[0].len();
    (0..n)
        .map(|v| {
            let mut vals = [xss[0][v], xss[1][v], xss[2][v], xss[3][v]];
            vals.sort_by(f64::total_cmp);
            (vals[1] + vals[2]) / 2.0
        })
        .collect()
}
