//! Type-1 conflict detection.
//!
//! An inner segment is an edge between two dummy nodes: the middle of one long edge. An ordinary
//! edge that crosses an inner segment must not be used for alignment, otherwise the long edge
//! would bend around it.

use super::LayerGraph;
use rustc_hash::FxHashSet as HashSet;

/// Edges excluded from alignment, stored as unordered node pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Conflicts {
    edges: HashSet<(usize, usize)>,
}

impl Conflicts {
    fn key(v: usize, w: usize) -> (usize, usize) {
        if v <= w { (v, w) } else { (w, v) }
    }

    pub fn insert(&mut self, v: usize, w: usize) {
        self.edges.insert(Self::key(v, w));
    }

    pub fn contains(&self, v: usize, w: usize) -> bool {
        self.edges.contains(&Self::key(v, w))
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// The previous-layer position of `v`'s inner segment, if `v` is the lower end of one.
fn inner_segment_source(lg: &LayerGraph, v: usize) -> Option<usize> {
    if !lg.is_dummy(v) {
        return None;
    }
    let &u = lg.predecessors(v).first()?;
    lg.is_dummy(u).then(|| lg.order(u))
}

pub fn find_type1_conflicts(lg: &LayerGraph) -> Conflicts {
    let mut conflicts = Conflicts::default();
    let layers = lg.layers();
    if layers.len() <= 2 {
        return conflicts;
    }

    for pair in layers.windows(2) {
        let (prev_layer, layer) = (&pair[0], &pair[1]);
        let Some(last) = layer.len().checked_sub(1) else {
            continue;
        };

        // k0..=k1 is the span of the previous layer enclosed by the last two inner segments.
        let mut k0: usize = 0;
        let mut scan_pos: usize = 0;

        for (l1, &v) in layer.iter().enumerate() {
            let k1 = match inner_segment_source(lg, v) {
                Some(k1) => k1,
                None if l1 == last => prev_layer.len().saturating_sub(1),
                None => continue,
            };

            for &w in &layer[scan_pos..=l1] {
                for &u in lg.predecessors(w) {
                    let k = lg.order(u);
                    if k < k0 || k > k1 {
                        conflicts.insert(u, w);
                    }
                }
            }
            scan_pos = l1 + 1;
            k0 = k1;
        }
    }

    conflicts
}
