use super::{Conflicts, LayerGraph};
use crate::config::Alignment;

/// Block structure produced by one alignment pass.
///
/// `align` links the members of a block into a ring: following it from any node walks the block
/// top to bottom (in pass order) and returns to the block's `root`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockAlignment {
    /// Position of each node inside its layer, in the pass's horizontal order.
    pub pos: Vec<usize>,
    pub root: Vec<usize>,
    pub align: Vec<usize>,
}

impl BlockAlignment {
    /// Members of the block rooted at `root`, starting with the root.
    pub fn block(&self, root: usize) -> Vec<usize> {
        let mut out = vec![root];
        let mut w = self.align[root];
        while w != root {
            out.push(w);
            w = self.align[w];
        }
        out
    }
}

pub fn vertical_alignment(lg: &LayerGraph, conflicts: &Conflicts, dir: Alignment) -> BlockAlignment {
    let n = lg.len();
    let mut root: Vec<usize> = (0..n).collect();
    let mut align: Vec<usize> = (0..n).collect();
    let pos: Vec<usize> = (0..n).map(|v| lg.position(v, dir)).collect();

    let layers = lg.layers();
    let mut ws: Vec<usize> = Vec::new();
    for r in lg.rank_sequence(dir) {
        let layer = &layers[r];
        let mut prev_idx: Option<usize> = None;
        for i in 0..layer.len() {
            let v = lg.at(layer, i, dir);
            ws.clear();
            ws.extend_from_slice(lg.neighbors(v, dir));
            if ws.is_empty() {
                continue;
            }
            ws.sort_by_key(|&w| pos[w]);

            // One median for an odd count, the two middle neighbors for an even count.
            let lo = (ws.len() - 1) / 2;
            let hi = ws.len() / 2;
            for &w in &ws[lo..=hi] {
                if align[v] != v {
                    break;
                }
                let monotone = prev_idx.is_none_or(|p| p < pos[w]);
                if monotone && !conflicts.contains(v, w) {
                    align[w] = v;
                    root[v] = root[w];
                    align[v] = root[v];
                    prev_idx = Some(pos[w]);
                }
            }
        }
    }

    BlockAlignment { pos, root, align }
}
