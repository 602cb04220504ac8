//! Layer matrix construction and well-formedness checks.
//!
//! Positioning trusts the ranking/ordering stage: ranks are contiguous from 0, orders are
//! contiguous and unique inside a rank, and every edge joins adjacent ranks. `position` never
//! checks this; callers that want a typed error instead of an unspecified layout can run
//! [`validate_layering`] first.

use crate::error::{Error, Result};
use crate::LayoutGraph;

/// Groups node ids by rank, each layer sorted by `order`. Ties keep insertion order.
pub fn build_layer_matrix(g: &LayoutGraph) -> Vec<Vec<String>> {
    let mut layers: Vec<Vec<(usize, String)>> = Vec::new();
    g.for_each_node(|id, node| {
        if node.rank >= layers.len() {
            layers.resize_with(node.rank + 1, Vec::new);
        }
        layers[node.rank].push((node.order, id.to_string()));
    });

    layers
        .into_iter()
        .map(|mut layer| {
            layer.sort_by_key(|(o, _)| *o);
            layer.into_iter().map(|(_, id)| id).collect()
        })
        .collect()
}

pub fn validate_layering(g: &LayoutGraph) -> Result<()> {
    let layering = build_layer_matrix(g);

    for (rank, layer) in layering.iter().enumerate() {
        if layer.is_empty() {
            return Err(Error::RankGap { rank });
        }
        let mut prev: Option<&str> = None;
        for (expected, id) in layer.iter().enumerate() {
            let order = g.node(id).map(|n| n.order).unwrap_or(expected);
            if order != expected {
                if let Some(prev) = prev.filter(|_| order + 1 == expected) {
                    return Err(Error::DuplicateOrder {
                        rank,
                        order,
                        first: prev.to_string(),
                        second: id.clone(),
                    });
                }
                return Err(Error::OrderGap {
                    rank,
                    expected,
                    found: order,
                    node: id.clone(),
                });
            }
            prev = Some(id);
        }
    }

    for e in g.edges() {
        let (Some(v), Some(w)) = (g.node(&e.v), g.node(&e.w)) else {
            continue;
        };
        if w.rank != v.rank + 1 {
            return Err(Error::NonAdjacentEdge {
                v: e.v.clone(),
                w: e.w.clone(),
                v_rank: v.rank,
                w_rank: w.rank,
            });
        }
    }

    for id in g.nodes() {
        if !g.node(id).is_some_and(|n| n.dummy) {
            continue;
        }
        if g.predecessors(id).len() != 1 || g.successors(id).len() != 1 {
            return Err(Error::MalformedDummyChain {
                node: id.to_string(),
            });
        }
    }

    Ok(())
}
