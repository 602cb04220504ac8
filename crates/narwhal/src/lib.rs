#![forbid(unsafe_code)]

//! Coordinate assignment for rank-layered graphs.
//!
//! Given a graph whose nodes already carry a rank (layer) and an order (position inside the
//! layer), `narwhal` computes node centers: Brandes & Köpf's horizontal coordinate assignment
//! along each rank, followed by rank-to-row placement across ranks. Ranking, crossing
//! minimization and rendering belong to the caller.
//!
//! ```
//! use narwhal::{LayoutGraph, NodeLabel, PositionConfig};
//!
//! let mut g = LayoutGraph::new();
//! g.set_node("a", NodeLabel::new(0, 0).with_size(50.0, 50.0));
//! g.set_node("b", NodeLabel::new(1, 0).with_size(50.0, 50.0));
//! g.set_edge("a", "b");
//!
//! narwhal::position(&mut g, &PositionConfig::default());
//! assert_eq!(g.node("b").unwrap().y, Some(105.0));
//! ```

pub use narwhal_graphlib as graphlib;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod axis;
pub mod config;
pub mod error;
pub mod layering;
pub mod model;
pub mod position;
pub mod util;

pub use axis::Axis;
pub use config::{Alignment, PositionConfig, RankDir};
pub use error::{Error, Result};
pub use model::{LayoutGraph, NodeLabel};
pub use position::position;
