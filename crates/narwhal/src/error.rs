#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    #[error("{name} must be a finite, non-negative number (got {value})")]
    InvalidSeparation { name: &'static str, value: f64 },
    #[error("unknown rank direction: {0}")]
    UnknownRankDir(String),
    #[error("unknown alignment: {0}")]
    UnknownAlignment(String),
    #[error("rank {rank} has no nodes but later ranks do")]
    RankGap { rank: usize },
    #[error("rank {rank} expected a node with order {expected}, found order {found} on {node}")]
    OrderGap {
        rank: usize,
        expected: usize,
        found: usize,
        node: String,
    },
    #[error("nodes {first} and {second} share order {order} in rank {rank}")]
    DuplicateOrder {
        rank: usize,
        order: usize,
        first: String,
        second: String,
    },
    #[error("edge {v} -> {w} does not join adjacent ranks ({v_rank} -> {w_rank})")]
    NonAdjacentEdge {
        v: String,
        w: String,
        v_rank: usize,
        w_rank: usize,
    },
    #[error("dummy node {node} must have exactly one predecessor and one successor")]
    MalformedDummyChain { node: String },
}

pub type Result<T> = std::result::Result<T, Error>;
