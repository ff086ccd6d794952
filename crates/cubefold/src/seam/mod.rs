//! Seam resolution: which edges meet on the folded cube.
//!
//! Purpose
//! - Turn a validated placement into the edge-pairing facts a front-end
//!   draws: for every face side, the face and side it meets after folding,
//!   a stable display color, and the endpoint orientation.

mod resolve;
mod types;

pub use resolve::{compute_adjacency, folded_corners, resolve_with_tree};
pub use types::{side_color, AdjacencyMap, EdgeLink};

#[cfg(test)]
mod tests;
