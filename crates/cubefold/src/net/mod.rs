//! Flat-grid side of the model.
//!
//! Purpose
//! - Everything that happens before any 3D reasoning: the grid vocabulary
//!   (`FaceId`, `Dir`, `Placement`), the connectivity gate, the fold-tree
//!   builder, and a reproducible net sampler for tests and benches.
//!
//! Why this split
//! - The 2D questions (connected? who hinges on whom?) are answerable and
//!   testable without touching rotations; `fold` and `seam` build on top.

pub mod rand;

mod connect;
mod tree;
mod types;

pub use connect::is_connected;
pub use tree::{build_fold_tree, centroid_root, FoldNode};
pub use types::{Dir, FaceId, Placement};
