//! Cube-net folding core.
//!
//! A pure geometric library: callers place six unit faces on a 2D grid and
//! ask (a) whether the placement is edge-connected, (b) whether it folds
//! into a cube, (c) what the hinge hierarchy is, and (d) which edges meet on
//! the folded cube and in which orientation. No rendering, no persistence,
//! no input handling; every operation is a pure function over a placement
//! snapshot, so calls are cheap to repeat and safe to run concurrently.

pub mod api;
pub mod fold;
pub mod net;
pub mod seam;

mod cfg;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Convenience re-exports for callers that talk nalgebra.
pub use nalgebra::{Matrix3 as Mat3, Vector3 as Vec3};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::fold::{validate_net, NetError, Rigid3};
    pub use crate::net::rand::{draw_net_growth, GrowthCfg, ReplayToken};
    pub use crate::net::{build_fold_tree, is_connected, Dir, FaceId, FoldNode, Placement};
    pub use crate::seam::{compute_adjacency, folded_corners, AdjacencyMap, EdgeLink};
    pub use nalgebra::{Matrix3 as Mat3, Vector3 as Vec3};
}
