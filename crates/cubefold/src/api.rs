//! Curated flat re-exports for collaborating crates (UNSTABLE).
//!
//! Important
//! - This is a convenience surface for the editor/renderer collaborators,
//!   not a stable public API. Breaking changes are allowed and expected.
//! - Prefer these re-exports for clarity and consistency across callers.

// Grid side
pub use crate::net::rand::{draw_net_growth, GrowthCfg, ReplayToken};
pub use crate::net::{
    build_fold_tree, centroid_root, is_connected, Dir, FaceId, FoldNode, Placement,
};
// Folding
pub use crate::fold::{
    axis_key, hinge_map, hinge_pivot, hinge_rotation, validate_net, NetError, Rigid3,
};
// Seams
pub use crate::seam::{
    compute_adjacency, folded_corners, resolve_with_tree, side_color, AdjacencyMap, EdgeLink,
};
