//! 3D folding: the shared fold-step algebra and the net validator.
//!
//! Purpose
//! - `step` fixes the geometry of one 90° fold (pivot, rotation, rigid map);
//!   `validate` runs the whole-net overlap check on top of it. The seam
//!   resolver reuses the same step table, so validation and seam geometry
//!   cannot disagree about how a hinge folds.

mod step;
mod validate;

pub use step::{axis_key, hinge_map, hinge_pivot, hinge_rotation, Rigid3};
pub use validate::{validate_net, NetError};
