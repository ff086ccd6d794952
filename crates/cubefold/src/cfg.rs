//! Tolerance defaults for folding and seam matching (internal).
//!
//! Policy
//! - Fixed constants, not knobs. The grid is integral and every fold is an
//!   exact 90° turn, so the only slack needed covers accumulated f64
//!   round-off. If a caller ever needs different tolerances we can thread a
//!   small config through without changing call sites broadly.

/// Corner-coincidence epsilon for matching folded edge endpoints in world space.
pub(crate) const CORNER_EPS: f64 = 0.01;
/// Tolerance for the "rotated normal is still a unit axis vector" invariant.
pub(crate) const AXIS_EPS: f64 = 1e-9;
