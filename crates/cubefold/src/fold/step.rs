//! The shared fold-step primitive.
//!
//! Purpose
//! - One table of hinge pivots and exact 90° rotations, consumed by both the
//!   validator (rotation part only) and the seam resolver (full rigid map).
//!   A single source keeps the two from drifting apart.
//!
//! Frames
//! - Grid: y grows downward (`Dir::Top` steps by (0, -1)).
//! - Local 3D face frame: x right, y up, z toward the viewer; a face is the
//!   unit square [-0.5, 0.5]² in its z = 0 plane. A child folds to the -z
//!   side, underneath the flat sheet, so a valid net closes into the cube
//!   occupying z ∈ [-1, 0].

use nalgebra::{Matrix3, Vector3};

use crate::cfg::AXIS_EPS;
use crate::net::Dir;

/// Rigid map `x ↦ R x + t` with explicit parts and manual composition.
#[derive(Clone, Copy, Debug)]
pub struct Rigid3 {
    pub r: Matrix3<f64>,
    pub t: Vector3<f64>,
}

impl Rigid3 {
    #[inline]
    pub fn identity() -> Self {
        Self {
            r: Matrix3::identity(),
            t: Vector3::zeros(),
        }
    }
    #[inline]
    pub fn apply(&self, p: Vector3<f64>) -> Vector3<f64> {
        self.r * p + self.t
    }
    /// `self ∘ other`: apply `other` first, then `self`.
    #[inline]
    pub fn compose(&self, other: &Rigid3) -> Rigid3 {
        Rigid3 {
            r: self.r * other.r,
            t: self.r * other.t + self.t,
        }
    }
}

/// Rotation part of one 90° fold across the hinge on side `dir`.
///
/// Entries are exact (0 and ±1 only), so cumulative products never drift and
/// rounded normals stay bit-exact unit axes. Signs realize the frame-update
/// rules of the fold (n = normal, u = up):
/// - top:    n' = u,        u' = -n
/// - bottom: n' = -u,       u' = n
/// - right:  n' = u × n,    u' = u
/// - left:   n' = -(u × n), u' = u
///
/// With O = [right | up | normal] as columns these read O' = O · R(dir).
#[rustfmt::skip]
pub fn hinge_rotation(dir: Dir) -> Matrix3<f64> {
    match dir {
        // R_x(-90°)
        Dir::Top => Matrix3::new(
            1.0, 0.0, 0.0,
            0.0, 0.0, 1.0,
            0.0, -1.0, 0.0,
        ),
        // R_x(+90°)
        Dir::Bottom => Matrix3::new(
            1.0, 0.0, 0.0,
            0.0, 0.0, -1.0,
            0.0, 1.0, 0.0,
        ),
        // R_y(+90°)
        Dir::Right => Matrix3::new(
            0.0, 0.0, 1.0,
            0.0, 1.0, 0.0,
            -1.0, 0.0, 0.0,
        ),
        // R_y(-90°)
        Dir::Left => Matrix3::new(
            0.0, 0.0, -1.0,
            0.0, 1.0, 0.0,
            1.0, 0.0, 0.0,
        ),
    }
}

/// Hinge pivot: midpoint of the face side `dir` in the local y-up frame.
///
/// Note the y flip between frames: the grid-top neighbor hinges on the
/// local +y edge.
pub fn hinge_pivot(dir: Dir) -> Vector3<f64> {
    match dir {
        Dir::Top => Vector3::new(0.0, 0.5, 0.0),
        Dir::Bottom => Vector3::new(0.0, -0.5, 0.0),
        Dir::Left => Vector3::new(-0.5, 0.0, 0.0),
        Dir::Right => Vector3::new(0.5, 0.0, 0.0),
    }
}

/// Full rigid map of one fold step: child-local coordinates into the parent
/// frame, folded 90° under the parent across their shared edge.
///
/// Flat, the child sits one unit toward `dir`, i.e. translated by twice the
/// pivot; rotating that configuration about the shared edge gives
/// `x ↦ p + R(x + p)` with `p = hinge_pivot(dir)` and `R =
/// hinge_rotation(dir)`, composed here into a single `Rigid3`.
pub fn hinge_map(dir: Dir) -> Rigid3 {
    let r = hinge_rotation(dir);
    let p = hinge_pivot(dir);
    Rigid3 { r, t: p + r * p }
}

/// Round a folded normal to its integer axis key.
///
/// Fold states only ever produce the six unit axis vectors; the key is the
/// exact (i8, i8, i8) triple, usable as a hash key for collision checks.
pub fn axis_key(n: Vector3<f64>) -> (i8, i8, i8) {
    debug_assert!(
        n.iter()
            .all(|c| c.abs() < AXIS_EPS || (c.abs() - 1.0).abs() < AXIS_EPS),
        "normal must stay an axis unit vector, got {n:?}"
    );
    (n.x.round() as i8, n.y.round() as i8, n.z.round() as i8)
}
