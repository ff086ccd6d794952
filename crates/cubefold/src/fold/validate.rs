//! Net validation: does the placement fold into a cube without overlap?
//!
//! Purpose
//! - The full verdict behind an editor's "fold" action: face count,
//!   connectivity, then the overlap check by simulated folding.
//!
//! Model
//! - BFS from the first face in input order, neighbors claimed in
//!   `Dir::ALL` order. Each traversed grid edge multiplies the parent's
//!   cumulative rotation by the hinge rotation for that direction
//!   (`step::hinge_rotation`); the face's folded normal is the rotated +z
//!   axis, rounded to an integer axis key. Six faces on six distinct keys
//!   fold into the cube; a repeated key means two faces land on the same
//!   cube side, reported as the first collision in traversal order.

use std::collections::{HashMap, VecDeque};
use std::fmt;

use nalgebra::{Matrix3, Vector3};

use super::step::{axis_key, hinge_rotation};
use crate::net::{is_connected, Dir, FaceId, Placement};

/// Reasons a placement fails to fold into a cube.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NetError {
    /// A cube needs exactly six faces.
    FaceCount { found: usize },
    /// The faces do not form one edge-connected component.
    Disconnected,
    /// Two faces fold onto the same cube side; `first` was visited earlier.
    Collision { first: FaceId, second: FaceId },
}

impl fmt::Display for NetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetError::FaceCount { found } => {
                write!(f, "a cube net needs exactly 6 faces, found {found}")
            }
            NetError::Disconnected => write!(f, "faces are not edge-connected"),
            NetError::Collision { first, second } => write!(
                f,
                "faces {} and {} fold onto the same cube side",
                first.0, second.0
            ),
        }
    }
}

impl std::error::Error for NetError {}

/// Validate that `faces` folds into a cube.
///
/// Deterministic for a given input slice: the BFS order is fixed, so the
/// same invalid input always names the same colliding pair.
pub fn validate_net(faces: &[Placement]) -> Result<(), NetError> {
    if faces.len() != 6 {
        return Err(NetError::FaceCount {
            found: faces.len(),
        });
    }
    if !is_connected(faces) {
        return Err(NetError::Disconnected);
    }
    let n = faces.len();
    let mut orient = vec![Matrix3::identity(); n];
    let mut visited = vec![false; n];
    let mut seen: HashMap<(i8, i8, i8), FaceId> = HashMap::with_capacity(n);
    let mut queue = VecDeque::new();
    visited[0] = true;
    seen.insert(axis_key(Vector3::z()), faces[0].face);
    queue.push_back(0usize);
    while let Some(i) = queue.pop_front() {
        for d in Dir::ALL {
            for j in 0..n {
                if visited[j] || faces[i].dir_to(&faces[j]) != Some(d) {
                    continue;
                }
                visited[j] = true;
                let o = orient[i] * hinge_rotation(d);
                orient[j] = o;
                let key = axis_key(o * Vector3::z());
                if let Some(&first) = seen.get(&key) {
                    return Err(NetError::Collision {
                        first,
                        second: faces[j].face,
                    });
                }
                seen.insert(key, faces[j].face);
                queue.push_back(j);
            }
        }
    }
    Ok(())
}
