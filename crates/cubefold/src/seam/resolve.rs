//! Seam resolution on the folded cube.
//!
//! Purpose
//! - After a net validates, determine which edges of which faces meet on the
//!   cube: walk the fold tree accumulating rigid maps, place every face's
//!   four corners in world space, and match side endpoints within
//!   `CORNER_EPS`.
//!
//! Model
//! - The fold is simulated once at the final angle (90° per hinge); no
//!   intermediate poses. Matching is O(faces² × sides²) over 6 faces, which
//!   is nothing. A closed cube claims all 24 side slots as 12 symmetric
//!   pairs (5 hinge seams from the tree plus 7 closing seams); the resolver
//!   reports what matching finds rather than enforcing that count.

use nalgebra::Vector3;

use super::types::{side_color, AdjacencyMap, EdgeLink};
use crate::cfg::CORNER_EPS;
use crate::fold::{hinge_map, validate_net, Rigid3};
use crate::net::{build_fold_tree, Dir, FaceId, FoldNode, Placement};

/// Face corners in the local frame, in winding order TL, TR, BR, BL.
fn local_corners() -> [Vector3<f64>; 4] {
    [
        Vector3::new(-0.5, 0.5, 0.0),
        Vector3::new(0.5, 0.5, 0.0),
        Vector3::new(0.5, -0.5, 0.0),
        Vector3::new(-0.5, -0.5, 0.0),
    ]
}

/// Side endpoints as indices into the corner array, following the winding:
/// top = (TL, TR), right = (TR, BR), bottom = (BR, BL), left = (BL, TL).
fn side_corner_ids(side: Dir) -> (usize, usize) {
    match side {
        Dir::Top => (0, 1),
        Dir::Right => (1, 2),
        Dir::Bottom => (2, 3),
        Dir::Left => (3, 0),
    }
}

#[inline]
fn coincide(p: Vector3<f64>, q: Vector3<f64>) -> bool {
    (p - q).norm() < CORNER_EPS
}

/// Match two sides by endpoints: `Some(false)` if aligned, `Some(true)` if
/// they coincide with endpoints swapped, `None` otherwise.
pub(crate) fn match_side(
    a: (Vector3<f64>, Vector3<f64>),
    b: (Vector3<f64>, Vector3<f64>),
) -> Option<bool> {
    if coincide(a.0, b.0) && coincide(a.1, b.1) {
        Some(false)
    } else if coincide(a.0, b.1) && coincide(a.1, b.0) {
        Some(true)
    } else {
        None
    }
}

/// World-space corners of every face after folding, indexed by face id.
///
/// The tree walk composes one `hinge_map` per edge; the root face keeps its
/// local coordinates. Ids outside 0..faces.len() are skipped, and ids the
/// tree never visits keep zeroed corners; neither happens for a tree built
/// from the same placements.
pub fn folded_corners(faces: &[Placement], tree: &FoldNode) -> Vec<[Vector3<f64>; 4]> {
    let mut corners = vec![[Vector3::zeros(); 4]; faces.len()];
    walk(tree, Rigid3::identity(), &mut corners);
    corners
}

fn walk(node: &FoldNode, to_world: Rigid3, corners: &mut [[Vector3<f64>; 4]]) {
    if let Some(slot) = corners.get_mut(node.face.0) {
        for (k, c) in local_corners().iter().enumerate() {
            slot[k] = to_world.apply(*c);
        }
    }
    for child in &node.children {
        if let Some(d) = child.hinge {
            walk(child, to_world.compose(&hinge_map(d)), corners);
        }
    }
}

/// Resolve seams for `faces` folded along `tree`.
///
/// Layered entry point below `compute_adjacency`: no validity gate, so it
/// also answers "what touches what" for nets that do not close. Every
/// coincident side pair is recorded in both directions with the source
/// side's color and the shared `reversed` flag.
pub fn resolve_with_tree(faces: &[Placement], tree: &FoldNode) -> AdjacencyMap {
    let corners = folded_corners(faces, tree);
    let n = corners.len();
    let mut map = AdjacencyMap::default();
    for a in 0..n {
        for b in 0..n {
            if a == b {
                continue;
            }
            for sa in Dir::ALL {
                let (a0, a1) = side_corner_ids(sa);
                let ea = (corners[a][a0], corners[a][a1]);
                if coincide(ea.0, ea.1) {
                    // Zero-length side: an id the tree never placed.
                    continue;
                }
                for sb in Dir::ALL {
                    let (b0, b1) = side_corner_ids(sb);
                    let eb = (corners[b][b0], corners[b][b1]);
                    if let Some(reversed) = match_side(ea, eb) {
                        map.set(
                            FaceId(a),
                            sa,
                            EdgeLink {
                                face: FaceId(b),
                                side: sb,
                                color: side_color(sa),
                                reversed,
                            },
                        );
                    }
                }
            }
        }
    }
    #[cfg(debug_assertions)]
    if std::env::var_os("CUBEFOLD_DEBUG_SEAM").is_some() {
        for a in 0..n {
            for side in Dir::ALL {
                if map.get(FaceId(a), side).is_none() {
                    eprintln!("unmatched side (face={a}, side={side:?})");
                }
            }
        }
    }
    map
}

/// Full seam table of a placement: empty unless the net validates.
///
/// The gate keeps the output honest: a map is only nonempty when the six
/// faces actually close into a cube.
pub fn compute_adjacency(faces: &[Placement]) -> AdjacencyMap {
    if validate_net(faces).is_err() {
        return AdjacencyMap::default();
    }
    match build_fold_tree(faces) {
        Some(tree) => resolve_with_tree(faces, &tree),
        None => AdjacencyMap::default(),
    }
}
