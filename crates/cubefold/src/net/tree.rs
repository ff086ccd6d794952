//! Fold-tree construction: root choice and hinge hierarchy.
//!
//! Purpose
//! - Fix, per snapshot, which face stays put and how every other face hangs
//!   off it. The tree is the shared input of the 3D fold simulation and of
//!   any fold animation a front-end drives; building it in one place keeps
//!   the hinge hierarchy identical everywhere.
//!
//! Model
//! - Root: the placement closest (Euclidean) to the centroid of all
//!   placements, ties broken by input order. Rooting near the middle keeps
//!   subtrees shallow and the folding motion balanced.
//! - Attach: BFS over grid adjacency; an unvisited neighbor becomes a child
//!   labeled with the direction from its parent. Neighbors are claimed in
//!   `Dir::ALL` order, then input order, so the tree is deterministic for a
//!   given input slice.

use std::collections::VecDeque;

use super::types::{Dir, FaceId, Placement};

/// Node of the fold tree.
///
/// `hinge` is the grid direction from the parent to this face (`None` at the
/// root). Children own their subtrees; a tree built from a connected
/// placement lists every face exactly once.
#[derive(Clone, Debug, PartialEq)]
pub struct FoldNode {
    pub face: FaceId,
    pub hinge: Option<Dir>,
    pub depth: u32,
    pub children: Vec<FoldNode>,
}

impl FoldNode {
    /// Number of nodes in this subtree.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(FoldNode::count).sum::<usize>()
    }
}

/// Index of the placement closest to the centroid, first-minimal on ties.
///
/// Exposed separately so tests and diagnostics can pin the root choice
/// without building a tree.
pub fn centroid_root(faces: &[Placement]) -> Option<usize> {
    if faces.is_empty() {
        return None;
    }
    let n = faces.len() as f64;
    let cx = faces.iter().map(|p| p.x as f64).sum::<f64>() / n;
    let cy = faces.iter().map(|p| p.y as f64).sum::<f64>() / n;
    let mut best = 0usize;
    let mut best_d2 = f64::INFINITY;
    for (i, p) in faces.iter().enumerate() {
        let dx = p.x as f64 - cx;
        let dy = p.y as f64 - cy;
        let d2 = dx * dx + dy * dy;
        if d2 < best_d2 {
            best = i;
            best_d2 = d2;
        }
    }
    Some(best)
}

/// Build the fold tree for `faces`.
///
/// Returns `None` only for an empty slice. On disconnected input the tree
/// covers the root's component; callers that need the whole net checked run
/// `is_connected` (or full validation) first.
pub fn build_fold_tree(faces: &[Placement]) -> Option<FoldNode> {
    let root = centroid_root(faces)?;
    let mut hinge: Vec<Option<Dir>> = vec![None; faces.len()];
    let mut children: Vec<Vec<usize>> = vec![Vec::new(); faces.len()];
    let mut visited = vec![false; faces.len()];
    let mut queue = VecDeque::new();
    visited[root] = true;
    queue.push_back(root);
    while let Some(i) = queue.pop_front() {
        for d in Dir::ALL {
            for j in 0..faces.len() {
                if !visited[j] && faces[i].dir_to(&faces[j]) == Some(d) {
                    visited[j] = true;
                    hinge[j] = Some(d);
                    children[i].push(j);
                    queue.push_back(j);
                }
            }
        }
    }
    Some(assemble(faces, &hinge, &children, root, 0))
}

fn assemble(
    faces: &[Placement],
    hinge: &[Option<Dir>],
    children: &[Vec<usize>],
    i: usize,
    depth: u32,
) -> FoldNode {
    FoldNode {
        face: faces[i].face,
        hinge: hinge[i],
        depth,
        children: children[i]
            .iter()
            .map(|&c| assemble(faces, hinge, children, c, depth + 1))
            .collect(),
    }
}
