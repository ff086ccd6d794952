//! Connectivity check over 4-neighbor grid adjacency.
//!
//! Purpose
//! - Decide whether the placed faces form one edge-connected component. This
//!   is the cheap gate an editor runs on every placement change, ahead of
//!   full fold validation.

use std::collections::VecDeque;

use super::types::Placement;

/// True iff all placements form a single edge-connected component.
///
/// Empty and singleton slices count as connected. Faces at Manhattan
/// distance 1 are neighbors; duplicates on one cell are not adjacent to each
/// other but can still be reached through a shared neighbor. O(n²) pair
/// scanning, which is fine at n = 6.
pub fn is_connected(faces: &[Placement]) -> bool {
    if faces.len() <= 1 {
        return true;
    }
    let mut visited = vec![false; faces.len()];
    let mut queue = VecDeque::new();
    visited[0] = true;
    queue.push_back(0usize);
    let mut seen = 1usize;
    while let Some(i) = queue.pop_front() {
        for j in 0..faces.len() {
            if !visited[j] && faces[i].dir_to(&faces[j]).is_some() {
                visited[j] = true;
                seen += 1;
                queue.push_back(j);
            }
        }
    }
    seen == faces.len()
}
