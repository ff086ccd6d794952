//! Seam records and the adjacency map.
//!
//! Kept small and explicit; `resolve` fills these in.

use crate::net::{Dir, FaceId};

/// One resolved seam on a source face's side: the target face and side it
/// meets on the folded cube, a display color, and whether the two edges run
/// in opposite endpoint order.
///
/// The color is keyed by the source side, so the mirror entry on the target
/// face may carry a different color; the `reversed` flag is shared.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EdgeLink {
    pub face: FaceId,
    pub side: Dir,
    pub color: u32,
    pub reversed: bool,
}

/// Fixed display palette keyed by the side direction (0xRRGGBB).
///
/// One color per direction, independent of the face, stable across runs, so
/// a front-end can paint seams without extra state.
pub fn side_color(side: Dir) -> u32 {
    match side {
        Dir::Top => 0xe53935,
        Dir::Bottom => 0x1e88e5,
        Dir::Left => 0x43a047,
        Dir::Right => 0xfb8c00,
    }
}

/// Seam table of a folded net: face-major, side-minor, `None` = unresolved.
///
/// Built fresh per call; nothing is cached between snapshots.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AdjacencyMap {
    links: [[Option<EdgeLink>; 4]; 6],
}

impl AdjacencyMap {
    /// Link recorded on `face`'s `side`, if any.
    #[inline]
    pub fn get(&self, face: FaceId, side: Dir) -> Option<EdgeLink> {
        self.links.get(face.0).and_then(|row| row[side.index()])
    }

    /// Record `link` on `face`'s `side`. Out-of-range face ids are ignored;
    /// the map is dense over ids 0..=5.
    pub(crate) fn set(&mut self, face: FaceId, side: Dir, link: EdgeLink) {
        if let Some(row) = self.links.get_mut(face.0) {
            row[side.index()] = Some(link);
        }
    }

    /// True if no side of any face is linked.
    pub fn is_empty(&self) -> bool {
        self.links.iter().all(|row| row.iter().all(Option::is_none))
    }

    /// Number of recorded links.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// All recorded links as `(face, side, link)`, face-major, sides in
    /// `Dir::ALL` order.
    pub fn iter(&self) -> impl Iterator<Item = (FaceId, Dir, EdgeLink)> + '_ {
        self.links.iter().enumerate().flat_map(|(f, row)| {
            Dir::ALL
                .into_iter()
                .filter_map(move |side| row[side.index()].map(|l| (FaceId(f), side, l)))
        })
    }
}
