//! Grid-level data types for cube nets.
//!
//! Kept small and explicit to make `connect` and `tree` easy to read.

/// Identifier of a placed face. Ids are dense input positions (0..=5 for a
/// full net); the seam tables index by them directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FaceId(pub usize);

/// Grid step and face-side label.
///
/// The grid frame is screen-like: y grows downward, so `Top` steps by
/// (0, -1). The same four labels name the sides of a face (its top edge and
/// so on); the folding code relies on the two roles agreeing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dir {
    Top,
    Bottom,
    Left,
    Right,
}

impl Dir {
    /// All directions in the fixed traversal order used by every
    /// breadth-first pass in this crate. Reordering would change which
    /// collision gets reported first.
    pub const ALL: [Dir; 4] = [Dir::Top, Dir::Bottom, Dir::Left, Dir::Right];

    /// Grid offset of one step in this direction (y-down frame).
    #[inline]
    pub fn offset(self) -> (i32, i32) {
        match self {
            Dir::Top => (0, -1),
            Dir::Bottom => (0, 1),
            Dir::Left => (-1, 0),
            Dir::Right => (1, 0),
        }
    }

    #[inline]
    pub fn opposite(self) -> Dir {
        match self {
            Dir::Top => Dir::Bottom,
            Dir::Bottom => Dir::Top,
            Dir::Left => Dir::Right,
            Dir::Right => Dir::Left,
        }
    }

    /// Dense index for 4-slot side tables (Top=0, Bottom=1, Left=2, Right=3).
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Dir::Top => 0,
            Dir::Bottom => 1,
            Dir::Left => 2,
            Dir::Right => 3,
        }
    }
}

/// One face of a candidate net placed on the integer grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Placement {
    pub face: FaceId,
    pub x: i32,
    pub y: i32,
}

impl Placement {
    #[inline]
    pub fn new(face: usize, x: i32, y: i32) -> Self {
        Self {
            face: FaceId(face),
            x,
            y,
        }
    }

    /// Direction from `self` to `other` if the two cells share an edge
    /// (Manhattan distance exactly 1), else `None`. Duplicate coordinates
    /// (distance 0) are not adjacent.
    pub fn dir_to(&self, other: &Placement) -> Option<Dir> {
        let step = (other.x - self.x, other.y - self.y);
        Dir::ALL.into_iter().find(|d| d.offset() == step)
    }
}
