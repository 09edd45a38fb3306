use serde::{Deserialize, Serialize};

/// One of the eight child slots of an octree node.
///
/// The index packs one bit per axis, `x + 2 * y + 4 * z`, where a bit is 1 when the child lies in the upper half of its
/// parent along that axis:
///
/// ```text
/// 0: (0, 0, 0)   1: (1, 0, 0)   2: (0, 1, 0)   3: (1, 1, 0)
/// 4: (0, 0, 1)   5: (1, 0, 1)   6: (0, 1, 1)   7: (1, 1, 1)
/// ```
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct Octant(u8);

impl Octant {
    pub const NUM_OCTANTS: usize = 8;

    #[inline]
    pub fn from_bits(x: bool, y: bool, z: bool) -> Self {
        Octant(x as u8 | (y as u8) << 1 | (z as u8) << 2)
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.0 as usize
    }

    /// The (x, y, z) half-selection bits of this octant.
    #[inline]
    pub fn offset_bits(&self) -> [bool; 3] {
        [self.0 & 1 != 0, self.0 & 2 != 0, self.0 & 4 != 0]
    }

    /// All octants in index order.
    pub fn all() -> impl Iterator<Item = Octant> {
        (0..Self::NUM_OCTANTS as u8).map(Octant)
    }
}
