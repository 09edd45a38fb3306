use crate::{bounding_extent, Octant, Point3d, Point3f, PointN};

use serde::{Deserialize, Serialize};

/// Relative amount by which the enclosing cube of a point cloud is grown beyond the cloud's bounding box, so that the
/// extreme points pass the strict containment test.
pub const ENCLOSING_PADDING: f64 = 1.0 / 1024.0;

/// Lower bound on the enclosing cube padding, relative to the magnitude of the cloud's coordinates. Keeps degenerate
/// clouds (a single point, or points on a line) from getting a cube too small to subdivide.
pub const MIN_RELATIVE_PADDING: f64 = 1.0 / 65536.0;

/// The cube-shaped region of space covered by one octree node.
///
/// `minimum` is the least corner of the cube, not its center. The geometry is kept in `f64` while the points are `f32`,
/// so the splitting planes of deep nodes almost never coincide with a point coordinate.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
pub struct Cube {
    minimum: Point3d,
    edge_length: f64,
}

impl Default for Cube {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Cube {
    /// The degenerate cube at the origin. It contains no points.
    pub const ZERO: Self = Cube {
        minimum: Point3d::ZERO,
        edge_length: 0.0,
    };

    #[inline]
    pub fn new(minimum: Point3d, edge_length: f64) -> Self {
        Self {
            minimum,
            edge_length,
        }
    }

    #[inline]
    pub fn minimum(&self) -> Point3d {
        self.minimum
    }

    #[inline]
    pub fn edge_length(&self) -> f64 {
        self.edge_length
    }

    /// The corner opposite to `minimum`.
    #[inline]
    pub fn least_upper_bound(&self) -> Point3d {
        self.minimum + Point3d::fill(self.edge_length)
    }

    #[inline]
    pub fn center(&self) -> Point3d {
        self.minimum + Point3d::fill(self.edge_length / 2.0)
    }

    /// Returns `true` iff `p` is strictly inside the cube on every axis. Points lying exactly on any face, including the
    /// faces through `minimum`, are *not* contained.
    #[inline]
    pub fn contains_strict(&self, p: Point3f) -> bool {
        let p = Point3d::from(p);

        self.minimum < p && p < self.least_upper_bound()
    }

    /// The child slot that `p` descends into. A coordinate below the splitting plane of an axis selects the lower half
    /// of that axis, anything else selects the upper half, so a point on a splitting plane goes up.
    ///
    /// The result is only meaningful if `self.contains_strict(p)`.
    #[inline]
    pub fn octant_index(&self, p: Point3f) -> Octant {
        let p = Point3d::from(p);
        let split = self.center();

        Octant::from_bits(p.x() >= split.x(), p.y() >= split.y(), p.z() >= split.z())
    }

    /// The cube of the child in `octant`: half the edge length, offset by that half along each axis whose octant bit is
    /// set.
    #[inline]
    pub fn child(&self, octant: Octant) -> Self {
        let half = self.edge_length / 2.0;
        let [x, y, z] = octant.offset_bits();
        let offset = PointN([
            if x { half } else { 0.0 },
            if y { half } else { 0.0 },
            if z { half } else { 0.0 },
        ]);

        Self::new(self.minimum + offset, half)
    }

    /// A cube around the bounding box of `points`, with an edge length just larger than the longest side of that box.
    /// Every point in `points` is strictly contained by the result.
    ///
    /// The cube is sized from the extents of the box, not from where the box sits, so clouds far from the origin are
    /// enclosed as tightly as clouds around it. It's shifted off the box midpoint by a third of the padding, so a point
    /// in the middle of the box (like the only point of a single-point cloud) doesn't sit on the root's splitting plane.
    ///
    /// Returns `None` if `points` is empty or has a NaN or infinite coordinate.
    pub fn enclosing(points: &[Point3f]) -> Option<Self> {
        if !points.iter().all(|p| p.is_finite()) {
            return None;
        }

        let extent = bounding_extent(points.iter().map(|p| Point3d::from(*p)))?;
        let center = extent.center();
        let half_extent = extent.shape.max_component() / 2.0;

        let mut pad = (half_extent * ENCLOSING_PADDING)
            .max((1.0 + center.abs().max_component()) * MIN_RELATIVE_PADDING);

        // Rounding can still land an extreme point on a face.
        loop {
            let half = half_extent + pad;
            if !half.is_finite() {
                return None;
            }
            let cube = Self::new(center - Point3d::fill(half - pad / 3.0), 2.0 * half);
            if points.iter().all(|p| cube.contains_strict(*p)) {
                return Some(cube);
            }
            pad *= 2.0;
        }
    }
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝
