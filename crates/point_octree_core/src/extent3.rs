use crate::Point3;

use num::Float;
use serde::{Deserialize, Serialize};

/// An axis-aligned box with a minimum point and a shape. Unlike an octree `Cube`, the shape can differ per axis; this
/// is what a raw point cloud spans before it's fit into a cube.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
pub struct Extent3<T> {
    /// The least point contained in the extent.
    pub minimum: Point3<T>,
    /// The length of each dimension.
    pub shape: Point3<T>,
}

/// An extent of `f32` points, like the ones in a point cloud.
pub type Extent3f = Extent3<f32>;

impl<T> Extent3<T>
where
    T: Float,
{
    #[inline]
    pub fn from_min_and_shape(minimum: Point3<T>, shape: Point3<T>) -> Self {
        Self { minimum, shape }
    }

    /// Negative shape components are clamped to zero.
    #[inline]
    pub fn from_min_and_max(minimum: Point3<T>, max: Point3<T>) -> Self {
        Self {
            minimum,
            shape: (max - minimum).join(Point3::fill(T::zero())),
        }
    }

    /// The greatest point in the extent.
    #[inline]
    pub fn max(&self) -> Point3<T> {
        self.minimum + self.shape
    }

    /// The midpoint of the minimum and maximum.
    #[inline]
    pub fn center(&self) -> Point3<T> {
        (self.minimum + self.max()) / (T::one() + T::one())
    }

    /// Returns `true` iff `p` is inside or on the boundary.
    #[inline]
    pub fn contains(&self, p: Point3<T>) -> bool {
        self.minimum <= p && p <= self.max()
    }
}

/// Returns the smallest extent containing all of the given points, or `None` if there are no points.
#[inline]
pub fn bounding_extent<T, I>(mut points: I) -> Option<Extent3<T>>
where
    T: Float,
    I: Iterator<Item = Point3<T>>,
{
    let first_point = points.next()?;

    let mut min_point = first_point;
    let mut max_point = first_point;
    for p in points {
        min_point = min_point.meet(p);
        max_point = max_point.join(p);
    }

    Some(Extent3::from_min_and_max(min_point, max_point))
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝
