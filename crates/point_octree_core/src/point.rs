use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use serde::{Deserialize, Serialize};

/// A point, which is just a primitive array of type `N`. For point clouds, the only dimensionality in use is
/// `Point3f = PointN<[f32; 3]>`, constructed as:
///
/// ```
/// use point_octree_core::PointN;
///
/// let p = PointN([1.0, 2.0, 3.0]);
/// ```
///
/// Points support basic linear algebraic operations such as addition, subtraction, scalar multiplication, and scalar
/// division.
///
/// ```
/// use point_octree_core::PointN;
///
/// let p1 = PointN([1.0, 2.0, 3.0]);
/// let p2 = PointN([3.0, 4.0, 5.0]);
///
/// assert_eq!(p1 + p2, PointN([4.0, 6.0, 8.0]));
/// assert_eq!(p2 - p1, PointN([2.0, 2.0, 2.0]));
/// assert_eq!(p1 * 2.0, PointN([2.0, 4.0, 6.0]));
/// ```
///
/// There is also a partial order defined on points which says that a point A is greater than a point B if and only if
/// all of the components of point A are greater than point B. This is how the open-box containment test of an octree
/// node is written:
///
/// ```
/// use point_octree_core::PointN;
///
/// let min = PointN([0.0, 0.0, 0.0]);
/// let max = PointN([3.0, 3.0, 3.0]);
///
/// let p = PointN([0.5, 1.0, 2.0]);
/// assert!(min < p && p < max);
/// ```
#[derive(Copy, Clone, Debug, Deserialize, Default, PartialEq, Serialize)]
pub struct PointN<N>(pub N);

impl<N> Neg for PointN<N>
where
    N: Copy,
    PointN<N>: Sub<Output = Self> + Default,
{
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self::default() - self
    }
}

impl<N> AddAssign for PointN<N>
where
    N: Copy,
    PointN<N>: Add<Output = Self>,
{
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<N> SubAssign for PointN<N>
where
    N: Copy,
    PointN<N>: Sub<Output = Self>,
{
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}
