use crate::PointN;

use core::ops::{Add, Div, Mul, Sub};
use num::Float;
use std::cmp::Ordering;

/// A 3-dimensional point with scalar type `T`.
pub type Point3<T> = PointN<[T; 3]>;
/// A 3-dimensional point with scalar type `f32`. Point clouds are made of these.
pub type Point3f = PointN<[f32; 3]>;
/// A 3-dimensional point with scalar type `f64`. Octree cube geometry is computed with these, so splitting planes have
/// more precision than the points they separate.
pub type Point3d = PointN<[f64; 3]>;

impl Point3f {
    pub const ZERO: Self = PointN([0.0; 3]);
}

impl Point3d {
    pub const ZERO: Self = PointN([0.0; 3]);
}

impl<T> Point3<T>
where
    T: Copy,
{
    /// A point with every component equal to `value`.
    #[inline]
    pub fn fill(value: T) -> Self {
        PointN([value; 3])
    }

    #[inline]
    pub fn x(&self) -> T {
        self.0[0]
    }

    #[inline]
    pub fn y(&self) -> T {
        self.0[1]
    }

    #[inline]
    pub fn z(&self) -> T {
        self.0[2]
    }

    /// Returns the point after applying `f` component-wise.
    #[inline]
    pub fn map_components(&self, f: impl Fn(T) -> T) -> Self {
        PointN([f(self.x()), f(self.y()), f(self.z())])
    }
}

impl<T> Point3<T>
where
    T: Copy + PartialEq,
{
    /// Exact equality on every component. This is how points are matched during lookup and deletion; no tolerance is
    /// applied, so points produced by different floating point computations may not match.
    #[inline]
    pub fn coincides_with(&self, other: &Self) -> bool {
        self.x() == other.x() && self.y() == other.y() && self.z() == other.z()
    }
}

impl<T> Point3<T>
where
    T: Float,
{
    /// Component-wise minimum.
    #[inline]
    pub fn meet(&self, other: Self) -> Self {
        PointN([
            self.x().min(other.x()),
            self.y().min(other.y()),
            self.z().min(other.z()),
        ])
    }

    /// Component-wise maximum.
    #[inline]
    pub fn join(&self, other: Self) -> Self {
        PointN([
            self.x().max(other.x()),
            self.y().max(other.y()),
            self.z().max(other.z()),
        ])
    }

    #[inline]
    pub fn abs(&self) -> Self {
        self.map_components(T::abs)
    }

    #[inline]
    pub fn max_component(&self) -> T {
        self.x().max(self.y()).max(self.z())
    }

    /// Returns `true` iff no component is NaN or infinite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|c| c.is_finite())
    }
}

// This particular partial order allows us to say that a `Cube` c strictly contains a point p iff p is GT the minimum
// of c and LT its least upper bound.
impl<T> PartialOrd for Point3<T>
where
    T: Copy + PartialOrd,
{
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self < other {
            Some(Ordering::Less)
        } else if self > other {
            Some(Ordering::Greater)
        } else if self.x() == other.x() && self.y() == other.y() && self.z() == other.z() {
            Some(Ordering::Equal)
        } else {
            None
        }
    }

    #[inline]
    fn lt(&self, other: &Self) -> bool {
        self.x() < other.x() && self.y() < other.y() && self.z() < other.z()
    }

    #[inline]
    fn gt(&self, other: &Self) -> bool {
        self.x() > other.x() && self.y() > other.y() && self.z() > other.z()
    }

    #[inline]
    fn le(&self, other: &Self) -> bool {
        self.x() <= other.x() && self.y() <= other.y() && self.z() <= other.z()
    }

    #[inline]
    fn ge(&self, other: &Self) -> bool {
        self.x() >= other.x() && self.y() >= other.y() && self.z() >= other.z()
    }
}

impl<T> Add for Point3<T>
where
    T: Copy + Add<Output = T>,
{
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        PointN([self.x() + rhs.x(), self.y() + rhs.y(), self.z() + rhs.z()])
    }
}

impl<T> Sub for Point3<T>
where
    T: Copy + Sub<Output = T>,
{
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        PointN([self.x() - rhs.x(), self.y() - rhs.y(), self.z() - rhs.z()])
    }
}

impl<T> Mul<T> for Point3<T>
where
    T: Copy + Mul<Output = T>,
{
    type Output = Self;

    #[inline]
    fn mul(self, rhs: T) -> Self {
        self.map_components(|c| c * rhs)
    }
}

impl<T> Mul<Point3<T>> for Point3<T>
where
    T: Copy + Mul<Output = T>,
{
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        PointN([self.x() * rhs.x(), self.y() * rhs.y(), self.z() * rhs.z()])
    }
}

impl<T> Div<T> for Point3<T>
where
    T: Copy + Div<Output = T>,
{
    type Output = Self;

    #[inline]
    fn div(self, rhs: T) -> Self {
        self.map_components(|c| c / rhs)
    }
}

impl From<Point3f> for Point3d {
    #[inline]
    fn from(p: Point3f) -> Self {
        PointN([p.x() as f64, p.y() as f64, p.z() as f64])
    }
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝
