//! The core data types for spatially indexing 3D point clouds:
//! - `PointN`: a point, most importantly `Point3f` for point clouds and `Point3d` for cube geometry
//! - `Extent3f`: an axis-aligned bounding box
//! - `Cube` and `Octant`: the region covered by an octree node and the slot arithmetic used to descend into it

pub mod cube;
pub mod extent3;
pub mod octant;
pub mod point;
pub mod point3;

pub use cube::Cube;
pub use extent3::{bounding_extent, Extent3, Extent3f};
pub use octant::Octant;
pub use point::PointN;
pub use point3::{Point3, Point3d, Point3f};

pub mod prelude {
    pub use super::{bounding_extent, Cube, Extent3f, Octant, Point3d, Point3f, PointN};
}
