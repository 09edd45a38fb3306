//! A spatial index over 3D point clouds.
//!
//! The workspace is organized into two crates:
//! - **core**: the point, extent, octant, and cube types
//! - **index**: the `PointOctree` itself, with its configuration, visitors, and errors
//!
//! ```
//! use point_octree::prelude::*;
//!
//! let cloud = [PointN([-2.0, 0.5, 3.0]), PointN([4.0, 1.0, -1.0]), PointN([0.25, 7.0, 2.0])];
//! let octree = OctreeConfig::new(5).build_from_points(&cloud)?;
//!
//! for (i, p) in cloud.iter().enumerate() {
//!     let matches: Vec<_> = octree.find_points(*p).map(|lp| lp.key).collect();
//!     assert_eq!(matches, vec![PointKey(i as u64)]);
//! }
//! # Ok::<(), OctreeError>(())
//! ```

pub use point_octree_core as core;
pub use point_octree_index as index;

pub mod prelude {
    pub use super::core::prelude::*;
    pub use super::index::prelude::*;
}
