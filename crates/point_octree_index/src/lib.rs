//! A spatial index over 3D point clouds.
//!
//! The `PointOctree` recursively splits a cube into eight octants down to a fixed maximum depth. Points are stored in
//! the leaves at that depth, so insertion, exact-point lookup, and deletion only descend one path of the tree instead of
//! scanning the whole cloud.
//!
//! ```
//! use point_octree_core::prelude::*;
//! use point_octree_index::prelude::*;
//!
//! let cloud = [PointN([0.5, 1.0, 2.0]), PointN([3.0, 1.5, 0.25]), PointN([1.0, 1.0, 1.0])];
//! let mut octree = PointOctree::from_points(4, &cloud)?;
//!
//! let leaf = octree.find_leaf(cloud[0]).unwrap();
//! assert_eq!(octree.node(leaf).unwrap().depth(), 4);
//!
//! assert!(octree.delete_point(cloud[0]));
//! assert!(octree.find_leaf(cloud[0]).is_none());
//! # Ok::<(), OctreeError>(())
//! ```
//!
//! Renderers and other inspection tools walk the tree with an `OctreeVisitor`; see `PointOctree::visit_preorder`.

pub mod error;
pub mod octree;

pub use error::OctreeError;
pub use octree::{
    LeafPoint, NodeKey, OctreeConfig, OctreeNode, OctreeVisitor, PointKey, PointOctree, VisitStatus,
    DEFAULT_MAX_DEPTH, MAX_DEPTH,
};

pub mod prelude {
    pub use super::{
        LeafPoint, NodeKey, OctreeConfig, OctreeError, OctreeNode, OctreeVisitor, PointKey,
        PointOctree, VisitStatus,
    };
}
