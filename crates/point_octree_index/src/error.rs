use crate::octree::NodeKey;

use point_octree_core::{Cube, Point3f};

/// Everything that can go wrong while building or mutating a `PointOctree`.
///
/// Looking up or deleting a point that isn't in the tree is not an error; those operations return `None` or `false`.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum OctreeError {
    /// The point does not lie strictly inside the cube of a node it had to descend through. Points on a node's faces
    /// count as outside.
    #[error("point {point:?} is not strictly inside {cube:?}")]
    PointOutOfBounds { point: Point3f, cube: Cube },
    /// A point in the input cloud has a NaN or infinite coordinate.
    #[error("point #{index} has a NaN or infinite coordinate: {point:?}")]
    NonFinitePoint { index: usize, point: Point3f },
    /// The root cube needs a finite minimum and a finite, non-negative edge length.
    #[error("invalid root cube {cube:?}")]
    InvalidCube { cube: Cube },
    #[error("max depth {max_depth} exceeds the limit of {limit}")]
    DepthTooLarge { max_depth: u32, limit: u32 },
    /// The key does not refer to a node in this tree (it was never issued, or the node has been pruned).
    #[error("no node with key {0:?}")]
    MissingNode(NodeKey),
}
