use super::PointOctree;
use crate::OctreeError;

use point_octree_core::{Cube, Point3f};

use serde::{Deserialize, Serialize};

/// The deepest tree that can be configured.
///
/// Each level halves the cube edge length, so at this depth a leaf is about as wide as the gap between neighboring `f32`
/// values across the root cube. Deeper leaves can't separate points any further, and the `f64` splitting planes start
/// to land on point coordinates.
pub const MAX_DEPTH: u32 = 24;

pub const DEFAULT_MAX_DEPTH: u32 = 6;

/// Everything needed to construct a `PointOctree`. Serializable, so a surrounding program can keep it in whatever config
/// format it already uses.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
pub struct OctreeConfig {
    /// Depth of every leaf.
    pub max_depth: u32,
    /// The root cube. When `None`, the cube is fit to the points given to `build_from_points`.
    #[serde(default)]
    pub cube: Option<Cube>,
}

impl Default for OctreeConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPTH)
    }
}

impl OctreeConfig {
    pub const fn new(max_depth: u32) -> Self {
        Self {
            max_depth,
            cube: None,
        }
    }

    pub fn with_cube(mut self, cube: Cube) -> Self {
        self.cube = Some(cube);
        self
    }

    pub fn validate(&self) -> Result<(), OctreeError> {
        if self.max_depth > MAX_DEPTH {
            return Err(OctreeError::DepthTooLarge {
                max_depth: self.max_depth,
                limit: MAX_DEPTH,
            });
        }
        if let Some(cube) = self.cube {
            let edge_length = cube.edge_length();
            if !(cube.minimum().is_finite() && edge_length.is_finite() && edge_length >= 0.0) {
                return Err(OctreeError::InvalidCube { cube });
            }
        }

        Ok(())
    }

    /// An empty tree. Without a configured cube, the root cube is degenerate and every insertion will fail.
    pub fn build(&self) -> Result<PointOctree, OctreeError> {
        self.validate()?;

        Ok(PointOctree::with_cube(
            self.max_depth,
            self.cube.unwrap_or_default(),
        ))
    }

    /// A tree holding all of `points`, in order, so the `PointKey` of each point is its index in the slice.
    ///
    /// Without a configured cube, the root cube is the enclosing cube of `points`, and an empty slice gives an empty
    /// tree with a degenerate cube.
    pub fn build_from_points(&self, points: &[Point3f]) -> Result<PointOctree, OctreeError> {
        self.validate()?;

        if let Some((index, point)) = points.iter().enumerate().find(|(_, p)| !p.is_finite()) {
            return Err(OctreeError::NonFinitePoint {
                index,
                point: *point,
            });
        }

        let cube = match self.cube {
            Some(cube) => cube,
            None => Cube::enclosing(points).unwrap_or_default(),
        };
        tracing::debug!(
            max_depth = self.max_depth,
            num_points = points.len(),
            ?cube,
            "building point octree"
        );

        let mut octree = PointOctree::with_cube(self.max_depth, cube);
        for p in points.iter() {
            octree.insert_point(*p)?;
        }

        Ok(octree)
    }
}
