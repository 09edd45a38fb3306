use point_octree_core::{Cube, Octant, Point3d, Point3f};

use serde::{Deserialize, Serialize};

/// Addresses one node of a `PointOctree`. Keys stay valid until the node is pruned or destroyed; after that they may
/// be reused for new nodes.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct NodeKey(pub(crate) usize);

/// Identifies a point stored in a `PointOctree`. Keys are handed out in insertion order, starting at zero, so a tree
/// built with `PointOctree::from_points` uses each point's index in the input slice as its key.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct PointKey(pub u64);

/// A reference to an inserted point, as stored in a leaf.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LeafPoint {
    pub key: PointKey,
    pub position: Point3f,
}

/// One cube of the octree.
///
/// A node is either a leaf, which sits at the tree's max depth and holds the points that fell into its cube, or an
/// internal node, which only holds children. While it exists, a leaf holds at least one point and an internal node has
/// at least one child.
#[derive(Clone, Debug)]
pub struct OctreeNode {
    pub(crate) depth: u32,
    pub(crate) cube: Cube,
    pub(crate) parent: Option<NodeKey>,
    pub(crate) parent_index: Option<Octant>,
    pub(crate) children: [Option<NodeKey>; Octant::NUM_OCTANTS],
    pub(crate) is_leaf: bool,
    pub(crate) points: Vec<LeafPoint>,
}

impl OctreeNode {
    pub(crate) fn new_root(cube: Cube, max_depth: u32) -> Self {
        Self {
            depth: 0,
            cube,
            parent: None,
            parent_index: None,
            children: [None; Octant::NUM_OCTANTS],
            is_leaf: max_depth == 0,
            points: Vec::new(),
        }
    }

    pub(crate) fn new_child(&self, parent: NodeKey, octant: Octant, max_depth: u32) -> Self {
        let depth = self.depth + 1;

        Self {
            depth,
            cube: self.cube.child(octant),
            parent: Some(parent),
            parent_index: Some(octant),
            children: [None; Octant::NUM_OCTANTS],
            is_leaf: depth >= max_depth,
            points: Vec::new(),
        }
    }

    /// 0 at the root, increasing by one per level.
    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn cube(&self) -> Cube {
        self.cube
    }

    /// The minimum corner of this node's cube.
    pub fn origin(&self) -> Point3d {
        self.cube.minimum()
    }

    /// The edge length of this node's cube.
    pub fn size(&self) -> f64 {
        self.cube.edge_length()
    }

    pub fn is_leaf(&self) -> bool {
        self.is_leaf
    }

    pub fn parent(&self) -> Option<NodeKey> {
        self.parent
    }

    /// The slot this node occupies in its parent, or `None` for the root.
    pub fn parent_index(&self) -> Option<Octant> {
        self.parent_index
    }

    pub fn child(&self, octant: Octant) -> Option<NodeKey> {
        self.children[octant.index()]
    }

    /// The children that exist, in octant order.
    pub fn children(&self) -> impl Iterator<Item = (Octant, NodeKey)> + '_ {
        Octant::all().filter_map(move |octant| self.child(octant).map(|key| (octant, key)))
    }

    pub fn has_children(&self) -> bool {
        self.children.iter().any(Option::is_some)
    }

    /// The points stored in this node, in insertion order. Always empty for internal nodes.
    pub fn points(&self) -> &[LeafPoint] {
        &self.points
    }

    pub(crate) fn contains_point(&self, p: Point3f) -> bool {
        self.points.iter().any(|lp| lp.position.coincides_with(&p))
    }

    /// A node that holds nothing (no points as a leaf, no children otherwise) must be pruned.
    pub(crate) fn is_vacant(&self) -> bool {
        if self.is_leaf {
            self.points.is_empty()
        } else {
            !self.has_children()
        }
    }
}
