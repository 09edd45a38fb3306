//! The `PointOctree` type is a pointer-style octree of fixed depth over a cloud of 3D points.
//!
//! Every node covers a `Cube`. The root covers the whole tree and each child covers one octant of its parent. Nodes are
//! created lazily: only octants that some point descended into exist. All points live in leaves, which are exactly the
//! nodes at the tree's max depth.
//!
//! Nodes are kept in an arena owned by the tree and addressed by `NodeKey`. Children are referenced from their parent's
//! octant slots, and each node keeps a non-owning key back to its parent, which is what lets deletion walk upward and
//! prune nodes that became empty.
//!
//! # Traversal
//!
//! Three orders are supported through the `OctreeVisitor` trait:
//!
//! - `visit_preorder`: depth-first, a node before its children. Returning `VisitStatus::Stop` skips the node's subtree.
//! - `visit_postorder`: depth-first, a node after its children. Since the subtree is already done by the time the node
//!   is visited, `VisitStatus::Stop` has no effect.
//! - `visit_breadth_first`: level by level. Returning `VisitStatus::Stop` keeps the node's children out of the queue.
//!
//! All of them end immediately on `VisitStatus::ExitEarly`.
//!
//! ```
//! use point_octree_core::prelude::*;
//! use point_octree_index::prelude::*;
//!
//! let mut octree = PointOctree::with_cube(2, Cube::new(Point3d::ZERO, 4.0));
//! octree.insert_point(PointN([0.5, 0.5, 0.5]))?;
//! octree.insert_point(PointN([3.5, 3.5, 3.5]))?;
//!
//! // Draw every cube, leaves in a different color.
//! let mut cubes = Vec::new();
//! octree.visit_preorder(&mut |_key: NodeKey, node: &OctreeNode| {
//!     cubes.push((node.origin(), node.size(), node.is_leaf()));
//!     VisitStatus::Continue
//! });
//! assert_eq!(cubes.len(), 5);
//! # Ok::<(), OctreeError>(())
//! ```

mod config;
mod node;
mod visitor;

pub use config::{OctreeConfig, DEFAULT_MAX_DEPTH, MAX_DEPTH};
pub use node::{LeafPoint, NodeKey, OctreeNode, PointKey};
pub use visitor::{OctreeVisitor, VisitStatus};

use crate::OctreeError;

use point_octree_core::{Cube, Octant, Point3d, Point3f};

use slab::Slab;
use std::collections::VecDeque;

/// An octree of fixed depth that stores 3D points in its leaves.
///
/// Cloning makes a deep copy with the same structure; `NodeKey`s and `PointKey`s stay valid in the copy.
#[derive(Clone, Debug)]
pub struct PointOctree {
    max_depth: u32,
    cube: Cube,
    root: Option<NodeKey>,
    nodes: Slab<OctreeNode>,
    next_point_key: u64,
}

impl PointOctree {
    /// An empty tree with a degenerate root cube. Points can't be inserted until the tree is rebuilt with a real cube, so
    /// this is mostly useful as a placeholder.
    pub fn new(max_depth: u32) -> Self {
        Self::with_cube(max_depth, Cube::ZERO)
    }

    /// An empty tree covering `cube`. The caller is responsible for `max_depth <= MAX_DEPTH` and a valid cube; use
    /// `OctreeConfig::build` to have both checked.
    pub fn with_cube(max_depth: u32, cube: Cube) -> Self {
        Self {
            max_depth,
            cube,
            root: None,
            nodes: Slab::new(),
            next_point_key: 0,
        }
    }

    /// Builds a tree from a point cloud. The root cube is the enclosing cube of `points`, and the `PointKey` of each
    /// point is its index in `points`.
    pub fn from_points(max_depth: u32, points: &[Point3f]) -> Result<Self, OctreeError> {
        OctreeConfig::new(max_depth).build_from_points(points)
    }

    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    /// The cube covered by the root.
    pub fn cube(&self) -> Cube {
        self.cube
    }

    /// The minimum corner of the root cube.
    pub fn origin(&self) -> Point3d {
        self.cube.minimum()
    }

    /// The edge length of the root cube.
    pub fn size(&self) -> f64 {
        self.cube.edge_length()
    }

    /// Returns `true` iff the tree has no root, which is the same as holding no points.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn root(&self) -> Option<NodeKey> {
        self.root
    }

    pub fn node(&self, key: NodeKey) -> Option<&OctreeNode> {
        self.nodes.get(key.0)
    }

    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub fn num_points(&self) -> usize {
        self.nodes.iter().map(|(_, node)| node.points.len()).sum()
    }

    /// Returns `true` iff `p` is strictly inside the root cube.
    pub fn contains_strict(&self, p: Point3f) -> bool {
        self.cube.contains_strict(p)
    }

    /// Removes every node and resets the max depth and root cube to zero.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
        self.max_depth = 0;
        self.cube = Cube::ZERO;
        self.next_point_key = 0;
    }

    /// Inserts `p`, creating the root and any missing nodes along its path.
    ///
    /// Fails if `p` is not strictly inside the root cube, or if it lies on the splitting plane of some node on the way
    /// down and therefore on a face of the child it selects. Nothing is modified when insertion fails.
    pub fn insert_point(&mut self, p: Point3f) -> Result<PointKey, OctreeError> {
        let path = self.descent_path(self.cube, 0, p)?;

        let root = match self.root {
            Some(root) => root,
            None => {
                let root = NodeKey(self.nodes.insert(OctreeNode::new_root(self.cube, self.max_depth)));
                self.root = Some(root);
                root
            }
        };

        Ok(self.insert_along_path(root, &path, p))
    }

    /// Inserts `p` by descending from the existing node `start` rather than from the root. `p` must be strictly inside
    /// the cube of `start`.
    pub fn insert_point_from(&mut self, start: NodeKey, p: Point3f) -> Result<PointKey, OctreeError> {
        let start_node = self.nodes.get(start.0).ok_or(OctreeError::MissingNode(start))?;
        let path = self.descent_path(start_node.cube, start_node.depth, p)?;

        Ok(self.insert_along_path(start, &path, p))
    }

    /// The octants that `p` passes through, from a node covering `cube` at `depth` down to the leaf level.
    fn descent_path(&self, mut cube: Cube, mut depth: u32, p: Point3f) -> Result<Vec<Octant>, OctreeError> {
        let mut path = Vec::with_capacity(self.max_depth.saturating_sub(depth).min(MAX_DEPTH) as usize);
        loop {
            if !cube.contains_strict(p) {
                tracing::warn!(point = ?p, ?cube, depth, "point out of bounds");
                return Err(OctreeError::PointOutOfBounds { point: p, cube });
            }
            if depth >= self.max_depth {
                return Ok(path);
            }
            let octant = cube.octant_index(p);
            path.push(octant);
            cube = cube.child(octant);
            depth += 1;
        }
    }

    fn insert_along_path(&mut self, start: NodeKey, path: &[Octant], p: Point3f) -> PointKey {
        let mut key = start;
        for &octant in path.iter() {
            key = match self.nodes[key.0].child(octant) {
                Some(child) => child,
                None => self.spawn_child(key, octant),
            };
        }

        let point_key = PointKey(self.next_point_key);
        self.next_point_key += 1;

        let leaf = &mut self.nodes[key.0];
        debug_assert!(leaf.is_leaf);
        leaf.points.push(LeafPoint {
            key: point_key,
            position: p,
        });
        tracing::trace!(point = ?p, ?point_key, leaf = ?key, "inserted point");

        point_key
    }

    fn spawn_child(&mut self, parent: NodeKey, octant: Octant) -> NodeKey {
        let child = self.nodes[parent.0].new_child(parent, octant, self.max_depth);
        let child_key = NodeKey(self.nodes.insert(child));
        self.nodes[parent.0].children[octant.index()] = Some(child_key);

        child_key
    }

    /// The leaf holding a point exactly equal to `p`, or `None` if `p` is outside the root cube or not in the tree.
    pub fn find_leaf(&self, p: Point3f) -> Option<NodeKey> {
        if !self.contains_strict(p) {
            return None;
        }

        self.find_leaf_from(p, self.root)
    }

    /// Same as `find_leaf`, but descends from `start`. Only one path is followed: if the point is not in the leaf that
    /// the octant arithmetic leads to, no other leaf is searched.
    pub fn find_leaf_from(&self, p: Point3f, start: Option<NodeKey>) -> Option<NodeKey> {
        let mut key = start?;
        loop {
            let node = self.nodes.get(key.0)?;
            if node.is_leaf {
                return if node.contains_point(p) { Some(key) } else { None };
            }
            if !node.cube.contains_strict(p) {
                return None;
            }
            key = node.child(node.cube.octant_index(p))?;
        }
    }

    /// All stored points exactly equal to `p`.
    pub fn find_points(&self, p: Point3f) -> impl Iterator<Item = &LeafPoint> + '_ {
        self.find_leaf(p).into_iter().flat_map(move |leaf| {
            self.nodes[leaf.0]
                .points
                .iter()
                .filter(move |lp| lp.position.coincides_with(&p))
        })
    }

    /// Deletes every stored point exactly equal to `p`. Returns `false` if there was none.
    pub fn delete_point(&mut self, p: Point3f) -> bool {
        !self.take_points(p).is_empty()
    }

    /// Removes and returns every stored point exactly equal to `p`, then prunes the leaf and any ancestors left empty.
    pub fn take_points(&mut self, p: Point3f) -> Vec<LeafPoint> {
        let leaf = match self.find_leaf_from(p, self.root) {
            Some(leaf) => leaf,
            None => return Vec::new(),
        };

        let node = &mut self.nodes[leaf.0];
        let (removed, kept): (Vec<LeafPoint>, Vec<LeafPoint>) = std::mem::take(&mut node.points)
            .into_iter()
            .partition(|lp| lp.position.coincides_with(&p));
        node.points = kept;
        tracing::trace!(point = ?p, num_removed = removed.len(), ?leaf, "deleted points");

        self.prune_upward(leaf);

        removed
    }

    /// Starting at `key`, destroys vacant nodes until reaching one that still holds something, or until the root is
    /// gone.
    fn prune_upward(&mut self, mut key: NodeKey) {
        loop {
            let node = &self.nodes[key.0];
            if !node.is_vacant() {
                return;
            }
            let parent = node.parent;
            tracing::trace!(node = ?key, depth = node.depth, "pruning vacant node");
            self.destroy_subtree(key);
            match parent {
                Some(parent) => key = parent,
                None => return,
            }
        }
    }

    /// Detaches the node `key` from its parent (or from the tree, if it's the root) and then destroys it along with its
    /// whole subtree. Every key into the subtree becomes invalid. Returns `false` if there is no such node.
    pub fn destroy_subtree(&mut self, key: NodeKey) -> bool {
        let (parent, parent_index) = match self.nodes.get(key.0) {
            Some(node) => (node.parent, node.parent_index),
            None => return false,
        };

        match (parent, parent_index) {
            (Some(parent), Some(octant)) => {
                if let Some(parent) = self.nodes.get_mut(parent.0) {
                    parent.children[octant.index()] = None;
                }
            }
            _ => {
                if self.root == Some(key) {
                    self.root = None;
                }
            }
        }

        let mut doomed = vec![key];
        while let Some(key) = doomed.pop() {
            let node = self.nodes.remove(key.0);
            doomed.extend(node.children.iter().flatten());
        }

        true
    }

    /// Visits the whole tree in pre-order. See `visit_preorder_from`.
    pub fn visit_preorder(&self, visitor: &mut impl OctreeVisitor) -> VisitStatus {
        match self.root {
            Some(root) => self.visit_preorder_from(root, visitor),
            None => VisitStatus::Continue,
        }
    }

    /// Visits `start` and then, unless the visitor returned `Stop`, its children in octant order, recursively. Returns
    /// `ExitEarly` if the visitor ended the walk.
    pub fn visit_preorder_from(&self, start: NodeKey, visitor: &mut impl OctreeVisitor) -> VisitStatus {
        if !self.nodes.contains(start.0) {
            return VisitStatus::Continue;
        }

        self._visit_preorder(start, visitor)
    }

    fn _visit_preorder(&self, key: NodeKey, visitor: &mut impl OctreeVisitor) -> VisitStatus {
        let node = &self.nodes[key.0];

        let status = visitor.visit_node(key, node);
        if status != VisitStatus::Continue {
            return status;
        }

        for child in node.children.iter().flatten() {
            if self._visit_preorder(*child, visitor) == VisitStatus::ExitEarly {
                return VisitStatus::ExitEarly;
            }
        }

        VisitStatus::Continue
    }

    /// Visits the whole tree in post-order. See `visit_postorder_from`.
    pub fn visit_postorder(&self, visitor: &mut impl OctreeVisitor) -> VisitStatus {
        match self.root {
            Some(root) => self.visit_postorder_from(root, visitor),
            None => VisitStatus::Continue,
        }
    }

    /// Visits the children of `start` in octant order, recursively, and then `start` itself. `Stop` has no effect here,
    /// because a node's subtree has been visited before the node. Returns `ExitEarly` if the visitor ended the walk.
    pub fn visit_postorder_from(&self, start: NodeKey, visitor: &mut impl OctreeVisitor) -> VisitStatus {
        if !self.nodes.contains(start.0) {
            return VisitStatus::Continue;
        }

        self._visit_postorder(start, visitor)
    }

    fn _visit_postorder(&self, key: NodeKey, visitor: &mut impl OctreeVisitor) -> VisitStatus {
        let node = &self.nodes[key.0];

        for child in node.children.iter().flatten() {
            if self._visit_postorder(*child, visitor) == VisitStatus::ExitEarly {
                return VisitStatus::ExitEarly;
            }
        }

        match visitor.visit_node(key, node) {
            VisitStatus::ExitEarly => VisitStatus::ExitEarly,
            VisitStatus::Continue | VisitStatus::Stop => VisitStatus::Continue,
        }
    }

    /// Visits all nodes level by level, each level in octant order of its parents. Children of a node for which the
    /// visitor returned `Stop` are never visited. Returns `ExitEarly` if the visitor ended the walk.
    pub fn visit_breadth_first(&self, visitor: &mut impl OctreeVisitor) -> VisitStatus {
        let mut queue: VecDeque<NodeKey> = self.root.into_iter().collect();
        while let Some(key) = queue.pop_front() {
            let node = &self.nodes[key.0];
            match visitor.visit_node(key, node) {
                VisitStatus::Continue => queue.extend(node.children.iter().flatten()),
                VisitStatus::Stop => (),
                VisitStatus::ExitEarly => return VisitStatus::ExitEarly,
            }
        }

        VisitStatus::Continue
    }
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝

#[cfg(test)]
mod test {
    use super::*;

    use point_octree_core::PointN;
    use pretty_assertions::assert_eq;
    use utilities::data_sets::{random_point_cloud, sphere_shell_point_cloud};

    fn unit_octree(max_depth: u32) -> PointOctree {
        PointOctree::with_cube(max_depth, Cube::new(Point3d::ZERO, 2.0))
    }

    /// Walks the whole tree and checks the structural invariants that every operation must preserve.
    fn assert_invariants(octree: &PointOctree) {
        let mut num_visited = 0;
        octree.visit_preorder(&mut |key: NodeKey, node: &OctreeNode| {
            num_visited += 1;

            assert!(node.depth() <= octree.max_depth());
            assert_eq!(node.is_leaf(), node.depth() == octree.max_depth());
            if node.is_leaf() {
                assert!(!node.points().is_empty(), "empty leaf {:?}", key);
                assert!(!node.has_children());
                for lp in node.points() {
                    assert!(node.cube().contains_strict(lp.position));
                }
            } else {
                assert!(node.has_children(), "childless internal node {:?}", key);
                assert!(node.points().is_empty());
            }

            match (node.parent(), node.parent_index()) {
                (Some(parent), Some(octant)) => {
                    let parent_node = octree.node(parent).unwrap();
                    assert_eq!(parent_node.child(octant), Some(key));
                    assert_eq!(parent_node.cube().child(octant), node.cube());
                    assert_eq!(parent_node.depth() + 1, node.depth());
                }
                (None, None) => {
                    assert_eq!(octree.root(), Some(key));
                    assert_eq!(node.cube(), octree.cube());
                }
                other => panic!("inconsistent parent link {:?}", other),
            }

            VisitStatus::Continue
        });

        // Nothing unreachable is left in the arena.
        assert_eq!(num_visited, octree.num_nodes());
    }

    #[test]
    fn insert_creates_path_down_to_leaf() {
        let mut octree = unit_octree(3);

        let key = octree.insert_point(PointN([0.3, 1.7, 0.9])).unwrap();

        assert_eq!(key, PointKey(0));
        assert_eq!(octree.num_nodes(), 4);
        assert_eq!(octree.num_points(), 1);
        assert_invariants(&octree);
    }

    #[test]
    fn octant_placement_of_first_child() {
        let mut octree = unit_octree(1);

        octree.insert_point(PointN([1.5, 0.5, 1.5])).unwrap();

        let root = octree.node(octree.root().unwrap()).unwrap();
        let children: Vec<_> = root.children().collect();
        assert_eq!(children.len(), 1);

        let (octant, child) = children[0];
        assert_eq!(octant.index(), 5);
        let child = octree.node(child).unwrap();
        assert_eq!(child.origin(), PointN([1.0, 0.0, 1.0]));
        assert_eq!(child.size(), 1.0);
        assert_eq!(child.parent_index(), Some(octant));
        assert!(child.is_leaf());
    }

    #[test]
    fn zero_depth_tree_is_a_single_leaf() {
        let mut octree = unit_octree(0);

        octree.insert_point(PointN([0.5, 0.5, 0.5])).unwrap();
        octree.insert_point(PointN([1.5, 1.5, 1.5])).unwrap();

        let root = octree.node(octree.root().unwrap()).unwrap();
        assert!(root.is_leaf());
        assert_eq!(root.points().len(), 2);
        assert_eq!(octree.num_nodes(), 1);
    }

    #[test]
    fn out_of_bounds_insert_fails_without_mutation() {
        let mut octree = unit_octree(3);

        for p in [Point3f::ZERO, Point3f::fill(2.0), PointN([1.0, 3.0, 1.0])].iter() {
            assert_eq!(
                octree.insert_point(*p),
                Err(OctreeError::PointOutOfBounds {
                    point: *p,
                    cube: octree.cube()
                })
            );
        }
        assert!(octree.is_empty());
        assert_eq!(octree.num_nodes(), 0);
    }

    #[test]
    fn point_on_inner_split_plane_fails_without_mutation() {
        let mut octree = unit_octree(2);
        octree.insert_point(PointN([0.3, 0.3, 0.3])).unwrap();
        let num_nodes = octree.num_nodes();

        // Inside the root, but on the root's splitting plane, so on the minimum face of the selected child.
        let p = PointN([1.0, 0.5, 0.5]);
        assert_eq!(
            octree.insert_point(p),
            Err(OctreeError::PointOutOfBounds {
                point: p,
                cube: Cube::new(PointN([1.0, 0.0, 0.0]), 1.0),
            })
        );
        assert_eq!(octree.num_nodes(), num_nodes);
        assert_invariants(&octree);
    }

    #[test]
    fn empty_tree_with_degenerate_cube_rejects_everything() {
        let mut octree = PointOctree::new(4);

        assert!(octree.insert_point(Point3f::ZERO).is_err());
        assert!(octree.is_empty());
    }

    #[test]
    fn insert_from_inner_node() {
        let mut octree = unit_octree(2);
        octree.insert_point(PointN([0.25, 0.25, 0.25])).unwrap();
        let root = octree.node(octree.root().unwrap()).unwrap();
        let (_, child) = root.children().next().unwrap();

        octree.insert_point_from(child, PointN([0.75, 0.75, 0.75])).unwrap();
        assert!(octree.find_leaf(PointN([0.75, 0.75, 0.75])).is_some());

        // Outside the child's cube.
        assert!(octree.insert_point_from(child, PointN([1.5, 0.5, 0.5])).is_err());
        assert_invariants(&octree);
    }

    #[test]
    fn insert_from_missing_node_fails() {
        let mut octree = unit_octree(2);
        let p = PointN([0.3, 0.3, 0.3]);
        let key = octree.insert_point(p).unwrap();
        assert_eq!(key, PointKey(0));
        let leaf = octree.find_leaf(p).unwrap();
        assert!(octree.delete_point(p));

        assert_eq!(
            octree.insert_point_from(leaf, p),
            Err(OctreeError::MissingNode(leaf))
        );
    }

    #[test]
    fn every_inserted_point_is_found_in_a_leaf_at_max_depth() {
        let points = random_point_cloud(1000, 0xbeef);
        let max_depth = 5;
        let octree = PointOctree::from_points(max_depth, &points).unwrap();

        assert_eq!(octree.num_points(), points.len());
        for (i, p) in points.iter().enumerate() {
            let leaf = octree.find_leaf(*p).unwrap();
            let node = octree.node(leaf).unwrap();
            assert_eq!(node.depth(), max_depth);
            assert!(node.points().iter().any(|lp| lp.position == *p));
            assert!(octree
                .find_points(*p)
                .any(|lp| lp.key == PointKey(i as u64)));
        }
        assert_invariants(&octree);
    }

    #[test]
    fn random_clouds_fit_at_the_deepest_allowed_depth() {
        for seed in [0, 1].iter() {
            let points = random_point_cloud(1000, *seed);

            let octree = PointOctree::from_points(MAX_DEPTH, &points).unwrap();

            assert_eq!(octree.num_points(), points.len());
            for p in points.iter() {
                let leaf = octree.find_leaf(*p).unwrap();
                assert_eq!(octree.node(leaf).unwrap().depth(), MAX_DEPTH);
            }
        }
    }

    #[test]
    fn insert_into_unvalidated_deep_tree_fails_cleanly() {
        // Dyadic planes eventually pass through any f32 coordinate.
        let mut octree = unit_octree(u32::MAX);

        assert!(octree.insert_point(PointN([0.3, 0.3, 0.3])).is_err());
        assert!(octree.is_empty());
    }

    #[test]
    fn enclosing_cube_contains_off_center_cloud() {
        // A cloud far from the origin and much wider in one axis than the others.
        let points: Vec<Point3f> = sphere_shell_point_cloud(500, 7)
            .into_iter()
            .map(|p| p * PointN([40.0, 1.0, 2.0]) + PointN([-300.0, 1000.0, 55.0]))
            .collect();

        let octree = PointOctree::from_points(4, &points).unwrap();

        for p in points.iter() {
            assert!(octree.contains_strict(*p));
            assert!(octree.find_leaf(*p).is_some());
        }
    }

    #[test]
    fn lookup_misses() {
        let mut octree = unit_octree(3);
        octree.insert_point(PointN([0.3, 0.3, 0.3])).unwrap();

        // Outside the tree.
        assert_eq!(octree.find_leaf(PointN([5.0, 0.3, 0.3])), None);
        // In an octant with no node.
        assert_eq!(octree.find_leaf(PointN([1.5, 1.5, 1.5])), None);
        // In an existing leaf, but not equal to any point there.
        assert_eq!(octree.find_leaf(PointN([0.3, 0.3, 0.30001])), None);
        // An empty tree.
        assert_eq!(unit_octree(3).find_leaf(PointN([0.3, 0.3, 0.3])), None);
        assert_eq!(octree.find_leaf_from(PointN([0.3, 0.3, 0.3]), None), None);
    }

    #[test]
    fn delete_then_lookup_fails() {
        let points = random_point_cloud(200, 42);
        let mut octree = PointOctree::from_points(4, &points).unwrap();

        for (i, p) in points.iter().enumerate() {
            assert!(octree.delete_point(*p), "failed to delete point {}", i);
            assert_eq!(octree.find_leaf(*p), None);
            assert_invariants(&octree);
        }
        assert!(octree.is_empty());
        assert_eq!(octree.num_nodes(), 0);
    }

    #[test]
    fn delete_missing_point_fails() {
        let mut octree = unit_octree(2);
        assert!(!octree.delete_point(PointN([0.3, 0.3, 0.3])));

        octree.insert_point(PointN([0.3, 0.3, 0.3])).unwrap();
        assert!(!octree.delete_point(PointN([0.4, 0.3, 0.3])));
        assert!(!octree.delete_point(PointN([7.0, 0.3, 0.3])));
        assert_eq!(octree.num_points(), 1);
    }

    #[test]
    fn deleting_coincident_points_removes_all_of_them() {
        let mut octree = unit_octree(3);
        let p = PointN([0.7, 1.2, 0.3]);
        octree.insert_point(p).unwrap();
        octree.insert_point(p).unwrap();
        assert_eq!(octree.find_points(p).count(), 2);

        let removed = octree.take_points(p);

        assert_eq!(
            removed,
            vec![
                LeafPoint {
                    key: PointKey(0),
                    position: p
                },
                LeafPoint {
                    key: PointKey(1),
                    position: p
                },
            ]
        );
        assert!(octree.is_empty());
        assert!(!octree.delete_point(p));
    }

    #[test]
    fn partial_deletion_keeps_leaf() {
        let mut octree = unit_octree(1);
        let p1 = PointN([0.2, 0.2, 0.2]);
        let p2 = PointN([0.8, 0.8, 0.8]);
        octree.insert_point(p1).unwrap();
        octree.insert_point(p2).unwrap();
        let leaf = octree.find_leaf(p1).unwrap();
        assert_eq!(octree.find_leaf(p2), Some(leaf));

        assert!(octree.delete_point(p1));

        assert_eq!(octree.find_leaf(p2), Some(leaf));
        assert_eq!(octree.find_leaf(p1), None);
        assert_eq!(octree.node(leaf).unwrap().points().len(), 1);
        assert_invariants(&octree);
    }

    #[test]
    fn pruning_cascades_to_the_root() {
        let p = PointN([1.0, 2.0, 3.0]);
        let mut octree = PointOctree::from_points(3, &[p]).unwrap();
        assert_eq!(octree.num_nodes(), 4);

        assert!(octree.delete_point(p));

        assert!(octree.is_empty());
        assert_eq!(octree.root(), None);
        assert_eq!(octree.num_nodes(), 0);
    }

    #[test]
    fn pruning_stops_at_shared_ancestor() {
        let mut octree = unit_octree(3);
        let a = PointN([0.1, 0.1, 0.1]);
        let b = PointN([0.9, 0.9, 0.9]);
        octree.insert_point(a).unwrap();
        octree.insert_point(b).unwrap();
        // Both descend into root octant 0; they split one level below.
        assert_eq!(octree.num_nodes(), 1 + 1 + 2 + 2);

        assert!(octree.delete_point(a));

        assert_eq!(octree.num_nodes(), 1 + 1 + 1 + 1);
        assert!(octree.find_leaf(b).is_some());
        assert_invariants(&octree);
    }

    #[test]
    fn destroy_subtree_detaches_from_parent() {
        let mut octree = unit_octree(2);
        octree.insert_point(PointN([0.3, 0.3, 0.3])).unwrap();
        octree.insert_point(PointN([1.3, 1.3, 1.3])).unwrap();
        let root = octree.root().unwrap();
        let (octant, child) = octree.node(root).unwrap().children().next().unwrap();

        assert!(octree.destroy_subtree(child));

        assert_eq!(octree.node(root).unwrap().child(octant), None);
        assert_eq!(octree.node(child).map(|n| n.depth()), None);
        assert_eq!(octree.num_nodes(), 3);
        assert_eq!(octree.num_points(), 1);
        assert!(!octree.destroy_subtree(child));

        assert!(octree.destroy_subtree(root));
        assert!(octree.is_empty());
        assert_eq!(octree.num_nodes(), 0);
    }

    #[test]
    fn clear_resets_everything() {
        let mut octree = PointOctree::from_points(4, &random_point_cloud(50, 1)).unwrap();

        octree.clear();

        assert!(octree.is_empty());
        assert_eq!(octree.num_nodes(), 0);
        assert_eq!(octree.max_depth(), 0);
        assert_eq!(octree.cube(), Cube::ZERO);
    }

    #[test]
    fn clone_is_deep() {
        let points = random_point_cloud(100, 3);
        let original = PointOctree::from_points(3, &points).unwrap();
        let mut copy = original.clone();

        for p in points.iter() {
            copy.delete_point(*p);
        }

        assert!(copy.is_empty());
        assert_eq!(original.num_points(), points.len());
        assert_invariants(&original);
    }

    fn two_branch_octree() -> PointOctree {
        let mut octree = unit_octree(2);
        octree.insert_point(PointN([0.25, 0.25, 0.25])).unwrap();
        octree.insert_point(PointN([1.75, 1.75, 1.75])).unwrap();
        octree
    }

    #[test]
    fn preorder_visits_parents_first() {
        let octree = two_branch_octree();

        let mut depths = Vec::new();
        octree.visit_preorder(&mut |_key: NodeKey, node: &OctreeNode| {
            depths.push(node.depth());
            VisitStatus::Continue
        });

        assert_eq!(depths, vec![0, 1, 2, 1, 2]);
    }

    #[test]
    fn preorder_stop_prunes_subtree_only() {
        let octree = two_branch_octree();

        let mut visited = Vec::new();
        let status = octree.visit_preorder(&mut |_key: NodeKey, node: &OctreeNode| {
            visited.push((node.depth(), node.is_leaf()));
            if node.depth() == 1 {
                VisitStatus::Stop
            } else {
                VisitStatus::Continue
            }
        });

        assert_eq!(status, VisitStatus::Continue);
        assert_eq!(visited, vec![(0, false), (1, false), (1, false)]);
    }

    #[test]
    fn postorder_visits_children_first_and_ignores_stop() {
        let octree = two_branch_octree();

        let mut depths = Vec::new();
        let status = octree.visit_postorder(&mut |_key: NodeKey, node: &OctreeNode| {
            depths.push(node.depth());
            VisitStatus::Stop
        });

        assert_eq!(status, VisitStatus::Continue);
        assert_eq!(depths, vec![2, 1, 2, 1, 0]);
    }

    #[test]
    fn breadth_first_visits_level_by_level() {
        let octree = two_branch_octree();

        let mut depths = Vec::new();
        octree.visit_breadth_first(&mut |_key: NodeKey, node: &OctreeNode| {
            depths.push(node.depth());
            VisitStatus::Continue
        });

        assert_eq!(depths, vec![0, 1, 1, 2, 2]);
    }

    /// Ends the walk on the `n`th node it sees.
    struct ExitOnNth {
        n: usize,
        seen: usize,
    }

    impl OctreeVisitor for ExitOnNth {
        fn visit_node(&mut self, _key: NodeKey, _node: &OctreeNode) -> VisitStatus {
            self.seen += 1;
            if self.seen == self.n {
                VisitStatus::ExitEarly
            } else {
                VisitStatus::Continue
            }
        }
    }

    #[test]
    fn exit_early_ends_every_traversal() {
        let octree = two_branch_octree();

        let mut visitor = ExitOnNth { n: 2, seen: 0 };
        assert_eq!(octree.visit_preorder(&mut visitor), VisitStatus::ExitEarly);
        assert_eq!(visitor.seen, 2);

        let mut visitor = ExitOnNth { n: 2, seen: 0 };
        assert_eq!(octree.visit_postorder(&mut visitor), VisitStatus::ExitEarly);
        assert_eq!(visitor.seen, 2);

        let mut visitor = ExitOnNth { n: 2, seen: 0 };
        assert_eq!(octree.visit_breadth_first(&mut visitor), VisitStatus::ExitEarly);
        assert_eq!(visitor.seen, 2);

        // Never reached.
        let mut visitor = ExitOnNth { n: 100, seen: 0 };
        assert_eq!(octree.visit_preorder(&mut visitor), VisitStatus::Continue);
        assert_eq!(visitor.seen, octree.num_nodes());
    }

    #[test]
    fn traversal_of_empty_tree_visits_nothing() {
        let octree = unit_octree(2);

        let mut count = 0;
        let mut counter = |_key: NodeKey, _node: &OctreeNode| {
            count += 1;
            VisitStatus::Continue
        };
        octree.visit_preorder(&mut counter);
        octree.visit_postorder(&mut counter);
        octree.visit_breadth_first(&mut counter);

        assert_eq!(count, 0);
    }
}
