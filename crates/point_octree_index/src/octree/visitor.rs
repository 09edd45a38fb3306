use super::{NodeKey, OctreeNode};

/// Receives every node reached by one of the `PointOctree` traversals. The returned `VisitStatus` steers the rest of the
/// walk; what `Stop` means depends on the traversal order.
pub trait OctreeVisitor {
    fn visit_node(&mut self, key: NodeKey, node: &OctreeNode) -> VisitStatus;
}

impl<F> OctreeVisitor for F
where
    F: FnMut(NodeKey, &OctreeNode) -> VisitStatus,
{
    fn visit_node(&mut self, key: NodeKey, node: &OctreeNode) -> VisitStatus {
        (self)(key, node)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum VisitStatus {
    /// Continue traversing this branch.
    Continue,
    /// Stop traversing this branch.
    Stop,
    /// Stop traversing the entire tree. No further nodes will be visited.
    ExitEarly,
}
