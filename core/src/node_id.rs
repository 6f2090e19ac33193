//! Node coordinates within the tree.
//!
//! A node is addressed by its level above the leaves (0 = leaf layer) and its index
//! among the nodes of that level, counted from the left. The root of a tree of
//! height `h` sits at level `h`, index 0. One unit of index at level `l` spans
//! `2^l` leaves, so `index << level` re-expresses any node's position in the
//! leaf-level bit frame; [`Layout`](crate::layout::Layout) relies on that to derive
//! tile identifiers.

use core::fmt;

/// The coordinate of a node: its level above the leaves and its index within
/// that level.
///
/// # Ordering
///
/// Coordinates are ordered by level first, then index, which groups each level's
/// nodes together in left-to-right order.
#[derive(Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct NodeId {
    level: u32,
    index: u64,
}

impl NodeId {
    /// Create a coordinate from a level and an index within the level.
    pub fn new(level: u32, index: u64) -> Self {
        NodeId { level, index }
    }

    /// The node's level: its distance from the leaf layer.
    pub fn level(&self) -> u32 {
        self.level
    }

    /// The node's index among the nodes of its level, counted from the left.
    pub fn index(&self) -> u64 {
        self.index
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({}:{})", self.level, self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_groups_levels() {
        let mut ids = vec![
            NodeId::new(1, 0),
            NodeId::new(0, 7),
            NodeId::new(0, 2),
            NodeId::new(2, 1),
        ];
        ids.sort();
        assert_eq!(
            ids,
            vec![
                NodeId::new(0, 2),
                NodeId::new(0, 7),
                NodeId::new(1, 0),
                NodeId::new(2, 1),
            ]
        );
    }

    #[test]
    fn debug_format() {
        assert_eq!(format!("{:?}", NodeId::new(3, 42)), "NodeId(3:42)");
    }
}
