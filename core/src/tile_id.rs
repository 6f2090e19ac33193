//! Tile identifiers.
//!
//! A tile identifier is the byte prefix shared by every node stored in one tile:
//! the bytes of the leaf-level address above the stratum that owns the node's own
//! depth. Two coordinates land in the same tile exactly when their identifiers are
//! byte-equal. The root of the tree belongs to no tile and is identified by the
//! empty byte string.

use alloc::vec::Vec;
use core::fmt;

/// A unique ID for a tile.
///
/// # Ordering
///
/// Tile IDs are ordered lexicographically by their bytes, so an ID always sorts
/// before the IDs of tiles below it that share its prefix. This property lets us
/// refer to whole sub-trees of tiles with simple range statements.
#[derive(Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct TileId(Vec<u8>);

/// The ID of the topmost tile: the empty prefix.
///
/// Note that the root node itself is not stored in any tile; the empty ID also
/// stands for "no tile" when addressing the root coordinate.
pub const TOP_TILE_ID: TileId = TileId(Vec::new());

impl TileId {
    /// The prefix bytes of this identifier.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// The length of the prefix in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether this is the empty (topmost) identifier.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether the other tile's prefix extends this one, i.e. the other tile
    /// stores nodes below this tile.
    pub fn is_ancestor_of(&self, other: &TileId) -> bool {
        other.0.starts_with(&self.0)
    }
}

impl From<Vec<u8>> for TileId {
    fn from(bytes: Vec<u8>) -> Self {
        TileId(bytes)
    }
}

impl AsRef<[u8]> for TileId {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            write!(f, "TileId(top)")
        } else {
            write!(f, "TileId({})", hex::encode(&self.0))
        }
    }
}

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(&self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_order_groups_subtrees() {
        let top = TOP_TILE_ID;
        let left = TileId::from(vec![0x00]);
        let left_child = TileId::from(vec![0x00, 0xff]);
        let right = TileId::from(vec![0x01]);

        assert!(top < left);
        assert!(left < left_child);
        assert!(left_child < right);

        assert!(top.is_ancestor_of(&left));
        assert!(left.is_ancestor_of(&left_child));
        assert!(!left.is_ancestor_of(&right));
    }

    #[test]
    fn debug_format() {
        assert_eq!(format!("{:?}", TOP_TILE_ID), "TileId(top)");
        assert_eq!(
            format!("{:?}", TileId::from(vec![0x12, 0xab])),
            "TileId(12ab)"
        );
    }
}
