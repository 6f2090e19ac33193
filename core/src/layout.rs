//! The tile layout: mapping node coordinates to tiles.
//!
//! The tree's depth is carved into strata, contiguous byte-aligned bands counted
//! from the root side, each configured with a bit height that is a positive
//! multiple of 8. A node's tile is identified by the bytes of its leaf-level
//! address above the stratum containing the node's own deepest significant bit;
//! its position within the tile is the bit run from that stratum's first bit
//! through the node's own.
//!
//! [`Layout`] precomputes, once at construction, a table with one entry per byte
//! of the address space, mapping the byte to the descriptor of the stratum that
//! owns it. Every subsequent operation is a table lookup plus shifts: no
//! allocation of shared state, no mutation, no dependence on traversal order.
//! Two independent processes addressing the same coordinate against the same
//! configuration always derive identical results.

use crate::node_id::NodeId;
use crate::suffix::Suffix;
use crate::tile_id::{TileId, TOP_TILE_ID};

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

/// The descriptor of one stratum: where it starts and how tall it is.
///
/// Every byte offset within a stratum's range maps to the same descriptor, so a
/// depth-to-stratum lookup is a single index operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct StratumInfo {
    /// Byte offset, from the root side, of the first byte this stratum owns.
    start: u32,
    /// The stratum's bit height, verbatim from the configuration.
    height: u32,
}

/// An immutable tile layout for a tree of configured stratum heights.
///
/// Built once from configuration; all methods are pure reads and the value may
/// be shared freely across threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    /// Entry `b` describes the stratum owning byte offset `b` of the address
    /// space. Length is the tree height in bytes.
    strata: Vec<StratumInfo>,
    /// Tree height in bits: the sum of the configured stratum heights.
    height: u32,
}

impl Layout {
    /// Build a layout from the configured stratum heights, ordered from the
    /// layer nearest the root to the layer nearest the leaves.
    ///
    /// Each height must be a positive multiple of 8; anything else is a
    /// configuration error and no layout is produced. An empty configuration
    /// yields the degenerate height-0 layout whose only node is the root.
    pub fn new(heights: &[u32]) -> Result<Self, InvalidStratumHeight> {
        let mut strata = Vec::with_capacity(heights.iter().map(|h| (h / 8) as usize).sum());
        let mut start = 0u32;
        for (index, &height) in heights.iter().enumerate() {
            if height == 0 || height % 8 != 0 {
                return Err(InvalidStratumHeight { index, height });
            }
            let width = height / 8;
            strata.extend((0..width).map(|_| StratumInfo { start, height }));
            start += width;
        }
        Ok(Layout {
            strata,
            height: start * 8,
        })
    }

    /// The tree height in bits: the number of significant index bits at the
    /// leaf level.
    pub fn tree_height(&self) -> u32 {
        self.height
    }

    /// The bit height of the stratum owning the given root-relative depth,
    /// i.e. the height of tiles spanning that depth.
    ///
    /// Panics if `depth` is at or past the tree height.
    pub fn tile_height(&self, depth: u32) -> u32 {
        self.stratum_at(depth).height
    }

    /// The identifier of the tile storing the node at the given coordinate.
    ///
    /// The root coordinate (level equal to the tree height) belongs to no tile
    /// and yields the empty identifier.
    ///
    /// Panics if the coordinate's level exceeds the tree height.
    pub fn tile_id(&self, id: NodeId) -> TileId {
        match self.locate(id) {
            None => TOP_TILE_ID,
            Some((value, _, stratum)) => TileId::from(value[..stratum.start as usize].to_vec()),
        }
    }

    /// Split a coordinate into its tile identifier and the suffix locating the
    /// node within that tile.
    ///
    /// The prefix is exactly [`Layout::tile_id`] of the same coordinate. The
    /// suffix holds the bits from the owning stratum's first bit through the
    /// node's own deepest significant bit, left-justified; for the root
    /// coordinate it is the zero-bit sentinel.
    ///
    /// Panics if the coordinate's level exceeds the tree height.
    pub fn split(&self, id: NodeId) -> (TileId, Suffix) {
        let (value, depth, stratum) = match self.locate(id) {
            None => return (TOP_TILE_ID, Suffix::empty()),
            Some(located) => located,
        };

        let prefix = TileId::from(value[..stratum.start as usize].to_vec());

        // Strata are byte-aligned, so the suffix begins on a byte boundary and
        // only the final byte can be partial.
        let bits = depth - stratum.start * 8 + 1;
        let mut path = value[stratum.start as usize..=(depth / 8) as usize].to_vec();
        let partial = bits % 8;
        if partial != 0 {
            // unwrap: the byte range above is never empty.
            *path.last_mut().unwrap() &= 0xff << (8 - partial);
        }

        (prefix, Suffix::from_raw(bits, path))
    }

    /// The descriptor of the stratum owning the given root-relative bit depth.
    /// Depth and byte offset share byte granularity because every stratum
    /// height is a multiple of 8.
    fn stratum_at(&self, depth: u32) -> StratumInfo {
        assert!(
            depth < self.height,
            "depth {} out of range for tree height {}",
            depth,
            self.height,
        );
        self.strata[(depth >> 3) as usize]
    }

    /// Resolve a coordinate to its leaf-level address bytes, the root-relative
    /// depth of its deepest significant bit, and the stratum owning that depth.
    /// Returns `None` for the root coordinate, which has no significant bits.
    fn locate(&self, id: NodeId) -> Option<(Vec<u8>, u32, StratumInfo)> {
        assert!(
            id.level() <= self.height,
            "level {} out of range for tree height {}",
            id.level(),
            self.height,
        );
        if id.level() == self.height {
            return None;
        }
        let depth = self.height - id.level() - 1;
        Some((self.node_value(id), depth, self.stratum_at(depth)))
    }

    /// Encode `index << level` as a big-endian string of tree-height bits: the
    /// leaf index of the leftmost leaf under the node, in the bit frame shared
    /// by all levels.
    fn node_value(&self, id: NodeId) -> Vec<u8> {
        let width = (self.height / 8) as usize;
        let mut value = vec![0u8; width];

        // Shift the sub-byte part here (at most 71 bits) and place the bytes at
        // the whole-byte part of the offset; exact for any tree height.
        let shifted = (id.index() as u128) << (id.level() % 8);
        let byte_shift = (id.level() / 8) as usize;
        for (i, &b) in shifted.to_be_bytes().iter().enumerate() {
            let from_right = 15 - i + byte_shift;
            if from_right >= width {
                debug_assert_eq!(b, 0, "index {} out of range at level {}", id.index(), id.level());
                continue;
            }
            value[width - 1 - from_right] = b;
        }
        value
    }
}

/// A configured stratum height that cannot form a valid layout: zero or not a
/// multiple of 8.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidStratumHeight {
    /// Position of the offending entry in the configuration.
    pub index: usize,
    /// The rejected height.
    pub height: u32,
}

impl fmt::Display for InvalidStratumHeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "stratum {} has height {}; heights must be positive multiples of 8",
            self.index, self.height,
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InvalidStratumHeight {}
