//! Tile addressing for verifiable log storage.
//!
//! Large append-only hash trees cannot afford one storage object per node. Instead,
//! contiguous runs of nodes are grouped into fixed-capacity tiles, and every node is
//! addressed by a tile identifier (the byte prefix shared by all nodes in the tile)
//! plus a bit suffix locating it within the tile. The tree depth is carved into
//! byte-aligned bands called strata, each defining the tile granularity for the
//! depths it covers.
//!
//! The [`Layout`](layout::Layout) type is the facade: built once from the configured
//! stratum heights, it answers every addressing question with pure bit arithmetic
//! against an immutable precomputed table. A writer building tiles and a reader
//! fetching them derive identical identifiers for the same coordinate.
//!
//! This crate does not require the standard library, but does require Rust's
//! alloc crate.

#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

extern crate alloc;

pub mod layout;
pub mod node_id;
pub mod suffix;
pub mod tile_id;

pub use layout::Layout;
pub use node_id::NodeId;
pub use suffix::Suffix;
pub use tile_id::TileId;
