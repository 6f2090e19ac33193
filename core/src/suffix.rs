//! In-tile node suffixes.
//!
//! A suffix locates a node within its tile: a count of significant bits paired
//! with the byte string holding them, left-justified, with any trailing bits of
//! the final byte cleared. The bits run from the first bit of the stratum owning
//! the node's depth through the node's own deepest significant bit, so the count
//! is always between 1 and the stratum height, except for the root coordinate,
//! whose suffix is the zero-bit sentinel carried in a single zero byte.
//!
//! Suffixes have a compact wire form (one length byte followed by the path bytes)
//! suitable for use as a storage map key; see [`Suffix::to_bytes`].

use alloc::vec;
use alloc::vec::Vec;
use bitvec::prelude::*;
use core::fmt;

/// The bit suffix identifying a node's exact position within its tile.
#[derive(Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Suffix {
    bits: u32,
    path: Vec<u8>,
}

impl Suffix {
    /// Create a suffix from a bit count and its left-justified path bytes.
    ///
    /// The path must hold exactly `ceil(bits / 8)` bytes (one zero byte when
    /// `bits` is 0) and all bits past `bits` must be clear; this is an internal
    /// constructor and debug-asserts those invariants rather than validating.
    pub(crate) fn from_raw(bits: u32, path: Vec<u8>) -> Self {
        debug_assert_eq!(path.len(), byte_width(bits));
        debug_assert!(trailing_bits_clear(bits, &path));
        Suffix { bits, path }
    }

    /// The zero-bit sentinel suffix of the root coordinate. Its byte
    /// representation is a single zero byte by convention.
    pub fn empty() -> Self {
        Suffix {
            bits: 0,
            path: vec![0],
        }
    }

    /// The number of significant bits.
    pub fn bits(&self) -> u32 {
        self.bits
    }

    /// The bytes holding the significant bits, left-justified.
    pub fn path(&self) -> &[u8] {
        &self.path
    }

    /// Whether this is the zero-bit sentinel.
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// A view of the significant bits only, most significant first.
    pub fn path_bits(&self) -> &BitSlice<u8, Msb0> {
        &self.path.view_bits::<Msb0>()[..self.bits as usize]
    }

    /// Encode to the wire form: one byte holding the bit count, then the path.
    ///
    /// Panics if the bit count does not fit the length byte (over 255); such
    /// suffixes arise only under stratum heights past 256 and have no wire form.
    pub fn to_bytes(&self) -> Vec<u8> {
        assert!(self.bits <= u8::MAX as u32, "suffix too long for wire form");
        let mut out = Vec::with_capacity(1 + self.path.len());
        out.push(self.bits as u8);
        out.extend_from_slice(&self.path);
        out
    }

    /// Decode the wire form produced by [`Suffix::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, InvalidSuffix> {
        let (&bits, path) = bytes.split_first().ok_or(InvalidSuffix::Empty)?;
        let bits = bits as u32;
        if path.len() != byte_width(bits) {
            return Err(InvalidSuffix::Length);
        }
        if !trailing_bits_clear(bits, path) {
            return Err(InvalidSuffix::TrailingBits);
        }
        Ok(Suffix {
            bits,
            path: path.to_vec(),
        })
    }
}

// The storage width of a suffix path: ceil(bits / 8), with the zero-bit
// sentinel occupying one byte.
fn byte_width(bits: u32) -> usize {
    if bits == 0 {
        1
    } else {
        (bits as usize + 7) / 8
    }
}

// Whether all bits past the significant count are clear.
fn trailing_bits_clear(bits: u32, path: &[u8]) -> bool {
    path.view_bits::<Msb0>()[bits as usize..].not_any()
}

impl fmt::Debug for Suffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Suffix({}:{})", self.bits, hex::encode(&self.path))
    }
}

/// The bytes cannot form a valid [`Suffix`] wire encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidSuffix {
    /// The encoding was empty; even the zero-bit sentinel carries two bytes.
    Empty,
    /// The path length does not match the bit count in the length byte.
    Length,
    /// A bit past the significant count was set.
    TrailingBits,
}

impl fmt::Display for InvalidSuffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidSuffix::Empty => write!(f, "empty suffix encoding"),
            InvalidSuffix::Length => write!(f, "suffix path length does not match bit count"),
            InvalidSuffix::TrailingBits => write!(f, "suffix has non-zero trailing bits"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InvalidSuffix {}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn empty_sentinel() {
        let s = Suffix::empty();
        assert_eq!(s.bits(), 0);
        assert_eq!(s.path(), &[0]);
        assert!(s.is_empty());
        assert!(s.path_bits().is_empty());
    }

    #[test]
    fn path_bits_view() {
        let s = Suffix::from_raw(5, vec![0b1011_1000]);
        assert_eq!(s.path_bits(), bits![u8, Msb0; 1, 0, 1, 1, 1]);
    }

    #[test]
    fn wire_round_trip() {
        for s in [
            Suffix::empty(),
            Suffix::from_raw(1, vec![0x80]),
            Suffix::from_raw(8, vec![0x7f]),
            Suffix::from_raw(13, hex!("12 c8").to_vec()),
        ] {
            assert_eq!(Suffix::from_bytes(&s.to_bytes()), Ok(s));
        }
    }

    #[test]
    fn wire_rejects_malformed() {
        assert_eq!(Suffix::from_bytes(&[]), Err(InvalidSuffix::Empty));
        // 9 bits need two path bytes.
        assert_eq!(Suffix::from_bytes(&[9, 0xff]), Err(InvalidSuffix::Length));
        assert_eq!(
            Suffix::from_bytes(&[8, 0xff, 0x00]),
            Err(InvalidSuffix::Length)
        );
        // 5 significant bits, but bit 6 is set.
        assert_eq!(
            Suffix::from_bytes(&[5, 0b1011_1100]),
            Err(InvalidSuffix::TrailingBits)
        );
        // The sentinel must carry its single zero byte.
        assert_eq!(Suffix::from_bytes(&[0]), Err(InvalidSuffix::Length));
        assert_eq!(Suffix::from_bytes(&[0, 1]), Err(InvalidSuffix::TrailingBits));
    }
}
