//! Matching-pattern signatures.
//!
//! A signature is the 32-bit name hash of the framed, lower-cased text
//! `|<compatible>|<vendor>|<sub_vendor>|`, with absent fields framed as empty
//! strings. The separators keep `("ab", "c")` and `("a", "bc")` apart.
//!
//! Signatures are not unique: distinct patterns can hash to the same value and
//! the lookup accepts that trade-off for a small, fixed registry.

use core::fmt;

const GOLDEN_RATIO_32: u32 = 0x61C8_8647;
const GOLDEN_RATIO_64: u64 = 0x61C8_8646_80B5_83EB;

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Signature(u32);

impl Signature {
    /// Hash a (compatible, vendor, sub-vendor) triple. `None` hashes like `""`.
    #[must_use]
    pub fn of(compatible: Option<&str>, vendor: Option<&str>, sub_vendor: Option<&str>) -> Self {
        let compatible = compatible.unwrap_or_default();
        let vendor = vendor.unwrap_or_default();
        let sub_vendor = sub_vendor.unwrap_or_default();

        let mut hash = NameHash::new();
        for field in [compatible, vendor, sub_vendor] {
            hash.push(b'|');
            field.bytes().for_each(|c| hash.push(c));
        }
        hash.push(b'|');

        let signature = Self(hash.finish());
        log::trace!("quirk signature >>>|{compatible}|{vendor}|{sub_vendor}|<<< = {signature}");
        signature
    }

    #[inline]
    #[must_use]
    pub const fn from_u32(value: u32) -> Self {
        Self(value)
    }

    #[inline]
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self.0
    }

    /// Bucket of a `1 << bits` table this signature falls into.
    ///
    /// `bits` is clamped to `1..=32`.
    #[inline]
    #[must_use]
    pub const fn bucket(self, bits: u32) -> usize {
        let bits = if bits == 0 {
            1
        } else if bits > 32 {
            32
        } else {
            bits
        };
        (self.0.wrapping_mul(GOLDEN_RATIO_32) >> (32 - bits)) as usize
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08X}", self.0)
    }
}

/// Incremental case-folding name hash (`partial_name_hash` / `end_name_hash`).
struct NameHash(u64);

impl NameHash {
    const fn new() -> Self {
        Self(0)
    }

    #[inline]
    fn push(&mut self, c: u8) {
        let c = u64::from(c.to_ascii_lowercase());
        self.0 = self.0.wrapping_add(c << 4).wrapping_add(c >> 4).wrapping_mul(11);
    }

    #[allow(clippy::cast_possible_truncation)]
    #[inline]
    const fn finish(self) -> u32 {
        (self.0.wrapping_mul(GOLDEN_RATIO_64) >> 32) as u32
    }
}
