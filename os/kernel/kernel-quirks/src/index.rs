//! Signature index over a quirk registry and the device lookup on top of it.

use crate::identity::DeviceIdentity;
use crate::quirk::Quirk;
use crate::range::VersionRange;
use crate::signature::Signature;
use alloc::vec;
use alloc::vec::Vec;

/// Table size exponent used by [`QuirkIndex::build`]: 16 buckets.
pub const DEFAULT_HASH_BITS: u32 = 4;

/// Largest accepted table size exponent.
pub const MAX_HASH_BITS: u32 = 16;

/// A registry entry that passed validation.
#[derive(Debug, Copy, Clone)]
pub struct IndexedQuirk<'a> {
    quirk: &'a Quirk,
    range: VersionRange,
    signature: Signature,
}

impl<'a> IndexedQuirk<'a> {
    #[must_use]
    pub const fn quirk(&self) -> &'a Quirk {
        self.quirk
    }

    #[must_use]
    pub const fn range(&self) -> VersionRange {
        self.range
    }

    #[must_use]
    pub const fn signature(&self) -> Signature {
        self.signature
    }
}

/// Read-only lookup structure over a quirk registry.
///
/// Buckets are collision domains: an entry lands in a bucket by its signature,
/// and a bucket may hold entries whose signatures differ. Lookups therefore
/// compare the stored signature against the probe before accepting a match.
/// Two different patterns with the same 32-bit signature are indistinguishable.
#[derive(Debug)]
pub struct QuirkIndex<'a> {
    registry: &'a [&'a Quirk],
    entries: Vec<IndexedQuirk<'a>>,
    buckets: Vec<Vec<usize>>,
    bits: u32,
}

impl<'a> QuirkIndex<'a> {
    /// Build the index with [`DEFAULT_HASH_BITS`].
    #[must_use]
    pub fn build(registry: &'a [&'a Quirk]) -> Self {
        Self::build_with_bits(registry, DEFAULT_HASH_BITS)
    }

    /// Build the index over `1 << bits` buckets (`bits` clamped to `1..=MAX_HASH_BITS`).
    ///
    /// Entries whose version range does not parse are logged and left out;
    /// they can never be enabled. Registry order is kept within each bucket.
    #[must_use]
    pub fn build_with_bits(registry: &'a [&'a Quirk], bits: u32) -> Self {
        let bits = bits.clamp(1, MAX_HASH_BITS);
        let mut entries = Vec::with_capacity(registry.len());
        let mut buckets = vec![Vec::new(); 1 << bits];

        for &quirk in registry {
            let range = match VersionRange::parse(quirk.impl_ver_range()) {
                Ok(range) => range,
                Err(err) => {
                    log::error!(
                        "skip quirk [{}] - bad range {:?}: {err}",
                        quirk.name(),
                        quirk.impl_ver_range().unwrap_or_default()
                    );
                    continue;
                }
            };

            let signature = Signature::of(quirk.compatible(), quirk.vendor(), quirk.sub_vendor());
            buckets[signature.bucket(bits)].push(entries.len());
            entries.push(IndexedQuirk {
                quirk,
                range,
                signature,
            });

            log::debug!(
                "registered quirk [{}] - key [{signature}] - {}/{range}",
                quirk.name(),
                quirk.pattern()
            );
        }

        log::debug!(
            "quirks initialized: {} indexed, {} skipped",
            entries.len(),
            registry.len() - entries.len()
        );

        Self {
            registry,
            entries,
            buckets,
            bits,
        }
    }

    /// Enable every not-yet-enabled quirk matching `identity`.
    ///
    /// Probes the six field combinations of [`DeviceIdentity::probe_signatures`]
    /// and enables all matches at every level, not just the first. A quirk is a
    /// process-wide switch: once on, it is skipped by later lookups for any device.
    ///
    /// Returns the names of the quirks this call enabled, in enable order.
    pub fn enable_quirks_for(&self, identity: &DeviceIdentity<'_>) -> Vec<&'a str> {
        log::debug!("looking for quirks matching: {identity}");

        let mut enabled = Vec::new();
        for signature in identity.probe_signatures() {
            for &slot in &self.buckets[signature.bucket(self.bits)] {
                let entry = &self.entries[slot];
                if entry.quirk.is_enabled()
                    || entry.signature != signature
                    || !entry.range.contains(identity.impl_version)
                {
                    continue;
                }

                // another device got here first
                if !entry.quirk.flag().enable() {
                    continue;
                }

                log::info!("enabling quirk [{}]", entry.quirk.name());
                log::debug!(
                    "quirk matched on: {}/{} by {identity}",
                    entry.quirk.pattern(),
                    entry.range
                );
                enabled.push(entry.quirk.name());
            }
        }
        enabled
    }

    /// Whether the registered quirk called `name` is on.
    ///
    /// Unknown names report `false`.
    #[must_use]
    pub fn is_quirk_enabled(&self, name: &str) -> bool {
        self.registry
            .iter()
            .any(|q| q.name() == name && q.is_enabled())
    }

    /// Registered quirks that made it into the index, in registry order.
    pub fn entries(&self) -> impl ExactSizeIterator<Item = &IndexedQuirk<'a>> {
        self.entries.iter()
    }

    #[must_use]
    pub fn indexed(&self) -> usize {
        self.entries.len()
    }

    /// Registered quirks left out because of a bad range.
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.registry.len() - self.entries.len()
    }

    #[must_use]
    pub const fn hash_bits(&self) -> u32 {
        self.bits
    }
}
