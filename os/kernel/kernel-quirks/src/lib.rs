//! # Firmware Quirk Matching
//!
//! This crate decides which firmware workarounds ("quirks") apply to a device
//! discovered at runtime. Every quirk is a named, one-way feature flag that is
//! declared statically together with a pattern describing the firmware it is
//! meant for. At probe time the device reports its identity and every quirk
//! whose pattern matches gets switched on, once, for the rest of the system's
//! lifetime.
//!
//! ## Overview
//!
//! ```text
//! define_quirk! statics ──► registry (&[&Quirk])
//!                                 │
//!                        QuirkIndex::build         (once, at subsystem init)
//!                                 │
//!                                 ▼
//!                 signature buckets + parsed ranges
//!                                 ▲
//!            QuirkIndex::enable_quirks_for(identity)  (once per device)
//!                                 │
//!                                 ▼
//!                    QuirkFlag: disabled ──► enabled
//! ```
//!
//! ## Matching Pattern
//!
//! A quirk names up to four tokens, each of which may be left out to mean
//! "any value":
//!
//! * **compatible**: the firmware node's compatible string
//! * **vendor**: the vendor string reported by the firmware
//! * **sub-vendor**: the sub-vendor string reported by the firmware
//! * **implementation version**: a range expression (see [`range`])
//!
//! String tokens compare case-insensitively.
//!
//! ## Lookup
//!
//! The three string tokens are folded into a 32-bit [`Signature`] which keys
//! the index. A device identity is looked up under six signatures, from the
//! fully qualified one down to the all-wildcard one:
//!
//! 1. compatible / vendor / sub-vendor
//! 2. compatible / vendor
//! 3. compatible
//! 4. vendor / sub-vendor
//! 5. vendor
//! 6. *(nothing)*
//!
//! Every matching quirk on every level is enabled, not only the most specific
//! one. Since only signatures are compared, two different patterns that hash
//! to the same value are treated as the same pattern.
//!
//! ## Concurrency
//!
//! The index is immutable once built and can be shared between CPUs. The
//! only runtime state is each quirk's flag, switched with a compare-and-set,
//! so a quirk is reported as newly enabled exactly once even when several
//! devices probe concurrently.
//!
//! ## Usage
//!
//! ```rust
//! use kernel_quirks::{DeviceIdentity, Quirk, QuirkIndex, define_quirk, quirk};
//!
//! define_quirk!(
//!     pub SLOW_RESET,
//!     "slow_reset",
//!     None,
//!     Some("Acme"),
//!     None,
//!     Some("0x100-0x1FF")
//! );
//! static REGISTRY: [&Quirk; 1] = [&SLOW_RESET];
//!
//! let index = QuirkIndex::build(&REGISTRY);
//!
//! let device = DeviceIdentity::new(Some("acme,fw"), Some("ACME"), None, 0x180);
//! assert_eq!(index.enable_quirks_for(&device), ["quirk_slow_reset"]);
//! assert!(index.is_quirk_enabled("quirk_slow_reset"));
//!
//! let mut reset_delay_ms = 10;
//! quirk!(SLOW_RESET, {
//!     reset_delay_ms = 100;
//! });
//! assert_eq!(reset_delay_ms, 100);
//! ```

#![cfg_attr(not(any(test, doctest)), no_std)]

extern crate alloc;

/// Declare a quirk as a `static` [`Quirk`].
///
/// ```text
/// define_quirk!(vis NAME, "name", compatible, vendor, sub_vendor, range);
/// ```
///
/// The diagnostic name becomes `quirk_<name>`. Every token is an
/// `Option<&'static str>` with `None` meaning "any". Use `pub` to make the
/// flag reachable from other crates. Several quirks may share one pattern.
#[macro_export]
macro_rules! define_quirk {
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident,
        $diag:literal,
        $compatible:expr,
        $vendor:expr,
        $sub_vendor:expr,
        $range:expr $(,)?
    ) => {
        $(#[$meta])*
        $vis static $name: $crate::Quirk = $crate::Quirk::new(
            concat!("quirk_", $diag),
            $compatible,
            $vendor,
            $sub_vendor,
            $range,
        );
    };
}

/// Run `code` only if the quirk is enabled.
#[macro_export]
macro_rules! quirk {
    ($quirk:expr, $code:block) => {
        if $quirk.is_enabled() $code
    };
}

mod flag;
mod identity;
mod index;
mod quirk;
pub mod range;
pub mod signature;

#[cfg(feature = "builtin")]
pub mod builtin;

pub use flag::QuirkFlag;
pub use identity::DeviceIdentity;
pub use index::{DEFAULT_HASH_BITS, IndexedQuirk, MAX_HASH_BITS, QuirkIndex};
pub use quirk::{Pattern, Quirk};
pub use range::{InvalidRangeExpression, VersionRange, parse_version};
pub use signature::Signature;
