//! Quirks known to the platform firmware interface.
//!
//! Feature-gated code checks these with [`quirk!`](crate::quirk!); the
//! subsystem builds a [`QuirkIndex`](crate::QuirkIndex) over [`QUIRKS`] once
//! and looks up every discovered firmware instance against it.

use crate::Quirk;

define_quirk!(
    /// Clock rate triplets that do not follow the protocol layout.
    pub CLOCK_RATES_TRIPLET_OUT_OF_SPEC,
    "clock_rates_triplet_out_of_spec",
    None,
    None,
    None,
    None
);

define_quirk!(
    /// Performance level get must go through fast channels.
    pub PERF_LEVEL_GET_FC_FORCE,
    "perf_level_get_fc_force",
    None,
    Some("Qualcomm"),
    None,
    Some("0x20000-")
);

/// Every built-in quirk, in registration order.
pub static QUIRKS: [&Quirk; 2] = [&CLOCK_RATES_TRIPLET_OUT_OF_SPEC, &PERF_LEVEL_GET_FC_FORCE];
