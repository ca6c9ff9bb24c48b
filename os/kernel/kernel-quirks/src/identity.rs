use crate::quirk::Pattern;
use crate::signature::Signature;
use core::fmt;

/// Field inclusion (compatible, vendor, sub-vendor) for each lookup probe,
/// most specific first: with the compatible string, then without it; within
/// each, the sub-vendor is dropped first, then the vendor.
const PROBE_MASKS: [(bool, bool, bool); 6] = [
    (true, true, true),
    (true, true, false),
    (true, false, false),
    (false, true, true),
    (false, true, false),
    (false, false, false),
];

/// Identity of a discovered device, as reported by its firmware.
///
/// Absent strings behave like empty ones.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct DeviceIdentity<'a> {
    pub compatible: Option<&'a str>,
    pub vendor: Option<&'a str>,
    pub sub_vendor: Option<&'a str>,
    pub impl_version: u32,
}

impl<'a> DeviceIdentity<'a> {
    #[must_use]
    pub const fn new(
        compatible: Option<&'a str>,
        vendor: Option<&'a str>,
        sub_vendor: Option<&'a str>,
        impl_version: u32,
    ) -> Self {
        Self {
            compatible,
            vendor,
            sub_vendor,
            impl_version,
        }
    }

    /// The identity with some fields wildcarded out.
    const fn masked(&self, (compatible, vendor, sub_vendor): (bool, bool, bool)) -> Pattern<'a> {
        Pattern {
            compatible: if compatible { self.compatible } else { None },
            vendor: if vendor { self.vendor } else { None },
            sub_vendor: if sub_vendor { self.sub_vendor } else { None },
        }
    }

    /// The six signatures to look up, from most to least specific.
    pub fn probe_signatures(&self) -> impl Iterator<Item = Signature> + '_ {
        PROBE_MASKS.iter().map(move |&mask| {
            let p = self.masked(mask);
            Signature::of(p.compatible, p.vendor, p.sub_vendor)
        })
    }
}

impl fmt::Display for DeviceIdentity<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}/0x{:08X}",
            self.compatible.unwrap_or_default(),
            self.vendor.unwrap_or_default(),
            self.sub_vendor.unwrap_or_default(),
            self.impl_version
        )
    }
}
