use crate::flag::QuirkFlag;
use core::fmt;

/// A statically registered quirk: a named flag plus the pattern that turns it on.
///
/// Each matching token is either a fixed string or `None` (any value). The
/// range text is kept as authored and parsed when the index is built.
///
/// Usually declared through [`define_quirk!`](crate::define_quirk!).
#[derive(Debug)]
pub struct Quirk {
    name: &'static str,
    compatible: Option<&'static str>,
    vendor: Option<&'static str>,
    sub_vendor: Option<&'static str>,
    impl_ver_range: Option<&'static str>,
    flag: QuirkFlag,
}

impl Quirk {
    #[must_use]
    pub const fn new(
        name: &'static str,
        compatible: Option<&'static str>,
        vendor: Option<&'static str>,
        sub_vendor: Option<&'static str>,
        impl_ver_range: Option<&'static str>,
    ) -> Self {
        Self {
            name,
            compatible,
            vendor,
            sub_vendor,
            impl_ver_range,
            flag: QuirkFlag::new(),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub const fn compatible(&self) -> Option<&'static str> {
        self.compatible
    }

    #[must_use]
    pub const fn vendor(&self) -> Option<&'static str> {
        self.vendor
    }

    #[must_use]
    pub const fn sub_vendor(&self) -> Option<&'static str> {
        self.sub_vendor
    }

    #[must_use]
    pub const fn impl_ver_range(&self) -> Option<&'static str> {
        self.impl_ver_range
    }

    #[must_use]
    pub const fn flag(&self) -> &QuirkFlag {
        &self.flag
    }

    #[inline]
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.flag.is_enabled()
    }

    /// `compatible/vendor/sub_vendor` with `*` for wildcards.
    #[must_use]
    pub const fn pattern(&self) -> Pattern<'static> {
        Pattern {
            compatible: self.compatible,
            vendor: self.vendor,
            sub_vendor: self.sub_vendor,
        }
    }
}

/// Display helper for a (compatible, vendor, sub-vendor) triple.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Pattern<'a> {
    pub compatible: Option<&'a str>,
    pub vendor: Option<&'a str>,
    pub sub_vendor: Option<&'a str>,
}

impl fmt::Display for Pattern<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}",
            self.compatible.unwrap_or("*"),
            self.vendor.unwrap_or("*"),
            self.sub_vendor.unwrap_or("*")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_are_kept_as_authored() {
        let q = Quirk::new("quirk_x", None, Some("Acme"), None, Some("0x10-"));
        assert_eq!(q.name(), "quirk_x");
        assert_eq!(q.compatible(), None);
        assert_eq!(q.vendor(), Some("Acme"));
        assert_eq!(q.sub_vendor(), None);
        assert_eq!(q.impl_ver_range(), Some("0x10-"));
        assert!(!q.is_enabled());
    }

    #[test]
    fn pattern_shows_wildcards() {
        let q = Quirk::new("quirk_x", Some("arm,scmi"), None, Some("x1e"), None);
        assert_eq!(q.pattern().to_string(), "arm,scmi/*/x1e");
    }
}
