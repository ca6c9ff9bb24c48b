//! Implementation-version range expressions.
//!
//! A quirk may restrict itself to a span of firmware implementation versions.
//! The span is authored as text and parsed once when the index is built:
//!
//! | Text     | Interval               |
//! |----------|------------------------|
//! | *absent* | `[0, 0xFFFF_FFFF]`     |
//! | `"X"`    | `[X, X]`               |
//! | `"X-"`   | `[X, 0xFFFF_FFFF]`     |
//! | `"-X"`   | `[0, X]`               |
//! | `"X-Y"`  | `[X, Y]`               |
//!
//! Bounds are unsigned 32-bit literals in decimal, `0x` hexadecimal or
//! leading-zero octal. Both ends are inclusive and `start <= end` must hold.

use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;

/// A range expression that cannot be turned into a non-empty interval.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidRangeExpression {
    #[error("invalid version number {text:?}")]
    BadNumber { text: String },
    #[error("inverted version range 0x{start:08X}-0x{end:08X}")]
    Inverted { start: u32, end: u32 },
}

/// Closed interval of implementation versions.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct VersionRange {
    start: u32,
    end: u32,
}

impl Default for VersionRange {
    fn default() -> Self {
        Self::FULL
    }
}

impl VersionRange {
    /// Matches every version.
    pub const FULL: Self = Self {
        start: 0,
        end: u32::MAX,
    };

    /// # Errors
    /// [`InvalidRangeExpression::Inverted`] if `start > end`.
    pub const fn new(start: u32, end: u32) -> Result<Self, InvalidRangeExpression> {
        if start > end {
            return Err(InvalidRangeExpression::Inverted { start, end });
        }
        Ok(Self { start, end })
    }

    /// Parse an optional range expression. `None` and `""` both yield [`Self::FULL`].
    ///
    /// The first `-` splits the bounds; its position selects the form.
    ///
    /// # Errors
    /// Any required bound that is not a valid number, or a parsed `start > end`.
    pub fn parse(text: Option<&str>) -> Result<Self, InvalidRangeExpression> {
        let Some(text) = text.filter(|t| !t.is_empty()) else {
            return Ok(Self::FULL);
        };

        match text.find('-') {
            None => {
                let v = parse_bound(text)?;
                Ok(Self { start: v, end: v })
            }
            // "-X"
            Some(0) => Self::new(0, parse_bound(&text[1..])?),
            // "X-"
            Some(sep) if sep == text.len() - 1 => Self::new(parse_bound(&text[..sep])?, u32::MAX),
            // "X-Y"
            Some(sep) => Self::new(parse_bound(&text[..sep])?, parse_bound(&text[sep + 1..])?),
        }
    }

    #[inline]
    #[must_use]
    pub const fn start(&self) -> u32 {
        self.start
    }

    #[inline]
    #[must_use]
    pub const fn end(&self) -> u32 {
        self.end
    }

    #[inline]
    #[must_use]
    pub const fn contains(&self, version: u32) -> bool {
        self.start <= version && version <= self.end
    }
}

impl FromStr for VersionRange {
    type Err = InvalidRangeExpression;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(Some(s))
    }
}

impl fmt::Display for VersionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[0x{:08X}-0x{:08X}]", self.start, self.end)
    }
}

/// Parse an unsigned 32-bit literal the way the kernel's `kstrtouint(s, 0, ..)` does.
///
/// Accepts an optional leading `+`, a `0x`/`0X` (hex) or `0` (octal) prefix,
/// and a single trailing newline.
#[must_use]
pub fn parse_version(text: &str) -> Option<u32> {
    let digits = text.strip_suffix('\n').unwrap_or(text);
    let digits = digits.strip_prefix('+').unwrap_or(digits);

    let (radix, digits) = if let Some(hex) = digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
    {
        (16, hex)
    } else if digits.len() > 1 && digits.starts_with('0') {
        (8, &digits[1..])
    } else {
        (10, digits)
    };

    // from_str_radix would let another sign through
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    u32::from_str_radix(digits, radix).ok()
}

fn parse_bound(text: &str) -> Result<u32, InvalidRangeExpression> {
    parse_version(text).ok_or_else(|| InvalidRangeExpression::BadNumber {
        text: text.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(text: &str) -> Result<(u32, u32), InvalidRangeExpression> {
        VersionRange::parse(Some(text)).map(|r| (r.start(), r.end()))
    }

    #[test]
    fn absent_or_empty_is_full() {
        assert_eq!(VersionRange::parse(None), Ok(VersionRange::FULL));
        assert_eq!(range(""), Ok((0, u32::MAX)));
    }

    #[test]
    fn single_open_and_closed_forms() {
        assert_eq!(range("5"), Ok((5, 5)));
        assert_eq!(range("5-"), Ok((5, u32::MAX)));
        assert_eq!(range("-5"), Ok((0, 5)));
        assert_eq!(range("5-10"), Ok((5, 10)));
        assert_eq!(range("0x20000-"), Ok((0x2_0000, u32::MAX)));
        assert_eq!(range("0x10-0x1F"), Ok((0x10, 0x1F)));
    }

    #[test]
    fn inverted_range_fails() {
        assert_eq!(
            range("10-5"),
            Err(InvalidRangeExpression::Inverted { start: 10, end: 5 })
        );
    }

    #[test]
    fn malformed_text_fails() {
        assert!(matches!(
            range("abc"),
            Err(InvalidRangeExpression::BadNumber { .. })
        ));
        assert!(range("-").is_err());
        assert!(range("1-2-3").is_err());
        assert!(range("--5").is_err());
        assert!(range("5 - 10").is_err());
        assert!(range("0x").is_err());
        assert!(range("4294967296").is_err());
    }

    #[test]
    fn bad_number_names_offending_part() {
        assert_eq!(
            range("7-zz"),
            Err(InvalidRangeExpression::BadNumber { text: "zz".into() })
        );
    }

    #[test]
    fn number_forms() {
        assert_eq!(parse_version("0"), Some(0));
        assert_eq!(parse_version("42"), Some(42));
        assert_eq!(parse_version("+42"), Some(42));
        assert_eq!(parse_version("0x2A"), Some(42));
        assert_eq!(parse_version("0X2a"), Some(42));
        assert_eq!(parse_version("052"), Some(42));
        assert_eq!(parse_version("42\n"), Some(42));
        assert_eq!(parse_version("0xFFFFFFFF"), Some(u32::MAX));

        assert_eq!(parse_version(""), None);
        assert_eq!(parse_version("+"), None);
        assert_eq!(parse_version("-1"), None);
        assert_eq!(parse_version("++1"), None);
        assert_eq!(parse_version("08"), None);
        assert_eq!(parse_version("0x+1"), None);
        assert_eq!(parse_version(" 1"), None);
    }

    #[test]
    fn bounds_are_inclusive() {
        let r = VersionRange::new(100, 200).unwrap();
        assert!(!r.contains(99));
        assert!(r.contains(100));
        assert!(r.contains(200));
        assert!(!r.contains(201));
        assert!(VersionRange::FULL.contains(0));
        assert!(VersionRange::FULL.contains(u32::MAX));
    }

    #[test]
    fn from_str_and_display() {
        let r: VersionRange = "0x10-0x20".parse().unwrap();
        assert_eq!(r.to_string(), "[0x00000010-0x00000020]");
    }
}
