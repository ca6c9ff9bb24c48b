use core::sync::atomic::{AtomicBool, Ordering};

/// A one-way feature switch standing in for a kernel static key.
///
/// Starts disabled. The only transition is disabled → enabled, performed by
/// [`QuirkIndex::enable_quirks_for`](crate::QuirkIndex::enable_quirks_for).
/// Reads are lock-free and may happen from any CPU at any time.
#[derive(Debug)]
pub struct QuirkFlag {
    enabled: AtomicBool,
}

impl Default for QuirkFlag {
    fn default() -> Self {
        Self::new()
    }
}

impl QuirkFlag {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            enabled: AtomicBool::new(false),
        }
    }

    #[inline]
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Acquire)
    }

    /// Flip the flag on. Returns `true` only for the caller that performed
    /// the transition; concurrent or repeated calls observe `false`.
    #[inline]
    pub(crate) fn enable(&self) -> bool {
        self.enabled
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_disabled() {
        let f = QuirkFlag::new();
        assert!(!f.is_enabled());
        assert!(!QuirkFlag::default().is_enabled());
    }

    #[test]
    fn enable_reports_transition_once() {
        let f = QuirkFlag::new();
        assert!(f.enable());
        assert!(f.is_enabled());

        // already on: no second transition
        assert!(!f.enable());
        assert!(f.is_enabled());
    }
}
