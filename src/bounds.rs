use core::ops::Range;

/// Index window covered by a bar
///
/// Built from a signed start and length. The end is taken from the
/// unclamped start, so a bar that begins left of the strip loses its
/// leading pixels instead of shifting right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarWindow {
    pub start: usize,
    pub end: usize,
}

impl BarWindow {
    /// Empty window
    pub const EMPTY: Self = Self { start: 0, end: 0 };

    /// Resolve the window of `length` pixels at `start` on a strip of `len` LEDs
    #[allow(clippy::cast_sign_loss)]
    pub fn resolve(start: i32, length: i32, len: usize) -> Self {
        if length <= 0 {
            return Self::EMPTY;
        }
        let end = start.saturating_add(length);
        if end <= 0 {
            return Self::EMPTY;
        }
        let start = start.max(0) as usize;
        let end = (end as usize).min(len);
        if start >= end {
            return Self::EMPTY;
        }

        Self { start, end }
    }

    /// Get the number of LEDs in the window
    ///
    /// An inverted window counts as empty.
    pub const fn count(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub const fn is_empty(self) -> bool {
        self.start >= self.end
    }

    /// Index range of the window, collapsed to `start..start` when inverted
    pub const fn range(self) -> Range<usize> {
        if self.is_empty() {
            return self.start..self.start;
        }
        self.start..self.end
    }
}

/// Get a slice of the LEDs within the window
pub(crate) fn bounded(leds: &mut [u32], window: BarWindow) -> &mut [u32] {
    &mut leds[window.range()]
}
