//! Per-line font size fitting.

use crate::text::{TextMeasurer, TextMetrics};

/// The smallest font size, in pixels, a line is ever rendered at.
pub const MIN_FONT_SIZE: u32 = 8;

/// The largest font size, in pixels, tried when fitting a line. This is the full canvas height,
/// so the width constraint is always the one that binds.
pub const MAX_FONT_SIZE: u32 = 400;

/// A line of text together with the size it was fitted at and its metrics at that size.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FittedLine<'t> {
    pub text: &'t str,
    pub size: u32,
    pub metrics: TextMetrics,
}

impl<'t> FittedLine<'t> {
    /// Measures `text` at `size`.
    #[must_use]
    pub fn measure<M: TextMeasurer + ?Sized>(measurer: &M, text: &'t str, size: u32) -> Self {
        Self {
            text,
            size,
            metrics: measurer.measure(text, size as f32),
        }
    }
}

/// Returns the largest whole-pixel size in `min_size..=start_size` at which `text` is no wider
/// than `max_width`.
///
/// Binary search, so width must not decrease as size grows. If the text overflows even at
/// `min_size`, `min_size` is returned anyway and the line will overflow. A `min_size` above
/// `start_size` is lowered to `start_size`.
#[must_use]
pub fn fit<M: TextMeasurer + ?Sized>(
    measurer: &M,
    text: &str,
    max_width: f32,
    start_size: u32,
    min_size: u32,
) -> u32 {
    let min_size = min_size.min(start_size);

    let fits = |size: u32| {
        let width = measurer.measure(text, size as f32).width;
        log::trace!("fit {text:?} @ {size}px: width {width:.1} / {max_width:.1}");
        width <= max_width
    };

    if fits(start_size) {
        return start_size;
    }
    if !fits(min_size) {
        log::warn!("{text:?} overflows {max_width}px even at {min_size}px");
        return min_size;
    }

    // Invariant: `lo` fits, `hi` does not.
    let (mut lo, mut hi) = (min_size, start_size);
    while hi - lo > 1 {
        let mid = lo + (hi - lo) / 2;
        if fits(mid) {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    lo
}

/// Fits lines of text to a fixed width.
#[derive(Copy, Clone, Debug)]
pub struct LineFitter<'m, M: TextMeasurer + ?Sized> {
    measurer: &'m M,
    max_width: f32,
    start_size: u32,
    min_size: u32,
}

impl<'m, M: TextMeasurer + ?Sized> LineFitter<'m, M> {
    /// Creates a fitter for the given width, searching between [`MIN_FONT_SIZE`] and
    /// [`MAX_FONT_SIZE`].
    #[must_use]
    pub const fn new(measurer: &'m M, max_width: f32) -> Self {
        Self {
            measurer,
            max_width,
            start_size: MAX_FONT_SIZE,
            min_size: MIN_FONT_SIZE,
        }
    }

    /// Sets the size range searched. The bounds may be given in either order.
    #[must_use]
    pub const fn with_size_range(mut self, min_size: u32, start_size: u32) -> Self {
        if min_size <= start_size {
            self.min_size = min_size;
            self.start_size = start_size;
        } else {
            self.min_size = start_size;
            self.start_size = min_size;
        }
        self
    }

    /// Fits a single line and measures it at the chosen size.
    #[must_use]
    pub fn fit<'t>(&self, text: &'t str) -> FittedLine<'t> {
        let size = fit(self.measurer, text, self.max_width, self.start_size, self.min_size);

        FittedLine::measure(self.measurer, text, size)
    }
}
