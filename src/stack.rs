//! Vertical stacking of fitted lines.

use crate::{
    fit::{FittedLine, MIN_FONT_SIZE},
    text::TextMeasurer,
};

/// Inter-line gap as a fraction of the median line height.
pub const GAP_RATIO: f64 = 0.18;

/// The result of stacking lines: final sizes and metrics, the gap between lines, and the uniform
/// scale that was applied to get there.
#[derive(Clone, Debug, PartialEq)]
pub struct StackPlan<'t> {
    pub lines: Vec<FittedLine<'t>>,
    pub gap: f32,
    pub total_height: f32,
    /// 1.0 if the width-fitted lines already fit, otherwise the factor every size and the gap
    /// were multiplied by.
    pub scale: f32,
}

impl StackPlan<'_> {
    /// Whether the downscale pass ran.
    #[must_use]
    pub fn downscaled(&self) -> bool {
        self.scale < 1.0
    }
}

/// Returns the upper median, `sorted[n / 2]`, of the line heights.
fn median_height(lines: &[FittedLine]) -> f32 {
    let mut heights = lines.iter().map(|l| l.metrics.height).collect::<Vec<_>>();
    heights.sort_by(f32::total_cmp);

    heights.get(heights.len() / 2).copied().unwrap_or(0.0)
}

/// The gap for a stack of `lines`: none for a single line, otherwise [`GAP_RATIO`] of the median
/// height rounded down, and at least one pixel.
fn gap_for(lines: &[FittedLine]) -> f32 {
    if lines.len() < 2 {
        return 0.0;
    }

    ((GAP_RATIO * f64::from(median_height(lines))).floor() as f32).max(1.0)
}

fn total_height(lines: &[FittedLine], gap: f32) -> f32 {
    let heights: f32 = lines.iter().map(|l| l.metrics.height).sum();

    heights + gap * lines.len().saturating_sub(1) as f32
}

/// Stacks fitted lines into a fixed height.
#[derive(Copy, Clone, Debug)]
pub struct StackSizer<'m, M: TextMeasurer + ?Sized> {
    measurer: &'m M,
    available_height: f32,
    min_size: u32,
}

impl<'m, M: TextMeasurer + ?Sized> StackSizer<'m, M> {
    #[must_use]
    pub const fn new(measurer: &'m M, available_height: f32) -> Self {
        Self {
            measurer,
            available_height,
            min_size: MIN_FONT_SIZE,
        }
    }

    /// Sets the size no line is scaled below.
    #[must_use]
    pub const fn with_min_size(mut self, min_size: u32) -> Self {
        self.min_size = min_size;
        self
    }

    /// Stacks `lines`, shrinking them if they do not fit.
    ///
    /// When the stack is too tall, every size and the gap are multiplied by one common factor
    /// `available / total` (rounded down, clamped to the minimum size and a one pixel gap), and the
    /// lines are measured again at their new sizes. Ink height is not exactly linear in size, so
    /// that pass can still overshoot by a few pixels; if it does, every line is shrunk one pixel
    /// at a time, together, until the stack fits or all lines are at the minimum size.
    #[must_use]
    pub fn stack<'t>(&self, lines: Vec<FittedLine<'t>>) -> StackPlan<'t> {
        let gap = gap_for(&lines);
        let total = total_height(&lines, gap);

        log::debug!(
            "stack of {} line(s): height {total:.1} / {:.1}, gap {gap}",
            lines.len(),
            self.available_height
        );

        if total <= self.available_height {
            return StackPlan {
                lines,
                gap,
                total_height: total,
                scale: 1.0,
            };
        }

        let scale = self.available_height / total;
        let mut lines = lines
            .into_iter()
            .map(|line| {
                let size = ((line.size as f32 * scale).floor() as u32).max(self.min_size);
                FittedLine::measure(self.measurer, line.text, size)
            })
            .collect::<Vec<_>>();
        let gap = if lines.len() < 2 {
            0.0
        } else {
            (gap * scale).floor().max(1.0)
        };
        let mut total = total_height(&lines, gap);
        log::debug!("downscaled by {scale:.3}: height {total:.1}, gap {gap}");

        while total > self.available_height && lines.iter().any(|l| l.size > self.min_size) {
            lines = lines
                .into_iter()
                .map(|line| {
                    let size = line.size.saturating_sub(1).max(self.min_size);
                    FittedLine::measure(self.measurer, line.text, size)
                })
                .collect();
            total = total_height(&lines, gap);
            log::trace!("trimmed one pixel: height {total:.1}");
        }

        if total > self.available_height {
            log::warn!(
                "stack still {:.1}px too tall at the minimum size",
                total - self.available_height
            );
        }

        StackPlan {
            lines,
            gap,
            total_height: total,
            scale,
        }
    }
}
