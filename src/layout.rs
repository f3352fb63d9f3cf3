//! Places the lines of a [`Label`] on the canvas.
//!
//! Layout runs in three steps. Every line is first fitted on its own to the content width
//! ([`LineFitter`]), the fitted lines are then stacked and shrunk together if the stack is too tall
//! ([`StackSizer`]), and finally the stack is centered in the content area. Each line is centered
//! horizontally on its own, so shorter lines sit in the middle rather than against the left edge.

use crate::{
    fit::LineFitter,
    geometry::CanvasSpec,
    label::Label,
    stack::StackSizer,
    text::{TextMeasurer, TextMetrics},
};

/// Where and how large one line is drawn.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LinePlacement {
    /// Font size in pixels.
    pub size: u32,
    /// X the middle of the line's ink lands on. The same for every line.
    pub center_x: f32,
    /// Y the middle of the line's ink lands on.
    pub center_y: f32,
    /// The line's ink metrics at `size`. The renderer uses these to find the glyph origin.
    pub metrics: TextMetrics,
}

impl LinePlacement {
    /// Width of the line's ink.
    #[must_use]
    pub fn width(&self) -> f32 {
        self.metrics.width
    }

    /// Height of the line's ink.
    #[must_use]
    pub fn height(&self) -> f32 {
        self.metrics.height
    }

    /// Y of the top of the line's ink.
    #[must_use]
    pub fn top(&self) -> f32 {
        self.center_y - self.metrics.height / 2.0
    }

    /// Y of the bottom of the line's ink.
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.center_y + self.metrics.height / 2.0
    }

    /// X of the left edge of the line's ink.
    #[must_use]
    pub fn left(&self) -> f32 {
        self.center_x - self.metrics.width / 2.0
    }

    /// X of the right edge of the line's ink.
    #[must_use]
    pub fn right(&self) -> f32 {
        self.center_x + self.metrics.width / 2.0
    }
}

/// The full outcome of laying out a label.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutPlan {
    /// One placement per line, in label order.
    pub placements: Vec<LinePlacement>,
    /// The size each line was fitted at before any downscaling, in label order.
    pub fitted_sizes: Vec<u32>,
    /// Vertical space between consecutive lines.
    pub gap: f32,
    /// Height of the whole stack, from the top of the first line to the bottom of the last.
    pub total_height: f32,
    /// The uniform factor applied by the downscale pass, 1.0 if it did not run.
    pub scale: f32,
}

/// Lays out labels with a given text measurer.
#[derive(Clone, Debug)]
pub struct LayoutEngine<M: TextMeasurer> {
    measurer: M,
    spec: CanvasSpec,
}

impl<M: TextMeasurer> LayoutEngine<M> {
    /// Creates a layout engine for the standard canvas.
    #[must_use]
    pub const fn new(measurer: M) -> Self {
        Self {
            measurer,
            spec: CanvasSpec::STANDARD,
        }
    }

    /// Sets the canvas geometry to lay out for.
    #[must_use]
    pub const fn with_spec(mut self, spec: CanvasSpec) -> Self {
        self.spec = spec;
        self
    }

    /// Returns the measurer this engine uses.
    #[must_use]
    pub const fn measurer(&self) -> &M {
        &self.measurer
    }

    /// Returns the canvas geometry this engine lays out for.
    #[must_use]
    pub const fn spec(&self) -> &CanvasSpec {
        &self.spec
    }

    /// Computes one placement per line of `label`, in order.
    #[must_use]
    pub fn layout(&self, label: &Label) -> Vec<LinePlacement> {
        self.plan(label).placements
    }

    /// Like [`layout`][Self::layout], but also returns the intermediate sizing decisions.
    #[must_use]
    pub fn plan(&self, label: &Label) -> LayoutPlan {
        let content = self.spec.content_area();

        let fitter = LineFitter::new(&self.measurer, content.width as f32);
        let fitted = label
            .lines()
            .iter()
            .map(|line| fitter.fit(line.text()))
            .collect::<Vec<_>>();
        let fitted_sizes = fitted.iter().map(|line| line.size).collect();

        let stack = StackSizer::new(&self.measurer, content.height as f32).stack(fitted);

        let center_x = content.center_x();
        let mut y = content.center_y() - stack.total_height / 2.0;
        let placements = stack
            .lines
            .iter()
            .map(|line| {
                let height = line.metrics.height;
                let placement = LinePlacement {
                    size: line.size,
                    center_x,
                    center_y: y + height / 2.0,
                    metrics: line.metrics,
                };
                y += height + stack.gap;

                log::debug!(
                    "{:?}: {}px at ({:.1}, {:.1}), ink {:.1}x{:.1}",
                    line.text,
                    placement.size,
                    placement.center_x,
                    placement.center_y,
                    placement.width(),
                    placement.height(),
                );
                placement
            })
            .collect();

        LayoutPlan {
            placements,
            fitted_sizes,
            gap: stack.gap,
            total_height: stack.total_height,
            scale: stack.scale,
        }
    }
}
