//! Fixed canvas geometry.

/// Canvas dimensions and insets. Icons are only ever rendered with [`CanvasSpec::STANDARD`]; the
/// fields are public so layout code can read them without hard-coding numbers.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct CanvasSpec {
    /// Width and height of the square canvas, in pixels.
    pub size: u32,
    /// Thickness of the border ring, in pixels.
    pub border: u32,
    /// Blank space between the border and the text, in pixels.
    pub margin: u32,
}

impl CanvasSpec {
    /// 400x400 canvas, 5px border, 5px margin.
    pub const STANDARD: Self = Self {
        size: 400,
        border: 5,
        margin: 5,
    };

    /// Distance from each canvas edge to the content area.
    #[must_use]
    pub const fn inset(&self) -> u32 {
        self.border + self.margin
    }

    /// Returns the region text may be drawn in.
    #[must_use]
    pub const fn content_area(&self) -> ContentArea {
        let inset = self.inset();

        ContentArea {
            left: inset,
            top: inset,
            width: self.size - 2 * inset,
            height: self.size - 2 * inset,
        }
    }
}

impl Default for CanvasSpec {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// The rectangle inside the border and margin.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ContentArea {
    pub left: u32,
    pub top: u32,
    pub width: u32,
    pub height: u32,
}

impl ContentArea {
    /// Horizontal center. Rounded down to a whole pixel so every line shares one exact column.
    #[must_use]
    pub fn center_x(&self) -> f32 {
        (self.left + self.width / 2) as f32
    }

    /// Vertical center.
    #[must_use]
    pub fn center_y(&self) -> f32 {
        self.top as f32 + self.height as f32 / 2.0
    }
}
