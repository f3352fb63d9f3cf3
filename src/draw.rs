use crate::{canvas::Canvas, geometry::CanvasSpec, pixel::Rgb};

pub trait Draw {
    /// Draws the object to the given canvas.
    fn draw(&self, canvas: &mut Canvas);
}

/// A solid rectangle given by an inclusive bounding box.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Rectangle {
    pub position: (u32, u32),
    pub size: (u32, u32),
    pub fill: Rgb,
}

impl Rectangle {
    /// Creates a rectangle covering `(x1, y1)..=(x2, y2)`.
    ///
    /// # Panics
    /// * The bounding box is inverted.
    #[must_use]
    pub fn from_bounding_box(x1: u32, y1: u32, x2: u32, y2: u32) -> Self {
        assert!(x2 >= x1, "invalid bounding box");
        assert!(y2 >= y1, "invalid bounding box");

        Self {
            position: (x1, y1),
            size: (x2 - x1 + 1, y2 - y1 + 1),
            fill: Rgb::black(),
        }
    }

    #[must_use]
    pub const fn with_fill(mut self, fill: Rgb) -> Self {
        self.fill = fill;
        self
    }
}

impl Draw for Rectangle {
    fn draw(&self, canvas: &mut Canvas) {
        let (x1, y1) = self.position;
        let (w, h) = self.size;

        canvas.fill_rect(x1, y1, x1 + w - 1, y1 + h - 1, self.fill);
    }
}

/// The icon frame: a border ring of exact thickness around a background.
///
/// Drawn as two filled rectangles, the outer one in the border color and the inner one, inset by
/// the border thickness, in the background color. Every pixel of the ring is therefore covered by
/// exactly one fill and the ring is always a whole number of pixels wide.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub border: Rgb,
    pub background: Rgb,
    pub thickness: u32,
}

impl Frame {
    /// Creates the standard frame for the given canvas geometry: black border, white background.
    #[must_use]
    pub const fn for_spec(spec: &CanvasSpec) -> Self {
        Self {
            border: Rgb::black(),
            background: Rgb::white(),
            thickness: spec.border,
        }
    }
}

impl Draw for Frame {
    fn draw(&self, canvas: &mut Canvas) {
        let (width, height) = canvas.dimensions();
        let t = self.thickness;

        Rectangle::from_bounding_box(0, 0, width - 1, height - 1)
            .with_fill(self.border)
            .draw(canvas);

        if width > 2 * t && height > 2 * t {
            Rectangle::from_bounding_box(t, t, width - 1 - t, height - 1 - t)
                .with_fill(self.background)
                .draw(canvas);
        }
    }
}
