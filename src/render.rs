//! Draws laid-out labels onto a canvas.

use crate::{
    canvas::Canvas,
    draw::{Draw, Frame},
    label::Label,
    layout::{LayoutEngine, LinePlacement},
    pixel::Rgb,
    text::TextRasterizer,
};

/// One line of text, ready to be drawn at its placement.
///
/// The glyphs are positioned so that the middle of their ink box lands on the placement's center,
/// not the font's baseline or line box.
pub struct TextLine<'a, R: TextRasterizer + ?Sized> {
    pub rasterizer: &'a R,
    pub text: &'a str,
    pub fill: Rgb,
    pub placement: LinePlacement,
}

impl<R: TextRasterizer + ?Sized> TextLine<'_, R> {
    /// Returns where the layout origin goes so the ink is centered on the placement. Not rounded.
    #[must_use]
    pub fn origin(&self) -> (f32, f32) {
        let LinePlacement {
            center_x,
            center_y,
            metrics,
            ..
        } = self.placement;

        (
            center_x - metrics.center_x_offset(),
            center_y - metrics.center_offset,
        )
    }
}

impl<R: TextRasterizer + ?Sized> Draw for TextLine<'_, R> {
    fn draw(&self, canvas: &mut Canvas) {
        let (ox, oy) = self.origin();

        for glyph in self.rasterizer.rasterize(self.text, self.placement.size as f32) {
            if glyph.width == 0 {
                continue;
            }

            let left = (ox + glyph.x).round() as i32;
            let top = (oy + glyph.y).round() as i32;

            for (row, y) in glyph.coverage.chunks_exact(glyph.width).zip(top..) {
                for (&value, x) in row.iter().zip(left..) {
                    canvas.blend_pixel(x, y, self.fill, value);
                }
            }
        }
    }
}

/// Renders labels into finished icons.
pub struct Renderer<R: TextRasterizer> {
    engine: LayoutEngine<R>,
}

impl<R: TextRasterizer> Renderer<R> {
    /// Creates a renderer for the standard canvas that measures and draws text with `rasterizer`.
    #[must_use]
    pub const fn new(rasterizer: R) -> Self {
        Self {
            engine: LayoutEngine::new(rasterizer),
        }
    }

    /// Creates a renderer around an existing layout engine.
    #[must_use]
    pub const fn from_engine(engine: LayoutEngine<R>) -> Self {
        Self { engine }
    }

    /// Returns the layout engine used to place lines.
    #[must_use]
    pub const fn engine(&self) -> &LayoutEngine<R> {
        &self.engine
    }

    /// Returns an empty icon: background and border, no text.
    #[must_use]
    pub fn blank(&self) -> Canvas {
        let spec = self.engine.spec();

        Canvas::new(spec.size, spec.size, Rgb::white()).with(&Frame::for_spec(spec))
    }

    /// Lays out and draws `label`.
    #[must_use]
    pub fn render(&self, label: &Label) -> Canvas {
        let placements = self.engine.layout(label);
        self.render_placements(label, &placements)
    }

    /// Draws `label` at precomputed placements, one per line in label order.
    ///
    /// # Panics
    /// * The number of placements differs from the number of lines.
    #[must_use]
    pub fn render_placements(&self, label: &Label, placements: &[LinePlacement]) -> Canvas {
        assert_eq!(
            label.len(),
            placements.len(),
            "exactly one placement per line is required"
        );

        let mut canvas = self.blank();
        for (line, &placement) in label.lines().iter().zip(placements) {
            canvas.draw(&TextLine {
                rasterizer: self.engine.measurer(),
                text: line.text(),
                fill: line.color(),
                placement,
            });
        }

        canvas
    }
}

/// Renders `label` with `rasterizer` on the standard canvas.
#[must_use]
pub fn render_icon<R: TextRasterizer>(label: &Label, rasterizer: R) -> Canvas {
    Renderer::new(rasterizer).render(label)
}

/// Renders `label` with `rasterizer` and returns the icon as PNG bytes.
///
/// # Errors
/// * The PNG encoder rejects the image.
pub fn render_png<R: TextRasterizer>(label: &Label, rasterizer: R) -> crate::Result<Vec<u8>> {
    crate::export::export(&render_icon(label, rasterizer))
}
