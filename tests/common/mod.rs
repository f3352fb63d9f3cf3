#![allow(dead_code)]

use iconlabel::prelude::*;
use iconlabel::text::{ink_bounds, GlyphBitmap};

pub const COLORS: [Rgb; 4] = [
    Rgb::new(232, 17, 35),
    Rgb::new(0, 120, 212),
    Rgb::new(16, 124, 16),
    Rgb::new(92, 45, 145),
];

/// A condensed test face where every non-space character is a solid block.
///
/// Blocks are `0.3 * size` wide and `0.9 * size` tall, advance by `0.35 * size`, and start
/// `0.1 * size` below the origin. Everything is rounded to whole pixels so measured and rasterized
/// ink agree exactly.
pub struct BlockFont;

impl BlockFont {
    fn glyphs(text: &str, size: f32) -> Vec<GlyphBitmap> {
        let width = (0.3 * size).round() as usize;
        let height = (0.9 * size).round() as usize;
        let y = (0.1 * size).round();

        text.chars()
            .enumerate()
            .filter(|(_, c)| !c.is_whitespace())
            .map(|(i, _)| GlyphBitmap {
                x: (0.35 * size * i as f32).round(),
                y,
                width,
                height,
                coverage: vec![255; width * height],
            })
            .collect()
    }
}

impl TextMeasurer for BlockFont {
    fn measure(&self, text: &str, size: f32) -> TextMetrics {
        ink_bounds(Self::glyphs(text, size).iter().map(|g| {
            (g.x, g.y, g.width as f32, g.height as f32)
        }))
    }
}

impl TextRasterizer for BlockFont {
    fn rasterize(&self, text: &str, size: f32) -> Vec<GlyphBitmap> {
        Self::glyphs(text, size)
    }
}

pub fn label(lines: &[&str]) -> Label {
    Label::from_pairs(lines.iter().zip(COLORS).map(|(&text, color)| (text, color)))
        .expect("test label is valid")
}

pub fn content_width() -> f32 {
    CanvasSpec::STANDARD.content_area().width as f32
}

pub fn content_height() -> f32 {
    CanvasSpec::STANDARD.content_area().height as f32
}
