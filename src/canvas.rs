use crate::{draw::Draw, pixel::Rgb};

/// A fixed-size, opaque RGB raster that icons are drawn onto.
///
/// Pixels are stored row-major. Coordinates outside of the canvas are silently ignored by the
/// drawing helpers, which lets text glyphs hang off the edge without special casing.
#[derive(Clone)]
pub struct Canvas {
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) data: Vec<Rgb>,
}

impl Canvas {
    /// Creates a new canvas with the given dimensions, filled with the given color.
    ///
    /// # Panics
    /// * Either dimension is zero.
    #[must_use]
    pub fn new(width: u32, height: u32, fill: Rgb) -> Self {
        assert!(width > 0 && height > 0, "canvas dimensions must be non-zero");

        Self {
            width,
            height,
            data: vec![fill; (width * height) as usize],
        }
    }

    #[inline]
    #[must_use]
    const fn resolve_coordinate(&self, x: u32, y: u32) -> usize {
        (y * self.width + x) as usize
    }

    /// Returns the width of the canvas.
    #[inline]
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Returns the height of the canvas.
    #[inline]
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Returns the dimensions of the canvas.
    #[inline]
    #[must_use]
    pub const fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Returns a Vec of slices representing the pixels of the canvas.
    /// Each slice in the Vec is a row.
    #[inline]
    #[must_use]
    pub fn pixels(&self) -> Vec<&[Rgb]> {
        self.data.chunks_exact(self.width as usize).collect()
    }

    /// Returns a reference of the pixel at the given coordinates.
    ///
    /// # Panics
    /// * The coordinates are out of bounds.
    #[inline]
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> &Rgb {
        &self.data[self.resolve_coordinate(x, y)]
    }

    /// Blends `fill` over the pixel at the given signed coordinates with the given coverage.
    /// Out-of-bounds coordinates are ignored.
    #[inline]
    pub fn blend_pixel(&mut self, x: i32, y: i32, fill: Rgb, coverage: u8) {
        if coverage == 0 || x < 0 || y < 0 {
            return;
        }

        let (x, y) = (x as u32, y as u32);
        if x < self.width && y < self.height {
            let pos = self.resolve_coordinate(x, y);
            self.data[pos] = self.data[pos].blend(fill, coverage);
        }
    }

    /// Fills the inclusive rectangle `(x1, y1)..=(x2, y2)` with a solid color, clamped to the
    /// canvas bounds.
    pub fn fill_rect(&mut self, x1: u32, y1: u32, x2: u32, y2: u32, fill: Rgb) {
        let x2 = x2.min(self.width - 1);
        let y2 = y2.min(self.height - 1);
        if x1 > x2 || y1 > y2 {
            return;
        }

        let width = self.width as usize;
        for row in self.data.chunks_exact_mut(width).skip(y1 as usize).take((y2 - y1 + 1) as usize) {
            row[x1 as usize..=x2 as usize].fill(fill);
        }
    }

    /// Draws the given object onto this canvas.
    pub fn draw(&mut self, entity: &impl Draw) {
        entity.draw(self);
    }

    /// Takes this canvas and draws the given object onto it. Useful for method chaining.
    #[must_use]
    pub fn with(mut self, entity: &impl Draw) -> Self {
        self.draw(entity);
        self
    }

    /// Returns the raw pixel data as interleaved 8-bit RGB bytes.
    #[must_use]
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        self.data.iter().flat_map(|p| p.as_bytes()).collect()
    }
}
