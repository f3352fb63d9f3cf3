//! Text measurement and rasterization.
//!
//! Layout only ever talks to a [`TextMeasurer`], and the renderer to a [`TextRasterizer`]. The
//! crate ships one implementation, [`Font`], backed by `fontdue`; anything else that can report
//! ink bounds and coverage bitmaps (a test double, a different rasterizer) can be plugged in.

#![allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]

use std::sync::Arc;

/// The ink bounds of a run of text at a given size.
///
/// All values are in pixels and relative to the layout origin: the top-left corner of the line box
/// the backend lays the text out in, with y growing downward. The ink box is the union of the
/// glyph bitmaps, so it hugs the visible letters rather than the font's ascender/descender lines.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct TextMetrics {
    /// Width of the ink box.
    pub width: f32,
    /// Height of the ink box.
    pub height: f32,
    /// Horizontal distance from the origin to the left edge of the ink box.
    pub left: f32,
    /// Vertical distance from the origin to the middle of the ink box.
    ///
    /// Placing text so that `origin.y + center_offset` equals a target y centers the visible
    /// glyphs on that y, regardless of how tall the font's ascent and descent are.
    pub center_offset: f32,
}

impl TextMetrics {
    /// Horizontal distance from the origin to the middle of the ink box.
    #[must_use]
    pub fn center_x_offset(&self) -> f32 {
        self.left + self.width / 2.0
    }
}

/// Measures the ink bounds of text.
///
/// Implementations must be deterministic: the same text at the same size always yields the same
/// metrics, and width must not decrease as size grows.
pub trait TextMeasurer {
    /// Measures `text` laid out on a single line at `size` pixels.
    fn measure(&self, text: &str, size: f32) -> TextMetrics;
}

/// A rasterized glyph coverage mask, positioned relative to the layout origin.
///
/// Positions stay fractional; the renderer rounds once, after adding the origin, so drawn ink
/// never lands more than half a pixel from where it was measured.
#[derive(Clone, Debug, PartialEq)]
pub struct GlyphBitmap {
    /// X of the bitmap's left column, relative to the layout origin.
    pub x: f32,
    /// Y of the bitmap's top row, relative to the layout origin.
    pub y: f32,
    pub width: usize,
    pub height: usize,
    /// Row-major coverage, 0 (empty) to 255 (fully covered). `width * height` entries.
    pub coverage: Vec<u8>,
}

/// Produces coverage bitmaps for text, in the same coordinate space [`TextMeasurer`] reports.
pub trait TextRasterizer: TextMeasurer {
    /// Rasterizes `text` on a single line at `size` pixels. Whitespace produces no bitmaps.
    fn rasterize(&self, text: &str, size: f32) -> Vec<GlyphBitmap>;
}

impl<T: TextMeasurer + ?Sized> TextMeasurer for &T {
    fn measure(&self, text: &str, size: f32) -> TextMetrics {
        (**self).measure(text, size)
    }
}

impl<T: TextRasterizer + ?Sized> TextRasterizer for &T {
    fn rasterize(&self, text: &str, size: f32) -> Vec<GlyphBitmap> {
        (**self).rasterize(text, size)
    }
}

impl<T: TextMeasurer + ?Sized> TextMeasurer for Arc<T> {
    fn measure(&self, text: &str, size: f32) -> TextMetrics {
        (**self).measure(text, size)
    }
}

impl<T: TextRasterizer + ?Sized> TextRasterizer for Arc<T> {
    fn rasterize(&self, text: &str, size: f32) -> Vec<GlyphBitmap> {
        (**self).rasterize(text, size)
    }
}

/// Computes [`TextMetrics`] as the union of the given ink rectangles `(x, y, width, height)`.
/// Empty rectangles are skipped. Returns zeroed metrics if nothing has ink.
#[must_use]
pub fn ink_bounds(rects: impl IntoIterator<Item = (f32, f32, f32, f32)>) -> TextMetrics {
    let mut bounds: Option<(f32, f32, f32, f32)> = None;

    for (x, y, w, h) in rects {
        if w <= 0.0 || h <= 0.0 {
            continue;
        }

        let (l, t, r, b) = bounds.unwrap_or((x, y, x + w, y + h));
        bounds = Some((l.min(x), t.min(y), r.max(x + w), b.max(y + h)));
    }

    bounds.map_or_else(TextMetrics::default, |(l, t, r, b)| TextMetrics {
        width: r - l,
        height: b - t,
        left: l,
        center_offset: (t + b) / 2.0,
    })
}

#[cfg(feature = "text")]
pub use self::font::{Font, DEFAULT_FONT_CANDIDATES};

#[cfg(feature = "text")]
mod font {
    use super::{ink_bounds, GlyphBitmap, TextMeasurer, TextMetrics, TextRasterizer};
    use crate::{Error, Error::FontError};

    use fontdue::{
        layout::{CoordinateSystem, GlyphPosition, Layout, LayoutSettings, TextStyle},
        FontSettings,
    };
    use std::{
        fs, io,
        path::{Path, PathBuf},
    };

    /// The size glyph outlines are prepared for. Icons are rendered large, so this favors
    /// quality at large sizes over speed at small ones.
    const OPTIMAL_SIZE: f32 = 100.0;

    /// Fonts tried, in order, by [`Font::discover`]: bold faces that ship with Windows, then with
    /// common Linux distributions and macOS, then files next to the working directory.
    pub const DEFAULT_FONT_CANDIDATES: &[&str] = &[
        r"C:\Windows\Fonts\segoeuib.ttf",
        r"C:\Windows\Fonts\arialbd.ttf",
        r"C:\Windows\Fonts\calibrib.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
        "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
        "/usr/share/fonts/dejavu-sans-fonts/DejaVuSans-Bold.ttf",
        "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
        "/Library/Fonts/Arial Bold.ttf",
        "/System/Library/Fonts/Supplemental/Arial Bold.ttf",
        "fonts/DejaVuSans-Bold.ttf",
        "fonts/Arial-Bold.ttf",
    ];

    /// A single TrueType or OpenType font face used for every line of an icon.
    #[derive(Clone)]
    pub struct Font {
        inner: fontdue::Font,
    }

    impl Font {
        /// Opens the font from the given path.
        ///
        /// # Errors
        /// * [`Error::FontNotFound`] if nothing exists at `path`.
        /// * [`Error::FontUnreadable`] if it exists but cannot be read, such as a directory.
        /// * The file is not a font `fontdue` can parse.
        pub fn open<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
            let path = path.as_ref();
            let bytes = fs::read(path).map_err(|err| {
                log::debug!("cannot read font {}: {err}", path.display());

                if err.kind() == io::ErrorKind::NotFound {
                    Error::FontNotFound(vec![path.to_path_buf()])
                } else {
                    Error::FontUnreadable(path.to_path_buf(), err)
                }
            })?;

            let inner = fontdue::Font::from_bytes(bytes, Self::settings()).map_err(FontError)?;

            Ok(Self { inner })
        }

        /// Loads the font from the given byte slice. Useful for the `include_bytes!` macro.
        ///
        /// # Errors
        /// * The bytes are not a font `fontdue` can parse.
        pub fn from_bytes(bytes: &[u8]) -> crate::Result<Self> {
            let inner = fontdue::Font::from_bytes(bytes, Self::settings()).map_err(FontError)?;

            Ok(Self { inner })
        }

        /// Opens the first candidate path that exists and parses as a font.
        ///
        /// Candidates that exist but fail to parse are skipped with a warning. No font is
        /// synthesized when nothing matches.
        ///
        /// # Errors
        /// * [`Error::FontNotFound`] listing every candidate, if none could be loaded.
        pub fn discover<P: AsRef<Path>>(candidates: &[P]) -> crate::Result<(Self, PathBuf)> {
            for candidate in candidates {
                let path = candidate.as_ref();
                if !path.is_file() {
                    continue;
                }

                match Self::open(path) {
                    Ok(font) => {
                        log::debug!("using font {}", path.display());
                        return Ok((font, path.to_path_buf()));
                    }
                    Err(err) => log::warn!("skipping font {}: {err}", path.display()),
                }
            }

            Err(Error::FontNotFound(
                candidates.iter().map(|p| p.as_ref().to_path_buf()).collect(),
            ))
        }

        fn settings() -> FontSettings {
            FontSettings {
                scale: OPTIMAL_SIZE,
                ..FontSettings::default()
            }
        }

        /// Lays `text` out on a single, unwrapped line with its origin at `(0, 0)`.
        fn layout(&self, text: &str, size: f32) -> Layout {
            let mut layout = Layout::new(CoordinateSystem::PositiveYDown);
            layout.reset(&LayoutSettings::default());
            layout.append(&[&self.inner], &TextStyle::new(text, size, 0));
            layout
        }

        fn has_ink(glyph: &GlyphPosition) -> bool {
            glyph.width > 0 && glyph.height > 0 && !glyph.char_data.is_whitespace()
        }
    }

    impl TextMeasurer for Font {
        fn measure(&self, text: &str, size: f32) -> TextMetrics {
            let layout = self.layout(text, size);

            ink_bounds(
                layout
                    .glyphs()
                    .iter()
                    .filter(|glyph| Self::has_ink(glyph))
                    .map(|glyph| (glyph.x, glyph.y, glyph.width as f32, glyph.height as f32)),
            )
        }
    }

    impl TextRasterizer for Font {
        fn rasterize(&self, text: &str, size: f32) -> Vec<GlyphBitmap> {
            let layout = self.layout(text, size);

            layout
                .glyphs()
                .iter()
                .filter(|glyph| Self::has_ink(glyph))
                .map(|glyph| {
                    let (metrics, coverage) = self.inner.rasterize_config(glyph.key);

                    GlyphBitmap {
                        x: glyph.x,
                        y: glyph.y,
                        width: metrics.width,
                        height: metrics.height,
                        coverage,
                    }
                })
                .collect()
        }
    }
}
