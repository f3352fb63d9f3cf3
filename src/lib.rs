//! Renders 400x400 text icons: one to four short uppercase lines, each in its own color, sized to
//! fill a bordered canvas without overlapping, and exported as PNG.
//!
//! ```no_run
//! use iconlabel::prelude::*;
//!
//! fn main() -> iconlabel::Result<()> {
//!     let font = Font::open("fonts/DejaVuSans-Bold.ttf")?;
//!     let label = Label::from_raw(&["Hello", "team"], &[colors::RED, colors::MS_BLUE])?;
//!
//!     render_icon(&label, &font).save("hello.png")
//! }
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod canvas;
pub mod colors;
pub mod draw;
pub mod error;
pub mod export;
pub mod fit;
#[cfg(feature = "text")]
pub mod font_cache;
pub mod geometry;
pub mod label;
pub mod layout;
pub mod pixel;
pub mod render;
pub mod sanitize;
pub mod stack;
pub mod text;

pub use canvas::Canvas;
pub use error::{Error, ErrorKind, Result};
pub use geometry::{CanvasSpec, ContentArea};
pub use label::{Label, Line, MAX_CHARS, MAX_LINES};
pub use layout::{LayoutEngine, LayoutPlan, LinePlacement};
pub use pixel::{is_valid_hex_color, Rgb};
pub use render::{render_icon, render_png, Renderer};
pub use sanitize::sanitize_line;
#[cfg(feature = "text")]
pub use text::Font;
pub use text::{TextMeasurer, TextMetrics, TextRasterizer};

pub mod prelude {
    pub use super::{
        colors, render_icon, render_png, sanitize_line, Canvas, CanvasSpec, Label, LayoutEngine,
        LinePlacement, Line, Renderer, Rgb, TextMeasurer, TextMetrics, TextRasterizer,
    };

    #[cfg(feature = "text")]
    pub use super::Font;
}
