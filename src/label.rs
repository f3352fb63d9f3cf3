//! The validated text content of an icon.

use crate::{colors, pixel::Rgb, sanitize::sanitize_line, Error::InvalidLabel, Result};

/// The maximum number of lines in a label.
pub const MAX_LINES: usize = 4;

/// The maximum number of characters in a line.
pub const MAX_CHARS: usize = 8;

/// Returns whether `c` may appear in line text: printable ASCII with no lowercase letters.
#[inline]
const fn is_line_char(c: u8) -> bool {
    (c == b' ' || c.is_ascii_graphic()) && !c.is_ascii_lowercase()
}

/// One line of icon text together with the color it is drawn in.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Line {
    text: String,
    color: Rgb,
}

impl Line {
    /// Creates a line from already sanitized text.
    ///
    /// # Errors
    /// * The text is empty, longer than [`MAX_CHARS`], has surrounding whitespace, or contains
    ///   characters other than uppercase printable ASCII.
    pub fn new(text: impl Into<String>, color: Rgb) -> Result<Self> {
        let text = text.into();

        if text.is_empty() || text.len() > MAX_CHARS {
            return Err(InvalidLabel(format!(
                "line {text:?} must have between 1 and {MAX_CHARS} characters"
            )));
        }
        if !text.bytes().all(is_line_char) {
            return Err(InvalidLabel(format!(
                "line {text:?} must only contain uppercase printable ASCII"
            )));
        }
        if text.trim() != text {
            return Err(InvalidLabel(format!(
                "line {text:?} must not have surrounding whitespace"
            )));
        }

        Ok(Self { text, color })
    }

    /// The text of this line.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The color this line is drawn in.
    #[must_use]
    pub const fn color(&self) -> Rgb {
        self.color
    }
}

/// An ordered stack of one to four [`Line`]s, top to bottom.
///
/// Labels are immutable and every line inside one has passed [`Line::new`], so layout and
/// rendering never need to re-check the text.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Label {
    lines: Vec<Line>,
}

impl Label {
    /// Creates a label from validated lines.
    ///
    /// # Errors
    /// * There are no lines, or more than [`MAX_LINES`].
    pub fn new(lines: Vec<Line>) -> Result<Self> {
        if lines.is_empty() || lines.len() > MAX_LINES {
            return Err(InvalidLabel(format!(
                "a label must have between 1 and {MAX_LINES} lines, got {}",
                lines.len()
            )));
        }

        Ok(Self { lines })
    }

    /// Convenience constructor taking `(text, color)` pairs of sanitized text.
    ///
    /// # Errors
    /// * See [`Line::new`] and [`Label::new`].
    pub fn from_pairs<S: Into<String>>(pairs: impl IntoIterator<Item = (S, Rgb)>) -> Result<Self> {
        let lines = pairs
            .into_iter()
            .map(|(text, color)| Line::new(text, color))
            .collect::<Result<Vec<_>>>()?;

        Self::new(lines)
    }

    /// Builds a label from raw user input, the way the entry form does it.
    ///
    /// Only the first [`MAX_LINES`] inputs are considered. Each is passed through
    /// [`sanitize_line`]; inputs that end up empty are skipped. Input `i` takes `colors[i]`, or the
    /// palette default for that slot if fewer colors are given.
    ///
    /// # Errors
    /// * Every input line sanitized to nothing.
    pub fn from_raw<S: AsRef<str>>(lines: &[S], colors: &[Rgb]) -> Result<Self> {
        let lines = lines
            .iter()
            .take(MAX_LINES)
            .enumerate()
            .filter_map(|(i, raw)| {
                let text = sanitize_line(raw.as_ref());
                let color = colors
                    .get(i)
                    .copied()
                    .unwrap_or_else(|| colors::default_for_line(i));

                (!text.is_empty()).then(|| Line::new(text, color))
            })
            .collect::<Result<Vec<_>>>()?;

        Self::new(lines)
    }

    /// The lines of this label, top to bottom.
    #[must_use]
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// The number of lines, always between 1 and [`MAX_LINES`].
    #[must_use]
    #[allow(clippy::len_without_is_empty)] // never empty
    pub fn len(&self) -> usize {
        self.lines.len()
    }
}

impl<'a> IntoIterator for &'a Label {
    type Item = &'a Line;
    type IntoIter = std::slice::Iter<'a, Line>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}
