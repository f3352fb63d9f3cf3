//! The preset palette offered for line colors.
//!
//! These are the Microsoft-style accent colors the icons are usually made with. When no color is
//! given for a line, line `i` takes [`PALETTE`]`[i % PALETTE.len()]`.

use crate::{pixel::Rgb, Result};

/// Represents the color `#0078d4`, also known as `MS Blue`.
pub const MS_BLUE: Rgb = Rgb::new(0x00, 0x78, 0xD4);

/// Represents the color `#000000`, also known as `Black`.
pub const BLACK: Rgb = Rgb::new(0x00, 0x00, 0x00);

/// Represents the color `#107c10`, also known as `Green`.
pub const GREEN: Rgb = Rgb::new(0x10, 0x7C, 0x10);

/// Represents the color `#5c2d91`, also known as `Purple`.
pub const PURPLE: Rgb = Rgb::new(0x5C, 0x2D, 0x91);

/// Represents the color `#e81123`, also known as `Red`.
pub const RED: Rgb = Rgb::new(0xE8, 0x11, 0x23);

/// Represents the color `#d83b01`, also known as `Orange`.
pub const ORANGE: Rgb = Rgb::new(0xD8, 0x3B, 0x01);

/// Represents the color `#ffb900`, also known as `Yellow`.
pub const YELLOW: Rgb = Rgb::new(0xFF, 0xB9, 0x00);

/// Represents the color `#b4009e`, also known as `Magenta`.
pub const MAGENTA: Rgb = Rgb::new(0xB4, 0x00, 0x9E);

/// Represents the color `#0099bc`, also known as `Cyan`.
pub const CYAN: Rgb = Rgb::new(0x00, 0x99, 0xBC);

/// Represents the color `#605e5c`, also known as `Gray`.
pub const GRAY: Rgb = Rgb::new(0x60, 0x5E, 0x5C);

/// All preset colors with their display names, in presentation order.
pub const PALETTE: [(&str, Rgb); 10] = [
    ("MS Blue", MS_BLUE),
    ("Black", BLACK),
    ("Green", GREEN),
    ("Purple", PURPLE),
    ("Red", RED),
    ("Orange", ORANGE),
    ("Yellow", YELLOW),
    ("Magenta", MAGENTA),
    ("Cyan", CYAN),
    ("Gray", GRAY),
];

/// Returns the default color for the line at `index`.
#[must_use]
pub const fn default_for_line(index: usize) -> Rgb {
    PALETTE[index % PALETTE.len()].1
}

/// Looks up a preset by name. Case, spaces, dashes and underscores are ignored, so `ms-blue`,
/// `MS_BLUE` and `msblue` all resolve to [`MS_BLUE`].
#[must_use]
pub fn by_name(name: &str) -> Option<Rgb> {
    let normalize = |s: &str| {
        s.chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .map(|c| c.to_ascii_lowercase())
            .collect::<String>()
    };
    let wanted = normalize(name);

    PALETTE
        .iter()
        .find(|(preset, _)| normalize(*preset) == wanted)
        .map(|&(_, color)| color)
}

/// Returns the display name of `color` if it is one of the presets.
#[must_use]
pub fn name_of(color: Rgb) -> Option<&'static str> {
    PALETTE
        .iter()
        .find(|&&(_, preset)| preset == color)
        .map(|&(name, _)| name)
}

/// Parses a color given either as a preset name or as a hex code.
///
/// # Errors
/// * The value is neither a preset name nor a valid hex code.
pub fn parse(value: &str) -> Result<Rgb> {
    by_name(value).map_or_else(|| Rgb::from_hex(value), Ok)
}
