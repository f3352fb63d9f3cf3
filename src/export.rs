//! PNG export.

use crate::{canvas::Canvas, Result};
use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

/// Writes `canvas` as a PNG to `dest`.
///
/// The image is 8-bit RGB without an alpha channel, at the highest compression level.
///
/// # Errors
/// * Writing to `dest` fails.
/// * The PNG encoder rejects the image.
pub fn encode_png<W: Write>(canvas: &Canvas, dest: W) -> Result<()> {
    let (width, height) = canvas.dimensions();

    let mut encoder = png::Encoder::new(dest, width, height);
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_compression(png::Compression::Best);

    let mut writer = encoder.write_header()?;
    writer.write_image_data(&canvas.to_rgb_bytes())?;
    writer.finish()?;

    Ok(())
}

/// Returns `canvas` encoded as PNG bytes.
///
/// # Errors
/// * The PNG encoder rejects the image.
pub fn export(canvas: &Canvas) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    encode_png(canvas, &mut out)?;
    log::debug!("encoded {}x{} PNG, {} bytes", canvas.width(), canvas.height(), out.len());

    Ok(out)
}

/// Writes `canvas` as a PNG file at `path`, replacing any existing file.
///
/// The bytes go to a `.part` file next to `path` first, which is renamed into place once fully
/// written. On failure nothing is left behind and an existing file at `path` is untouched.
///
/// # Errors
/// * Creating, writing or renaming the file fails.
pub fn save(canvas: &Canvas, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let bytes = export(canvas)?;

    let mut partial = path.as_os_str().to_owned();
    partial.push(".part");
    let partial = PathBuf::from(partial);

    let written = write_file(&partial, &bytes).and_then(|()| fs::rename(&partial, path));
    if let Err(err) = written {
        let _ = fs::remove_file(&partial);
        return Err(err.into());
    }
    log::debug!("saved {}", path.display());

    Ok(())
}

fn write_file(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut file = BufWriter::new(File::create(path)?);
    file.write_all(bytes)?;
    file.flush()
}

impl Canvas {
    /// Encodes this canvas as PNG bytes. See [`export`].
    ///
    /// # Errors
    /// * The PNG encoder rejects the image.
    pub fn encode_png(&self) -> Result<Vec<u8>> {
        export(self)
    }

    /// Saves this canvas as a PNG file. See [`save`].
    ///
    /// # Errors
    /// * Creating or writing the file fails.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        save(self, path)
    }
}
