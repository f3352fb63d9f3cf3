//! Process-wide cache of loaded fonts.
//!
//! Parsing a font file is far more expensive than laying out eight characters, and a live preview
//! renders on every keystroke with the same face. Loaded fonts are shared read-only through an
//! [`Arc`] and never evicted.

use crate::{Font, Result};
use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::{Arc, Mutex, OnceLock, PoisonError},
};

static CACHE: OnceLock<Mutex<HashMap<PathBuf, Arc<Font>>>> = OnceLock::new();

fn key(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}

/// Returns the font at `path`, loading it on first use.
///
/// Fonts are size independent, so one entry serves every size the layout asks for. Failed loads
/// are not cached; the next call tries again.
///
/// # Errors
/// * See [`Font::open`].
pub fn load(path: impl AsRef<Path>) -> Result<Arc<Font>> {
    let path = path.as_ref();
    let key = key(path);
    let cache = CACHE.get_or_init(|| Mutex::new(HashMap::new()));

    if let Some(font) = cache
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get(&key)
    {
        return Ok(Arc::clone(font));
    }

    // Loaded outside the lock; a racing load of the same path just wastes one parse.
    let font = Arc::new(Font::open(path)?);
    log::debug!("cached font {}", key.display());

    Ok(Arc::clone(
        cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(key)
            .or_insert(font),
    ))
}

/// Returns whether a font for `path` is already cached.
#[must_use]
pub fn is_cached(path: impl AsRef<Path>) -> bool {
    CACHE.get().map_or(false, |cache| {
        cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(&key(path.as_ref()))
    })
}
