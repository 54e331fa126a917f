use anyhow::{Context, Result};
use rusttype::Font;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Well-known locations of a plain sans-serif font on the common platforms.
const SYSTEM_FONTS: &[&str] = &[
    "arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/usr/share/fonts/truetype/msttcorefonts/Arial.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
];

/// Read a TrueType/OpenType font from disk.
pub fn read_font(path: &Path) -> Result<Font<'static>> {
    let data = std::fs::read(path)
        .with_context(|| format!("Failed to read font file: {}", path.display()))?;
    Font::try_from_vec(data)
        .with_context(|| format!("Not a usable font file: {}", path.display()))
}

/// Load the font used for titles and taglines.
///
/// An explicitly requested font must load. Without one, the usual system
/// locations are probed; when none of them works the generators draw their
/// shapes and skip the text.
pub fn load_font(explicit: Option<&Path>) -> Result<Option<Font<'static>>> {
    if let Some(path) = explicit {
        let font = read_font(path)?;
        debug!(font = %path.display(), "using requested font");
        return Ok(Some(font));
    }

    for candidate in SYSTEM_FONTS.iter().map(PathBuf::from) {
        if !candidate.is_file() {
            continue;
        }
        match read_font(&candidate) {
            Ok(font) => {
                debug!(font = %candidate.display(), "using system font");
                return Ok(Some(font));
            }
            Err(err) => debug!("skipping {}: {err:#}", candidate.display()),
        }
    }

    warn!("no usable system font found, text will be left out");
    Ok(None)
}
