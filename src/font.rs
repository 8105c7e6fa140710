use std::{fs, path::Path};

use ab_glyph::FontVec;
use plotters::style::{register_font, FontStyle};

use crate::{Error, Result};

/// Family the charts ask plotters for. Registering under the default family
/// also covers axis labels that plotters styles on its own.
pub const FONT_FAMILY: &str = "sans-serif";

/// Loads a TrueType/OpenType font (the first face of a `.ttc` collection)
/// and registers it as [`FONT_FAMILY`] for chart text.
pub fn load_font(path: impl AsRef<Path>) -> Result<FontVec> {
    let path = path.as_ref();
    let font_file = fs::read(path).map_err(|source| Error::FontRead {
        path: path.to_path_buf(),
        source,
    })?;
    let invalid = || Error::FontInvalid {
        path: path.to_path_buf(),
    };

    let font = FontVec::try_from_vec(font_file.clone()).map_err(|_| invalid())?;

    // plotters keeps registered fonts for the rest of the process
    let data: &'static [u8] = Box::leak(font_file.into_boxed_slice());
    register_font(FONT_FAMILY, FontStyle::Normal, data).map_err(|_| invalid())?;

    Ok(font)
}

#[cfg(test)]
pub(crate) mod tests {
    use std::{env, path::PathBuf};

    use ab_glyph::FontVec;

    use super::load_font;
    use crate::Error;

    const CANDIDATES: &[&str] = &[
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
        "/Library/Fonts/Arial Unicode.ttf",
        "/System/Library/Fonts/Supplemental/Arial.ttf",
        "C:/Windows/Fonts/simsun.ttc",
        "C:/Windows/Fonts/arial.ttf",
    ];

    /// A font installed on this machine, if any.
    pub(crate) fn system_font() -> Option<FontVec> {
        env::var_os("WORDFREQ_TEST_FONT")
            .map(PathBuf::from)
            .into_iter()
            .chain(CANDIDATES.iter().map(PathBuf::from))
            .filter(|path| path.is_file())
            .find_map(|path| load_font(path).ok())
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = load_font("/definitely/not/a/font.ttf").unwrap_err();

        assert!(matches!(err, Error::FontRead { .. }));
        assert!(err.to_string().contains("/definitely/not/a/font.ttf"));
    }

    #[test]
    fn garbage_is_an_invalid_font() {
        let path = env::temp_dir().join(format!("wordfreq-not-a-font-{}.ttf", std::process::id()));
        std::fs::write(&path, b"definitely not a font").unwrap();

        let err = load_font(&path).unwrap_err();
        std::fs::remove_file(&path).ok();

        assert!(matches!(err, Error::FontInvalid { .. }));
    }
}
