//! CJK font installation
//!
//! egui's bundled fonts have no kana glyphs, so a Japanese-capable font is
//! appended as a fallback to both font families.

use crate::config::FontConfig;
use crate::error::{Result, SoundbankError};
use egui::{FontData, FontDefinitions, FontFamily};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Name the font is registered under in [`FontDefinitions`]
pub const CJK_FONT_NAME: &str = "soundbank-cjk";

/// Well-known system locations of fonts with Japanese coverage
const SYSTEM_CJK_FONTS: &[&str] = &[
    // Linux
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/google-noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/truetype/fonts-japanese-gothic.ttf",
    "/usr/share/fonts/truetype/takao-gothic/TakaoPGothic.ttf",
    // macOS
    "/System/Library/Fonts/ヒラギノ角ゴシック W3.ttc",
    "/System/Library/Fonts/Hiragino Sans GB.ttc",
    "/Library/Fonts/Arial Unicode.ttf",
    // Windows
    "C:\\Windows\\Fonts\\YuGothM.ttc",
    "C:\\Windows\\Fonts\\msgothic.ttc",
    "C:\\Windows\\Fonts\\meiryo.ttc",
];

/// Pick the font file to load: the configured one, else the first system
/// candidate that exists
pub fn locate_cjk_font(config: &FontConfig) -> Option<PathBuf> {
    if let Some(path) = &config.cjk_font_path {
        return Some(path.clone());
    }
    SYSTEM_CJK_FONTS
        .iter()
        .map(PathBuf::from)
        .find(|path| path.is_file())
}

/// Default font definitions with the font at `path` appended as fallback
pub fn definitions_with_cjk(path: &Path) -> Result<FontDefinitions> {
    let bytes = fs::read(path).map_err(|e| {
        SoundbankError::FontError(format!("Failed to read '{}': {}", path.display(), e))
    })?;
    if bytes.is_empty() {
        return Err(SoundbankError::FontError(format!(
            "Font file '{}' is empty",
            path.display()
        )));
    }

    let mut fonts = FontDefinitions::default();
    fonts
        .font_data
        .insert(CJK_FONT_NAME.to_owned(), FontData::from_owned(bytes).into());
    for family in [FontFamily::Proportional, FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .push(CJK_FONT_NAME.to_owned());
    }
    Ok(fonts)
}

/// Install fonts on the context
///
/// Without a usable CJK font the default fonts stay in place and the error
/// is returned for the caller to log.
pub fn install(ctx: &egui::Context, config: &FontConfig) -> Result<()> {
    let path = locate_cjk_font(config).ok_or_else(|| {
        SoundbankError::FontError("No Japanese font found in system font locations".to_string())
    })?;

    let fonts = definitions_with_cjk(&path)?;
    ctx.set_fonts(fonts);
    info!("[FONT] Installed CJK fallback from {}", path.display());
    Ok(())
}

/// [`install`], logging instead of failing
pub fn install_or_warn(ctx: &egui::Context, config: &FontConfig) {
    if let Err(e) = install(ctx, config) {
        warn!("[FONT] {} ({})", e, e.user_message());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_path_wins() {
        let config = FontConfig {
            cjk_font_path: Some(PathBuf::from("/custom/font.otf")),
        };
        assert_eq!(
            locate_cjk_font(&config),
            Some(PathBuf::from("/custom/font.otf"))
        );
    }

    #[test]
    fn test_missing_font_file() {
        let err = definitions_with_cjk(Path::new("/nonexistent/font.ttf")).unwrap_err();
        assert!(matches!(err, SoundbankError::FontError(_)));
        assert!(err.is_recoverable());
    }
}
