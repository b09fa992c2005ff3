//! Screenshot capture
//!
//! Scenario scripts can ask for the window to be captured; the image
//! arrives as an `Event::Screenshot` on a later frame and is written as PNG.

use crate::error::{Result, SoundbankError};
use egui::{ColorImage, Context, Event, UserData, ViewportCommand};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// Requests a screenshot capture for the next frame
pub fn request_screenshot(ctx: &Context, name: &str) {
    info!("[SCREENSHOT] Requesting screenshot: {}", name);
    ctx.send_viewport_cmd(ViewportCommand::Screenshot(UserData::new(name.to_string())));
}

/// Name used when a script does not give one
pub fn timestamped_name() -> String {
    format!("soundbank-{}", chrono::Local::now().format("%Y%m%d-%H%M%S"))
}

/// Saves any screenshot results delivered this frame into `output_dir`
///
/// Returns the paths written.
pub fn process_screenshot_events(ctx: &Context, output_dir: &Path) -> Vec<PathBuf> {
    let mut saved = Vec::new();

    ctx.input(|input| {
        for event in &input.events {
            if let Event::Screenshot {
                user_data, image, ..
            } = event
            {
                let name = user_data
                    .data
                    .as_ref()
                    .and_then(|arc| arc.downcast_ref::<String>());

                match name {
                    Some(name) => match save_screenshot(image, output_dir, name) {
                        Ok(path) => saved.push(path),
                        Err(e) => {
                            error!("[SCREENSHOT] Failed to save screenshot '{}': {}", name, e)
                        }
                    },
                    None => error!("[SCREENSHOT] Screenshot event missing name in user_data"),
                }
            }
        }
    });

    saved
}

/// Saves a ColorImage as `<output_dir>/<name>.png`
pub fn save_screenshot(image: &ColorImage, output_dir: &Path, name: &str) -> Result<PathBuf> {
    fs::create_dir_all(output_dir)?;

    let path = output_dir.join(format!("{}.png", name));
    let width = image.width() as u32;
    let height = image.height() as u32;

    let rgba_bytes: Vec<u8> = image
        .pixels
        .iter()
        .flat_map(|color| color.to_array())
        .collect();

    let buffer: image::RgbaImage = image::ImageBuffer::from_raw(width, height, rgba_bytes)
        .ok_or_else(|| {
            SoundbankError::ScreenshotError(format!(
                "Pixel buffer does not match {}x{}",
                width, height
            ))
        })?;

    buffer.save(&path)?;

    info!(
        "[SCREENSHOT] Saved {} ({}x{})",
        path.display(),
        width,
        height
    );
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::Color32;

    #[test]
    fn test_save_screenshot_writes_png() {
        let dir = std::env::temp_dir().join(format!("soundbank-shot-{}", std::process::id()));
        let image = ColorImage::new([4, 3], Color32::from_rgb(25, 118, 210));

        let path = save_screenshot(&image, &dir, "overview").unwrap();
        assert_eq!(path, dir.join("overview.png"));

        let decoded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (4, 3));
        assert_eq!(decoded.get_pixel(0, 0).0, [25, 118, 210, 255]);

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_timestamped_name_prefix() {
        assert!(timestamped_name().starts_with("soundbank-"));
    }
}
