//! Waveform display component
//!
//! Paints a mounted [`WaveformHandle`]. The surface only ever holds an
//! empty source, which shows as a flat baseline with the cursor parked at
//! the start.

use crate::audio::{WaveformHandle, WaveformStyle};
use crate::ui::theme::Theme;
use egui::{Pos2, Rect, Sense, Stroke, Vec2};

/// Waveform canvas bound to an acquired surface
pub struct WaveformView<'a> {
    handle: Option<&'a WaveformHandle>,
    theme: &'a Theme,
}

impl<'a> WaveformView<'a> {
    /// Create a view; `None` renders an empty canvas of default height
    pub fn new(handle: Option<&'a WaveformHandle>, theme: &'a Theme) -> Self {
        Self { handle, theme }
    }

    /// Show the waveform and return the response
    pub fn show(self, ui: &mut egui::Ui) -> egui::Response {
        let height = self
            .handle
            .map(|h| h.style().height)
            .unwrap_or(WaveformStyle::default().height);
        let desired_size = Vec2::new(ui.available_width(), height);
        let (rect, response) = ui.allocate_exact_size(desired_size, Sense::hover());

        if ui.is_rect_visible(rect) {
            if let Some(handle) = self.handle {
                draw_baseline(ui, rect, handle.style());
                draw_cursor(ui, rect, handle.style());
            } else {
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    "Waveform not mounted",
                    egui::FontId::proportional(12.0),
                    self.theme.text_muted,
                );
            }
        }

        response.widget_info(|| {
            egui::WidgetInfo::labeled(egui::WidgetType::Other, true, "Audio waveform")
        });
        response
    }
}

fn draw_baseline(ui: &egui::Ui, rect: Rect, style: &WaveformStyle) {
    let center_y = rect.center().y;
    ui.painter().line_segment(
        [
            Pos2::new(rect.left(), center_y),
            Pos2::new(rect.right(), center_y),
        ],
        Stroke::new(1.0, style.wave_color),
    );
}

fn draw_cursor(ui: &egui::Ui, rect: Rect, style: &WaveformStyle) {
    let x = rect.left() + style.cursor_width / 2.0;
    ui.painter().line_segment(
        [Pos2::new(x, rect.top()), Pos2::new(x, rect.bottom())],
        Stroke::new(style.cursor_width, style.cursor_color),
    );
}
