//! Completion gauge
//!
//! A circular progress ring with the percentage in its center, followed
//! by the "Completion Status" caption and the completed/total counts.

use crate::project::CompletionStats;
use crate::ui::theme::Theme;
use egui::{Align2, FontId, Pos2, RichText, Sense, Shape, Stroke, Vec2};
use std::f32::consts::{FRAC_PI_2, TAU};

/// Diameter of the ring
const GAUGE_SIZE: f32 = 100.0;
/// Thickness of the ring
const GAUGE_THICKNESS: f32 = 6.0;
/// Line segments used to approximate a full circle
const ARC_SEGMENTS: usize = 64;

/// Completion card shown on the overview
pub struct ProgressGauge<'a> {
    stats: CompletionStats,
    theme: &'a Theme,
}

impl<'a> ProgressGauge<'a> {
    pub fn new(stats: CompletionStats, theme: &'a Theme) -> Self {
        Self { stats, theme }
    }

    pub fn show(self, ui: &mut egui::Ui) -> egui::Response {
        egui::Frame::none()
            .fill(self.theme.bg_primary)
            .stroke(self.theme.divider_stroke())
            .rounding(self.theme.card_rounding)
            .inner_margin(self.theme.spacing_lg)
            .show(ui, |ui| {
                ui.set_width(320.0);
                ui.vertical_centered(|ui| {
                    self.ring(ui);
                    ui.add_space(self.theme.spacing);
                    ui.label(
                        RichText::new("Completion Status")
                            .size(20.0)
                            .color(self.theme.text_primary),
                    );
                    ui.label(
                        RichText::new(format!(
                            "{} of {} sounds completed",
                            self.stats.completed, self.stats.total
                        ))
                        .color(self.theme.text_muted),
                    );
                });
            })
            .response
    }

    fn ring(&self, ui: &mut egui::Ui) {
        let (rect, response) = ui.allocate_exact_size(Vec2::splat(GAUGE_SIZE), Sense::hover());
        let percent_text = format!("{}%", self.stats.percentage());

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();
            let center = rect.center();
            let radius = GAUGE_SIZE / 2.0 - GAUGE_THICKNESS / 2.0;

            painter.circle_stroke(
                center,
                radius,
                Stroke::new(GAUGE_THICKNESS, self.theme.gauge_track),
            );

            let points = arc_points(center, radius, self.stats.fraction());
            if points.len() >= 2 {
                painter.add(Shape::line(
                    points,
                    Stroke::new(GAUGE_THICKNESS, self.theme.primary),
                ));
            }

            painter.text(
                center,
                Align2::CENTER_CENTER,
                &percent_text,
                FontId::proportional(13.0),
                self.theme.text_muted,
            );
        }

        response.widget_info(|| {
            egui::WidgetInfo::labeled(egui::WidgetType::ProgressIndicator, true, &percent_text)
        });
    }
}

/// Points along a clockwise arc starting at 12 o'clock covering `fraction`
/// of the circle
pub fn arc_points(center: Pos2, radius: f32, fraction: f32) -> Vec<Pos2> {
    let fraction = fraction.clamp(0.0, 1.0);
    if fraction <= 0.0 {
        return Vec::new();
    }

    let segments = ((ARC_SEGMENTS as f32 * fraction).ceil() as usize).max(1);
    (0..=segments)
        .map(|i| {
            let angle = -FRAC_PI_2 + TAU * fraction * i as f32 / segments as f32;
            Pos2::new(center.x + radius * angle.cos(), center.y + radius * angle.sin())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_arc() {
        assert!(arc_points(Pos2::ZERO, 10.0, 0.0).is_empty());
    }

    #[test]
    fn test_arc_starts_at_top() {
        let points = arc_points(Pos2::new(50.0, 50.0), 10.0, 0.25);
        let first = points[0];
        assert!((first.x - 50.0).abs() < 1e-4);
        assert!((first.y - 40.0).abs() < 1e-4);

        // A quarter turn clockwise ends at 3 o'clock
        let last = points[points.len() - 1];
        assert!((last.x - 60.0).abs() < 1e-3);
        assert!((last.y - 50.0).abs() < 1e-3);
    }

    #[test]
    fn test_full_circle_segments() {
        let points = arc_points(Pos2::ZERO, 1.0, 1.0);
        assert_eq!(points.len(), ARC_SEGMENTS + 1);
    }
}
