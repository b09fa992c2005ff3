//! Phoneme card grid
//!
//! Shows the current page title and one card per kana with its recording
//! status.

use crate::project::RecordingStatus;
use crate::ui::theme::Theme;
use egui::{Align, Layout, RichText, Vec2};

/// Size of a single phoneme card
const CARD_SIZE: Vec2 = Vec2::new(100.0, 96.0);

/// Centered, wrapping grid of phoneme cards
pub struct PhonemeGrid<'a> {
    title: &'a str,
    phonemes: &'a [&'a str],
    theme: &'a Theme,
}

impl<'a> PhonemeGrid<'a> {
    pub fn new(title: &'a str, phonemes: &'a [&'a str], theme: &'a Theme) -> Self {
        Self {
            title,
            phonemes,
            theme,
        }
    }

    pub fn show(self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new(self.title)
                    .size(20.0)
                    .color(self.theme.text_primary),
            );
        });
        ui.add_space(self.theme.spacing_sm);

        // Center the row: horizontal_wrapped always packs from the left
        let spacing = self.theme.spacing_sm;
        let row_width = self.phonemes.len() as f32 * (CARD_SIZE.x + spacing) - spacing;
        let indent = ((ui.available_width() - row_width) / 2.0).max(0.0);

        ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing = Vec2::splat(spacing);
            ui.add_space(indent);
            for phoneme in self.phonemes {
                self.card(ui, phoneme, RecordingStatus::default());
            }
        });
    }

    fn card(&self, ui: &mut egui::Ui, phoneme: &str, status: RecordingStatus) {
        egui::Frame::none()
            .fill(self.theme.bg_primary)
            .stroke(self.theme.divider_stroke())
            .rounding(self.theme.button_rounding)
            .show(ui, |ui| {
                ui.allocate_ui_with_layout(CARD_SIZE, Layout::top_down(Align::Center), |ui| {
                    ui.set_min_size(CARD_SIZE);
                    ui.add_space(self.theme.spacing);
                    ui.label(
                        RichText::new(phoneme)
                            .size(24.0)
                            .color(self.theme.text_primary),
                    );
                    ui.label(
                        RichText::new(status.label())
                            .size(13.0)
                            .color(self.theme.text_muted),
                    );
                });
            });
    }
}
