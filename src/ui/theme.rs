//! Theme and styling for the Soundbank UI
//!
//! This module provides colors, spacing and text styles for the window.

use crate::config::ThemeChoice;
use egui::{Color32, FontFamily, FontId, Rounding, Stroke, Vec2, Visuals};

/// Application theme configuration
#[derive(Clone, Debug)]
pub struct Theme {
    /// Whether the palette is dark
    pub dark_mode: bool,

    /// Primary accent color (menu bar, selected tab, gauge)
    pub primary: Color32,
    /// Text drawn on top of `primary`
    pub on_primary: Color32,

    /// Background colors
    pub bg_primary: Color32,
    pub bg_secondary: Color32,

    /// Text colors
    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub text_muted: Color32,

    /// Separator lines
    pub divider: Color32,
    /// Status bar background
    pub status_bar_bg: Color32,
    /// Unfilled part of the completion gauge
    pub gauge_track: Color32,

    /// Border radius for buttons
    pub button_rounding: Rounding,
    /// Border radius for cards/panels
    pub card_rounding: Rounding,

    /// Standard spacing
    pub spacing: f32,
    /// Large spacing
    pub spacing_lg: f32,
    /// Small spacing
    pub spacing_sm: f32,
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

impl Theme {
    /// Theme for a configured palette
    pub fn from_choice(choice: ThemeChoice) -> Self {
        match choice {
            ThemeChoice::Light => Self::light(),
            ThemeChoice::Dark => Self::dark(),
        }
    }

    /// White theme with a blue accent
    pub fn light() -> Self {
        Self {
            dark_mode: false,

            primary: Color32::from_rgb(0x19, 0x76, 0xD2), // Blue
            on_primary: Color32::WHITE,

            bg_primary: Color32::WHITE,
            bg_secondary: Color32::from_rgb(250, 250, 250),

            text_primary: Color32::from_rgb(0, 0, 0),
            text_secondary: Color32::from_rgb(66, 66, 66),
            text_muted: Color32::from_rgb(117, 117, 117),

            divider: Color32::from_rgb(224, 224, 224),
            status_bar_bg: Color32::from_rgb(245, 245, 245), // Grey 100
            gauge_track: Color32::from_rgb(227, 236, 250),

            button_rounding: Rounding::same(4.0),
            card_rounding: Rounding::same(8.0),

            spacing: 16.0,
            spacing_lg: 24.0,
            spacing_sm: 8.0,
        }
    }

    /// Dark variant
    pub fn dark() -> Self {
        Self {
            dark_mode: true,

            primary: Color32::from_rgb(99, 102, 241), // Indigo
            on_primary: Color32::from_rgb(249, 250, 251),

            bg_primary: Color32::from_rgb(17, 24, 39),   // Dark blue-gray
            bg_secondary: Color32::from_rgb(31, 41, 55), // Lighter blue-gray

            text_primary: Color32::from_rgb(249, 250, 251),   // Almost white
            text_secondary: Color32::from_rgb(209, 213, 219), // Light gray
            text_muted: Color32::from_rgb(156, 163, 175),     // Medium gray

            divider: Color32::from_rgb(55, 65, 81),
            status_bar_bg: Color32::from_rgb(31, 41, 55),
            gauge_track: Color32::from_rgb(55, 65, 81),

            button_rounding: Rounding::same(4.0),
            card_rounding: Rounding::same(8.0),

            spacing: 16.0,
            spacing_lg: 24.0,
            spacing_sm: 8.0,
        }
    }

    /// Apply this theme to egui
    pub fn apply(&self, ctx: &egui::Context) {
        let mut visuals = if self.dark_mode {
            Visuals::dark()
        } else {
            Visuals::light()
        };

        // Panel backgrounds
        visuals.panel_fill = self.bg_primary;
        visuals.window_fill = self.bg_primary;
        visuals.extreme_bg_color = self.bg_secondary;

        // Widget colors
        visuals.widgets.noninteractive.bg_fill = self.bg_secondary;
        visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, self.divider);
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, self.text_primary);

        visuals.widgets.inactive.weak_bg_fill = self.bg_primary;
        visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, self.text_secondary);

        visuals.widgets.hovered.weak_bg_fill = self.primary.gamma_multiply(0.15);
        visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, self.text_primary);

        visuals.widgets.active.weak_bg_fill = self.primary.gamma_multiply(0.3);
        visuals.widgets.active.fg_stroke = Stroke::new(1.0, self.text_primary);

        // Selected tab and page buttons
        visuals.selection.bg_fill = self.primary;
        visuals.selection.stroke = Stroke::new(1.0, self.on_primary);

        visuals.hyperlink_color = self.primary;

        // Popup menu styling
        visuals.window_rounding = self.button_rounding;
        visuals.window_stroke = Stroke::new(1.0, self.divider);

        ctx.set_visuals(visuals);

        let mut style = (*ctx.style()).clone();
        style.spacing.item_spacing = Vec2::splat(self.spacing_sm);
        style.spacing.window_margin = egui::Margin::same(self.spacing_sm);
        style.spacing.button_padding = Vec2::new(self.spacing_sm, 4.0);

        // Text styles
        style.text_styles.insert(
            egui::TextStyle::Heading,
            FontId::new(30.0, FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Body,
            FontId::new(14.0, FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Monospace,
            FontId::new(13.0, FontFamily::Monospace),
        );
        style.text_styles.insert(
            egui::TextStyle::Button,
            FontId::new(14.0, FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Small,
            FontId::new(12.0, FontFamily::Proportional),
        );

        ctx.set_style(style);
    }

    /// Stroke used for card outlines and separators
    pub fn divider_stroke(&self) -> Stroke {
        Stroke::new(1.0, self.divider)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_choice() {
        assert!(!Theme::from_choice(ThemeChoice::Light).dark_mode);
        assert!(Theme::from_choice(ThemeChoice::Dark).dark_mode);
        assert_eq!(Theme::default().primary, Color32::from_rgb(25, 118, 210));
    }
}
