//! Status bar component
//!
//! Shows the project language, voicebank type and recording progress.

use crate::project::{CompletionStats, ProjectInfo};
use crate::ui::theme::Theme;
use egui::{self, RichText};

/// Bottom status bar for the Overview and Details tabs
pub struct StatusBar<'a> {
    project: &'a ProjectInfo,
    stats: CompletionStats,
    theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    pub fn new(project: &'a ProjectInfo, stats: CompletionStats, theme: &'a Theme) -> Self {
        Self {
            project,
            stats,
            theme,
        }
    }

    /// Text of each status field, left to right
    pub fn fields(&self) -> [String; 3] {
        [
            format!("Project Soundbank Language: {}", self.project.language),
            format!("Type: {}", self.project.voice_type),
            format!("Progress: {}/{}", self.stats.completed, self.stats.total),
        ]
    }

    pub fn show(self, ui: &mut egui::Ui) -> egui::Response {
        let fields = self.fields();
        ui.horizontal(|ui| {
            for (i, field) in fields.iter().enumerate() {
                if i > 0 {
                    ui.separator();
                }
                ui.label(RichText::new(field).size(13.0).color(self.theme.text_primary));
            }
        })
        .response
    }
}
