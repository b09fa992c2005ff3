//! Page selector
//!
//! Previous/next arrows around one button per page. Emits the requested
//! page number; the caller applies it to the view state.

use crate::ui::theme::Theme;
use egui::{RichText, Vec2};

const PAGE_BUTTON_SIZE: Vec2 = Vec2::new(32.0, 32.0);

/// Requested page change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageRequest {
    Previous,
    Next,
    Page(usize),
}

/// Pagination control for `page_count` pages
pub struct Pagination<'a> {
    current: usize,
    page_count: usize,
    theme: &'a Theme,
}

impl<'a> Pagination<'a> {
    pub fn new(current: usize, page_count: usize, theme: &'a Theme) -> Self {
        Self {
            current,
            page_count,
            theme,
        }
    }

    pub fn show(self, ui: &mut egui::Ui) -> Option<PageRequest> {
        let mut request = None;

        // Center the strip
        let buttons = self.page_count + 2;
        let spacing = ui.spacing().item_spacing.x;
        let strip_width = buttons as f32 * (PAGE_BUTTON_SIZE.x + spacing) - spacing;
        let indent = ((ui.available_width() - strip_width) / 2.0).max(0.0);

        ui.horizontal(|ui| {
            ui.add_space(indent);

            let previous = ui.add_enabled(
                self.current > 1,
                egui::Button::new("‹").frame(false).min_size(PAGE_BUTTON_SIZE),
            );
            previous.widget_info(|| {
                egui::WidgetInfo::labeled(egui::WidgetType::Button, self.current > 1, "Previous page")
            });
            if previous.clicked() {
                request = Some(PageRequest::Previous);
            }

            for page in 1..=self.page_count {
                if self.page_button(ui, page).clicked() {
                    request = Some(PageRequest::Page(page));
                }
            }

            let has_next = self.current < self.page_count;
            let next = ui.add_enabled(
                has_next,
                egui::Button::new("›").frame(false).min_size(PAGE_BUTTON_SIZE),
            );
            next.widget_info(|| {
                egui::WidgetInfo::labeled(egui::WidgetType::Button, has_next, "Next page")
            });
            if next.clicked() {
                request = Some(PageRequest::Next);
            }
        });

        request
    }

    fn page_button(&self, ui: &mut egui::Ui, page: usize) -> egui::Response {
        let selected = page == self.current;
        let (fill, color) = if selected {
            (self.theme.primary, self.theme.on_primary)
        } else {
            (egui::Color32::TRANSPARENT, self.theme.text_primary)
        };

        let button = egui::Button::new(RichText::new(page.to_string()).color(color))
            .fill(fill)
            .rounding(PAGE_BUTTON_SIZE.x / 2.0)
            .stroke(egui::Stroke::NONE)
            .min_size(PAGE_BUTTON_SIZE);
        ui.add(button)
    }
}
