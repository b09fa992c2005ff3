//! File menu component
//!
//! A "File" button in the menu bar that opens a popup anchored below it.
//! Picking an item, clicking outside the popup, or pressing Escape closes
//! the menu.

use crate::menu::MenuAction;
use crate::state::{MenuAnchor, ViewState};
use crate::ui::theme::Theme;
use egui::{Key, Order, RichText};

/// Minimum width of the popup
const POPUP_MIN_WIDTH: f32 = 180.0;

/// File menu button and popup
pub struct FileMenu<'a> {
    state: &'a mut ViewState,
    theme: &'a Theme,
}

impl<'a> FileMenu<'a> {
    pub fn new(state: &'a mut ViewState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    /// Show the button (and the popup when open)
    ///
    /// A picked item is performed and closes the menu.
    pub fn show(self, ui: &mut egui::Ui) {
        let button = ui.add(
            egui::Button::new(
                RichText::new("File")
                    .size(15.0)
                    .color(self.theme.on_primary),
            )
            .frame(false),
        );

        let was_open = self.state.is_menu_open();
        if button.clicked() {
            if was_open {
                self.state.close_menu();
                return;
            }
            self.state.open_menu(MenuAnchor::new(button.id, button.rect));
        }

        let Some(anchor) = self.state.menu_anchor().copied() else {
            return;
        };
        let theme = self.theme;
        let mut chosen = None;

        let popup = egui::Area::new(anchor.trigger.with("popup"))
            .order(Order::Foreground)
            .fixed_pos(anchor.rect.left_bottom())
            .show(ui.ctx(), |ui| {
                egui::Frame::menu(ui.style())
                    .fill(theme.bg_primary)
                    .show(ui, |ui| {
                        ui.set_min_width(POPUP_MIN_WIDTH);
                        for (index, group) in MenuAction::GROUPS.iter().enumerate() {
                            if index > 0 {
                                ui.separator();
                            }
                            for action in group.iter() {
                                let item = egui::Button::new(
                                    RichText::new(action.label()).color(theme.text_primary),
                                )
                                .frame(false)
                                .min_size(egui::vec2(ui.available_width(), 0.0));
                                if ui.add(item).clicked() {
                                    chosen = Some(*action);
                                }
                            }
                        }
                    });
            });

        let escape = ui.input(|i| i.key_pressed(Key::Escape));
        if let Some(action) = chosen {
            action.perform();
            self.state.close_menu();
        } else if escape || (was_open && popup.response.clicked_elsewhere()) {
            self.state.close_menu();
        }
    }
}
