//! Vertical tab rail
//!
//! Overview and Details sit at the top; Settings is pinned to the bottom.

use crate::state::{Tab, ViewState};
use crate::ui::theme::Theme;
use egui::{Align, Layout, Pos2, Rect, RichText, Sense, Vec2};

/// Width of the rail
pub const RAIL_WIDTH: f32 = 96.0;

/// Tab rail bound to the view state
pub struct TabRail<'a> {
    state: &'a mut ViewState,
    theme: &'a Theme,
}

impl<'a> TabRail<'a> {
    pub fn new(state: &'a mut ViewState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    pub fn show(self, ui: &mut egui::Ui) {
        let TabRail { state, theme } = self;

        ui.with_layout(Layout::top_down(Align::Center), |ui| {
            ui.add_space(theme.spacing_sm);
            tab_button(ui, state, theme, Tab::Overview, "📊");
            tab_button(ui, state, theme, Tab::Details, "☰");

            ui.with_layout(Layout::bottom_up(Align::Center), |ui| {
                ui.add_space(theme.spacing_sm);
                tab_button(ui, state, theme, Tab::Settings, "⚙");
            });
        });
    }
}

/// One selectable entry: icon above label
fn tab_button(ui: &mut egui::Ui, state: &mut ViewState, theme: &Theme, tab: Tab, icon: &str) {
    let selected = state.active_tab() == tab;
    let color = if selected {
        theme.primary
    } else {
        theme.text_secondary
    };

    let inner = ui.vertical_centered(|ui| {
        ui.spacing_mut().item_spacing.y = 2.0;
        let icon = ui.add(
            egui::Label::new(RichText::new(icon).size(20.0).color(color))
                .sense(Sense::click())
                .selectable(false),
        );
        let button = ui.add(
            egui::Button::new(RichText::new(tab.label()).size(13.0).color(color))
                .frame(false)
                .min_size(Vec2::new(RAIL_WIDTH - theme.spacing_sm, 20.0)),
        );
        button.widget_info(|| {
            egui::WidgetInfo::selected(egui::WidgetType::SelectableLabel, true, selected, tab.label())
        });
        icon.clicked() || button.clicked()
    });

    if selected {
        // Indicator along the rail edge
        let rect = inner.response.rect;
        ui.painter().rect_filled(
            Rect::from_min_max(Pos2::new(rect.right() - 2.0, rect.top()), rect.right_bottom()),
            0.0,
            theme.primary,
        );
    }

    if inner.inner {
        state.select_tab(tab.index());
    }
    ui.add_space(theme.spacing_sm);
}
