//! UI components and application module
//!
//! This module provides the egui/eframe-based user interface for Soundbank.

mod app;
pub mod components;
pub mod fonts;
mod theme;

pub use app::SoundbankApp;
pub use components::{
    FileMenu, PageRequest, Pagination, PhonemeGrid, ProgressGauge, StatusBar, TabRail,
    WaveformView,
};
pub use theme::Theme;

use crate::config::AppConfig;
use crate::testconfig::TestConfig;

/// Open the native window and run until it closes
pub fn run(config: AppConfig, test_config: Option<TestConfig>) -> eframe::Result<()> {
    let window = &config.window;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([window.width, window.height])
            .with_min_inner_size([window.min_width, window.min_height])
            .with_title(window.title.clone()),
        ..Default::default()
    };

    let title = window.title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| Ok(Box::new(SoundbankApp::new(cc, config, test_config)))),
    )
}
