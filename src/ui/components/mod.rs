//! UI components module
//!
//! This module provides the widgets the soundbank window is built from.

pub mod file_menu;
pub mod pagination;
pub mod phoneme_grid;
pub mod progress_gauge;
pub mod status_bar;
pub mod tab_rail;
pub mod waveform;

pub use file_menu::FileMenu;
pub use pagination::{PageRequest, Pagination};
pub use phoneme_grid::PhonemeGrid;
pub use progress_gauge::ProgressGauge;
pub use status_bar::StatusBar;
pub use tab_rail::TabRail;
pub use waveform::WaveformView;
