//! Soundbank - recording board for a Japanese CV soundbank
//!
//! This crate provides the desktop shell of a soundbank recording tool:
//! a File menu, a tab rail, a completion gauge, a waveform surface and a
//! paginated grid of phoneme cards. Recording itself is not implemented.

pub mod audio;
pub mod config;
pub mod error;
pub mod menu;
pub mod phonemes;
pub mod project;
pub mod screenshot;
pub mod state;
pub mod testconfig;
pub mod ui;

// Re-export error types
pub use error::{Result, SoundbankError};

// Re-export state types
pub use config::AppConfig;
pub use menu::MenuAction;
pub use phonemes::{PhonemePage, JAPANESE_PHONEME_PAGES};
pub use project::{CompletionStats, ProjectInfo, RecordingStatus};
pub use state::{MenuAnchor, Panel, Tab, ViewState};
