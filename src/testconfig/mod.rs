//! Scenario scripts for automated UI runs
//!
//! A script is a TOML file listing timed actions against the view (switch
//! tabs, page through phonemes, open and close the File menu) with
//! optional assertions checked after each action.

mod runner;

pub use runner::{AssertionContext, AssertionResult, TestCommand, TestRunner};

use crate::error::{Result, SoundbankError};
use crate::menu::MenuAction;
use crate::state::Tab;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// A scenario loaded from a TOML file
#[derive(Debug, Clone, Deserialize)]
pub struct TestConfig {
    /// Test metadata
    pub test: TestMetadata,
    /// Timed actions, in time order
    pub actions: Vec<TestAction>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TestMetadata {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// A single action with timing
#[derive(Debug, Clone, Deserialize)]
pub struct TestAction {
    /// Milliseconds after the first frame
    pub time_ms: u64,
    pub action: ActionType,
    /// Checked right after the action runs
    #[serde(default)]
    pub assert: Option<Assertion>,
}

/// Things a scenario can do to the view
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ActionType {
    /// Select a tab by name ("overview", "details", "settings")
    SelectTab { tab: Tab },
    /// Go to a 1-based phoneme page
    SelectPage { page: usize },
    NextPage,
    PreviousPage,
    /// Open the File menu
    OpenMenu,
    CloseMenu,
    /// Pick a File menu item by snake_case name
    MenuAction { action: MenuAction },
    /// Capture the window
    Screenshot {
        #[serde(default)]
        name: Option<String>,
    },
    Log { message: String },
    Exit {
        #[serde(default)]
        code: i32,
    },
}

/// Conditions checked against the view
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Assertion {
    ActiveTab { tab: Tab },
    CurrentPage { page: usize },
    MenuOpen,
    MenuClosed,
    StatusBarVisible,
    StatusBarHidden,
    /// The phonemes on screen, in order
    VisiblePhonemes { phonemes: Vec<String> },
    CompletionPercentage { percent: u32 },
    /// The waveform surface is acquired
    WaveformMounted,
}

impl TestConfig {
    /// Parse and validate a scenario from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: TestConfig = toml::from_str(content)
            .map_err(|e| SoundbankError::TestScriptError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a scenario file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            SoundbankError::TestScriptError(format!(
                "Failed to read test config '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_toml(&content).map_err(|e| {
            SoundbankError::TestScriptError(format!("'{}': {}", path.display(), e))
        })
    }

    fn validate(&self) -> Result<()> {
        if self.actions.is_empty() {
            return Err(SoundbankError::TestScriptError(
                "Test configuration must have at least one action".to_string(),
            ));
        }

        let mut last_time = 0;
        for action in &self.actions {
            if action.time_ms < last_time {
                return Err(SoundbankError::TestScriptError(format!(
                    "Actions must be ordered by time. Found action at {}ms after action at {}ms",
                    action.time_ms, last_time
                )));
            }
            last_time = action.time_ms;
        }

        let has_exit = self
            .actions
            .iter()
            .any(|a| matches!(a.action, ActionType::Exit { .. }));
        if !has_exit {
            return Err(SoundbankError::TestScriptError(
                "Test configuration must have an Exit action".to_string(),
            ));
        }

        Ok(())
    }
}

impl TestAction {
    /// Get the duration from test start for this action
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.time_ms)
    }
}
