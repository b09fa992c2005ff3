//! Test runner for executing scenario scripts
//!
//! The runner hands out commands once their time has come; the app
//! executes them against the view and reports back for assertions.

use super::{ActionType, Assertion, TestConfig};
use crate::menu::MenuAction;
use crate::screenshot;
use crate::state::{Tab, ViewState};
use std::time::{Duration, Instant};
use tracing::{debug, error, info};

/// Commands the runner sends to the UI
#[derive(Debug, Clone, PartialEq)]
pub enum TestCommand {
    SelectTab(Tab),
    SelectPage(usize),
    NextPage,
    PreviousPage,
    OpenMenu,
    CloseMenu,
    MenuAction(MenuAction),
    Screenshot(String),
    Log(String),
    Exit { code: i32 },
}

/// Result of an assertion check
#[derive(Debug, Clone, PartialEq)]
pub enum AssertionResult {
    Passed,
    Failed(String),
}

/// Snapshot of the view the assertions are checked against
#[derive(Debug, Clone)]
pub struct AssertionContext {
    pub active_tab: Tab,
    pub current_page: usize,
    pub menu_open: bool,
    pub status_bar_visible: bool,
    pub visible_phonemes: Vec<String>,
    pub completion_percentage: u32,
    pub waveform_mounted: bool,
}

impl AssertionContext {
    pub fn from_view(view: &ViewState) -> Self {
        Self {
            active_tab: view.active_tab(),
            current_page: view.current_page(),
            menu_open: view.is_menu_open(),
            status_bar_visible: view.shows_status_bar(),
            visible_phonemes: view
                .visible_phonemes()
                .iter()
                .map(|p| p.to_string())
                .collect(),
            completion_percentage: view.completion_percentage(),
            waveform_mounted: view.is_mounted(),
        }
    }
}

/// Test runner that schedules and executes scenario actions
pub struct TestRunner {
    config: TestConfig,
    start_time: Option<Instant>,
    current_action_index: usize,
    completed: bool,
    test_passed: bool,
}

impl TestRunner {
    pub fn new(config: TestConfig) -> Self {
        info!("[TEST] Loaded test configuration: {}", config.test.name);
        if !config.test.description.is_empty() {
            info!("[TEST] Description: {}", config.test.description);
        }
        info!("[TEST] Total actions: {}", config.actions.len());

        Self {
            config,
            start_time: None,
            current_action_index: 0,
            completed: false,
            test_passed: true,
        }
    }

    /// Start the clock (call this on the first frame)
    pub fn start(&mut self) {
        if self.start_time.is_none() {
            self.start_time = Some(Instant::now());
            info!("[TEST] Test started: {}", self.config.test.name);
        }
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Whether every assertion so far passed
    pub fn test_passed(&self) -> bool {
        self.test_passed
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time
            .map(|t| t.elapsed())
            .unwrap_or(Duration::ZERO)
    }

    /// Next due command, if any
    pub fn poll(&mut self) -> Option<(TestCommand, Option<Assertion>)> {
        let elapsed = self.start_time?.elapsed();
        self.poll_at(elapsed)
    }

    /// Next command due at `elapsed` since start
    pub fn poll_at(&mut self, elapsed: Duration) -> Option<(TestCommand, Option<Assertion>)> {
        if self.completed || self.start_time.is_none() {
            return None;
        }

        let Some(action) = self.config.actions.get(self.current_action_index) else {
            self.completed = true;
            return None;
        };

        if elapsed < action.delay() {
            return None;
        }

        debug!(
            "[TEST] Executing action at {}ms: {:?}",
            action.time_ms, action.action
        );

        let command = action_to_command(&action.action);
        let assertion = action.assert.clone();

        self.current_action_index += 1;
        if self.current_action_index >= self.config.actions.len() {
            self.completed = true;
        }

        Some((command, assertion))
    }

    /// Check an assertion against the current view
    pub fn check_assertion(
        &mut self,
        assertion: &Assertion,
        context: &AssertionContext,
    ) -> AssertionResult {
        let result = evaluate(assertion, context);

        match &result {
            AssertionResult::Passed => {
                info!("[TEST] PASS: Assertion {:?}", assertion);
            }
            AssertionResult::Failed(reason) => {
                error!("[TEST] FAIL: Assertion {:?} - {}", assertion, reason);
                self.test_passed = false;
            }
        }

        result
    }

    /// Exit code for a requested `code`: failures always exit with 1
    pub fn exit_code(&self, code: i32) -> i32 {
        if self.test_passed {
            code
        } else {
            1
        }
    }

    pub fn summary(&self) -> String {
        let status = if self.test_passed { "PASSED" } else { "FAILED" };
        format!(
            "[TEST] Test '{}' {}: Executed {} actions in {:?}",
            self.config.test.name,
            status,
            self.current_action_index,
            self.elapsed()
        )
    }
}

fn action_to_command(action: &ActionType) -> TestCommand {
    match action {
        ActionType::SelectTab { tab } => TestCommand::SelectTab(*tab),
        ActionType::SelectPage { page } => TestCommand::SelectPage(*page),
        ActionType::NextPage => TestCommand::NextPage,
        ActionType::PreviousPage => TestCommand::PreviousPage,
        ActionType::OpenMenu => TestCommand::OpenMenu,
        ActionType::CloseMenu => TestCommand::CloseMenu,
        ActionType::MenuAction { action } => TestCommand::MenuAction(*action),
        ActionType::Screenshot { name } => TestCommand::Screenshot(
            name.clone()
                .unwrap_or_else(screenshot::timestamped_name),
        ),
        ActionType::Log { message } => TestCommand::Log(message.clone()),
        ActionType::Exit { code } => TestCommand::Exit { code: *code },
    }
}

fn expect(condition: bool, reason: impl FnOnce() -> String) -> AssertionResult {
    if condition {
        AssertionResult::Passed
    } else {
        AssertionResult::Failed(reason())
    }
}

fn evaluate(assertion: &Assertion, context: &AssertionContext) -> AssertionResult {
    match assertion {
        Assertion::ActiveTab { tab } => expect(context.active_tab == *tab, || {
            format!("Expected tab {:?}, got {:?}", tab, context.active_tab)
        }),
        Assertion::CurrentPage { page } => expect(context.current_page == *page, || {
            format!("Expected page {}, got {}", page, context.current_page)
        }),
        Assertion::MenuOpen => expect(context.menu_open, || {
            "Expected the File menu to be open".to_string()
        }),
        Assertion::MenuClosed => expect(!context.menu_open, || {
            "Expected the File menu to be closed".to_string()
        }),
        Assertion::StatusBarVisible => expect(context.status_bar_visible, || {
            format!("Expected a status bar on {:?}", context.active_tab)
        }),
        Assertion::StatusBarHidden => expect(!context.status_bar_visible, || {
            format!("Expected no status bar on {:?}", context.active_tab)
        }),
        Assertion::VisiblePhonemes { phonemes } => {
            expect(context.visible_phonemes == *phonemes, || {
                format!(
                    "Expected phonemes {:?}, got {:?}",
                    phonemes, context.visible_phonemes
                )
            })
        }
        Assertion::CompletionPercentage { percent } => {
            expect(context.completion_percentage == *percent, || {
                format!(
                    "Expected {}% complete, got {}%",
                    percent, context.completion_percentage
                )
            })
        }
        Assertion::WaveformMounted => expect(context.waveform_mounted, || {
            "Expected the waveform surface to be mounted".to_string()
        }),
    }
}
