//! View state for the soundbank window
//!
//! Holds the ephemeral UI state (active tab, open menu, current phoneme
//! page, waveform surface) and derives what the window renders from it.
//! All mutation goes through the methods below.

use crate::audio::{WaveformHandle, WaveformHost, WaveformStyle};
use crate::phonemes::{self, PhonemePage, FALLBACK_PAGE_TITLE};
use crate::project::{CompletionStats, ProjectInfo};
use egui::{Id, Rect};
use serde::Deserialize;
use tracing::{debug, info};

/// Tabs of the left-hand rail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum Tab {
    #[default]
    Overview,
    Details,
    Settings,
}

impl Tab {
    /// All tabs in rail order
    pub const ALL: [Tab; 3] = [Tab::Overview, Tab::Details, Tab::Settings];

    /// Tab at rail position `index`
    pub fn from_index(index: usize) -> Option<Tab> {
        Self::ALL.get(index).copied()
    }

    pub fn index(&self) -> usize {
        match self {
            Tab::Overview => 0,
            Tab::Details => 1,
            Tab::Settings => 2,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::Details => "Details",
            Tab::Settings => "Settings",
        }
    }

    /// Parse a lowercase tab name (as used in scenario scripts)
    pub fn from_name(name: &str) -> Option<Tab> {
        match name.to_ascii_lowercase().as_str() {
            "overview" => Some(Tab::Overview),
            "details" => Some(Tab::Details),
            "settings" => Some(Tab::Settings),
            _ => None,
        }
    }
}

impl TryFrom<String> for Tab {
    type Error = String;

    fn try_from(name: String) -> std::result::Result<Self, Self::Error> {
        Tab::from_name(&name).ok_or_else(|| format!("Unknown tab '{}'", name))
    }
}

/// The control that opened the File menu
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MenuAnchor {
    /// Widget id of the trigger button
    pub trigger: Id,
    /// Screen rect of the trigger; the popup opens below it
    pub rect: Rect,
}

impl MenuAnchor {
    pub fn new(trigger: Id, rect: Rect) -> Self {
        Self { trigger, rect }
    }
}

/// Content panel rendered for the active tab
#[derive(Debug, Clone, PartialEq)]
pub enum Panel {
    Overview {
        page_title: &'static str,
        phonemes: &'static [&'static str],
        current_page: usize,
        page_count: usize,
        completion: CompletionStats,
    },
    Details {
        body: &'static str,
    },
    Settings {
        body: &'static str,
    },
}

impl Panel {
    pub fn title(&self) -> &'static str {
        match self {
            Panel::Overview { .. } => Tab::Overview.label(),
            Panel::Details { .. } => Tab::Details.label(),
            Panel::Settings { .. } => Tab::Settings.label(),
        }
    }
}

/// Ephemeral state of the soundbank view
#[derive(Debug)]
pub struct ViewState {
    active_tab: Tab,
    menu_anchor: Option<MenuAnchor>,
    current_page: usize,
    waveform: Option<WaveformHandle>,
    completion: CompletionStats,
    project: ProjectInfo,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    /// Initial state: Overview tab, first page, menu closed, not mounted
    pub fn new() -> Self {
        Self {
            active_tab: Tab::Overview,
            menu_anchor: None,
            current_page: 1,
            waveform: None,
            completion: CompletionStats::default(),
            project: ProjectInfo::default(),
        }
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn menu_anchor(&self) -> Option<&MenuAnchor> {
        self.menu_anchor.as_ref()
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_anchor.is_some()
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_count(&self) -> usize {
        phonemes::page_count()
    }

    pub fn completion(&self) -> CompletionStats {
        self.completion
    }

    pub fn project(&self) -> &ProjectInfo {
        &self.project
    }

    pub fn waveform(&self) -> Option<&WaveformHandle> {
        self.waveform.as_ref()
    }

    pub fn is_mounted(&self) -> bool {
        self.waveform.is_some()
    }

    /// Show the File menu anchored at `anchor`
    pub fn open_menu(&mut self, anchor: MenuAnchor) {
        debug!("[VIEW] Menu opened");
        self.menu_anchor = Some(anchor);
    }

    /// Hide the File menu
    pub fn close_menu(&mut self) {
        if self.menu_anchor.take().is_some() {
            debug!("[VIEW] Menu closed");
        }
    }

    /// Select the tab at rail position `index`; unknown indices are ignored
    pub fn select_tab(&mut self, index: usize) {
        if let Some(tab) = Tab::from_index(index) {
            self.set_tab(tab);
        }
    }

    pub fn set_tab(&mut self, tab: Tab) {
        if self.active_tab != tab {
            debug!("[VIEW] Tab {:?} -> {:?}", self.active_tab, tab);
            self.active_tab = tab;
        }
    }

    /// Go to 1-based page `number`; out-of-range numbers are ignored
    pub fn select_page(&mut self, number: usize) {
        if (1..=self.page_count()).contains(&number) {
            if self.current_page != number {
                debug!("[VIEW] Page {} -> {}", self.current_page, number);
            }
            self.current_page = number;
        }
    }

    pub fn next_page(&mut self) {
        self.select_page(self.current_page + 1);
    }

    pub fn previous_page(&mut self) {
        if self.current_page > 1 {
            self.select_page(self.current_page - 1);
        }
    }

    pub fn has_next_page(&self) -> bool {
        self.current_page < self.page_count()
    }

    pub fn has_previous_page(&self) -> bool {
        self.current_page > 1
    }

    fn current_phoneme_page(&self) -> Option<&'static PhonemePage> {
        phonemes::page(self.current_page)
    }

    /// Phonemes of the current page, or empty if the page is unknown
    pub fn visible_phonemes(&self) -> &'static [&'static str] {
        self.current_phoneme_page()
            .map(|page| page.phonemes)
            .unwrap_or(&[])
    }

    /// Name of the current page
    pub fn page_title(&self) -> &'static str {
        self.current_phoneme_page()
            .map(|page| page.name)
            .unwrap_or(FALLBACK_PAGE_TITLE)
    }

    pub fn completion_percentage(&self) -> u32 {
        self.completion.percentage()
    }

    /// The one panel the active tab renders
    pub fn panel(&self) -> Panel {
        match self.active_tab {
            Tab::Overview => Panel::Overview {
                page_title: self.page_title(),
                phonemes: self.visible_phonemes(),
                current_page: self.current_page,
                page_count: self.page_count(),
                completion: self.completion,
            },
            Tab::Details => Panel::Details {
                body: "Details content goes here.",
            },
            Tab::Settings => Panel::Settings {
                body: "Settings content goes here.",
            },
        }
    }

    /// The status bar shows under Overview and Details only
    pub fn shows_status_bar(&self) -> bool {
        matches!(self.active_tab, Tab::Overview | Tab::Details)
    }

    /// Acquire the waveform surface unless it is already held
    pub fn mount(&mut self, host: &WaveformHost) {
        if self.waveform.is_some() {
            return;
        }
        // Fresh surfaces carry an empty source, which draws a flat line
        self.waveform = Some(host.acquire(WaveformStyle::default()));
        info!("[VIEW] Mounted");
    }

    /// Release the waveform surface if held
    pub fn unmount(&mut self) {
        if let Some(handle) = self.waveform.take() {
            handle.release();
            info!("[VIEW] Unmounted");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phonemes::JAPANESE_PHONEME_PAGES;

    fn anchor() -> MenuAnchor {
        MenuAnchor::new(
            Id::new("file_menu_button"),
            Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(60.0, 24.0)),
        )
    }

    #[test]
    fn test_initial_state() {
        let state = ViewState::new();
        assert_eq!(state.active_tab(), Tab::Overview);
        assert_eq!(state.current_page(), 1);
        assert!(!state.is_menu_open());
        assert!(!state.is_mounted());
        assert_eq!(state.visible_phonemes(), &["あ", "い", "う", "え", "お"]);
        assert_eq!(state.completion().summary(), "0/134 (0%)");
        assert!(state.shows_status_bar());
    }

    #[test]
    fn test_every_page_shows_its_phonemes() {
        let mut state = ViewState::new();
        for (index, page) in JAPANESE_PHONEME_PAGES.iter().enumerate() {
            state.select_page(index + 1);
            assert_eq!(state.current_page(), index + 1);
            assert_eq!(state.visible_phonemes(), page.phonemes);
            assert_eq!(state.page_title(), page.name);
        }
    }

    #[test]
    fn test_out_of_range_page_is_ignored() {
        let mut state = ViewState::new();
        state.select_page(4);
        state.select_page(0);
        assert_eq!(state.current_page(), 4);
        state.select_page(17);
        assert_eq!(state.current_page(), 4);
    }

    #[test]
    fn test_next_and_previous_saturate() {
        let mut state = ViewState::new();
        state.previous_page();
        assert_eq!(state.current_page(), 1);
        assert!(!state.has_previous_page());

        state.select_page(16);
        state.next_page();
        assert_eq!(state.current_page(), 16);
        assert!(!state.has_next_page());

        state.previous_page();
        assert_eq!(state.current_page(), 15);
        assert_eq!(state.visible_phonemes(), &["ば", "び", "ぶ", "べ", "ぼ"]);
    }

    #[test]
    fn test_menu_open_then_close() {
        let mut state = ViewState::new();
        state.open_menu(anchor());
        assert!(state.is_menu_open());
        assert_eq!(state.menu_anchor().map(|a| a.trigger), Some(Id::new("file_menu_button")));

        state.close_menu();
        assert!(state.menu_anchor().is_none());

        // Closing twice is harmless
        state.close_menu();
        assert!(!state.is_menu_open());
    }

    #[test]
    fn test_select_tab_by_index() {
        let mut state = ViewState::new();
        state.select_tab(2);
        assert_eq!(state.active_tab(), Tab::Settings);
        state.select_tab(3);
        assert_eq!(state.active_tab(), Tab::Settings);
        state.select_tab(1);
        assert_eq!(state.active_tab(), Tab::Details);
    }

    #[test]
    fn test_one_panel_per_tab_and_status_bar() {
        let mut state = ViewState::new();
        for tab in Tab::ALL {
            state.set_tab(tab);
            let panel = state.panel();
            assert_eq!(panel.title(), tab.label());
            assert_eq!(
                state.shows_status_bar(),
                matches!(tab, Tab::Overview | Tab::Details)
            );
        }
    }

    #[test]
    fn test_overview_panel_contents() {
        let mut state = ViewState::new();
        state.select_page(8);
        match state.panel() {
            Panel::Overview {
                page_title,
                phonemes,
                current_page,
                page_count,
                completion,
            } => {
                assert_eq!(page_title, "や行");
                assert_eq!(phonemes, &["や", "ゆ", "よ"]);
                assert_eq!(current_page, 8);
                assert_eq!(page_count, 16);
                assert_eq!(completion.percentage(), 0);
            }
            other => panic!("expected overview panel, got {:?}", other),
        }
    }

    #[test]
    fn test_mount_is_idempotent() {
        let host = WaveformHost::new();
        let mut state = ViewState::new();
        state.mount(&host);
        let id = state.waveform().map(|w| w.id());
        state.mount(&host);
        assert_eq!(state.waveform().map(|w| w.id()), id);
        assert_eq!(host.acquired_total(), 1);
        assert_eq!(host.live_count(), 1);
    }

    #[test]
    fn test_repeated_mount_cycles_do_not_leak() {
        let host = WaveformHost::new();
        for _ in 0..5 {
            let mut state = ViewState::new();
            state.mount(&host);
            assert_eq!(host.live_count(), 1);
            state.unmount();
            assert_eq!(host.live_count(), 0);
        }
        assert_eq!(host.acquired_total(), 5);
        assert_eq!(host.released_total(), 5);
    }

    #[test]
    fn test_dropping_state_releases_surface() {
        let host = WaveformHost::new();
        {
            let mut state = ViewState::new();
            state.mount(&host);
        }
        assert_eq!(host.live_count(), 0);
    }

    #[test]
    fn test_tab_names() {
        assert_eq!(Tab::from_name("Details"), Some(Tab::Details));
        assert_eq!(Tab::from_name("nope"), None);
        for tab in Tab::ALL {
            assert_eq!(Tab::from_index(tab.index()), Some(tab));
        }
    }
}
