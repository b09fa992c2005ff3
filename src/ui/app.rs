//! Main application struct and eframe integration
//!
//! This module contains the SoundbankApp that implements eframe::App.

use crate::audio::WaveformHost;
use crate::config::AppConfig;
use crate::screenshot;
use crate::state::{MenuAnchor, Panel, ViewState};
use crate::testconfig::{AssertionContext, AssertionResult, TestCommand, TestConfig, TestRunner};
use crate::ui::components::tab_rail::RAIL_WIDTH;
use crate::ui::components::{
    FileMenu, PageRequest, Pagination, PhonemeGrid, ProgressGauge, StatusBar, TabRail,
    WaveformView,
};
use crate::ui::fonts;
use crate::ui::theme::Theme;
use egui::{CentralPanel, Frame, Margin, RichText, ScrollArea, SidePanel, TopBottomPanel};
use tracing::{debug, info};

/// Anchor used when a script opens the File menu without a click
fn scripted_menu_anchor() -> MenuAnchor {
    MenuAnchor::new(
        egui::Id::new("file_menu_script"),
        egui::Rect::from_min_size(egui::pos2(12.0, 4.0), egui::vec2(40.0, 28.0)),
    )
}

/// Main Soundbank application
pub struct SoundbankApp {
    /// Whether the view has been mounted
    initialized: bool,
    view: ViewState,
    theme: Theme,
    /// Owner of the waveform surfaces the view acquires
    waveform_host: WaveformHost,
    config: AppConfig,
    /// Test runner (if running a scenario script)
    test_runner: Option<TestRunner>,
    /// Exit code requested by the script (if any)
    pending_exit: Option<i32>,
}

impl SoundbankApp {
    /// Create the application for a native window
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        config: AppConfig,
        test_config: Option<TestConfig>,
    ) -> Self {
        let app = Self::with_config(config, test_config);
        app.theme.apply(&cc.egui_ctx);
        fonts::install_or_warn(&cc.egui_ctx, &app.config.fonts);
        app
    }

    /// Create the application without touching an egui context
    pub fn with_config(config: AppConfig, test_config: Option<TestConfig>) -> Self {
        Self {
            initialized: false,
            view: ViewState::new(),
            theme: Theme::from_choice(config.theme),
            waveform_host: WaveformHost::new(),
            config,
            test_runner: test_config.map(TestRunner::new),
            pending_exit: None,
        }
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut ViewState {
        &mut self.view
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn waveform_host(&self) -> &WaveformHost {
        &self.waveform_host
    }

    /// Mount the view (called on the first frame)
    fn initialize(&mut self) {
        if self.initialized {
            return;
        }
        self.initialized = true;

        self.view.mount(&self.waveform_host);

        if let Some(ref mut runner) = self.test_runner {
            runner.start();
        }

        info!("Soundbank UI initialized");
    }

    /// Unmount the view; the next frame mounts it again
    pub fn shutdown(&mut self) {
        self.view.unmount();
        self.initialized = false;
    }

    /// Run one frame of UI against `ctx`
    pub fn render(&mut self, ctx: &egui::Context) {
        self.initialize();

        screenshot::process_screenshot_events(ctx, &self.config.screenshot_dir);
        self.process_test_commands(ctx);

        if self.test_runner.is_some() {
            ctx.request_repaint();
        }

        self.show_menu_bar(ctx);
        self.show_tab_rail(ctx);
        if self.view.shows_status_bar() {
            self.show_status_bar(ctx);
        }
        self.show_content(ctx);
    }

    fn execute(&mut self, ctx: &egui::Context, command: TestCommand) {
        info!("[TEST] Executing: {:?}", command);
        match command {
            TestCommand::SelectTab(tab) => self.view.set_tab(tab),
            TestCommand::SelectPage(page) => self.view.select_page(page),
            TestCommand::NextPage => self.view.next_page(),
            TestCommand::PreviousPage => self.view.previous_page(),
            TestCommand::OpenMenu => self.view.open_menu(scripted_menu_anchor()),
            TestCommand::CloseMenu => self.view.close_menu(),
            TestCommand::MenuAction(action) => {
                action.perform();
                self.view.close_menu();
            }
            TestCommand::Screenshot(name) => screenshot::request_screenshot(ctx, &name),
            TestCommand::Log(message) => info!("[TEST] Log: {}", message),
            TestCommand::Exit { code } => self.pending_exit = Some(code),
        }
    }

    /// Process test runner commands
    fn process_test_commands(&mut self, ctx: &egui::Context) {
        let mut pending_commands = Vec::new();
        if let Some(ref mut runner) = self.test_runner {
            while let Some(cmd) = runner.poll() {
                pending_commands.push(cmd);
            }
        }

        for (command, assertion) in pending_commands {
            self.execute(ctx, command);

            if let Some(ref assertion) = assertion {
                let context = AssertionContext::from_view(&self.view);
                if let Some(ref mut runner) = self.test_runner {
                    if let AssertionResult::Failed(reason) =
                        runner.check_assertion(assertion, &context)
                    {
                        debug!("[TEST] Continuing after failure: {}", reason);
                    }
                }
            }
        }

        let Some(runner) = &self.test_runner else {
            return;
        };
        if !runner.is_completed() {
            return;
        }

        info!("{}", runner.summary());
        if let Some(code) = self.pending_exit.take() {
            let final_code = runner.exit_code(code);
            info!("[TEST] Exiting with code {}", final_code);
            self.shutdown();
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            std::process::exit(final_code);
        }
    }

    fn show_menu_bar(&mut self, ctx: &egui::Context) {
        TopBottomPanel::top("menu_bar")
            .frame(
                Frame::none()
                    .fill(self.theme.primary)
                    .inner_margin(Margin::symmetric(self.theme.spacing_sm, 4.0)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    FileMenu::new(&mut self.view, &self.theme).show(ui);
                });
            });
    }

    fn show_tab_rail(&mut self, ctx: &egui::Context) {
        SidePanel::left("tab_rail")
            .resizable(false)
            .exact_width(RAIL_WIDTH)
            .frame(
                Frame::none()
                    .fill(self.theme.bg_primary)
                    .stroke(self.theme.divider_stroke()),
            )
            .show(ctx, |ui| {
                TabRail::new(&mut self.view, &self.theme).show(ui);
            });
    }

    fn show_status_bar(&mut self, ctx: &egui::Context) {
        TopBottomPanel::bottom("status_bar")
            .frame(
                Frame::none()
                    .fill(self.theme.status_bar_bg)
                    .stroke(self.theme.divider_stroke())
                    .inner_margin(self.theme.spacing_sm),
            )
            .show(ctx, |ui| {
                StatusBar::new(self.view.project(), self.view.completion(), &self.theme).show(ui);
            });
    }

    fn show_content(&mut self, ctx: &egui::Context) {
        CentralPanel::default()
            .frame(
                Frame::none()
                    .fill(self.theme.bg_primary)
                    .inner_margin(self.theme.spacing_lg),
            )
            .show(ctx, |ui| {
                ScrollArea::vertical()
                    .id_salt("content")
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        let panel = self.view.panel();
                        ui.heading(RichText::new(panel.title()).color(self.theme.text_primary));
                        ui.add_space(self.theme.spacing_sm);

                        match panel {
                            Panel::Overview {
                                page_title,
                                phonemes,
                                current_page,
                                page_count,
                                completion,
                            } => {
                                self.show_overview_header(ui, completion);
                                ui.add_space(self.theme.spacing_lg);
                                ui.separator();
                                ui.add_space(self.theme.spacing_lg);

                                PhonemeGrid::new(page_title, phonemes, &self.theme).show(ui);
                                ui.add_space(self.theme.spacing_lg);

                                let request =
                                    Pagination::new(current_page, page_count, &self.theme).show(ui);
                                match request {
                                    Some(PageRequest::Previous) => self.view.previous_page(),
                                    Some(PageRequest::Next) => self.view.next_page(),
                                    Some(PageRequest::Page(page)) => self.view.select_page(page),
                                    None => {}
                                }
                            }
                            Panel::Details { body } | Panel::Settings { body } => {
                                ui.label(RichText::new(body).color(self.theme.text_secondary));
                            }
                        }
                    });
            });
    }

    /// Completion gauge beside the waveform canvas
    fn show_overview_header(&self, ui: &mut egui::Ui, completion: crate::project::CompletionStats) {
        ui.horizontal_top(|ui| {
            ProgressGauge::new(completion, &self.theme).show(ui);
            ui.add_space(self.theme.spacing_lg);
            ui.separator();
            ui.add_space(self.theme.spacing_lg);

            ui.vertical(|ui| {
                ui.set_min_width(300.0);
                ui.label(
                    RichText::new("Audio Waveform")
                        .size(20.0)
                        .color(self.theme.text_primary),
                );
                Frame::none()
                    .fill(self.theme.bg_primary)
                    .stroke(self.theme.divider_stroke())
                    .rounding(self.theme.card_rounding)
                    .inner_margin(self.theme.spacing)
                    .show(ui, |ui| {
                        WaveformView::new(self.view.waveform(), &self.theme).show(ui);
                    });
            });
        });
    }
}

impl eframe::App for SoundbankApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.render(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.shutdown();
        info!("Soundbank shutting down");
    }
}
