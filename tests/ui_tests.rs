//! UI automation tests using egui_kittest and AccessKit
//!
//! These tests render the full soundbank window, simulate clicks and
//! check the accessibility tree for the expected content.

use egui_kittest::kittest::Queryable;
use egui_kittest::Harness;
use soundbank::config::AppConfig;
use soundbank::state::Tab;
use soundbank::ui::SoundbankApp;

fn harness() -> Harness<'static, SoundbankApp> {
    let app = SoundbankApp::with_config(AppConfig::default(), None);
    let mut harness = Harness::builder()
        .with_size(egui::Vec2::new(1280.0, 800.0))
        .build_state(|ctx, app: &mut SoundbankApp| app.render(ctx), app);
    harness.run();
    harness
}

/// Initial render shows page 1 of the overview with zero progress
#[test]
fn test_initial_overview() {
    let harness = harness();

    let view = harness.state().view();
    assert_eq!(view.active_tab(), Tab::Overview);
    assert_eq!(view.current_page(), 1);
    assert!(!view.is_menu_open());

    for phoneme in ["あ", "い", "う", "え", "お"] {
        let _card = harness.get_by_label(phoneme);
    }
    let _title = harness.get_by_label("元音");
    let _gauge = harness.get_by_label("0%");
    let _counts = harness.get_by_label("0 of 134 sounds completed");
    let _progress = harness.get_by_label("Progress: 0/134");
    let _language = harness.get_by_label("Project Soundbank Language: Japanese");
}

/// Mounting acquires exactly one waveform surface
#[test]
fn test_waveform_mounted_once() {
    let mut harness = harness();
    for _ in 0..3 {
        harness.run();
    }

    let app = harness.state();
    assert!(app.view().is_mounted());
    assert_eq!(app.waveform_host().live_count(), 1);
    assert_eq!(app.waveform_host().acquired_total(), 1);
    let _canvas = harness.get_by_label("Audio waveform");
}

/// Unmounting releases the surface and a later frame mounts a fresh one
#[test]
fn test_unmount_then_remount() {
    let mut harness = harness();

    harness.state_mut().shutdown();
    assert_eq!(harness.state().waveform_host().live_count(), 0);
    assert!(!harness.state().view().is_mounted());

    harness.run();
    assert_eq!(harness.state().waveform_host().live_count(), 1);
    assert_eq!(harness.state().waveform_host().acquired_total(), 2);
    assert_eq!(harness.state().waveform_host().released_total(), 1);
}

/// Clicking a page number shows that page's phonemes
#[test]
fn test_click_page_number() {
    let mut harness = harness();

    harness.get_by_label("2").click();
    harness.run();

    assert_eq!(harness.state().view().current_page(), 2);
    let _title = harness.get_by_label("か行");
    for phoneme in ["か", "き", "く", "け", "こ"] {
        let _card = harness.get_by_label(phoneme);
    }
    assert!(harness.query_by_label("あ").is_none());
}

/// The arrows step through pages
#[test]
fn test_next_and_previous_arrows() {
    let mut harness = harness();

    harness.get_by_label("Next page").click();
    harness.run();
    harness.get_by_label("Next page").click();
    harness.run();
    assert_eq!(harness.state().view().current_page(), 3);

    harness.get_by_label("Previous page").click();
    harness.run();
    assert_eq!(harness.state().view().current_page(), 2);
}

/// The standalone ん page holds a single card
#[test]
fn test_single_phoneme_page() {
    let mut harness = harness();

    harness.get_by_label("11").click();
    harness.run();

    assert_eq!(harness.state().view().visible_phonemes(), &["ん"]);
    assert_eq!(harness.query_all_by_label("Unrecorded").count(), 1);
}

/// Details keeps the status bar, Settings hides it
#[test]
fn test_tabs_toggle_status_bar() {
    let mut harness = harness();

    harness.get_by_label("Details").click();
    harness.run();
    assert_eq!(harness.state().view().active_tab(), Tab::Details);
    let _body = harness.get_by_label("Details content goes here.");
    assert!(harness.query_by_label("Progress: 0/134").is_some());
    assert!(harness.query_by_label("元音").is_none());

    harness.get_by_label("Settings").click();
    harness.run();
    assert_eq!(harness.state().view().active_tab(), Tab::Settings);
    let _body = harness.get_by_label("Settings content goes here.");
    assert!(harness.query_by_label("Progress: 0/134").is_none());
}

/// The page survives a round trip through another tab
#[test]
fn test_page_kept_across_tabs() {
    let mut harness = harness();

    harness.get_by_label("5").click();
    harness.run();
    harness.state_mut().view_mut().set_tab(Tab::Settings);
    harness.run();
    harness.state_mut().view_mut().set_tab(Tab::Overview);
    harness.run();

    assert_eq!(harness.state().view().current_page(), 5);
    let _title = harness.get_by_label("な行");
}

/// Opening the File menu and picking an item closes it again
#[test]
fn test_file_menu_item_closes_menu() {
    let mut harness = harness();

    harness.get_by_label("File").click();
    harness.run();
    assert!(harness.state().view().is_menu_open());

    for item in [
        "New Project",
        "Open Project",
        "Save Project",
        "Save Project As",
        "Import Audio File",
        "Export Audio",
        "Exit",
    ] {
        let _item = harness.get_by_label(item);
    }

    harness.get_by_label("Save Project").click();
    harness.run();
    assert!(!harness.state().view().is_menu_open());
    assert!(harness.query_by_label("New Project").is_none());
}

/// Clicking File again toggles the menu shut
#[test]
fn test_file_button_toggles_menu() {
    let mut harness = harness();

    harness.get_by_label("File").click();
    harness.run();
    assert!(harness.state().view().is_menu_open());

    harness.get_by_label("File").click();
    harness.run();
    assert!(!harness.state().view().is_menu_open());
}

/// A pointer click outside the popup only dismisses the menu
#[test]
fn test_click_outside_closes_menu() {
    let mut harness = harness();

    harness.get_by_label("File").click();
    harness.run();
    assert!(harness.state().view().is_menu_open());

    harness.get_by_label("Settings").simulate_click();
    harness.run();

    assert!(!harness.state().view().is_menu_open());
    assert_eq!(harness.state().view().active_tab(), Tab::Overview);
    assert!(harness.query_by_label("New Project").is_none());
}

/// Escape dismisses the open menu
#[test]
fn test_escape_closes_menu() {
    let mut harness = harness();

    harness.get_by_label("File").click();
    harness.run();
    assert!(harness.state().view().is_menu_open());

    harness.input_mut().events.push(egui::Event::Key {
        key: egui::Key::Escape,
        physical_key: None,
        pressed: true,
        repeat: false,
        modifiers: egui::Modifiers::NONE,
    });
    harness.run();

    assert!(!harness.state().view().is_menu_open());
    assert!(harness.query_by_label("Export Audio").is_none());
}
