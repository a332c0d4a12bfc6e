// Integration tests for the selection flow and settings persistence
mod fixtures;

use egui::{PointerButton, Pos2, Vec2};
use pretty_assertions::assert_eq;
use purpose_calendar::models::selection::{Selection, SelectionKind, TimePurpose};
use purpose_calendar::models::settings::Settings;
use purpose_calendar::models::time_code::CalendarTimeCode;
use purpose_calendar::services::selection_log::SelectionSink;
use purpose_calendar::services::settings::SettingsService;
use purpose_calendar::ui_egui::radial_menu::MenuSlot;
use purpose_calendar::ui_egui::selection_shell::{
    MenuLayout, PurposeAction, SelectionMode, SelectionShell,
};
use tempfile::TempDir;

/// Sink that keeps the log lines it would have written.
#[derive(Default)]
struct RecordingSink {
    lines: Vec<String>,
}

impl SelectionSink for RecordingSink {
    fn in_progress(&mut self, selection: &Selection) {
        self.lines.push(format!("in progress: {}", selection.describe()));
    }

    fn committed(&mut self, selection: &Selection, purpose: TimePurpose) {
        self.lines
            .push(format!("complete: {} as {}", selection.describe(), purpose));
    }

    fn cancelled(&mut self, selection: &Selection) {
        self.lines.push(format!("cancelled: {}", selection.describe()));
    }
}

fn new_shell() -> SelectionShell<RecordingSink> {
    SelectionShell::new(
        fixtures::sample_week(),
        MenuLayout::default(),
        RecordingSink::default(),
    )
}

/// Press at `from_y`, drag to `to_y` and release, all in column `day`.
fn drag(shell: &mut SelectionShell<RecordingSink>, day: usize, from_y: f32, to_y: f32) -> Pos2 {
    let grid = fixtures::grid_at_eight();
    let x = fixtures::column_center_x(day);

    let press = grid.position_from_pointer(Pos2::new(x, from_y));
    assert!(shell.pointer_down(PointerButton::Primary, press, Some(&grid)));

    let moved = grid.position_from_pointer(Pos2::new(x, to_y));
    shell.pointer_move(moved, Some(&grid));

    let release = Pos2::new(x, to_y);
    assert!(shell.pointer_up(PointerButton::Primary, release, fixtures::window()));
    release
}

fn pending_selection(shell: &SelectionShell<RecordingSink>) -> Selection {
    match shell.mode() {
        SelectionMode::PurposePending { selection, .. } => *selection,
        other => panic!("expected a pending selection, got {:?}", other),
    }
}

#[test]
fn test_drag_span_and_choose_event() {
    let mut shell = new_shell();

    // 9:00 AM to 11:30 AM on Monday
    let release = drag(&mut shell, 1, 164.0, 324.0);
    let selection = pending_selection(&shell);
    assert_eq!(selection.kind(), SelectionKind::Span);
    assert_eq!(
        selection.range_labels(),
        Some(("9:00 AM".to_string(), "11:30 AM".to_string()))
    );

    let (menu, origin) = shell.purpose_menu().unwrap();
    let center = origin + Vec2::splat(menu.radius());
    assert_eq!(center, release);

    // Bottom wedge is Event
    let action = menu.action_at(center, center + Vec2::new(0.0, 60.0));
    assert_eq!(action, Some(PurposeAction::Choose(TimePurpose::Event)));
    assert!(shell.apply(PurposeAction::Choose(TimePurpose::Event)));

    assert!(shell.is_idle());
    assert_eq!(
        shell.sink().lines,
        vec![
            "in progress: SPAN (9:00 AM to 11:30 AM) from Mon 10/19".to_string(),
            "complete: SPAN (9:00 AM to 11:30 AM) from Mon 10/19 as Event".to_string(),
        ]
    );
}

#[test]
fn test_upward_drag_keeps_press_as_start() {
    let mut shell = new_shell();

    drag(&mut shell, 3, 324.0, 164.0);
    let selection = pending_selection(&shell);
    assert_eq!(
        selection.range_labels(),
        Some(("11:30 AM".to_string(), "9:00 AM".to_string()))
    );
    let (first, last) = selection.bounds().unwrap();
    assert!(first < last);
}

#[test]
fn test_span_rejects_start_and_due() {
    let mut shell = new_shell();
    drag(&mut shell, 2, 164.0, 228.0);

    let (menu, _) = shell.purpose_menu().unwrap();
    assert!(menu.button(MenuSlot::Top).disabled);
    assert!(menu.button(MenuSlot::Right).disabled);
    assert!(!menu.button(MenuSlot::Left).disabled);

    assert!(!shell.choose(TimePurpose::Start));
    assert!(!shell.choose(TimePurpose::Due));
    assert!(matches!(shell.mode(), SelectionMode::PurposePending { .. }));

    assert!(shell.choose(TimePurpose::Work));
    assert!(shell.is_idle());
}

#[test]
fn test_click_without_drag_is_a_moment() {
    let mut shell = new_shell();

    drag(&mut shell, 5, 196.0, 196.0);
    let selection = pending_selection(&shell);
    assert_eq!(selection.kind(), SelectionKind::Moment);
    assert_eq!(
        selection,
        Selection::Moment {
            day: 5,
            date: fixtures::sample_week()[5],
            code: CalendarTimeCode::new(9, 2),
        }
    );

    assert!(!shell.choose(TimePurpose::Work));
    assert!(shell.choose(TimePurpose::Due));
}

#[test]
fn test_release_outside_menu_cancels() {
    let mut shell = new_shell();
    drag(&mut shell, 0, 164.0, 228.0);

    let (menu, origin) = shell.purpose_menu().unwrap();
    let center = origin + Vec2::splat(menu.radius());

    // Inside the circle leaves the choice open
    assert!(!shell.pointer_up(PointerButton::Primary, center, fixtures::window()));
    assert!(matches!(shell.mode(), SelectionMode::PurposePending { .. }));

    let far_away = center + Vec2::new(menu.radius() + 40.0, 0.0);
    assert!(shell.pointer_up(PointerButton::Primary, far_away, fixtures::window()));
    assert!(shell.is_idle());
    assert_eq!(
        shell.sink().lines.last().map(String::as_str),
        Some("cancelled: SPAN (9:00 AM to 10:00 AM) from Sun 10/18")
    );
}

#[test]
fn test_day_cell_selects_date() {
    let mut shell = new_shell();

    assert!(shell.select_date(6, Pos2::new(1190.0, 20.0), fixtures::window()));
    let selection = pending_selection(&shell);
    assert_eq!(selection.kind(), SelectionKind::Date);

    // The menu is pulled back inside the window
    let (menu, origin) = shell.purpose_menu().unwrap();
    assert_eq!(origin, Pos2::new(1200.0 - menu.diameter() - 8.0, 8.0));

    // Every purpose is allowed for a whole day
    for slot in MenuSlot::ALL {
        assert!(!menu.button(slot).disabled);
    }

    // The hub cancels
    let center = origin + Vec2::splat(menu.radius());
    assert_eq!(menu.action_at(center, center), Some(PurposeAction::Cancel));
    assert!(shell.apply(PurposeAction::Cancel));
    assert!(shell.is_idle());
}

#[test]
fn test_no_second_gesture_while_pending() {
    let mut shell = new_shell();
    drag(&mut shell, 1, 164.0, 228.0);

    let grid = fixtures::grid_at_eight();
    let press = grid.position_from_pointer(Pos2::new(fixtures::column_center_x(4), 300.0));
    assert!(!shell.pointer_down(PointerButton::Primary, press, Some(&grid)));
    assert!(!shell.select_date(4, Pos2::new(400.0, 50.0), fixtures::window()));
    assert_eq!(pending_selection(&shell).day(), 1);
}

#[test]
fn test_press_in_gutter_is_ignored() {
    let mut shell = new_shell();
    let grid = fixtures::grid_at_eight();

    let press = grid.position_from_pointer(Pos2::new(20.0, 200.0));
    assert!(!shell.pointer_down(PointerButton::Primary, press, Some(&grid)));
    assert!(shell.is_idle());
    assert!(shell.sink().lines.is_empty());
}

#[test]
fn test_settings_persistence() {
    let dir = TempDir::new().unwrap();
    let service = SettingsService::new(dir.path().join("nested").join("settings.toml"));

    // Missing file means defaults
    let settings = service.load().expect("Failed to load default settings");
    assert_eq!(settings, Settings::default());

    let updated = Settings {
        theme: "dark".to_string(),
        first_day_of_week: 1,
        hour_height: 48.0,
        menu_diameter: 240.0,
        ..Settings::default()
    };
    service.save(&updated).expect("Failed to save settings");

    let loaded = service.load().expect("Failed to reload settings");
    assert_eq!(loaded, updated);

    // The shell picks up the menu size
    let layout = MenuLayout::from(&loaded);
    assert_eq!(layout.diameter, 240.0);
}

#[test]
fn test_invalid_settings_fall_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "theme = \"sepia\"\n").unwrap();

    let service = SettingsService::new(&path);
    assert!(service.load().is_err());
    assert_eq!(service.load_or_default(), Settings::default());
}
