//! Selection state machine behind the week grid.
//!
//! The shell is the only owner of selection state. The week view feeds it
//! pointer events and reads back the overlay and menu to draw; every
//! transition goes through the methods here:
//!
//! ```text
//! Idle --press in grid--> Dragging --release--> PurposePending --choice/cancel--> Idle
//! Idle --day cell click----------------------> PurposePending
//! ```

use chrono::NaiveDate;
use egui::{PointerButton, Pos2, Rect};

use super::grid_mapping::{GridGeometry, OverlayGeometry, Position};
use super::radial_menu::{
    contains, place_menu, RadialMenu, RadialMenuButton, DEFAULT_HUB_DIAMETER,
    DEFAULT_MENU_DIAMETER, DEFAULT_MENU_MARGIN,
};
use crate::models::selection::{Selection, SelectionKind, TimePurpose};
use crate::models::settings::Settings;
use crate::models::time_code::CalendarTimeCode;
use crate::services::selection_log::SelectionSink;

/// Current stage of the user's gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SelectionMode {
    Idle,
    Dragging {
        day: usize,
        date: NaiveDate,
        start: CalendarTimeCode,
        end: CalendarTimeCode,
    },
    PurposePending {
        selection: Selection,
        /// Top-left corner of the radial menu in viewport coordinates
        menu_origin: Pos2,
    },
}

/// What a click on the purpose menu asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurposeAction {
    Choose(TimePurpose),
    Cancel,
}

/// Size and edge margin of the purpose menu.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MenuLayout {
    pub diameter: f32,
    pub hub_diameter: f32,
    pub margin: f32,
}

impl Default for MenuLayout {
    fn default() -> Self {
        Self {
            diameter: DEFAULT_MENU_DIAMETER,
            hub_diameter: DEFAULT_HUB_DIAMETER,
            margin: DEFAULT_MENU_MARGIN,
        }
    }
}

impl From<&Settings> for MenuLayout {
    fn from(settings: &Settings) -> Self {
        Self {
            diameter: settings.menu_diameter,
            hub_diameter: settings.menu_hub_diameter,
            margin: settings.menu_margin,
        }
    }
}

pub struct SelectionShell<S: SelectionSink> {
    mode: SelectionMode,
    week: Vec<NaiveDate>,
    menu: MenuLayout,
    sink: S,
}

impl<S: SelectionSink> SelectionShell<S> {
    pub fn new(week: Vec<NaiveDate>, menu: MenuLayout, sink: S) -> Self {
        Self {
            mode: SelectionMode::Idle,
            week,
            menu,
            sink,
        }
    }

    pub fn mode(&self) -> &SelectionMode {
        &self.mode
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.mode, SelectionMode::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.mode, SelectionMode::Dragging { .. })
    }

    pub fn week(&self) -> &[NaiveDate] {
        &self.week
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Start a drag at `position`.
    ///
    /// Ignored unless the primary button is pressed, nothing is already
    /// selected, the grid has been measured, and the pointer is over a day
    /// column of the visible week.
    pub fn pointer_down(
        &mut self,
        button: PointerButton,
        position: Position,
        grid: Option<&GridGeometry>,
    ) -> bool {
        if button != PointerButton::Primary || !self.is_idle() {
            return false;
        }
        let Some(grid) = grid else {
            return false;
        };
        let Some((day, date)) = grid
            .pixel_to_day_index(position.absolute_x)
            .and_then(|day| self.week.get(day).map(|date| (day, *date)))
        else {
            log::debug!("Ignoring press outside the day columns at x={}", position.x);
            return false;
        };

        let start = grid.relative_y_to_time_code(position.y);
        log::debug!("Drag started on {} at {}", date, start);
        self.mode = SelectionMode::Dragging {
            day,
            date,
            start,
            end: start,
        };
        true
    }

    /// Track the pointer during a drag. Returns `true` if the end moved.
    pub fn pointer_move(&mut self, position: Position, grid: Option<&GridGeometry>) -> bool {
        let (SelectionMode::Dragging { end, .. }, Some(grid)) = (&mut self.mode, grid) else {
            return false;
        };

        let code = grid.relative_y_to_time_code(position.y);
        if code == *end {
            return false;
        }
        *end = code;
        true
    }

    /// Handle a button release anywhere in the viewport.
    ///
    /// Ends an active drag and opens the purpose menu near `pointer`, or
    /// cancels a pending choice when released outside the menu circle.
    pub fn pointer_up(&mut self, button: PointerButton, pointer: Pos2, viewport: Rect) -> bool {
        if button != PointerButton::Primary {
            return false;
        }

        match self.mode {
            SelectionMode::Dragging {
                day,
                date,
                start,
                end,
            } => {
                let selection = Selection::from_drag(day, date, start, end);
                self.open_menu(selection, pointer, viewport);
                true
            }
            SelectionMode::PurposePending { menu_origin, .. } => {
                let radius = self.menu.diameter / 2.0;
                let center = menu_origin + egui::Vec2::splat(radius);
                if contains(center, radius, pointer) {
                    return false;
                }
                self.cancel()
            }
            SelectionMode::Idle => false,
        }
    }

    /// Select a whole day from the agenda strip.
    pub fn select_date(&mut self, day: usize, anchor: Pos2, viewport: Rect) -> bool {
        if !self.is_idle() {
            return false;
        }
        let Some(date) = self.week.get(day).copied() else {
            return false;
        };
        self.open_menu(Selection::Date { day, date }, anchor, viewport);
        true
    }

    /// Apply a click from the purpose menu.
    pub fn apply(&mut self, action: PurposeAction) -> bool {
        match action {
            PurposeAction::Choose(purpose) => self.choose(purpose),
            PurposeAction::Cancel => self.cancel(),
        }
    }

    /// Commit `purpose` for the pending selection if its kind allows it.
    pub fn choose(&mut self, purpose: TimePurpose) -> bool {
        let SelectionMode::PurposePending { selection, .. } = self.mode else {
            return false;
        };
        if !selection.kind().allows(purpose) {
            log::debug!("{} is not available for a {:?} selection", purpose, selection.kind());
            return false;
        }
        self.sink.committed(&selection, purpose);
        self.mode = SelectionMode::Idle;
        true
    }

    /// Drop the pending selection without a purpose.
    pub fn cancel(&mut self) -> bool {
        let SelectionMode::PurposePending { selection, .. } = self.mode else {
            return false;
        };
        self.sink.cancelled(&selection);
        self.mode = SelectionMode::Idle;
        true
    }

    /// Return to idle when the view is torn down.
    pub fn reset(&mut self) {
        match self.mode {
            SelectionMode::Idle => {}
            SelectionMode::Dragging { .. } => {
                log::debug!("Discarding unfinished drag");
                self.mode = SelectionMode::Idle;
            }
            SelectionMode::PurposePending { .. } => {
                self.cancel();
            }
        }
    }

    /// Overlay for the current drag, once the end has left the start.
    pub fn overlay(&self, grid: &GridGeometry) -> Option<OverlayGeometry> {
        match self.mode {
            SelectionMode::Dragging {
                day, start, end, ..
            } if start != end => Some(grid.overlay_geometry(day, start, end)),
            _ => None,
        }
    }

    /// The purpose menu and where to draw it, while a choice is pending.
    pub fn purpose_menu(&self) -> Option<(RadialMenu<PurposeAction>, Pos2)> {
        let SelectionMode::PurposePending {
            selection,
            menu_origin,
        } = self.mode
        else {
            return None;
        };

        let kind = selection.kind();
        Some((
            purpose_menu_for(kind).with_size(self.menu.diameter, self.menu.hub_diameter),
            menu_origin,
        ))
    }

    fn open_menu(&mut self, selection: Selection, anchor: Pos2, viewport: Rect) {
        self.sink.in_progress(&selection);
        let menu_origin = place_menu(anchor, self.menu.diameter, viewport, self.menu.margin);
        self.mode = SelectionMode::PurposePending {
            selection,
            menu_origin,
        };
    }
}

/// Purpose menu with buttons disabled according to `kind`.
pub fn purpose_menu_for(kind: SelectionKind) -> RadialMenu<PurposeAction> {
    let button = |purpose: TimePurpose| RadialMenuButton {
        icon: purpose.icon(),
        label: purpose.label(),
        disabled: !kind.allows(purpose),
        action: PurposeAction::Choose(purpose),
    };
    RadialMenu::new(TimePurpose::ALL.map(button), PurposeAction::Cancel)
}
