// Property-based tests for time codes and the grid mapping
// Random pointer positions and quarter counts must always land inside the day

use egui::{Pos2, Rect, Vec2};
use proptest::prelude::*;
use purpose_calendar::models::time_code::{CalendarTimeCode, MAX_QUARTER};
use purpose_calendar::ui_egui::grid_mapping::{time_code_to_pixel_offset, GridGeometry};

fn grid(scroll_top: f32, hour_height: f32) -> GridGeometry {
    GridGeometry::week(
        Rect::from_min_size(Pos2::new(0.0, 100.0), Vec2::new(764.0, 600.0)),
        scroll_top,
        64.0,
        hour_height,
    )
}

proptest! {
    /// Property: any quarter count clamps into 12:00 AM ..= 11:45 PM
    #[test]
    fn prop_clamped_codes_stay_in_day(quarters in -10_000i64..10_000) {
        let code = CalendarTimeCode::from_quarters_clamped(quarters);
        prop_assert!(code.hours() <= 23);
        prop_assert!(code.quarters() <= 3);
        prop_assert_eq!(code.to_quarters(), quarters.clamp(0, MAX_QUARTER));
    }

    /// Property: hours and quarters survive a trip through the quarter count
    #[test]
    fn prop_quarter_count_round_trips(hours in 0i64..24, quarters in 0i64..4) {
        let code = CalendarTimeCode::new(hours, quarters);
        prop_assert_eq!(CalendarTimeCode::from_quarters_clamped(code.to_quarters()), code);
        prop_assert_eq!(code.minutes(), (quarters * 15) as u32);
    }

    /// Property: equality agrees with the quarter count and is symmetric
    #[test]
    fn prop_equality_matches_quarters(a in 0i64..96, b in 0i64..96) {
        let x = CalendarTimeCode::from_quarters_clamped(a);
        let y = CalendarTimeCode::from_quarters_clamped(b);
        prop_assert_eq!(x == y, a == b);
        prop_assert_eq!(x == y, y == x);
        prop_assert_eq!(x < y, a < b);
    }

    /// Property: labels read like "h:mm AM" with a 12-hour clock
    #[test]
    fn prop_label_format(quarters in 0i64..96) {
        let code = CalendarTimeCode::from_quarters_clamped(quarters);
        let label = code.natural_label(true);
        let (clock, meridiem) = label.split_once(' ').unwrap();
        prop_assert!(meridiem == "AM" || meridiem == "PM");
        prop_assert_eq!(meridiem == "PM", code.hours() >= 12);

        let (hour, minute) = clock.split_once(':').unwrap();
        let hour: u32 = hour.parse().unwrap();
        prop_assert!((1..=12).contains(&hour));
        prop_assert_eq!(minute.len(), 2);
        prop_assert_eq!(minute.parse::<u32>().unwrap(), code.minutes());
    }

    /// Property: any pointer y, at any scroll offset, maps into the day
    #[test]
    fn prop_pointer_y_maps_into_day(
        y in -5_000.0f32..5_000.0,
        scroll_top in 0.0f32..1_000.0,
        hour_height in 16.0f32..128.0,
    ) {
        let code = grid(scroll_top, hour_height).pixel_to_time_code(y);
        prop_assert!(code.to_quarters() >= 0);
        prop_assert!(code.to_quarters() <= MAX_QUARTER);
    }

    /// Property: a code's own pixel offset maps back to the same code
    #[test]
    fn prop_pixel_offset_inverts_mapping(quarters in 0i64..96, hour_height in 16.0f32..128.0) {
        let code = CalendarTimeCode::from_quarters_clamped(quarters);
        let geometry = grid(0.0, hour_height);
        let offset = time_code_to_pixel_offset(code, hour_height);
        prop_assert_eq!(geometry.relative_y_to_time_code(offset), code);
    }

    /// Property: overlays never have negative height and do not depend on drag direction
    #[test]
    fn prop_overlay_is_direction_independent(day in 0usize..7, a in 0i64..96, b in 0i64..96) {
        let geometry = grid(0.0, 64.0);
        let a = CalendarTimeCode::from_quarters_clamped(a);
        let b = CalendarTimeCode::from_quarters_clamped(b);
        let down = geometry.overlay_geometry(day, a, b);
        let up = geometry.overlay_geometry(day, b, a);
        prop_assert!(down.height >= 0.0);
        prop_assert_eq!(down, up);
    }
}
