//! Circular popup menu with four directional wedges and a cancel hub.
//!
//! The menu is generic over the action each region yields, so callers wire
//! it up with their own enum and read back which one was clicked. Geometry
//! (placement, hit-testing) is kept separate from painting so it can be
//! checked without an egui frame.

use egui::{Align2, CursorIcon, FontId, Id, Order, Pos2, Rect, Sense, Shape, Stroke, Vec2};
use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

use super::views::palette::RadialMenuPalette;

pub const DEFAULT_MENU_DIAMETER: f32 = 192.0;
pub const DEFAULT_HUB_DIAMETER: f32 = 64.0;
pub const DEFAULT_MENU_MARGIN: f32 = 8.0;

const ARC_SEGMENTS: usize = 16;
/// Distance from the centre to the button captions, as a share of the radius
const LABEL_DISTANCE: f32 = 0.66;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MenuSlot {
    Top,
    Right,
    Bottom,
    Left,
}

impl MenuSlot {
    pub const ALL: [MenuSlot; 4] = [MenuSlot::Top, MenuSlot::Right, MenuSlot::Bottom, MenuSlot::Left];

    fn index(self) -> usize {
        match self {
            MenuSlot::Top => 0,
            MenuSlot::Right => 1,
            MenuSlot::Bottom => 2,
            MenuSlot::Left => 3,
        }
    }

    /// Screen-space angle of the wedge centre (y grows downward).
    fn angle(self) -> f32 {
        match self {
            MenuSlot::Top => -FRAC_PI_2,
            MenuSlot::Right => 0.0,
            MenuSlot::Bottom => FRAC_PI_2,
            MenuSlot::Left => PI,
        }
    }

    fn direction(self) -> Vec2 {
        Vec2::angled(self.angle())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RadialMenuButton<A> {
    pub icon: &'static str,
    pub label: &'static str,
    pub disabled: bool,
    pub action: A,
}

/// Which part of the menu a point falls in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuHit {
    Button(MenuSlot),
    Cancel,
    Outside,
}

#[derive(Clone, Debug)]
pub struct RadialMenu<A> {
    /// Buttons in top, right, bottom, left order
    buttons: [RadialMenuButton<A>; 4],
    cancel: A,
    diameter: f32,
    hub_diameter: f32,
}

impl<A: Copy> RadialMenu<A> {
    pub fn new(buttons: [RadialMenuButton<A>; 4], cancel: A) -> Self {
        Self {
            buttons,
            cancel,
            diameter: DEFAULT_MENU_DIAMETER,
            hub_diameter: DEFAULT_HUB_DIAMETER,
        }
    }

    pub fn with_size(mut self, diameter: f32, hub_diameter: f32) -> Self {
        self.diameter = diameter;
        self.hub_diameter = hub_diameter.min(diameter);
        self
    }

    pub fn diameter(&self) -> f32 {
        self.diameter
    }

    pub fn radius(&self) -> f32 {
        self.diameter / 2.0
    }

    pub fn hub_radius(&self) -> f32 {
        self.hub_diameter / 2.0
    }

    pub fn button(&self, slot: MenuSlot) -> &RadialMenuButton<A> {
        &self.buttons[slot.index()]
    }

    /// Classify `pointer` against a menu centred on `center`.
    ///
    /// The hub wins over the wedges; each wedge spans the 90° around its
    /// direction, with ties on the diagonals going to top/bottom.
    pub fn hit_test(&self, center: Pos2, pointer: Pos2) -> MenuHit {
        if !contains(center, self.radius(), pointer) {
            return MenuHit::Outside;
        }
        if contains(center, self.hub_radius(), pointer) {
            return MenuHit::Cancel;
        }

        let delta = pointer - center;
        let slot = if delta.y.abs() >= delta.x.abs() {
            if delta.y < 0.0 {
                MenuSlot::Top
            } else {
                MenuSlot::Bottom
            }
        } else if delta.x > 0.0 {
            MenuSlot::Right
        } else {
            MenuSlot::Left
        };
        MenuHit::Button(slot)
    }

    /// Action a click at `pointer` would fire, if any.
    ///
    /// Disabled buttons and points outside the circle yield nothing.
    pub fn action_at(&self, center: Pos2, pointer: Pos2) -> Option<A> {
        match self.hit_test(center, pointer) {
            MenuHit::Button(slot) => {
                let button = self.button(slot);
                (!button.disabled).then_some(button.action)
            }
            MenuHit::Cancel => Some(self.cancel),
            MenuHit::Outside => None,
        }
    }

    /// Paint the menu with its top-left corner at `origin` and return the
    /// action clicked this frame.
    pub fn show(&self, ctx: &egui::Context, origin: Pos2, palette: &RadialMenuPalette) -> Option<A> {
        egui::Area::new(Id::new("radial_menu"))
            .fixed_pos(origin)
            .order(Order::Foreground)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(Vec2::splat(self.diameter), Sense::click());
                let center = rect.center();
                let hovered = response.hover_pos().map(|pos| self.hit_test(center, pos));

                match hovered {
                    Some(MenuHit::Button(slot)) if self.button(slot).disabled => {
                        ctx.set_cursor_icon(CursorIcon::NotAllowed);
                    }
                    Some(MenuHit::Button(_)) | Some(MenuHit::Cancel) => {
                        ctx.set_cursor_icon(CursorIcon::PointingHand);
                    }
                    _ => {}
                }

                self.paint(ui.painter(), center, hovered, palette);

                if response.clicked() {
                    response
                        .interact_pointer_pos()
                        .and_then(|pos| self.action_at(center, pos))
                } else {
                    None
                }
            })
            .inner
    }

    fn paint(
        &self,
        painter: &egui::Painter,
        center: Pos2,
        hovered: Option<MenuHit>,
        palette: &RadialMenuPalette,
    ) {
        let radius = self.radius();
        painter.circle_filled(center, radius, palette.background);

        for slot in MenuSlot::ALL {
            let button = self.button(slot);
            let fill = if button.disabled {
                Some(palette.disabled_overlay)
            } else if hovered == Some(MenuHit::Button(slot)) {
                Some(palette.hover)
            } else {
                None
            };
            if let Some(fill) = fill {
                painter.add(Shape::convex_polygon(
                    wedge_points(center, radius, slot.angle()),
                    fill,
                    Stroke::NONE,
                ));
            }

            let text_color = if button.disabled {
                palette.disabled_text
            } else {
                palette.text
            };
            let anchor = center + slot.direction() * radius * LABEL_DISTANCE;
            painter.text(
                anchor - Vec2::new(0.0, 9.0),
                Align2::CENTER_CENTER,
                button.icon,
                FontId::proportional(18.0),
                text_color,
            );
            painter.text(
                anchor + Vec2::new(0.0, 10.0),
                Align2::CENTER_CENTER,
                button.label,
                FontId::proportional(13.0),
                text_color,
            );
        }

        // Diagonal dividers between the wedges
        let divider = Stroke::new(2.0, palette.divider);
        for angle in [FRAC_PI_4, -FRAC_PI_4] {
            let offset = Vec2::angled(angle) * radius;
            painter.line_segment([center - offset, center + offset], divider);
        }

        let hub_fill = if hovered == Some(MenuHit::Cancel) {
            palette.hover
        } else {
            palette.background
        };
        painter.circle_filled(center, self.hub_radius(), hub_fill);
        painter.circle_stroke(center, self.hub_radius(), divider);
        painter.text(
            center,
            Align2::CENTER_CENTER,
            "✖",
            FontId::proportional(20.0),
            palette.text,
        );
    }
}

/// Whether `pointer` lies within the circle; points on the rim count as inside.
pub fn contains(center: Pos2, radius: f32, pointer: Pos2) -> bool {
    center.distance(pointer) <= radius
}

/// Top-left corner for a menu centred as close to `anchor` as the viewport
/// allows, keeping `margin` clear on every side.
pub fn place_menu(anchor: Pos2, diameter: f32, viewport: Rect, margin: f32) -> Pos2 {
    Pos2::new(
        clamp_axis(anchor.x, diameter, viewport.left(), viewport.right(), margin),
        clamp_axis(anchor.y, diameter, viewport.top(), viewport.bottom(), margin),
    )
}

fn clamp_axis(point: f32, diameter: f32, min: f32, max: f32, margin: f32) -> f32 {
    let radius = diameter / 2.0;
    if point - min < radius + margin {
        min + margin
    } else if point + radius + margin > max {
        max - diameter - margin
    } else {
        point - radius
    }
}

fn wedge_points(center: Pos2, radius: f32, angle: f32) -> Vec<Pos2> {
    let start = angle - FRAC_PI_4;
    let step = FRAC_PI_2 / ARC_SEGMENTS as f32;
    std::iter::once(center)
        .chain((0..=ARC_SEGMENTS).map(|i| center + Vec2::angled(start + step * i as f32) * radius))
        .collect()
}
