use egui::{Context, Id};

use super::grid_mapping::Position;

/// Pointer positions of an in-flight range drag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RangeDrag {
    pub initial: Position,
    pub current: Position,
}

/// Gesture-scoped pointer capture for range selection.
///
/// While a capture is held the week view reads pointer movement and release
/// from the whole viewport, not just the grid. `begin` acquires it,
/// `finish`/`cancel` release it, and the app calls `cancel` on teardown so a
/// capture never outlives the view that started it.
pub struct RangeDragManager;

impl RangeDragManager {
    fn storage_id() -> Id {
        Id::new("week_grid_range_drag_state")
    }

    /// Acquire the capture. Returns `false` if a drag is already active.
    pub fn begin(ctx: &Context, position: Position) -> bool {
        let id = Self::storage_id();
        ctx.memory_mut(|mem| {
            if mem.data.get_temp::<RangeDrag>(id).is_some() {
                return false;
            }
            mem.data.insert_temp(
                id,
                RangeDrag {
                    initial: position,
                    current: position,
                },
            );
            true
        })
    }

    pub fn active(ctx: &Context) -> Option<RangeDrag> {
        ctx.memory(|mem| mem.data.get_temp::<RangeDrag>(Self::storage_id()))
    }

    pub fn is_active(ctx: &Context) -> bool {
        Self::active(ctx).is_some()
    }

    /// Record the latest pointer position of the active drag.
    pub fn update(ctx: &Context, position: Position) -> Option<RangeDrag> {
        let id = Self::storage_id();
        ctx.memory_mut(|mem| {
            let mut state = mem.data.get_temp::<RangeDrag>(id)?;
            state.current = position;
            mem.data.insert_temp(id, state);
            Some(state)
        })
    }

    /// Release the capture, returning the completed drag.
    pub fn finish(ctx: &Context) -> Option<RangeDrag> {
        let id = Self::storage_id();
        ctx.memory_mut(|mem| {
            let state = mem.data.get_temp::<RangeDrag>(id);
            mem.data.remove::<RangeDrag>(id);
            state
        })
    }

    pub fn cancel(ctx: &Context) {
        ctx.memory_mut(|mem| {
            mem.data.remove::<RangeDrag>(Self::storage_id());
        });
    }
}
