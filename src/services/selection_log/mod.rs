// Selection log service
// Receives finished selections; the default sink only writes log lines

use crate::models::selection::{Selection, TimePurpose};

/// Destination for selection outcomes.
///
/// Swap in a scheduling backend here; the interaction shell only ever
/// talks to this trait.
#[cfg_attr(test, mockall::automock)]
pub trait SelectionSink {
    /// A selection was made and is waiting for a purpose.
    fn in_progress(&mut self, selection: &Selection);

    /// The user picked a purpose for the selection.
    fn committed(&mut self, selection: &Selection, purpose: TimePurpose);

    /// The selection was dropped without a purpose.
    fn cancelled(&mut self, selection: &Selection);
}

/// Sink that reports every outcome through the `log` facade.
#[derive(Debug, Default)]
pub struct LogSink;

impl LogSink {
    pub fn new() -> Self {
        Self
    }
}

impl SelectionSink for LogSink {
    fn in_progress(&mut self, selection: &Selection) {
        log::info!("In Progress: User selected a {}.", selection.describe());
    }

    fn committed(&mut self, selection: &Selection, purpose: TimePurpose) {
        log::info!(
            "Complete: The user intends to use {} as a {} time.",
            selection.describe(),
            purpose
        );
        if let Some((first, last)) = selection.bounds() {
            log::debug!("Committed range {} .. {}", first, last);
        }
    }

    fn cancelled(&mut self, selection: &Selection) {
        log::info!(
            "Incomplete: User cancelled the {} selection. No action would be taken.",
            selection.describe()
        );
    }
}
