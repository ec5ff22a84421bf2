#[cfg(test)]
mod mock_display_server;

use crate::display_action::DisplayAction;
use crate::models::{LayoutId, NormRect};
use serde::{Deserialize, Serialize};

#[cfg(test)]
pub use self::mock_display_server::MockDisplayServer;

/// A zone the user picked in the zone selector, as the overlay reports it.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SelectorPick {
    pub layout_id: LayoutId,
    /// Position of the zone in its layout.
    pub zone_index: usize,
    /// Relative geometry the overlay drew for the zone.
    pub zone_geometry: NormRect,
}

/// The overlay side of the engine: renders zones and the zone selector.
pub trait DisplayServer {
    fn execute_action(&mut self, act: DisplayAction);

    /// Pending explicit pick in the zone selector, if any.
    fn selected_zone(&self) -> Option<SelectorPick> {
        None
    }

    fn flush(&mut self) {}
}
