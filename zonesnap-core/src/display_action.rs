use crate::models::{ScreenId, ZoneId};
use serde::{Deserialize, Serialize};

/// These are requests from the snap engine to the overlay.
/// The display server should act on these actions, in order.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub enum DisplayAction {
    /// Show the zone overlay on a screen.
    ShowOverlay(ScreenId),

    HideOverlay,

    /// Highlight the current target zones, primary first.
    HighlightZones(Vec<ZoneId>),

    ClearHighlight,

    /// Show the edge-triggered zone selector on a screen.
    ShowZoneSelector(ScreenId),

    HideZoneSelector,

    /// Cursor position for hover feedback inside the zone selector.
    UpdateSelectorPosition(i32, i32),
}
