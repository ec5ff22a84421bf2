use super::{Rect, ScreenId, ZoneId};
use serde::{Deserialize, Serialize};

/// Outcome of a finished drag. The window manager applies it.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct SnapResult {
    pub should_apply: bool,
    pub geometry: Rect,
    pub zone_ids: Vec<ZoneId>,
    pub release_screen_id: Option<ScreenId>,
    /// Apply only the size of `geometry` and keep the window where it was dropped.
    pub restore_size_only: bool,
    pub snap_assist_requested: bool,
    /// JSON list of [`EmptyZone`]s left to fill after this snap.
    pub empty_zones_json: String,
}

impl SnapResult {
    /// Nothing to apply.
    #[must_use]
    pub fn none(release_screen_id: Option<ScreenId>) -> Self {
        Self {
            release_screen_id,
            ..Self::default()
        }
    }
}

/// A zone left without a window, offered to snap assist.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EmptyZone {
    pub zone_id: ZoneId,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl EmptyZone {
    #[must_use]
    pub fn new(zone_id: ZoneId, geometry: Rect) -> Self {
        Self {
            zone_id,
            x: geometry.x,
            y: geometry.y,
            width: geometry.w,
            height: geometry.h,
        }
    }
}
