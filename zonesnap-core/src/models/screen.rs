use super::Rect;
use serde::{Deserialize, Serialize};

pub type ScreenId = String;

/// An output the cursor can be on.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    /// Output name, e.g. `DP-1`. Disabled monitors are matched against it.
    pub id: ScreenId,
    pub geometry: Rect,
    /// Part of `geometry` not covered by panels and docks. Zones are laid out inside it.
    pub available: Rect,
}

impl Screen {
    #[must_use]
    pub fn new(id: impl Into<ScreenId>, geometry: Rect) -> Self {
        Self {
            id: id.into(),
            geometry,
            available: geometry,
        }
    }

    #[must_use]
    pub const fn with_available(mut self, available: Rect) -> Self {
        self.available = available;
        self
    }

    #[must_use]
    pub const fn contains_point(&self, x: i32, y: i32) -> bool {
        self.geometry.contains_point(x, y)
    }

    /// Cursor position relative to the available area, `0..1` on both axes when inside it.
    #[must_use]
    pub fn normalize(&self, x: i32, y: i32) -> (f64, f64) {
        let area = &self.available;
        (
            f64::from(x - area.x) / f64::from(area.w),
            f64::from(y - area.y) / f64::from(area.h),
        )
    }
}
