//! Multi-zone proximity detection.
mod proximity_detector;

use crate::models::{Layout, Rect, ZoneId};

pub use proximity_detector::ProximityDetector;

/// What a detector found around the cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ZoneDetection {
    pub is_multi_zone: bool,
    pub primary: Option<ZoneId>,
    /// Zones near the cursor other than the primary one.
    pub adjacent: Vec<ZoneId>,
}

impl ZoneDetection {
    /// Primary first, then adjacent zones, without duplicates.
    #[must_use]
    pub fn zone_ids(&self) -> Vec<ZoneId> {
        let mut ids: Vec<ZoneId> = Vec::with_capacity(self.adjacent.len() + 1);
        for id in self.primary.iter().chain(self.adjacent.iter()) {
            if !ids.contains(id) {
                ids.push(id.clone());
            }
        }
        ids
    }
}

pub trait ZoneDetector {
    /// Called before detection whenever the layout or the screen under the cursor may have
    /// changed. `geometries` are the absolute zone rects on the current screen.
    fn set_layout(&mut self, layout: &Layout, geometries: &[(ZoneId, Rect)]);

    fn detect_multi_zone(&self, x: i32, y: i32, threshold: i32) -> ZoneDetection;
}
