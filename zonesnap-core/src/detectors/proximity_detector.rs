use super::{ZoneDetection, ZoneDetector};
use crate::models::{Layout, Rect, ZoneId};

/// Picks the zone under the cursor and every zone whose edge is within the threshold.
#[derive(Debug, Clone, Default)]
pub struct ProximityDetector {
    zones: Vec<(ZoneId, Rect)>,
}

impl ZoneDetector for ProximityDetector {
    fn set_layout(&mut self, _layout: &Layout, geometries: &[(ZoneId, Rect)]) {
        self.zones = geometries.to_vec();
    }

    fn detect_multi_zone(&self, x: i32, y: i32, threshold: i32) -> ZoneDetection {
        let Some((primary, _)) = self.zones.iter().find(|(_, r)| r.contains_point(x, y)) else {
            return ZoneDetection::default();
        };
        let adjacent: Vec<ZoneId> = self
            .zones
            .iter()
            .filter(|(id, rect)| id != primary && rect.distance_to_point(x, y) <= threshold)
            .map(|(id, _)| id.clone())
            .collect();
        ZoneDetection {
            is_multi_zone: !adjacent.is_empty(),
            primary: Some(primary.clone()),
            adjacent,
        }
    }
}
