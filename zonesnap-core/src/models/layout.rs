use super::{Rect, Zone, ZoneId};
use crate::errors::{Result, ZoneSnapError};
use crate::utils::geometry::{self, Gaps};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub type LayoutId = String;

/// An ordered set of zones. Zone order decides which zone wins when zones overlap.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Layout {
    pub id: LayoutId,
    #[serde(default)]
    pub name: String,
    pub zones: Vec<Zone>,
}

impl Layout {
    #[must_use]
    pub fn new(id: impl Into<LayoutId>, zones: Vec<Zone>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            zones,
        }
    }

    #[must_use]
    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    #[must_use]
    pub fn zone(&self, id: &str) -> Option<&Zone> {
        self.zones.iter().find(|z| z.id == id)
    }

    /// First zone, in layout order, containing the normalized point.
    #[must_use]
    pub fn zone_at(&self, x: f64, y: f64) -> Option<&Zone> {
        self.zones.iter().find(|z| z.geometry.contains(x, y))
    }

    /// Absolute geometry of every zone on the given available area, in layout order.
    #[must_use]
    pub fn zone_geometries(&self, available: &Rect, gaps: Gaps) -> Vec<(ZoneId, Rect)> {
        self.zones
            .iter()
            .map(|z| (z.id.clone(), geometry::zone_geometry(&z.geometry, available, gaps)))
            .collect()
    }

    /// # Errors
    ///
    /// Errors when the layout has no id, a zone lies outside the unit square, or two zones share
    /// an id.
    pub fn validate(&self) -> Result<()> {
        let invalid = |reason: String| ZoneSnapError::InvalidLayout {
            layout: self.id.clone(),
            reason,
        };
        if self.id.is_empty() {
            return Err(invalid("layout id is empty".to_owned()));
        }
        let mut seen = HashSet::new();
        for zone in &self.zones {
            if zone.id.is_empty() {
                return Err(invalid(format!("zone #{} has an empty id", zone.number)));
            }
            if !zone.geometry.is_valid() {
                return Err(invalid(format!(
                    "zone {} has geometry {:?} outside the unit square",
                    zone.id, zone.geometry
                )));
            }
            if !seen.insert(zone.id.as_str()) {
                return Err(invalid(format!("zone id {} is used twice", zone.id)));
            }
        }
        Ok(())
    }
}
