use super::WindowTracker;
use crate::models::{Rect, WindowId, ZoneId};
use std::collections::{HashMap, HashSet};

/// In-process [`WindowTracker`] for hosts that do not keep their own bookkeeping.
#[derive(Debug, Clone, Default)]
pub struct MemoryTracker {
    zones: HashMap<WindowId, Vec<ZoneId>>,
    floating: HashSet<WindowId>,
    snap_intents: HashMap<WindowId, bool>,
    pre_snap: HashMap<WindowId, Rect>,
}

impl MemoryTracker {
    #[must_use]
    pub fn is_floating(&self, window: &str) -> bool {
        self.floating.contains(window)
    }

    #[must_use]
    pub fn snap_intent(&self, window: &str) -> Option<bool> {
        self.snap_intents.get(window).copied()
    }
}

impl WindowTracker for MemoryTracker {
    fn zone_for_window(&self, window: &str) -> Option<ZoneId> {
        self.zones.get(window).and_then(|zones| zones.first().cloned())
    }

    fn window_snapped(&mut self, window: &str, zone: &str, screen: &str) {
        self.window_snapped_multi_zone(window, &[zone.to_owned()], screen);
    }

    fn window_snapped_multi_zone(&mut self, window: &str, zones: &[ZoneId], screen: &str) {
        if zones.is_empty() {
            return;
        }
        tracing::debug!("{} snapped to {:?} on {}", window, zones, screen);
        self.zones.insert(window.to_owned(), zones.to_vec());
    }

    fn window_unsnapped_for_float(&mut self, window: &str) {
        self.zones.remove(window);
    }

    fn set_window_floating(&mut self, window: &str, floating: bool) {
        if floating {
            self.floating.insert(window.to_owned());
        } else {
            self.floating.remove(window);
        }
    }

    fn record_snap_intent(&mut self, window: &str, user_initiated: bool) {
        self.snap_intents.insert(window.to_owned(), user_initiated);
    }

    fn store_pre_snap_geometry(&mut self, window: &str, geometry: Rect) {
        self.pre_snap.entry(window.to_owned()).or_insert(geometry);
    }

    fn validated_pre_snap_geometry(&self, window: &str) -> Option<Rect> {
        self.pre_snap.get(window).copied().filter(|g| !g.is_empty())
    }

    fn clear_pre_snap_geometry(&mut self, window: &str) {
        self.pre_snap.remove(window);
    }

    fn windows_in_zone(&self, zone: &str) -> Vec<WindowId> {
        let mut windows: Vec<WindowId> = self
            .zones
            .iter()
            .filter(|(_, zones)| zones.iter().any(|z| z == zone))
            .map(|(window, _)| window.clone())
            .collect();
        windows.sort();
        windows
    }

    fn window_closed(&mut self, window: &str) {
        self.zones.remove(window);
        self.floating.remove(window);
        self.snap_intents.remove(window);
        self.pre_snap.remove(window);
    }
}
