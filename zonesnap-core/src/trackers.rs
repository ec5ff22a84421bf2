//! Which window sits in which zone.
mod memory_tracker;

use crate::models::{Rect, WindowId, ZoneId};

pub use memory_tracker::MemoryTracker;

/// Bookkeeping of snapped windows, owned by the host.
///
/// Calls for unknown windows are no-ops.
pub trait WindowTracker {
    fn zone_for_window(&self, window: &str) -> Option<ZoneId>;

    fn window_snapped(&mut self, window: &str, zone: &str, screen: &str);

    fn window_snapped_multi_zone(&mut self, window: &str, zones: &[ZoneId], screen: &str);

    fn window_unsnapped_for_float(&mut self, window: &str);

    fn set_window_floating(&mut self, window: &str, floating: bool);

    fn record_snap_intent(&mut self, window: &str, user_initiated: bool);

    /// Keeps the first geometry stored for a window until it is cleared.
    fn store_pre_snap_geometry(&mut self, window: &str, geometry: Rect);

    /// The stored geometry, if it is still usable.
    fn validated_pre_snap_geometry(&self, window: &str) -> Option<Rect>;

    fn clear_pre_snap_geometry(&mut self, window: &str);

    fn windows_in_zone(&self, zone: &str) -> Vec<WindowId>;

    fn window_closed(&mut self, window: &str);
}
