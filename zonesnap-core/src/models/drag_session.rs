//! Per-drag state.
#![allow(clippy::module_name_repetitions)]
use super::{DragMode, LayoutId, Rect, ScreenId, ZoneId};

/// Everything known about the window currently being dragged.
///
/// Lives from `drag_started` until `drag_stopped`, `cancel_snap` or `window_closed`. Only the
/// drag handlers mutate it, and events for any other window are ignored.
// The flags mirror independent overlay/selector states; an enum would not make this clearer.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DragSession {
    pub window: Option<String>,
    pub original_geometry: Rect,
    pub mode: DragMode,
    pub primary_zone: Option<ZoneId>,
    /// Current target zones, primary first, without duplicates.
    pub zone_ids: Vec<ZoneId>,
    /// Zones touched in span mode, in paint order. Only grows until the mode is left.
    pub painted_zones: Vec<ZoneId>,
    pub zone_geometry: Option<Rect>,
    pub combined_geometry: Option<Rect>,
    pub was_snapped_before_drag: bool,
    pub cancelled: bool,
    pub cursor: (i32, i32),
    /// Screen and layout the cached zone state was computed against.
    pub screen_id: Option<ScreenId>,
    pub layout_id: Option<LayoutId>,
    pub overlay_shown: bool,
    pub selector_shown: bool,
    /// Set once the activation mouse button is seen; stays set for the rest of the drag.
    pub button_latched: bool,
    pub warned_modifier_conflict: bool,
}

impl DragSession {
    #[must_use]
    pub fn owns(&self, window: &str) -> bool {
        self.window.as_deref() == Some(window)
    }

    #[must_use]
    pub fn is_live(&self) -> bool {
        self.window.is_some() && !self.cancelled
    }

    /// Geometry a release would snap to: the union in multi/span mode, else the single zone.
    #[must_use]
    pub fn target_geometry(&self) -> Option<Rect> {
        self.combined_geometry.or(self.zone_geometry)
    }

    #[must_use]
    pub fn has_selection(&self) -> bool {
        self.primary_zone.is_some() || !self.zone_ids.is_empty()
    }

    pub fn clear_zone_state(&mut self) {
        self.primary_zone = None;
        self.zone_ids.clear();
        self.zone_geometry = None;
        self.combined_geometry = None;
    }

    pub fn clear_painted(&mut self) {
        self.painted_zones.clear();
    }

    /// Record a painted zone. Returns false when it was already painted.
    pub fn paint(&mut self, zone: &str) -> bool {
        if self.painted_zones.iter().any(|z| z == zone) {
            return false;
        }
        self.painted_zones.push(zone.to_owned());
        true
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paint_should_ignore_zones_already_painted() {
        let mut session = DragSession::default();
        assert!(session.paint("left"));
        assert!(session.paint("right"));
        assert!(!session.paint("left"));
        assert_eq!(session.painted_zones, vec!["left", "right"]);
    }

    #[test]
    fn target_geometry_should_prefer_the_combined_geometry() {
        let session = DragSession {
            zone_geometry: Some(Rect::new(0, 0, 10, 10)),
            combined_geometry: Some(Rect::new(0, 0, 20, 10)),
            ..DragSession::default()
        };
        assert_eq!(session.target_geometry(), Some(Rect::new(0, 0, 20, 10)));
    }

    #[test]
    fn a_cancelled_session_is_not_live() {
        let session = DragSession {
            window: Some("w".to_owned()),
            cancelled: true,
            ..DragSession::default()
        };
        assert!(session.owns("w"));
        assert!(!session.is_live());
    }
}
