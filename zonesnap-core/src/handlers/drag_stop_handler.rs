use super::{Config, DisplayServer, Manager, SnapResult};
use crate::snap_decision::DragSnapshot;

impl<C: Config, SERVER: DisplayServer> Manager<C, SERVER> {
    /// Finish the drag of `window`, released at (`x`, `y`).
    ///
    /// Returns `None` if `window` does not own the session. The session is idle afterwards.
    pub fn drag_stop_handler(&mut self, window: &str, x: i32, y: i32) -> Option<SnapResult> {
        if !self.state.session.owns(window) {
            tracing::debug!("Ignoring release of {}, it is not being dragged", window);
            return None;
        }
        if self.state.session.cancelled {
            let release_screen_id = self.state.screen_at(x, y).map(|s| s.id.clone());
            self.state.hide_visuals();
            self.state.session.reset();
            return Some(SnapResult::none(release_screen_id));
        }

        let snapshot = self.capture_snapshot(x, y);
        self.state.hide_visuals();
        self.state.session.reset();
        Some(self.decide(snapshot))
    }

    /// Copy everything the decision needs out of the live session.
    pub fn capture_snapshot(&self, x: i32, y: i32) -> DragSnapshot {
        let session = &self.state.session;
        let release_screen = self.state.screen_at(x, y).cloned();
        let release_screen_disabled = release_screen
            .as_ref()
            .is_some_and(|s| self.config.is_monitor_disabled(&s.id));
        let selector_pick = if session.selector_shown {
            self.display_server.selected_zone()
        } else {
            None
        };
        let selector_layout = selector_pick
            .as_ref()
            .and_then(|pick| self.layouts.layout(&pick.layout_id));
        let layout = session
            .layout_id
            .as_ref()
            .and_then(|id| self.layouts.layout(id));

        DragSnapshot {
            window: session.window.clone().unwrap_or_default(),
            release_screen,
            release_screen_disabled,
            zone_ids: session.zone_ids.clone(),
            zone_geometry: session.target_geometry(),
            layout,
            original_geometry: session.original_geometry,
            was_snapped_before_drag: session.was_snapped_before_drag,
            selector_pick,
            selector_layout,
            cursor: (x, y),
            restore_size_on_unsnap: self.config.restore_size_on_unsnap(),
            snap_assist_enabled: self.config.snap_assist_enabled(),
            gaps: self.config.gaps(),
        }
    }
}
