use super::{Config, DisplayServer, Manager, Rect};
use crate::models::DragSession;
use crate::utils::modifier_resolver::Bindings;
use crate::utils::modmask_lookup::Button;

impl<C: Config, SERVER: DisplayServer> Manager<C, SERVER> {
    /// Start tracking a drag. A drag already in progress for another window is dropped.
    ///
    /// Returns `true` if the window can snap. Excluded windows leave a cancelled session that
    /// no window owns, so their moves and release do nothing.
    pub fn drag_start_handler(
        &mut self,
        window: &str,
        geometry: Rect,
        app_id: &str,
        window_class: &str,
        buttons: Button,
    ) -> bool {
        if window.is_empty() {
            tracing::warn!("Ignoring drag start without a window id");
            return false;
        }
        self.state.hide_visuals();
        self.state.session.reset();

        if self.config.is_excluded(app_id, window_class) {
            tracing::debug!(
                "{} ({}, {}) is excluded from snapping",
                window,
                app_id,
                window_class
            );
            self.state.session.cancelled = true;
            return false;
        }

        let bindings = Bindings::from_config(&self.config);
        let was_snapped_before_drag = self.was_snapped(window, &geometry);
        tracing::debug!(
            "Drag started for {} at {:?}, snapped before: {}",
            window,
            geometry,
            was_snapped_before_drag
        );
        self.state.session = DragSession {
            window: Some(window.to_owned()),
            original_geometry: geometry,
            was_snapped_before_drag,
            cursor: geometry.center(),
            button_latched: bindings.button_activates(buttons),
            ..DragSession::default()
        };
        true
    }

    /// Whether the window sits in a zone. Asks the tracker first, then compares the geometry
    /// with the zones of the screen it is on, for windows snapped before a restart.
    fn was_snapped(&self, window: &str, geometry: &Rect) -> bool {
        if self.tracker.zone_for_window(window).is_some() {
            return true;
        }
        let (x, y) = geometry.center();
        let Some(screen) = self.state.screen_at(x, y) else {
            return false;
        };
        if screen.available.is_empty() {
            return false;
        }
        let Some(layout) = self.layouts.layout_for_screen(&screen.id) else {
            return false;
        };
        let size_tolerance = self.config.snap_match_size_tolerance();
        let position_tolerance = self.config.snap_match_position_tolerance();
        layout
            .zone_geometries(&screen.available, self.config.gaps())
            .iter()
            .any(|(_, zone)| zone.roughly_matches(geometry, size_tolerance, position_tolerance))
    }
}
