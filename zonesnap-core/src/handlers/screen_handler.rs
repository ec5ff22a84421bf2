use super::{Config, DisplayAction, DisplayServer, Manager, Screen};

impl<C: Config, SERVER: DisplayServer> Manager<C, SERVER> {
    /// Add a screen. A screen with the same id is replaced.
    ///
    /// Returns `true` if the screen is new.
    pub fn screen_create_handler(&mut self, screen: Screen) -> bool {
        tracing::debug!("Screen {} at {:?}", screen.id, screen.geometry);
        match self.state.screens.iter_mut().find(|s| s.id == screen.id) {
            Some(existing) => {
                *existing = screen;
                false
            }
            None => {
                self.state.screens.push(screen);
                true
            }
        }
    }

    /// New geometry or available area for a screen. Unknown screens are added.
    pub fn screen_update_handler(&mut self, screen: Screen) -> bool {
        let id = screen.id.clone();
        let changed = self.state.screen(&id) != Some(&screen);
        self.screen_create_handler(screen);
        if changed && self.state.session.screen_id.as_deref() == Some(id.as_str()) {
            // Geometry cached for this screen is stale.
            self.state.session.clear_zone_state();
            self.state.session.layout_id = None;
        }
        changed
    }

    pub fn screen_remove_handler(&mut self, id: &str) -> bool {
        let before = self.state.screens.len();
        self.state.screens.retain(|s| s.id != id);
        if self.state.screens.len() == before {
            return false;
        }
        tracing::debug!("Screen {} removed", id);
        let session = &mut self.state.session;
        if session.screen_id.as_deref() == Some(id) {
            session.clear_zone_state();
            session.screen_id = None;
            session.layout_id = None;
            self.state.hide_visuals();
        }
        true
    }
}
