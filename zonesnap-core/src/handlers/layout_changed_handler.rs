use super::{Config, DisplayAction, DisplayServer, Manager};

impl<C: Config, SERVER: DisplayServer> Manager<C, SERVER> {
    /// Drop zone state computed against the old layout. The drag goes on and the next move
    /// resolves against the new one. Painted zones stay until the span mode is left.
    pub fn layout_changed_handler(&mut self) -> bool {
        let session = &mut self.state.session;
        if !session.is_live() {
            return false;
        }
        tracing::debug!("Layout changed during the drag of {:?}", session.window);
        session.clear_zone_state();
        session.layout_id = None;
        self.state.actions.push_back(DisplayAction::ClearHighlight);
        true
    }
}
