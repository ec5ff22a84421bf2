use super::{Config, DisplayServer, Manager};

impl<C: Config, SERVER: DisplayServer> Manager<C, SERVER> {
    /// Abandon the current drag. Later moves of the window are ignored until it is dragged
    /// again.
    ///
    /// Returns `true` if a drag was in progress.
    pub fn cancel_snap_handler(&mut self) -> bool {
        if !self.state.session.is_live() {
            return false;
        }
        tracing::debug!("Snapping cancelled for {:?}", self.state.session.window);
        self.abandon_session();
        true
    }

    /// Forget a closed window. Its drag, if any, is abandoned.
    pub fn window_closed_handler(&mut self, window: &str) -> bool {
        let owned = self.state.session.owns(window);
        if owned {
            self.abandon_session();
            self.state.session.was_snapped_before_drag = false;
        }
        self.tracker.window_closed(window);
        owned
    }

    fn abandon_session(&mut self) {
        let session = &mut self.state.session;
        session.cancelled = true;
        session.clear_zone_state();
        session.clear_painted();
        self.state.hide_visuals();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display_action::DisplayAction;
    use crate::models::Rect;
    use crate::utils::modmask_lookup::{Button, ModMask};

    #[test]
    fn cancelled_drags_should_ignore_later_moves() {
        let mut manager = Manager::new_test_halves();
        manager.drag_start_handler(
            "W",
            Rect::new(100, 100, 800, 600),
            "app",
            "cls",
            Button::empty(),
        );
        manager.drag_move_handler("W", 1800, 500, ModMask::Alt, Button::empty());
        manager.state.actions.clear();

        assert!(manager.cancel_snap_handler());
        assert!(!manager.state.session.has_selection());
        assert_eq!(
            manager.state.actions.drain(..).collect::<Vec<_>>(),
            vec![DisplayAction::ClearHighlight, DisplayAction::HideOverlay]
        );
        assert!(!manager.drag_move_handler("W", 100, 500, ModMask::Alt, Button::empty()));
        assert!(!manager.state.session.has_selection());

        let result = manager.drag_stop_handler("W", 100, 500).unwrap();
        assert!(!result.should_apply);
        assert!(!manager.cancel_snap_handler());
    }

    #[test]
    fn closing_the_dragged_window_should_end_its_drag() {
        let mut manager = Manager::new_test_halves();
        manager.tracker.window_snapped("W", "left", "DP-1");
        manager.drag_start_handler("W", Rect::new(0, 0, 960, 1080), "app", "cls", Button::empty());
        assert!(manager.window_closed_handler("W"));
        assert!(!manager.state.session.was_snapped_before_drag);
        assert!(!manager.state.session.is_live());
        assert_eq!(manager.tracker().zone_for_window("W"), None);
    }

    #[test]
    fn closing_another_window_should_still_reach_the_tracker() {
        let mut manager = Manager::new_test_halves();
        manager.tracker.window_snapped("V", "left", "DP-1");
        manager.drag_start_handler(
            "W",
            Rect::new(100, 100, 800, 600),
            "app",
            "cls",
            Button::empty(),
        );
        assert!(!manager.window_closed_handler("V"));
        assert!(manager.state.session.is_live());
        assert_eq!(manager.tracker().zone_for_window("V"), None);
    }
}
