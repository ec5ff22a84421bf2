use super::{Config, DisplayServer, DragEvent, Manager, SnapResult};

impl<C: Config, SERVER: DisplayServer> Manager<C, SERVER> {
    /// Process a single event and flush the overlay actions it queued.
    ///
    /// Returns the decision when the event finished a drag.
    pub fn drag_event_handler(&mut self, event: DragEvent) -> Option<SnapResult> {
        let result = match event {
            DragEvent::DragStarted {
                window,
                geometry,
                app_id,
                window_class,
                buttons,
            } => {
                self.drag_start_handler(&window, geometry, &app_id, &window_class, buttons);
                None
            }
            DragEvent::DragMoved {
                window,
                x,
                y,
                modifiers,
                buttons,
            } => {
                self.drag_move_handler(&window, x, y, modifiers, buttons);
                None
            }
            DragEvent::DragStopped { window, x, y } => self.drag_stop_handler(&window, x, y),
            DragEvent::CancelSnap => {
                self.cancel_snap_handler();
                None
            }
            DragEvent::WindowClosed(window) => {
                self.window_closed_handler(&window);
                None
            }
            DragEvent::LayoutChanged => {
                self.layout_changed_handler();
                None
            }
            DragEvent::ScreenCreate(screen) => {
                self.screen_create_handler(screen);
                None
            }
            DragEvent::ScreenUpdate(screen) => {
                self.screen_update_handler(screen);
                None
            }
            DragEvent::ScreenRemove(id) => {
                self.screen_remove_handler(&id);
                None
            }
        };
        self.flush_actions();
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display_action::DisplayAction;
    use crate::models::Rect;
    use crate::utils::modmask_lookup::{Button, ModMask};

    #[test]
    fn drag_to_the_right_half_should_snap_there() {
        let mut manager = Manager::new_test_halves();
        manager.drag_event_handler(DragEvent::DragStarted {
            window: "W".to_owned(),
            geometry: Rect::new(100, 100, 800, 600),
            app_id: "app".to_owned(),
            window_class: "cls".to_owned(),
            buttons: Button::empty(),
        });
        manager.drag_event_handler(DragEvent::DragMoved {
            window: "W".to_owned(),
            x: 1800,
            y: 500,
            modifiers: ModMask::Alt,
            buttons: Button::empty(),
        });
        let result = manager
            .drag_event_handler(DragEvent::DragStopped {
                window: "W".to_owned(),
                x: 1800,
                y: 500,
            })
            .unwrap();
        assert!(result.should_apply);
        assert_eq!(result.geometry, Rect::new(960, 0, 960, 1080));
        assert_eq!(result.zone_ids, vec!["right"]);
        assert_eq!(
            manager.display_server.actions,
            vec![
                DisplayAction::ShowOverlay("DP-1".to_owned()),
                DisplayAction::HighlightZones(vec!["right".to_owned()]),
                DisplayAction::ClearHighlight,
                DisplayAction::HideOverlay,
            ]
        );
        assert!(manager.state.actions.is_empty());
        assert_eq!(manager.state.session, Default::default());
    }

    #[test]
    fn screen_events_should_maintain_the_screen_list() {
        let mut manager = Manager::new_test_halves();
        let second = crate::models::Screen::new("HDMI-1", Rect::new(1920, 0, 1280, 1024));
        manager.drag_event_handler(DragEvent::ScreenCreate(second));
        assert_eq!(manager.state.screens.len(), 2);
        manager.drag_event_handler(DragEvent::ScreenRemove("DP-1".to_owned()));
        assert_eq!(manager.state.screens.len(), 1);
        assert_eq!(manager.state.screens[0].id, "HDMI-1");
    }
}
