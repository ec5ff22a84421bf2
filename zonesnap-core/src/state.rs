//! Engine state shared by the drag handlers.
use crate::display_action::DisplayAction;
use crate::models::{DragSession, Screen};
use std::collections::VecDeque;

#[derive(Debug, Default)]
pub struct State {
    pub screens: Vec<Screen>,
    /// The drag in progress, if any. Reset to default when idle.
    pub session: DragSession,
    /// Overlay requests waiting to be flushed to the display server.
    pub actions: VecDeque<DisplayAction>,
}

impl State {
    /// Screen containing the point. The first one wins if screens overlap.
    #[must_use]
    pub fn screen_at(&self, x: i32, y: i32) -> Option<&Screen> {
        self.screens.iter().find(|s| s.contains_point(x, y))
    }

    #[must_use]
    pub fn screen(&self, id: &str) -> Option<&Screen> {
        self.screens.iter().find(|s| s.id == id)
    }

    pub(crate) fn hide_visuals(&mut self) {
        if self.session.overlay_shown {
            self.actions.push_back(DisplayAction::ClearHighlight);
            self.actions.push_back(DisplayAction::HideOverlay);
            self.session.overlay_shown = false;
        }
        if self.session.selector_shown {
            self.actions.push_back(DisplayAction::HideZoneSelector);
            self.session.selector_shown = false;
        }
    }
}
