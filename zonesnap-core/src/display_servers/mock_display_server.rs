use super::{DisplayServer, SelectorPick};
use crate::display_action::DisplayAction;

/// Records every action so tests can assert on what the overlay was asked to do.
#[derive(Clone, Debug, Default)]
pub struct MockDisplayServer {
    pub actions: Vec<DisplayAction>,
    pub selected: Option<SelectorPick>,
}

impl MockDisplayServer {
    pub fn take_actions(&mut self) -> Vec<DisplayAction> {
        std::mem::take(&mut self.actions)
    }
}

impl DisplayServer for MockDisplayServer {
    fn execute_action(&mut self, act: DisplayAction) {
        self.actions.push(act);
    }

    fn selected_zone(&self) -> Option<SelectorPick> {
        self.selected.clone()
    }
}
