use super::SnapResult;
use crate::config::Config;
use crate::detectors::{ProximityDetector, ZoneDetector};
use crate::display_servers::DisplayServer;
use crate::layouts::LayoutProvider;
use crate::snap_decision::{DragSnapshot, SnapDecisionBuilder};
use crate::state::State;
use crate::trackers::WindowTracker;

/// Owns the engine state and every collaborator the drag handlers talk to.
pub struct Manager<C, SERVER> {
    pub state: State,
    pub config: C,
    pub display_server: SERVER,
    pub(crate) layouts: Box<dyn LayoutProvider>,
    pub(crate) tracker: Box<dyn WindowTracker>,
    /// Multi-zone detection. Without one, multi-zone mode behaves like single-zone mode.
    pub(crate) detector: Option<Box<dyn ZoneDetector>>,
}

impl<C, SERVER> Manager<C, SERVER>
where
    C: Config,
    SERVER: DisplayServer,
{
    pub fn new(
        config: C,
        display_server: SERVER,
        layouts: impl LayoutProvider + 'static,
        tracker: impl WindowTracker + 'static,
    ) -> Self {
        Self {
            state: State::default(),
            config,
            display_server,
            layouts: Box::new(layouts),
            tracker: Box::new(tracker),
            detector: Some(Box::new(ProximityDetector::default())),
        }
    }

    /// Replace the multi-zone detector. `None` turns proximity detection off.
    #[must_use]
    pub fn with_detector(mut self, detector: Option<Box<dyn ZoneDetector>>) -> Self {
        self.detector = detector;
        self
    }

    pub fn tracker(&self) -> &dyn WindowTracker {
        self.tracker.as_ref()
    }

    pub fn layouts(&self) -> &dyn LayoutProvider {
        self.layouts.as_ref()
    }

    /// Decide a captured drag. Reads nothing from the live session, so a drag started after
    /// the capture cannot change the outcome.
    pub fn decide(&mut self, snapshot: DragSnapshot) -> SnapResult {
        SnapDecisionBuilder::new(self.tracker.as_mut()).build(snapshot)
    }

    /// Hand every queued action to the display server, oldest first.
    pub fn flush_actions(&mut self) {
        if self.state.actions.is_empty() {
            return;
        }
        while let Some(act) = self.state.actions.pop_front() {
            tracing::trace!("DisplayAction: {:?}", act);
            self.display_server.execute_action(act);
        }
        self.display_server.flush();
    }
}
