//! Runs a scripted drag through the engine, standing in for the window manager and the overlay.
use crate::Config;
use crate::utils::file_handler::load_from_path;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;
use zonesnap_core::{
    DisplayAction, DisplayServer, DragEvent, Manager, MemoryTracker, Screen, SelectorPick,
    SnapResult,
};

/// A recorded session: the outputs present at the start, then the events in order.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Script {
    pub screens: Vec<Screen>,
    /// What the zone selector reports as picked, if the script exercises it.
    pub selector_pick: Option<SelectorPick>,
    pub events: Vec<DragEvent>,
}

impl Script {
    /// # Errors
    ///
    /// Errors if the file cannot be read or is not a valid RON/JSON script.
    pub fn load(path: &Path) -> Result<Self> {
        load_from_path(path)
    }
}

/// Overlay stand-in. Records every action it is asked to perform.
#[derive(Debug, Default)]
pub struct ReplayDisplayServer {
    pub actions: Vec<DisplayAction>,
    pub selector_pick: Option<SelectorPick>,
    pub echo: bool,
}

impl DisplayServer for ReplayDisplayServer {
    fn execute_action(&mut self, act: DisplayAction) {
        tracing::debug!("Overlay: {:?}", act);
        if self.echo {
            println!("\x1b[0;90m  overlay: {act:?}\x1b[0m");
        }
        self.actions.push(act);
    }

    fn selected_zone(&self) -> Option<SelectorPick> {
        self.selector_pick.clone()
    }
}

/// A result produced by the script, tagged with the index of the event that produced it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ReplayStep {
    pub event: usize,
    pub result: SnapResult,
}

pub struct Replay {
    manager: Manager<Config, ReplayDisplayServer>,
}

impl Replay {
    /// # Errors
    ///
    /// Errors when a configured layout is invalid.
    pub fn new(config: Config, echo: bool) -> Result<Self> {
        let layouts = config.layout_manager()?;
        let display_server = ReplayDisplayServer {
            echo,
            ..ReplayDisplayServer::default()
        };
        let manager = Manager::new(config, display_server, layouts, MemoryTracker::default());
        Ok(Self { manager })
    }

    /// Feed every event of `script`, calling `on_result` for each finished drag.
    pub fn run(
        &mut self,
        script: Script,
        mut on_result: impl FnMut(&ReplayStep),
    ) -> Vec<ReplayStep> {
        self.manager.display_server.selector_pick = script.selector_pick;
        for screen in script.screens {
            self.manager.drag_event_handler(DragEvent::ScreenCreate(screen));
        }

        let mut steps = Vec::new();
        for (event, drag_event) in script.events.into_iter().enumerate() {
            tracing::trace!("Replaying event {}: {:?}", event, drag_event);
            if let Some(result) = self.manager.drag_event_handler(drag_event) {
                let step = ReplayStep { event, result };
                on_result(&step);
                steps.push(step);
            }
        }
        steps
    }

    pub fn actions(&self) -> &[DisplayAction] {
        &self.manager.display_server.actions
    }
}
