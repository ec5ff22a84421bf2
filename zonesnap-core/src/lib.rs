//! Drag-to-zone snapping: decides where a dragged window lands.
// We deny clippy pedantic lints, primarily to keep code as correct as possible
#![warn(clippy::pedantic)]
// Each of these lints are globally allowed because they otherwise make a lot
// of noise.
#![allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::must_use_candidate,
    clippy::default_trait_access,
    clippy::module_name_repetitions
)]
pub mod config;
mod display_action;
pub mod detectors;
mod drag_event;
pub mod display_servers;
pub mod errors;
mod handlers;
pub mod layouts;
pub mod models;
pub mod snap_decision;
pub mod state;
pub mod trackers;
pub mod utils;

pub use config::{Config, DragModifier, SelectorSettings};
pub use detectors::{ProximityDetector, ZoneDetection, ZoneDetector};
pub use display_action::DisplayAction;
pub use display_servers::{DisplayServer, SelectorPick};
pub use drag_event::DragEvent;
pub use layouts::{LayoutManager, LayoutProvider};
pub use models::{Layout, Manager, Rect, Screen, SnapResult, Zone};
pub use snap_decision::{DragSnapshot, SnapDecisionBuilder};
pub use state::State;
pub use trackers::{MemoryTracker, WindowTracker};
pub use utils::modmask_lookup::{Button, ModMask};
