//! Objects (zones, layouts, drag sessions) used by the snap engine.
mod drag_session;
mod layout;
mod manager;
mod mode;
mod rect;
mod screen;
mod snap_result;
mod zone;

pub use drag_session::DragSession;
pub use layout::{Layout, LayoutId};
pub use manager::Manager;
pub use mode::DragMode;
pub use rect::Rect;
pub use screen::{Screen, ScreenId};
pub use snap_result::{EmptyZone, SnapResult};
pub use zone::{NORM_EPSILON, NormRect, Zone, ZoneId};

pub type WindowId = String;

#[cfg(test)]
pub(crate) use manager::tests as fixtures;
