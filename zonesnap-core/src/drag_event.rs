use crate::models::{Rect, Screen, ScreenId, WindowId};
use crate::utils::modmask_lookup::{Button, ModMask};
use serde::{Deserialize, Serialize};

/// Input from the window manager integration.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub enum DragEvent {
    DragStarted {
        window: WindowId,
        geometry: Rect,
        #[serde(default)]
        app_id: String,
        #[serde(default)]
        window_class: String,
        #[serde(default)]
        buttons: Button,
    },
    DragMoved {
        window: WindowId,
        x: i32,
        y: i32,
        #[serde(default)]
        modifiers: ModMask,
        #[serde(default)]
        buttons: Button,
    },
    DragStopped {
        window: WindowId,
        x: i32,
        y: i32,
    },
    CancelSnap,
    WindowClosed(WindowId),
    /// The layout assigned to some screen changed.
    LayoutChanged,
    ScreenCreate(Screen),
    ScreenUpdate(Screen),
    ScreenRemove(ScreenId),
}
