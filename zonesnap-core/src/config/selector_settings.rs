use serde::{Deserialize, Serialize};

/// Screen edge or corner the zone selector is attached to.
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SelectorPosition {
    TopLeft,
    #[default]
    Top,
    TopRight,
    Left,
    Right,
    BottomLeft,
    Bottom,
    BottomRight,
}

/// How layout previews are arranged inside the selector.
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SelectorLayoutMode {
    #[default]
    Grid,
    Horizontal,
    Vertical,
}

/// Zone selector configuration.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct SelectorSettings {
    pub enabled: bool,
    pub position: SelectorPosition,
    pub layout_mode: SelectorLayoutMode,
    pub grid_columns: usize,
    /// How close to the edge the cursor must come before the selector shows.
    pub trigger_distance: i32,
    pub preview_width: i32,
    pub preview_height: i32,
    /// Derive the preview width from its height and the screen's aspect ratio.
    pub preview_lock_aspect: bool,
}

impl Default for SelectorSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            position: SelectorPosition::Top,
            layout_mode: SelectorLayoutMode::Grid,
            grid_columns: 5,
            trigger_distance: 50,
            preview_width: 180,
            preview_height: 101,
            preview_lock_aspect: true,
        }
    }
}
