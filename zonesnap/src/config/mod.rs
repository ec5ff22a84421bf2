//! `zonesnap` general configuration

mod checks;
mod default;

use crate::utils::file_handler::load_config_file;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::default::Default;
use zonesnap_core::{Button, DragModifier, Layout, LayoutManager, SelectorSettings};

/// Pins a layout to one output.
///
/// # Example
///
/// In `config.ron`
///
/// ```ron
/// screen_layouts: [(screen: "DP-1", layout: "quarters")],
/// ```
#[derive(Serialize, Deserialize, Default, Debug, Clone, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Output name, e.g. `DP-1`.
    pub screen: String,
    pub layout: String,
}

/// General configuration
#[allow(clippy::struct_excessive_bools)]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub log_level: String,
    pub layouts: Vec<Layout>,
    /// Layout for screens without an entry in `screen_layouts`. The first layout when unset.
    pub default_layout: Option<String>,
    pub screen_layouts: Vec<ScreenLayout>,
    pub zone_modifier: DragModifier,
    pub multi_zone_modifier: DragModifier,
    pub span_modifier: DragModifier,
    pub activation_button: Button,
    pub excluded_applications: Vec<String>,
    pub excluded_window_classes: Vec<String>,
    pub zone_padding: i32,
    pub outer_gap: i32,
    pub disabled_monitors: Vec<String>,
    pub selector: SelectorSettings,
    pub restore_size_on_unsnap: bool,
    pub snap_assist_enabled: bool,
    pub adjacency_threshold: i32,
    pub snap_match_size_tolerance: i32,
    pub snap_match_position_tolerance: i32,
}

#[must_use]
pub fn load() -> Config {
    load_config_file()
        .map_err(|err| eprintln!("ERROR LOADING CONFIG: {err:?}"))
        .unwrap_or_default()
}

impl Config {
    /// Layouts with their screen assignments applied.
    ///
    /// # Errors
    ///
    /// Errors when a layout is invalid. Assignments naming an unknown layout are skipped with a
    /// warning.
    pub fn layout_manager(&self) -> Result<LayoutManager> {
        let mut manager = LayoutManager::new(self.layouts.clone())?;
        if let Some(default) = &self.default_layout {
            manager.set_default(default);
        }
        for assignment in &self.screen_layouts {
            manager.assign(assignment.screen.as_str(), &assignment.layout);
        }
        Ok(manager)
    }
}

impl zonesnap_core::Config for Config {
    fn zone_modifier(&self) -> DragModifier {
        self.zone_modifier
    }

    fn multi_zone_modifier(&self) -> DragModifier {
        self.multi_zone_modifier
    }

    fn span_modifier(&self) -> DragModifier {
        self.span_modifier
    }

    fn activation_button(&self) -> Button {
        self.activation_button
    }

    fn excluded_applications(&self) -> Vec<String> {
        self.excluded_applications.clone()
    }

    fn excluded_window_classes(&self) -> Vec<String> {
        self.excluded_window_classes.clone()
    }

    fn zone_padding(&self) -> i32 {
        self.zone_padding.max(0)
    }

    fn outer_gap(&self) -> i32 {
        self.outer_gap.max(0)
    }

    fn disabled_monitors(&self) -> Vec<String> {
        self.disabled_monitors.clone()
    }

    fn selector(&self) -> SelectorSettings {
        self.selector
    }

    fn restore_size_on_unsnap(&self) -> bool {
        self.restore_size_on_unsnap
    }

    fn snap_assist_enabled(&self) -> bool {
        self.snap_assist_enabled
    }

    fn adjacency_threshold(&self) -> i32 {
        self.adjacency_threshold
    }

    fn snap_match_size_tolerance(&self) -> i32 {
        self.snap_match_size_tolerance
    }

    fn snap_match_position_tolerance(&self) -> i32 {
        self.snap_match_position_tolerance
    }
}
