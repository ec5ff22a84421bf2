mod drag_modifier;
mod selector_settings;

use crate::utils::geometry::Gaps;
use crate::utils::modmask_lookup::Button;
pub use drag_modifier::DragModifier;
pub use selector_settings::{SelectorLayoutMode, SelectorPosition, SelectorSettings};

/// Settings the snap engine reads. Queried on every event, so changes apply to the next tick.
pub trait Config {
    /// Binding that snaps to the single zone under the cursor.
    fn zone_modifier(&self) -> DragModifier;

    /// Binding that snaps to the zone under the cursor and its neighbours.
    fn multi_zone_modifier(&self) -> DragModifier;

    /// Binding that paints a span across every zone touched.
    fn span_modifier(&self) -> DragModifier;

    /// Mouse button(s) that activate zones without a modifier. Empty disables it.
    fn activation_button(&self) -> Button;

    fn excluded_applications(&self) -> Vec<String>;
    fn excluded_window_classes(&self) -> Vec<String>;
    fn zone_padding(&self) -> i32;
    fn outer_gap(&self) -> i32;
    fn disabled_monitors(&self) -> Vec<String>;
    fn selector(&self) -> SelectorSettings;
    fn restore_size_on_unsnap(&self) -> bool;
    fn snap_assist_enabled(&self) -> bool;

    /// Pixels around the cursor within which neighbouring zones join a multi-zone snap.
    fn adjacency_threshold(&self) -> i32;

    /// Width/height slack when matching a window against zone geometries after a restart.
    fn snap_match_size_tolerance(&self) -> i32;
    /// Position slack for the same match.
    fn snap_match_position_tolerance(&self) -> i32;

    fn gaps(&self) -> Gaps {
        Gaps {
            zone_padding: self.zone_padding(),
            outer_gap: self.outer_gap(),
        }
    }

    fn is_monitor_disabled(&self, screen: &str) -> bool {
        self.disabled_monitors().iter().any(|m| m == screen)
    }

    /// Excluded windows never snap. Rules match case-insensitively anywhere in the name.
    fn is_excluded(&self, app_id: &str, window_class: &str) -> bool {
        let matches = |rules: Vec<String>, value: &str| {
            let value = value.to_lowercase();
            !value.is_empty()
                && rules
                    .iter()
                    .filter(|rule| !rule.is_empty())
                    .any(|rule| value.contains(&rule.to_lowercase()))
        };
        matches(self.excluded_applications(), app_id)
            || matches(self.excluded_window_classes(), window_class)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    #[allow(clippy::module_name_repetitions, clippy::struct_excessive_bools)]
    #[derive(Clone, Debug)]
    pub struct TestConfig {
        pub zone_modifier: DragModifier,
        pub multi_zone_modifier: DragModifier,
        pub span_modifier: DragModifier,
        pub activation_button: Button,
        pub excluded_applications: Vec<String>,
        pub excluded_window_classes: Vec<String>,
        pub gaps: Gaps,
        pub disabled_monitors: Vec<String>,
        pub selector: SelectorSettings,
        pub restore_size_on_unsnap: bool,
        pub snap_assist_enabled: bool,
        pub adjacency_threshold: i32,
    }

    impl Default for TestConfig {
        fn default() -> Self {
            Self {
                zone_modifier: DragModifier::Alt,
                multi_zone_modifier: DragModifier::Ctrl,
                span_modifier: DragModifier::Meta,
                activation_button: Button::empty(),
                excluded_applications: vec![],
                excluded_window_classes: vec![],
                gaps: Gaps::default(),
                disabled_monitors: vec![],
                selector: SelectorSettings {
                    enabled: false,
                    ..SelectorSettings::default()
                },
                restore_size_on_unsnap: true,
                snap_assist_enabled: false,
                adjacency_threshold: 20,
            }
        }
    }

    impl Config for TestConfig {
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
            self.gaps.zone_padding
        }
        fn outer_gap(&self) -> i32 {
            self.gaps.outer_gap
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
            10
        }
        fn snap_match_position_tolerance(&self) -> i32 {
            50
        }
    }

    #[test]
    fn exclusions_should_match_case_insensitively() {
        let config = TestConfig {
            excluded_applications: vec!["Krita".to_owned()],
            excluded_window_classes: vec!["plasmashell".to_owned()],
            ..TestConfig::default()
        };
        assert!(config.is_excluded("org.kde.krita", "krita"));
        assert!(config.is_excluded("something", "Plasmashell"));
        assert!(!config.is_excluded("firefox", "Navigator"));
        assert!(!config.is_excluded("", ""));
    }
}
