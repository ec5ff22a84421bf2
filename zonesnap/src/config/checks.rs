use super::Config;
use std::collections::{HashMap, HashSet};
use tracing_subscriber::EnvFilter;
use zonesnap_core::DragModifier;
use zonesnap_core::utils::modifier_resolver::Bindings;

impl Config {
    pub fn check_log_level(&self, verbose: bool) -> bool {
        if verbose {
            println!("Trying to parse log_level.");
        }
        match EnvFilter::builder().parse(&self.log_level) {
            Ok(_) if verbose => {
                println!("Log level is ok.");
                true
            }
            Ok(_) => true,
            Err(err) => {
                println!("Log level is invalid: {err}");
                false
            }
        }
    }

    /// Check that every layout is valid and that every layout reference points at one.
    pub fn check_layouts(&self, verbose: bool) -> bool {
        let mut returns = Vec::new();
        println!("\x1b[0;94m::\x1b[0m Checking layouts . . .");
        if self.layouts.is_empty() {
            returns.push("No layouts are defined, zones will never show.".to_owned());
        }
        let mut ids = HashSet::new();
        let mut zone_owners = HashMap::new();
        for layout in &self.layouts {
            if verbose {
                println!("Layout: {} with {} zone(s)", layout.id, layout.zones.len());
            }
            if let Err(err) = layout.validate() {
                returns.push(err.to_string());
            }
            if !ids.insert(layout.id.as_str()) {
                returns.push(format!("Layout id {} is used twice.", layout.id));
            }
            for zone in &layout.zones {
                match zone_owners.insert(zone.id.as_str(), layout.id.as_str()) {
                    Some(owner) if owner != layout.id => returns.push(format!(
                        "Zone id {} is used by layouts {owner} and {}.",
                        zone.id, layout.id
                    )),
                    _ => {}
                }
            }
        }
        if let Some(default) = &self.default_layout {
            if !ids.contains(default.as_str()) {
                returns.push(format!("default_layout {default} is not a defined layout."));
            }
        }
        let mut screens = HashSet::new();
        for assignment in &self.screen_layouts {
            if !ids.contains(assignment.layout.as_str()) {
                returns.push(format!(
                    "Screen {} uses {}, which is not a defined layout.",
                    assignment.screen, assignment.layout
                ));
            }
            if !screens.insert(assignment.screen.as_str()) {
                returns.push(format!(
                    "Screen {} has more than one layout assigned.",
                    assignment.screen
                ));
            }
        }
        report(&returns, "Layouts")
    }

    /// Check the modifier bindings for combinations that make a drag mode unreachable.
    pub fn check_bindings(&self, verbose: bool) -> bool {
        let mut returns = Vec::new();
        println!("\x1b[0;94m::\x1b[0m Checking bindings . . .");
        let bindings = Bindings::from_config(self);
        if verbose {
            println!("Bindings: {bindings:?}");
        }
        if let Some(mode) = bindings.shadowed_mode() {
            returns.push(format!(
                "span_modifier {:?} is also bound to {mode:?} mode, which is unreachable.",
                self.span_modifier
            ));
        }
        if self.zone_modifier == DragModifier::AlwaysActive
            || self.span_modifier == DragModifier::AlwaysActive
        {
            returns.push("AlwaysActive only works for multi_zone_modifier.".to_owned());
        }
        if self.zone_modifier == DragModifier::Disabled && self.activation_button.is_empty() {
            returns.push(
                "zone_modifier is Disabled without an activation_button, only span mode works."
                    .to_owned(),
            );
        }
        report(&returns, "Bindings")
    }

    pub fn check_selector(&self, verbose: bool) -> bool {
        let mut returns = Vec::new();
        let selector = &self.selector;
        if verbose {
            println!("Selector: {selector:?}");
        }
        if !selector.enabled {
            return true;
        }
        if selector.grid_columns == 0 {
            returns.push("selector.grid_columns must be at least 1.".to_owned());
        }
        if selector.trigger_distance < 0 {
            returns.push("selector.trigger_distance must not be negative.".to_owned());
        }
        if selector.preview_height <= 0
            || (!selector.preview_lock_aspect && selector.preview_width <= 0)
        {
            returns.push("selector preview sizes must be positive.".to_owned());
        }
        report(&returns, "Selector")
    }
}

fn report(returns: &[String], what: &str) -> bool {
    if returns.is_empty() {
        println!("\x1b[0;92m    -> {what} OK \x1b[0m");
        true
    } else {
        for error in returns {
            println!("\x1b[1;91mERROR:\x1b[0m\x1b[1m {error} \x1b[0m");
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ScreenLayout;
    use zonesnap_core::models::NormRect;
    use zonesnap_core::{Layout, Zone};

    #[test]
    fn default_config_should_pass_every_check() {
        let config = Config::default();
        assert!(config.check_log_level(false));
        assert!(config.check_layouts(false));
        assert!(config.check_bindings(false));
        assert!(config.check_selector(false));
    }

    #[test]
    fn check_log_level_should_reject_garbage() {
        let config = Config {
            log_level: "zonesnap=loud".to_owned(),
            ..Config::default()
        };
        assert!(!config.check_log_level(false));
    }

    #[test]
    fn check_layouts_should_catch_broken_references() {
        let config = Config {
            default_layout: Some("nope".to_owned()),
            ..Config::default()
        };
        assert!(!config.check_layouts(false));

        let config = Config {
            screen_layouts: vec![ScreenLayout {
                screen: "DP-1".to_owned(),
                layout: "nope".to_owned(),
            }],
            ..Config::default()
        };
        assert!(!config.check_layouts(false));
    }

    #[test]
    fn check_layouts_should_catch_invalid_zones() {
        let mut config = Config::default();
        config.layouts.push(Layout::new(
            "broken",
            vec![Zone::new("wide", 1, NormRect::new(0.5, 0.0, 0.8, 1.0))],
        ));
        assert!(!config.check_layouts(false));

        let mut config = Config::default();
        let duplicate = config.layouts[0].clone();
        config.layouts.push(duplicate);
        assert!(!config.check_layouts(false));
    }

    #[test]
    fn check_layouts_should_catch_zone_ids_shared_between_layouts() {
        let mut config = Config::default();
        let shared = config.layouts[0].zones[0].id.clone();
        config.layouts.push(Layout::new(
            "custom",
            vec![Zone::new(shared, 1, NormRect::new(0.0, 0.0, 1.0, 1.0))],
        ));
        assert!(!config.check_layouts(false));
        assert!(config.layout_manager().is_err());
    }

    #[test]
    fn default_zone_ids_should_be_unique_across_layouts() {
        let config = Config::default();
        let mut ids = HashSet::new();
        for zone in config.layouts.iter().flat_map(|l| &l.zones) {
            assert!(ids.insert(zone.id.as_str()), "{} is used twice", zone.id);
        }
        assert!(ids.contains("halves-left"));
        assert!(ids.contains("thirds-left"));
    }

    #[test]
    fn check_bindings_should_flag_shadowed_modes() {
        let config = Config {
            span_modifier: DragModifier::Alt,
            ..Config::default()
        };
        assert!(!config.check_bindings(false));

        let config = Config {
            span_modifier: DragModifier::Disabled,
            ..Config::default()
        };
        assert!(config.check_bindings(false));
    }

    #[test]
    fn check_selector_should_ignore_a_disabled_selector() {
        let mut config = Config::default();
        config.selector.grid_columns = 0;
        assert!(!config.check_selector(false));
        config.selector.enabled = false;
        assert!(config.check_selector(false));
    }
}
