use super::zone_resolver::{self, ZoneContext};
use super::{Config, DisplayAction, DisplayServer, DragMode, Manager, Screen};
use crate::utils::edge_trigger;
use crate::utils::modifier_resolver::{self, Bindings, ModifierInput};
use crate::utils::modmask_lookup::{Button, ModMask};

impl<C: Config, SERVER: DisplayServer> Manager<C, SERVER> {
    /// Re-resolve the drag mode and the target zones for a cursor move.
    ///
    /// Returns `true` if the selection or the selector changed.
    pub fn drag_move_handler(
        &mut self,
        window: &str,
        x: i32,
        y: i32,
        modifiers: ModMask,
        buttons: Button,
    ) -> bool {
        let session = &self.state.session;
        if !session.owns(window) || session.cancelled {
            return false;
        }
        let bindings = Bindings::from_config(&self.config);
        self.note_input(&bindings, x, y, buttons);

        let Some(screen) = self.state.screen_at(x, y).cloned() else {
            tracing::debug!("No screen under ({}, {}), skipping move", x, y);
            return false;
        };
        if screen.available.is_empty() {
            tracing::debug!("Screen {} has no usable area, skipping move", screen.id);
            return false;
        }

        let input = ModifierInput {
            modifiers,
            button_latched: self.state.session.button_latched,
            overlay_shown: self.state.session.overlay_shown,
        };
        let mode = modifier_resolver::resolve(&bindings, &input);
        self.switch_mode(mode);

        if mode == DragMode::None {
            return self.idle_move(&screen, x, y);
        }
        if self.state.session.selector_shown {
            self.state.actions.push_back(DisplayAction::HideZoneSelector);
            self.state.session.selector_shown = false;
        }
        self.zone_move(&screen, mode, x, y)
    }

    fn note_input(&mut self, bindings: &Bindings, x: i32, y: i32, buttons: Button) {
        let session = &mut self.state.session;
        session.cursor = (x, y);
        if bindings.button_activates(buttons) {
            session.button_latched = true;
        }
        if !session.warned_modifier_conflict {
            if let Some(shadowed) = bindings.shadowed_mode() {
                tracing::warn!(
                    "The span modifier {:?} is also bound to {:?} mode, which can not be reached",
                    bindings.span,
                    shadowed
                );
                session.warned_modifier_conflict = true;
            }
        }
    }

    fn switch_mode(&mut self, mode: DragMode) {
        let session = &mut self.state.session;
        if session.mode == mode {
            return;
        }
        tracing::debug!("Drag mode {:?} -> {:?}", session.mode, mode);
        if session.mode == DragMode::Span {
            session.clear_painted();
        }
        if session.has_selection() {
            session.clear_zone_state();
            self.state.actions.push_back(DisplayAction::ClearHighlight);
        }
        self.state.session.mode = mode;
    }

    /// No zone modifier held: zones go away and the selector follows the screen edge.
    fn idle_move(&mut self, screen: &Screen, x: i32, y: i32) -> bool {
        let hidden = self.hide_zones();
        self.state.session.clear_painted();

        let session = &mut self.state.session;
        if session.screen_id.as_deref() != Some(screen.id.as_str()) {
            if session.selector_shown {
                self.state.actions.push_back(DisplayAction::HideZoneSelector);
                session.selector_shown = false;
            }
            session.screen_id = Some(screen.id.clone());
            session.layout_id = None;
        }

        let near = edge_trigger::should_show_selector(
            &self.config.selector(),
            screen,
            self.config.is_monitor_disabled(&screen.id),
            self.layouts.layout_count(),
            (x, y),
            self.state.session.selector_shown,
        );
        let actions = &mut self.state.actions;
        let selector_changed = match (near, self.state.session.selector_shown) {
            (true, false) => {
                actions.push_back(DisplayAction::ShowZoneSelector(screen.id.clone()));
                actions.push_back(DisplayAction::UpdateSelectorPosition(x, y));
                self.state.session.selector_shown = true;
                true
            }
            (true, true) => {
                actions.push_back(DisplayAction::UpdateSelectorPosition(x, y));
                false
            }
            (false, true) => {
                actions.push_back(DisplayAction::HideZoneSelector);
                self.state.session.selector_shown = false;
                true
            }
            (false, false) => false,
        };
        hidden || selector_changed
    }

    fn zone_move(&mut self, screen: &Screen, mode: DragMode, x: i32, y: i32) -> bool {
        let layout = if self.config.is_monitor_disabled(&screen.id) {
            None
        } else {
            self.layouts.layout_for_screen(&screen.id)
        };
        let Some(layout) = layout else {
            tracing::debug!("No zones on {}", screen.id);
            return self.hide_zones();
        };

        let session = &mut self.state.session;
        let same_screen = session.screen_id.as_deref() == Some(screen.id.as_str());
        let same_layout = session.layout_id.as_deref() == Some(layout.id.as_str());
        if !(same_screen && same_layout) {
            // Cached geometry belongs to another screen or layout. Painted zones stay.
            session.clear_zone_state();
            if !same_screen && session.overlay_shown {
                self.state.actions.push_back(DisplayAction::ClearHighlight);
                self.state.actions.push_back(DisplayAction::HideOverlay);
                session.overlay_shown = false;
            }
            session.screen_id = Some(screen.id.clone());
            session.layout_id = Some(layout.id.clone());
        }
        if !self.state.session.overlay_shown {
            self.state
                .actions
                .push_back(DisplayAction::ShowOverlay(screen.id.clone()));
            self.state.session.overlay_shown = true;
        }

        let geometries = layout.zone_geometries(&screen.available, self.config.gaps());
        let ctx = ZoneContext {
            layout: &layout,
            screen,
            geometries: &geometries,
            cursor: (x, y),
        };
        match mode {
            DragMode::Single => zone_resolver::resolve_single(&mut self.state, &ctx),
            DragMode::Multi => match self.detector.as_mut() {
                Some(detector) => {
                    detector.set_layout(&layout, &geometries);
                    let detection =
                        detector.detect_multi_zone(x, y, self.config.adjacency_threshold());
                    zone_resolver::resolve_multi(&mut self.state, &ctx, &detection)
                }
                None => zone_resolver::resolve_single(&mut self.state, &ctx),
            },
            DragMode::Span => zone_resolver::resolve_span(&mut self.state, &ctx),
            DragMode::None => false,
        }
    }

    /// Drop the zone selection and hide the overlay. Returns `true` if anything was shown.
    fn hide_zones(&mut self) -> bool {
        let session = &mut self.state.session;
        let had_selection = session.has_selection();
        if had_selection {
            session.clear_zone_state();
            self.state.actions.push_back(DisplayAction::ClearHighlight);
        }
        if session.overlay_shown {
            self.state.actions.push_back(DisplayAction::HideOverlay);
            session.overlay_shown = false;
            return true;
        }
        had_selection
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::tests::TestConfig;
    use crate::config::{DragModifier, SelectorSettings};
    use crate::display_servers::MockDisplayServer;
    use crate::models::Rect;
    use crate::models::fixtures::halves_layout;

    type TestManager = Manager<TestConfig, MockDisplayServer>;

    fn started(mut manager: TestManager) -> TestManager {
        manager.drag_start_handler(
            "W",
            Rect::new(100, 100, 800, 600),
            "app",
            "cls",
            Button::empty(),
        );
        manager
    }

    #[test]
    fn moves_for_another_window_should_be_ignored() {
        let mut manager = started(Manager::new_test_halves());
        assert!(!manager.drag_move_handler("V", 1800, 500, ModMask::Alt, Button::empty()));
        assert!(!manager.state.session.has_selection());
        assert!(manager.state.actions.is_empty());
    }

    #[test]
    fn moves_for_an_excluded_window_should_be_ignored() {
        let config = TestConfig {
            excluded_applications: vec!["app".to_owned()],
            ..TestConfig::default()
        };
        let mut manager = started(Manager::new_test_with(config, vec![halves_layout()]));
        assert!(!manager.drag_move_handler("W", 1800, 500, ModMask::Alt, Button::empty()));
        assert!(manager.state.actions.is_empty());
    }

    #[test]
    fn releasing_the_modifier_should_hide_the_zones() {
        let mut manager = started(Manager::new_test_halves());
        manager.drag_move_handler("W", 1800, 500, ModMask::Alt, Button::empty());
        assert!(manager.state.session.overlay_shown);
        manager.state.actions.clear();
        assert!(manager.drag_move_handler("W", 1800, 500, ModMask::empty(), Button::empty()));
        assert!(!manager.state.session.overlay_shown);
        assert!(!manager.state.session.has_selection());
        assert_eq!(
            manager.state.actions.drain(..).collect::<Vec<_>>(),
            vec![DisplayAction::ClearHighlight, DisplayAction::HideOverlay]
        );
    }

    #[test]
    fn span_should_paint_across_zones_and_reset_when_left() {
        let mut manager = started(Manager::new_test_halves());
        manager.drag_move_handler("W", 100, 500, ModMask::Meta, Button::empty());
        manager.drag_move_handler("W", 1800, 500, ModMask::Meta, Button::empty());
        manager.drag_move_handler("W", 2500, 500, ModMask::Meta, Button::empty());
        assert_eq!(manager.state.session.painted_zones, vec!["left", "right"]);
        assert_eq!(manager.state.session.target_geometry(), Some(Rect::new(0, 0, 1920, 1080)));

        manager.drag_move_handler("W", 1800, 500, ModMask::Alt, Button::empty());
        assert!(manager.state.session.painted_zones.is_empty());
        assert_eq!(manager.state.session.zone_ids, vec!["right"]);
    }

    #[test]
    fn span_should_win_over_the_other_modifiers() {
        let mut manager = started(Manager::new_test_halves());
        let all = ModMask::Alt | ModMask::Control | ModMask::Meta;
        manager.drag_move_handler("W", 100, 500, all, Button::empty());
        assert_eq!(manager.state.session.mode, DragMode::Span);
    }

    #[test]
    fn multi_should_take_in_the_neighbouring_zone() {
        let mut manager = started(Manager::new_test_halves());
        manager.drag_move_handler("W", 950, 500, ModMask::Control, Button::empty());
        assert_eq!(manager.state.session.mode, DragMode::Multi);
        assert_eq!(manager.state.session.zone_ids, vec!["left", "right"]);
        assert_eq!(manager.state.session.target_geometry(), Some(Rect::new(0, 0, 1920, 1080)));

        manager.drag_move_handler("W", 300, 500, ModMask::Control, Button::empty());
        assert_eq!(manager.state.session.zone_ids, vec!["left"]);
        assert_eq!(manager.state.session.target_geometry(), Some(Rect::new(0, 0, 960, 1080)));
    }

    #[test]
    fn holding_still_in_multi_should_not_highlight_again() {
        let mut manager = started(Manager::new_test_halves());
        assert!(manager.drag_move_handler("W", 950, 500, ModMask::Control, Button::empty()));
        manager.flush_actions();
        let highlight = DisplayAction::HighlightZones(vec!["left".to_owned(), "right".to_owned()]);
        assert!(manager.display_server.take_actions().contains(&highlight));

        assert!(!manager.drag_move_handler("W", 950, 500, ModMask::Control, Button::empty()));
        assert!(!manager.drag_move_handler("W", 952, 510, ModMask::Control, Button::empty()));
        manager.flush_actions();
        assert!(manager.display_server.take_actions().is_empty());
        assert_eq!(manager.state.session.zone_ids, vec!["left", "right"]);
    }

    #[test]
    fn always_active_multi_should_follow_an_open_overlay() {
        let config = TestConfig {
            multi_zone_modifier: DragModifier::AlwaysActive,
            ..TestConfig::default()
        };
        let mut manager = started(Manager::new_test_with(config, vec![halves_layout()]));
        assert!(!manager.drag_move_handler("W", 950, 500, ModMask::empty(), Button::empty()));
        assert_eq!(manager.state.session.mode, DragMode::None);
        assert!(!manager.state.session.overlay_shown);

        manager.drag_move_handler("W", 950, 500, ModMask::Alt, Button::empty());
        assert_eq!(manager.state.session.mode, DragMode::Single);
        assert!(manager.state.session.overlay_shown);
        assert_eq!(manager.state.session.zone_ids, vec!["left"]);

        manager.drag_move_handler("W", 950, 500, ModMask::Alt, Button::empty());
        assert_eq!(manager.state.session.mode, DragMode::Multi);
        assert_eq!(manager.state.session.zone_ids, vec!["left", "right"]);
        assert_eq!(manager.state.session.target_geometry(), Some(Rect::new(0, 0, 1920, 1080)));

        let result = manager.drag_stop_handler("W", 950, 500).unwrap();
        assert!(result.should_apply);
        assert_eq!(result.zone_ids, vec!["left", "right"]);
        assert_eq!(result.geometry, Rect::new(0, 0, 1920, 1080));
    }

    #[test]
    fn multi_without_a_detector_should_behave_like_single() {
        let mut manager = started(Manager::new_test_halves().with_detector(None));
        manager.drag_move_handler("W", 950, 500, ModMask::Control, Button::empty());
        assert_eq!(manager.state.session.zone_ids, vec!["left"]);
    }

    #[test]
    fn a_latched_button_should_keep_zones_active() {
        let config = TestConfig {
            activation_button: Button::Right,
            ..TestConfig::default()
        };
        let mut manager = started(Manager::new_test_with(config, vec![halves_layout()]));
        let both = Button::Left | Button::Right;
        manager.drag_move_handler("W", 1800, 500, ModMask::empty(), both);
        manager.drag_move_handler("W", 100, 500, ModMask::empty(), Button::Left);
        assert_eq!(manager.state.session.mode, DragMode::Single);
        assert_eq!(manager.state.session.zone_ids, vec!["left"]);
    }

    #[test]
    fn a_degenerate_screen_should_skip_the_tick() {
        let mut manager = started(Manager::new_test_halves());
        manager.state.screens[0].available = Rect::new(0, 0, 0, 0);
        assert!(!manager.drag_move_handler("W", 1800, 500, ModMask::Alt, Button::empty()));
        assert!(manager.state.session.is_live());
        assert!(manager.state.actions.is_empty());
    }

    #[test]
    fn disabled_monitors_should_not_show_zones() {
        let config = TestConfig {
            disabled_monitors: vec!["DP-1".to_owned()],
            ..TestConfig::default()
        };
        let mut manager = started(Manager::new_test_with(config, vec![halves_layout()]));
        manager.drag_move_handler("W", 1800, 500, ModMask::Alt, Button::empty());
        assert!(!manager.state.session.has_selection());
        assert!(!manager.state.session.overlay_shown);
    }

    #[test]
    fn crossing_to_another_screen_should_recompute_the_zones() {
        let mut manager = started(Manager::new_test_halves());
        let right = Screen::new("DP-2", Rect::new(1920, 0, 1920, 1080))
            .with_available(Rect::new(1920, 30, 1920, 1050));
        manager.state.screens.push(right);
        manager.drag_move_handler("W", 1800, 500, ModMask::Alt, Button::empty());
        manager.drag_move_handler("W", 1920 + 1800, 500, ModMask::Alt, Button::empty());
        assert_eq!(manager.state.session.screen_id.as_deref(), Some("DP-2"));
        assert_eq!(manager.state.session.target_geometry(), Some(Rect::new(2880, 30, 960, 1050)));
        assert!(manager.state.actions.contains(&DisplayAction::ShowOverlay("DP-2".to_owned())));
    }

    #[test]
    fn the_modifier_conflict_should_be_noted_once() {
        let config = TestConfig {
            span_modifier: DragModifier::Alt,
            ..TestConfig::default()
        };
        let mut manager = started(Manager::new_test_with(config, vec![halves_layout()]));
        manager.drag_move_handler("W", 1800, 500, ModMask::Alt, Button::empty());
        assert!(manager.state.session.warned_modifier_conflict);
        assert_eq!(manager.state.session.mode, DragMode::Span);
    }

    #[test]
    fn the_selector_should_show_near_its_edge_and_hide_for_zones() {
        let config = TestConfig {
            selector: SelectorSettings {
                enabled: true,
                trigger_distance: 10,
                ..SelectorSettings::default()
            },
            ..TestConfig::default()
        };
        let mut manager = started(Manager::new_test_with(config, vec![halves_layout()]));
        assert!(manager.drag_move_handler("W", 900, 5, ModMask::empty(), Button::empty()));
        assert!(manager.state.session.selector_shown);
        assert_eq!(
            manager.state.actions.drain(..).collect::<Vec<_>>(),
            vec![
                DisplayAction::ShowZoneSelector("DP-1".to_owned()),
                DisplayAction::UpdateSelectorPosition(900, 5)
            ]
        );

        assert!(!manager.drag_move_handler("W", 900, 100, ModMask::empty(), Button::empty()));
        assert!(manager.state.session.selector_shown);
        manager.state.actions.clear();

        manager.drag_move_handler("W", 900, 100, ModMask::Alt, Button::empty());
        assert!(!manager.state.session.selector_shown);
        assert_eq!(manager.state.actions.front(), Some(&DisplayAction::HideZoneSelector));
    }

    #[test]
    fn the_selector_should_stay_hidden_when_disabled() {
        let mut manager = started(Manager::new_test_halves());
        assert!(!manager.drag_move_handler("W", 900, 0, ModMask::empty(), Button::empty()));
        assert!(!manager.state.session.selector_shown);
    }
}
