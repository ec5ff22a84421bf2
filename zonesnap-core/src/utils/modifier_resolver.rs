//! Turns raw modifier and button state into a drag mode.
use crate::config::{Config, DragModifier};
use crate::models::DragMode;
use crate::utils::modmask_lookup::{Button, ModMask};

/// Configured bindings, read from the config once per tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bindings {
    pub single: DragModifier,
    pub multi: DragModifier,
    pub span: DragModifier,
    pub activation_button: Button,
}

impl Bindings {
    pub fn from_config(config: &impl Config) -> Self {
        Self {
            single: config.zone_modifier(),
            multi: config.multi_zone_modifier(),
            span: config.span_modifier(),
            activation_button: config.activation_button(),
        }
    }

    /// Whether the reported buttons include the activation button.
    #[must_use]
    pub const fn button_activates(&self, buttons: Button) -> bool {
        !self.activation_button.is_empty() && buttons.intersects(self.activation_button)
    }

    /// Mode made unreachable because the span binding is the same as its binding.
    #[must_use]
    pub fn shadowed_mode(&self) -> Option<DragMode> {
        if self.span == DragModifier::Disabled {
            return None;
        }
        if self.span == self.multi {
            Some(DragMode::Multi)
        } else if self.span == self.single {
            Some(DragMode::Single)
        } else {
            None
        }
    }
}

/// Input state for a single tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModifierInput {
    pub modifiers: ModMask,
    /// The activation button was seen earlier in this drag.
    pub button_latched: bool,
    /// The zone overlay was left visible by the previous tick.
    pub overlay_shown: bool,
}

/// Resolve the active mode. Span wins over Multi, Multi over Single.
///
/// A multi binding of `AlwaysActive` needs no modifier of its own, but only takes over once
/// single-zone activation has opened the overlay.
#[must_use]
pub fn resolve(bindings: &Bindings, input: &ModifierInput) -> DragMode {
    let mods = input.modifiers;
    let single = bindings.single.is_held(mods) || input.button_latched;
    let multi = match bindings.multi {
        DragModifier::AlwaysActive => single && input.overlay_shown,
        binding => binding.is_held(mods),
    };

    if bindings.span.is_held(mods) {
        DragMode::Span
    } else if multi {
        DragMode::Multi
    } else if single {
        DragMode::Single
    } else {
        DragMode::None
    }
}
