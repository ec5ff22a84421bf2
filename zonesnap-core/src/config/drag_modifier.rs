use crate::utils::modmask_lookup::ModMask;
use serde::{Deserialize, Serialize};

/// Modifier combination bound to a drag mode.
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum DragModifier {
    #[default]
    Disabled,
    Shift,
    Ctrl,
    Alt,
    Meta,
    CtrlAlt,
    CtrlShift,
    AltShift,
    /// No modifier needed. For multi-zone mode it still requires the zone overlay to be open.
    AlwaysActive,
    AltMeta,
    CtrlAltMeta,
}

impl DragModifier {
    /// Decode the numeric form settings stores use. Unknown values fall back to `Disabled`.
    #[must_use]
    pub const fn from_i32(value: i32) -> Self {
        match value {
            1 => Self::Shift,
            2 => Self::Ctrl,
            3 => Self::Alt,
            4 => Self::Meta,
            5 => Self::CtrlAlt,
            6 => Self::CtrlShift,
            7 => Self::AltShift,
            8 => Self::AlwaysActive,
            9 => Self::AltMeta,
            10 => Self::CtrlAltMeta,
            _ => Self::Disabled,
        }
    }

    /// Modifiers that must be held, `None` for `Disabled` and `AlwaysActive`.
    #[must_use]
    pub const fn required(self) -> Option<ModMask> {
        let mask = match self {
            Self::Disabled | Self::AlwaysActive => return None,
            Self::Shift => ModMask::Shift,
            Self::Ctrl => ModMask::Control,
            Self::Alt => ModMask::Alt,
            Self::Meta => ModMask::Meta,
            Self::CtrlAlt => ModMask::Control.union(ModMask::Alt),
            Self::CtrlShift => ModMask::Control.union(ModMask::Shift),
            Self::AltShift => ModMask::Alt.union(ModMask::Shift),
            Self::AltMeta => ModMask::Alt.union(ModMask::Meta),
            Self::CtrlAltMeta => ModMask::Control.union(ModMask::Alt).union(ModMask::Meta),
        };
        Some(mask)
    }

    /// Whether the held modifiers satisfy this binding. Extra modifiers do not disqualify.
    #[must_use]
    pub const fn is_held(self, mods: ModMask) -> bool {
        match self {
            Self::Disabled => false,
            Self::AlwaysActive => true,
            other => match other.required() {
                Some(required) => mods.contains(required),
                None => false,
            },
        }
    }
}
