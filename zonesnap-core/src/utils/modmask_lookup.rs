use bitflags::bitflags;
use serde::{Deserialize, Serialize, de::Visitor};

bitflags! {
    /// Represents the state of modifier keys
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ModMask: u16 {
        const Shift = 1;
        const Control = 1 << 1;
        /// Mod1
        const Alt = 1 << 2;
        /// Mod4, Super
        const Meta = 1 << 3;
    }
}
bitflags! {
    /// Represents the state of the mouse buttons
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Button: u8 {
        /// Main button (left click for right-handed)
        const Left = 1;
        /// Middle button (pressing the scroll wheel)
        const Middle = 1 << 1;
        /// Secondary button (right click for right-handed)
        const Right = 1 << 2;
        const Back = 1 << 3;
        const Forward = 1 << 4;
    }
}

impl Default for ModMask {
    fn default() -> Self {
        Self::empty()
    }
}

impl Default for Button {
    fn default() -> Self {
        Self::empty()
    }
}

#[must_use]
pub fn into_modmask(keys: &[String]) -> ModMask {
    let mut mask = ModMask::empty();
    for s in keys {
        mask |= into_mod(s);
    }
    mask
}

#[must_use]
pub fn into_mod(key: &str) -> ModMask {
    match key {
        "Shift" => ModMask::Shift,
        "Control" | "Ctrl" => ModMask::Control,
        "Mod1" | "Alt" => ModMask::Alt,
        "Mod4" | "Super" | "Meta" => ModMask::Meta,
        _ => ModMask::empty(),
    }
}

#[must_use]
pub fn into_button(name: &str) -> Button {
    match name {
        "Left" | "Button1" => Button::Left,
        "Middle" | "Button2" => Button::Middle,
        "Right" | "Button3" => Button::Right,
        "Back" | "Button8" => Button::Back,
        "Forward" | "Button9" => Button::Forward,
        _ => Button::empty(),
    }
}

// serde impls (derive is not working with the bitflags macro)
// Masks serialize as their bits and deserialize from bits or from `+`-separated names.

impl Serialize for ModMask {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u16(self.bits())
    }
}

impl<'de> Deserialize<'de> for ModMask {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct ModmaskVisitor;

        impl Visitor<'_> for ModmaskVisitor {
            type Value = ModMask;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("a modifier bitfield or names like \"Control+Alt\"")
            }

            fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                u16::try_from(v)
                    .map(ModMask::from_bits_truncate)
                    .map_err(|_| E::custom(format!("modifier mask {v} does not fit in 16 bits")))
            }

            fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                let v = u64::try_from(v)
                    .map_err(|_| E::custom(format!("modifier mask {v} is negative")))?;
                self.visit_u64(v)
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                let keys: Vec<String> = v.split('+').map(|k| k.trim().to_owned()).collect();
                Ok(into_modmask(&keys))
            }
        }

        deserializer.deserialize_any(ModmaskVisitor)
    }
}

impl Serialize for Button {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u8(self.bits())
    }
}

impl<'de> Deserialize<'de> for Button {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct ButtonVisitor;

        impl Visitor<'_> for ButtonVisitor {
            type Value = Button;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("a button bitfield or names like \"Middle+Right\"")
            }

            fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                u8::try_from(v)
                    .map(Button::from_bits_truncate)
                    .map_err(|_| E::custom(format!("button mask {v} does not fit in 8 bits")))
            }

            fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                let v = u64::try_from(v)
                    .map_err(|_| E::custom(format!("button mask {v} is negative")))?;
                self.visit_u64(v)
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(v
                    .split('+')
                    .map(|name| into_button(name.trim()))
                    .fold(Button::empty(), |acc, b| acc | b))
            }
        }

        deserializer.deserialize_any(ButtonVisitor)
    }
}
