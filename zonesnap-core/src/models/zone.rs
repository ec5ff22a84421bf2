use serde::{Deserialize, Serialize};

pub type ZoneId = String;

/// Rectangle relative to a screen's available area, every component in `0..=1`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Default)]
pub struct NormRect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

/// Slack allowed when comparing normalized coordinates.
pub const NORM_EPSILON: f64 = 0.001;

impl NormRect {
    #[must_use]
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Half-open containment, matching [`crate::models::Rect::contains_point`].
    #[must_use]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        (self.x <= x && x < self.x + self.w) && (self.y <= y && y < self.y + self.h)
    }

    #[must_use]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.x - other.x).abs() <= epsilon
            && (self.y - other.y).abs() <= epsilon
            && (self.w - other.w).abs() <= epsilon
            && (self.h - other.h).abs() <= epsilon
    }

    /// Finite, non-empty and inside the unit square.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        [self.x, self.y, self.w, self.h].iter().all(|v| v.is_finite())
            && self.w > 0.0
            && self.h > 0.0
            && self.x >= 0.0
            && self.y >= 0.0
            && self.x + self.w <= 1.0 + NORM_EPSILON
            && self.y + self.h <= 1.0 + NORM_EPSILON
    }
}

/// A region of a layout a window can snap into.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Zone {
    pub id: ZoneId,
    #[serde(default)]
    pub name: String,
    /// Position of the zone in its layout, used for ordering and keyboard navigation.
    #[serde(default)]
    pub number: usize,
    pub geometry: NormRect,
}

impl Zone {
    #[must_use]
    pub fn new(id: impl Into<ZoneId>, number: usize, geometry: NormRect) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            number,
            geometry,
        }
    }
}
