//! Absolute screen-space rectangles.
#![allow(clippy::module_name_repetitions)]
use serde::{Deserialize, Serialize};
use std::cmp;

/// Absolute geometry in pixels. x,y from top left.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Copy, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    #[must_use]
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    #[must_use]
    pub const fn right(&self) -> i32 {
        self.x + self.w
    }

    #[must_use]
    pub const fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// A rect without area. Disconnected outputs report these.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    /// Half-open containment, so two rects sharing an edge never both contain a point.
    #[must_use]
    pub const fn contains_point(&self, x: i32, y: i32) -> bool {
        (self.x <= x && x < self.right()) && (self.y <= y && y < self.bottom())
    }

    #[must_use]
    pub const fn center(&self) -> (i32, i32) {
        let x = self.x + (self.w / 2);
        let y = self.y + (self.h / 2);
        (x, y)
    }

    /// Bounding box of both rects. Empty rects do not contribute.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        match (self.is_empty(), other.is_empty()) {
            (true, true) => Self::default(),
            (true, false) => *other,
            (false, true) => *self,
            (false, false) => {
                let x = cmp::min(self.x, other.x);
                let y = cmp::min(self.y, other.y);
                let right = cmp::max(self.right(), other.right());
                let bottom = cmp::max(self.bottom(), other.bottom());
                Self::new(x, y, right - x, bottom - y)
            }
        }
    }

    /// Distance from a point to the closest edge of this rect, zero when inside.
    #[must_use]
    pub fn distance_to_point(&self, x: i32, y: i32) -> i32 {
        let dx = cmp::max(cmp::max(self.x - x, 0), x - (self.right() - 1));
        let dy = cmp::max(cmp::max(self.y - y, 0), y - (self.bottom() - 1));
        cmp::max(dx, dy)
    }

    /// Whether each side of `other` lies within the given tolerances of this rect.
    #[must_use]
    pub const fn roughly_matches(
        &self,
        other: &Self,
        size_tolerance: i32,
        position_tolerance: i32,
    ) -> bool {
        (self.w - other.w).abs() <= size_tolerance
            && (self.h - other.h).abs() <= size_tolerance
            && (self.x - other.x).abs() <= position_tolerance
            && (self.y - other.y).abs() <= position_tolerance
    }
}
