//! Mapping zones onto screens and combining zone geometries.
use crate::models::{NORM_EPSILON, NormRect, Rect};
use serde::{Deserialize, Serialize};

/// Spacing applied around zones.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Gaps {
    /// Space between two neighbouring zones, split evenly between them.
    pub zone_padding: i32,
    /// Space between a zone and the edge of the available area.
    pub outer_gap: i32,
}

/// Relative zone rect to absolute pixels, without gaps.
///
/// Right and bottom edges are rounded on their own so that zones sharing an edge stay flush.
#[must_use]
pub fn zone_to_absolute(zone: &NormRect, available: &Rect) -> Rect {
    let width = f64::from(available.w);
    let height = f64::from(available.h);
    let x = available.x + (zone.x * width).round() as i32;
    let y = available.y + (zone.y * height).round() as i32;
    let right = available.x + ((zone.x + zone.w) * width).round() as i32;
    let bottom = available.y + ((zone.y + zone.h) * height).round() as i32;
    Rect::new(x, y, right - x, bottom - y)
}

/// Absolute zone geometry with gaps applied.
///
/// Sides on the edge of the available area get the outer gap, inner sides get half the zone
/// padding each.
#[must_use]
pub fn zone_geometry(zone: &NormRect, available: &Rect, gaps: Gaps) -> Rect {
    let rect = zone_to_absolute(zone, available);
    let lead = gaps.zone_padding / 2;
    let trail = gaps.zone_padding - lead;
    let left = if zone.x <= NORM_EPSILON { gaps.outer_gap } else { lead };
    let top = if zone.y <= NORM_EPSILON { gaps.outer_gap } else { lead };
    let right = if zone.x + zone.w >= 1.0 - NORM_EPSILON {
        gaps.outer_gap
    } else {
        trail
    };
    let bottom = if zone.y + zone.h >= 1.0 - NORM_EPSILON {
        gaps.outer_gap
    } else {
        trail
    };
    Rect::new(
        rect.x + left,
        rect.y + top,
        (rect.w - left - right).max(1),
        (rect.h - top - bottom).max(1),
    )
}

/// Bounding box of a set of zone geometries. A single rect comes back unchanged.
#[must_use]
pub fn combine<'a>(rects: impl IntoIterator<Item = &'a Rect>) -> Option<Rect> {
    rects.into_iter().copied().reduce(|acc, rect| acc.union(&rect))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCREEN: Rect = Rect::new(0, 0, 1920, 1080);

    #[test]
    fn right_half_should_map_to_the_right_half_of_the_screen() {
        let right = NormRect::new(0.5, 0.0, 0.5, 1.0);
        assert_eq!(
            zone_geometry(&right, &SCREEN, Gaps::default()),
            Rect::new(960, 0, 960, 1080)
        );
    }

    #[test]
    fn thirds_should_stay_flush_after_rounding() {
        let third = 1.0 / 3.0;
        let zones = [
            NormRect::new(0.0, 0.0, third, 1.0),
            NormRect::new(third, 0.0, third, 1.0),
            NormRect::new(2.0 * third, 0.0, third, 1.0),
        ];
        let screen = Rect::new(0, 0, 1000, 500);
        let rects: Vec<Rect> = zones.iter().map(|z| zone_to_absolute(z, &screen)).collect();
        assert_eq!(rects[0].right(), rects[1].x);
        assert_eq!(rects[1].right(), rects[2].x);
        assert_eq!(rects[2].right(), 1000);
    }

    #[test]
    fn gaps_should_use_outer_gap_on_screen_edges_and_padding_inside() {
        let gaps = Gaps {
            zone_padding: 10,
            outer_gap: 8,
        };
        let left = zone_geometry(&NormRect::new(0.0, 0.0, 0.5, 1.0), &SCREEN, gaps);
        let right = zone_geometry(&NormRect::new(0.5, 0.0, 0.5, 1.0), &SCREEN, gaps);
        assert_eq!(left, Rect::new(8, 8, 960 - 8 - 5, 1080 - 16));
        assert_eq!(right, Rect::new(965, 8, 960 - 5 - 8, 1080 - 16));
        assert_eq!(right.x - left.right(), 10);
    }

    #[test]
    fn combine_should_not_depend_on_zone_order() {
        let a = Rect::new(0, 0, 960, 540);
        let b = Rect::new(960, 540, 960, 540);
        let c = Rect::new(480, 200, 100, 900);
        let forward = combine(&[a, b, c]);
        let backward = combine(&[c, b, a]);
        assert_eq!(forward, backward);
        assert_eq!(forward, Some(Rect::new(0, 0, 1920, 1100)));
    }

    #[test]
    fn combine_of_one_zone_is_that_zone() {
        let a = Rect::new(13, 17, 400, 300);
        assert_eq!(combine(&[a]), Some(a));
        assert_eq!(combine(&[]), None);
    }
}
