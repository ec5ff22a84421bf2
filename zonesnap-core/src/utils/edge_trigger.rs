//! Deciding when the cursor is close enough to a screen edge to show the zone selector.
use crate::config::{SelectorLayoutMode, SelectorPosition, SelectorSettings};
use crate::models::{Rect, Screen};

/// Gap between two layout previews.
pub const INDICATOR_SPACING: i32 = 18;
/// Padding between the previews and the selector's border.
pub const CONTAINER_PADDING: i32 = 36;
/// Room reserved under each preview for its label.
pub const LABEL_SPACE: i32 = 28;

/// Rendered size of the selector bar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BarSize {
    pub width: i32,
    pub height: i32,
}

/// Width of a single layout preview on the given screen.
#[must_use]
pub fn indicator_width(settings: &SelectorSettings, screen: &Rect) -> i32 {
    if settings.preview_lock_aspect && screen.h > 0 {
        let aspect = f64::from(screen.w) / f64::from(screen.h);
        (f64::from(settings.preview_height) * aspect).round() as i32
    } else {
        settings.preview_width
    }
}

/// Size of the selector showing `layout_count` previews.
#[must_use]
pub fn bar_size(settings: &SelectorSettings, layout_count: usize, screen: &Rect) -> BarSize {
    let count = layout_count.max(1);
    let (columns, rows) = match settings.layout_mode {
        SelectorLayoutMode::Horizontal => (count, 1),
        SelectorLayoutMode::Vertical => (1, count),
        SelectorLayoutMode::Grid => {
            let columns = settings.grid_columns.clamp(1, count);
            (columns, count.div_ceil(columns))
        }
    };
    let columns = columns as i32;
    let rows = rows as i32;
    let indicator_w = indicator_width(settings, screen);
    let indicator_h = settings.preview_height;
    BarSize {
        width: columns * indicator_w + (columns - 1) * INDICATOR_SPACING + 2 * CONTAINER_PADDING,
        height: rows * (indicator_h + LABEL_SPACE)
            + (rows - 1) * INDICATOR_SPACING
            + 2 * CONTAINER_PADDING,
    }
}

/// Whether the cursor is within reach of the selector's edge or corner.
///
/// Once the selector is shown the reach grows to the rendered bar, so moving onto the bar
/// does not hide it again. Corners need both of their edges in reach.
#[must_use]
pub fn near_trigger_edge(
    cursor: (i32, i32),
    screen: &Rect,
    position: SelectorPosition,
    trigger_distance: i32,
    bar: BarSize,
    shown: bool,
) -> bool {
    let (x, y) = cursor;
    if screen.is_empty() || !screen.contains_point(x, y) {
        return false;
    }
    let (vertical_reach, horizontal_reach) = if shown {
        (trigger_distance.max(bar.height), trigger_distance.max(bar.width))
    } else {
        (trigger_distance, trigger_distance)
    };

    let near_top = y - screen.y <= vertical_reach;
    let near_bottom = screen.bottom() - 1 - y <= vertical_reach;
    let near_left = x - screen.x <= horizontal_reach;
    let near_right = screen.right() - 1 - x <= horizontal_reach;

    match position {
        SelectorPosition::TopLeft => near_top && near_left,
        SelectorPosition::Top => near_top,
        SelectorPosition::TopRight => near_top && near_right,
        SelectorPosition::Left => near_left,
        SelectorPosition::Right => near_right,
        SelectorPosition::BottomLeft => near_bottom && near_left,
        SelectorPosition::Bottom => near_bottom,
        SelectorPosition::BottomRight => near_bottom && near_right,
    }
}

/// Full check for a move with no zone modifier held.
#[must_use]
pub fn should_show_selector(
    settings: &SelectorSettings,
    screen: &Screen,
    screen_disabled: bool,
    layout_count: usize,
    cursor: (i32, i32),
    shown: bool,
) -> bool {
    if !settings.enabled || screen_disabled {
        return false;
    }
    let bar = bar_size(settings, layout_count, &screen.geometry);
    near_trigger_edge(
        cursor,
        &screen.geometry,
        settings.position,
        settings.trigger_distance,
        bar,
        shown,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCREEN: Rect = Rect::new(0, 0, 1920, 1080);

    #[test]
    fn a_shown_selector_should_stay_until_the_cursor_leaves_the_bar() {
        let bar = BarSize {
            width: 400,
            height: 60,
        };
        let top = SelectorPosition::Top;
        assert!(near_trigger_edge((900, 10), &SCREEN, top, 10, bar, false));
        assert!(!near_trigger_edge((900, 11), &SCREEN, top, 10, bar, false));
        assert!(near_trigger_edge((900, 40), &SCREEN, top, 10, bar, true));
        assert!(near_trigger_edge((900, 60), &SCREEN, top, 10, bar, true));
        assert!(!near_trigger_edge((900, 61), &SCREEN, top, 10, bar, true));
    }

    #[test]
    fn corners_should_need_both_edges() {
        let bar = BarSize::default();
        let corner = SelectorPosition::BottomRight;
        assert!(near_trigger_edge((1915, 1075), &SCREEN, corner, 10, bar, false));
        assert!(!near_trigger_edge((1915, 500), &SCREEN, corner, 10, bar, false));
        assert!(!near_trigger_edge((900, 1075), &SCREEN, corner, 10, bar, false));
        let bottom = SelectorPosition::Bottom;
        assert!(near_trigger_edge((900, 1075), &SCREEN, bottom, 10, bar, false));
    }

    #[test]
    fn degenerate_screens_should_never_trigger() {
        let empty = Rect::new(0, 0, 0, 0);
        let bar = BarSize::default();
        assert!(!near_trigger_edge((0, 0), &empty, SelectorPosition::Top, 10, bar, false));
    }

    #[test]
    fn bar_size_should_wrap_previews_into_grid_rows() {
        let settings = SelectorSettings {
            grid_columns: 3,
            preview_width: 100,
            preview_height: 50,
            preview_lock_aspect: false,
            ..SelectorSettings::default()
        };
        let bar = bar_size(&settings, 4, &SCREEN);
        let chrome = INDICATOR_SPACING + 2 * CONTAINER_PADDING;
        assert_eq!(bar.width, 3 * 100 + INDICATOR_SPACING + chrome);
        assert_eq!(bar.height, 2 * (50 + LABEL_SPACE) + chrome);
    }

    #[test]
    fn locked_aspect_should_follow_the_screen() {
        let settings = SelectorSettings {
            preview_height: 108,
            preview_lock_aspect: true,
            ..SelectorSettings::default()
        };
        assert_eq!(indicator_width(&settings, &SCREEN), 192);
    }

    #[test]
    fn disabled_selector_or_screen_should_not_show() {
        let screen = Screen::new("DP-1", SCREEN);
        let settings = SelectorSettings::default();
        assert!(should_show_selector(&settings, &screen, false, 2, (900, 0), false));
        assert!(!should_show_selector(&settings, &screen, true, 2, (900, 0), false));
        let disabled = SelectorSettings {
            enabled: false,
            ..settings
        };
        assert!(!should_show_selector(&disabled, &screen, false, 2, (900, 0), false));
    }
}
