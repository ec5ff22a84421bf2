//! Turning a finished drag into a [`SnapResult`].
//!
//! The decision works on a [`DragSnapshot`], an owned copy of everything it needs taken at
//! release. Tracker calls made while deciding may land after another window's drag has
//! already started, and that drag must not be able to change this outcome.
use crate::display_servers::SelectorPick;
use crate::errors::Result;
use crate::models::{EmptyZone, Layout, NORM_EPSILON, Rect, Screen, SnapResult, WindowId, ZoneId};
use crate::trackers::WindowTracker;
use crate::utils::geometry::{self, Gaps};

/// Drag state captured at release.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DragSnapshot {
    pub window: WindowId,
    /// Screen under the release point, not under the last move.
    pub release_screen: Option<Screen>,
    pub release_screen_disabled: bool,
    pub zone_ids: Vec<ZoneId>,
    /// Union geometry in multi/span mode, the zone's own geometry otherwise.
    pub zone_geometry: Option<Rect>,
    /// Layout the zone selection was made in.
    pub layout: Option<Layout>,
    pub original_geometry: Rect,
    pub was_snapped_before_drag: bool,
    pub selector_pick: Option<SelectorPick>,
    /// Layout the selector pick refers to, when it still exists.
    pub selector_layout: Option<Layout>,
    pub cursor: (i32, i32),
    pub restore_size_on_unsnap: bool,
    pub snap_assist_enabled: bool,
    pub gaps: Gaps,
}

struct Target {
    geometry: Rect,
    zone_ids: Vec<ZoneId>,
    layout: Option<Layout>,
}

pub struct SnapDecisionBuilder<'a> {
    tracker: &'a mut dyn WindowTracker,
}

impl<'a> SnapDecisionBuilder<'a> {
    pub fn new(tracker: &'a mut dyn WindowTracker) -> Self {
        Self { tracker }
    }

    /// An explicit selector pick wins over the zone selection. Without either, a window that
    /// was snapped is unsnapped.
    pub fn build(self, snapshot: DragSnapshot) -> SnapResult {
        let Some(screen) = snapshot.release_screen.clone() else {
            tracing::warn!(
                "No screen at release point {:?} for {}, not snapping",
                snapshot.cursor,
                snapshot.window
            );
            return SnapResult::none(None);
        };
        let target = selector_target(&snapshot, &screen).or_else(|| zone_target(&snapshot));
        match target {
            Some(target) => self.snap(&snapshot, &screen, target),
            None if snapshot.was_snapped_before_drag => self.unsnap(&snapshot, &screen),
            None => SnapResult::none(Some(screen.id)),
        }
    }

    fn snap(mut self, snapshot: &DragSnapshot, screen: &Screen, target: Target) -> SnapResult {
        let window = snapshot.window.as_str();
        tracing::info!(
            "Snapping {} to {:?} at {:?}",
            window,
            target.zone_ids,
            target.geometry
        );
        self.tracker.record_snap_intent(window, true);
        match target.zone_ids.as_slice() {
            [zone] => self.tracker.window_snapped(window, zone, &screen.id),
            zones => self.tracker.window_snapped_multi_zone(window, zones, &screen.id),
        }
        self.tracker.set_window_floating(window, false);

        let empty_zones = match (&target.layout, snapshot.snap_assist_enabled) {
            (Some(layout), true) => self.empty_zones(layout, screen, snapshot.gaps),
            _ => vec![],
        };
        let empty_zones_json = empty_zones_json(&empty_zones).unwrap_or_else(|err| {
            tracing::error!("Could not serialize empty zones: {}", err);
            String::new()
        });

        if !snapshot.was_snapped_before_drag
            && self.tracker.validated_pre_snap_geometry(window).is_none()
        {
            self.tracker
                .store_pre_snap_geometry(window, snapshot.original_geometry);
        }

        SnapResult {
            should_apply: true,
            geometry: target.geometry,
            zone_ids: target.zone_ids,
            release_screen_id: Some(screen.id.clone()),
            restore_size_only: false,
            snap_assist_requested: !empty_zones_json.is_empty(),
            empty_zones_json,
        }
    }

    fn unsnap(mut self, snapshot: &DragSnapshot, screen: &Screen) -> SnapResult {
        let window = snapshot.window.as_str();
        tracing::info!("Unsnapping {}", window);
        self.tracker.window_unsnapped_for_float(window);
        self.tracker.set_window_floating(window, true);
        let restored = if snapshot.restore_size_on_unsnap {
            self.tracker.validated_pre_snap_geometry(window)
        } else {
            None
        };
        self.tracker.clear_pre_snap_geometry(window);

        match restored {
            Some(geometry) => SnapResult {
                should_apply: true,
                geometry,
                release_screen_id: Some(screen.id.clone()),
                restore_size_only: true,
                ..SnapResult::default()
            },
            None => SnapResult::none(Some(screen.id.clone())),
        }
    }

    /// Zones of `layout` nobody is in, queried after this window was recorded as snapped.
    fn empty_zones(&self, layout: &Layout, screen: &Screen, gaps: Gaps) -> Vec<EmptyZone> {
        layout
            .zone_geometries(&screen.available, gaps)
            .into_iter()
            .filter(|(id, _)| self.tracker.windows_in_zone(id).is_empty())
            .map(|(id, rect)| EmptyZone::new(id, rect))
            .collect()
    }
}

fn selector_target(snapshot: &DragSnapshot, screen: &Screen) -> Option<Target> {
    let pick = snapshot.selector_pick.as_ref()?;
    let geometry = geometry::zone_geometry(&pick.zone_geometry, &screen.available, snapshot.gaps);
    let resolved = snapshot.selector_layout.as_ref().and_then(|layout| {
        layout
            .zones()
            .get(pick.zone_index)
            .filter(|zone| zone.geometry.approx_eq(&pick.zone_geometry, NORM_EPSILON))
            .map(|zone| (zone.id.clone(), layout.clone()))
    });
    let (zone_id, layout) = match resolved {
        Some((id, layout)) => (id, Some(layout)),
        None => {
            let id = format!("zoneselector-{}-{}", pick.layout_id, pick.zone_index);
            tracing::warn!(
                "Selector pick {:?} does not match a known zone, tracking it as {}",
                pick,
                id
            );
            (id, None)
        }
    };
    Some(Target {
        geometry,
        zone_ids: vec![zone_id],
        layout,
    })
}

/// Empty zones as the JSON array the window manager hands to snap assist. Empty when there are
/// none.
fn empty_zones_json(empty_zones: &[EmptyZone]) -> Result<String> {
    if empty_zones.is_empty() {
        return Ok(String::new());
    }
    Ok(serde_json::to_string(empty_zones)?)
}

fn zone_target(snapshot: &DragSnapshot) -> Option<Target> {
    if snapshot.release_screen_disabled || snapshot.zone_ids.is_empty() {
        return None;
    }
    Some(Target {
        geometry: snapshot.zone_geometry?,
        zone_ids: snapshot.zone_ids.clone(),
        layout: snapshot.layout.clone(),
    })
}
