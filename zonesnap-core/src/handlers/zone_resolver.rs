//! Picking the target zones for a move in each drag mode.
//!
//! Every resolver only touches the session and the action queue when the selection changed,
//! so holding still does not flood the overlay with highlights.
use super::DisplayAction;
use crate::detectors::ZoneDetection;
use crate::models::{Layout, Rect, Screen, Zone, ZoneId};
use crate::state::State;
use crate::utils::geometry;

/// What the resolvers need to know about the current tick.
pub(crate) struct ZoneContext<'a> {
    pub layout: &'a Layout,
    pub screen: &'a Screen,
    /// Absolute zone geometries on `screen`, in layout order.
    pub geometries: &'a [(ZoneId, Rect)],
    pub cursor: (i32, i32),
}

impl ZoneContext<'_> {
    fn geometry_of(&self, id: &str) -> Option<Rect> {
        self.geometries
            .iter()
            .find(|(zone, _)| zone == id)
            .map(|(_, rect)| *rect)
    }

    fn zone_under_cursor(&self) -> Option<&Zone> {
        let (x, y) = self.screen.normalize(self.cursor.0, self.cursor.1);
        self.layout.zone_at(x, y)
    }
}

/// The zone under the cursor.
pub(crate) fn resolve_single(state: &mut State, ctx: &ZoneContext) -> bool {
    let Some((id, rect)) = ctx
        .zone_under_cursor()
        .and_then(|zone| Some((zone.id.clone(), ctx.geometry_of(&zone.id)?)))
    else {
        return clear_selection(state);
    };
    let session = &mut state.session;
    if session.zone_ids.len() == 1 && session.primary_zone.as_ref() == Some(&id) {
        return false;
    }
    tracing::debug!("Zone under cursor: {}", id);
    session.primary_zone = Some(id.clone());
    session.zone_ids = vec![id.clone()];
    session.zone_geometry = Some(rect);
    session.combined_geometry = None;
    state.actions.push_back(DisplayAction::HighlightZones(vec![id]));
    true
}

/// The zone under the cursor and its neighbours, as found by the detector. Falls back to
/// [`resolve_single`] when the detector finds only one zone.
pub(crate) fn resolve_multi(
    state: &mut State,
    ctx: &ZoneContext,
    detection: &ZoneDetection,
) -> bool {
    if !detection.is_multi_zone {
        return resolve_single(state, ctx);
    }
    let zones: Vec<(ZoneId, Rect)> = detection
        .zone_ids()
        .into_iter()
        .filter_map(|id| ctx.geometry_of(&id).map(|rect| (id, rect)))
        .collect();
    if zones.len() < 2 {
        return resolve_single(state, ctx);
    }
    let ids: Vec<ZoneId> = zones.iter().map(|(id, _)| id.clone()).collect();
    let session = &mut state.session;
    if session.zone_ids == ids {
        return false;
    }
    let rects: Vec<Rect> = zones.iter().map(|(_, rect)| *rect).collect();
    tracing::debug!("Zones near cursor: {:?}", ids);
    session.primary_zone = ids.first().cloned();
    session.zone_geometry = rects.first().copied();
    session.combined_geometry = geometry::combine(&rects);
    session.zone_ids = ids.clone();
    state.actions.push_back(DisplayAction::HighlightZones(ids));
    true
}

/// Every zone painted so far. Zones are only ever added, and leaving all zones keeps the
/// selection.
pub(crate) fn resolve_span(state: &mut State, ctx: &ZoneContext) -> bool {
    let session = &mut state.session;
    let added = ctx
        .zone_under_cursor()
        .is_some_and(|zone| session.paint(&zone.id));
    if !added && session.target_geometry().is_some() {
        return false;
    }
    let zones: Vec<(ZoneId, Rect)> = session
        .painted_zones
        .iter()
        .filter_map(|id| ctx.geometry_of(id).map(|rect| (id.clone(), rect)))
        .collect();
    let Some((primary, first)) = zones.first().cloned() else {
        return false;
    };
    let ids: Vec<ZoneId> = zones.iter().map(|(id, _)| id.clone()).collect();
    let rects: Vec<Rect> = zones.iter().map(|(_, rect)| *rect).collect();
    tracing::debug!("Painted zones: {:?}", ids);
    session.primary_zone = Some(primary);
    session.zone_geometry = Some(first);
    session.combined_geometry = if rects.len() > 1 {
        geometry::combine(&rects)
    } else {
        None
    };
    session.zone_ids = ids.clone();
    state.actions.push_back(DisplayAction::HighlightZones(ids));
    true
}

fn clear_selection(state: &mut State) -> bool {
    if !state.session.has_selection() {
        return false;
    }
    state.session.clear_zone_state();
    state.actions.push_back(DisplayAction::ClearHighlight);
    true
}
