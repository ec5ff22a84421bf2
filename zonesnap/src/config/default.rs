use zonesnap_core::models::NormRect;
use zonesnap_core::{Button, DragModifier, Layout, SelectorSettings, Zone};

use super::{Config, Default};

/// Zone ids get the layout id as prefix, so they stay unique across layouts.
fn layout(id: &str, name: &str, zones: &[(&str, NormRect)]) -> Layout {
    let mut layout = Layout::new(
        id,
        zones
            .iter()
            .enumerate()
            .map(|(number, (zone, geometry))| {
                Zone::new(format!("{id}-{zone}"), number + 1, *geometry)
            })
            .collect(),
    );
    layout.name = name.to_owned();
    layout
}

fn default_layouts() -> Vec<Layout> {
    let third = 1.0 / 3.0;
    vec![
        layout(
            "halves",
            "Halves",
            &[
                ("left", NormRect::new(0.0, 0.0, 0.5, 1.0)),
                ("right", NormRect::new(0.5, 0.0, 0.5, 1.0)),
            ],
        ),
        layout(
            "thirds",
            "Thirds",
            &[
                ("left", NormRect::new(0.0, 0.0, third, 1.0)),
                ("center", NormRect::new(third, 0.0, third, 1.0)),
                ("right", NormRect::new(2.0 * third, 0.0, 1.0 - 2.0 * third, 1.0)),
            ],
        ),
        layout(
            "quarters",
            "Quarters",
            &[
                ("top-left", NormRect::new(0.0, 0.0, 0.5, 0.5)),
                ("top-right", NormRect::new(0.5, 0.0, 0.5, 0.5)),
                ("bottom-left", NormRect::new(0.0, 0.5, 0.5, 0.5)),
                ("bottom-right", NormRect::new(0.5, 0.5, 0.5, 0.5)),
            ],
        ),
    ]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_owned(),
            layouts: default_layouts(),
            default_layout: None,
            screen_layouts: vec![],
            zone_modifier: DragModifier::Alt,
            multi_zone_modifier: DragModifier::CtrlAlt,
            span_modifier: DragModifier::AltMeta,
            activation_button: Button::empty(),
            excluded_applications: vec![],
            excluded_window_classes: vec![],
            zone_padding: 8,
            outer_gap: 8,
            disabled_monitors: vec![],
            selector: SelectorSettings::default(),
            restore_size_on_unsnap: true,
            snap_assist_enabled: false,
            adjacency_threshold: 20,
            snap_match_size_tolerance: 10,
            snap_match_position_tolerance: 50,
        }
    }
}
