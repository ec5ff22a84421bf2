use super::LayoutProvider;
use crate::errors::{Result, ZoneSnapError};
use crate::models::{Layout, LayoutId, ScreenId};
use std::collections::HashMap;

/// The [`LayoutManager`] holds a fixed set of [`Layout`]s and which screen uses which.
#[derive(Debug, Clone, Default)]
pub struct LayoutManager {
    /// All the available layouts, in the order the selector shows them.
    available: Vec<Layout>,

    /// Screens with a layout other than the default.
    assignments: HashMap<ScreenId, LayoutId>,

    /// Layout for screens without an assignment. The first layout unless set.
    default: Option<LayoutId>,
}

impl LayoutManager {
    /// Create a new [`LayoutManager`].
    ///
    /// # Errors
    ///
    /// Errors when any layout fails [`Layout::validate`], or when a layout id or a zone id is
    /// used by more than one layout.
    pub fn new(layouts: Vec<Layout>) -> Result<Self> {
        let mut zone_owners: HashMap<&str, &str> = HashMap::new();
        for (index, layout) in layouts.iter().enumerate() {
            layout.validate()?;
            if layouts[..index].iter().any(|l| l.id == layout.id) {
                return Err(ZoneSnapError::InvalidLayout {
                    layout: layout.id.clone(),
                    reason: "the layout id is used twice".to_owned(),
                });
            }
            for zone in &layout.zones {
                if let Some(owner) = zone_owners.insert(&zone.id, &layout.id) {
                    return Err(ZoneSnapError::InvalidLayout {
                        layout: layout.id.clone(),
                        reason: format!("zone id {} is also used by layout {owner}", zone.id),
                    });
                }
            }
        }
        if layouts.is_empty() {
            tracing::warn!("No layouts were loaded, zones will stay inactive");
        }
        tracing::debug!(
            "The available layouts are: {:?}",
            layouts.iter().map(|l| &l.id).collect::<Vec<_>>()
        );
        Ok(Self {
            default: layouts.first().map(|l| l.id.clone()),
            available: layouts,
            assignments: HashMap::new(),
        })
    }

    /// Use `layout` on `screen`. Returns false when no such layout exists.
    pub fn assign(&mut self, screen: impl Into<ScreenId>, layout: &str) -> bool {
        let screen = screen.into();
        if self.get(layout).is_none() {
            tracing::warn!("There is no layout with the id {:?} for {}", layout, screen);
            return false;
        }
        self.assignments.insert(screen, layout.to_owned());
        true
    }

    /// Layout for screens without an assignment. Returns false when no such layout exists.
    pub fn set_default(&mut self, layout: &str) -> bool {
        if self.get(layout).is_none() {
            tracing::warn!("There is no layout with the id {:?}", layout);
            return false;
        }
        self.default = Some(layout.to_owned());
        true
    }

    fn get(&self, id: &str) -> Option<&Layout> {
        self.available.iter().find(|l| l.id == id)
    }
}

impl LayoutProvider for LayoutManager {
    fn layout_for_screen(&self, screen: &str) -> Option<Layout> {
        self.assignments
            .get(screen)
            .or(self.default.as_ref())
            .and_then(|id| self.get(id))
            .cloned()
    }

    fn layout(&self, id: &str) -> Option<Layout> {
        self.get(id).cloned()
    }

    fn layout_count(&self) -> usize {
        self.available.len()
    }
}
