//! Where the engine gets the layout for a screen from.
mod layout_manager;

use crate::models::Layout;

pub use layout_manager::LayoutManager;

/// Resolves layouts for screens. Queried on every move, so assignments may change mid-drag.
pub trait LayoutProvider {
    fn layout_for_screen(&self, screen: &str) -> Option<Layout>;

    fn layout(&self, id: &str) -> Option<Layout>;

    /// Number of layouts offered in the zone selector.
    fn layout_count(&self) -> usize;
}
