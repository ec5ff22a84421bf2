//! Pure helpers the drag handlers are built from.
pub mod edge_trigger;
pub mod geometry;
pub mod modifier_resolver;
pub mod modmask_lookup;
