use serde::{Deserialize, Serialize};

/// Interaction mode of a drag, resolved on every move.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragMode {
    /// No modifier held: zones are inactive, the edge selector may show.
    #[default]
    None,
    /// The zone under the cursor.
    Single,
    /// The zone under the cursor plus its neighbours.
    Multi,
    /// Every zone the cursor touched during the drag.
    Span,
}
