//! Effects - side effects declared by the reducer

use crate::state::TileId;

/// Side effects that can be triggered by actions
#[derive(Debug, Clone)]
pub enum Effect {
    /// Fetch current conditions for the given tile
    FetchWeather { tile: TileId },
}
