//! Actions with category inference and async result variants

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::state::{TileId, WeatherSnapshot};

/// Application actions with automatic category inference
#[derive(tui_dispatch::Action, Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[action(infer_categories)]
pub enum Action {
    // ===== Weather category =====
    /// Intent: issue the one-per-mount fetch for every empty tile
    WeatherFetch,

    /// Result: snapshot arrived for a tile
    WeatherDidLoad {
        tile: TileId,
        snapshot: WeatherSnapshot,
    },

    /// Result: fetch failed for a tile
    WeatherDidError { tile: TileId, message: String },

    // ===== Uncategorized (global) =====
    /// Exit the application
    Quit,
}
