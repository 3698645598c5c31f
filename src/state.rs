//! Application state - single source of truth

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tui_dispatch::DataResource;

/// Current conditions from the Open-Meteo API.
///
/// Immutable once stored; a tile's resource slot is replaced wholesale, never
/// patched field by field.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WeatherSnapshot {
    /// Temperature in °C
    pub temperature: f32,
    /// WMO weather code
    pub weather_code: i32,
    /// Unit string reported by the API ("°C"); carried but not rendered
    pub temperature_unit: String,
}

/// The two shipped widget instances. Same fetch and classifier core, different
/// presentation configuration (see `TileTheme::for_tile`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum TileId {
    Primary,
    Secondary,
}

impl TileId {
    pub const ALL: [TileId; 2] = [TileId::Primary, TileId::Secondary];
}

/// Application state - everything the UI needs to render
#[derive(Clone, Debug, tui_dispatch::DebugState, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppState {
    /// Primary tile lifecycle: Empty → Loading → Loaded/Failed
    #[debug(section = "Weather", label = "Primary", debug_fmt)]
    pub primary: DataResource<WeatherSnapshot>,

    /// Secondary tile lifecycle, independent of the primary
    #[debug(section = "Weather", label = "Secondary", debug_fmt)]
    pub secondary: DataResource<WeatherSnapshot>,
}

impl AppState {
    pub fn tile(&self, id: TileId) -> &DataResource<WeatherSnapshot> {
        match id {
            TileId::Primary => &self.primary,
            TileId::Secondary => &self.secondary,
        }
    }

    pub fn tile_mut(&mut self, id: TileId) -> &mut DataResource<WeatherSnapshot> {
        match id {
            TileId::Primary => &mut self.primary,
            TileId::Secondary => &mut self.secondary,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            primary: DataResource::Empty,
            secondary: DataResource::Empty,
        }
    }
}
