pub mod weather_display;
pub mod weather_tile;

// Re-export core Component trait
pub use tui_dispatch::Component;

pub use weather_display::{ERROR_ICON, WeatherDisplay, WeatherDisplayProps};
pub use weather_tile::{LOADING_TEXT, TileTheme, WeatherTile, WeatherTileProps};
