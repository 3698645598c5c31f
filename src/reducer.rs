//! Reducer - pure function: (state, action) -> DispatchResult

use tui_dispatch::{DataResource, DispatchResult};

use crate::action::Action;
use crate::effect::Effect;
use crate::state::{AppState, TileId};

/// The reducer handles all state transitions
pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        // ===== Weather actions =====
        Action::WeatherFetch => {
            // One fetch per mount: only Empty tiles start loading. A repeated
            // dispatch (e.g. from a replayed session) is a no-op for tiles
            // that already settled or are in flight.
            let mut result = DispatchResult::unchanged();
            for tile in TileId::ALL {
                let slot = state.tile_mut(tile);
                if slot.is_empty() {
                    *slot = DataResource::Loading;
                    result.changed = true;
                    result.effects.push(Effect::FetchWeather { tile });
                }
            }
            result
        }

        Action::WeatherDidLoad { tile, snapshot } => {
            // Results for a tile that already settled are stale; drop them.
            if state.tile(tile).is_loading() {
                *state.tile_mut(tile) = DataResource::Loaded(snapshot);
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::WeatherDidError { tile, message } => {
            if state.tile(tile).is_loading() {
                *state.tile_mut(tile) = DataResource::Failed(message);
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        // ===== Global actions =====
        Action::Quit => DispatchResult::unchanged(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::WeatherSnapshot;

    fn snapshot() -> WeatherSnapshot {
        WeatherSnapshot {
            temperature: 22.4,
            weather_code: 1,
            temperature_unit: "°C".into(),
        }
    }

    #[test]
    fn test_weather_fetch_sets_both_tiles_loading() {
        let mut state = AppState::default();
        assert!(state.primary.is_empty());
        assert!(state.secondary.is_empty());

        let result = reducer(&mut state, Action::WeatherFetch);

        assert!(result.changed);
        assert!(state.primary.is_loading());
        assert!(state.secondary.is_loading());
        assert_eq!(result.effects.len(), 2);
        assert!(matches!(
            result.effects[0],
            Effect::FetchWeather {
                tile: TileId::Primary
            }
        ));
        assert!(matches!(
            result.effects[1],
            Effect::FetchWeather {
                tile: TileId::Secondary
            }
        ));
    }

    #[test]
    fn test_weather_fetch_is_single_shot() {
        let mut state = AppState::default();
        reducer(&mut state, Action::WeatherFetch);

        // Tiles are in flight; a second fetch must not restart them.
        let result = reducer(&mut state, Action::WeatherFetch);
        assert!(!result.changed);
        assert!(result.effects.is_empty());

        // Settled tiles stay settled too.
        reducer(
            &mut state,
            Action::WeatherDidLoad {
                tile: TileId::Primary,
                snapshot: snapshot(),
            },
        );
        reducer(
            &mut state,
            Action::WeatherDidError {
                tile: TileId::Secondary,
                message: "Failed to fetch weather data".into(),
            },
        );
        let result = reducer(&mut state, Action::WeatherFetch);
        assert!(!result.changed);
        assert!(result.effects.is_empty());
        assert!(state.primary.is_loaded());
        assert!(state.secondary.is_failed());
    }

    #[test]
    fn test_did_load_transitions_only_its_tile() {
        let mut state = AppState::default();
        reducer(&mut state, Action::WeatherFetch);

        let result = reducer(
            &mut state,
            Action::WeatherDidLoad {
                tile: TileId::Primary,
                snapshot: snapshot(),
            },
        );

        assert!(result.changed);
        assert!(state.primary.is_loaded());
        assert_eq!(state.primary.data(), Some(&snapshot()));
        assert!(state.secondary.is_loading());
    }

    #[test]
    fn test_did_error_stores_message() {
        let mut state = AppState::default();
        reducer(&mut state, Action::WeatherFetch);

        let result = reducer(
            &mut state,
            Action::WeatherDidError {
                tile: TileId::Primary,
                message: "Failed to fetch weather data".into(),
            },
        );

        assert!(result.changed);
        assert!(state.primary.is_failed());
        assert_eq!(state.primary.error(), Some("Failed to fetch weather data"));
    }

    #[test]
    fn test_late_results_on_settled_tiles_are_dropped() {
        let mut state = AppState::default();
        reducer(&mut state, Action::WeatherFetch);
        reducer(
            &mut state,
            Action::WeatherDidError {
                tile: TileId::Primary,
                message: "Failed to fetch weather data".into(),
            },
        );

        // A straggling success must not resurrect a failed tile.
        let result = reducer(
            &mut state,
            Action::WeatherDidLoad {
                tile: TileId::Primary,
                snapshot: snapshot(),
            },
        );
        assert!(!result.changed);
        assert!(state.primary.is_failed());

        // And a straggling error must not clobber loaded data.
        reducer(
            &mut state,
            Action::WeatherDidLoad {
                tile: TileId::Secondary,
                snapshot: snapshot(),
            },
        );
        let result = reducer(
            &mut state,
            Action::WeatherDidError {
                tile: TileId::Secondary,
                message: "Failed to fetch weather data".into(),
            },
        );
        assert!(!result.changed);
        assert!(state.secondary.is_loaded());
    }
}
