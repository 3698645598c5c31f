use crossterm::event::KeyCode;
use ratatui::layout::{Constraint, Layout};
use ratatui::prelude::{Frame, Rect};
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    StatusBar, StatusBarHint, StatusBarProps, StatusBarSection, StatusBarStyle,
};

use super::{Component, TileTheme, WeatherTile, WeatherTileProps};
use crate::action::Action;
use crate::state::{AppState, TileId};

pub const ERROR_ICON: &str = "\u{26a0}\u{fe0f}";

/// Props for WeatherDisplay - read-only view of state
pub struct WeatherDisplayProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

/// The top-level display: both weather tiles side by side plus a help bar
#[derive(Default)]
pub struct WeatherDisplay;

impl Component<Action> for WeatherDisplay {
    type Props<'a> = WeatherDisplayProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return None;
        }

        match event {
            EventKind::Key(key) => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
                _ => None,
            },
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: WeatherDisplayProps<'_>) {
        let chunks = Layout::vertical([
            Constraint::Min(1),    // Tiles
            Constraint::Length(1), // Help bar
        ])
        .split(area);

        let tile_areas =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(chunks[0]);

        for (tile, tile_area) in TileId::ALL.into_iter().zip(tile_areas.iter()) {
            let mut component = WeatherTile;
            component.render(
                frame,
                *tile_area,
                WeatherTileProps {
                    resource: props.state.tile(tile),
                    theme: TileTheme::for_tile(tile),
                },
            );
        }

        let mut status_bar = StatusBar::new();
        <StatusBar as Component<Action>>::render(
            &mut status_bar,
            frame,
            chunks[1],
            StatusBarProps {
                left: StatusBarSection::empty(),
                center: StatusBarSection::hints(&[StatusBarHint::new("q", "quit")]),
                right: StatusBarSection::empty(),
                style: StatusBarStyle::default(),
                is_focused: false,
            },
        );
    }
}
