//! Per-tile tri-state view: loading, error, or current conditions.

use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Padding, Paragraph},
};
use tui_dispatch::DataResource;

use super::{Component, ERROR_ICON};
use crate::action::Action;
use crate::classify;
use crate::state::{TileId, WeatherSnapshot};

/// Literal loading indicator; no spinner.
pub const LOADING_TEXT: &str = "Loading weather data...";

/// Presentation configuration for one tile. Behavior is identical across
/// tiles; only unit display and dressing differ.
pub struct TileTheme {
    pub title: &'static str,
    pub accent: Color,
    pub border: BorderType,
    pub padding: Padding,
    pub show_fahrenheit: bool,
}

/// Celsius-only tile.
pub const CELSIUS_TILE: TileTheme = TileTheme {
    title: "Melbourne Weather",
    accent: Color::Cyan,
    border: BorderType::Rounded,
    padding: Padding::uniform(1),
    show_fahrenheit: false,
};

/// Dual-unit tile: same data, Fahrenheit appended at display time.
pub const DUAL_UNIT_TILE: TileTheme = TileTheme {
    title: "Melbourne Weather",
    accent: Color::Yellow,
    border: BorderType::Double,
    padding: Padding::horizontal(2),
    show_fahrenheit: true,
};

impl TileTheme {
    /// Configuration for each shipped tile.
    pub fn for_tile(id: TileId) -> &'static TileTheme {
        match id {
            TileId::Primary => &CELSIUS_TILE,
            TileId::Secondary => &DUAL_UNIT_TILE,
        }
    }
}

/// Rounded display temperature: "22°C", or "22°C / 72°F" when the theme
/// shows both units. Conversion stays exact; rounding happens here only.
pub fn format_temperature(snapshot: &WeatherSnapshot, show_fahrenheit: bool) -> String {
    let celsius = snapshot.temperature.round() as i32;
    if show_fahrenheit {
        let fahrenheit = classify::fahrenheit_of(snapshot.temperature).round() as i32;
        format!("{}°C / {}°F", celsius, fahrenheit)
    } else {
        format!("{}°C", celsius)
    }
}

/// Props for WeatherTile - read-only view of one tile's lifecycle
pub struct WeatherTileProps<'a> {
    pub resource: &'a DataResource<WeatherSnapshot>,
    pub theme: &'a TileTheme,
}

/// One self-contained weather tile
#[derive(Default)]
pub struct WeatherTile;

impl Component<Action> for WeatherTile {
    type Props<'a> = WeatherTileProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let block = Block::bordered()
            .border_type(props.theme.border)
            .border_style(Style::default().fg(props.theme.accent))
            .padding(props.theme.padding)
            .title(Line::from(props.theme.title).centered());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        match props.resource {
            // Empty only exists for the instant before the startup fetch runs
            DataResource::Empty | DataResource::Loading => render_loading(frame, inner),
            DataResource::Failed(message) => render_error(frame, inner, message),
            DataResource::Loaded(snapshot) => {
                render_ready(frame, inner, snapshot, props.theme);
            }
        }
    }
}

fn render_loading(frame: &mut Frame, area: Rect) {
    let chunks = Layout::vertical([Constraint::Length(1)])
        .flex(Flex::Center)
        .split(area);
    let line = Line::from(Span::styled(
        LOADING_TEXT,
        Style::default().fg(Color::DarkGray),
    ))
    .centered();
    frame.render_widget(Paragraph::new(line), chunks[0]);
}

fn render_error(frame: &mut Frame, area: Rect, message: &str) {
    let chunks = Layout::vertical([
        Constraint::Length(1), // icon
        Constraint::Length(1), // blank
        Constraint::Length(1), // message
    ])
    .flex(Flex::Center)
    .split(area);

    frame.render_widget(Paragraph::new(Line::from(ERROR_ICON).centered()), chunks[0]);
    frame.render_widget(
        Paragraph::new(
            Line::from(Span::styled(
                message.to_string(),
                Style::default().fg(Color::Red),
            ))
            .centered(),
        ),
        chunks[2],
    );
}

fn render_ready(frame: &mut Frame, area: Rect, snapshot: &WeatherSnapshot, theme: &TileTheme) {
    let chunks = Layout::vertical([
        Constraint::Length(1), // temperature emoji
        Constraint::Length(1), // blank
        Constraint::Length(1), // temperature
        Constraint::Length(1), // blank
        Constraint::Length(1), // condition
    ])
    .flex(Flex::Center)
    .split(area);

    let temp_emoji = Line::from(classify::temperature_emoji(snapshot.temperature)).centered();
    frame.render_widget(Paragraph::new(temp_emoji), chunks[0]);

    let temperature = Line::from(Span::styled(
        format_temperature(snapshot, theme.show_fahrenheit),
        Style::default().fg(theme.accent).bold(),
    ))
    .centered();
    frame.render_widget(Paragraph::new(temperature), chunks[2]);

    let condition = Line::from(vec![
        Span::raw(classify::weather_emoji(snapshot.weather_code)),
        Span::raw(" "),
        Span::styled(
            classify::weather_description(snapshot.weather_code),
            Style::default().fg(Color::Gray),
        ),
    ])
    .centered();
    frame.render_widget(Paragraph::new(condition), chunks[4]);
}
