//! Pure display classifiers and unit conversion.
//!
//! Everything here is total: any float temperature and any integer weather
//! code maps to some symbol, out-of-range codes fall into the Unknown bucket.

/// Emoji bucket for a temperature in °C. Exclusive upper bounds at 0/10/20/30.
pub fn temperature_emoji(celsius: f32) -> &'static str {
    match celsius {
        t if t < 0.0 => "\u{1f976}",
        t if t < 10.0 => "\u{2744}\u{fe0f}",
        t if t < 20.0 => "\u{1f60e}",
        t if t < 30.0 => "\u{2600}\u{fe0f}",
        _ => "\u{1f525}",
    }
}

/// °C → °F. Rounding is applied at display time only.
pub fn fahrenheit_of(celsius: f32) -> f32 {
    celsius * 9.0 / 5.0 + 32.0
}

/// Coarse condition bucket for a WMO weather code.
///
/// Emoji and description both go through this enum, so they can never
/// disagree about which bucket a code lands in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Condition {
    Clear,
    Fog,
    Rain,
    Snow,
    RainShowers,
    SnowShowers,
    Thunderstorm,
    Unknown,
}

impl Condition {
    /// Map WMO weather code to condition
    pub fn from_code(code: i32) -> Self {
        match code {
            0..=3 => Condition::Clear,
            45..=48 => Condition::Fog,
            51..=67 => Condition::Rain,
            71..=77 => Condition::Snow,
            80..=82 => Condition::RainShowers,
            85..=86 => Condition::SnowShowers,
            95..=99 => Condition::Thunderstorm,
            _ => Condition::Unknown,
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Condition::Clear => "\u{2600}\u{fe0f}",
            Condition::Fog => "\u{1f32b}\u{fe0f}",
            Condition::Rain => "\u{1f327}\u{fe0f}",
            Condition::Snow => "\u{2744}\u{fe0f}",
            Condition::RainShowers => "\u{1f326}\u{fe0f}",
            Condition::SnowShowers => "\u{1f328}\u{fe0f}",
            Condition::Thunderstorm => "\u{26c8}\u{fe0f}",
            Condition::Unknown => "\u{1f321}\u{fe0f}",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Condition::Clear => "Clear to partly cloudy",
            Condition::Fog => "Foggy",
            Condition::Rain => "Rainy",
            Condition::Snow => "Snowy",
            Condition::RainShowers => "Rain showers",
            Condition::SnowShowers => "Snow showers",
            Condition::Thunderstorm => "Thunderstorm",
            Condition::Unknown => "Unknown weather",
        }
    }
}

/// Emoji for the given weather code.
pub fn weather_emoji(code: i32) -> &'static str {
    Condition::from_code(code).emoji()
}

/// Human-readable description for the given weather code.
pub fn weather_description(code: i32) -> &'static str {
    Condition::from_code(code).description()
}
