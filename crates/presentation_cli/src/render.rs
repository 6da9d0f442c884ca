//! Plain-text rendering of weather cards

use std::fmt::Write;

use application::{Locale, QueryError, WeatherView};

/// Terminal glyph for an icon name from the condition asset table
pub fn glyph(icon: &str) -> &'static str {
    match icon {
        "sun" => "☀️",
        "cloud" => "☁️",
        "cloud-rain" => "🌧️",
        "cloud-drizzle" => "🌦️",
        "cloud-lightning" => "⛈️",
        "snowflake" => "❄️",
        "cloud-fog" => "🌫️",
        _ => "⛅",
    }
}

/// Current card followed by one line per forecast day
pub fn render_view(view: &WeatherView, locale: Locale) -> String {
    let t = locale.messages();
    let current = &view.current;
    let mut out = String::new();

    let _ = writeln!(out, "{} {}", glyph(&current.assets.icon), current.location);
    let _ = writeln!(out, "   {}°C  {}", current.temperature, current.description);
    let _ = writeln!(
        out,
        "   {}: {}%  {}: {} km/h",
        t.humidity_label, current.humidity, t.wind_label, current.wind_kmh
    );

    if !view.forecast.is_empty() {
        let _ = writeln!(out, "\n{}", t.forecast_heading);
        for day in &view.forecast {
            let _ = writeln!(
                out,
                "   {:<4} {}  {:>3}°C",
                day.weekday,
                glyph(&day.icon),
                day.temperature
            );
        }
    }

    out
}

/// Localized error toast
pub fn render_error(error: &QueryError, locale: Locale) -> String {
    format!("⚠️  {}: {}", error.title(locale), error.user_message(locale))
}
