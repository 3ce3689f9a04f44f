use std::io::{self, Write};
use tracing::{debug, info};

use crate::{
    error::WthError,
    forecast::{daily_reports, round1},
    format::{bold, color_condition, color_rain, color_temp, color_wind},
    model::{Forecast, WeatherSnapshot},
    provider::WeatherProvider,
};

const RULE: &str = "------------------------------------------------------";

/// What to show for a resolved city.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportMode {
    Current,
    /// Negative `days` drops that many dates from the end instead.
    Forecast { days: isize },
}

pub fn render_current(weather: &WeatherSnapshot) -> String {
    let mut s = String::new();
    s.push_str(&format!(
        "📍 Current Weather in {}, {}\n",
        weather.location_name, weather.country
    ));
    s.push_str(RULE);
    s.push_str("\n\n");
    s.push_str(&format!(
        "🌡️ Temperature: {}\n",
        color_temp(round1(weather.temperature_c))
    ));
    s.push_str(&format!("💨 Wind: {}\n", color_wind(round1(weather.wind_speed_mps))));
    s.push_str(&format!("🌧️ Rain: {}\n", color_rain(weather.rain_1h_mm)));
    s.push_str(&format!("☁️ Condition: {}\n", color_condition(&weather.condition)));
    s
}

/// One block per day for the first `days` dates of the forecast.
pub fn render_forecast(forecast: &Forecast, days: isize) -> String {
    let mut s = String::new();
    s.push_str(&format!(
        "📅 Forecast for {}, {}\n",
        forecast.location_name, forecast.country
    ));
    s.push_str(RULE);
    s.push_str("\n\n");

    for day in daily_reports(&forecast.points, days) {
        let weekday = day.date.format("%A").to_string();
        s.push_str(&format!("{} — {}\n", bold(&weekday), day.date.format("%Y-%m-%d")));
        s.push_str(&format!(
            "🌡️ Min Temp: {} | Max Temp: {} | Avg Temp: {}\n",
            color_temp(day.min_temp),
            color_temp(day.max_temp),
            color_temp(day.avg_temp),
        ));
        s.push_str(&format!(
            "💨 Wind: {} | 🌧️ Rain: {} | ☁️ Condition: {}\n",
            color_wind(day.avg_wind),
            color_rain(day.total_rain),
            color_condition(&day.condition),
        ));
        s.push('\n');
    }
    s
}

/// Fetches reports and writes them out.
///
/// Report output and provider-signalled errors go to `out`; transport and
/// parse failures go to `err`. None of them stop the caller.
#[derive(Debug)]
pub struct Reporter<O, E> {
    provider: Box<dyn WeatherProvider>,
    out: O,
    err: E,
}

impl<O: Write, E: Write> Reporter<O, E> {
    pub fn new(provider: Box<dyn WeatherProvider>, out: O, err: E) -> Self {
        Self { provider, out, err }
    }

    pub async fn report(&mut self, city: &str, mode: ReportMode) -> io::Result<()> {
        match mode {
            ReportMode::Current => self.current(city).await,
            ReportMode::Forecast { days } => self.forecast(city, days).await,
        }
    }

    pub async fn current(&mut self, city: &str) -> io::Result<()> {
        info!(city, "fetching current weather");
        match self.provider.current(city).await {
            Ok(weather) => self.out.write_all(render_current(&weather).as_bytes()),
            Err(e) => self.failure("current weather", e),
        }
    }

    pub async fn forecast(&mut self, city: &str, days: isize) -> io::Result<()> {
        info!(city, days, "fetching forecast");
        match self.provider.forecast(city).await {
            Ok(forecast) => self
                .out
                .write_all(render_forecast(&forecast, days).as_bytes()),
            Err(e) => self.failure("forecast", e),
        }
    }

    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }

    fn failure(&mut self, what: &str, e: WthError) -> io::Result<()> {
        debug!(error = %e, "{what} request failed");
        match e {
            WthError::Provider { message } => writeln!(self.out, "❌ Error: {message}"),
            other => writeln!(self.err, "❌ Failed to fetch {what} data: {other}"),
        }
    }
}
