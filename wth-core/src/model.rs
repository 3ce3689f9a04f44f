use chrono::{NaiveDate, NaiveDateTime};

/// Current conditions at a single place.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherSnapshot {
    pub location_name: String,
    pub country: String,
    pub temperature_c: f64,
    pub wind_speed_mps: f64,
    /// Precipitation over the last hour, 0 when the provider omits it.
    pub rain_1h_mm: f64,
    pub condition: String,
}

/// One entry of the provider's time series (3-hour resolution).
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastPoint {
    pub timestamp: NaiveDateTime,
    pub temperature_c: f64,
    pub wind_speed_mps: f64,
    /// Precipitation over the 3-hour window, 0 when the provider omits it.
    pub rain_3h_mm: f64,
    pub condition: String,
}

impl ForecastPoint {
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Forecast {
    pub location_name: String,
    pub country: String,
    pub points: Vec<ForecastPoint>,
}
