use async_trait::async_trait;
use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, de};
use serde_json::Value;
use tracing::debug;

use crate::{
    config::Endpoints,
    error::{Result, WthError},
    fetch::JsonFetcher,
    model::{Forecast, ForecastPoint, WeatherSnapshot},
};

use super::WeatherProvider;

const DT_TXT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    current_url: String,
    forecast_url: String,
    fetcher: JsonFetcher,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String, endpoints: &Endpoints, fetcher: JsonFetcher) -> Self {
        Self {
            api_key,
            current_url: endpoints.current_url(),
            forecast_url: endpoints.forecast_url(),
            fetcher,
        }
    }

    async fn fetch(&self, url: &str, city: &str) -> Result<Value> {
        debug!(url, city, "querying OpenWeather");

        self.fetcher
            .get_json(
                url,
                &[
                    ("q", city),
                    ("appid", self.api_key.as_str()),
                    ("units", "metric"),
                ],
            )
            .await
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current(&self, city: &str) -> Result<WeatherSnapshot> {
        let body = self.fetch(&self.current_url, city).await?;

        // The current endpoint reports success as a numeric `cod`.
        let ok = body
            .get("cod")
            .and_then(Value::as_f64)
            .is_some_and(|cod| cod == 200.0);
        if !ok {
            return Err(provider_error(&body));
        }

        let parsed: OwCurrentResponse = serde_json::from_value(body)?;

        Ok(WeatherSnapshot {
            location_name: parsed.name,
            country: parsed.sys.country,
            temperature_c: parsed.main.temp,
            wind_speed_mps: parsed.wind.speed,
            rain_1h_mm: parsed.rain.and_then(|r| r.one_hour).unwrap_or(0.0),
            condition: first_description(parsed.weather)?,
        })
    }

    async fn forecast(&self, city: &str) -> Result<Forecast> {
        let body = self.fetch(&self.forecast_url, city).await?;

        // The forecast endpoint reports success as a string `cod`.
        if body.get("cod").and_then(Value::as_str) != Some("200") {
            return Err(provider_error(&body));
        }

        let parsed: OwForecastResponse = serde_json::from_value(body)?;

        let points = parsed
            .list
            .into_iter()
            .map(|entry| {
                Ok(ForecastPoint {
                    timestamp: entry.dt_txt,
                    temperature_c: entry.main.temp,
                    wind_speed_mps: entry.wind.speed,
                    rain_3h_mm: entry.rain.and_then(|r| r.three_hours).unwrap_or(0.0),
                    condition: first_description(entry.weather)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Forecast {
            location_name: parsed.city.name,
            country: parsed.city.country,
            points,
        })
    }
}

fn provider_error(body: &Value) -> WthError {
    let message = match body.get("message") {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => "unknown error".to_string(),
    };

    WthError::Provider { message }
}

fn first_description(weather: Vec<OwWeather>) -> Result<String> {
    weather
        .into_iter()
        .next()
        .map(|w| w.description)
        .ok_or_else(|| WthError::Parse(de::Error::custom("missing weather description")))
}

fn deserialize_dt_txt<'de, D>(deserializer: D) -> std::result::Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    NaiveDateTime::parse_from_str(&raw, DT_TXT_FORMAT).map_err(de::Error::custom)
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwRain {
    #[serde(rename = "1h")]
    one_hour: Option<f64>,
    #[serde(rename = "3h")]
    three_hours: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct OwSys {
    #[serde(default)]
    country: String,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    sys: OwSys,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
    rain: Option<OwRain>,
}

#[derive(Debug, Deserialize)]
struct OwCity {
    name: String,
    #[serde(default)]
    country: String,
}

#[derive(Debug, Deserialize)]
struct OwForecastEntry {
    #[serde(deserialize_with = "deserialize_dt_txt")]
    dt_txt: NaiveDateTime,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
    rain: Option<OwRain>,
}

#[derive(Debug, Deserialize)]
struct OwForecastResponse {
    city: OwCity,
    list: Vec<OwForecastEntry>,
}
