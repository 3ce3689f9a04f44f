use serde_json::Value;
use tracing::debug;

use crate::{config::Endpoints, fetch::JsonFetcher};

/// Works out which city to report on when none was given.
#[derive(Debug, Clone)]
pub struct Geolocator {
    url: String,
    fallback_city: String,
    fetcher: JsonFetcher,
}

impl Geolocator {
    pub fn new(endpoints: &Endpoints, fetcher: JsonFetcher) -> Self {
        Self {
            url: endpoints.geolocation.clone(),
            fallback_city: endpoints.fallback_city.clone(),
            fetcher,
        }
    }

    /// Return `explicit` when it is non-empty, otherwise the city reported by
    /// IP geolocation. Any lookup failure yields the fallback city.
    pub async fn resolve_city(&self, explicit: Option<&str>) -> String {
        if let Some(city) = explicit.filter(|c| !c.is_empty()) {
            return city.to_string();
        }

        match self.fetcher.get_json(&self.url, &[]).await {
            Ok(body) => city_field(&body).unwrap_or_else(|| {
                debug!(%body, "geolocation response has no city");
                self.fallback_city.clone()
            }),
            Err(err) => {
                debug!(error = %err, "geolocation lookup failed");
                self.fallback_city.clone()
            }
        }
    }
}

fn city_field(body: &Value) -> Option<String> {
    body.get("city")
        .and_then(Value::as_str)
        .filter(|c| !c.is_empty())
        .map(str::to_string)
}
