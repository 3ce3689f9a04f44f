use clap::Parser;
use std::io;
use tracing::debug;

use wth_core::{Endpoints, Geolocator, JsonFetcher, ReportMode, Reporter, provider_from_config};

/// `wth [city] [days]`
///
/// There are no flags: anything given is taken as a positional value and
/// malformed input falls back to the defaults.
#[derive(Debug, Parser)]
#[command(
    name = "wth",
    about = "Weather CLI",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    /// City name; detected from the public IP address when omitted.
    #[arg(allow_hyphen_values = true)]
    pub city: Option<String>,

    /// Number of forecast days; current conditions when omitted.
    #[arg(allow_hyphen_values = true)]
    pub days: Option<String>,

    #[arg(hide = true, allow_hyphen_values = true, trailing_var_arg = true)]
    pub rest: Vec<String>,
}

impl Cli {
    pub fn mode(&self) -> ReportMode {
        match parse_days(self.days.as_deref()) {
            Some(days) => ReportMode::Forecast { days },
            None => ReportMode::Current,
        }
    }

    pub async fn run(self, api_key: String) -> anyhow::Result<()> {
        let endpoints = Endpoints::load()?;
        let fetcher = JsonFetcher::with_timeout(endpoints.timeout())?;

        let mode = self.mode();
        let city = Geolocator::new(&endpoints, fetcher.clone())
            .resolve_city(self.city.as_deref())
            .await;
        debug!(%city, ?mode, "resolved request");

        let provider = provider_from_config(api_key, &endpoints, fetcher);
        let mut reporter = Reporter::new(provider, io::stdout().lock(), io::stderr().lock());
        reporter.report(&city, mode).await?;

        Ok(())
    }
}

/// Leading-integer parse: optional whitespace and sign, then digits. Anything
/// else, and zero, means "no forecast". A negative count is passed through.
pub fn parse_days(raw: Option<&str>) -> Option<isize> {
    let raw = raw?.trim_start();
    let (negative, raw) = match raw.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, raw.strip_prefix('+').unwrap_or(raw)),
    };
    let end = raw
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(raw.len());
    let digits = &raw[..end];

    if digits.is_empty() {
        return None;
    }

    let magnitude = digits.parse::<isize>().unwrap_or(isize::MAX);
    let days = if negative { -magnitude } else { magnitude };
    (days != 0).then_some(days)
}
