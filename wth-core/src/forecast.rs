//! Grouping of forecast samples into calendar days and per-day statistics.

use chrono::NaiveDate;
use std::collections::HashMap;

use crate::model::ForecastPoint;

/// All samples sharing one calendar date, in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct DayAggregate {
    pub date: NaiveDate,
    pub temperatures: Vec<f64>,
    pub wind_speeds: Vec<f64>,
    pub rains: Vec<f64>,
    pub conditions: Vec<String>,
}

impl DayAggregate {
    fn new(date: NaiveDate) -> Self {
        Self {
            date,
            temperatures: Vec::new(),
            wind_speeds: Vec::new(),
            rains: Vec::new(),
            conditions: Vec::new(),
        }
    }

    fn push(&mut self, point: &ForecastPoint) {
        self.temperatures.push(point.temperature_c);
        self.wind_speeds.push(point.wind_speed_mps);
        self.rains.push(point.rain_3h_mm);
        self.conditions.push(point.condition.clone());
    }

    pub fn len(&self) -> usize {
        self.temperatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.temperatures.is_empty()
    }
}

/// Summary of one day. All numbers are rounded to one decimal place.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyReport {
    pub date: NaiveDate,
    pub min_temp: f64,
    pub max_temp: f64,
    pub avg_temp: f64,
    pub avg_wind: f64,
    pub total_rain: f64,
    pub condition: String,
}

impl From<&DayAggregate> for DailyReport {
    fn from(day: &DayAggregate) -> Self {
        let min_temp = day.temperatures.iter().copied().fold(f64::INFINITY, f64::min);
        let max_temp = day.temperatures.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Self {
            date: day.date,
            min_temp: round1(min_temp),
            max_temp: round1(max_temp),
            avg_temp: round1(mean(&day.temperatures)),
            avg_wind: round1(mean(&day.wind_speeds)),
            total_rain: round1(day.rains.iter().sum()),
            condition: representative_condition(&day.conditions).unwrap_or_default(),
        }
    }
}

/// Group points by calendar date. Days appear in the order their date is first
/// seen, which is not necessarily chronological.
pub fn group_by_day(points: &[ForecastPoint]) -> Vec<DayAggregate> {
    let mut days: Vec<DayAggregate> = Vec::new();
    let mut index: HashMap<NaiveDate, usize> = HashMap::new();

    for point in points {
        let date = point.date();
        let slot = *index.entry(date).or_insert_with(|| {
            days.push(DayAggregate::new(date));
            days.len() - 1
        });
        days[slot].push(point);
    }

    days
}

/// Reports for the first `days` distinct dates. A negative count keeps all
/// but the last `|days|` dates.
pub fn daily_reports(points: &[ForecastPoint], days: isize) -> Vec<DailyReport> {
    let grouped = group_by_day(points);
    let keep = if days >= 0 {
        days.unsigned_abs()
    } else {
        grouped.len().saturating_sub(days.unsigned_abs())
    };

    grouped.iter().take(keep).map(DailyReport::from).collect()
}

/// The most frequent description. Descriptions are stably sorted by ascending
/// count and the last one wins, so among equally frequent descriptions the one
/// occurring last in the input is chosen.
pub fn representative_condition(descriptions: &[String]) -> Option<String> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for d in descriptions {
        *counts.entry(d.as_str()).or_default() += 1;
    }

    let mut ranked: Vec<&str> = descriptions.iter().map(String::as_str).collect();
    ranked.sort_by_key(|d| counts[d]);
    ranked.pop().map(str::to_string)
}

/// One decimal place, decided on the exact binary value: 0.15 is stored as
/// 0.1499.. and becomes 0.1. Exact midpoints (fraction .25 or .75) round away
/// from zero.
pub(crate) fn round1(value: f64) -> f64 {
    let midpoint = (value * 4.0).fract() == 0.0 && (value * 2.0).fract() != 0.0;
    if midpoint {
        return (value * 10.0).round() / 10.0;
    }

    format!("{value:.1}").parse().unwrap_or(value)
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}
