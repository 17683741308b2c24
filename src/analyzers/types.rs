//! Output shapes of the aggregation views.
//!
//! Field names serialize in camelCase, the shape the dashboard front end reads.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Medal totals for one athlete of one country.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AthleteAggregate {
    pub athlete: String,
    pub country: String,
    pub total_medals: usize,
    pub gold_medals: usize,
    pub silver_medals: usize,
    pub bronze_medals: usize,
    pub sports: Vec<String>,
    pub years: Vec<i32>,
    pub events: Vec<String>,
}

/// Medal totals for one country.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryAggregate {
    pub country: String,
    pub total_medals: usize,
    pub gold_medals: usize,
    pub silver_medals: usize,
    pub bronze_medals: usize,
}

/// Medal count for a single year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearMedals {
    pub year: i32,
    pub medals: usize,
}

/// First and last year observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearRange {
    pub start: i32,
    pub end: i32,
}

/// Medals one country won within a sport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryMedals {
    pub country: String,
    pub medals: usize,
}

/// Per-sport totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SportAggregate {
    pub sport: String,
    pub total_medals: usize,
    pub unique_events: usize,
    pub unique_athletes: usize,
    pub unique_countries: usize,
    pub male_participation: usize,
    pub female_participation: usize,
    pub year_range: YearRange,
    pub top_countries: Vec<CountryMedals>,
}

/// Per-year totals for the trends view.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearAggregate {
    pub year: i32,
    pub total_medals: usize,
    pub unique_countries: usize,
    pub unique_athletes: usize,
    pub unique_sports: usize,
    pub male_participation: usize,
    pub female_participation: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenderOverall {
    pub male_total: usize,
    pub female_total: usize,
    pub male_percentage: f64,
    pub female_percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SportGender {
    pub sport: String,
    pub male_count: usize,
    pub female_count: usize,
    pub male_percentage: f64,
    pub female_percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearGender {
    pub year: i32,
    pub male_count: usize,
    pub female_count: usize,
    pub male_percentage: f64,
    pub female_percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryGender {
    pub country: String,
    pub male_count: usize,
    pub female_count: usize,
    pub total_medals: usize,
}

/// The four gender breakdowns, computed in one pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenderAggregate {
    pub overall: GenderOverall,
    pub by_sport: Vec<SportGender>,
    pub by_year: Vec<YearGender>,
    pub by_country: Vec<CountryGender>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryStats {
    pub total_medals: usize,
    pub unique_athletes: usize,
    pub unique_countries: usize,
    pub unique_sports: usize,
    pub year_range: YearRange,
}

/// Landing page payload: headline numbers plus the top lists.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub summary: SummaryStats,
    pub top_countries: Vec<CountryAggregate>,
    pub top_athletes: Vec<AthleteAggregate>,
    pub medals_by_year: Vec<YearMedals>,
}

/// Outcome of publishing one view.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishedView {
    pub view: String,
    pub key: String,
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Listing of everything a publish run produced, written as `aggregates/index.json`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishIndex {
    pub generated_at: DateTime<Utc>,
    pub views: Vec<PublishedView>,
}
