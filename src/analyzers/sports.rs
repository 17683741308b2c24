use indexmap::IndexMap;
use std::collections::{BTreeSet, HashSet};

use crate::analyzers::types::{CountryMedals, SportAggregate, YearRange};
use crate::analyzers::utility::{FIRST_YEAR, GenderCounts, LAST_YEAR};
use crate::record::OlympicRecord;

#[derive(Default)]
struct SportTally<'a> {
    total: usize,
    events: HashSet<&'a str>,
    athletes: HashSet<&'a str>,
    countries: IndexMap<&'a str, usize>,
    gender: GenderCounts,
    years: BTreeSet<i32>,
}

impl<'a> SportTally<'a> {
    fn add(&mut self, record: &'a OlympicRecord) {
        self.total += 1;
        if !record.event.is_empty() {
            self.events.insert(record.event.as_str());
        }
        self.athletes.insert(record.athlete.as_str());
        *self.countries.entry(record.country.as_str()).or_default() += 1;
        self.years.insert(record.year);
        self.gender.add(&record.gender);
    }

    /// Each end falls back on its own when it is year 0 ("no year").
    fn year_range(&self) -> YearRange {
        let or_default = |year: Option<&i32>, default: i32| match year.copied() {
            Some(year) if year != 0 => year,
            _ => default,
        };
        YearRange {
            start: or_default(self.years.first(), FIRST_YEAR),
            end: or_default(self.years.last(), LAST_YEAR),
        }
    }
}

/// Groups records with a non-empty sport, most medals first.
///
/// Each entry carries its top countries (most medals first, ties in
/// first-seen order) and the first/last year seen. An end that is year 0
/// falls back to 1976 or 2008 respectively.
pub fn aggregate_sports(records: &[OlympicRecord]) -> Vec<SportAggregate> {
    let groups = records
        .iter()
        .filter(|r| !r.sport.is_empty())
        .fold(IndexMap::<&str, SportTally>::new(), |mut acc, r| {
            acc.entry(r.sport.as_str()).or_default().add(r);
            acc
        });

    let mut sports: Vec<SportAggregate> = groups
        .into_iter()
        .map(|(sport, tally)| {
            let year_range = tally.year_range();

            let mut top_countries: Vec<CountryMedals> = tally
                .countries
                .iter()
                .map(|(country, medals)| CountryMedals {
                    country: country.to_string(),
                    medals: *medals,
                })
                .collect();
            top_countries.sort_by(|a, b| b.medals.cmp(&a.medals));

            SportAggregate {
                sport: sport.to_string(),
                total_medals: tally.total,
                unique_events: tally.events.len(),
                unique_athletes: tally.athletes.len(),
                unique_countries: tally.countries.len(),
                male_participation: tally.gender.male,
                female_participation: tally.gender.female,
                year_range,
                top_countries,
            }
        })
        .collect();

    sports.sort_by(|a, b| b.total_medals.cmp(&a.total_medals));
    sports
}
