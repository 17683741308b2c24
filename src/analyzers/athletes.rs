use indexmap::IndexMap;
use std::collections::BTreeSet;

use crate::analyzers::types::AthleteAggregate;
use crate::analyzers::utility::MedalCounts;
use crate::record::OlympicRecord;

#[derive(Default)]
struct AthleteTally {
    medals: MedalCounts,
    sports: BTreeSet<String>,
    years: BTreeSet<i32>,
    events: BTreeSet<String>,
}

impl AthleteTally {
    fn add(&mut self, record: &OlympicRecord) {
        self.medals.add(record.medal);
        if !record.sport.is_empty() {
            self.sports.insert(record.sport.clone());
        }
        self.years.insert(record.year);
        if !record.event.is_empty() {
            self.events.insert(record.event.clone());
        }
    }
}

/// Groups records by `(athlete, country)`.
///
/// Sorted by total medals, descending. Ties keep the order in which the
/// groups first appeared. Sports, years and events come out sorted.
pub fn aggregate_athletes(records: &[OlympicRecord]) -> Vec<AthleteAggregate> {
    let groups = records.iter().fold(
        IndexMap::<(&str, &str), AthleteTally>::new(),
        |mut acc, r| {
            acc.entry((r.athlete.as_str(), r.country.as_str()))
                .or_default()
                .add(r);
            acc
        },
    );

    let mut athletes: Vec<AthleteAggregate> = groups
        .into_iter()
        .map(|((athlete, country), tally)| AthleteAggregate {
            athlete: athlete.to_string(),
            country: country.to_string(),
            total_medals: tally.medals.total,
            gold_medals: tally.medals.gold,
            silver_medals: tally.medals.silver,
            bronze_medals: tally.medals.bronze,
            sports: tally.sports.into_iter().collect(),
            years: tally.years.into_iter().collect(),
            events: tally.events.into_iter().collect(),
        })
        .collect();

    athletes.sort_by(|a, b| b.total_medals.cmp(&a.total_medals));
    athletes
}
