use std::collections::{BTreeMap, HashSet};

use crate::analyzers::types::{YearAggregate, YearMedals};
use crate::analyzers::utility::GenderCounts;
use crate::record::OlympicRecord;

#[derive(Default)]
struct YearTally<'a> {
    total: usize,
    countries: HashSet<&'a str>,
    athletes: HashSet<&'a str>,
    sports: HashSet<&'a str>,
    gender: GenderCounts,
}

/// Per-year totals, oldest year first. Records with year 0 are left out.
pub fn aggregate_years(records: &[OlympicRecord]) -> Vec<YearAggregate> {
    let groups = records.iter().filter(|r| r.year != 0).fold(
        BTreeMap::<i32, YearTally>::new(),
        |mut acc, r| {
            let tally = acc.entry(r.year).or_default();
            tally.total += 1;
            tally.countries.insert(r.country.as_str());
            tally.athletes.insert(r.athlete.as_str());
            if !r.sport.is_empty() {
                tally.sports.insert(r.sport.as_str());
            }
            tally.gender.add(&r.gender);
            acc
        },
    );

    groups
        .into_iter()
        .map(|(year, tally)| YearAggregate {
            year,
            total_medals: tally.total,
            unique_countries: tally.countries.len(),
            unique_athletes: tally.athletes.len(),
            unique_sports: tally.sports.len(),
            male_participation: tally.gender.male,
            female_participation: tally.gender.female,
        })
        .collect()
}

/// Medal count for every year present, oldest first.
pub fn medals_by_year(records: &[OlympicRecord]) -> Vec<YearMedals> {
    records
        .iter()
        .fold(BTreeMap::<i32, usize>::new(), |mut acc, r| {
            *acc.entry(r.year).or_default() += 1;
            acc
        })
        .into_iter()
        .map(|(year, medals)| YearMedals { year, medals })
        .collect()
}
