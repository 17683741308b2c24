use indexmap::IndexMap;
use std::collections::BTreeMap;

use crate::analyzers::types::{
    CountryGender, GenderAggregate, GenderOverall, SportGender, YearGender,
};
use crate::analyzers::utility::GenderCounts;
use crate::record::OlympicRecord;

#[derive(Default)]
struct GenderTally<'a> {
    overall: GenderCounts,
    by_sport: IndexMap<&'a str, GenderCounts>,
    by_year: BTreeMap<i32, GenderCounts>,
    by_country: IndexMap<&'a str, (GenderCounts, usize)>,
}

/// Male/female splits overall, by sport, by year and by country.
///
/// Percentages use only the group's male + female count as denominator and
/// are 0 when that count is 0. Sports are ordered by combined count, years
/// ascending (year 0 left out), countries by total medals of any gender.
pub fn aggregate_gender(records: &[OlympicRecord]) -> GenderAggregate {
    let tally = records
        .iter()
        .fold(GenderTally::default(), |mut acc, r| {
            acc.overall.add(&r.gender);

            if !r.sport.is_empty() {
                acc.by_sport
                    .entry(r.sport.as_str())
                    .or_default()
                    .add(&r.gender);
            }

            if r.year != 0 {
                acc.by_year.entry(r.year).or_default().add(&r.gender);
            }

            let (counts, total) = acc.by_country.entry(r.country.as_str()).or_default();
            counts.add(&r.gender);
            *total += 1;

            acc
        });

    let mut by_sport: Vec<SportGender> = tally
        .by_sport
        .into_iter()
        .map(|(sport, counts)| SportGender {
            sport: sport.to_string(),
            male_count: counts.male,
            female_count: counts.female,
            male_percentage: counts.male_pct(),
            female_percentage: counts.female_pct(),
        })
        .collect();
    by_sport.sort_by(|a, b| {
        (b.male_count + b.female_count).cmp(&(a.male_count + a.female_count))
    });

    let by_year = tally
        .by_year
        .into_iter()
        .map(|(year, counts)| YearGender {
            year,
            male_count: counts.male,
            female_count: counts.female,
            male_percentage: counts.male_pct(),
            female_percentage: counts.female_pct(),
        })
        .collect();

    let mut by_country: Vec<CountryGender> = tally
        .by_country
        .into_iter()
        .map(|(country, (counts, total))| CountryGender {
            country: country.to_string(),
            male_count: counts.male,
            female_count: counts.female,
            total_medals: total,
        })
        .collect();
    by_country.sort_by(|a, b| b.total_medals.cmp(&a.total_medals));

    GenderAggregate {
        overall: GenderOverall {
            male_total: tally.overall.male,
            female_total: tally.overall.female,
            male_percentage: tally.overall.male_pct(),
            female_percentage: tally.overall.female_pct(),
        },
        by_sport,
        by_year,
        by_country,
    }
}
