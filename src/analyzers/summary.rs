use std::collections::HashSet;

use crate::analyzers::athletes::aggregate_athletes;
use crate::analyzers::countries::aggregate_countries;
use crate::analyzers::trends::medals_by_year;
use crate::analyzers::types::{Summary, SummaryStats, YearRange};
use crate::analyzers::utility::{FIRST_YEAR, LAST_YEAR};
use crate::record::OlympicRecord;

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> usize {
    values.filter(|v| !v.is_empty()).collect::<HashSet<_>>().len()
}

/// Headline numbers, the top `limit` countries and athletes, and medals per year.
pub fn summarize(records: &[OlympicRecord], limit: usize) -> Summary {
    let year_range = match (
        records.iter().map(|r| r.year).min(),
        records.iter().map(|r| r.year).max(),
    ) {
        (Some(start), Some(end)) => YearRange { start, end },
        _ => YearRange {
            start: FIRST_YEAR,
            end: LAST_YEAR,
        },
    };

    let summary = SummaryStats {
        total_medals: records.len(),
        unique_athletes: distinct(records.iter().map(|r| r.athlete.as_str())),
        unique_countries: distinct(records.iter().map(|r| r.country.as_str())),
        unique_sports: distinct(records.iter().map(|r| r.sport.as_str())),
        year_range,
    };

    let mut top_countries = aggregate_countries(records);
    top_countries.truncate(limit);

    let mut top_athletes = aggregate_athletes(records);
    top_athletes.truncate(limit);

    Summary {
        summary,
        top_countries,
        top_athletes,
        medals_by_year: medals_by_year(records),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::test_support::medal;
    use crate::record::Medal;

    #[test]
    fn test_summary_counts() {
        let records = vec![
            medal("A", "USA", "Judo", 1980, "Men", Medal::Gold),
            medal("A", "Canada", "Judo", 1992, "Men", Medal::Gold),
            medal("B", "USA", "", 2008, "Women", Medal::Bronze),
        ];

        let summary = summarize(&records, 10);
        assert_eq!(summary.summary.total_medals, 3);
        assert_eq!(summary.summary.unique_athletes, 2);
        assert_eq!(summary.summary.unique_countries, 2);
        assert_eq!(summary.summary.unique_sports, 1);
        assert_eq!(
            summary.summary.year_range,
            YearRange {
                start: 1980,
                end: 2008
            }
        );
        assert_eq!(summary.medals_by_year.len(), 3);
    }

    #[test]
    fn test_summary_limits_top_lists() {
        let records: Vec<_> = (0..15)
            .map(|i| {
                medal(
                    &format!("athlete {i}"),
                    &format!("country {i}"),
                    "Judo",
                    2000,
                    "Men",
                    Medal::Gold,
                )
            })
            .collect();

        let summary = summarize(&records, 10);
        assert_eq!(summary.top_countries.len(), 10);
        assert_eq!(summary.top_athletes.len(), 10);
        assert_eq!(summary.top_countries[0].country, "country 0");
    }

    #[test]
    fn test_summary_of_nothing_uses_default_range() {
        let summary = summarize(&[], 10);
        assert_eq!(summary.summary.total_medals, 0);
        assert_eq!(
            summary.summary.year_range,
            YearRange {
                start: 1976,
                end: 2008
            }
        );
    }
}
