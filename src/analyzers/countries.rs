use indexmap::IndexMap;
use std::collections::BTreeMap;

use crate::analyzers::types::{CountryAggregate, YearMedals};
use crate::analyzers::utility::MedalCounts;
use crate::record::OlympicRecord;

/// Groups records by country, most medals first, ties in first-seen order.
pub fn aggregate_countries(records: &[OlympicRecord]) -> Vec<CountryAggregate> {
    let groups = records
        .iter()
        .fold(IndexMap::<&str, MedalCounts>::new(), |mut acc, r| {
            acc.entry(r.country.as_str()).or_default().add(r.medal);
            acc
        });

    let mut countries: Vec<CountryAggregate> = groups
        .into_iter()
        .map(|(country, medals)| CountryAggregate {
            country: country.to_string(),
            total_medals: medals.total,
            gold_medals: medals.gold,
            silver_medals: medals.silver,
            bronze_medals: medals.bronze,
        })
        .collect();

    countries.sort_by(|a, b| b.total_medals.cmp(&a.total_medals));
    countries
}

/// Medals per year for one country (exact name match), oldest year first.
///
/// Year 0 is treated as missing. An unknown country yields an empty list.
pub fn country_trends(records: &[OlympicRecord], country: &str) -> Vec<YearMedals> {
    records
        .iter()
        .filter(|r| r.country == country && r.year != 0)
        .fold(BTreeMap::<i32, usize>::new(), |mut acc, r| {
            *acc.entry(r.year).or_default() += 1;
            acc
        })
        .into_iter()
        .map(|(year, medals)| YearMedals { year, medals })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::test_support::medal;
    use crate::record::Medal;

    #[test]
    fn test_country_totals() {
        let records = vec![
            medal("A", "USA", "Judo", 1980, "Men", Medal::Gold),
            medal("B", "USA", "Judo", 1980, "Men", Medal::Bronze),
            medal("C", "France", "Judo", 1980, "Men", Medal::Silver),
        ];

        let countries = aggregate_countries(&records);
        assert_eq!(countries[0].country, "USA");
        assert_eq!(countries[0].total_medals, 2);
        assert_eq!(countries[0].gold_medals, 1);
        assert_eq!(countries[0].bronze_medals, 1);
        assert_eq!(countries[1].silver_medals, 1);
    }

    #[test]
    fn test_equal_totals_keep_input_order() {
        let records = vec![
            medal("A", "Kenya", "Athletics", 1988, "Men", Medal::Gold),
            medal("B", "Ethiopia", "Athletics", 1988, "Men", Medal::Gold),
            medal("C", "Ethiopia", "Athletics", 1992, "Men", Medal::Gold),
            medal("D", "Kenya", "Athletics", 1992, "Men", Medal::Gold),
        ];

        let order: Vec<_> = aggregate_countries(&records)
            .into_iter()
            .map(|c| c.country)
            .collect();
        assert_eq!(order, vec!["Kenya", "Ethiopia"]);
    }

    #[test]
    fn test_country_trends_sorted_by_year() {
        let records = vec![
            medal("A", "Cuba", "Boxing", 2000, "Men", Medal::Gold),
            medal("B", "Cuba", "Boxing", 1992, "Men", Medal::Gold),
            medal("C", "Cuba", "Boxing", 2000, "Men", Medal::Silver),
            medal("D", "Spain", "Boxing", 1992, "Men", Medal::Silver),
        ];

        assert_eq!(
            country_trends(&records, "Cuba"),
            vec![
                YearMedals {
                    year: 1992,
                    medals: 1
                },
                YearMedals {
                    year: 2000,
                    medals: 2
                },
            ]
        );
    }

    #[test]
    fn test_country_trends_unknown_country_is_empty() {
        let records = vec![medal("A", "Cuba", "Boxing", 2000, "Men", Medal::Gold)];
        assert!(country_trends(&records, "Nowhereland").is_empty());
    }

    #[test]
    fn test_country_trends_skips_year_zero() {
        let records = vec![
            medal("A", "Cuba", "Boxing", 0, "Men", Medal::Gold),
            medal("B", "Cuba", "Boxing", 1980, "Men", Medal::Gold),
        ];
        assert_eq!(country_trends(&records, "Cuba").len(), 1);
    }
}
