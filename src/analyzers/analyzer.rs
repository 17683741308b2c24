use anyhow::Result;
use chrono::Utc;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

use crate::analyzers::types::{PublishIndex, PublishedView};
use crate::analyzers::writetos3::write_json_to_s3;
use crate::analyzers::{
    aggregate_athletes, aggregate_countries, aggregate_gender, aggregate_sports, aggregate_years,
    country_trends, summarize,
};
use crate::error::DatasetError;
use crate::output::write_json_file;
use crate::parser::load;
use crate::record::OlympicRecord;

/// One dashboard request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Summary { limit: usize },
    Athletes,
    Countries,
    CountryTrends { country: String },
    Sports,
    Trends,
    Gender,
    Records,
}

impl View {
    pub fn name(&self) -> &'static str {
        match self {
            View::Summary { .. } => "summary",
            View::Athletes => "athletes",
            View::Countries => "countries",
            View::CountryTrends { .. } => "country-trends",
            View::Sports => "sports",
            View::Trends => "trends",
            View::Gender => "gender",
            View::Records => "records",
        }
    }

    /// Storage key stem, without extension.
    pub fn key(&self) -> String {
        match self {
            View::CountryTrends { country } => {
                format!("country-trends/{}", country.replace('/', "_"))
            }
            other => other.name().to_string(),
        }
    }

    /// Every view that does not take a parameter.
    pub fn standard(limit: usize) -> Vec<View> {
        vec![
            View::Summary { limit },
            View::Athletes,
            View::Countries,
            View::Sports,
            View::Trends,
            View::Gender,
            View::Records,
        ]
    }
}

/// Records shown by the data explorer: those that also name a sport.
pub fn explore(records: &[OlympicRecord]) -> Vec<&OlympicRecord> {
    records.iter().filter(|r| !r.sport.is_empty()).collect()
}

/// Computes `view` over already parsed records.
pub fn analyze_records(records: &[OlympicRecord], view: &View) -> Result<Value, DatasetError> {
    let value = match view {
        View::Summary { limit } => serde_json::to_value(summarize(records, *limit))?,
        View::Athletes => serde_json::to_value(aggregate_athletes(records))?,
        View::Countries => serde_json::to_value(aggregate_countries(records))?,
        View::CountryTrends { country } => {
            if country.trim().is_empty() {
                return Err(DatasetError::InvalidRequest(
                    "country parameter is required".to_string(),
                ));
            }
            serde_json::to_value(country_trends(records, country))?
        }
        View::Sports => serde_json::to_value(aggregate_sports(records))?,
        View::Trends => serde_json::to_value(aggregate_years(records))?,
        View::Gender => serde_json::to_value(aggregate_gender(records))?,
        View::Records => serde_json::to_value(explore(records))?,
    };
    Ok(value)
}

/// Runs one request end to end: read the file, parse, aggregate.
///
/// Nothing is cached between calls, so a failure here never affects another view.
#[tracing::instrument(skip_all, fields(view = view.name()))]
pub fn run_view(path: &Path, view: &View) -> Result<Value, DatasetError> {
    let result = load(path).and_then(|dataset| analyze_records(&dataset.records, view));

    match &result {
        Ok(_) => debug!("View computed"),
        Err(e) => error!(code = e.code(), error = %e, "View failed"),
    }

    result
}

/// Where [`publish`] writes its JSON.
pub struct PublishTarget {
    pub output_dir: Option<PathBuf>,
    pub s3: Option<S3Target>,
    pub gzip: bool,
}

pub struct S3Target {
    pub client: aws_sdk_s3::Client,
    pub bucket: String,
}

impl PublishTarget {
    fn file_key(&self, stem: &str) -> String {
        self.key_for(stem, self.gzip)
    }

    fn key_for(&self, stem: &str, compress: bool) -> String {
        if compress {
            format!("aggregates/{stem}.json.gz")
        } else {
            format!("aggregates/{stem}.json")
        }
    }

    async fn store(&self, key: &str, value: &impl serde::Serialize, compress: bool) -> Result<()> {
        if let Some(dir) = &self.output_dir {
            write_json_file(&dir.join(key), value, compress)?;
        }
        if let Some(s3) = &self.s3 {
            write_json_to_s3(&s3.client, &s3.bucket, key, value, compress).await?;
        }
        Ok(())
    }
}

/// Computes every view, each as its own request, and stores the results
/// followed by an index.
///
/// A failing view is logged and listed in the index; the others still publish.
/// The index is always written uncompressed as `aggregates/index.json`.
/// Per-country trends are published for every country in the country view.
#[tracing::instrument(skip_all, fields(path = %data_path.display(), limit = limit))]
pub async fn publish(
    data_path: &Path,
    limit: usize,
    target: &PublishTarget,
) -> Result<PublishIndex> {
    let mut views = View::standard(limit);

    match load(data_path) {
        Ok(dataset) => views.extend(
            aggregate_countries(&dataset.records)
                .into_iter()
                .map(|c| View::CountryTrends { country: c.country }),
        ),
        Err(e) => warn!(error = %e, "Could not list countries, skipping per-country trends"),
    }

    let mut published = Vec::with_capacity(views.len());

    for view in &views {
        let key = target.file_key(&view.key());

        let outcome = match run_view(data_path, view) {
            Ok(value) => target.store(&key, &value, target.gzip).await.map_err(|e| e.to_string()),
            Err(e) => Err(e.to_string()),
        };

        if let Err(message) = &outcome {
            error!(view = view.name(), key = %key, error = %message, "Publish failed");
        }

        published.push(PublishedView {
            view: view.name().to_string(),
            key,
            ok: outcome.is_ok(),
            error: outcome.err(),
        });
    }

    let index = PublishIndex {
        generated_at: Utc::now(),
        views: published,
    };
    // Never compressed.
    target
        .store(&target.key_for("index", false), &index, false)
        .await?;

    let failed = index.views.iter().filter(|v| !v.ok).count();
    info!(views = index.views.len(), failed, "Publish complete");

    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::test_support::medal;
    use crate::record::Medal;

    fn records() -> Vec<OlympicRecord> {
        vec![
            medal("A. Smith", "USA", "Athletics", 2004, "Men", Medal::Gold),
            medal("A. Smith", "USA", "Athletics", 2008, "Men", Medal::Silver),
            medal("B. Jones", "Kenya", "", 2008, "Women", Medal::Bronze),
        ]
    }

    #[test]
    fn test_view_keys() {
        assert_eq!(View::Athletes.key(), "athletes");
        assert_eq!(
            View::CountryTrends {
                country: "Bosnia/Herzegovina".to_string()
            }
            .key(),
            "country-trends/Bosnia_Herzegovina"
        );
    }

    #[test]
    fn test_analyze_athletes_json_shape() {
        let value = analyze_records(&records(), &View::Athletes).unwrap();
        assert_eq!(value[0]["athlete"], "A. Smith");
        assert_eq!(value[0]["totalMedals"], 2);
        assert_eq!(value[0]["years"], serde_json::json!([2004, 2008]));
    }

    #[test]
    fn test_records_view_requires_sport() {
        let value = analyze_records(&records(), &View::Records).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_blank_country_is_invalid() {
        let err = analyze_records(
            &records(),
            &View::CountryTrends {
                country: "  ".to_string(),
            },
        )
        .unwrap_err();
        assert!(matches!(err, DatasetError::InvalidRequest(_)));
    }

    #[test]
    fn test_unknown_country_is_empty_list() {
        let value = analyze_records(
            &records(),
            &View::CountryTrends {
                country: "Nowhereland".to_string(),
            },
        )
        .unwrap();
        assert_eq!(value, serde_json::json!([]));
    }

    #[test]
    fn test_views_are_deterministic() {
        for view in View::standard(10) {
            let first = analyze_records(&records(), &view).unwrap();
            let second = analyze_records(&records(), &view).unwrap();
            assert_eq!(first, second, "{} differs between runs", view.name());
        }
    }

    #[test]
    fn test_run_view_missing_file() {
        let path = std::env::temp_dir().join("olympic_medals_run_view_missing.csv");
        let _ = std::fs::remove_file(&path);

        let err = run_view(&path, &View::Countries).unwrap_err();
        assert_eq!(err.code(), "source_missing");
    }
}
