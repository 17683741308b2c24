//! Medal aggregations and request orchestration.
//!
//! Every view is a pure fold over the normalized records: by athlete,
//! country, sport, year and gender, plus the landing page summary.
//! [`analyzer`] runs one view as a self-contained request and
//! [`writetos3`] publishes the results.

pub mod analyzer;
pub mod athletes;
pub mod countries;
pub mod gender;
pub mod sports;
pub mod summary;
pub mod trends;
pub mod types;
pub mod utility;
pub mod writetos3;

pub use analyzer::{View, analyze_records, run_view};
pub use athletes::aggregate_athletes;
pub use countries::{aggregate_countries, country_trends};
pub use gender::aggregate_gender;
pub use sports::aggregate_sports;
pub use summary::summarize;
pub use trends::{aggregate_years, medals_by_year};
