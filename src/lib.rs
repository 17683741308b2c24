pub mod analyzers;
pub mod config;
pub mod error;
pub mod output;
pub mod parser;
pub mod record;

pub use error::DatasetError;
pub use parser::{Dataset, ParseReport, load, parse};
pub use record::{Gender, Medal, OlympicRecord};
