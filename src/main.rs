//! CLI entry point for the Olympic medal analytics tool.
//!
//! Each view subcommand performs one complete request (read, parse,
//! aggregate) and prints JSON on stdout. `publish` precomputes every view for
//! the dashboard, to a directory and/or an S3 bucket.

use anyhow::{Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use olympic_medals::analyzers::analyzer::{PublishTarget, S3Target, explore, publish};
use olympic_medals::analyzers::{View, run_view};
use olympic_medals::config::AppConfig;
use olympic_medals::load;
use olympic_medals::output::{print_json, write_records_csv};
use std::ffi::OsStr;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "olympic_medals")]
#[command(about = "Aggregates Summer Olympic medal records for the analytics dashboard", long_about = None)]
struct Cli {
    /// Medal table CSV (overrides OLYMPICS_DATA_PATH)
    #[arg(long, global = true, value_name = "FILE")]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Csv,
}

#[derive(Subcommand)]
enum Commands {
    /// Headline numbers, top countries and athletes, medals per year
    Summary {
        /// Length of the top lists (overrides OLYMPICS_TOP_LIMIT)
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Medal totals per athlete and country
    Athletes,
    /// Medal totals per country
    Countries,
    /// Medals per year for a single country
    CountryTrends {
        #[arg(value_name = "COUNTRY")]
        country: String,
    },
    /// Per-sport totals with top countries
    Sports,
    /// Per-year totals
    Trends,
    /// Male/female splits overall, by sport, year and country
    Gender,
    /// Dump the normalized records (data explorer)
    Records {
        #[arg(short, long, value_enum, default_value_t = Format::Json)]
        format: Format,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Compute every view and publish the JSON files
    Publish {
        /// Directory to write aggregates/*.json into
        #[arg(short = 'd', long)]
        output_dir: Option<PathBuf>,

        /// S3 bucket name to upload aggregates to (e.g., "my-bucket")
        #[arg(long)]
        s3_bucket: Option<String>,

        /// Gzip compress the JSON before writing
        #[arg(long, default_value_t = false)]
        gzip: bool,

        /// Length of the top lists (overrides OLYMPICS_TOP_LIMIT)
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    let cli = Cli::parse();
    let limit_override = match &cli.command {
        Commands::Summary { limit } | Commands::Publish { limit, .. } => *limit,
        _ => None,
    };
    let config = AppConfig::from_env().with_overrides(cli.data.clone(), limit_override);

    // Logging setup: colored stderr + JSON rolling log file
    let log_dir = config
        .log_file
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("logs"));
    let log_file_name = config
        .log_file
        .file_name()
        .unwrap_or(OsStr::new("olympic_medals.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    info!(data = %config.data_path.display(), "Using medal table");

    let view = match cli.command {
        Commands::Summary { .. } => View::Summary {
            limit: config.top_limit,
        },
        Commands::Athletes => View::Athletes,
        Commands::Countries => View::Countries,
        Commands::CountryTrends { country } => View::CountryTrends { country },
        Commands::Sports => View::Sports,
        Commands::Trends => View::Trends,
        Commands::Gender => View::Gender,
        Commands::Records { format, output } => {
            return dump_records(&config.data_path, format, output.as_deref());
        }
        Commands::Publish {
            output_dir,
            s3_bucket,
            gzip,
            ..
        } => {
            return publish_all(&config, output_dir, s3_bucket, gzip).await;
        }
    };

    let value = run_view(&config.data_path, &view)?;
    print_json(std::io::stdout().lock(), &value)?;

    Ok(())
}

/// Writes the data explorer records as JSON or CSV.
fn dump_records(data_path: &Path, format: Format, output: Option<&Path>) -> Result<()> {
    let dataset = load(data_path)?;
    let records = explore(&dataset.records);

    let writer: Box<dyn std::io::Write> = match output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(std::io::stdout().lock()),
    };

    match format {
        Format::Json => print_json(writer, &records)?,
        Format::Csv => write_records_csv(writer, records)?,
    }

    info!(records = dataset.report.records, "Records written");
    Ok(())
}

/// Publishes every view to a directory and/or S3.
#[tracing::instrument(skip(config), fields(data = %config.data_path.display()))]
async fn publish_all(
    config: &AppConfig,
    output_dir: Option<PathBuf>,
    s3_bucket: Option<String>,
    gzip: bool,
) -> Result<()> {
    if output_dir.is_none() && s3_bucket.is_none() {
        bail!("nothing to publish to: pass --output-dir and/or --s3-bucket");
    }

    // Initialize S3 client if bucket is provided
    let s3 = match s3_bucket {
        Some(bucket) => {
            let aws = aws_config::load_from_env().await;
            info!(bucket = %bucket, gzip, "S3 upload enabled");
            Some(S3Target {
                client: aws_sdk_s3::Client::new(&aws),
                bucket,
            })
        }
        None => None,
    };

    let target = PublishTarget {
        output_dir,
        s3,
        gzip,
    };

    let index = publish(&config.data_path, config.top_limit, &target).await?;

    let failed = index.views.iter().filter(|v| !v.ok).count();
    if failed > 0 {
        bail!("{failed} of {} views failed to publish", index.views.len());
    }

    Ok(())
}
