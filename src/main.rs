//! CLI entry point for the USAspending metrics tool.
//!
//! Provides one subcommand per metric, a `report` subcommand that answers the
//! three standard questions in order, and a state listing.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::ffi::OsStr;
use std::path::Path;
use tracing::{error, info};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};
use usaspending_metrics::{
    config::ClientConfig,
    infra::usaspending::UsaSpendingClient,
    metrics::{MetricQuery, MetricsComputer},
    output::{MetricRecord, append_record, print_json, print_summary},
    services::SpendingDataSource,
    states::{abbreviation, is_us_state},
};

#[derive(Parser)]
#[command(name = "usaspending_metrics")]
#[command(about = "Derived federal-spending metrics from the USAspending API", long_about = None)]
struct Cli {
    /// JSON config file (base_url, timeout_secs, connect_timeout_secs)
    #[arg(long, global = true)]
    config: Option<String>,

    /// CSV file to append results to
    #[arg(short, long, global = true)]
    output: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Average loan amount to a state in a fiscal year
    LoanAverage {
        #[arg(short, long, default_value = "Texas")]
        state: String,

        #[arg(short, long, default_value_t = 2019)]
        fiscal_year: i32,
    },
    /// State with the highest grant amount per resident
    TopGrantState {
        #[arg(short, long, default_value_t = 2023)]
        year: i32,
    },
    /// An agency's budgetary resources per new award
    BudgetRatio {
        /// Agency abbreviation or full name
        #[arg(short, long, default_value = "NASA")]
        agency: String,

        #[arg(short, long, default_value_t = 2024)]
        fiscal_year: i32,
    },
    /// Run the standard report: Texas loans FY2019, top grant state 2023, NASA FY2024
    Report,
    /// List states known to the API and whether they are ranked
    ListStates,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path = std::env::var("LOG_FILE_PATH")
        .unwrap_or_else(|_| "logs/usaspending_metrics.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("usaspending_metrics.log"));

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

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => ClientConfig::load(path)?.with_overrides(|key| std::env::var(key).ok())?,
        None => ClientConfig::from_env()?,
    };
    info!(base_url = %config.base_url(), "Using USAspending API");

    // One client, and so one connection pool, for the whole run.
    let computer = MetricsComputer::new(UsaSpendingClient::new(&config)?);

    let queries = match cli.command {
        Commands::LoanAverage { state, fiscal_year } => {
            vec![MetricQuery::LoanAverage { state, fiscal_year }]
        }
        Commands::TopGrantState { year } => vec![MetricQuery::TopGrantState { year }],
        Commands::BudgetRatio {
            agency,
            fiscal_year,
        } => vec![MetricQuery::BudgetRatio {
            agency,
            fiscal_year,
        }],
        Commands::Report => MetricQuery::standard_report(),
        Commands::ListStates => {
            list_states(computer.source()).await?;
            return Ok(());
        }
    };

    let mut failures = 0;
    for query in &queries {
        match computer.run(query).await {
            Ok(result) => {
                print_summary(&result);
                print_json(&result)?;
                if let Some(path) = &cli.output {
                    append_record(path, &MetricRecord::from_result(&result))?;
                }
            }
            // A report keeps going so one missing year doesn't hide the other answers.
            Err(e) if queries.len() > 1 => {
                error!(error = %e, ?query, "Metric failed");
                failures += 1;
            }
            Err(e) => return Err(e.into()),
        }
    }

    if failures > 0 {
        anyhow::bail!("{failures} of {} metrics failed", queries.len());
    }

    Ok(())
}

/// Logs every state-like entity the API lists and whether it is ranked.
#[tracing::instrument(skip(source))]
async fn list_states<S: SpendingDataSource>(source: &S) -> Result<()> {
    let states = source.list_states().await?;

    for state in &states {
        info!(
            fips = %state.code,
            name = %state.name,
            kind = state.kind.as_deref().unwrap_or("unknown"),
            abbreviation = abbreviation(&state.code).unwrap_or("-"),
            ranked = is_us_state(&state.code),
            "State"
        );
    }

    let ranked = states.iter().filter(|s| is_us_state(&s.code)).count();
    info!(total = states.len(), ranked, "State list summary");
    Ok(())
}
