//! Output formatting and persistence for metric results.
//!
//! Supports a human-readable summary, JSON logging, and CSV append.

use anyhow::Result;
use chrono::{DateTime, Utc};
use csv::WriterBuilder;
use serde::Serialize;
use std::fs::OpenOptions;
use std::path::Path;
use tracing::{debug, info};

use crate::model::MetricResult;

/// One CSV row per computed metric.
#[derive(Debug, Serialize)]
pub struct MetricRecord {
    pub timestamp: DateTime<Utc>,
    pub metric: String,
    pub subject: String,
    pub fiscal_year: i32,
    pub value: Option<f64>,
    pub detail: String,
}

impl MetricRecord {
    pub fn from_result(result: &MetricResult) -> Self {
        let timestamp = Utc::now();
        match result {
            MetricResult::LoanAverage {
                state,
                fiscal_year,
                average,
            } => MetricRecord {
                timestamp,
                metric: "loan_average".to_string(),
                subject: state.clone(),
                fiscal_year: *fiscal_year,
                value: Some(*average),
                detail: String::new(),
            },
            MetricResult::TopGrantState { year, state } => MetricRecord {
                timestamp,
                metric: "top_grant_state".to_string(),
                subject: state.as_ref().map(|s| s.state_name.clone()).unwrap_or_default(),
                fiscal_year: *year,
                value: state.as_ref().map(|s| s.per_capita),
                detail: state
                    .as_ref()
                    .map(|s| {
                        format!(
                            "total_grants={:.2};award_count={};population={}",
                            s.total_grant_amount, s.award_count, s.population
                        )
                    })
                    .unwrap_or_else(|| "no eligible state".to_string()),
            },
            MetricResult::BudgetRatio {
                agency,
                fiscal_year,
                ratio,
            } => MetricRecord {
                timestamp,
                metric: "budget_ratio".to_string(),
                subject: agency.clone(),
                fiscal_year: *fiscal_year,
                value: Some(ratio.ratio),
                detail: format!(
                    "total_resources={:.2};new_awards={}",
                    ratio.total_resources, ratio.new_awards_count
                ),
            },
        }
    }
}

/// Formats an amount as dollars with thousands separators, e.g. `$1,234.50`.
pub fn format_currency(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    format!("{sign}${}.{cents}", group_thousands(whole))
}

/// Formats a whole number with thousands separators, e.g. `29,145,505`.
pub fn format_count(n: u64) -> String {
    group_thousands(&n.to_string())
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Human-readable lines describing a result.
pub fn summary_lines(result: &MetricResult) -> Vec<String> {
    match result {
        MetricResult::LoanAverage {
            state,
            fiscal_year,
            average,
        } => vec![format!(
            "Average loan amount to {state} in FY {fiscal_year}: {}",
            format_currency(*average)
        )],
        MetricResult::TopGrantState { year, state: None } => {
            vec![format!("No state had population data for {year}")]
        }
        MetricResult::TopGrantState {
            year,
            state: Some(s),
        } => vec![
            format!("Highest grants per resident in {year}: {}", s.state_name),
            format!("Population: {}", format_count(s.population)),
            format!("Total Grants: {}", format_currency(s.total_grant_amount)),
            format!("Amount per resident: {}", format_currency(s.per_capita)),
        ],
        MetricResult::BudgetRatio {
            agency,
            fiscal_year,
            ratio,
        } => vec![
            format!("{agency} FY {fiscal_year}"),
            format!("Total Budgetary Resources: {}", format_currency(ratio.total_resources)),
            format!("New Awards: {}", format_count(ratio.new_awards_count)),
            format!("Ratio (Resources per Award): {}", format_currency(ratio.ratio)),
        ],
    }
}

/// Logs the human-readable summary of a result.
pub fn print_summary(result: &MetricResult) {
    for line in summary_lines(result) {
        info!("{line}");
    }
}

/// Logs a result as pretty-printed JSON.
pub fn print_json(result: &MetricResult) -> Result<()> {
    debug!("{}", serde_json::to_string_pretty(result)?);
    Ok(())
}

/// Appends a [`MetricRecord`] as a row to a CSV file.
///
/// Creates the file with headers if it does not already exist.
pub fn append_record(path: &str, record: &MetricRecord) -> Result<()> {
    let file_exists = Path::new(path).exists();
    debug!(path, file_exists, "Appending CSV record");

    let file = OpenOptions::new().append(true).create(true).open(path)?;

    let mut writer = WriterBuilder::new()
        .has_headers(!file_exists)
        .from_writer(file);

    writer.serialize(record)?;
    writer.flush()?;

    Ok(())
}
