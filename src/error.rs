//! Error type shared by the data source, the fetch layer and the metrics.

use std::fmt;
use thiserror::Error;

/// Which kind of identifier failed to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierKind {
    State,
    Agency,
}

impl fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdentifierKind::State => f.write_str("state"),
            IdentifierKind::Agency => f.write_str("agency"),
        }
    }
}

/// Errors surfaced by metric computations.
///
/// "No data" outcomes that have a well-defined answer (no loans, zero new
/// awards, no eligible state) are returned as values and never appear here.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MetricsError {
    /// A state or agency name did not match anything the API knows.
    #[error("{kind} not found: {name}")]
    NotFound { kind: IdentifierKind, name: String },

    /// Transport failure, non-success HTTP status, or an undecodable body.
    #[error("upstream request to {url} failed{}: {message}", .status.map(|s| format!(" (status {s})")).unwrap_or_default())]
    Upstream {
        url: String,
        status: Option<u16>,
        message: String,
    },

    /// The agency has budget records, just not for the requested year.
    #[error(
        "no budgetary data for {agency} in fiscal year {requested} (available: {})",
        format_years(.available)
    )]
    MissingFiscalYearData {
        agency: String,
        requested: i32,
        available: Vec<i32>,
    },

    #[error("configuration error: {0}")]
    Config(String),
}

impl MetricsError {
    pub fn state_not_found(name: &str) -> Self {
        MetricsError::NotFound {
            kind: IdentifierKind::State,
            name: name.to_string(),
        }
    }

    pub fn agency_not_found(name: &str) -> Self {
        MetricsError::NotFound {
            kind: IdentifierKind::Agency,
            name: name.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MetricsError>;

/// Renders a sorted list of years, collapsing contiguous runs into ranges.
///
/// `[2019, 2020, 2021, 2023]` becomes `"2019-2021, 2023"`; an empty list
/// becomes `"none"`.
pub fn format_years(years: &[i32]) -> String {
    if years.is_empty() {
        return "none".to_string();
    }

    let mut parts = Vec::new();
    let mut start = years[0];
    let mut prev = years[0];

    for &year in &years[1..] {
        if year == prev + 1 {
            prev = year;
            continue;
        }
        parts.push(run(start, prev));
        start = year;
        prev = year;
    }
    parts.push(run(start, prev));

    parts.join(", ")
}

fn run(start: i32, end: i32) -> String {
    if start == end {
        start.to_string()
    } else {
        format!("{start}-{end}")
    }
}
