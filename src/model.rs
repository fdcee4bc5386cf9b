//! Request-scoped value types produced by the data source and the metrics.

use serde::Serialize;

/// Award category as reported by the spending API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AwardType {
    Grant,
    Loan,
    Other,
}

impl AwardType {
    /// Maps an API category string (`"grants"`, `"loans"`, `"contracts"`, ...)
    /// onto the three categories the metrics care about.
    pub fn from_api(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "grant" | "grants" => AwardType::Grant,
            "loan" | "loans" => AwardType::Loan,
            _ => AwardType::Other,
        }
    }
}

/// One award, or a roll-up of `count` awards of the same type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Award {
    pub kind: AwardType,
    pub amount: f64,
    pub count: u64,
    pub recipient_state_code: String,
    pub fiscal_year: i32,
}

impl Award {
    /// A single award (`count == 1`).
    pub fn single(kind: AwardType, amount: f64, state_code: &str, fiscal_year: i32) -> Self {
        Self {
            kind,
            amount: amount.max(0.0),
            count: 1,
            recipient_state_code: state_code.to_string(),
            fiscal_year,
        }
    }
}

/// An entry of the API's state listing.
#[derive(Debug, Clone, PartialEq)]
pub struct StateListing {
    /// FIPS code, used as the identifier on every per-state endpoint.
    pub code: String,
    pub name: String,
    /// The API's own classification (`"state"`, `"territory"`, `"district"`).
    pub kind: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatePopulation {
    pub state_code: String,
    pub state_name: String,
    pub year: i32,
    pub population: u64,
}

/// One fiscal year of an agency's budgetary-resources time series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetYear {
    pub fiscal_year: i32,
    pub total_budgetary_resources: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AgencyBudget {
    pub agency_code: String,
    pub fiscal_year: i32,
    pub total_budgetary_resources: f64,
    pub new_awards_count: u64,
}

/// The state with the highest grant amount per resident.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopGrantState {
    pub state_code: String,
    pub state_name: String,
    pub per_capita: f64,
    pub total_grant_amount: f64,
    pub award_count: u64,
    pub population: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BudgetRatio {
    pub ratio: f64,
    pub new_awards_count: u64,
    pub total_resources: f64,
}

impl From<&AgencyBudget> for BudgetRatio {
    /// Zero new awards yields a ratio of `0.0` with the other fields intact.
    fn from(budget: &AgencyBudget) -> Self {
        let ratio = if budget.new_awards_count == 0 {
            0.0
        } else {
            budget.total_budgetary_resources / budget.new_awards_count as f64
        };

        Self {
            ratio,
            new_awards_count: budget.new_awards_count,
            total_resources: budget.total_budgetary_resources,
        }
    }
}

/// Outcome of any one metric, as handed to the output layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "metric", rename_all = "snake_case")]
pub enum MetricResult {
    LoanAverage {
        state: String,
        fiscal_year: i32,
        average: f64,
    },
    TopGrantState {
        year: i32,
        state: Option<TopGrantState>,
    },
    BudgetRatio {
        agency: String,
        fiscal_year: i32,
        ratio: BudgetRatio,
    },
}
