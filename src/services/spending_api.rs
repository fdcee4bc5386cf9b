//! Trait for the spending-statistics data source the metrics are computed over.

use crate::error::Result;
use crate::model::{Award, BudgetYear, StateListing, StatePopulation};
use async_trait::async_trait;

/// Fetch-by-endpoint capability consumed by [`crate::metrics`].
///
/// Every method distinguishes "the request failed" (`Err`, usually
/// [`crate::error::MetricsError::Upstream`]) from "the API has no data for
/// this query" (an empty `Vec` or `None`).
#[async_trait]
pub trait SpendingDataSource: Send + Sync {
    /// Looks up a state's code by name, case-insensitively.
    ///
    /// Fails with `NotFound` when the name is unknown.
    async fn resolve_state_code(&self, state_name: &str) -> Result<String>;

    /// Award totals for a state in a fiscal year. May be empty.
    async fn fetch_state_awards(&self, state_code: &str, fiscal_year: i32) -> Result<Vec<Award>>;

    /// Every state-like entity the API knows, territories included.
    async fn list_states(&self) -> Result<Vec<StateListing>>;

    async fn fetch_state_population(
        &self,
        state_code: &str,
        year: i32,
    ) -> Result<Option<StatePopulation>>;

    /// Looks up a toptier agency code by abbreviation or full name.
    async fn resolve_agency_code(&self, agency_name: &str) -> Result<String>;

    /// The agency's budgetary resources for every fiscal year on record.
    async fn fetch_budget_history(&self, agency_code: &str) -> Result<Vec<BudgetYear>>;

    /// Budgetary resources for exactly `fiscal_year`, if on record.
    async fn fetch_agency_budget(
        &self,
        agency_code: &str,
        fiscal_year: i32,
    ) -> Result<Option<BudgetYear>> {
        let history = self.fetch_budget_history(agency_code).await?;
        Ok(history.into_iter().find(|y| y.fiscal_year == fiscal_year))
    }

    async fn fetch_new_award_count(&self, agency_code: &str, fiscal_year: i32) -> Result<u64>;
}
