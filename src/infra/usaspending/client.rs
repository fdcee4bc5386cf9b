use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::{MetricsError, Result};
use crate::fetch::{BasicClient, HttpClient, fetch_json, fetch_json_opt};
use crate::model::{Award, AwardType, BudgetYear, StateListing, StatePopulation};
use crate::services::spending_api::SpendingDataSource;

#[derive(Deserialize)]
struct StateRow {
    name: Option<String>,
    code: Option<String>,
    fips: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
}

#[derive(Deserialize)]
struct StateDetails {
    name: Option<String>,
    population: Option<u64>,
    pop_year: Option<i32>,
}

#[derive(Deserialize)]
struct AwardRow {
    #[serde(rename = "type")]
    kind: String,
    amount: Option<f64>,
    count: Option<u64>,
}

#[derive(Deserialize)]
struct AgencyList {
    #[serde(default)]
    results: Vec<AgencyRow>,
}

#[derive(Deserialize)]
struct AgencyRow {
    abbreviation: Option<String>,
    agency_name: Option<String>,
    toptier_code: Option<String>,
}

#[derive(Deserialize)]
struct BudgetaryResources {
    #[serde(default)]
    agency_data_by_year: Vec<BudgetYearRow>,
}

#[derive(Deserialize)]
struct BudgetYearRow {
    fiscal_year: i32,
    agency_budgetary_resources: Option<f64>,
}

#[derive(Deserialize)]
struct NewAwardCount {
    new_award_count: Option<u64>,
}

/// [`SpendingDataSource`] backed by the public USAspending v2 API.
///
/// Holds one [`HttpClient`] for its whole lifetime so every request made
/// through it shares the same connection pool.
pub struct UsaSpendingClient<C = BasicClient> {
    base_url: String,
    http: C,
}

impl UsaSpendingClient<BasicClient> {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        Ok(Self::with_client(config.base_url(), BasicClient::from_config(config)?))
    }
}

impl<C: HttpClient> UsaSpendingClient<C> {
    pub fn with_client(base_url: &str, http: C) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        }
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint)
    }

    async fn state_rows(&self) -> Result<Vec<StateRow>> {
        fetch_json(&self.http, &self.url("recipient/state/"), &[]).await
    }
}

#[async_trait]
impl<C: HttpClient> SpendingDataSource for UsaSpendingClient<C> {
    #[tracing::instrument(skip(self))]
    async fn resolve_state_code(&self, state_name: &str) -> Result<String> {
        let wanted = state_name.trim();

        self.state_rows()
            .await?
            .into_iter()
            .find(|row| {
                row.name.as_deref().is_some_and(|n| n.eq_ignore_ascii_case(wanted))
                    || row.code.as_deref().is_some_and(|c| c.eq_ignore_ascii_case(wanted))
            })
            .and_then(|row| row.fips)
            .ok_or_else(|| MetricsError::state_not_found(state_name))
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_state_awards(&self, state_code: &str, fiscal_year: i32) -> Result<Vec<Award>> {
        let rows: Vec<AwardRow> = fetch_json(
            &self.http,
            &self.url(&format!("recipient/state/awards/{state_code}/")),
            &[("year", fiscal_year.to_string())],
        )
        .await?;

        let awards: Vec<Award> = rows
            .into_iter()
            .map(|row| Award {
                kind: AwardType::from_api(&row.kind),
                amount: row.amount.unwrap_or(0.0).max(0.0),
                count: row.count.unwrap_or(0),
                recipient_state_code: state_code.to_string(),
                fiscal_year,
            })
            .collect();

        debug!(categories = awards.len(), "State awards fetched");
        Ok(awards)
    }

    #[tracing::instrument(skip(self))]
    async fn list_states(&self) -> Result<Vec<StateListing>> {
        let states = self
            .state_rows()
            .await?
            .into_iter()
            .filter_map(|row| {
                Some(StateListing {
                    code: row.fips?,
                    name: row.name?,
                    kind: row.kind,
                })
            })
            .collect();

        Ok(states)
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_state_population(
        &self,
        state_code: &str,
        year: i32,
    ) -> Result<Option<StatePopulation>> {
        let details: Option<StateDetails> = fetch_json_opt(
            &self.http,
            &self.url(&format!("recipient/state/{state_code}/")),
            &[("year", year.to_string())],
        )
        .await?;

        let Some(details) = details else {
            return Ok(None);
        };
        let Some(population) = details.population else {
            debug!("State has no population on record");
            return Ok(None);
        };

        let pop_year = details.pop_year.unwrap_or(year);
        if pop_year != year {
            debug!(pop_year, "Population is from a different year than requested");
        }

        Ok(Some(StatePopulation {
            state_code: state_code.to_string(),
            state_name: details.name.unwrap_or_default(),
            year: pop_year,
            population,
        }))
    }

    #[tracing::instrument(skip(self))]
    async fn resolve_agency_code(&self, agency_name: &str) -> Result<String> {
        let wanted = agency_name.trim();
        let agencies: AgencyList =
            fetch_json(&self.http, &self.url("references/toptier_agencies/"), &[]).await?;

        agencies
            .results
            .into_iter()
            .find(|agency| {
                agency.abbreviation.as_deref().is_some_and(|a| a.eq_ignore_ascii_case(wanted))
                    || agency.agency_name.as_deref().is_some_and(|n| n.eq_ignore_ascii_case(wanted))
            })
            .and_then(|agency| agency.toptier_code)
            .ok_or_else(|| MetricsError::agency_not_found(agency_name))
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_budget_history(&self, agency_code: &str) -> Result<Vec<BudgetYear>> {
        let resources: BudgetaryResources = fetch_json(
            &self.http,
            &self.url(&format!("agency/{agency_code}/budgetary_resources/")),
            &[],
        )
        .await?;

        // `total_budgetary_resources` in this response is government-wide; a year
        // without the agency's own figure is not on record yet.
        let history = resources
            .agency_data_by_year
            .into_iter()
            .filter_map(|row| {
                let total = row.agency_budgetary_resources?;
                Some(BudgetYear {
                    fiscal_year: row.fiscal_year,
                    total_budgetary_resources: total.max(0.0),
                })
            })
            .collect();

        Ok(history)
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_new_award_count(&self, agency_code: &str, fiscal_year: i32) -> Result<u64> {
        let count: NewAwardCount = fetch_json(
            &self.http,
            &self.url(&format!("agency/{agency_code}/awards/new/count/")),
            &[("fiscal_year", fiscal_year.to_string())],
        )
        .await?;

        Ok(count.new_award_count.unwrap_or(0))
    }
}
