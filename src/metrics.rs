//! The three spending metrics, computed over any [`SpendingDataSource`].
//!
//! Each metric issues its requests one at a time and stops at the first
//! failed request. Outcomes that are legitimately zero or empty (no loans,
//! zero new awards, no eligible state) are returned as values; unresolvable
//! names and missing fiscal years are errors.

use tracing::{debug, info};

use crate::error::{MetricsError, Result};
use crate::model::{
    AgencyBudget, Award, AwardType, BudgetRatio, BudgetYear, MetricResult, StateListing,
    TopGrantState,
};
use crate::services::spending_api::SpendingDataSource;
use crate::states::is_us_state;

/// Average loan amount over the loan awards for `fiscal_year`.
///
/// Returns `0.0` when there are no loans. Each [`Award`] contributes
/// `count` loans, so the result is the mean of the individual loan amounts.
pub fn average_loan(awards: &[Award], fiscal_year: i32) -> f64 {
    let (total, count) = totals_for(awards, AwardType::Loan, fiscal_year);
    if count == 0 {
        0.0
    } else {
        total / count as f64
    }
}

/// Summed amount and award count of one award type in `fiscal_year`.
pub fn totals_for(awards: &[Award], kind: AwardType, fiscal_year: i32) -> (f64, u64) {
    awards
        .iter()
        .filter(|a| a.kind == kind && a.fiscal_year == fiscal_year)
        .fold((0.0, 0), |(amount, count), a| (amount + a.amount, count + a.count))
}

/// A state that passed the allow-list and has a population for the year.
#[derive(Debug, Clone, PartialEq)]
pub struct GrantCandidate {
    pub state_code: String,
    pub state_name: String,
    pub population: u64,
    pub total_grant_amount: f64,
    pub award_count: u64,
}

impl GrantCandidate {
    /// Grant amount per resident, `None` when there is no population to divide by.
    pub fn per_capita(&self) -> Option<f64> {
        (self.population > 0).then(|| self.total_grant_amount / self.population as f64)
    }
}

/// Picks the candidate with the highest grant amount per resident.
///
/// Candidates without a population are ignored. Only a strictly greater value
/// replaces the running maximum, so the first of several equal candidates wins.
pub fn select_top_grant_state<I>(candidates: I) -> Option<TopGrantState>
where
    I: IntoIterator<Item = GrantCandidate>,
{
    candidates
        .into_iter()
        .filter_map(|c| c.per_capita().map(|pc| (c, pc)))
        .fold(None, |best: Option<(GrantCandidate, f64)>, (c, pc)| match best {
            Some((_, best_pc)) if pc <= best_pc => best,
            _ => Some((c, pc)),
        })
        .map(|(c, per_capita)| TopGrantState {
            state_code: c.state_code,
            state_name: c.state_name,
            per_capita,
            total_grant_amount: c.total_grant_amount,
            award_count: c.award_count,
            population: c.population,
        })
}

/// Finds `fiscal_year` in an agency's budget history.
///
/// # Errors
///
/// [`MetricsError::MissingFiscalYearData`] carrying the sorted years that are
/// on record.
pub fn locate_budget_year(agency: &str, history: &[BudgetYear], fiscal_year: i32) -> Result<BudgetYear> {
    if let Some(found) = history.iter().find(|y| y.fiscal_year == fiscal_year) {
        return Ok(*found);
    }

    let mut available: Vec<i32> = history.iter().map(|y| y.fiscal_year).collect();
    available.sort_unstable();
    available.dedup();

    Err(MetricsError::MissingFiscalYearData {
        agency: agency.to_string(),
        requested: fiscal_year,
        available,
    })
}

/// Average loan amount to `state_name` in `fiscal_year`.
#[tracing::instrument(skip(source))]
pub async fn average_loan_amount<S>(source: &S, state_name: &str, fiscal_year: i32) -> Result<f64>
where
    S: SpendingDataSource + ?Sized,
{
    let state_code = source.resolve_state_code(state_name).await?;
    let awards = source.fetch_state_awards(&state_code, fiscal_year).await?;

    let average = average_loan(&awards, fiscal_year);
    info!(state_code = %state_code, average, "Average loan amount computed");
    Ok(average)
}

/// The state with the highest grant amount per resident in `year`, or `None`
/// when no state has a population on record.
#[tracing::instrument(skip(source))]
pub async fn highest_grant_per_capita_state<S>(source: &S, year: i32) -> Result<Option<TopGrantState>>
where
    S: SpendingDataSource + ?Sized,
{
    let listing = source.list_states().await?;
    let states: Vec<StateListing> = listing.into_iter().filter(|s| is_us_state(&s.code)).collect();
    debug!(states = states.len(), "States eligible for ranking");

    let mut candidates = Vec::with_capacity(states.len());

    for state in states {
        let population = match source.fetch_state_population(&state.code, year).await? {
            Some(p) if p.population > 0 => p.population,
            _ => {
                debug!(state = %state.name, "Skipping state without population");
                continue;
            }
        };

        let awards = source.fetch_state_awards(&state.code, year).await?;
        let (total_grant_amount, award_count) = totals_for(&awards, AwardType::Grant, year);

        candidates.push(GrantCandidate {
            state_code: state.code,
            state_name: state.name,
            population,
            total_grant_amount,
            award_count,
        });
    }

    let top = select_top_grant_state(candidates);
    match &top {
        Some(t) => info!(state = %t.state_name, per_capita = t.per_capita, "Top grant state found"),
        None => info!("No state had a population on record"),
    }
    Ok(top)
}

/// Budgetary resources per new award for `agency_name` in `fiscal_year`.
#[tracing::instrument(skip(source))]
pub async fn agency_budget_ratio<S>(source: &S, agency_name: &str, fiscal_year: i32) -> Result<BudgetRatio>
where
    S: SpendingDataSource + ?Sized,
{
    let agency_code = source.resolve_agency_code(agency_name).await?;
    let history = source.fetch_budget_history(&agency_code).await?;
    let year = locate_budget_year(agency_name, &history, fiscal_year)?;

    let new_awards_count = source.fetch_new_award_count(&agency_code, fiscal_year).await?;

    let budget = AgencyBudget {
        agency_code,
        fiscal_year,
        total_budgetary_resources: year.total_budgetary_resources,
        new_awards_count,
    };
    let ratio = BudgetRatio::from(&budget);
    info!(ratio = ratio.ratio, new_awards_count, "Budget ratio computed");
    Ok(ratio)
}

/// A request for one metric.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetricQuery {
    LoanAverage { state: String, fiscal_year: i32 },
    TopGrantState { year: i32 },
    BudgetRatio { agency: String, fiscal_year: i32 },
}

impl MetricQuery {
    /// Texas loans in FY2019, top grant state in 2023, NASA in FY2024.
    pub fn standard_report() -> Vec<MetricQuery> {
        vec![
            MetricQuery::LoanAverage {
                state: "Texas".to_string(),
                fiscal_year: 2019,
            },
            MetricQuery::TopGrantState { year: 2023 },
            MetricQuery::BudgetRatio {
                agency: "NASA".to_string(),
                fiscal_year: 2024,
            },
        ]
    }
}

/// Owns a data source for the duration of a batch of metric computations.
pub struct MetricsComputer<S> {
    source: S,
}

impl<S: SpendingDataSource> MetricsComputer<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub async fn average_loan_amount(&self, state_name: &str, fiscal_year: i32) -> Result<f64> {
        average_loan_amount(&self.source, state_name, fiscal_year).await
    }

    pub async fn highest_grant_per_capita_state(&self, year: i32) -> Result<Option<TopGrantState>> {
        highest_grant_per_capita_state(&self.source, year).await
    }

    pub async fn agency_budget_ratio(&self, agency_name: &str, fiscal_year: i32) -> Result<BudgetRatio> {
        agency_budget_ratio(&self.source, agency_name, fiscal_year).await
    }

    pub async fn run(&self, query: &MetricQuery) -> Result<MetricResult> {
        let result = match query {
            MetricQuery::LoanAverage { state, fiscal_year } => MetricResult::LoanAverage {
                state: state.clone(),
                fiscal_year: *fiscal_year,
                average: self.average_loan_amount(state, *fiscal_year).await?,
            },
            MetricQuery::TopGrantState { year } => MetricResult::TopGrantState {
                year: *year,
                state: self.highest_grant_per_capita_state(*year).await?,
            },
            MetricQuery::BudgetRatio { agency, fiscal_year } => MetricResult::BudgetRatio {
                agency: agency.clone(),
                fiscal_year: *fiscal_year,
                ratio: self.agency_budget_ratio(agency, *fiscal_year).await?,
            },
        };
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::StatePopulation;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// In-memory data source that records every call it receives.
    #[derive(Default)]
    struct FakeSource {
        states: Vec<StateListing>,
        awards: HashMap<(String, i32), Vec<Award>>,
        populations: HashMap<(String, i32), u64>,
        agencies: HashMap<String, String>,
        budgets: HashMap<String, Vec<BudgetYear>>,
        new_awards: HashMap<(String, i32), u64>,
        fail_awards: bool,
        calls: Mutex<Vec<String>>,
    }

    impl FakeSource {
        fn log(&self, call: String) {
            self.calls.lock().unwrap().push(call);
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }

        fn with_state(mut self, code: &str, name: &str, population: Option<u64>, year: i32) -> Self {
            self.states.push(StateListing {
                code: code.to_string(),
                name: name.to_string(),
                kind: Some("state".to_string()),
            });
            if let Some(p) = population {
                self.populations.insert((code.to_string(), year), p);
            }
            self
        }

        fn with_awards(mut self, code: &str, year: i32, awards: &[(AwardType, f64)]) -> Self {
            let awards = awards
                .iter()
                .map(|(kind, amount)| Award::single(*kind, *amount, code, year))
                .collect();
            self.awards.insert((code.to_string(), year), awards);
            self
        }

        fn with_agency(mut self, name: &str, code: &str, years: &[(i32, f64)]) -> Self {
            self.agencies.insert(name.to_string(), code.to_string());
            self.budgets.insert(
                code.to_string(),
                years
                    .iter()
                    .map(|(fy, total)| BudgetYear {
                        fiscal_year: *fy,
                        total_budgetary_resources: *total,
                    })
                    .collect(),
            );
            self
        }
    }

    #[async_trait]
    impl SpendingDataSource for FakeSource {
        async fn resolve_state_code(&self, state_name: &str) -> Result<String> {
            self.log(format!("resolve_state_code:{state_name}"));
            self.states
                .iter()
                .find(|s| s.name.eq_ignore_ascii_case(state_name))
                .map(|s| s.code.clone())
                .ok_or_else(|| MetricsError::state_not_found(state_name))
        }

        async fn fetch_state_awards(&self, state_code: &str, fiscal_year: i32) -> Result<Vec<Award>> {
            self.log(format!("fetch_state_awards:{state_code}"));
            if self.fail_awards {
                return Err(MetricsError::Upstream {
                    url: "fake://awards".to_string(),
                    status: Some(500),
                    message: "boom".to_string(),
                });
            }
            Ok(self
                .awards
                .get(&(state_code.to_string(), fiscal_year))
                .cloned()
                .unwrap_or_default())
        }

        async fn list_states(&self) -> Result<Vec<StateListing>> {
            self.log("list_states".to_string());
            Ok(self.states.clone())
        }

        async fn fetch_state_population(
            &self,
            state_code: &str,
            year: i32,
        ) -> Result<Option<StatePopulation>> {
            self.log(format!("fetch_state_population:{state_code}"));
            Ok(self
                .populations
                .get(&(state_code.to_string(), year))
                .map(|p| StatePopulation {
                    state_code: state_code.to_string(),
                    state_name: String::new(),
                    year,
                    population: *p,
                }))
        }

        async fn resolve_agency_code(&self, agency_name: &str) -> Result<String> {
            self.log(format!("resolve_agency_code:{agency_name}"));
            self.agencies
                .get(agency_name)
                .cloned()
                .ok_or_else(|| MetricsError::agency_not_found(agency_name))
        }

        async fn fetch_budget_history(&self, agency_code: &str) -> Result<Vec<BudgetYear>> {
            self.log(format!("fetch_budget_history:{agency_code}"));
            Ok(self.budgets.get(agency_code).cloned().unwrap_or_default())
        }

        async fn fetch_new_award_count(&self, agency_code: &str, fiscal_year: i32) -> Result<u64> {
            self.log(format!("fetch_new_award_count:{agency_code}"));
            Ok(self
                .new_awards
                .get(&(agency_code.to_string(), fiscal_year))
                .copied()
                .unwrap_or(0))
        }
    }

    fn candidate(code: &str, population: u64, total: f64) -> GrantCandidate {
        GrantCandidate {
            state_code: code.to_string(),
            state_name: format!("State {code}"),
            population,
            total_grant_amount: total,
            award_count: 1,
        }
    }

    // --- loan average ---

    #[tokio::test]
    async fn test_texas_loan_average() {
        let source = FakeSource::default()
            .with_state("48", "Texas", Some(29_000_000), 2019)
            .with_awards(
                "48",
                2019,
                &[(AwardType::Loan, 100.0), (AwardType::Loan, 300.0), (AwardType::Grant, 999.0)],
            );

        let avg = average_loan_amount(&source, "Texas", 2019).await.unwrap();
        assert_eq!(avg, 200.0);
    }

    #[tokio::test]
    async fn test_no_loans_is_zero() {
        let source = FakeSource::default()
            .with_state("48", "Texas", None, 2019)
            .with_awards("48", 2019, &[(AwardType::Grant, 10.0), (AwardType::Other, 20.0)]);

        assert_eq!(average_loan_amount(&source, "Texas", 2019).await.unwrap(), 0.0);
    }

    #[tokio::test]
    async fn test_no_awards_at_all_is_zero() {
        let source = FakeSource::default().with_state("48", "Texas", None, 2019);
        assert_eq!(average_loan_amount(&source, "Texas", 2019).await.unwrap(), 0.0);
    }

    #[tokio::test]
    async fn test_unknown_state_is_not_found() {
        let source = FakeSource::default();
        let err = average_loan_amount(&source, "Atlantis", 2019).await.unwrap_err();
        assert_eq!(err, MetricsError::state_not_found("Atlantis"));
        assert_eq!(source.calls(), vec!["resolve_state_code:Atlantis"]);
    }

    #[tokio::test]
    async fn test_upstream_failure_propagates() {
        let mut source = FakeSource::default().with_state("48", "Texas", None, 2019);
        source.fail_awards = true;

        let err = average_loan_amount(&source, "Texas", 2019).await.unwrap_err();
        assert!(matches!(err, MetricsError::Upstream { status: Some(500), .. }));
    }

    #[test]
    fn test_average_loan_is_order_independent() {
        let a = Award::single(AwardType::Loan, 10.0, "48", 2019);
        let b = Award::single(AwardType::Loan, 25.0, "48", 2019);
        let c = Award::single(AwardType::Grant, 1_000.0, "48", 2019);
        let d = Award::single(AwardType::Loan, 55.0, "48", 2019);

        let forward = vec![a.clone(), b.clone(), c.clone(), d.clone()];
        let backward = vec![d, c, b, a];

        assert_eq!(average_loan(&forward, 2019), 30.0);
        assert_eq!(average_loan(&backward, 2019), 30.0);
        assert_eq!(forward.len(), 4);
    }

    #[test]
    fn test_average_loan_uses_rolled_up_counts() {
        let mut rollup = Award::single(AwardType::Loan, 900.0, "48", 2019);
        rollup.count = 3;
        assert_eq!(average_loan(&[rollup], 2019), 300.0);
    }

    #[test]
    fn test_average_loan_zero_count_rollup() {
        let mut rollup = Award::single(AwardType::Loan, 0.0, "48", 2019);
        rollup.count = 0;
        assert_eq!(average_loan(&[rollup], 2019), 0.0);
    }

    #[test]
    fn test_average_loan_exact_year_match() {
        let awards = vec![
            Award::single(AwardType::Loan, 100.0, "48", 2019),
            Award::single(AwardType::Loan, 500.0, "48", 2020),
        ];
        assert_eq!(average_loan(&awards, 2019), 100.0);
    }

    // --- top grant state ---

    #[tokio::test]
    async fn test_zero_population_state_excluded() {
        // "A" has a population of 0 and is skipped despite its grants; "B" wins.
        let source = FakeSource::default()
            .with_state("49", "A", Some(0), 2023)
            .with_awards("49", 2023, &[(AwardType::Grant, 1_000_000.0)])
            .with_state("48", "B", Some(100), 2023)
            .with_awards("48", 2023, &[(AwardType::Grant, 50.0)]);

        let top = highest_grant_per_capita_state(&source, 2023).await.unwrap().unwrap();
        assert_eq!(top.state_name, "B");
        assert_eq!(top.per_capita, 0.5);
        assert_eq!(top.total_grant_amount, 50.0);
        assert_eq!(top.population, 100);
        assert!(!source.calls().contains(&"fetch_state_awards:49".to_string()));
    }

    #[tokio::test]
    async fn test_zero_population_excluded_in_either_order() {
        let source = FakeSource::default()
            .with_state("48", "B", Some(100), 2023)
            .with_awards("48", 2023, &[(AwardType::Grant, 50.0)])
            .with_state("49", "A", Some(0), 2023)
            .with_awards("49", 2023, &[(AwardType::Grant, 1_000_000.0)]);

        let top = highest_grant_per_capita_state(&source, 2023).await.unwrap().unwrap();
        assert_eq!(top.state_name, "B");
    }

    #[tokio::test]
    async fn test_absent_population_excluded() {
        let source = FakeSource::default()
            .with_state("06", "California", None, 2023)
            .with_awards("06", 2023, &[(AwardType::Grant, 1e12)])
            .with_state("50", "Vermont", Some(650_000), 2023)
            .with_awards("50", 2023, &[(AwardType::Grant, 650_000.0)]);

        let top = highest_grant_per_capita_state(&source, 2023).await.unwrap().unwrap();
        assert_eq!(top.state_name, "Vermont");
        assert_eq!(top.per_capita, 1.0);
    }

    #[tokio::test]
    async fn test_territories_skipped_before_any_fetch() {
        let source = FakeSource::default()
            .with_state("72", "Puerto Rico", Some(3_000_000), 2023)
            .with_awards("72", 2023, &[(AwardType::Grant, 1e12)])
            .with_state("11", "District of Columbia", Some(700_000), 2023)
            .with_state("48", "Texas", Some(30_000_000), 2023)
            .with_awards("48", 2023, &[(AwardType::Grant, 3e9)]);

        let top = highest_grant_per_capita_state(&source, 2023).await.unwrap().unwrap();
        assert_eq!(top.state_name, "Texas");
        assert_eq!(
            source.calls(),
            vec!["list_states", "fetch_state_population:48", "fetch_state_awards:48"]
        );
    }

    #[tokio::test]
    async fn test_no_eligible_state_is_none() {
        let source = FakeSource::default()
            .with_state("48", "Texas", Some(0), 2023)
            .with_state("06", "California", None, 2023);

        assert_eq!(highest_grant_per_capita_state(&source, 2023).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_state_without_grants_wins_only_if_alone() {
        let source = FakeSource::default()
            .with_state("48", "Texas", Some(1_000), 2023)
            .with_awards("48", 2023, &[(AwardType::Loan, 500.0)]);

        let top = highest_grant_per_capita_state(&source, 2023).await.unwrap().unwrap();
        assert_eq!(top.state_name, "Texas");
        assert_eq!(top.per_capita, 0.0);
        assert_eq!(top.award_count, 0);
    }

    #[test]
    fn test_tie_goes_to_first_seen() {
        let top = select_top_grant_state(vec![
            candidate("48", 100, 50.0),
            candidate("06", 200, 100.0),
            candidate("36", 10, 1.0),
        ])
        .unwrap();
        assert_eq!(top.state_code, "48");
    }

    #[test]
    fn test_zero_grant_state_does_not_displace_leader() {
        let top = select_top_grant_state(vec![candidate("48", 100, 0.0), candidate("06", 100, 0.0)]).unwrap();
        assert_eq!(top.state_code, "48");

        let top = select_top_grant_state(vec![candidate("48", 100, 5.0), candidate("06", 100, 0.0)]).unwrap();
        assert_eq!(top.state_code, "48");
    }

    #[test]
    fn test_select_ignores_zero_population() {
        assert_eq!(select_top_grant_state(vec![candidate("48", 0, 50.0)]), None);
        assert_eq!(select_top_grant_state(Vec::new()), None);
    }

    // --- budget ratio ---

    fn nasa() -> FakeSource {
        FakeSource::default().with_agency(
            "NASA",
            "080",
            &[(2019, 1.0e10), (2020, 2.0e10), (2021, 3.0e10), (2022, 4.0e10), (2023, 5.0e10)],
        )
    }

    #[tokio::test]
    async fn test_missing_fiscal_year_names_available_years() {
        let source = nasa();
        let err = agency_budget_ratio(&source, "NASA", 2024).await.unwrap_err();

        match &err {
            MetricsError::MissingFiscalYearData {
                agency,
                requested,
                available,
            } => {
                assert_eq!(agency, "NASA");
                assert_eq!(*requested, 2024);
                assert_eq!(available, &vec![2019, 2020, 2021, 2022, 2023]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.to_string().contains("2019-2023"));
        assert!(!source.calls().iter().any(|c| c.starts_with("fetch_new_award_count")));
    }

    #[tokio::test]
    async fn test_zero_new_awards_gives_zero_ratio() {
        let source = nasa();
        let ratio = agency_budget_ratio(&source, "NASA", 2023).await.unwrap();
        assert_eq!(ratio.ratio, 0.0);
        assert_eq!(ratio.new_awards_count, 0);
        assert_eq!(ratio.total_resources, 5.0e10);
    }

    #[tokio::test]
    async fn test_budget_ratio_divides_resources_by_awards() {
        let mut source = nasa();
        source.new_awards.insert(("080".to_string(), 2022), 4_000);

        let ratio = agency_budget_ratio(&source, "NASA", 2022).await.unwrap();
        assert_eq!(ratio.ratio, 1.0e7);
        assert_eq!(ratio.new_awards_count, 4_000);
    }

    #[tokio::test]
    async fn test_unknown_agency_is_not_found() {
        let source = nasa();
        let err = agency_budget_ratio(&source, "NOAA", 2023).await.unwrap_err();
        assert_eq!(err, MetricsError::agency_not_found("NOAA"));
    }

    #[test]
    fn test_locate_budget_year_sorts_and_dedups_available() {
        let history = vec![
            BudgetYear { fiscal_year: 2021, total_budgetary_resources: 1.0 },
            BudgetYear { fiscal_year: 2019, total_budgetary_resources: 1.0 },
            BudgetYear { fiscal_year: 2021, total_budgetary_resources: 1.0 },
        ];
        let err = locate_budget_year("X", &history, 2024).unwrap_err();
        assert_eq!(
            err,
            MetricsError::MissingFiscalYearData {
                agency: "X".to_string(),
                requested: 2024,
                available: vec![2019, 2021],
            }
        );
    }

    // --- computer ---

    #[tokio::test]
    async fn test_computer_runs_queries() {
        let mut source = nasa()
            .with_state("48", "Texas", Some(100), 2023)
            .with_awards("48", 2019, &[(AwardType::Loan, 100.0), (AwardType::Loan, 300.0)]);
        source.new_awards.insert(("080".to_string(), 2023), 10);
        let computer = MetricsComputer::new(source);

        let loan = computer
            .run(&MetricQuery::LoanAverage { state: "Texas".to_string(), fiscal_year: 2019 })
            .await
            .unwrap();
        assert_eq!(
            loan,
            MetricResult::LoanAverage { state: "Texas".to_string(), fiscal_year: 2019, average: 200.0 }
        );

        let ratio = computer
            .run(&MetricQuery::BudgetRatio { agency: "NASA".to_string(), fiscal_year: 2023 })
            .await
            .unwrap();
        match ratio {
            MetricResult::BudgetRatio { ratio, .. } => assert_eq!(ratio.ratio, 5.0e9),
            other => panic!("unexpected result: {other:?}"),
        }

        let top = computer.run(&MetricQuery::TopGrantState { year: 2023 }).await.unwrap();
        match top {
            MetricResult::TopGrantState { state: Some(s), .. } => assert_eq!(s.state_name, "Texas"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_standard_report_queries() {
        let queries = MetricQuery::standard_report();
        assert_eq!(queries.len(), 3);
        assert_eq!(queries[1], MetricQuery::TopGrantState { year: 2023 });
    }
}
