use jiff::civil::Date;
use serde::Serialize;

/// Errors produced by the planning core. Structurally impossible input is the
/// only failure mode; arithmetic edge cases (zero rate) are handled inline and
/// missing optional fields are resolved by the explicit defaults step.
#[derive(Debug, thiserror::Error)]
pub enum PlanningError {
    #[error("invalid input: {field}: {message}")]
    InvalidInput {
        field: &'static str,
        message: String,
    },
}

impl PlanningError {
    pub(crate) fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            message: message.into(),
        }
    }
}

/// Whether projected retirement income covers the desired income.
///
/// Serialized as `on_track` / `behind`; existing clients match on those
/// exact strings.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanStatus {
    OnTrack,
    Behind,
}

/// Age-banded risk profile for portfolio allocation.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
pub enum RiskBand {
    Aggressive,
    Moderate,
    Conservative,
}

/// Caller-supplied retirement plan parameters. All rates are annual
/// percentages (7.0 means 7%), currency fields are dollars.
#[derive(Debug, Clone, PartialEq)]
pub struct RetirementPlanInput {
    pub current_age: u32,
    pub retirement_age: u32,
    pub expected_retirement_duration_years: u32,
    pub current_savings: f64,
    pub monthly_contribution: f64,
    /// Absent employer match means no match, not an error.
    pub employer_match: Option<f64>,
    pub desired_monthly_income: f64,
    pub expected_annual_return_rate_percent: f64,
    pub expected_annual_inflation_rate_percent: f64,
}

/// A fully computed retirement plan: the input echoed back plus projections.
/// Never mutated after computation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RetirementPlan {
    pub current_age: u32,
    pub retirement_age: u32,
    pub expected_retirement_duration_years: u32,
    pub current_savings: f64,
    pub monthly_contribution: f64,
    pub employer_match: f64,
    pub desired_monthly_income: f64,
    pub expected_annual_return_rate_percent: f64,
    pub expected_annual_inflation_rate_percent: f64,
    pub years_to_retirement: u32,
    pub projected_balance: f64,
    pub projected_monthly_income: f64,
    pub status: PlanStatus,
    pub recommendation: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SocialSecurityInput {
    pub date_of_birth: Option<Date>,
    pub current_annual_salary: f64,
    pub years_of_work_history: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialSecurityEstimate {
    pub date_of_birth: Option<Date>,
    pub current_annual_salary: f64,
    pub years_of_work_history: u32,
    pub benefit_at_62: f64,
    pub benefit_at_67: f64,
    pub benefit_at_70: f64,
    pub full_retirement_age: u32,
    /// None when no date of birth was supplied; an explicit no-data state.
    pub recommendation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentStrategy {
    pub age: u32,
    pub portfolio_value: f64,
    pub risk_band: RiskBand,
    pub stocks_percent: u32,
    pub bonds_percent: u32,
    pub cash_percent: u32,
    pub stocks_amount: f64,
    pub bonds_amount: f64,
    pub cash_amount: f64,
    pub recommendation: String,
    pub suggested_actions: Vec<&'static str>,
}

/// One named what-if variant of a baseline plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioPlan {
    pub description: String,
    pub plan: RetirementPlan,
}

/// Side-by-side what-if comparison. A variant is absent only when its input
/// would be structurally invalid (e.g. retiring 2 years earlier crosses the
/// current age); callers treat members as optional.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioSet {
    pub current: RetirementPlan,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scenario_a: Option<ScenarioPlan>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scenario_b: Option<ScenarioPlan>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scenario_c: Option<ScenarioPlan>,
}

/// Round a dollar amount to cents, half away from zero. Currency outputs are
/// rounded here at the computation boundary; rate inputs never are.
pub(crate) fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub(crate) fn ensure_non_negative(field: &'static str, value: f64) -> Result<(), PlanningError> {
    if !value.is_finite() {
        return Err(PlanningError::invalid(field, "must be a finite number"));
    }
    if value < 0.0 {
        return Err(PlanningError::invalid(field, "must be zero or positive"));
    }
    Ok(())
}
