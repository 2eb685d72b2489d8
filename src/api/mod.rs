use axum::{
    Json, Router,
    extract::Query,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use crate::core::{
    DEMO_PORTFOLIO_VALUE, DEMO_RETIREMENT_DURATION_YEARS, InvestmentStrategy, PlanningError,
    RetirementPlan, RetirementPlanInput, ScenarioSet, SocialSecurityEstimate, SocialSecurityInput,
    compare_scenarios, demo_retirement_plan_input, demo_social_security_input, estimate_benefits,
    generate_allocation, project,
};

/// Errors surfaced by the HTTP layer. Everything here maps to a 400: the core
/// is pure and has no internal failure modes beyond rejecting bad input.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Planning(#[from] PlanningError),

    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("invalid input: {field}: {message}")]
    InvalidQuery {
        field: &'static str,
        message: &'static str,
    },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse {
            error: self.to_string(),
        });
        (StatusCode::BAD_REQUEST, body).into_response()
    }
}

type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

/// Retirement plan request body. Financial fields are required; the service
/// never fills in sample data on the calculate path (the demo GET endpoints
/// opt into the default table instead).
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RetirementPlanPayload {
    current_age: Option<u32>,
    retirement_age: Option<u32>,
    expected_retirement_duration_years: Option<u32>,
    current_savings: Option<f64>,
    monthly_contribution: Option<f64>,
    employer_match: Option<f64>,
    desired_monthly_income: Option<f64>,
    expected_annual_return_rate_percent: Option<f64>,
    expected_annual_inflation_rate_percent: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct SocialSecurityPayload {
    date_of_birth: Option<Date>,
    current_annual_salary: Option<f64>,
    years_of_work_history: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct StrategyQuery {
    age: Option<u32>,
    portfolio_value: Option<f64>,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    service: &'static str,
    timestamp: i64,
}

fn required<T>(value: Option<T>, field: &'static str) -> ApiResult<T> {
    value.ok_or(ApiError::MissingField(field))
}

fn plan_input_from_payload(payload: RetirementPlanPayload) -> ApiResult<RetirementPlanInput> {
    Ok(RetirementPlanInput {
        current_age: required(payload.current_age, "currentAge")?,
        retirement_age: required(payload.retirement_age, "retirementAge")?,
        // Carried through for the caller; the projection itself does not
        // consume the duration or the inflation rate.
        expected_retirement_duration_years: payload
            .expected_retirement_duration_years
            .unwrap_or(DEMO_RETIREMENT_DURATION_YEARS),
        current_savings: required(payload.current_savings, "currentSavings")?,
        monthly_contribution: required(payload.monthly_contribution, "monthlyContribution")?,
        employer_match: payload.employer_match,
        desired_monthly_income: required(payload.desired_monthly_income, "desiredMonthlyIncome")?,
        expected_annual_return_rate_percent: required(
            payload.expected_annual_return_rate_percent,
            "expectedAnnualReturnRatePercent",
        )?,
        expected_annual_inflation_rate_percent: payload
            .expected_annual_inflation_rate_percent
            .unwrap_or(0.0),
    })
}

fn social_security_input_from_payload(
    payload: SocialSecurityPayload,
) -> ApiResult<SocialSecurityInput> {
    Ok(SocialSecurityInput {
        date_of_birth: payload.date_of_birth,
        current_annual_salary: required(payload.current_annual_salary, "currentAnnualSalary")?,
        years_of_work_history: payload.years_of_work_history.unwrap_or(0),
    })
}

fn strategy_from_query(query: StrategyQuery) -> ApiResult<InvestmentStrategy> {
    let portfolio_value = query.portfolio_value.unwrap_or(DEMO_PORTFOLIO_VALUE);
    if !portfolio_value.is_finite() || portfolio_value < 0.0 {
        return Err(ApiError::InvalidQuery {
            field: "portfolioValue",
            message: "must be zero or positive",
        });
    }
    Ok(generate_allocation(portfolio_value, query.age))
}

pub async fn run_http_server(port: u16) -> std::io::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let app = router();

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("planning API listening on http://{addr}");
    axum::serve(listener, app).await
}

fn router() -> Router {
    Router::new()
        .route("/api/planning/health", get(health_handler))
        .route("/api/planning/retirement-plan", get(demo_plan_handler))
        .route(
            "/api/planning/retirement-plan/calculate",
            axum::routing::post(calculate_plan_handler),
        )
        .route(
            "/api/planning/social-security",
            get(demo_social_security_handler),
        )
        .route(
            "/api/planning/social-security/calculate",
            axum::routing::post(calculate_social_security_handler),
        )
        .route("/api/planning/investment-strategy", get(strategy_handler))
        .route(
            "/api/planning/scenarios",
            get(demo_scenarios_handler).post(scenarios_handler),
        )
        .layer(CorsLayer::permissive())
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "UP",
        service: "Planning Service",
        timestamp: jiff::Timestamp::now().as_millisecond(),
    })
}

async fn demo_plan_handler() -> ApiResult<Json<RetirementPlan>> {
    let plan = project(&demo_retirement_plan_input())?;
    Ok(Json(plan))
}

async fn calculate_plan_handler(
    Json(payload): Json<RetirementPlanPayload>,
) -> ApiResult<Json<RetirementPlan>> {
    let input = plan_input_from_payload(payload)?;
    let plan = project(&input)?;
    tracing::debug!(
        years_to_retirement = plan.years_to_retirement,
        status = ?plan.status,
        "computed retirement plan"
    );
    Ok(Json(plan))
}

async fn demo_social_security_handler() -> ApiResult<Json<SocialSecurityEstimate>> {
    let estimate = estimate_benefits(&demo_social_security_input(), today())?;
    Ok(Json(estimate))
}

async fn calculate_social_security_handler(
    Json(payload): Json<SocialSecurityPayload>,
) -> ApiResult<Json<SocialSecurityEstimate>> {
    let input = social_security_input_from_payload(payload)?;
    let estimate = estimate_benefits(&input, today())?;
    Ok(Json(estimate))
}

async fn strategy_handler(
    Query(query): Query<StrategyQuery>,
) -> ApiResult<Json<InvestmentStrategy>> {
    let strategy = strategy_from_query(query)?;
    Ok(Json(strategy))
}

async fn demo_scenarios_handler() -> ApiResult<Json<ScenarioSet>> {
    let set = compare_scenarios(&demo_retirement_plan_input())?;
    Ok(Json(set))
}

async fn scenarios_handler(
    Json(payload): Json<RetirementPlanPayload>,
) -> ApiResult<Json<ScenarioSet>> {
    let baseline = plan_input_from_payload(payload)?;
    let set = compare_scenarios(&baseline)?;
    Ok(Json(set))
}

fn today() -> Date {
    jiff::Zoned::now().date()
}
