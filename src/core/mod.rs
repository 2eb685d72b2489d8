mod allocation;
mod benefits;
mod defaults;
mod projection;
mod scenarios;
mod types;

pub use allocation::{DEFAULT_ALLOCATION_AGE, generate_allocation, is_valid_allocation};
pub use benefits::{EARLIEST_CLAIM_AGE, FULL_RETIREMENT_AGE, estimate_benefits};
pub use defaults::{
    DEMO_ANNUAL_RETURN_RATE_PERCENT, DEMO_ANNUAL_SALARY, DEMO_CURRENT_AGE, DEMO_CURRENT_SAVINGS,
    DEMO_DESIRED_MONTHLY_INCOME, DEMO_EMPLOYER_MATCH, DEMO_MONTHLY_CONTRIBUTION,
    DEMO_PORTFOLIO_VALUE, DEMO_RETIREMENT_AGE, DEMO_RETIREMENT_DURATION_YEARS,
    DEMO_YEARS_OF_WORK_HISTORY, demo_date_of_birth, demo_retirement_plan_input,
    demo_social_security_input,
};
pub use projection::project;
pub use scenarios::compare_scenarios;
pub use types::{
    InvestmentStrategy, PlanStatus, PlanningError, RetirementPlan, RetirementPlanInput, RiskBand,
    ScenarioPlan, ScenarioSet, SocialSecurityEstimate, SocialSecurityInput,
};
