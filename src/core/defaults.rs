//! Demo default table.
//!
//! Sample values the demo endpoints opt into explicitly. The calculate paths
//! never fall back to these; they reject missing required fields instead.

use jiff::civil::{Date, date};

use super::types::{RetirementPlanInput, SocialSecurityInput};

pub const DEMO_CURRENT_AGE: u32 = 42;
pub const DEMO_RETIREMENT_AGE: u32 = 65;
pub const DEMO_RETIREMENT_DURATION_YEARS: u32 = 25;
pub const DEMO_CURRENT_SAVINGS: f64 = 106_965.67;
pub const DEMO_MONTHLY_CONTRIBUTION: f64 = 650.0;
pub const DEMO_EMPLOYER_MATCH: f64 = 325.0;
pub const DEMO_DESIRED_MONTHLY_INCOME: f64 = 6_200.0;
pub const DEMO_ANNUAL_RETURN_RATE_PERCENT: f64 = 7.0;
pub const DEMO_ANNUAL_SALARY: f64 = 78_000.0;
pub const DEMO_YEARS_OF_WORK_HISTORY: u32 = 20;
pub const DEMO_PORTFOLIO_VALUE: f64 = 106_965.0;

pub fn demo_date_of_birth() -> Date {
    date(1983, 5, 15)
}

pub fn demo_retirement_plan_input() -> RetirementPlanInput {
    RetirementPlanInput {
        current_age: DEMO_CURRENT_AGE,
        retirement_age: DEMO_RETIREMENT_AGE,
        expected_retirement_duration_years: DEMO_RETIREMENT_DURATION_YEARS,
        current_savings: DEMO_CURRENT_SAVINGS,
        monthly_contribution: DEMO_MONTHLY_CONTRIBUTION,
        employer_match: Some(DEMO_EMPLOYER_MATCH),
        desired_monthly_income: DEMO_DESIRED_MONTHLY_INCOME,
        expected_annual_return_rate_percent: DEMO_ANNUAL_RETURN_RATE_PERCENT,
        expected_annual_inflation_rate_percent: 0.0,
    }
}

pub fn demo_social_security_input() -> SocialSecurityInput {
    SocialSecurityInput {
        date_of_birth: Some(demo_date_of_birth()),
        current_annual_salary: DEMO_ANNUAL_SALARY,
        years_of_work_history: DEMO_YEARS_OF_WORK_HISTORY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::projection::project;

    #[test]
    fn demo_plan_input_is_projectable() {
        let plan = project(&demo_retirement_plan_input()).expect("demo input is valid");
        assert_eq!(plan.years_to_retirement, 23);
        assert!(plan.projected_balance > 0.0);
    }

    #[test]
    fn demo_social_security_input_has_a_birth_date() {
        let input = demo_social_security_input();
        assert_eq!(input.date_of_birth, Some(date(1983, 5, 15)));
        assert_eq!(input.current_annual_salary, 78_000.0);
    }
}
