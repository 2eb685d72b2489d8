//! Compound-growth projection of retirement savings.

use super::types::{
    PlanStatus, PlanningError, RetirementPlan, RetirementPlanInput, ensure_non_negative,
    round_cents,
};

/// Sustainable-withdrawal heuristic: 4% of the balance per year.
const WITHDRAWAL_RATE: f64 = 0.04;

/// Upper bound on accepted ages. Inputs past this are rejected up front, so
/// the month arithmetic below never gets near u32 overflow.
pub(crate) const MAX_AGE: u32 = 120;

const ON_TRACK_RECOMMENDATION: &str =
    "Great job! You're on track to meet your retirement goals.";
const BEHIND_RECOMMENDATION: &str =
    "Consider increasing your monthly contributions to meet your retirement goals.";

/// Compound the starting balance and the contribution stream forward to the
/// retirement age and derive a sustainable monthly income from the result.
///
/// Rates are annual percentages (7.0 means 7%). The caller resolves optional
/// fields first; only the absent employer match is interpreted here, as zero.
pub fn project(input: &RetirementPlanInput) -> Result<RetirementPlan, PlanningError> {
    validate(input)?;

    let years_to_retirement = input.retirement_age - input.current_age;
    let total_months = years_to_retirement * 12;
    let monthly_rate = input.expected_annual_return_rate_percent / 1200.0;
    let employer_match = input.employer_match.unwrap_or(0.0);
    let total_monthly_contribution = input.monthly_contribution + employer_match;

    let growth = (1.0 + monthly_rate).powi(total_months as i32);
    let future_value_savings = input.current_savings * growth;
    let future_value_contributions = if monthly_rate > 0.0 {
        total_monthly_contribution * (growth - 1.0) / monthly_rate
    } else {
        // Zero rate degenerates the annuity formula to a straight sum.
        total_monthly_contribution * f64::from(total_months)
    };

    let projected_balance = round_cents(future_value_savings + future_value_contributions);
    let projected_monthly_income = round_cents(projected_balance * WITHDRAWAL_RATE / 12.0);

    let (status, recommendation) = if projected_monthly_income >= input.desired_monthly_income {
        (PlanStatus::OnTrack, ON_TRACK_RECOMMENDATION)
    } else {
        (PlanStatus::Behind, BEHIND_RECOMMENDATION)
    };

    Ok(RetirementPlan {
        current_age: input.current_age,
        retirement_age: input.retirement_age,
        expected_retirement_duration_years: input.expected_retirement_duration_years,
        current_savings: input.current_savings,
        monthly_contribution: input.monthly_contribution,
        employer_match,
        desired_monthly_income: input.desired_monthly_income,
        expected_annual_return_rate_percent: input.expected_annual_return_rate_percent,
        expected_annual_inflation_rate_percent: input.expected_annual_inflation_rate_percent,
        years_to_retirement,
        projected_balance,
        projected_monthly_income,
        status,
        recommendation: recommendation.to_string(),
    })
}

fn validate(input: &RetirementPlanInput) -> Result<(), PlanningError> {
    if input.current_age == 0 {
        return Err(PlanningError::invalid("currentAge", "must be positive"));
    }
    if input.current_age > MAX_AGE {
        return Err(PlanningError::invalid(
            "currentAge",
            format!("must be at most {MAX_AGE}"),
        ));
    }
    if input.retirement_age <= input.current_age {
        return Err(PlanningError::invalid(
            "retirementAge",
            "must be greater than currentAge",
        ));
    }
    if input.retirement_age > MAX_AGE {
        return Err(PlanningError::invalid(
            "retirementAge",
            format!("must be at most {MAX_AGE}"),
        ));
    }
    ensure_non_negative("currentSavings", input.current_savings)?;
    ensure_non_negative("monthlyContribution", input.monthly_contribution)?;
    if let Some(employer_match) = input.employer_match {
        ensure_non_negative("employerMatch", employer_match)?;
    }
    ensure_non_negative("desiredMonthlyIncome", input.desired_monthly_income)?;
    ensure_non_negative(
        "expectedAnnualReturnRatePercent",
        input.expected_annual_return_rate_percent,
    )?;
    ensure_non_negative(
        "expectedAnnualInflationRatePercent",
        input.expected_annual_inflation_rate_percent,
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::{prop_assert, proptest};

    fn sample_input() -> RetirementPlanInput {
        RetirementPlanInput {
            current_age: 42,
            retirement_age: 65,
            expected_retirement_duration_years: 25,
            current_savings: 106_965.67,
            monthly_contribution: 650.0,
            employer_match: Some(325.0),
            desired_monthly_income: 6_200.0,
            expected_annual_return_rate_percent: 7.0,
            expected_annual_inflation_rate_percent: 0.0,
        }
    }

    #[test]
    fn projects_the_reference_plan() {
        let plan = project(&sample_input()).expect("valid input");
        assert_eq!(plan.years_to_retirement, 23);
        assert!(plan.projected_balance > 0.0);
        assert!(plan.projected_monthly_income > 0.0);
        // 4% of the projected balance does not reach $6200/month here.
        assert!(plan.projected_monthly_income < 6_200.0);
        assert_eq!(plan.status, PlanStatus::Behind);
        assert!(plan.recommendation.contains("increasing your monthly contributions"));
    }

    #[test]
    fn zero_rate_balance_is_linear_in_contributions() {
        let mut input = sample_input();
        input.expected_annual_return_rate_percent = 0.0;
        input.current_savings = 10_000.0;
        input.monthly_contribution = 500.0;
        input.employer_match = Some(250.0);

        let plan = project(&input).expect("valid input");
        let total_months = f64::from(plan.years_to_retirement * 12);
        assert_eq!(plan.projected_balance, 10_000.0 + 750.0 * total_months);
    }

    #[test]
    fn absent_employer_match_counts_as_zero() {
        let mut with_zero = sample_input();
        with_zero.employer_match = Some(0.0);
        let mut without = sample_input();
        without.employer_match = None;

        let a = project(&with_zero).expect("valid input");
        let b = project(&without).expect("valid input");
        assert_eq!(a.projected_balance, b.projected_balance);
        assert_eq!(b.employer_match, 0.0);
    }

    #[test]
    fn on_track_when_projected_income_covers_desired() {
        let mut input = sample_input();
        input.desired_monthly_income = 100.0;
        let plan = project(&input).expect("valid input");
        assert_eq!(plan.status, PlanStatus::OnTrack);
        assert!(plan.recommendation.contains("on track"));
    }

    #[test]
    fn rejects_retirement_age_not_after_current_age() {
        let mut input = sample_input();
        input.retirement_age = 42;
        let err = project(&input).expect_err("must reject");
        assert!(err.to_string().contains("retirementAge"));

        input.retirement_age = 40;
        assert!(project(&input).is_err());
    }

    #[test]
    fn rejects_ages_above_the_cap() {
        let mut input = sample_input();
        input.retirement_age = 400_000_000;
        let err = project(&input).expect_err("must reject");
        assert!(err.to_string().contains("retirementAge"));

        let mut input = sample_input();
        input.current_age = 121;
        input.retirement_age = 130;
        let err = project(&input).expect_err("must reject");
        assert!(err.to_string().contains("currentAge"));

        let mut input = sample_input();
        input.retirement_age = MAX_AGE;
        assert!(project(&input).is_ok());
    }

    #[test]
    fn rejects_zero_current_age() {
        let mut input = sample_input();
        input.current_age = 0;
        input.retirement_age = 65;
        let err = project(&input).expect_err("must reject");
        assert!(err.to_string().contains("currentAge"));
    }

    #[test]
    fn rejects_negative_currency_and_rate_fields() {
        for mutate in [
            (|i: &mut RetirementPlanInput| i.current_savings = -1.0) as fn(&mut RetirementPlanInput),
            |i| i.monthly_contribution = -0.01,
            |i| i.employer_match = Some(-5.0),
            |i| i.desired_monthly_income = -1.0,
            |i| i.expected_annual_return_rate_percent = -0.5,
            |i| i.expected_annual_inflation_rate_percent = -2.0,
        ] {
            let mut input = sample_input();
            mutate(&mut input);
            assert!(project(&input).is_err());
        }
    }

    #[test]
    fn projection_is_idempotent() {
        let input = sample_input();
        let first = project(&input).expect("valid input");
        let second = project(&input).expect("valid input");
        assert_eq!(first, second);
    }

    proptest! {
        #![proptest_config(proptest::test_runner::Config::with_cases(64))]

        #[test]
        fn prop_balance_strictly_increases_with_return_rate(
            current_age in 18u32..70,
            years in 1u32..40,
            savings in 1_000u32..1_000_000,
            contribution in 0u32..5_000,
            rate_tenths in 0u32..150,
        ) {
            let mut input = sample_input();
            input.current_age = current_age;
            input.retirement_age = current_age + years;
            input.current_savings = f64::from(savings);
            input.monthly_contribution = f64::from(contribution);
            input.employer_match = None;
            input.expected_annual_return_rate_percent = f64::from(rate_tenths) / 10.0;

            let low = project(&input).expect("valid input");

            input.expected_annual_return_rate_percent += 1.0;
            let high = project(&input).expect("valid input");

            prop_assert!(high.projected_balance > low.projected_balance);
        }

        #[test]
        fn prop_zero_rate_balance_matches_straight_sum(
            current_age in 18u32..70,
            years in 1u32..40,
            savings in 0u32..1_000_000,
            contribution in 0u32..5_000,
            employer_match in 0u32..2_000,
        ) {
            let mut input = sample_input();
            input.current_age = current_age;
            input.retirement_age = current_age + years;
            input.current_savings = f64::from(savings);
            input.monthly_contribution = f64::from(contribution);
            input.employer_match = Some(f64::from(employer_match));
            input.expected_annual_return_rate_percent = 0.0;

            let plan = project(&input).expect("valid input");
            let expected = f64::from(savings)
                + f64::from(contribution + employer_match) * f64::from(years * 12);
            prop_assert!(plan.projected_balance == expected);
        }

        #[test]
        fn prop_projection_outputs_are_finite_and_non_negative(
            current_age in 18u32..70,
            years in 1u32..40,
            savings in 0u32..10_000_000,
            contribution in 0u32..50_000,
            rate_tenths in 0u32..500,
        ) {
            let mut input = sample_input();
            input.current_age = current_age;
            input.retirement_age = current_age + years;
            input.current_savings = f64::from(savings);
            input.monthly_contribution = f64::from(contribution);
            input.employer_match = None;
            input.expected_annual_return_rate_percent = f64::from(rate_tenths) / 10.0;

            let plan = project(&input).expect("valid input");
            prop_assert!(plan.projected_balance.is_finite());
            prop_assert!(plan.projected_balance >= 0.0);
            prop_assert!(plan.projected_monthly_income.is_finite());
            prop_assert!(plan.projected_monthly_income >= 0.0);
        }
    }
}
