//! What-if scenario comparison over the projection engine.

use super::projection::{MAX_AGE, project};
use super::types::{
    PlanningError, RetirementPlanInput, ScenarioPlan, ScenarioSet, round_cents,
};

/// Scenario A raises the baseline contribution by this ratio. Computed from
/// the baseline, never a fixed dollar amount, so the scenario stays
/// meaningful for non-demo inputs.
const CONTRIBUTION_BOOST_RATIO: f64 = 1.2;
/// Scenarios B and C shift the retirement age by this many years.
const RETIREMENT_AGE_SHIFT: u32 = 2;

/// Run the projection under the baseline and three named variants: boosted
/// contributions, earlier retirement, later retirement.
///
/// The earlier-retirement variant is omitted when shifting would cross the
/// current age, and the later one when it would pass the age cap; the boosted
/// contribution variant is always present. No best-scenario selection happens
/// here, that is left to the caller.
pub fn compare_scenarios(baseline: &RetirementPlanInput) -> Result<ScenarioSet, PlanningError> {
    let current = project(baseline)?;

    let boosted = RetirementPlanInput {
        monthly_contribution: round_cents(
            baseline.monthly_contribution * CONTRIBUTION_BOOST_RATIO,
        ),
        ..baseline.clone()
    };
    let scenario_a = Some(ScenarioPlan {
        description: "Increase contributions by 20%".to_string(),
        plan: project(&boosted)?,
    });

    let scenario_b = if baseline.retirement_age > baseline.current_age + RETIREMENT_AGE_SHIFT {
        let earlier = RetirementPlanInput {
            retirement_age: baseline.retirement_age - RETIREMENT_AGE_SHIFT,
            ..baseline.clone()
        };
        Some(ScenarioPlan {
            description: format!("Retire at age {}", earlier.retirement_age),
            plan: project(&earlier)?,
        })
    } else {
        None
    };

    // The baseline already projected, so retirement_age <= MAX_AGE here and
    // the shift cannot overflow.
    let scenario_c = if baseline.retirement_age + RETIREMENT_AGE_SHIFT <= MAX_AGE {
        let later = RetirementPlanInput {
            retirement_age: baseline.retirement_age + RETIREMENT_AGE_SHIFT,
            ..baseline.clone()
        };
        Some(ScenarioPlan {
            description: format!("Retire at age {}", later.retirement_age),
            plan: project(&later)?,
        })
    } else {
        None
    };

    Ok(ScenarioSet {
        current,
        scenario_a,
        scenario_b,
        scenario_c,
    })
}
