//! Social Security benefit estimation across the three fixed claim ages.

use jiff::civil::Date;

use super::types::{
    PlanningError, SocialSecurityEstimate, SocialSecurityInput, ensure_non_negative, round_cents,
};

pub const FULL_RETIREMENT_AGE: u32 = 67;
pub const EARLIEST_CLAIM_AGE: u32 = 62;

/// Fraction of the full benefit when claiming at 62.
const EARLY_CLAIM_FACTOR: f64 = 0.75;
/// Fraction of the full benefit when delaying to 70.
const DELAYED_CLAIM_FACTOR: f64 = 1.32;
/// Flat replacement-rate heuristic: roughly 40% of pre-retirement income.
const REPLACEMENT_RATE: f64 = 0.40;

/// Scale a base monthly benefit to the three claim ages and band the
/// recommendation by the age reached at `as_of`.
///
/// `as_of` pins the age derivation so identical inputs always produce
/// identical output; the HTTP layer passes today's date. A missing date of
/// birth yields no recommendation rather than an error.
pub fn estimate_benefits(
    input: &SocialSecurityInput,
    as_of: Date,
) -> Result<SocialSecurityEstimate, PlanningError> {
    ensure_non_negative("currentAnnualSalary", input.current_annual_salary)?;
    if let Some(date_of_birth) = input.date_of_birth {
        if date_of_birth > as_of {
            return Err(PlanningError::invalid(
                "dateOfBirth",
                "must not be in the future",
            ));
        }
    }

    let base_monthly_benefit = round_cents(input.current_annual_salary * REPLACEMENT_RATE / 12.0);
    let recommendation = input
        .date_of_birth
        .map(|date_of_birth| recommendation_for_age(age_at(date_of_birth, as_of)));

    Ok(SocialSecurityEstimate {
        date_of_birth: input.date_of_birth,
        current_annual_salary: input.current_annual_salary,
        years_of_work_history: input.years_of_work_history,
        benefit_at_62: round_cents(base_monthly_benefit * EARLY_CLAIM_FACTOR),
        benefit_at_67: base_monthly_benefit,
        benefit_at_70: round_cents(base_monthly_benefit * DELAYED_CLAIM_FACTOR),
        full_retirement_age: FULL_RETIREMENT_AGE,
        recommendation,
    })
}

/// Calendar-year age: birthdays later in the year are ignored.
fn age_at(date_of_birth: Date, as_of: Date) -> u32 {
    let years = i32::from(as_of.year()) - i32::from(date_of_birth.year());
    years.max(0) as u32
}

fn recommendation_for_age(age: u32) -> String {
    if age < EARLIEST_CLAIM_AGE {
        "Continue working and building your earnings record. Consider delaying \
         Social Security until full retirement age for maximum benefits."
            .to_string()
    } else if age < FULL_RETIREMENT_AGE {
        "You can claim reduced benefits now, but waiting until full retirement \
         age (67) will give you 100% of your benefit."
            .to_string()
    } else {
        "You're at or past full retirement age. Delaying until age 70 can \
         increase your benefits by up to 32%."
            .to_string()
    }
}
