//! Age-banded stock/bond/cash allocation.

use super::types::{InvestmentStrategy, RiskBand, round_cents};

/// Used when the caller supplies no age. This is a documented default, not an
/// error, and it lands in the Moderate band.
pub const DEFAULT_ALLOCATION_AGE: u32 = 42;

struct BandDefinition {
    band: RiskBand,
    min_age: u32,
    stocks_percent: u32,
    bonds_percent: u32,
    cash_percent: u32,
    recommendation: &'static str,
}

/// Half-open age bands, youngest first. Percentages are validated at
/// definition time by the const assertion below.
const BANDS: [BandDefinition; 3] = [
    BandDefinition {
        band: RiskBand::Aggressive,
        min_age: 0,
        stocks_percent: 80,
        bonds_percent: 15,
        cash_percent: 5,
        recommendation: "At your age, you can afford to take more risk for potentially higher \
                         returns. Consider maintaining a higher stock allocation.",
    },
    BandDefinition {
        band: RiskBand::Moderate,
        min_age: 35,
        stocks_percent: 65,
        bonds_percent: 30,
        cash_percent: 5,
        recommendation: "Your moderate allocation balances growth potential with risk management. \
                         Consider gradually reducing stock allocation as you approach retirement.",
    },
    BandDefinition {
        band: RiskBand::Conservative,
        min_age: 55,
        stocks_percent: 40,
        bonds_percent: 50,
        cash_percent: 10,
        recommendation: "As you near retirement, focus on capital preservation. Consider \
                         increasing bond allocation for stability.",
    },
];

const _: () = {
    let mut i = 0;
    while i < BANDS.len() {
        let band = &BANDS[i];
        assert!(band.stocks_percent + band.bonds_percent + band.cash_percent == 100);
        i += 1;
    }
};

const SUGGESTED_ACTIONS: [&str; 4] = [
    "Diversify across asset classes",
    "Rebalance portfolio quarterly",
    "Consider low-cost index funds",
    "Review allocation annually",
];

/// Map an age to its risk band and convert the band percentages into dollar
/// amounts against the portfolio value.
///
/// Infallible by contract: callers validate `portfolio_value >= 0` before
/// invoking (the HTTP layer does).
pub fn generate_allocation(portfolio_value: f64, age: Option<u32>) -> InvestmentStrategy {
    let age = age.unwrap_or(DEFAULT_ALLOCATION_AGE);
    let band = band_for_age(age);

    InvestmentStrategy {
        age,
        portfolio_value,
        risk_band: band.band,
        stocks_percent: band.stocks_percent,
        bonds_percent: band.bonds_percent,
        cash_percent: band.cash_percent,
        stocks_amount: round_cents(portfolio_value * f64::from(band.stocks_percent) / 100.0),
        bonds_amount: round_cents(portfolio_value * f64::from(band.bonds_percent) / 100.0),
        cash_amount: round_cents(portfolio_value * f64::from(band.cash_percent) / 100.0),
        recommendation: band.recommendation.to_string(),
        suggested_actions: SUGGESTED_ACTIONS.to_vec(),
    }
}

fn band_for_age(age: u32) -> &'static BandDefinition {
    BANDS
        .iter()
        .rev()
        .find(|band| age >= band.min_age)
        .unwrap_or(&BANDS[0])
}

/// Re-check the sum-to-100 invariant for an allocation whose percentages were
/// supplied externally rather than derived from a band.
pub fn is_valid_allocation(strategy: &InvestmentStrategy) -> bool {
    strategy.stocks_percent + strategy.bonds_percent + strategy.cash_percent == 100
}
