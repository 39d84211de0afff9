//! Property-based tests for the pricing pipeline.
//!
//! These tests verify that universal properties hold across all valid inputs,
//! using the `proptest` crate for random test case generation.

use pgr_core::errors::{Error, PricingError};
use pgr_core::pricing::{
    apply_adjustments, apply_volume_discount, calculate_proposal_item, compute_technical_hour_rate,
    PricingBasis, ProposalItemInput,
};
use proptest::prelude::*;
use rust_decimal::Decimal;

// =============================================================================
// Generators
// =============================================================================

/// A decimal with two fractional digits in `[0, max_cents / 100]`.
fn arb_amount(max_cents: i64) -> impl Strategy<Value = Decimal> {
    (0..=max_cents).prop_map(|cents| Decimal::new(cents, 2))
}

/// A decimal with two fractional digits in `(0, max_cents / 100]`.
fn arb_positive_amount(max_cents: i64) -> impl Strategy<Value = Decimal> {
    (1..=max_cents).prop_map(|cents| Decimal::new(cents, 2))
}

/// A percentage in `[0, 100]` with two fractional digits.
fn arb_percent() -> impl Strategy<Value = Decimal> {
    (0i64..=10_000).prop_map(|hundredths| Decimal::new(hundredths, 2))
}

fn arb_basis() -> impl Strategy<Value = PricingBasis> {
    (
        arb_amount(10_000_000),
        arb_amount(5_000_000),
        arb_positive_amount(40_000),
    )
        .prop_map(|(fixed_costs, pro_labor, productive_hours)| {
            PricingBasis::new(fixed_costs, pro_labor, productive_hours)
        })
}

fn arb_item_input() -> impl Strategy<Value = ProposalItemInput> {
    (
        arb_positive_amount(10_000_000),
        arb_positive_amount(100_000),
        arb_percent(),
        arb_percent(),
        arb_percent(),
        arb_percent(),
        arb_percent(),
    )
        .prop_map(
            |(base_price, estimated_hours, tax_rate, personalization, risk, seniority, discount)| {
                ProposalItemInput {
                    base_price,
                    estimated_hours,
                    tax_rate,
                    adjustment_personalization: personalization,
                    adjustment_risk: risk,
                    adjustment_seniority: seniority,
                    volume_discount: discount,
                }
            },
        )
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Identical inputs give identical breakdowns.
    #[test]
    fn prop_pipeline_is_deterministic(basis in arb_basis(), input in arb_item_input()) {
        let first = calculate_proposal_item(&input, &basis).unwrap();
        let second = calculate_proposal_item(&input, &basis).unwrap();
        prop_assert_eq!(first, second);
    }

    /// A non-negative volume discount never raises the value, and a discount
    /// of at most 100% never makes it negative.
    #[test]
    fn prop_discounted_value_is_bounded(basis in arb_basis(), input in arb_item_input()) {
        let result = calculate_proposal_item(&input, &basis).unwrap();
        prop_assert!(result.discounted_value <= result.adjusted_value);
        prop_assert!(result.discounted_value >= Decimal::ZERO);
    }

    /// Non-negative adjustments never lower the base value.
    #[test]
    fn prop_adjustments_never_decrease_value(basis in arb_basis(), input in arb_item_input()) {
        let result = calculate_proposal_item(&input, &basis).unwrap();
        prop_assert!(result.adjusted_value >= result.base_value);
    }

    /// Compounding two positive adjustments always exceeds adding them.
    #[test]
    fn prop_adjustments_compound_rather_than_sum(
        base in arb_positive_amount(10_000_000),
        a in 1i64..=100,
        b in 1i64..=100,
    ) {
        let a = Decimal::from(a);
        let b = Decimal::from(b);
        let compounded = apply_adjustments(base, a, b, Decimal::ZERO).unwrap();
        let summed = base * (Decimal::ONE + (a + b) / Decimal::ONE_HUNDRED);
        prop_assert!(compounded > summed);
    }

    /// A full discount always zeroes the value.
    #[test]
    fn prop_full_discount_is_zero(value in arb_amount(10_000_000)) {
        prop_assert_eq!(apply_volume_discount(value, Decimal::ONE_HUNDRED).unwrap(), Decimal::ZERO);
    }

    /// Non-positive productive hours are rejected for any cost basis.
    #[test]
    fn prop_non_positive_hours_rejected(
        fixed_costs in arb_amount(10_000_000),
        pro_labor in arb_amount(10_000_000),
        hours in -100_000i64..=0,
    ) {
        let result = compute_technical_hour_rate(fixed_costs, pro_labor, Decimal::new(hours, 2));
        let is_invalid_input = matches!(
            result,
            Err(Error::Pricing(PricingError::InvalidInput { .. }))
        );
        prop_assert!(is_invalid_input);
    }
}
