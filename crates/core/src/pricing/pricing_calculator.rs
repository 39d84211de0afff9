use log::{debug, warn};
use rust_decimal::Decimal;

use crate::constants::PERCENT;
use crate::errors::{PricingError, Result};

use super::pricing_model::{
    PricingBasis, ProposalItemInput, ProposalItemResult, ProposalLine, ProposalTotalInput,
    ProposalTotalResult,
};

const OUT_OF_RANGE: &str = "is too large to price";

/// Converts a percentage (0-100 scale) into its multiplier, `1 + pct/100`.
fn increase_factor(pct: Decimal) -> Decimal {
    Decimal::ONE + pct / PERCENT
}

/// `lhs * rhs`, or an [`PricingError::InvalidInput`] on `field` when the
/// product leaves the decimal range.
fn checked_product(lhs: Decimal, rhs: Decimal, field: &str) -> Result<Decimal> {
    lhs.checked_mul(rhs).ok_or_else(|| {
        warn!("Overflow multiplying {} by {} ({})", lhs, rhs, field);
        PricingError::invalid_input(field, OUT_OF_RANGE).into()
    })
}

fn checked_sum(lhs: Decimal, rhs: Decimal, field: &str) -> Result<Decimal> {
    lhs.checked_add(rhs).ok_or_else(|| {
        warn!("Overflow adding {} to {} ({})", rhs, lhs, field);
        PricingError::invalid_input(field, OUT_OF_RANGE).into()
    })
}

/// Calculates the technical-hour rate: `(fixed_costs + pro_labor) / productive_hours`.
///
/// Fails with [`PricingError::InvalidInput`] on `productiveHours` when
/// `productive_hours <= 0`. Never returns a sentinel value.
pub fn compute_technical_hour_rate(
    fixed_costs: Decimal,
    pro_labor: Decimal,
    productive_hours: Decimal,
) -> Result<Decimal> {
    if productive_hours <= Decimal::ZERO {
        warn!(
            "Rejecting technical-hour calculation: productive hours = {}",
            productive_hours
        );
        return Err(PricingError::invalid_input("productiveHours", "must be positive").into());
    }

    let monthly_cost = checked_sum(fixed_costs, pro_labor, "proLabor")?;
    let rate = monthly_cost
        .checked_div(productive_hours)
        .ok_or_else(|| {
            PricingError::invalid_input("productiveHours", "too small for the cost basis")
        })?;

    Ok(rate)
}

/// Applies a tax-rate percentage: `rate * (1 + tax_rate_percent/100)`.
///
/// Negative percentages are computed as given; range checks belong to the
/// caller's validation layer.
pub fn apply_tax_rate(rate: Decimal, tax_rate_percent: Decimal) -> Result<Decimal> {
    checked_product(rate, increase_factor(tax_rate_percent), "taxRate")
}

/// Multiplies the taxed hourly value by the estimated hours.
pub fn compute_base_value(value_with_taxes: Decimal, estimated_hours: Decimal) -> Result<Decimal> {
    checked_product(value_with_taxes, estimated_hours, "estimatedHours")
}

/// Compounds the three adjustment percentages onto the base value.
///
/// Each percentage is applied as its own `× (1 + pct/100)` factor in the
/// order personalization, risk, seniority. The percentages are never summed:
/// 10% + 10% + 10% on 1000 is 1331, not 1300.
pub fn apply_adjustments(
    base_value: Decimal,
    personalization_pct: Decimal,
    risk_pct: Decimal,
    seniority_pct: Decimal,
) -> Result<Decimal> {
    let value = checked_product(
        base_value,
        increase_factor(personalization_pct),
        "adjustmentPersonalization",
    )?;
    let value = checked_product(value, increase_factor(risk_pct), "adjustmentRisk")?;
    checked_product(value, increase_factor(seniority_pct), "adjustmentSeniority")
}

/// Applies the volume discount percentage: `adjusted_value * (1 - pct/100)`.
pub fn apply_volume_discount(
    adjusted_value: Decimal,
    volume_discount_pct: Decimal,
) -> Result<Decimal> {
    checked_product(
        adjusted_value,
        Decimal::ONE - volume_discount_pct / PERCENT,
        "volumeDiscount",
    )
}

/// Runs the five-stage pipeline for one proposal item against a tenant basis.
///
/// Every intermediate stage is returned, unrounded. `input.base_price` is not
/// read here; the technical hour comes entirely from `basis`.
pub fn calculate_proposal_item(
    input: &ProposalItemInput,
    basis: &PricingBasis,
) -> Result<ProposalItemResult> {
    let technical_hour = compute_technical_hour_rate(
        basis.fixed_costs,
        basis.pro_labor,
        basis.productive_hours,
    )?;
    let value_with_taxes = apply_tax_rate(technical_hour, input.tax_rate)?;
    let base_value = compute_base_value(value_with_taxes, input.estimated_hours)?;
    let adjusted_value = apply_adjustments(
        base_value,
        input.adjustment_personalization,
        input.adjustment_risk,
        input.adjustment_seniority,
    )?;
    let discounted_value = apply_volume_discount(adjusted_value, input.volume_discount)?;

    debug!(
        "Priced item: technical_hour={} value_with_taxes={} base_value={} adjusted_value={} discounted_value={}",
        technical_hour, value_with_taxes, base_value, adjusted_value, discounted_value
    );

    Ok(ProposalItemResult {
        technical_hour,
        value_with_taxes,
        base_value,
        adjusted_value,
        discounted_value,
    })
}

/// Runs the pipeline using the fallback basis derived from `input.base_price`.
///
/// See [`PricingBasis::from_base_price`].
pub fn calculate_proposal_item_from_base_price(
    input: &ProposalItemInput,
) -> Result<ProposalItemResult> {
    let basis = PricingBasis::from_base_price(input.base_price);
    calculate_proposal_item(input, &basis)
}

/// Sums item values, subtracts the general discount and adds the
/// displacement fee. Both adjustments are absolute amounts.
pub fn calculate_proposal_total(
    items: &[Decimal],
    general_discount: Decimal,
    displacement_fee: Decimal,
) -> Result<Decimal> {
    let subtotal = sum_items(items)?;
    let discounted = subtotal.checked_sub(general_discount).ok_or_else(|| {
        PricingError::invalid_input("generalDiscount", OUT_OF_RANGE)
    })?;
    checked_sum(discounted, displacement_fee, "displacementFee")
}

fn sum_items(items: &[Decimal]) -> Result<Decimal> {
    items
        .iter()
        .try_fold(Decimal::ZERO, |acc, value| checked_sum(acc, *value, "items"))
}

/// Totals a proposal made of priced lines (`unit_price × quantity` each).
pub fn calculate_proposal_quote(input: &ProposalTotalInput) -> Result<ProposalTotalResult> {
    let line_totals = input
        .items
        .iter()
        .map(ProposalLine::line_total)
        .collect::<Result<Vec<Decimal>>>()?;
    let subtotal = sum_items(&line_totals)?;
    let total = calculate_proposal_total(
        &line_totals,
        input.general_discount,
        input.displacement_fee,
    )?;

    debug!(
        "Proposal total over {} lines: subtotal={} total={}",
        line_totals.len(),
        subtotal,
        total
    );

    Ok(ProposalTotalResult {
        subtotal,
        general_discount: input.general_discount,
        displacement_fee: input.displacement_fee,
        total,
    })
}
