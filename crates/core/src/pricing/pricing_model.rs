//! Pricing domain models.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_PRODUCTIVE_HOURS, DEFAULT_PRO_LABOR_FACTOR, DISPLAY_DECIMAL_PRECISION};
use crate::errors::{PricingError, Result};

use super::tax_regime::{TaxRates, TaxRegime};

/// Rounds a value for presentation. Never used between pipeline stages.
pub fn round_for_display(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(
        DISPLAY_DECIMAL_PRECISION,
        RoundingStrategy::MidpointAwayFromZero,
    )
}

/// Monthly cost basis from which the technical-hour rate is derived.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingBasis {
    pub fixed_costs: Decimal,
    pub pro_labor: Decimal,
    /// Division denominator of the technical-hour rate; must be > 0.
    pub productive_hours: Decimal,
}

impl PricingBasis {
    pub fn new(fixed_costs: Decimal, pro_labor: Decimal, productive_hours: Decimal) -> Self {
        Self {
            fixed_costs,
            pro_labor,
            productive_hours,
        }
    }

    /// Fallback basis for tenants without configured costs: the base price
    /// stands in for fixed costs, 20% of it for pro-labor, over 160 hours.
    pub fn from_base_price(base_price: Decimal) -> Self {
        Self {
            fixed_costs: base_price,
            pro_labor: base_price * DEFAULT_PRO_LABOR_FACTOR,
            productive_hours: DEFAULT_PRODUCTIVE_HOURS,
        }
    }
}

/// Per-item pricing input. Percentages are expressed as 0-100, not 0-1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposalItemInput {
    pub base_price: Decimal,
    pub estimated_hours: Decimal,
    pub tax_rate: Decimal,
    #[serde(default)]
    pub adjustment_personalization: Decimal,
    #[serde(default)]
    pub adjustment_risk: Decimal,
    #[serde(default)]
    pub adjustment_seniority: Decimal,
    #[serde(default)]
    pub volume_discount: Decimal,
}

/// Output of every pipeline stage, in order.
///
/// All fields are derived; the struct is only ever built by the calculator
/// so the breakdown shown on a quote always matches the final value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposalItemResult {
    pub technical_hour: Decimal,
    pub value_with_taxes: Decimal,
    pub base_value: Decimal,
    pub adjusted_value: Decimal,
    pub discounted_value: Decimal,
}

impl ProposalItemResult {
    /// Returns a copy with every stage rounded for display.
    pub fn rounded(&self) -> Self {
        Self {
            technical_hour: round_for_display(self.technical_hour),
            value_with_taxes: round_for_display(self.value_with_taxes),
            base_value: round_for_display(self.base_value),
            adjusted_value: round_for_display(self.adjusted_value),
            discounted_value: round_for_display(self.discounted_value),
        }
    }
}

/// A priced line of a proposal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposalLine {
    pub unit_price: Decimal,
    #[serde(default = "default_quantity")]
    pub quantity: Decimal,
}

fn default_quantity() -> Decimal {
    Decimal::ONE
}

impl ProposalLine {
    /// `unit_price × quantity`; fails when the product leaves the decimal range.
    pub fn line_total(&self) -> Result<Decimal> {
        self.unit_price
            .checked_mul(self.quantity)
            .ok_or_else(|| PricingError::invalid_input("quantity", "is too large to price").into())
    }
}

/// Proposal-level totals request. Discount and fee are absolute amounts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposalTotalInput {
    pub items: Vec<ProposalLine>,
    #[serde(default)]
    pub general_discount: Decimal,
    #[serde(default)]
    pub displacement_fee: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposalTotalResult {
    pub subtotal: Decimal,
    pub general_discount: Decimal,
    pub displacement_fee: Decimal,
    pub total: Decimal,
}

impl ProposalTotalResult {
    /// Returns a copy with every amount rounded for display.
    pub fn rounded(&self) -> Self {
        Self {
            subtotal: round_for_display(self.subtotal),
            general_discount: round_for_display(self.general_discount),
            displacement_fee: round_for_display(self.displacement_fee),
            total: round_for_display(self.total),
        }
    }
}

/// Tenant pricing configuration: regime tax rates plus the cost basis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingParameters {
    #[serde(default, rename = "taxRateMEI")]
    pub tax_rate_mei: Decimal,
    #[serde(default)]
    pub tax_rate_simples: Decimal,
    #[serde(default)]
    pub tax_rate_lucro_presumido: Decimal,
    #[serde(default)]
    pub tax_rate_autonomo: Decimal,
    pub fixed_costs: Decimal,
    pub pro_labor: Decimal,
    pub productive_hours: Decimal,
}

impl PricingParameters {
    pub fn basis(&self) -> PricingBasis {
        PricingBasis::new(self.fixed_costs, self.pro_labor, self.productive_hours)
    }

    pub fn tax_rates(&self) -> TaxRates {
        TaxRates {
            mei: self.tax_rate_mei,
            simples_nacional: self.tax_rate_simples,
            lucro_presumido: self.tax_rate_lucro_presumido,
            autonomo: self.tax_rate_autonomo,
        }
    }

    pub fn tax_rate_for(&self, regime: TaxRegime) -> Decimal {
        self.tax_rates().rate_for(regime)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_fallback_basis_from_base_price() {
        let basis = PricingBasis::from_base_price(dec!(5000));
        assert_eq!(basis.fixed_costs, dec!(5000));
        assert_eq!(basis.pro_labor, dec!(1000));
        assert_eq!(basis.productive_hours, dec!(160));
    }

    #[test]
    fn test_round_for_display_midpoint_away_from_zero() {
        assert_eq!(round_for_display(dec!(1.005)), dec!(1.01));
        assert_eq!(round_for_display(dec!(-1.005)), dec!(-1.01));
        assert_eq!(round_for_display(dec!(43.75)), dec!(43.75));
    }

    #[test]
    fn test_item_input_adjustments_default_to_zero() {
        let json = r#"{"basePrice": 1000, "estimatedHours": 10, "taxRate": 6}"#;
        let input: ProposalItemInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.base_price, dec!(1000));
        assert_eq!(input.tax_rate, dec!(6));
        assert_eq!(input.adjustment_personalization, Decimal::ZERO);
        assert_eq!(input.adjustment_risk, Decimal::ZERO);
        assert_eq!(input.adjustment_seniority, Decimal::ZERO);
        assert_eq!(input.volume_discount, Decimal::ZERO);
    }

    #[test]
    fn test_item_result_serializes_camel_case() {
        let result = ProposalItemResult {
            technical_hour: dec!(37.5),
            value_with_taxes: dec!(39.75),
            base_value: dec!(397.5),
            adjusted_value: dec!(397.5),
            discounted_value: dec!(397.5),
        };
        let value = serde_json::to_value(result).unwrap();
        assert_eq!(value["technicalHour"], serde_json::json!(37.5));
        assert_eq!(value["valueWithTaxes"], serde_json::json!(39.75));
        assert_eq!(value["discountedValue"], serde_json::json!(397.5));
    }

    #[test]
    fn test_proposal_line_quantity_defaults_to_one() {
        let line: ProposalLine = serde_json::from_str(r#"{"unitPrice": 250.5}"#).unwrap();
        assert_eq!(line.quantity, Decimal::ONE);
        assert_eq!(line.line_total().unwrap(), dec!(250.5));
    }

    #[test]
    fn test_pricing_parameters_map_to_rates_and_basis() {
        let json = r#"{
            "taxRateMEI": 3.5,
            "taxRateSimples": 6,
            "taxRateLucroPresumido": 8,
            "taxRateAutonomo": 11,
            "fixedCosts": 5000,
            "proLabor": 1000,
            "productiveHours": 160
        }"#;
        let params: PricingParameters = serde_json::from_str(json).unwrap();
        assert_eq!(params.tax_rate_for(TaxRegime::Mei), dec!(3.5));
        assert_eq!(params.tax_rate_for(TaxRegime::Autonomo), dec!(11));
        assert_eq!(
            params.basis(),
            PricingBasis::new(dec!(5000), dec!(1000), dec!(160))
        );
    }
}
