//! Brazilian tax regimes and tenant tax-rate lookup.

use log::{debug, warn};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::ValidationError;

/// Tax regime a consultancy invoices under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaxRegime {
    #[serde(rename = "MEI")]
    Mei,
    #[serde(rename = "Simples Nacional")]
    SimplesNacional,
    #[serde(rename = "Lucro Presumido")]
    LucroPresumido,
    #[serde(rename = "Autônomo", alias = "Autonomo")]
    Autonomo,
}

impl TaxRegime {
    pub const ALL: [TaxRegime; 4] = [
        TaxRegime::Mei,
        TaxRegime::SimplesNacional,
        TaxRegime::LucroPresumido,
        TaxRegime::Autonomo,
    ];

    /// Returns the label used by the product for this regime.
    pub fn label(&self) -> &'static str {
        match self {
            TaxRegime::Mei => "MEI",
            TaxRegime::SimplesNacional => "Simples Nacional",
            TaxRegime::LucroPresumido => "Lucro Presumido",
            TaxRegime::Autonomo => "Autônomo",
        }
    }
}

impl std::fmt::Display for TaxRegime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for TaxRegime {
    type Err = ValidationError;

    /// Accepts the product labels as well as unaccented and snake_case spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s
            .trim()
            .to_lowercase()
            .replace(['_', '-'], " ")
            .replace('ô', "o");

        match normalized.as_str() {
            "mei" => Ok(TaxRegime::Mei),
            "simples nacional" | "simples" => Ok(TaxRegime::SimplesNacional),
            "lucro presumido" => Ok(TaxRegime::LucroPresumido),
            "autonomo" => Ok(TaxRegime::Autonomo),
            _ => Err(ValidationError::InvalidInput(format!(
                "Unknown tax regime '{}'",
                s
            ))),
        }
    }
}

/// Tax-rate percentages configured by a tenant, one per regime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxRates {
    pub mei: Decimal,
    pub simples_nacional: Decimal,
    pub lucro_presumido: Decimal,
    pub autonomo: Decimal,
}

impl TaxRates {
    pub fn rate_for(&self, regime: TaxRegime) -> Decimal {
        match regime {
            TaxRegime::Mei => self.mei,
            TaxRegime::SimplesNacional => self.simples_nacional,
            TaxRegime::LucroPresumido => self.lucro_presumido,
            TaxRegime::Autonomo => self.autonomo,
        }
    }
}

/// Looks up the tenant's tax rate for a regime given by name.
///
/// An unrecognized regime yields 0% rather than an error, so a mistyped
/// regime produces an untaxed value. The fallback is logged at warn level.
pub fn get_tax_rate_for_regime(regime: &str, rates: &TaxRates) -> Decimal {
    match regime.parse::<TaxRegime>() {
        Ok(parsed) => {
            let rate = rates.rate_for(parsed);
            debug!("Tax rate for regime {}: {}%", parsed, rate);
            rate
        }
        Err(_) => {
            warn!(
                "Unrecognized tax regime '{}'. Falling back to a 0% tax rate.",
                regime
            );
            Decimal::ZERO
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn tenant_rates() -> TaxRates {
        TaxRates {
            mei: dec!(3.5),
            simples_nacional: dec!(6.0),
            lucro_presumido: dec!(8.0),
            autonomo: dec!(11.0),
        }
    }

    #[test]
    fn test_rate_for_each_regime_label() {
        let rates = tenant_rates();
        assert_eq!(get_tax_rate_for_regime("MEI", &rates), dec!(3.5));
        assert_eq!(get_tax_rate_for_regime("Simples Nacional", &rates), dec!(6.0));
        assert_eq!(get_tax_rate_for_regime("Lucro Presumido", &rates), dec!(8.0));
        assert_eq!(get_tax_rate_for_regime("Autônomo", &rates), dec!(11.0));
    }

    #[test]
    fn test_unknown_regime_defaults_to_zero() {
        let rates = tenant_rates();
        assert_eq!(get_tax_rate_for_regime("unknown-regime", &rates), Decimal::ZERO);
        assert_eq!(get_tax_rate_for_regime("Unknown", &rates), Decimal::ZERO);
        assert_eq!(get_tax_rate_for_regime("", &rates), Decimal::ZERO);
    }

    #[test]
    fn test_parse_accepts_alternate_spellings() {
        assert_eq!("Autonomo".parse::<TaxRegime>().unwrap(), TaxRegime::Autonomo);
        assert_eq!(
            "simples_nacional".parse::<TaxRegime>().unwrap(),
            TaxRegime::SimplesNacional
        );
        assert_eq!(
            " lucro-presumido ".parse::<TaxRegime>().unwrap(),
            TaxRegime::LucroPresumido
        );
        assert_eq!("mei".parse::<TaxRegime>().unwrap(), TaxRegime::Mei);
    }

    #[test]
    fn test_label_round_trips_through_parse() {
        for regime in TaxRegime::ALL {
            assert_eq!(regime.label().parse::<TaxRegime>().unwrap(), regime);
        }
    }

    #[test]
    fn test_serde_uses_product_labels() {
        assert_eq!(
            serde_json::to_string(&TaxRegime::SimplesNacional).unwrap(),
            "\"Simples Nacional\""
        );
        assert_eq!(
            serde_json::from_str::<TaxRegime>("\"Autonomo\"").unwrap(),
            TaxRegime::Autonomo
        );
    }
}
