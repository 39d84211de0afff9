use anyhow::{anyhow, bail, Context, Result};
use pgr_core::pricing::{PricingBasis, TaxRates};
use rust_decimal::Decimal;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Tenant cost basis; `None` means items are priced from their base price.
    pub basis: Option<PricingBasis>,
    pub tax_rates: TaxRates,
    pub log_format: LogFormat,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key lookup. Absent keys take their
    /// defaults; present but malformed values are errors.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let decimal = |key: &str| -> Result<Option<Decimal>> {
            match lookup(key) {
                Some(raw) if !raw.trim().is_empty() => raw
                    .trim()
                    .parse::<Decimal>()
                    .map(Some)
                    .with_context(|| format!("Invalid {}: '{}'", key, raw)),
                _ => Ok(None),
            }
        };

        let basis = match (
            decimal("PGR_FIXED_COSTS")?,
            decimal("PGR_PRO_LABOR")?,
            decimal("PGR_PRODUCTIVE_HOURS")?,
        ) {
            (Some(fixed_costs), Some(pro_labor), Some(productive_hours)) => {
                Some(PricingBasis::new(fixed_costs, pro_labor, productive_hours))
            }
            (None, None, None) => None,
            _ => bail!(
                "PGR_FIXED_COSTS, PGR_PRO_LABOR and PGR_PRODUCTIVE_HOURS must be set together"
            ),
        };

        let tax_rates = TaxRates {
            mei: decimal("PGR_TAX_RATE_MEI")?.unwrap_or_default(),
            simples_nacional: decimal("PGR_TAX_RATE_SIMPLES")?.unwrap_or_default(),
            lucro_presumido: decimal("PGR_TAX_RATE_LUCRO_PRESUMIDO")?.unwrap_or_default(),
            autonomo: decimal("PGR_TAX_RATE_AUTONOMO")?.unwrap_or_default(),
        };

        let log_format = match lookup("PGR_LOG_FORMAT") {
            None => LogFormat::Text,
            Some(raw) if raw.eq_ignore_ascii_case("text") || raw.trim().is_empty() => {
                LogFormat::Text
            }
            Some(raw) if raw.eq_ignore_ascii_case("json") => LogFormat::Json,
            Some(raw) => return Err(anyhow!("Invalid PGR_LOG_FORMAT: '{}'", raw)),
        };

        Ok(Self {
            basis,
            tax_rates,
            log_format,
        })
    }
}
