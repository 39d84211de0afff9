use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Percent denominator used by every percentage stage of the pricing pipeline
pub const PERCENT: Decimal = dec!(100);

/// Productive hours per month assumed when a tenant has no cost basis configured
pub const DEFAULT_PRODUCTIVE_HOURS: Decimal = dec!(160);

/// Share of the base price treated as pro-labor in the fallback cost basis
pub const DEFAULT_PRO_LABOR_FACTOR: Decimal = dec!(0.2);

/// Lowest valid Likert answer
pub const LIKERT_MIN: i32 = 0;

/// Highest valid Likert answer
pub const LIKERT_MAX: i32 = 4;

/// Average score from which a dimension is classified as medium risk (inclusive)
pub const MEDIUM_RISK_THRESHOLD: Decimal = dec!(2.0);

/// Average score from which a dimension is classified as high risk (inclusive)
pub const HIGH_RISK_THRESHOLD: Decimal = dec!(3.0);
