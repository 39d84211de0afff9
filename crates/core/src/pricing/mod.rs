//! Pricing engine - technical-hour rate to final proposal value.
//!
//! The pipeline has five stages, each exposed as its own function so callers
//! can show the breakdown on a quote:
//!
//! ```text
//! cost basis → technical hour → + taxes → × estimated hours
//!            → × adjustments (compounded) → × (1 - volume discount)
//! ```
//!
//! All arithmetic is `Decimal`; nothing is rounded between stages.

mod pricing_calculator;
mod pricing_model;
mod tax_regime;

pub use pricing_calculator::*;
pub use pricing_model::*;
pub use tax_regime::*;
