//! PGR Core - Pricing and psychosocial risk-scoring engines.
//!
//! This crate contains the computational core of the PGR/NR-01 consulting
//! platform. It is storage- and transport-agnostic: every operation is a
//! pure, synchronous function of its inputs, safe to call concurrently
//! without locking.

pub mod constants;
pub mod errors;
pub mod pricing;
pub mod psychosocial;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
