//! Psychosocial risk scoring (COPSOQ II).
//!
//! Turns per-question Likert answers (0 = never ... 4 = always) into
//! dimension-level averages and an overall risk band:
//!
//! ```text
//! responses ──► score_dimension (×7) ──► mean of dimension averages ──► overall risk
//!     │
//!     └──────► score_individual (one respondent)
//! ```
//!
//! - **Models** (`psychosocial_model.rs`) - Dimensions, responses, scores, risk bands
//! - **Catalog** (`catalog.rs`) - The 50-question mapping to dimensions
//! - **Scoring** (`scoring.rs`) - Aggregation and classification
//!
//! # Risk bands
//!
//! An average of 3.0 or more is **high**, 2.0 or more is **medium**, anything
//! lower is **low**. An analysis with no responses is **no_data**.

pub mod catalog;
mod psychosocial_model;
mod scoring;

pub use catalog::{default_dimensions, dimension_metadata, CopsoqQuestion, COPSOQ_QUESTIONS};
pub use psychosocial_model::*;
pub use scoring::*;
