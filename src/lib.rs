//! ICSPS maturity assessment service.
//!
//! Scores a country's maturity in vaccine forecasting and supply planning
//! from a fixed multi-section questionnaire, classifies the total into one
//! of three maturity bands, and appends finalized results to a shared
//! tabular store.

pub mod assessment;
pub mod config;
pub mod error;
pub mod telemetry;
