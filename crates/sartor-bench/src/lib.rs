//! # sartor-bench
//!
//! Canonical drape scenarios for regression testing and performance
//! tracking, a runner that executes them through the pipeline, and
//! CSV-formatted metrics.

pub mod metrics;
pub mod runner;
pub mod scenarios;

pub use metrics::DrapeMetrics;
pub use runner::BenchmarkRunner;
pub use scenarios::{Scenario, ScenarioKind};
