//! Career readiness aggregation and journey progression engine.
//!
//! The decision core lives in [`journeys::readiness`]: composing factor
//! fractions into one composite score, gating the five-stage student
//! journey, and planning prioritized next actions. Everything network- or
//! storage-shaped is behind provider traits so the core stays pure and
//! deterministic.

pub mod config;
pub mod error;
pub mod journeys;
pub mod telemetry;
