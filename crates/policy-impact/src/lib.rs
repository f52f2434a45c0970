//! Scenario comparisons and stakeholder narratives for a single accounting
//! policy decision.
//!
//! The [`evaluation`] module holds the pure core; [`config`], [`error`] and
//! [`telemetry`] carry the service plumbing shared with the API binary.

pub mod config;
pub mod error;
pub mod evaluation;
pub mod telemetry;
