// Appeals Admin Backend - Reporting Core
//
// This crate computes read-only statistics over appeals (support tickets) and
// published content for the admin dashboard.
// Architecture follows domain-driven design: SQL lives on domain models,
// report assembly lives in domains/analytics/activities.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
