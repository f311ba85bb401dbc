//! Service plumbing shared by stepauth binaries.
//!
//! Error responses, health probes, request-id middleware, tracing and
//! environment configuration helpers.

pub mod config;
pub mod error;
pub mod health;
pub mod middleware;
pub mod tracing;
