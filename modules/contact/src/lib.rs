//! Contact form submission pipeline.
//!
//! One flow: rate-limit by caller address, validate fields, best-effort
//! notification email, unconditional persistence of the message record.

pub mod api;
pub mod config;
pub mod domain;
pub mod infra;

pub use config::ContactConfig;
pub use domain::service::ContactService;
