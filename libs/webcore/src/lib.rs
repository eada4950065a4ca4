//! Shared HTTP plumbing for the portfolio backend.
//!
//! Everything here is deliberately free of storage or provider concerns so the
//! feature modules (`contact`, `reviews`) can depend on it without dragging in
//! each other's stacks.

pub mod auth;
pub mod client_ip;
pub mod envelope;
pub mod rate_limit;
pub mod rules;

pub use auth::{Identity, JwtVerifier};
pub use envelope::{DataBody, FailureBody, MessageBody};
pub use rate_limit::{Decision, SlidingWindowLimiter};
