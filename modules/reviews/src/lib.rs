//! User review submission pipeline.
//!
//! One review per authenticated identity: the storage-level unique key on
//! `user_id` is the authoritative guard; the application-level existence check
//! is a fast path only.

pub mod api;
pub mod domain;
pub mod infra;

pub use domain::service::ReviewService;
