pub mod error;
pub mod mailer;
pub mod model;
pub mod repo;
pub mod rules;
pub mod service;
