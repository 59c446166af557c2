//! Error handling for the I151 engine.

pub mod domain;

pub use domain::DomainError;
