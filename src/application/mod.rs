//! Application layer: services and the sample office
//!
//! This layer orchestrates domain logic for the CLI.

pub mod error;
pub mod sample;
pub mod services;

pub use error::{ApplicationError, ApplicationResult};
