//! # DTOs

pub mod configuration;

pub use configuration::Configuration;
