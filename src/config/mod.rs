//! # Configuration Module
//!
//! Configuration structures and validation for target-resolution
//! calculation.

pub mod config;

pub use config::ResolutionConfig;
