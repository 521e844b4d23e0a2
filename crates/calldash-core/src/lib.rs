//! CallDash Core Library
//!
//! This crate provides the foundational types, traits, and error handling
//! for the CallDash dashboard service. It includes:
//!
//! - Domain models (CallRecord, BillingProfile, Session)
//! - Common traits for repositories and the call provider
//! - Pure presentation helpers for display-derived values
//! - Unified error handling with HTTP response mapping
//! - Application configuration

pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod traits;

pub use config::AppConfig;
pub use error::AppError;

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;
