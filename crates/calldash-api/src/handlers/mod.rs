//! HTTP request handlers

pub mod billing;
pub mod dashboard;
pub mod session;

pub use billing::configure as configure_billing;
pub use dashboard::configure as configure_dashboard;
