//! Domain models
//!
//! Data structures shared across the CallDash service.

pub mod billing;
pub mod call;
pub mod session;

pub use billing::BillingProfile;
pub use call::{CallAnalysis, CallCost, CallRecord};
pub use session::Session;
