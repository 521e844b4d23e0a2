//! CallDash Provider Client
//!
//! Typed HTTP client for the remote call-listing service. One remote
//! procedure is exposed: list up to a fixed number of recent calls.

pub mod client;

pub use client::HttpCallProvider;
