//! # Storefront Server Library
//!
//! Core library behind the Storefront application: everything that touches
//! untrusted input or the network lives here.
//!
//! ## Modules
//!
//! - [`catalog`] - Product catalog client and ingress coercion
//! - [`common`] - Error types and the sliding-window rate limiter
//! - [`security`] - Input validation, HTML sanitization and the audit log
//! - [`utils`] - Environment variable helpers

pub mod catalog;
pub mod common;
pub mod security;
pub mod utils;
