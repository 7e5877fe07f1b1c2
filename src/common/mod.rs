//! Common utilities and shared functionality.
//!
//! Helpers used by every other module: logging setup, expiry arithmetic and
//! the "is this parameter empty" check applied to driver parameters.
//!
//! # Example
//!
//! ```rust,ignore
//! use multicache::common::common::{expiration_millis, is_expired};
//!
//! let expires_at = expiration_millis(Some(60));
//! assert!(!is_expired(expires_at));
//! ```

/// Common data structures (errors).
pub mod structs;

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;

/// Implementation blocks for common types.
pub mod impls;

#[cfg(test)]
mod tests;
