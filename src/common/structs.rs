//! Common data structures.

/// Plain message error used by the binary and the configuration loader.
pub mod custom_error;
