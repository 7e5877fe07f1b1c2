//! Configuration enumerations.

/// Errors raised while loading or validating the configuration file.
pub mod configuration_error;
