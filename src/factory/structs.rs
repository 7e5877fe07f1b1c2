//! Driver factory structures.

/// Dispatch table from driver name to descriptor.
pub mod cache_factory;

/// Driver name, required parameters and constructor function.
pub mod driver_descriptor;

/// Read-only view over one driver's parameter map.
pub mod driver_parameters;
