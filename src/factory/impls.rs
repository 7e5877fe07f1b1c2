//! Implementation blocks for the driver factory.

/// CacheFactory: registration, lookup and `build`.
pub mod cache_factory;

/// DriverDescriptor: Debug output.
pub mod driver_descriptor;

/// DriverParameters: presence checks and typed accessors.
pub mod driver_parameters;

/// Parsing of parameter maps into typed connector options.
pub mod connector_options;
