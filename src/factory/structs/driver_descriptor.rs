use crate::cache::errors::CacheError;
use crate::cache::traits::cache_backend::CacheBackend;
use crate::factory::structs::cache_factory::CacheFactory;
use crate::factory::structs::driver_parameters::DriverParameters;
use futures_util::future::BoxFuture;
use std::sync::Arc;

pub type DriverFuture<'a> = BoxFuture<'a, Result<Arc<dyn CacheBackend>, CacheError>>;

pub type DriverConstructor = for<'a> fn(&'a CacheFactory, DriverParameters<'a>) -> DriverFuture<'a>;

#[derive(Clone, Copy)]
pub struct DriverDescriptor {
    pub name: &'static str,
    /// Parameters that must be present and non-empty before the constructor runs.
    pub required: &'static [&'static str],
    pub constructor: DriverConstructor,
}
