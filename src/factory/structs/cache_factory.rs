use crate::factory::structs::driver_descriptor::DriverDescriptor;
use ahash::AHashMap;

#[derive(Debug, Clone)]
pub struct CacheFactory {
    pub(crate) drivers: AHashMap<&'static str, DriverDescriptor>,
}
