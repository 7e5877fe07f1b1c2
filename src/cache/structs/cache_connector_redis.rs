use crate::cache::enums::cache_driver::CacheDriver;
use redis::aio::MultiplexedConnection;

#[derive(Clone)]
pub struct CacheConnectorRedis {
    pub(crate) connection: MultiplexedConnection,
    pub(crate) driver: CacheDriver,
    pub(crate) address: String,
}
