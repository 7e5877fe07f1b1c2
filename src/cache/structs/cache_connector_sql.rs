use crate::cache::enums::cache_driver::CacheDriver;
use crate::cache::enums::database_drivers::DatabaseDrivers;
use sqlx::AnyPool;

#[derive(Debug, Clone)]
pub struct CacheConnectorSql {
    pub(crate) pool: AnyPool,
    pub(crate) driver: CacheDriver,
    pub(crate) engine: DatabaseDrivers,
    pub(crate) table: String,
}
