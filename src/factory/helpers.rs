use crate::cache::enums::cache_driver::CacheDriver;
use crate::cache::errors::CacheError;
use crate::cache::structs::cache_connector_chain::CacheConnectorChain;
use crate::cache::structs::cache_connector_file::CacheConnectorFile;
use crate::cache::structs::cache_connector_memcache::CacheConnectorMemcache;
use crate::cache::structs::cache_connector_memory::CacheConnectorMemory;
use crate::cache::structs::cache_connector_mongodb::CacheConnectorMongoDb;
use crate::cache::structs::cache_connector_redis::CacheConnectorRedis;
use crate::cache::structs::cache_connector_riak::CacheConnectorRiak;
use crate::cache::structs::cache_connector_sql::CacheConnectorSql;
use crate::cache::structs::cache_connector_void::CacheConnectorVoid;
use crate::cache::structs::connector_options::{
    FileOptions, MemcacheOptions, MongoDbOptions, RedisOptions, RiakOptions, SqlOptions,
};
use crate::cache::traits::cache_backend::CacheBackend;
use crate::factory::structs::cache_factory::CacheFactory;
use crate::factory::structs::driver_descriptor::{DriverDescriptor, DriverFuture};
use crate::factory::structs::driver_parameters::DriverParameters;
use serde_json::{Map, Value};
use std::sync::Arc;

const NO_PARAMETERS: &[&str] = &[];

/// Every driver known out of the box.
pub static BUILTIN_DRIVERS: &[DriverDescriptor] = &[
    DriverDescriptor { name: CacheDriver::array.as_str(), required: NO_PARAMETERS, constructor: build_array },
    DriverDescriptor { name: CacheDriver::apcu.as_str(), required: NO_PARAMETERS, constructor: build_apcu },
    DriverDescriptor { name: CacheDriver::xcache.as_str(), required: NO_PARAMETERS, constructor: build_xcache },
    DriverDescriptor { name: CacheDriver::wincache.as_str(), required: NO_PARAMETERS, constructor: build_wincache },
    DriverDescriptor { name: CacheDriver::zenddata.as_str(), required: NO_PARAMETERS, constructor: build_zenddata },
    DriverDescriptor { name: CacheDriver::void.as_str(), required: NO_PARAMETERS, constructor: build_void },
    DriverDescriptor { name: CacheDriver::redis.as_str(), required: &["host", "port"], constructor: build_redis },
    DriverDescriptor { name: CacheDriver::predis.as_str(), required: &["scheme"], constructor: build_predis },
    DriverDescriptor { name: CacheDriver::memcached.as_str(), required: &["host", "port"], constructor: build_memcached },
    DriverDescriptor { name: CacheDriver::memcache.as_str(), required: &["host", "port"], constructor: build_memcache },
    DriverDescriptor { name: CacheDriver::couchbase.as_str(), required: &["host", "port"], constructor: build_couchbase },
    DriverDescriptor { name: CacheDriver::filesystem.as_str(), required: NO_PARAMETERS, constructor: build_filesystem },
    DriverDescriptor { name: CacheDriver::file.as_str(), required: NO_PARAMETERS, constructor: build_file },
    DriverDescriptor { name: CacheDriver::phpfile.as_str(), required: &["directory"], constructor: build_phpfile },
    DriverDescriptor { name: CacheDriver::mongodb.as_str(), required: &["server", "name", "collection"], constructor: build_mongodb },
    DriverDescriptor { name: CacheDriver::riak.as_str(), required: &["host", "port", "bucket"], constructor: build_riak },
    DriverDescriptor { name: CacheDriver::sqlite3.as_str(), required: &["filename", "table"], constructor: build_sqlite3 },
    DriverDescriptor { name: CacheDriver::pdo.as_str(), required: &["dns", "table"], constructor: build_pdo },
    DriverDescriptor { name: CacheDriver::chain.as_str(), required: &["providers"], constructor: build_chain },
];

fn ready(backend: impl CacheBackend + 'static) -> DriverFuture<'static> {
    let backend: Arc<dyn CacheBackend> = Arc::new(backend);
    Box::pin(async move { Ok::<_, CacheError>(backend) })
}

fn build_array<'a>(_: &'a CacheFactory, _: DriverParameters<'a>) -> DriverFuture<'a> {
    ready(CacheConnectorMemory::for_driver(CacheDriver::array))
}

fn build_apcu<'a>(_: &'a CacheFactory, _: DriverParameters<'a>) -> DriverFuture<'a> {
    ready(CacheConnectorMemory::for_driver(CacheDriver::apcu))
}

fn build_xcache<'a>(_: &'a CacheFactory, _: DriverParameters<'a>) -> DriverFuture<'a> {
    ready(CacheConnectorMemory::for_driver(CacheDriver::xcache))
}

fn build_wincache<'a>(_: &'a CacheFactory, _: DriverParameters<'a>) -> DriverFuture<'a> {
    ready(CacheConnectorMemory::for_driver(CacheDriver::wincache))
}

fn build_zenddata<'a>(_: &'a CacheFactory, _: DriverParameters<'a>) -> DriverFuture<'a> {
    ready(CacheConnectorMemory::for_driver(CacheDriver::zenddata))
}

fn build_void<'a>(_: &'a CacheFactory, _: DriverParameters<'a>) -> DriverFuture<'a> {
    ready(CacheConnectorVoid)
}

fn build_redis<'a>(_: &'a CacheFactory, params: DriverParameters<'a>) -> DriverFuture<'a> {
    Box::pin(async move {
        let options = RedisOptions::from_parameters(&params)?;
        let backend: Arc<dyn CacheBackend> = Arc::new(CacheConnectorRedis::connect(CacheDriver::redis, &options).await?);
        Ok::<_, CacheError>(backend)
    })
}

fn build_predis<'a>(_: &'a CacheFactory, params: DriverParameters<'a>) -> DriverFuture<'a> {
    Box::pin(async move {
        let options = RedisOptions::from_predis_parameters(&params)?;
        let backend: Arc<dyn CacheBackend> = Arc::new(CacheConnectorRedis::connect(CacheDriver::predis, &options).await?);
        Ok::<_, CacheError>(backend)
    })
}

/// The memcache client connects synchronously, so it runs on the blocking pool.
async fn connect_memcache(driver: CacheDriver, options: MemcacheOptions) -> Result<Arc<dyn CacheBackend>, CacheError> {
    let connector = tokio::task::spawn_blocking(move || CacheConnectorMemcache::connect(driver, &options))
        .await
        .map_err(|e| CacheError::connection(driver.as_str(), e))??;
    Ok(Arc::new(connector))
}

fn build_memcached<'a>(_: &'a CacheFactory, params: DriverParameters<'a>) -> DriverFuture<'a> {
    Box::pin(async move {
        let options = MemcacheOptions::from_parameters(&params)?;
        connect_memcache(CacheDriver::memcached, options).await
    })
}

fn build_memcache<'a>(_: &'a CacheFactory, params: DriverParameters<'a>) -> DriverFuture<'a> {
    Box::pin(async move {
        let options = MemcacheOptions::from_parameters(&params)?;
        connect_memcache(CacheDriver::memcache, options).await
    })
}

fn build_couchbase<'a>(_: &'a CacheFactory, params: DriverParameters<'a>) -> DriverFuture<'a> {
    Box::pin(async move {
        let options = MemcacheOptions::from_couchbase_parameters(&params)?;
        connect_memcache(CacheDriver::couchbase, options).await
    })
}

async fn open_file(driver: CacheDriver, options: FileOptions) -> Result<Arc<dyn CacheBackend>, CacheError> {
    Ok(Arc::new(CacheConnectorFile::open(driver, &options).await?))
}

fn build_filesystem<'a>(_: &'a CacheFactory, params: DriverParameters<'a>) -> DriverFuture<'a> {
    Box::pin(async move {
        let options = FileOptions::from_filesystem_parameters(&params)?;
        open_file(CacheDriver::filesystem, options).await
    })
}

fn build_file<'a>(_: &'a CacheFactory, params: DriverParameters<'a>) -> DriverFuture<'a> {
    Box::pin(async move {
        let options = FileOptions::from_filesystem_parameters(&params)?;
        open_file(CacheDriver::file, options).await
    })
}

fn build_phpfile<'a>(_: &'a CacheFactory, params: DriverParameters<'a>) -> DriverFuture<'a> {
    Box::pin(async move {
        let options = FileOptions::from_phpfile_parameters(&params)?;
        open_file(CacheDriver::phpfile, options).await
    })
}

fn build_mongodb<'a>(_: &'a CacheFactory, params: DriverParameters<'a>) -> DriverFuture<'a> {
    Box::pin(async move {
        let options = MongoDbOptions::from_parameters(&params)?;
        let backend: Arc<dyn CacheBackend> = Arc::new(CacheConnectorMongoDb::connect(&options).await?);
        Ok::<_, CacheError>(backend)
    })
}

fn build_riak<'a>(_: &'a CacheFactory, params: DriverParameters<'a>) -> DriverFuture<'a> {
    Box::pin(async move {
        let options = RiakOptions::from_parameters(&params)?;
        let backend: Arc<dyn CacheBackend> = Arc::new(CacheConnectorRiak::connect(&options).await?);
        Ok::<_, CacheError>(backend)
    })
}

fn build_sqlite3<'a>(_: &'a CacheFactory, params: DriverParameters<'a>) -> DriverFuture<'a> {
    Box::pin(async move {
        let options = SqlOptions::from_sqlite_parameters(&params)?;
        let backend: Arc<dyn CacheBackend> = Arc::new(CacheConnectorSql::connect(CacheDriver::sqlite3, &options).await?);
        Ok::<_, CacheError>(backend)
    })
}

fn build_pdo<'a>(_: &'a CacheFactory, params: DriverParameters<'a>) -> DriverFuture<'a> {
    Box::pin(async move {
        let options = SqlOptions::from_pdo_parameters(&params)?;
        let backend: Arc<dyn CacheBackend> = Arc::new(CacheConnectorSql::connect(CacheDriver::pdo, &options).await?);
        Ok::<_, CacheError>(backend)
    })
}

/// Each provider is `{driver, parameters}` and goes back through the factory.
fn build_chain<'a>(factory: &'a CacheFactory, params: DriverParameters<'a>) -> DriverFuture<'a> {
    Box::pin(async move {
        let providers = params
            .array("providers")?
            .ok_or_else(|| CacheError::missing_fields(params.driver(), &["providers"]))?;
        let empty = Map::new();
        let mut members = Vec::with_capacity(providers.len());
        for (index, provider) in providers.iter().enumerate() {
            let invalid = |message: &str| {
                CacheError::invalid_field(params.driver(), "providers", format!("provider #{}: {}", index, message))
            };
            let Value::Object(provider) = provider else {
                return Err(invalid("must be a table with \"driver\" and \"parameters\""));
            };
            let driver = match provider.get("driver") {
                None | Some(Value::Null) => CacheDriver::array.as_str(),
                Some(Value::String(driver)) => driver.as_str(),
                Some(_) => return Err(invalid("\"driver\" must be a string")),
            };
            let parameters = match provider.get("parameters") {
                None | Some(Value::Null) => &empty,
                Some(Value::Object(parameters)) => parameters,
                Some(_) => return Err(invalid("\"parameters\" must be a table")),
            };
            members.push(factory.build(driver, parameters).await?);
        }
        let backend: Arc<dyn CacheBackend> = Arc::new(CacheConnectorChain::new(members));
        Ok::<_, CacheError>(backend)
    })
}
