use crate::cache::enums::cache_driver::CacheDriver;
use crate::cache::errors::CacheError;
use std::fmt;
use std::str::FromStr;

impl CacheDriver {
    pub const ALL: [CacheDriver; 19] = [
        CacheDriver::array,
        CacheDriver::apcu,
        CacheDriver::redis,
        CacheDriver::memcached,
        CacheDriver::memcache,
        CacheDriver::xcache,
        CacheDriver::mongodb,
        CacheDriver::filesystem,
        CacheDriver::file,
        CacheDriver::chain,
        CacheDriver::couchbase,
        CacheDriver::phpfile,
        CacheDriver::predis,
        CacheDriver::riak,
        CacheDriver::sqlite3,
        CacheDriver::void,
        CacheDriver::wincache,
        CacheDriver::zenddata,
        CacheDriver::pdo,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            CacheDriver::array => "array",
            CacheDriver::apcu => "apcu",
            CacheDriver::redis => "redis",
            CacheDriver::memcached => "memcached",
            CacheDriver::memcache => "memcache",
            CacheDriver::xcache => "xcache",
            CacheDriver::mongodb => "mongodb",
            CacheDriver::filesystem => "filesystem",
            CacheDriver::file => "file",
            CacheDriver::chain => "chain",
            CacheDriver::couchbase => "couchbase",
            CacheDriver::phpfile => "phpfile",
            CacheDriver::predis => "predis",
            CacheDriver::riak => "riak",
            CacheDriver::sqlite3 => "sqlite3",
            CacheDriver::void => "void",
            CacheDriver::wincache => "wincache",
            CacheDriver::zenddata => "zenddata",
            CacheDriver::pdo => "pdo",
        }
    }

    /// Drivers whose store outlives a single profile and is shared process-wide.
    pub fn is_shared_memory(&self) -> bool {
        matches!(
            self,
            CacheDriver::apcu | CacheDriver::xcache | CacheDriver::wincache | CacheDriver::zenddata
        )
    }
}

impl fmt::Display for CacheDriver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CacheDriver {
    type Err = CacheError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        CacheDriver::ALL
            .iter()
            .find(|driver| driver.as_str() == value)
            .copied()
            .ok_or_else(|| CacheError::UnsupportedDriver(value.to_string()))
    }
}
