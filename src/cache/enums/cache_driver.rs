use clap::ValueEnum;
use serde::{
    Deserialize,
    Serialize
};

#[allow(non_camel_case_types)]
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, ValueEnum)]
pub enum CacheDriver {
    array,
    apcu,
    redis,
    memcached,
    memcache,
    xcache,
    mongodb,
    filesystem,
    file,
    chain,
    couchbase,
    phpfile,
    predis,
    riak,
    sqlite3,
    void,
    wincache,
    zenddata,
    pdo,
}
