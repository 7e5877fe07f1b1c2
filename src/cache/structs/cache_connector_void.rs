#[derive(Debug, Clone, Default)]
pub struct CacheConnectorVoid;
