#[derive(Debug, Clone)]
pub struct CacheConnectorRiak {
    pub(crate) client: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) bucket: String,
}
