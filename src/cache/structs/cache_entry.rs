use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub struct CacheEntry {
    pub value: Value,
    /// Unix timestamp in milliseconds, `None` when the entry never expires.
    pub expires_at: Option<i64>,
}
