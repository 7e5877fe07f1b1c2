use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy)]
pub struct DriverParameters<'a> {
    pub(crate) driver: &'a str,
    pub(crate) values: &'a Map<String, Value>,
}
