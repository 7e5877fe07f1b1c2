use crate::cache::errors::CacheError;
use crate::common::common::is_blank;
use crate::factory::structs::driver_parameters::DriverParameters;
use serde_json::{Map, Value};

impl<'a> DriverParameters<'a> {
    pub fn new(driver: &'a str, values: &'a Map<String, Value>) -> Self {
        Self { driver, values }
    }

    pub fn driver(&self) -> &'a str {
        self.driver
    }

    /// The raw value, if present and not empty.
    pub fn get(&self, field: &str) -> Option<&'a Value> {
        self.values.get(field).filter(|value| !is_blank(value))
    }

    pub fn is_present(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    /// Fails with every missing field listed, not only the first one.
    pub fn require(&self, fields: &[&str]) -> Result<(), CacheError> {
        let missing: Vec<&str> = fields
            .iter()
            .copied()
            .filter(|field| !self.is_present(field))
            .collect();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(CacheError::missing_fields(self.driver, &missing))
        }
    }

    pub fn string(&self, field: &str) -> Result<Option<String>, CacheError> {
        match self.get(field) {
            None => Ok(None),
            Some(Value::String(text)) => Ok(Some(text.clone())),
            Some(Value::Number(number)) => Ok(Some(number.to_string())),
            Some(_) => Err(CacheError::invalid_field(self.driver, field, format!("\"{}\" must be a string", field))),
        }
    }

    pub fn require_string(&self, field: &str) -> Result<String, CacheError> {
        self.string(field)?
            .ok_or_else(|| CacheError::missing_fields(self.driver, &[field]))
    }

    /// A string that may legitimately be empty (passwords, usernames).
    pub fn optional_string(&self, field: &str) -> Result<Option<String>, CacheError> {
        match self.values.get(field) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(text)) => Ok(Some(text.clone())),
            Some(Value::Number(number)) => Ok(Some(number.to_string())),
            Some(_) => Err(CacheError::invalid_field(self.driver, field, format!("\"{}\" must be a string", field))),
        }
    }

    pub fn integer(&self, field: &str) -> Result<Option<i64>, CacheError> {
        let invalid = || CacheError::invalid_field(self.driver, field, format!("\"{}\" must be an integer", field));
        match self.get(field) {
            None => Ok(None),
            Some(Value::Number(number)) => number.as_i64().map(Some).ok_or_else(invalid),
            Some(Value::String(text)) => text.trim().parse::<i64>().map(Some).map_err(|_| invalid()),
            Some(_) => Err(invalid()),
        }
    }

    pub fn port(&self, field: &str) -> Result<Option<u16>, CacheError> {
        match self.integer(field)? {
            None => Ok(None),
            Some(port) => u16::try_from(port).map(Some).map_err(|_| {
                CacheError::invalid_field(self.driver, field, format!("\"{}\" must be between 1 and 65535", field))
            }),
        }
    }

    pub fn require_port(&self, field: &str) -> Result<u16, CacheError> {
        self.port(field)?
            .ok_or_else(|| CacheError::missing_fields(self.driver, &[field]))
    }

    /// File mode mask; strings are read as octal ("0002"), numbers as-is.
    pub fn umask(&self, field: &str) -> Result<Option<u32>, CacheError> {
        let invalid = || CacheError::invalid_field(self.driver, field, format!("\"{}\" must be an octal file mode mask", field));
        match self.values.get(field) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Number(number)) => number
                .as_u64()
                .and_then(|mask| u32::try_from(mask).ok())
                .filter(|mask| *mask <= 0o777)
                .map(Some)
                .ok_or_else(invalid),
            Some(Value::String(text)) => u32::from_str_radix(text.trim(), 8)
                .ok()
                .filter(|mask| *mask <= 0o777)
                .map(Some)
                .ok_or_else(invalid),
            Some(_) => Err(invalid()),
        }
    }

    pub fn array(&self, field: &str) -> Result<Option<&'a Vec<Value>>, CacheError> {
        match self.get(field) {
            None => Ok(None),
            Some(Value::Array(items)) => Ok(Some(items)),
            Some(_) => Err(CacheError::invalid_field(self.driver, field, format!("\"{}\" must be an array", field))),
        }
    }
}
