use std::collections::HashSet;
use std::fs::File;
use std::io::Write;
use serde_json::{Map, Value};
use crate::common::common::parse_log_level;
use crate::common::structs::custom_error::CustomError;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::impls::cache_profile_config::DEFAULT_PROFILE_NAME;
use crate::config::structs::cache_profile_config::CacheProfileConfig;
use crate::config::structs::caches_config::CachesConfig;
use crate::config::structs::configuration::Configuration;

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            cache: CachesConfig {
                default: Some(String::from("default")),
                default_options: None,
                profiles: vec!(
                    CacheProfileConfig {
                        name: String::from("default"),
                        driver: Some(String::from("array")),
                        namespace: None,
                        parameters: None,
                    },
                    CacheProfileConfig {
                        name: String::from("shared"),
                        driver: Some(String::from("apcu")),
                        namespace: Some(String::from("app")),
                        parameters: None,
                    },
                    CacheProfileConfig {
                        name: String::from("files"),
                        driver: Some(String::from("phpfile")),
                        namespace: None,
                        parameters: Some({
                            let mut parameters = Map::new();
                            parameters.insert(String::from("directory"), Value::from("cache"));
                            parameters
                        }),
                    },
                )
            }
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError(e)),
            Ok(data) => {
                match Self::load(data.as_slice()) {
                    Ok(cfg) => {
                        Ok(cfg)
                    }
                    Err(e) => Err(ConfigurationError::ParseError(e)),
                }
            }
        }
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        match File::create(path) {
            Ok(mut file) => {
                match file.write_all(data.as_ref()) {
                    Ok(_) => Ok(()),
                    Err(e) => Err(ConfigurationError::IOError(e))
                }
            }
            Err(e) => Err(ConfigurationError::IOError(e))
        }
    }

    /// Loads and validates `path`. A missing or broken file is replaced by the
    /// defaults when `create` is set, which still ends in an error so the
    /// operator can edit it first.
    pub fn load_from_file(path: &str, create: bool) -> Result<Configuration, CustomError> {
        let config = match Configuration::load_file(path) {
            Ok(c) => c,
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {}", error);

                if !create {
                    eprintln!("You can either create your own {} file, or start this app using '--create-config' as parameter.", path);
                    return Err(CustomError::new(&format!("will not create automatically {} file", path)));
                }
                eprintln!("Creating config file..");

                let config_toml = toml::to_string(&Configuration::init())
                    .map_err(|e| CustomError::new(&format!("could not serialize default configuration: {}", e)))?;
                return match Configuration::save_file(path, config_toml) {
                    Ok(_) => {
                        eprintln!("Please edit {} and start again, exiting now...", path);
                        Err(CustomError::new(&format!("create {} file", path)))
                    }
                    Err(e) => {
                        eprintln!("{} file could not be created, check permissions...", path);
                        eprintln!("{e}");
                        Err(CustomError::new(&format!("could not create {} file", path)))
                    }
                };
            }
        };

        eprintln!("[VALIDATE] Validating configuration...");
        config.validate().map_err(|e| CustomError::new(&e.to_string()))?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if parse_log_level(&self.log_level).is_none() {
            return Err(ConfigurationError::ValidationError(format!(
                "unknown log level \"{}\" (expected off, trace, debug, info, warn or error)",
                self.log_level
            )));
        }

        let mut names = HashSet::new();
        for (index, profile) in self.cache.profiles.iter().enumerate() {
            if profile.name.trim().is_empty() {
                return Err(ConfigurationError::ValidationError(format!(
                    "cache profile #{} has no name",
                    index
                )));
            }
            if !names.insert(profile.name.as_str()) {
                return Err(ConfigurationError::ValidationError(format!(
                    "cache profile \"{}\" is defined more than once",
                    profile.name
                )));
            }
        }

        if let Some(default) = &self.cache.default {
            let known = if self.cache.profiles.is_empty() {
                default == DEFAULT_PROFILE_NAME
            } else {
                names.contains(default.as_str())
            };
            if !known {
                return Err(ConfigurationError::ValidationError(format!(
                    "default cache profile \"{}\" is not defined",
                    default
                )));
            }
        }
        Ok(())
    }
}
