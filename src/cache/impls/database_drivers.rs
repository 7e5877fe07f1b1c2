use crate::cache::enums::database_drivers::DatabaseDrivers;

impl DatabaseDrivers {
    /// Detects the dialect from a connection string such as `mysql://...` or `sqlite:cache.db`.
    pub fn from_url(url: &str) -> Option<DatabaseDrivers> {
        let scheme = url.split(':').next()?.to_ascii_lowercase();
        match scheme.as_str() {
            "sqlite" | "sqlite3" => Some(DatabaseDrivers::sqlite3),
            "mysql" | "mariadb" => Some(DatabaseDrivers::mysql),
            "postgres" | "postgresql" | "pgsql" => Some(DatabaseDrivers::pgsql),
            _ => None,
        }
    }

    /// Positional bind marker, 1-based.
    pub fn placeholder(&self, index: usize) -> String {
        match self {
            DatabaseDrivers::sqlite3 | DatabaseDrivers::mysql => "?".to_string(),
            DatabaseDrivers::pgsql => format!("${}", index),
        }
    }
}
