use crate::cache::enums::database_drivers::DatabaseDrivers;

pub fn quote_identifier(engine: DatabaseDrivers, identifier: &str) -> String {
    match engine {
        DatabaseDrivers::sqlite3 | DatabaseDrivers::mysql => format!("`{}`", identifier),
        DatabaseDrivers::pgsql => identifier.to_string(),
    }
}

pub fn create_table_query(engine: DatabaseDrivers, table: &str) -> String {
    let table = quote_identifier(engine, table);
    match engine {
        DatabaseDrivers::sqlite3 => format!(
            "CREATE TABLE IF NOT EXISTS {} (`id` TEXT PRIMARY KEY NOT NULL, `data` TEXT, `expire` INTEGER)",
            table
        ),
        DatabaseDrivers::mysql => format!(
            "CREATE TABLE IF NOT EXISTS {} (`id` VARCHAR(255) NOT NULL PRIMARY KEY, `data` LONGTEXT, `expire` BIGINT NULL)",
            table
        ),
        DatabaseDrivers::pgsql => format!(
            "CREATE TABLE IF NOT EXISTS {} (id VARCHAR(255) PRIMARY KEY NOT NULL, data TEXT, expire BIGINT)",
            table
        ),
    }
}

pub fn upsert_conflict_clause(engine: DatabaseDrivers, conflict_column: &str, update_columns: &[&str]) -> String {
    match engine {
        DatabaseDrivers::sqlite3 | DatabaseDrivers::pgsql => {
            let updates: Vec<String> = update_columns
                .iter()
                .map(|col| {
                    let quoted = quote_identifier(engine, col);
                    format!("{}=excluded.{}", quoted, quoted)
                })
                .collect();
            format!(
                "ON CONFLICT ({}) DO UPDATE SET {}",
                quote_identifier(engine, conflict_column),
                updates.join(", ")
            )
        }
        DatabaseDrivers::mysql => {
            let updates: Vec<String> = update_columns
                .iter()
                .map(|col| {
                    let quoted = quote_identifier(engine, col);
                    format!("{}=VALUES({})", quoted, quoted)
                })
                .collect();
            format!("ON DUPLICATE KEY UPDATE {}", updates.join(", "))
        }
    }
}

pub fn upsert_entry_query(engine: DatabaseDrivers, table: &str) -> String {
    format!(
        "INSERT INTO {} ({}, {}, {}) VALUES ({}, {}, {}) {}",
        quote_identifier(engine, table),
        quote_identifier(engine, "id"),
        quote_identifier(engine, "data"),
        quote_identifier(engine, "expire"),
        engine.placeholder(1),
        engine.placeholder(2),
        engine.placeholder(3),
        upsert_conflict_clause(engine, "id", &["data", "expire"])
    )
}

pub fn select_entry_query(engine: DatabaseDrivers, table: &str) -> String {
    format!(
        "SELECT {}, {} FROM {} WHERE {} = {}",
        quote_identifier(engine, "data"),
        quote_identifier(engine, "expire"),
        quote_identifier(engine, table),
        quote_identifier(engine, "id"),
        engine.placeholder(1)
    )
}

pub fn delete_entry_query(engine: DatabaseDrivers, table: &str) -> String {
    format!(
        "DELETE FROM {} WHERE {} = {}",
        quote_identifier(engine, table),
        quote_identifier(engine, "id"),
        engine.placeholder(1)
    )
}

pub fn delete_all_query(engine: DatabaseDrivers, table: &str) -> String {
    format!("DELETE FROM {}", quote_identifier(engine, table))
}
