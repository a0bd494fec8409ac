use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;
use std::time::Duration;

use super::migrations::Migrator;

pub const MEMORY_DATABASE_URL: &str = "sqlite::memory:";

pub async fn establish_connection(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new(database_url);

    // Every pooled connection to an in-memory SQLite database opens its own
    // empty database, so those get exactly one connection
    if database_url == MEMORY_DATABASE_URL {
        opt.max_connections(1).min_connections(1);
    } else {
        opt.max_connections(20).min_connections(2);
    }

    opt.connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(3600))
        .sqlx_logging(true)
        .sqlx_logging_level(tracing::log::LevelFilter::Debug);

    Database::connect(opt).await
}

pub fn get_database_url(database_path: Option<&str>) -> String {
    match database_path {
        Some(":memory:") => MEMORY_DATABASE_URL.to_string(),
        Some(path) => format!("sqlite://{}?mode=rwc", path),
        None => "sqlite://portfolio.db?mode=rwc".to_string(),
    }
}

/// Brings the schema of `db` up to date.
pub async fn setup_database(db: &DatabaseConnection) -> Result<(), DbErr> {
    Migrator::up(db, None).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_urls() {
        assert_eq!(get_database_url(Some(":memory:")), "sqlite::memory:");
        assert_eq!(
            get_database_url(Some("/var/lib/portfolio.db")),
            "sqlite:///var/lib/portfolio.db?mode=rwc"
        );
        assert_eq!(get_database_url(None), "sqlite://portfolio.db?mode=rwc");
    }
}
