//! Database and listener initialization performed before serving requests.

use sea_orm::DatabaseConnection;

use crate::server::{config::Config, error::Error};

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Bind the TCP listener for the HTTP server
pub async fn bind_listener(config: &Config) -> Result<tokio::net::TcpListener, Error> {
    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;

    Ok(listener)
}
