use crate::config::DatabaseConfig;
use rocket::fairing::AdHoc;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{Executor, PgPool};
use std::str::FromStr;
use std::time::Duration;

fn pool_options(db_config: &DatabaseConfig) -> PgPoolOptions {
    let statement_timeout = format!("SET statement_timeout = {}", db_config.statement_timeout_ms);

    PgPoolOptions::new()
        .max_connections(db_config.max_connections)
        .min_connections(db_config.min_connections)
        .acquire_timeout(Duration::from_secs(db_config.acquire_timeout))
        .idle_timeout(Duration::from_secs(30))
        .max_lifetime(Duration::from_secs(1800))
        .after_connect(move |conn, _meta| {
            let statement_timeout = statement_timeout.clone();
            Box::pin(async move {
                conn.execute(statement_timeout.as_str()).await?;
                Ok(())
            })
        })
}

pub async fn init_pool(db_config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let connect_options = PgConnectOptions::from_str(&db_config.connection_url())?;

    if db_config.lazy_connect {
        Ok(pool_options(db_config).connect_lazy_with(connect_options))
    } else {
        pool_options(db_config).connect_with(connect_options).await
    }
}

pub fn stage_db(db_config: DatabaseConfig) -> AdHoc {
    AdHoc::try_on_ignite("Postgres (sqlx)", |rocket| async move {
        match init_pool(&db_config).await {
            Ok(pool) => {
                tracing::info!(host = %db_config.host, database = %db_config.name, lazy = db_config.lazy_connect, "Database pool initialized");
                Ok(rocket.manage(pool))
            }
            Err(e) => {
                tracing::error!("Failed to initialize database pool: {}", e);
                Err(rocket)
            }
        }
    })
}

/// Apply everything under `migrations/` that the database has not seen yet.
pub async fn run_migrations(db_config: &DatabaseConfig) -> Result<(), sqlx::Error> {
    let connect_options = PgConnectOptions::from_str(&db_config.connection_url())?;
    let pool = PgPoolOptions::new().max_connections(1).connect_with(connect_options).await?;

    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!(host = %db_config.host, database = %db_config.name, "migrations applied");

    pool.close().await;
    Ok(())
}
