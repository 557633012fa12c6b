use sqlx::PgPool;

/// Postgres-backed implementation of every repository trait.
#[derive(Clone)]
pub struct PostgresRepository {
    pub pool: PgPool,
}
