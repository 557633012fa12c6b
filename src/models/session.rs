use chrono::{DateTime, Utc};
use rocket::serde::Serialize;
use uuid::Uuid;

/// A server-side login. The id doubles as the bearer token.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct Session {
    pub id: Uuid,
    pub user_id: Uuid,
    pub creation_date: DateTime<Utc>,
    pub last_active_date: DateTime<Utc>,
}

impl Session {
    pub fn new(user_id: Uuid, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            creation_date: now,
            last_active_date: now,
        }
    }
}
