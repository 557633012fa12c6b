use regex::Regex;
use rocket::serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// Permission bit granting administrator access (list all users and sessions).
pub const PERM_ADMIN: i32 = 1;

static USERNAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_.-]+$").expect("valid username pattern"));

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub pass_hash: String,
    pub pass_salt: String,
    pub perms: i32,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.perms & PERM_ADMIN == PERM_ADMIN
    }
}

/// A user row ready to insert, credentials already hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub pass_hash: String,
    pub pass_salt: String,
    pub perms: i32,
}

/// Column changes for a profile update. `None` leaves a column untouched.
#[derive(Debug, Clone, Default)]
pub struct UserChanges {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub username: Option<String>,
    /// New `(hash, salt)` pair.
    pub credentials: Option<(String, String)>,
    pub perms: Option<i32>,
}

#[derive(Serialize, Debug)]
pub struct UserResponse {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub perms: i32,
}

#[derive(Deserialize, Debug, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 50))]
    pub first_name: String,
    #[validate(length(min = 1, max = 50))]
    pub last_name: String,
    #[validate(length(min = 3, max = 50))]
    #[validate(custom(function = "validate_username"))]
    pub username: String,
    #[validate(length(min = 8))]
    pub password: String,
    /// Only honoured when the caller presents the developer key.
    #[serde(default)]
    pub perms: i32,
}

#[derive(Deserialize, Debug, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1))]
    pub username: String,
    pub password: String,
}

#[derive(Deserialize, Debug, Default, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, max = 50))]
    pub first_name: Option<String>,
    #[validate(length(min = 1, max = 50))]
    pub last_name: Option<String>,
    #[validate(length(min = 3, max = 50))]
    #[validate(custom(function = "validate_username"))]
    pub username: Option<String>,
    #[validate(length(min = 8))]
    pub password: Option<String>,
    pub perms: Option<i32>,
}

fn validate_username(username: &str) -> Result<(), ValidationError> {
    if USERNAME_PATTERN.is_match(username) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_username"))
    }
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            username: user.username.clone(),
            perms: user.perms,
        }
    }
}

impl From<NewUser> for User {
    fn from(user: NewUser) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            username: user.username,
            pass_hash: user.pass_hash,
            pass_salt: user.pass_salt,
            perms: user.perms,
        }
    }
}
