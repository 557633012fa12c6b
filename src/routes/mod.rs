pub mod contact;
pub mod cook_step;
pub mod cooked_good;
pub mod error;
pub mod health;
pub mod ingredient;
pub mod inventory;
pub mod recipe;
pub mod session;
pub mod user;

use crate::config::Config;
use std::fmt::Display;

/// Absolute path of a created resource, for the `Location` header.
pub(crate) fn location(config: &Config, path: impl Display) -> String {
    format!("{}{}", config.api.base_path.trim_end_matches('/'), path)
}
