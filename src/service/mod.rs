pub mod auth;
pub mod contact;
pub mod cook_step;
pub mod cooked_good;
pub mod credentials;
pub mod ingredient;
pub mod inventory;
pub mod recipe;
pub mod session;
pub mod user;
