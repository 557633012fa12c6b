pub mod contact;
pub mod cook_step;
pub mod cooked_good;
pub mod health;
pub mod ingredient;
pub mod inventory;
pub mod recipe;
pub mod session;
pub mod user;
