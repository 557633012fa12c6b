pub mod contact;
pub mod cook_step;
pub mod cooked_good;
pub mod ingredient;
pub mod inventory;
pub mod postgres_repository;
pub mod recipe;
pub mod session;
pub mod user;
