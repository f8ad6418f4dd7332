//! SQLite persistence for the local country mirror

pub mod country_repository;
pub mod manager;

pub use country_repository::SqliteCountryRepository;
pub use manager::DbManager;
