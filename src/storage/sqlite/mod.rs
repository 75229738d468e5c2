mod connection;
mod read_status_repository;

pub use connection::SqliteStorage;
pub use read_status_repository::SqliteReadStatusRepository;
