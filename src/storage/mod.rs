pub mod traits;
pub mod sqlite;

pub use traits::ReadStatusRepository;
pub use sqlite::{SqliteReadStatusRepository, SqliteStorage};
