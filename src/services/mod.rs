pub mod news_service;
pub mod update_service;

pub use news_service::NewsService;
pub use update_service::{UpdateReport, UpdateService};
