pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod repo;
pub mod services;
pub mod storage;
