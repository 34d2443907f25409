pub mod config;
pub mod db;
pub mod observability;

pub use config::Config;
pub use db::{create_pool, migrate};
