pub mod config;
pub mod error;
pub mod export;
pub mod logging;
pub mod pipeline;
pub mod schema;
pub mod types;
