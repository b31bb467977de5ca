pub mod config;
pub mod error;
pub mod external;
pub mod metrics;
pub mod models;
pub mod status;
pub mod store;

pub use config::Config;
pub use error::{AppError, AppResult};
