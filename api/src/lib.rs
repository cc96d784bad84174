//! HTTP API for registering payment methods and charging them.

pub mod app;
pub mod charges;
pub mod config;
pub mod error;
pub mod payments;
pub mod state;
pub mod store;
pub mod surcharge;

pub use config::Config;
pub use error::ApiError;
