pub mod api;
pub mod config;
pub mod error;
pub mod loadable;
pub mod models;
pub mod pages;

pub use api::ApiClient;
pub use error::{ApiError, ApiResult};
pub use loadable::Loadable;
