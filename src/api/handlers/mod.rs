//! HTTP request handlers for API endpoints.

pub mod create;
pub mod health;
pub mod info;
pub mod redirect;
mod short_code_path;

pub use create::create_handler;
pub use health::health_handler;
pub use info::info_handler;
pub use redirect::redirect_handler;
