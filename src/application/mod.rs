//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers and the admin CLI.
//!
//! - [`services::short_url_service::ShortUrlService`] - Create, resolve and inspect short URLs

pub mod services;
