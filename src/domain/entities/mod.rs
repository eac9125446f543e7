//! Core domain entities.
//!
//! - [`ShortUrl`] - A stored URL, its submission date and usage counter
//! - [`NewShortUrl`] - Input for creating a record

pub mod short_url;

pub use short_url::{NewShortUrl, ShortUrl};
