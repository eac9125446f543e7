//! Repository implementations.
//!
//! - [`PgShortUrlRepository`] - PostgreSQL storage via SQLx
//! - [`InMemoryShortUrlRepository`] - Process-local storage for DB-less runs and tests

pub mod memory_short_url_repository;
pub mod pg_short_url_repository;

pub use memory_short_url_repository::InMemoryShortUrlRepository;
pub use pg_short_url_repository::PgShortUrlRepository;
