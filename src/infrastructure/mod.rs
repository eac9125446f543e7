//! Infrastructure layer implementing the domain repository traits.
//!
//! - [`persistence`] - PostgreSQL and in-memory repositories

pub mod persistence;
