//! Utility functions shared across layers.
//!
//! - [`base_converter`] - Conversion between arbitrary digit alphabets
//! - [`short_code`] - Record id ⇄ base-62 short code codec

pub mod base_converter;
pub mod short_code;
