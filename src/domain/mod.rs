//! # Domain Layer
//!
//! Value types and the error taxonomy shared by every other layer.

pub mod error;
pub mod models;

pub use error::LookupError;
pub use models::*;
