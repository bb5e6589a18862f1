//! # Connector Layer
//!
//! External integrations implementing the application interfaces:
//! - Geocoding (Google Geocoding API, mock for tests)
//! - Civic information (Google Civic Information API, mock for tests)

pub mod adapter;

pub use adapter::*;
