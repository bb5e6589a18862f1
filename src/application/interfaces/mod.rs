mod geocoding_service;
mod representative_service;

pub use geocoding_service::*;
pub use representative_service::*;
