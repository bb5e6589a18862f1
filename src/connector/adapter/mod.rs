mod api_config;
mod civic_info_client;
mod google_geocoding_client;
mod http;
mod mock_civic_info;
mod mock_geocoding;

pub use api_config::*;
pub use civic_info_client::*;
pub use google_geocoding_client::*;
pub use mock_civic_info::*;
pub use mock_geocoding::*;
