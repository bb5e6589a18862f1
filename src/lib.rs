pub mod application;
pub mod connector;
pub mod domain;

pub use application::{
    GeocodingService, LookupRepresentativesUseCase, RepresentativeService, ResolveDistrictUseCase,
    ResolvedDistrict,
};

pub use connector::{
    ApiConfig, CivicInfoClient, GoogleGeocodingClient, MockCivicInfo, MockGeocoding,
    DEFAULT_CIVIC_URL, DEFAULT_GEOCODING_URL,
};

pub use domain::{Coordinate, LookupError, Office, Official, RepresentativeReport};
