//! Geocoding module: address lookup proxy

pub mod service;

pub use service::{validate_address, GeocodingService, MAX_ADDRESS_LEN};
