//! Geocoding provider adapters

pub mod google;

pub use google::{GoogleGeocodingClient, DEFAULT_GEOCODING_URL};
