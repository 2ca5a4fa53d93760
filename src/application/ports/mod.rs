//! Application ports (hexagonal architecture boundaries)
//!
//! Outbound ports implemented by the infrastructure layer.

pub mod geocoding;

pub use geocoding::{GeocodedPlace, GeocodingClient, ProviderReply, ProviderStatus};
