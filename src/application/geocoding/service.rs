//! Geocoding proxy
//!
//! Validates the address locally and only then calls the provider.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::application::access::Caller;
use crate::application::ports::{GeocodedPlace, GeocodingClient, ProviderStatus};
use crate::domain::{DomainError, DomainResult};

pub const MAX_ADDRESS_LEN: usize = 512;

/// Trimmed address, or `Validation` when it cannot be a real address.
pub fn validate_address(address: &str) -> DomainResult<&str> {
    let address = address.trim();

    if address.is_empty() {
        return Err(DomainError::Validation("Address is required".into()));
    }
    if address.chars().count() > MAX_ADDRESS_LEN {
        return Err(DomainError::Validation(format!(
            "Address must be at most {} characters",
            MAX_ADDRESS_LEN
        )));
    }
    if address.chars().any(char::is_control) {
        return Err(DomainError::Validation(
            "Address contains control characters".into(),
        ));
    }
    if !address.chars().any(char::is_alphanumeric) {
        return Err(DomainError::Validation(
            "Address must contain letters or digits".into(),
        ));
    }

    Ok(address)
}

pub struct GeocodingService {
    client: Arc<dyn GeocodingClient>,
    api_key: Option<String>,
}

impl GeocodingService {
    pub fn new(client: Arc<dyn GeocodingClient>, api_key: Option<String>) -> Self {
        Self {
            client,
            api_key: api_key.filter(|k| !k.trim().is_empty()),
        }
    }

    pub async fn geocode(&self, caller: &Caller, address: &str) -> DomainResult<Vec<GeocodedPlace>> {
        let address = match validate_address(address) {
            Ok(a) => a,
            Err(e) => {
                count("invalid");
                return Err(e);
            }
        };

        let Some(api_key) = self.api_key.as_deref() else {
            count("unconfigured");
            return Err(DomainError::FailedPrecondition(
                "Geocoding is not configured".into(),
            ));
        };

        debug!(uid = %caller.uid, "Geocoding lookup");
        let reply = match self.client.lookup(address, api_key).await {
            Ok(reply) => reply,
            Err(e) => {
                count("error");
                return Err(e);
            }
        };

        match reply.status {
            ProviderStatus::Ok => {
                count("ok");
                Ok(reply.results)
            }
            ProviderStatus::ZeroResults => {
                count("zero_results");
                Err(DomainError::NotFound {
                    entity: "Address",
                    field: "address",
                    value: address.to_string(),
                })
            }
            ProviderStatus::InvalidRequest => {
                count("invalid");
                Err(DomainError::Validation(
                    reply
                        .error_message
                        .unwrap_or_else(|| "Address was rejected by the geocoding provider".into()),
                ))
            }
            ProviderStatus::Other(status) => {
                count("error");
                warn!(%status, error_message = ?reply.error_message, "Geocoding provider failure");
                Err(DomainError::Internal(format!(
                    "Geocoding provider returned {}",
                    status
                )))
            }
        }
    }
}

fn count(outcome: &'static str) {
    metrics::counter!("geocode_requests_total", "outcome" => outcome).increment(1);
}

#[cfg(test)]
pub(crate) mod fake {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::application::ports::{GeocodingClient, ProviderReply};
    use crate::domain::DomainResult;

    /// Records every lookup and answers with a canned reply.
    pub struct RecordingGeocoder {
        pub reply: DomainResult<ProviderReply>,
        pub calls: Mutex<Vec<(String, String)>>,
    }

    impl RecordingGeocoder {
        pub fn new(reply: DomainResult<ProviderReply>) -> Self {
            Self {
                reply,
                calls: Mutex::new(Vec::new()),
            }
        }

        pub fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl GeocodingClient for RecordingGeocoder {
        async fn lookup(&self, address: &str, api_key: &str) -> DomainResult<ProviderReply> {
            self.calls
                .lock()
                .unwrap()
                .push((address.to_string(), api_key.to_string()));
            match &self.reply {
                Ok(reply) => Ok(reply.clone()),
                Err(e) => Err(crate::domain::DomainError::Internal(e.to_string())),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fake::RecordingGeocoder;
    use super::*;
    use crate::application::ports::ProviderReply;

    fn reply(status: ProviderStatus, results: Vec<GeocodedPlace>) -> ProviderReply {
        ProviderReply {
            status,
            results,
            error_message: None,
        }
    }

    fn place() -> GeocodedPlace {
        GeocodedPlace {
            formatted_address: "1600 Amphitheatre Pkwy, Mountain View, CA".into(),
            latitude: 37.422,
            longitude: -122.084,
            place_id: Some("abc".into()),
        }
    }

    fn service(fake: Arc<RecordingGeocoder>, key: Option<&str>) -> GeocodingService {
        GeocodingService::new(fake, key.map(String::from))
    }

    #[test]
    fn address_validation() {
        assert_eq!(validate_address("  12 Main St ").unwrap(), "12 Main St");
        assert!(validate_address("").is_err());
        assert!(validate_address("   ").is_err());
        assert!(validate_address("---, ...").is_err());
        assert!(validate_address("12 Main\u{0007}St").is_err());
        assert!(validate_address(&"a".repeat(MAX_ADDRESS_LEN + 1)).is_err());
        assert!(validate_address(&"a".repeat(MAX_ADDRESS_LEN)).is_ok());
    }

    #[tokio::test]
    async fn malformed_address_never_reaches_provider() {
        let fake = Arc::new(RecordingGeocoder::new(Ok(reply(ProviderStatus::Ok, vec![]))));
        let svc = service(fake.clone(), Some("key"));

        for bad in ["", "   ", "\n\t", "!!!"] {
            let err = svc.geocode(&Caller::new("u"), bad).await.unwrap_err();
            assert!(matches!(err, DomainError::Validation(_)));
        }
        assert_eq!(fake.call_count(), 0);
    }

    #[tokio::test]
    async fn ok_reply_returns_places_and_passes_key() {
        let fake = Arc::new(RecordingGeocoder::new(Ok(reply(ProviderStatus::Ok, vec![place()]))));
        let svc = service(fake.clone(), Some("secret-key"));

        let places = svc.geocode(&Caller::new("u"), " 1600 Amphitheatre ").await.unwrap();
        assert_eq!(places, vec![place()]);

        let calls = fake.calls.lock().unwrap();
        assert_eq!(calls[0], ("1600 Amphitheatre".to_string(), "secret-key".to_string()));
    }

    #[tokio::test]
    async fn provider_statuses_map_to_categories() {
        let cases: Vec<(ProviderStatus, fn(&DomainError) -> bool)> = vec![
            (ProviderStatus::ZeroResults, |e| matches!(e, DomainError::NotFound { .. })),
            (ProviderStatus::InvalidRequest, |e| matches!(e, DomainError::Validation(_))),
            (ProviderStatus::Other("REQUEST_DENIED".into()), |e| {
                matches!(e, DomainError::Internal(_))
            }),
        ];

        for (status, check) in cases {
            let fake = Arc::new(RecordingGeocoder::new(Ok(reply(status, vec![]))));
            let err = service(fake, Some("k"))
                .geocode(&Caller::new("u"), "12 Main St")
                .await
                .unwrap_err();
            assert!(check(&err), "unexpected {:?}", err);
        }
    }

    #[tokio::test]
    async fn missing_key_is_a_precondition_failure() {
        let fake = Arc::new(RecordingGeocoder::new(Ok(reply(ProviderStatus::Ok, vec![]))));
        let err = service(fake.clone(), Some("  "))
            .geocode(&Caller::new("u"), "12 Main St")
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::FailedPrecondition(_)));
        assert_eq!(fake.call_count(), 0);
    }
}
