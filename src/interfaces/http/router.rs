//! API Router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::FromRef,
    middleware,
    routing::{get, post},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::openapi::security::{ApiKey, ApiKeyValue, HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::application::ports::GeocodedPlace;
use crate::application::{GeocodingService, InvitationService, RouteService, UserService};
use crate::config::ClientConfig;
use crate::infrastructure::crypto::jwt::JwtConfig;
use crate::interfaces::http::common::{ApiResponse, EmptyData, PaginatedResponse};
use crate::interfaces::http::middleware::{
    auth_middleware, hook_secret_middleware, AuthState, HookState,
};
use crate::interfaces::http::modules::{
    client_config, geocoding, health, hooks, invitations, metrics as metrics_module, request_id,
    routes, users,
};

/// Everything the REST layer needs from the running service
#[derive(Clone)]
pub struct ApiContext {
    pub db: DatabaseConnection,
    pub jwt_config: JwtConfig,
    pub hook_secret: String,
    pub user_service: Arc<UserService>,
    pub route_service: Arc<RouteService>,
    pub invitation_service: Arc<InvitationService>,
    pub geocoding_service: Arc<GeocodingService>,
    pub client_config: Arc<ClientConfig>,
    /// `None` leaves `/metrics` unmounted
    pub metrics: Option<PrometheusHandle>,
    pub started_at: Arc<Instant>,
}

/// Unified state for the authenticated and hook routes.
/// Axum extracts the specific handler state via `FromRef`.
#[derive(Clone)]
pub struct ApiUnifiedState {
    pub user_service: Arc<UserService>,
    pub route_service: Arc<RouteService>,
    pub invitation_service: Arc<InvitationService>,
    pub geocoding_service: Arc<GeocodingService>,
}

// -- FromRef implementations so each handler keeps its own State<T> extractor --

impl FromRef<ApiUnifiedState> for users::UserHandlerState {
    fn from_ref(s: &ApiUnifiedState) -> Self {
        users::UserHandlerState {
            user_service: Arc::clone(&s.user_service),
        }
    }
}

impl FromRef<ApiUnifiedState> for routes::RouteHandlerState {
    fn from_ref(s: &ApiUnifiedState) -> Self {
        routes::RouteHandlerState {
            route_service: Arc::clone(&s.route_service),
        }
    }
}

impl FromRef<ApiUnifiedState> for invitations::InvitationHandlerState {
    fn from_ref(s: &ApiUnifiedState) -> Self {
        invitations::InvitationHandlerState {
            invitation_service: Arc::clone(&s.invitation_service),
        }
    }
}

impl FromRef<ApiUnifiedState> for geocoding::GeocodingHandlerState {
    fn from_ref(s: &ApiUnifiedState) -> Self {
        geocoding::GeocodingHandlerState {
            geocoding_service: Arc::clone(&s.geocoding_service),
        }
    }
}

impl FromRef<ApiUnifiedState> for hooks::HookHandlerState {
    fn from_ref(s: &ApiUnifiedState) -> Self {
        hooks::HookHandlerState {
            user_service: Arc::clone(&s.user_service),
            route_service: Arc::clone(&s.route_service),
        }
    }
}

/// Security scheme modifier for OpenAPI
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("ID token issued by the identity provider"))
                        .build(),
                ),
            );
            components.add_security_scheme(
                "hook_secret",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new("X-Hook-Secret"))),
            );
        }
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::health_check,
        // Config
        client_config::client_config,
        // Hooks
        hooks::user_created,
        hooks::expire_stale_routes,
        // Users
        users::change_user_role,
        users::get_user,
        users::list_users,
        // Routes
        routes::expire_stale_routes,
        routes::expire_route,
        routes::get_route,
        // Invitations
        invitations::send_reminder,
        // Geocoding
        geocoding::geocode,
    ),
    components(
        schemas(
            // Common
            ApiResponse<EmptyData>,
            EmptyData,
            PaginatedResponse<users::UserDto>,
            // Users
            users::UserDto,
            users::ChangeRoleRequest,
            users::RoleChangeDto,
            // Hooks
            hooks::UserCreatedHook,
            hooks::ProvisionedUserDto,
            // Routes
            routes::ExpiryOutcomeDto,
            routes::RouteDto,
            routes::AssignmentDto,
            routes::RouteDetailsDto,
            // Invitations
            invitations::ReminderReceiptDto,
            // Geocoding
            geocoding::GeocodeRequest,
            geocoding::GeocodeResponse,
            GeocodedPlace,
            // Config
            client_config::ClientConfigDto,
            client_config::FeatureFlagsDto,
            // Health
            health::HealthResponse,
            health::ComponentHealth,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Server health check endpoints"),
        (name = "Config", description = "Public settings for the mobile and web apps"),
        (name = "Hooks", description = "Callbacks from the identity provider and the scheduler"),
        (name = "Users", description = "Role management and root-only user queries"),
        (name = "Routes", description = "Route expiry and lookup"),
        (name = "Invitations", description = "Worker invitation reminders"),
        (name = "Geocoding", description = "Address lookup proxy"),
    ),
    info(
        title = "Shinning Pools API",
        version = "1.0.0",
        description = "Backend handlers for the pool maintenance apps",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
pub fn create_api_router(ctx: ApiContext) -> Router {
    let auth_state = AuthState {
        jwt_config: ctx.jwt_config.clone(),
    };
    let hook_state = HookState {
        secret: ctx.hook_secret.clone(),
    };

    let unified = ApiUnifiedState {
        user_service: ctx.user_service.clone(),
        route_service: ctx.route_service.clone(),
        invitation_service: ctx.invitation_service.clone(),
        geocoding_service: ctx.geocoding_service.clone(),
    };

    // ── Authenticated routes (ID token) ───────────────────────────
    let user_routes = Router::new()
        .route("/", get(users::list_users))
        .route("/role", post(users::change_user_role))
        .route("/{uid}", get(users::get_user));

    let route_routes = Router::new()
        .route("/expire-stale", post(routes::expire_stale_routes))
        .route("/{id}", get(routes::get_route))
        .route("/{id}/expire", post(routes::expire_route));

    let authenticated = Router::new()
        .nest("/users", user_routes)
        .nest("/routes", route_routes)
        .route("/invitations/{id}/remind", post(invitations::send_reminder))
        .route("/geocode", post(geocoding::geocode))
        .layer(middleware::from_fn_with_state(auth_state, auth_middleware))
        .with_state(unified.clone());

    // ── Hook routes (X-Hook-Secret) ───────────────────────────────
    let hook_routes = Router::new()
        .route("/user-created", post(hooks::user_created))
        .route("/expire-stale-routes", post(hooks::expire_stale_routes))
        .layer(middleware::from_fn_with_state(
            hook_state,
            hook_secret_middleware,
        ))
        .with_state(unified);

    // ── Public routes ─────────────────────────────────────────────
    let config_routes = Router::new()
        .route("/client", get(client_config::client_config))
        .with_state(client_config::ClientConfigState {
            client: ctx.client_config.clone(),
        });

    let health_routes = Router::new()
        .route("/health", get(health::health_check))
        .with_state(health::HealthState {
            db: ctx.db.clone(),
            started_at: ctx.started_at.clone(),
        });

    let mut router = Router::new()
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .merge(health_routes)
        .nest("/api/v1/config", config_routes)
        .nest("/api/v1/hooks", hook_routes)
        .nest("/api/v1", authenticated);

    if let Some(handle) = ctx.metrics {
        router = router.merge(
            Router::new()
                .route("/metrics", get(metrics_module::prometheus_metrics))
                .with_state(metrics_module::MetricsState { handle }),
        );
    }

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    router
        .layer(middleware::from_fn(metrics_module::http_metrics_middleware))
        .layer(middleware::from_fn(request_id::request_id_middleware))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use chrono::{Duration, Utc};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::application::geocoding::service::fake::RecordingGeocoder;
    use crate::application::ports::{ProviderReply, ProviderStatus};
    use crate::application::testing;
    use crate::domain::{Customer, RepositoryProvider, Route, UserRole, WorkerInvitation};
    use crate::infrastructure::crypto::jwt::create_token;
    use crate::infrastructure::database::repositories::SeaOrmRepositoryProvider;
    use crate::infrastructure::database::test_connection;

    const HOOK_SECRET: &str = "hook-s3cret";

    struct TestApp {
        router: Router,
        repos: Arc<dyn RepositoryProvider>,
        geocoder: Arc<RecordingGeocoder>,
        jwt: JwtConfig,
    }

    impl TestApp {
        async fn new() -> Self {
            let db = test_connection().await;
            let repos: Arc<dyn RepositoryProvider> =
                Arc::new(SeaOrmRepositoryProvider::new(db.clone()));
            let geocoder = Arc::new(RecordingGeocoder::new(Ok(ProviderReply {
                status: ProviderStatus::Ok,
                results: vec![GeocodedPlace {
                    formatted_address: "12 Main St, Springfield".into(),
                    latitude: 39.78,
                    longitude: -89.65,
                    place_id: Some("place-1".into()),
                }],
                error_message: None,
            })));
            let jwt = JwtConfig::default();

            let ctx = ApiContext {
                db,
                jwt_config: jwt.clone(),
                hook_secret: HOOK_SECRET.into(),
                user_service: Arc::new(UserService::new(repos.clone())),
                route_service: Arc::new(RouteService::new(repos.clone(), 24)),
                invitation_service: Arc::new(InvitationService::new(repos.clone())),
                geocoding_service: Arc::new(GeocodingService::new(
                    geocoder.clone(),
                    Some("maps-key".into()),
                )),
                client_config: Arc::new(ClientConfig::default()),
                metrics: None,
                started_at: Arc::new(Instant::now()),
            };

            Self {
                router: create_api_router(ctx),
                repos,
                geocoder,
                jwt,
            }
        }

        fn token(&self, uid: &str) -> String {
            create_token(uid, None, None, &self.jwt).unwrap()
        }

        async fn send(
            &self,
            method: &str,
            uri: &str,
            bearer: Option<&str>,
            body: Option<Value>,
        ) -> (StatusCode, Value) {
            let mut builder = Request::builder().method(method).uri(uri);
            if let Some(uid) = bearer {
                builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", self.token(uid)));
            }
            let req = match body {
                Some(b) => builder
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(serde_json::to_vec(&b).unwrap()))
                    .unwrap(),
                None => builder.body(Body::empty()).unwrap(),
            };
            read(self.router.clone().oneshot(req).await.unwrap()).await
        }

        async fn hook(&self, uri: &str, secret: Option<&str>, body: Value) -> (StatusCode, Value) {
            let mut builder = Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json");
            if let Some(s) = secret {
                builder = builder.header("X-Hook-Secret", s);
            }
            let req = builder
                .body(Body::from(serde_json::to_vec(&body).unwrap()))
                .unwrap();
            read(self.router.clone().oneshot(req).await.unwrap()).await
        }
    }

    async fn read(resp: axum::response::Response) -> (StatusCode, Value) {
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    #[tokio::test]
    async fn missing_token_is_unauthenticated() {
        let app = TestApp::new().await;
        let (status, body) = app
            .send("POST", "/api/v1/users/role", None, Some(json!({"uid": "u", "new_role": "admin"})))
            .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["code"], "unauthenticated");
    }

    #[tokio::test]
    async fn tampered_token_is_unauthenticated() {
        let app = TestApp::new().await;
        let other = JwtConfig {
            secret: "another-secret".into(),
            ..JwtConfig::default()
        };
        let token = create_token("u1", None, None, &other).unwrap();
        let req = Request::builder()
            .method("POST")
            .uri("/api/v1/geocode")
            .header(header::AUTHORIZATION, format!("Bearer {}", token))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"address":"12 Main St"}"#))
            .unwrap();
        let (status, _) = read(app.router.clone().oneshot(req).await.unwrap()).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(app.geocoder.call_count(), 0);
    }

    #[tokio::test]
    async fn user_created_hook_provisions_root_then_customer() {
        let app = TestApp::new().await;
        app.repos
            .customers()
            .save(Customer::new(Some("co-1".into()), "Ana", Some("ana@pools.com")))
            .await
            .unwrap();

        let (status, body) = app
            .hook(
                "/api/v1/hooks/user-created",
                Some(HOOK_SECRET),
                json!({"uid": "root-1", "email": "boss@pools.com"}),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["data"]["user"]["role"], "root");

        let (status, body) = app
            .hook(
                "/api/v1/hooks/user-created",
                Some(HOOK_SECRET),
                json!({"uid": "u-2", "email": "Ana@Pools.com", "displayName": "Ana"}),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["data"]["user"]["role"], "customer");
        assert_eq!(body["data"]["customers_linked"], 1);

        let (status, body) = app
            .hook(
                "/api/v1/hooks/user-created",
                Some(HOOK_SECRET),
                json!({"uid": "u-2", "email": "ana@pools.com"}),
            )
            .await;
        assert_eq!(status, StatusCode::PRECONDITION_FAILED);
        assert_eq!(body["code"], "failed-precondition");
    }

    #[tokio::test]
    async fn hooks_reject_wrong_secret() {
        let app = TestApp::new().await;
        let (status, body) = app
            .hook("/api/v1/hooks/user-created", Some("nope"), json!({"uid": "x"}))
            .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["code"], "unauthenticated");

        let (status, _) = app
            .hook("/api/v1/hooks/expire-stale-routes", None, json!({}))
            .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(app.repos.users().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn role_change_requires_root() {
        let app = TestApp::new().await;
        testing::seed_user(app.repos.as_ref(), "root-1", "r@p.com", UserRole::Root, None).await;
        testing::seed_user(app.repos.as_ref(), "adm-1", "a@p.com", UserRole::Admin, None).await;
        testing::seed_user(app.repos.as_ref(), "w-1", "w@p.com", UserRole::Worker, None).await;

        let (status, body) = app
            .send(
                "POST",
                "/api/v1/users/role",
                Some("adm-1"),
                Some(json!({"uid": "w-1", "new_role": "admin"})),
            )
            .await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["code"], "permission-denied");
        assert_eq!(
            app.repos.claims().get_role("w-1").await.unwrap(),
            Some(UserRole::Worker)
        );

        let (status, body) = app
            .send(
                "POST",
                "/api/v1/users/role",
                Some("root-1"),
                Some(json!({"uid": "w-1", "new_role": "admin"})),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["message"], "User role updated to admin");

        let (status, body) = app
            .send(
                "POST",
                "/api/v1/users/role",
                Some("root-1"),
                Some(json!({"uid": "w-1", "new_role": "superuser"})),
            )
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "invalid-argument");

        let (status, _) = app
            .send(
                "POST",
                "/api/v1/users/role",
                Some("root-1"),
                Some(json!({"uid": "root-1", "new_role": "customer"})),
            )
            .await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        let (status, body) = app
            .send(
                "POST",
                "/api/v1/users/role",
                Some("root-1"),
                Some(json!({"uid": "ghost", "new_role": "worker"})),
            )
            .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "not-found");
    }

    #[tokio::test]
    async fn role_change_input_is_checked_after_authorization() {
        let app = TestApp::new().await;
        testing::seed_user(app.repos.as_ref(), "root-1", "r@p.com", UserRole::Root, None).await;
        testing::seed_user(app.repos.as_ref(), "adm-1", "a@p.com", UserRole::Admin, None).await;

        for body in [
            json!({"uid": "", "new_role": "worker"}),
            json!({"uid": "adm-1", "new_role": "superuser"}),
            json!({}),
        ] {
            let (status, resp) = app
                .send("POST", "/api/v1/users/role", Some("adm-1"), Some(body.clone()))
                .await;
            assert_eq!(status, StatusCode::FORBIDDEN, "{body}");
            assert_eq!(resp["code"], "permission-denied");

            let (status, resp) = app
                .send("POST", "/api/v1/users/role", Some("root-1"), Some(body.clone()))
                .await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
            assert_eq!(resp["code"], "invalid-argument");
        }
    }

    #[tokio::test]
    async fn list_users_for_root_only() {
        let app = TestApp::new().await;
        testing::seed_user(app.repos.as_ref(), "root-1", "r@p.com", UserRole::Root, None).await;
        testing::seed_user(app.repos.as_ref(), "c-1", "c@p.com", UserRole::Customer, None).await;

        let (status, body) = app
            .send("GET", "/api/v1/users?role=customer", Some("root-1"), None)
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["total"], 1);
        assert_eq!(body["data"]["items"][0]["uid"], "c-1");

        let (status, _) = app.send("GET", "/api/v1/users", Some("c-1"), None).await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        let (status, body) = app
            .send("GET", "/api/v1/users?role=owner", Some("c-1"), None)
            .await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["code"], "permission-denied");

        let (status, body) = app
            .send("GET", "/api/v1/users?role=owner", Some("root-1"), None)
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "invalid-argument");

        let (status, body) = app
            .send("GET", "/api/v1/users?page=abc", Some("root-1"), None)
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert_eq!(body["code"], "invalid-argument");

        let (status, body) = app
            .send("GET", "/api/v1/users?page=4294967295", Some("root-1"), None)
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["total"], 2);
        assert_eq!(body["data"]["items"].as_array().unwrap().len(), 0);

        let (status, body) = app.send("GET", "/api/v1/users/c-1", Some("root-1"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["email"], "c@p.com");
    }

    #[tokio::test]
    async fn expire_route_then_precondition_on_second_call() {
        let app = TestApp::new().await;
        testing::seed_user(app.repos.as_ref(), "root-1", "r@p.com", UserRole::Root, None).await;
        let route = Route::new(Some("co-1".into()), "Monday", None);
        app.repos.routes().save(route.clone()).await.unwrap();

        let uri = format!("/api/v1/routes/{}/expire", route.id);
        let (status, body) = app.send("POST", &uri, Some("root-1"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["routes_closed"], 1);

        let (status, body) = app.send("POST", &uri, Some("root-1"), None).await;
        assert_eq!(status, StatusCode::PRECONDITION_FAILED);
        assert_eq!(body["code"], "failed-precondition");

        let (status, body) = app
            .send("GET", &format!("/api/v1/routes/{}", route.id), Some("root-1"), None)
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["route"]["status"], "CLOSED");
    }

    #[tokio::test]
    async fn scheduler_hook_sweeps_stale_routes() {
        let app = TestApp::new().await;
        let mut stale = Route::new(None, "Old", None);
        stale.created_at = Utc::now() - Duration::hours(30);
        app.repos.routes().save(stale).await.unwrap();
        app.repos.routes().save(Route::new(None, "Fresh", None)).await.unwrap();

        let (status, body) = app
            .hook("/api/v1/hooks/expire-stale-routes", Some(HOOK_SECRET), json!({}))
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["routes_closed"], 1);
    }

    #[tokio::test]
    async fn reminder_cooldown_is_a_precondition() {
        let app = TestApp::new().await;
        testing::seed_user(app.repos.as_ref(), "adm-1", "a@p.com", UserRole::Admin, Some("co-1")).await;
        let invitation = WorkerInvitation::new("co-1", "worker@p.com", "adm-1");
        app.repos.invitations().save(invitation.clone()).await.unwrap();

        let uri = format!("/api/v1/invitations/{}/remind", invitation.id);
        let (status, body) = app.send("POST", &uri, Some("adm-1"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["reminder_count"], 1);

        let (status, body) = app.send("POST", &uri, Some("adm-1"), None).await;
        assert_eq!(status, StatusCode::PRECONDITION_FAILED);
        assert!(body["error"].as_str().unwrap().contains("next reminder allowed at"));
    }

    #[tokio::test]
    async fn bad_address_never_reaches_provider() {
        let app = TestApp::new().await;

        let (status, body) = app
            .send("POST", "/api/v1/geocode", Some("anyone"), Some(json!({"address": "   "})))
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "invalid-argument");
        assert_eq!(app.geocoder.call_count(), 0);

        let (status, body) = app
            .send(
                "POST",
                "/api/v1/geocode",
                Some("anyone"),
                Some(json!({"address": "12 Main St"})),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["results"][0]["place_id"], "place-1");
        assert_eq!(app.geocoder.call_count(), 1);
    }

    #[tokio::test]
    async fn public_endpoints_need_no_token() {
        let app = TestApp::new().await;

        let (status, body) = app.send("GET", "/api/v1/config/client", None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["app_name"], "Shinning Pools");
        assert_eq!(body["data"]["features"]["maps_enabled"], true);

        let (status, body) = app.send("GET", "/health", None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[test]
    fn openapi_lists_every_path() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/v1/hooks/user-created",
            "/api/v1/users/role",
            "/api/v1/routes/{id}/expire",
            "/api/v1/invitations/{id}/remind",
            "/api/v1/geocode",
            "/api/v1/config/client",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
    }
}
