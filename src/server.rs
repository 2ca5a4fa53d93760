//! Reusable server runtime.
//!
//! [`ServerHandle`] owns the full lifecycle: database init, migrations,
//! services, the REST API, the route expiry task, metrics and graceful
//! shutdown.

use std::sync::{Arc, OnceLock};
use std::time::{Duration, Instant};

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use sea_orm::DatabaseConnection;
use tracing::{error, info, warn};

use crate::application::{
    start_route_expiry_task, GeocodingService, InvitationService, RouteService, UserService,
};
use crate::config::AppConfig;
use crate::domain::RepositoryProvider;
use crate::infrastructure::database::repositories::SeaOrmRepositoryProvider;
use crate::infrastructure::{init_database, run_migrations, DatabaseConfig, GoogleGeocodingClient};
use crate::interfaces::http::{create_api_router, ApiContext};
use crate::shared::shutdown::{ShutdownCoordinator, ShutdownSignal};

// ── Options ────────────────────────────────────────────────────────

pub struct ServerOptions {
    /// Application configuration.
    pub config: AppConfig,
    /// Run database migrations on startup (default: true).
    pub auto_migrate: bool,
}

impl Default for ServerOptions {
    fn default() -> Self {
        Self {
            config: AppConfig::default(),
            auto_migrate: true,
        }
    }
}

// ── ServerHandle ───────────────────────────────────────────────────

/// Handle to a running service.
///
/// ```rust,no_run
/// use pool_service::server::{ServerHandle, ServerOptions};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let handle = ServerHandle::start(ServerOptions::default()).await?;
///     handle.install_signal_handler();
///     handle.wait().await;
///     Ok(())
/// }
/// ```
pub struct ServerHandle {
    /// Repository provider for data access.
    pub repos: Arc<dyn RepositoryProvider>,
    /// The configuration the server was started with.
    pub config: AppConfig,
    /// Address the REST API is bound to.
    pub api_addr: std::net::SocketAddr,

    db: DatabaseConnection,
    shutdown: ShutdownCoordinator,
    api_task: tokio::task::JoinHandle<()>,
    expiry_task: Option<tokio::task::JoinHandle<()>>,
}

/// The global metrics recorder can only be installed once per process;
/// a restart within the same process reuses it.
fn prometheus_handle() -> Result<PrometheusHandle, Box<dyn std::error::Error>> {
    static PROM_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

    if let Some(handle) = PROM_HANDLE.get() {
        return Ok(handle.clone());
    }
    let handle = PrometheusBuilder::new().install_recorder()?;
    info!("📊 Prometheus metrics recorder installed");
    Ok(PROM_HANDLE.get_or_init(|| handle).clone())
}

impl ServerHandle {
    /// Start the service with the given options.
    ///
    /// 1. Install the Prometheus metrics recorder
    /// 2. Connect to the database and run migrations
    /// 3. Build repositories, services and the geocoding client
    /// 4. Start the REST API server (with Swagger UI)
    /// 5. Start the route expiry task, unless its interval is 0
    pub async fn start(opts: ServerOptions) -> Result<Self, Box<dyn std::error::Error>> {
        let app_cfg = opts.config;
        app_cfg.validate()?;

        info!("Starting pool service...");

        let metrics_handle = prometheus_handle()?;

        // ── Database ───────────────────────────────────────────
        let db_config = DatabaseConfig::from(&app_cfg.database);

        let db = init_database(&db_config).await?;
        if opts.auto_migrate {
            info!("Running database migrations...");
            run_migrations(&db).await?;
            info!("Migrations completed");
        }

        // ── Repositories & Services ────────────────────────────
        let repos: Arc<dyn RepositoryProvider> =
            Arc::new(SeaOrmRepositoryProvider::new(db.clone()));

        let user_service = Arc::new(UserService::new(repos.clone()));
        let route_service = Arc::new(RouteService::new(
            repos.clone(),
            app_cfg.routes.max_age_hours,
        ));
        let invitation_service = Arc::new(InvitationService::new(repos.clone()));

        let geocoder = Arc::new(GoogleGeocodingClient::new(
            &app_cfg.geocoding.base_url,
            app_cfg.geocoding.timeout_secs,
        )?);
        let geocoding_service = Arc::new(GeocodingService::new(
            geocoder,
            app_cfg.geocoding.api_key.clone(),
        ));
        if app_cfg.geocoding.api_key.is_none() {
            warn!("Geocoding API key not configured; /api/v1/geocode will fail");
        }
        if app_cfg.security.hook_secret.is_empty() {
            warn!("Hook secret not configured; hook endpoints reject every call");
        }

        // ── Shutdown coordinator ───────────────────────────────
        let shutdown = ShutdownCoordinator::new(app_cfg.server.shutdown_timeout);
        let shutdown_signal = shutdown.signal();

        // ── Background tasks ───────────────────────────────────
        let expiry_task = match app_cfg.routes.expiry_check_interval_secs {
            0 => {
                info!("Route expiry task disabled; relying on the scheduler hook");
                None
            }
            secs => Some(start_route_expiry_task(
                route_service.clone(),
                shutdown_signal.clone(),
                secs,
            )),
        };

        // ── REST API server ────────────────────────────────────
        let api_router = create_api_router(ApiContext {
            db: db.clone(),
            jwt_config: app_cfg.security.jwt_config(),
            hook_secret: app_cfg.security.hook_secret.clone(),
            user_service,
            route_service,
            invitation_service,
            geocoding_service,
            client_config: Arc::new(app_cfg.client.clone()),
            metrics: Some(metrics_handle),
            started_at: Arc::new(Instant::now()),
        });

        let listener = tokio::net::TcpListener::bind(app_cfg.api_address()).await?;
        let api_addr = listener.local_addr()?;
        info!("REST API server listening on http://{}", api_addr);
        info!("Swagger UI available at http://{}/docs/", api_addr);

        let api_shutdown = shutdown_signal.clone();
        let api_server = axum::serve(listener, api_router).with_graceful_shutdown(async move {
            api_shutdown.wait().await;
            info!("🛑 REST API server received shutdown signal");
        });

        let api_task = tokio::spawn(async move {
            if let Err(e) = api_server.await {
                error!("REST API server error: {}", e);
            }
        });

        info!("🚀 Pool service started");

        Ok(Self {
            repos,
            config: app_cfg,
            api_addr,
            db,
            shutdown,
            api_task,
            expiry_task,
        })
    }

    /// Get a cloneable shutdown signal.
    pub fn shutdown_signal(&self) -> ShutdownSignal {
        self.shutdown.signal()
    }

    /// Install OS signal listeners (SIGTERM, SIGINT) that trigger shutdown.
    pub fn install_signal_handler(&self) {
        self.shutdown.start_signal_listener();
    }

    /// Trigger graceful shutdown (non-blocking).
    pub fn trigger_shutdown(&self) {
        self.shutdown.signal().trigger();
    }

    /// Wait for the server to fully stop after shutdown has been triggered.
    /// In-flight requests get `server.shutdown_timeout` seconds.
    pub async fn wait(self) {
        self.shutdown.signal().wait().await;
        info!("⏳ Waiting for server tasks to complete...");

        let grace = Duration::from_secs(self.shutdown.timeout_secs());
        match tokio::time::timeout(grace, self.api_task).await {
            Ok(Ok(())) => info!("REST API server stopped"),
            Ok(Err(e)) => error!("REST API server task panicked: {}", e),
            Err(_) => warn!("REST API server did not stop within {:?}", grace),
        }

        if let Some(task) = self.expiry_task {
            if let Err(e) = task.await {
                error!("Route expiry task panicked: {}", e);
            }
        }

        if let Err(e) = self.db.close().await {
            warn!("Error closing database connection: {}", e);
        } else {
            info!("✅ Database connection closed");
        }

        info!("👋 Pool service shutdown complete");
    }

    /// Trigger shutdown and wait for completion.
    pub async fn shutdown(self) {
        info!("🛑 Shutting down pool service...");
        self.trigger_shutdown();
        self.wait().await;
    }

    /// Check if the server is still running.
    pub fn is_running(&self) -> bool {
        !self.api_task.is_finished()
    }
}

/// Initialize tracing (logging) from the application config.
///
/// Call this once at process startup (before [`ServerHandle::start`]).
/// `RUST_LOG` wins over `logging.level`.
pub fn init_tracing(config: &AppConfig) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level));

    match config.logging.format.to_lowercase().as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer())
                .init();
        }
    }
}
