//! Background task that periodically closes stale routes.
//!
//! Runs in a tokio::spawn loop and calls `RouteService::expire_stale_routes`
//! every `check_interval_secs` until shutdown.

use std::sync::Arc;

use tokio::time::Duration;
use tracing::{info, warn};

use super::service::RouteService;
use crate::shared::shutdown::ShutdownSignal;

/// Start the route expiry background task.
pub fn start_route_expiry_task(
    service: Arc<RouteService>,
    shutdown: ShutdownSignal,
    check_interval_secs: u64,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        info!(
            check_interval = check_interval_secs,
            "🗓️ Route expiry task started"
        );

        let mut interval = tokio::time::interval(Duration::from_secs(check_interval_secs.max(1)));

        loop {
            tokio::select! {
                _ = interval.tick() => {
                    if let Err(e) = service.expire_stale_routes().await {
                        warn!(error = %e, "Route expiry check error");
                    }
                }
                _ = shutdown.notified().wait() => {
                    info!("🗓️ Route expiry task shutting down");
                    break;
                }
            }
        }

        info!("🗓️ Route expiry task stopped");
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing;
    use crate::domain::{Route, RouteStatus};

    #[tokio::test]
    async fn task_sweeps_on_first_tick_and_stops_on_shutdown() {
        let repos = testing::repos().await;
        let mut route = Route::new(None, "Old", None);
        route.created_at = chrono::Utc::now() - chrono::Duration::hours(48);
        repos.routes().save(route.clone()).await.unwrap();

        let service = Arc::new(RouteService::new(repos.clone(), 24));
        let shutdown = ShutdownSignal::new();
        let handle = start_route_expiry_task(service, shutdown.clone(), 3600);

        let mut closed = false;
        for _ in 0..50 {
            let stored = repos.routes().find_by_id(&route.id).await.unwrap().unwrap();
            if stored.status == RouteStatus::Closed {
                closed = true;
                break;
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
        assert!(closed);

        shutdown.trigger();
        tokio::time::timeout(Duration::from_secs(1), handle)
            .await
            .expect("task stops after shutdown")
            .unwrap();
    }
}
