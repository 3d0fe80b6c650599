//! HTTP server bootstrap and runtime wiring.

use std::future::{Future, IntoFuture};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::Notify;
use tracing::{info, warn};

use expenses_infra::{db, PostgresExpenseStore};

use crate::app::{self, SharedExpenseStore};
use crate::config::AppConfig;

/// How long in-flight requests may run once a shutdown signal arrives.
pub const SHUTDOWN_GRACE: Duration = Duration::from_secs(10);

/// Connect to Postgres, prepare the table and serve until a shutdown signal.
pub async fn run(config: AppConfig) -> anyhow::Result<()> {
    info!(?config, "starting expenses api");

    let pool = db::connect(&config.database_url, config.max_db_connections)
        .await
        .context("connect to database")?;
    db::ensure_schema(&pool)
        .await
        .context("can't create expenses table")?;

    let store: SharedExpenseStore = Arc::new(PostgresExpenseStore::new(pool));
    let router = app::build_app(store, config.auth_token.clone());

    let listener = TcpListener::bind(config.bind_addr())
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr()))?;
    info!(addr = %listener.local_addr()?, "listening");

    serve_with_deadline(listener, router, shutdown_signal(), SHUTDOWN_GRACE).await?;

    info!("bye bye!");
    Ok(())
}

/// Serve until `signal` resolves, then drain connections for at most `grace`.
///
/// Connections still open when `grace` runs out are dropped.
pub async fn serve_with_deadline<F>(
    listener: TcpListener,
    router: Router,
    signal: F,
    grace: Duration,
) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let stopping = Arc::new(Notify::new());
    let notify = stopping.clone();

    let serve = axum::serve(listener, router)
        .with_graceful_shutdown(async move {
            signal.await;
            notify.notify_one();
        })
        .into_future();

    let deadline = async {
        stopping.notified().await;
        tokio::time::sleep(grace).await;
    };

    tokio::select! {
        res = serve => res.context("server error")?,
        _ = deadline => {
            warn!(grace_secs = grace.as_secs_f64(), "graceful shutdown timed out, dropping open connections");
        }
    }

    Ok(())
}

/// Resolves on Ctrl-C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("shutting down the server");
}

#[cfg(test)]
mod tests {
    use axum::routing::get;
    use tokio::sync::oneshot;

    use super::*;

    async fn bind() -> (TcpListener, String) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());
        (listener, url)
    }

    #[tokio::test]
    async fn stops_promptly_when_idle() {
        let (listener, _) = bind().await;
        let router = Router::new().route("/", get(|| async { "ok" }));

        let res = tokio::time::timeout(
            Duration::from_secs(5),
            serve_with_deadline(listener, router, async {}, Duration::from_secs(60)),
        )
        .await
        .expect("server should stop without waiting for the grace period");
        assert!(res.is_ok());
    }

    #[tokio::test]
    async fn stuck_request_does_not_block_shutdown_past_grace() {
        let (listener, url) = bind().await;
        let router = Router::new().route("/stuck", get(|| std::future::pending::<&'static str>()));
        let (stop_tx, stop_rx) = oneshot::channel::<()>();

        let server = tokio::spawn(serve_with_deadline(
            listener,
            router,
            async {
                let _ = stop_rx.await;
            },
            Duration::from_millis(200),
        ));
        let client = tokio::spawn(reqwest::get(format!("{url}/stuck")));
        tokio::time::sleep(Duration::from_millis(100)).await;
        stop_tx.send(()).unwrap();

        let res = tokio::time::timeout(Duration::from_secs(5), server)
            .await
            .expect("server should give up after the grace period")
            .unwrap();
        assert!(res.is_ok());
        client.abort();
    }
}
