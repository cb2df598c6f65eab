//! Listener lifecycle: bind once, serve until shutdown, release the port.

use std::future::{Future, IntoFuture};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;
use tokio::sync::Notify;

use algobench_core::error::{AlgoBenchError, Result};

use crate::{app_state::AppState, router};

/// A bound, not yet serving, listener.
pub struct Server {
    listener: TcpListener,
    local_addr: SocketAddr,
    state: AppState,
}

impl Server {
    /// Bind `addr`. Fails when the port is already taken.
    pub async fn bind(addr: SocketAddr, state: AppState) -> Result<Self> {
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|e| AlgoBenchError::Internal(format!("bind {addr} failed: {e}")))?;
        let local_addr = listener
            .local_addr()
            .map_err(|e| AlgoBenchError::Internal(format!("local_addr failed: {e}")))?;
        Ok(Self { listener, local_addr, state })
    }

    /// Actual bound address (resolves port 0).
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Serve until `shutdown` resolves, then drain. Draining also cancels
    /// running benchmarks at their next sort. With a grace period, the server
    /// stops waiting for in-flight requests once it elapses. The listener is
    /// dropped on return either way.
    pub async fn serve<F>(self, shutdown: F, grace: Option<Duration>) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let Server { listener, local_addr, state } = self;
        let app = router::build_router(state.clone());

        let stopping = Arc::new(Notify::new());
        let signal = {
            let stopping = Arc::clone(&stopping);
            async move {
                shutdown.await;
                state.set_draining();
                stopping.notify_one();
            }
        };

        tracing::info!(%local_addr, "algobench listening");
        let serve = axum::serve(listener, app)
            .with_graceful_shutdown(signal)
            .into_future();
        tokio::pin!(serve);

        let deadline = async {
            stopping.notified().await;
            match grace {
                Some(g) => tokio::time::sleep(g).await,
                None => std::future::pending::<()>().await,
            }
        };

        tokio::select! {
            res = &mut serve => {
                res.map_err(|e| AlgoBenchError::Internal(format!("server failed: {e}")))?;
                tracing::info!(%local_addr, "algobench stopped");
            }
            _ = deadline => {
                tracing::warn!(%local_addr, "shutdown grace period elapsed, dropping open connections");
            }
        }
        Ok(())
    }
}

/// Resolves on Ctrl+C or SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
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
                tracing::error!(error = %e, "failed to install SIGTERM handler");
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
    tracing::info!("signal received, starting graceful shutdown");
}
