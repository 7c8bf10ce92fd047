use axum::{
    extract::MatchedPath,
    http::Request,
    routing::post,
    Router,
};
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::configuration::Settings;
use crate::routes::add_todo;
use crate::store::TodoStore;

pub struct Application {
    listener: TcpListener,
    port: u16,
    store: TodoStore,
}

impl Application {
    pub async fn build(configuration: &Settings) -> Result<Self, std::io::Error> {
        let listener = TcpListener::bind(configuration.application.address()).await?;
        let port = listener.local_addr()?.port();

        Ok(Self {
            listener,
            port,
            store: TodoStore::new(),
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn store(&self) -> TodoStore {
        self.store.clone()
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        tracing::info!(port = self.port, "Listening");

        axum::serve(self.listener, router(self.store))
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

pub fn router(store: TodoStore) -> Router {
    Router::new()
        .route("/todo", post(add_todo))
        .with_state(store)
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
                let path = request
                    .extensions()
                    .get::<MatchedPath>()
                    .map(MatchedPath::as_str);
                tracing::info_span!(
                    "Starting HTTP request",
                    method = ?request.method(),
                    path,
                    request_id = %Uuid::new_v4(),
                )
            }),
        )
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::error!(%error, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(error) => {
                tracing::error!(%error, "Failed to listen for SIGTERM");
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

    tracing::info!("Shutting down");
}
