use crate::leptos::create_leptos_app;
use anyhow::Result;
use axum::http::StatusCode;
use std::net::SocketAddr;
use tokio::net::TcpListener;

pub(crate) async fn start_web() -> Result<()> {
    let app = create_leptos_app()
        .await
        .map_err(|e| anyhow::anyhow!("failed to build leptos app: {e}"))?
        .fallback(fallback);

    let port = std::env::var("PORT")
        .map(|p| p.parse::<u16>().ok())
        .ok()
        .flatten()
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

async fn fallback() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not found")
}
