use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use balldontlie_api::client::NbaApi;
use log::{error, info};
use serde_json::json;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing_subscriber::filter::LevelFilter;

const PROXY_ADDR: &str = "0.0.0.0:3000";
const FAILURE_MESSAGE: &str = "Error fetching data";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Also installs the log -> tracing bridge, so `log` macros below are captured.
    let _ = tracing_subscriber::fmt()
        .with_max_level(LevelFilter::INFO)
        .with_target(false)
        .try_init();

    let listener = TcpListener::bind(PROXY_ADDR).await?;
    info!("proxy listening on {PROXY_ADDR}");

    axum::serve(listener, router(NbaApi::new()))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// `GET /teams` relayed to the upstream API, reachable from any origin.
fn router(api: NbaApi) -> Router {
    Router::new()
        .route("/teams", get(relay_teams))
        .with_state(api)
        .layer(CorsLayer::permissive())
}

async fn relay_teams(State(api): State<NbaApi>) -> Response {
    match api.fetch_teams_raw().await {
        Ok(body) => ([(header::CONTENT_TYPE, "application/json")], body).into_response(),
        Err(e) => {
            error!("relay failed: {e}");
            let envelope = json!({ "message": FAILURE_MESSAGE, "error": e.to_json() });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(envelope)).into_response()
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("failed to listen for ctrl-c: {e}");
        std::future::pending::<()>().await;
    }
    info!("proxy shutting down");
}
