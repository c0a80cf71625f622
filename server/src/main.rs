mod config;
mod routes;
mod state;
mod upload;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().expect("invalid configuration");
    let uploads = upload::UploadClient::new(&config.upload).expect("upload client init failed");
    tracing::info!(upload_url = uploads.upload_url(), "upload proxy configured");

    let state = state::AppState::new(uploads);

    // Without Leptos config (plain `cargo run`), serve the API only.
    let app = match routes::leptos_app(state.clone()) {
        Ok(app) => app,
        Err(e) => {
            tracing::warn!(error = %e, "Leptos SSR disabled; serving API routes only");
            routes::api_routes(state)
        }
    };

    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "timekeep listening");
    axum::serve(listener, app).await.expect("server failed");
}
