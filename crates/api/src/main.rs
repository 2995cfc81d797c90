use stockroom_api::app::services;
use stockroom_api::config::ApiConfig;

#[tokio::main]
async fn main() {
    stockroom_observability::init();

    let config = ApiConfig::from_env();
    let services = services::build_services(&config)
        .await
        .expect("failed to build services");
    let app = stockroom_api::app::build_app(services);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {e}", config.bind_addr));

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
