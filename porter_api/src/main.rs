mod docs;
mod error;
mod quote;
mod state;

use crate::docs::docs_routes;
use crate::quote::quote_handler;
use crate::state::AppState;
use aide::openapi::OpenApi;
use aide::transform::TransformOpenApi;
use axum::http::Method;
use axum::routing::{get, post};
use axum::{Extension, serve};
use porter_quoting::quote::QuoteCalculator;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tracing::{Level, info};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() {
    dotenvy::from_filename("./.env.local").ok();
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();
    aide::generate::on_error(|error| tracing::error!("{}", error));
    aide::generate::extract_schemas(true);

    let state = Arc::new(AppState {
        quoting: QuoteCalculator::standard(),
    });

    let cors_layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_origin(Any)
        .allow_headers(Any);

    let mut api = OpenApi::default();

    let app = aide::axum::ApiRouter::new()
        .nest_api_service("/docs", docs_routes(state.clone()))
        .route("/", get(home_handler))
        .route("/calculate-delivery-cost", post(quote_handler))
        .finish_api_with(&mut api, api_docs);

    if std::env::args().any(|a| a == "--generate-openapi") {
        use std::fs::File;
        use std::io::Write;

        let mut file = File::create("schemas/openapi.json").unwrap();
        let spec = serde_json::to_string_pretty(&api).unwrap();
        file.write_all(spec.as_bytes()).unwrap();
        info!("OpenAPI specification has been written to openapi.json");
        return;
    }

    let app = app
        .layer(ServiceBuilder::new().layer(cors_layer))
        .layer(Extension(Arc::new(api)))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("0.0.0.0:10000").await.unwrap();

    info!("delivery cost calculator listening on port 10000");

    serve(listener, app).await.unwrap();
}

async fn home_handler() -> &'static str {
    "Delivery Cost Calculator API is running!"
}

fn api_docs(api: TransformOpenApi) -> TransformOpenApi {
    api.title("Porter Open API")
}
