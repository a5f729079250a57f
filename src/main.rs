use status_check_api::config::Settings;
use status_check_api::db::MongoStore;
use status_check_api::server;
use std::io;
use std::sync::Arc;
use tracing::error;
use tracing_subscriber::EnvFilter;

/// Status Check Service Entry Point
///
/// Configures and launches the Actix-web HTTP server with:
/// - Status check REST endpoints under `/api`
/// - Swagger UI for API documentation
/// - Environment configuration via `.env` file
/// - One shared MongoDB connection, verified before serving
///
/// # Endpoints
/// - REST: `/api/`, `/api/status` (configured in routes)
/// - Swagger UI: `/docs/`
/// - OpenAPI document: `/openapi.json`
///
/// # Configuration
/// - `MONGO_URL`, `DB_NAME`, `CORS_ORIGINS` are required
/// - Server binds to `HOST:PORT`, `127.0.0.1:8080` by default
/// - Log filtering through `RUST_LOG` (default `info`)
#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = Settings::from_env().map_err(|e| {
        error!(error = %e, "invalid configuration");
        io::Error::other(e)
    })?;

    let store = MongoStore::connect(&settings.mongo_url, &settings.db_name)
        .await
        .map_err(io::Error::other)?;

    server::serve(&settings, Arc::new(store)).await
}
