use crate::config::Settings;
use crate::db::DocumentStore;
use crate::middleware::{cors, error_fallback};
use crate::openapi::ApiDoc;
use crate::routes;
use crate::state::AppState;
use actix_web::middleware::Logger;
use actix_web::{App, HttpServer, web};
use std::io;
use std::sync::Arc;
use tracing::{error, info};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Binds the HTTP server to `settings.host:settings.port` and serves until
/// shutdown.
///
/// The store is closed once the server stops, and also when binding fails.
pub async fn serve(settings: &Settings, store: Arc<dyn DocumentStore>) -> io::Result<()> {
    let state = web::Data::new(AppState::new(store.clone()));
    let cors_origins = settings.cors_origins.clone();

    let server = HttpServer::new(move || {
        let openapi = ApiDoc::openapi();

        App::new()
            .app_data(state.clone())
            .wrap(error_fallback())
            .wrap(Logger::default())
            .wrap(cors(&cors_origins))
            .default_service(web::to(routes::not_found))
            .configure(routes::configure)
            .service(SwaggerUi::new("/docs/{_:.*}").url("/openapi.json", openapi))
    })
    .bind((settings.host.as_str(), settings.port));

    let server = match server {
        Ok(server) => server,
        Err(e) => {
            error!(host = %settings.host, port = settings.port, error = %e, "failed to bind HTTP server");
            store.close().await;
            return Err(e);
        }
    };

    info!(host = %settings.host, port = settings.port, "starting HTTP server");
    let result = server.run().await;

    store.close().await;
    result
}
