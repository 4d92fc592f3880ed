//! Syntax Service - Main entry point
//!
//! Serves `GET /syntax-highlighted-text`, delegating part-of-speech tagging
//! to AWS Comprehend and collapsing low-confidence tags to UNKNOWN.
use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use syntax_service::handlers;
use syntax_service::providers::{ComprehendSyntaxClient, SyntaxProvider};
use syntax_service::services::SyntaxResolver;
use syntax_service::Config;

fn build_cors(allowed_origins: &str) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(vec!["GET"])
        .allow_any_header();
    for origin in allowed_origins.split(',') {
        let origin = origin.trim();
        if origin == "*" {
            cors = cors.allow_any_origin();
        } else {
            cors = cors.allowed_origin(origin);
        }
    }
    cors
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "syntax_service=debug,actix_web=info,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration; invalid or missing configuration is fatal
    dotenvy::dotenv().ok();
    let config = Config::from_env().map_err(|e| {
        error!("Failed to load configuration: {e}");
        e
    })?;

    info!("Starting syntax-service v{}", env!("CARGO_PKG_VERSION"));
    info!(
        region = %config.aws_region,
        lower_limit_score = config.lower_limit_score,
        "Configuration loaded"
    );

    let provider: Arc<dyn SyntaxProvider> =
        Arc::new(ComprehendSyntaxClient::from_region(config.aws_region.clone()).await);
    let resolver = web::Data::new(SyntaxResolver::new(provider, config.lower_limit_score));

    let bind_addr = format!("0.0.0.0:{}", config.app_port);
    info!("Listening on {bind_addr}");

    let allowed_origins = config.cors_allowed_origins.clone();
    HttpServer::new(move || {
        App::new()
            .app_data(resolver.clone())
            .wrap(build_cors(&allowed_origins))
            .route("/health", web::get().to(|| async { "OK" }))
            .configure(handlers::configure_routes)
    })
    .bind(&bind_addr)?
    .run()
    .await?;

    Ok(())
}
