/*!
 * HTTP layer exposing the translation and context pipelines.
 *
 * Routes:
 * - `GET /health`: liveness check
 * - `POST /api/translate-chunk`: chunk translation
 * - `POST /api/generate-context`: context block generation
 * - anything else: static frontend, when a directory is configured
 */

use anyhow::{Context, Result};
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use log::info;
use std::path::Path;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};

use crate::app_config::{Config, ServerConfig};
use crate::context::ContextGenerator;
use crate::providers::anthropic::Anthropic;
use crate::providers::TextGenerator;
use crate::translation::TranslationOrchestrator;

pub mod handlers;

/// Services shared by all requests
#[derive(Debug, Clone)]
pub struct AppState {
    pub translator: Arc<TranslationOrchestrator>,
    pub context_generator: Arc<ContextGenerator>,
}

impl AppState {
    /// Build both pipelines around one text generator
    pub fn new(generator: Arc<dyn TextGenerator>, config: &Config) -> Self {
        Self {
            translator: Arc::new(TranslationOrchestrator::from_config(
                Arc::clone(&generator),
                &config.anthropic,
            )),
            context_generator: Arc::new(ContextGenerator::from_config(
                generator,
                &config.anthropic,
                &config.context,
            )),
        }
    }

    /// Build the state with the Anthropic client described by the configuration
    pub fn from_config(config: &Config) -> Self {
        let generator: Arc<dyn TextGenerator> = Arc::new(Anthropic::from_config(&config.anthropic));
        Self::new(generator, config)
    }
}

/// Assemble the application router
pub fn router(state: AppState, config: &ServerConfig) -> Router {
    let app = Router::new()
        .route("/health", get(handlers::health))
        .route("/api/translate-chunk", post(handlers::translate_chunk))
        .route("/api/generate-context", post(handlers::generate_context))
        .with_state(state);

    let app = match &config.static_dir {
        Some(dir) => {
            let index = Path::new(dir).join("index.html");
            app.fallback_service(ServeDir::new(dir).fallback(ServeFile::new(index)))
        }
        None => app,
    };

    app.layer(DefaultBodyLimit::max(config.body_limit_bytes))
        .layer(CorsLayer::permissive())
}

/// Bind and serve until the process stops
pub async fn run(config: Config) -> Result<()> {
    let addr = format!("{}:{}", config.server.bind_addr, config.server.port);
    let state = AppState::from_config(&config);
    let app = router(state, &config.server);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context(format!("Failed to bind {}", addr))?;
    info!("Listening on http://{}", addr);

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
