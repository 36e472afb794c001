//! HTTP server for the site.
//!
//! ## Endpoints
//! - GET  /, /about, /services, /products, /products-simple, /contact
//! - POST /contact - simulated contact form submission
//! - GET  /health - locale configuration and resolution metrics (JSON)
//!
//! Every page accepts `?lang=<code>`. Each request works on its own clone of
//! the application's `LocaleContext`, so switching language never affects
//! other requests.

use crate::config::Config;
use crate::i18n::{
    DictionaryValidator, I18nError, LocaleContext, LocaleDictionary, LocaleRegistry,
    MetricsReport,
};
use crate::site::{self, ContactForm, ContactNotice, ContactView, Page, SubmissionOutcome};
use anyhow::{Context, Result};
use axum::{
    extract::{Form, Query, State},
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

/// State shared across handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub i18n: LocaleContext,
}

impl AppState {
    pub fn new(config: Config, dictionary: LocaleDictionary) -> Self {
        Self {
            config: Arc::new(config),
            i18n: LocaleContext::new(Arc::new(dictionary)),
        }
    }

    /// Load dictionaries as configured, validate them, and build the state.
    ///
    /// Validation problems are logged; they never prevent startup.
    pub fn from_config(config: Config) -> Result<Self> {
        let dictionary = match &config.locales_dir {
            Some(dir) => {
                let registry = LocaleRegistry::builtin(&config.default_locale)
                    .context("DEFAULT_LOCALE is not a supported locale")?;
                LocaleDictionary::load_dir(registry, dir)
                    .with_context(|| format!("Failed to load dictionaries from {}", dir.display()))?
            }
            None => LocaleDictionary::builtin(&config.default_locale)
                .context("Failed to load built-in dictionaries")?,
        };

        let report = DictionaryValidator::validate(&dictionary);
        for problem in &report.errors {
            error!("Dictionary error: {}", problem);
        }
        for problem in &report.warnings {
            warn!("Dictionary warning: {}", problem);
        }
        if report.is_clean() {
            info!("✓ Dictionaries validated");
        }

        Ok(Self::new(config, dictionary))
    }
}

/// Errors surfaced to HTTP clients.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Unsupported language '{0}'")]
    UnknownLocale(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<I18nError> for AppError {
    fn from(err: I18nError) -> Self {
        match err {
            I18nError::UnknownLocale(code) => AppError::UnknownLocale(code),
            other => AppError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::UnknownLocale(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, self.to_string()).into_response()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LangQuery {
    pub lang: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub default_locale: String,
    pub locales: Vec<String>,
    pub metrics: MetricsReport,
}

/// Build the site router.
pub fn create_router(state: AppState) -> Router {
    let mut router = Router::new();
    for page in Page::ALL {
        router = if page == Page::Contact {
            router.route(page.path(), get(show_page).post(submit_contact))
        } else {
            router.route(page.path(), get(show_page))
        };
    }

    router
        .route("/health", get(health))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve until Ctrl+C.
pub async fn serve(listener: TcpListener, state: AppState) -> Result<()> {
    let addr = listener.local_addr()?;
    info!("✓ Listening on http://{}", addr);

    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

/// Clone the shared context and apply the request's `lang`, if any.
fn request_context(state: &AppState, query: &LangQuery) -> Result<LocaleContext, AppError> {
    let mut ctx = state.i18n.clone();
    if let Some(lang) = query.lang.as_deref() {
        ctx.set_active_locale(lang)?;
    }
    Ok(ctx)
}

/// GET any page in the route table.
async fn show_page(
    State(state): State<AppState>,
    Query(query): Query<LangQuery>,
    uri: Uri,
) -> Result<Response, AppError> {
    let ctx = request_context(&state, &query)?;
    match Page::from_path(uri.path()) {
        Some(page) => Ok(Html(site::render_page(&ctx, &state.config, page)).into_response()),
        None => Ok((
            StatusCode::NOT_FOUND,
            Html(site::render_not_found(&ctx, &state.config, uri.path())),
        )
            .into_response()),
    }
}

/// POST /contact
async fn submit_contact(
    State(state): State<AppState>,
    Query(query): Query<LangQuery>,
    Form(form): Form<ContactForm>,
) -> Result<Html<String>, AppError> {
    let ctx = request_context(&state, &query)?;

    let view = match site::submit(&form, state.config.contact_submit_delay).await {
        SubmissionOutcome::Sent => ContactView {
            form: ContactForm::default(),
            notice: Some(ContactNotice::Sent),
        },
        SubmissionOutcome::Invalid(_) => ContactView {
            form,
            notice: Some(ContactNotice::Invalid),
        },
    };

    Ok(Html(site::render_contact(&ctx, &state.config, &view)))
}

/// GET /health
async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let registry = state.i18n.registry();
    Json(HealthResponse {
        status: "ok",
        default_locale: registry.default_code().to_string(),
        locales: registry.list().iter().map(|l| l.code.clone()).collect(),
        metrics: state.i18n.metrics().report(),
    })
}

async fn not_found(
    State(state): State<AppState>,
    Query(query): Query<LangQuery>,
    uri: Uri,
) -> Result<(StatusCode, Html<String>), AppError> {
    let ctx = request_context(&state, &query)?;
    Ok((
        StatusCode::NOT_FOUND,
        Html(site::render_not_found(&ctx, &state.config, uri.path())),
    ))
}
