//! HTTP handlers for the syntax highlighting endpoint
use actix_web::{web, HttpRequest, HttpResponse};
use serde::Deserialize;
use tracing::{error, warn};

use crate::error::{AppError, Result};
use crate::services::SyntaxResolver;

#[derive(Debug, Deserialize)]
struct SyntaxQuery {
    text: Option<String>,
}

/// Extract the `text` query parameter without trimming or normalizing it.
///
/// An absent query string and an absent `text` key both surface as the same
/// 400 to the caller, but carry distinct messages for diagnosis. An empty
/// value (`?text=`) is a valid request.
fn extract_text(req: &HttpRequest) -> Result<String> {
    let query = req.query_string();
    if query.is_empty() {
        return Err(AppError::MissingInput("query string is null".to_string()));
    }

    let params = web::Query::<SyntaxQuery>::from_query(query)
        .map_err(|_| AppError::MissingInput("query string is null".to_string()))?;

    params
        .into_inner()
        .text
        .ok_or_else(|| AppError::MissingInput("query string text is null".to_string()))
}

/// `GET /syntax-highlighted-text?text=...`
///
/// 200 with the resolved token array (empty analysis is still 200), 400 when
/// the text is missing, 500 when the tagging service fails.
pub async fn syntax_highlighted_text(
    req: HttpRequest,
    resolver: web::Data<SyntaxResolver>,
) -> Result<HttpResponse> {
    let text = extract_text(&req).map_err(|e| {
        warn!(error = %e, "rejected request with missing input");
        e
    })?;

    let tokens = resolver.resolve(&text).await.map_err(|e| {
        error!(error = %e, "syntax resolution failed");
        e
    })?;

    Ok(HttpResponse::Ok().json(tokens))
}

/// Configure routes for syntax service
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/syntax-highlighted-text",
        web::get().to(syntax_highlighted_text),
    );
}
