//! Syntax Service - part-of-speech tagging behind an HTTP boundary
//!
//! This service provides:
//! - Text analysis via AWS Comprehend `DetectSyntax`
//! - Confidence-gated tag resolution (low-confidence tags collapse to UNKNOWN)
//! - A single `GET /syntax-highlighted-text` endpoint returning display-ready
//!   `{id, text, tag}` entries in source token order

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod providers;
pub mod services;

pub use config::{Config, ConfigError};
pub use error::{AppError, ErrorResponse};
pub use models::{SyntaxHighlightedToken, Tag};
pub use providers::{ComprehendSyntaxClient, RawPartOfSpeech, RawSyntaxToken, SyntaxProvider};
pub use services::SyntaxResolver;
