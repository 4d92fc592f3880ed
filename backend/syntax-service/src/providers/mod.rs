//! External tagging service capability
//!
//! The pipeline depends only on the `SyntaxProvider` trait; any backend that
//! segments text into ordered tokens with part-of-speech classifications can
//! implement it (AWS Comprehend in production, fakes in tests).
mod comprehend;

use anyhow::Result;
use async_trait::async_trait;

pub use comprehend::ComprehendSyntaxClient;

/// A token as returned by the tagging service. Every field may be absent;
/// the resolver decides what incomplete tokens mean.
#[derive(Debug, Clone, Default)]
pub struct RawSyntaxToken {
    /// Zero-based position of the token in the source text
    pub token_id: Option<i32>,
    /// Surface text span
    pub text: Option<String>,
    pub part_of_speech: Option<RawPartOfSpeech>,
}

/// Part-of-speech classification with a confidence score in [0, 1]
#[derive(Debug, Clone, Default)]
pub struct RawPartOfSpeech {
    pub tag: Option<String>,
    pub score: Option<f32>,
}

/// Capability trait for the external part-of-speech tagging service.
///
/// `Ok(None)` means the call succeeded but the response carried no token
/// collection; the resolver treats that the same as a transport failure.
#[async_trait]
pub trait SyntaxProvider: Send + Sync {
    async fn detect_syntax(
        &self,
        language_code: &str,
        text: &str,
    ) -> Result<Option<Vec<RawSyntaxToken>>>;
}
