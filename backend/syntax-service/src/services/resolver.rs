//! Tag resolution: one provider call, then confidence-gated normalization
use std::sync::Arc;

use tracing::debug;

use crate::error::{AppError, Result};
use crate::models::{SyntaxHighlightedToken, Tag};
use crate::providers::{RawPartOfSpeech, SyntaxProvider};

/// The service only supports English source text
const LANGUAGE_CODE: &str = "en";

/// Orchestrates the tagging service call and normalizes each token's tag
/// against the configured confidence threshold.
///
/// Stateless across requests: holds only the shared provider handle and the
/// threshold injected at startup.
pub struct SyntaxResolver {
    provider: Arc<dyn SyntaxProvider>,
    lower_limit_score: f32,
}

impl SyntaxResolver {
    pub fn new(provider: Arc<dyn SyntaxProvider>, lower_limit_score: f32) -> Self {
        Self {
            provider,
            lower_limit_score,
        }
    }

    /// Resolve `text` into display-ready tokens in source order.
    ///
    /// Exactly one provider call, no retries. Tokens missing an id, text, or
    /// classification are dropped rather than failing the request; a missing
    /// token collection fails the whole request.
    pub async fn resolve(&self, text: &str) -> Result<Vec<SyntaxHighlightedToken>> {
        let tokens = self
            .provider
            .detect_syntax(LANGUAGE_CODE, text)
            .await
            .map_err(|e| AppError::Service(format!("{e:#}")))?;

        let tokens = tokens.ok_or_else(|| AppError::Service("service returned no tokens".to_string()))?;

        let total = tokens.len();
        let highlighted: Vec<SyntaxHighlightedToken> = tokens
            .into_iter()
            .filter_map(|token| {
                let (Some(id), Some(text), Some(pos)) =
                    (token.token_id, token.text, token.part_of_speech)
                else {
                    return None;
                };
                Some(SyntaxHighlightedToken {
                    id,
                    text,
                    tag: self.gate(&pos),
                })
            })
            .collect();

        if highlighted.len() < total {
            debug!(
                dropped = total - highlighted.len(),
                retained = highlighted.len(),
                "dropped incomplete tokens"
            );
        }

        Ok(highlighted)
    }

    /// Confidence gate: a tag is trusted only when both the name and a score
    /// at or above the threshold are present
    fn gate(&self, pos: &RawPartOfSpeech) -> Tag {
        match (&pos.tag, pos.score) {
            (Some(tag), Some(score)) if score >= self.lower_limit_score => Tag::from_name(tag),
            _ => Tag::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::RawSyntaxToken;
    use anyhow::anyhow;
    use async_trait::async_trait;

    struct StaticProvider {
        tokens: Option<Vec<RawSyntaxToken>>,
    }

    #[async_trait]
    impl SyntaxProvider for StaticProvider {
        async fn detect_syntax(
            &self,
            _language_code: &str,
            _text: &str,
        ) -> anyhow::Result<Option<Vec<RawSyntaxToken>>> {
            Ok(self.tokens.clone())
        }
    }

    struct FailingProvider;

    #[async_trait]
    impl SyntaxProvider for FailingProvider {
        async fn detect_syntax(
            &self,
            _language_code: &str,
            _text: &str,
        ) -> anyhow::Result<Option<Vec<RawSyntaxToken>>> {
            Err(anyhow!("connection refused"))
        }
    }

    fn token(id: i32, text: &str, tag: Option<&str>, score: Option<f32>) -> RawSyntaxToken {
        RawSyntaxToken {
            token_id: Some(id),
            text: Some(text.to_string()),
            part_of_speech: Some(RawPartOfSpeech {
                tag: tag.map(str::to_string),
                score,
            }),
        }
    }

    fn resolver(tokens: Option<Vec<RawSyntaxToken>>, threshold: f32) -> SyntaxResolver {
        SyntaxResolver::new(Arc::new(StaticProvider { tokens }), threshold)
    }

    #[tokio::test]
    async fn test_resolves_tokens_in_source_order() {
        let resolver = resolver(
            Some(vec![
                token(0, "The", Some("DET"), Some(0.9)),
                token(1, "cat", Some("NOUN"), Some(0.95)),
                token(2, "sat", Some("VERB"), Some(0.4)),
                token(3, ".", Some("PUNCT"), Some(0.99)),
            ]),
            0.5,
        );

        let result = resolver.resolve("The cat sat.").await.unwrap();
        assert_eq!(
            result,
            vec![
                SyntaxHighlightedToken {
                    id: 0,
                    text: "The".to_string(),
                    tag: Tag::Det,
                },
                SyntaxHighlightedToken {
                    id: 1,
                    text: "cat".to_string(),
                    tag: Tag::Noun,
                },
                SyntaxHighlightedToken {
                    id: 2,
                    text: "sat".to_string(),
                    tag: Tag::Unknown,
                },
                SyntaxHighlightedToken {
                    id: 3,
                    text: ".".to_string(),
                    tag: Tag::Punct,
                },
            ]
        );
    }

    #[tokio::test]
    async fn test_score_at_threshold_passes_gate() {
        let resolver = resolver(Some(vec![token(0, "cat", Some("NOUN"), Some(0.5))]), 0.5);
        let result = resolver.resolve("cat").await.unwrap();
        assert_eq!(result[0].tag, Tag::Noun);
    }

    #[tokio::test]
    async fn test_missing_tag_or_score_is_unknown() {
        let resolver = resolver(
            Some(vec![
                token(0, "a", None, Some(0.9)),
                token(1, "b", Some("NOUN"), None),
            ]),
            0.5,
        );
        let result = resolver.resolve("a b").await.unwrap();
        assert_eq!(result[0].tag, Tag::Unknown);
        assert_eq!(result[1].tag, Tag::Unknown);
    }

    #[tokio::test]
    async fn test_unexpected_tag_name_buckets_to_other() {
        let resolver = resolver(Some(vec![token(0, "hmm", Some("GERUND"), Some(0.9))]), 0.5);
        let result = resolver.resolve("hmm").await.unwrap();
        assert_eq!(result[0].tag, Tag::O);
    }

    #[tokio::test]
    async fn test_incomplete_tokens_are_dropped_silently() {
        let missing_id = RawSyntaxToken {
            token_id: None,
            ..token(0, "x", Some("NOUN"), Some(0.9))
        };
        let missing_text = RawSyntaxToken {
            text: None,
            ..token(1, "y", Some("NOUN"), Some(0.9))
        };
        let missing_pos = RawSyntaxToken {
            part_of_speech: None,
            ..token(2, "z", Some("NOUN"), Some(0.9))
        };

        let resolver = resolver(
            Some(vec![
                missing_id,
                token(1, "kept", Some("NOUN"), Some(0.9)),
                missing_text,
                missing_pos,
            ]),
            0.5,
        );
        let result = resolver.resolve("ignored").await.unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].text, "kept");
    }

    #[tokio::test]
    async fn test_empty_token_collection_is_ok() {
        let resolver = resolver(Some(vec![]), 0.5);
        let result = resolver.resolve("").await.unwrap();
        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn test_absent_token_collection_is_service_error() {
        let resolver = resolver(None, 0.5);
        let err = resolver.resolve("text").await.unwrap_err();
        assert!(matches!(err, AppError::Service(_)));
    }

    #[tokio::test]
    async fn test_provider_failure_is_service_error() {
        let resolver = SyntaxResolver::new(Arc::new(FailingProvider), 0.5);
        let err = resolver.resolve("text").await.unwrap_err();
        assert!(matches!(err, AppError::Service(_)));
    }
}
