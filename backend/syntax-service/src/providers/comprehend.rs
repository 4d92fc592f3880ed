//! AWS Comprehend integration for part-of-speech tagging
use anyhow::{Context, Result};
use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_comprehend::types::{PartOfSpeechTag, SyntaxLanguageCode, SyntaxToken};
use tracing::debug;

use super::{RawPartOfSpeech, RawSyntaxToken, SyntaxProvider};

/// AWS Comprehend `DetectSyntax` client
pub struct ComprehendSyntaxClient {
    client: aws_sdk_comprehend::Client,
}

impl ComprehendSyntaxClient {
    /// Create a client for the given region, using the default AWS
    /// credential chain
    pub async fn from_region(region: String) -> Self {
        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region))
            .load()
            .await;

        Self {
            client: aws_sdk_comprehend::Client::new(&sdk_config),
        }
    }
}

#[async_trait]
impl SyntaxProvider for ComprehendSyntaxClient {
    async fn detect_syntax(
        &self,
        language_code: &str,
        text: &str,
    ) -> Result<Option<Vec<RawSyntaxToken>>> {
        let start = std::time::Instant::now();

        let output = self
            .client
            .detect_syntax()
            .language_code(SyntaxLanguageCode::from(language_code))
            .text(text)
            .send()
            .await
            .context("Comprehend DetectSyntax call failed")?;

        debug!(
            elapsed_ms = start.elapsed().as_millis(),
            token_count = output.syntax_tokens.as_ref().map_or(0, Vec::len),
            "DetectSyntax response received"
        );

        Ok(output
            .syntax_tokens
            .map(|tokens| tokens.into_iter().map(RawSyntaxToken::from).collect()))
    }
}

impl From<SyntaxToken> for RawSyntaxToken {
    fn from(token: SyntaxToken) -> Self {
        Self {
            token_id: token.token_id,
            text: token.text,
            part_of_speech: token.part_of_speech.map(RawPartOfSpeech::from),
        }
    }
}

impl From<PartOfSpeechTag> for RawPartOfSpeech {
    fn from(pos: PartOfSpeechTag) -> Self {
        Self {
            tag: pos.tag.map(|t| t.as_str().to_string()),
            score: pos.score,
        }
    }
}
