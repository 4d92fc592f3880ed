//! Wire types for the syntax highlighting pipeline
use serde::{Deserialize, Serialize};

/// Part-of-speech category shown to the client.
///
/// Closed set matching the Comprehend tag vocabulary, plus the UNKNOWN
/// sentinel used when the confidence gate rejects a tag. Tag names coming
/// back from the service are resolved against this set; anything outside it
/// lands in the `O` (other) bucket instead of passing through untyped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Tag {
    Noun,
    Pron,
    Propn,
    Verb,
    Aux,
    Adp,
    Det,
    Adv,
    Adj,
    Conj,
    Cconj,
    Sconj,
    Intj,
    Part,
    Punct,
    Num,
    Sym,
    /// Other: anything the service tags outside the categories above
    O,
    /// Sentinel for missing or low-confidence classifications
    Unknown,
}

impl Tag {
    /// Resolve a service-provided tag name against the closed set
    pub fn from_name(name: &str) -> Self {
        match name {
            "NOUN" => Tag::Noun,
            "PRON" => Tag::Pron,
            "PROPN" => Tag::Propn,
            "VERB" => Tag::Verb,
            "AUX" => Tag::Aux,
            "ADP" => Tag::Adp,
            "DET" => Tag::Det,
            "ADV" => Tag::Adv,
            "ADJ" => Tag::Adj,
            "CONJ" => Tag::Conj,
            "CCONJ" => Tag::Cconj,
            "SCONJ" => Tag::Sconj,
            "INTJ" => Tag::Intj,
            "PART" => Tag::Part,
            "PUNCT" => Tag::Punct,
            "NUM" => Tag::Num,
            "SYM" => Tag::Sym,
            _ => Tag::O,
        }
    }
}

/// A single display-ready token: derived per request, never persisted
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SyntaxHighlightedToken {
    pub id: i32,
    pub text: String,
    pub tag: Tag,
}
