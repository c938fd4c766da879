//! Canned keyword replies for the coach conversation

use crate::seed;

/// One row of the keyword table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordReply {
    pub keyword: String,
    pub reply: String,
}

impl KeywordReply {
    pub fn new(keyword: impl Into<String>, reply: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            reply: reply.into(),
        }
    }
}

/// Maps free text to a reply by substring match over an ordered table.
///
/// Table order is the tie-break: when several keywords occur in the input,
/// the one declared first wins.
#[derive(Debug, Clone)]
pub struct Responder {
    table: Vec<KeywordReply>,
}

impl Default for Responder {
    fn default() -> Self {
        Self::new(
            seed::KEYWORD_REPLIES
                .iter()
                .map(|(keyword, reply)| KeywordReply::new(*keyword, *reply))
                .collect(),
        )
    }
}

impl Responder {
    pub fn new(table: Vec<KeywordReply>) -> Self {
        Self { table }
    }

    /// Resolve the reply for `input`. Pure and deterministic.
    pub fn resolve(&self, input: &str) -> String {
        let normalized = input.to_lowercase();

        match self
            .table
            .iter()
            .find(|entry| normalized.contains(entry.keyword.as_str()))
        {
            Some(entry) => {
                tracing::debug!(keyword = %entry.keyword, "keyword reply matched");
                entry.reply.clone()
            }
            None => seed::fallback_reply(&normalized),
        }
    }
}
