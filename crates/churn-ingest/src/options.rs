use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Tokens read as missing by default.
///
/// Matches the conventional CSV-reader NA list. A lone space is deliberately
/// absent: it loads as text and later fails numeric coercion.
pub const DEFAULT_MISSING_TOKENS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Options controlling how a delimited file is parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestOptions {
    /// Field delimiter byte.
    pub delimiter: u8,
    /// Exact cell texts that load as missing.
    pub missing_tokens: BTreeSet<String>,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            missing_tokens: DEFAULT_MISSING_TOKENS
                .iter()
                .map(|token| (*token).to_string())
                .collect(),
        }
    }
}

impl IngestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Replace the missing-token set.
    #[must_use]
    pub fn with_missing_tokens<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.missing_tokens = tokens.into_iter().map(Into::into).collect();
        self
    }

    pub fn is_missing_token(&self, raw: &str) -> bool {
        self.missing_tokens.contains(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tokens() {
        let options = IngestOptions::default();
        assert!(options.is_missing_token(""));
        assert!(options.is_missing_token("NA"));
        assert!(options.is_missing_token("nan"));
        assert!(!options.is_missing_token(" "));
        assert!(!options.is_missing_token("No"));
    }

    #[test]
    fn custom_tokens_replace_defaults() {
        let options = IngestOptions::new().with_missing_tokens(["?"]);
        assert!(options.is_missing_token("?"));
        assert!(!options.is_missing_token(""));
    }
}
