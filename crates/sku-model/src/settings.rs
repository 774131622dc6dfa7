use serde::{Deserialize, Serialize};

/// Code-composition settings applied to every generated SKU.
///
/// The delimiter separates fragments (empty means plain concatenation).
/// Prefix and suffix wrap the joined fragments whenever at least one
/// fragment was produced and never appear alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkuSettings {
    pub delimiter: String,
    pub prefix: String,
    pub suffix: String,
}

impl SkuSettings {
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    #[must_use]
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }
}
