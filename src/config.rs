//! Registry configuration

use crate::error::{Result, VocabError};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for a subject registry.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RegistryConfig {
    /// Segment separator in subject names.
    pub separator: char,

    /// Upper bound on distinct subjects (None = unbounded).
    pub max_subjects: Option<usize>,
}

impl RegistryConfig {
    /// Dotted names, no subject limit.
    pub fn new() -> Self {
        Self {
            separator: '.',
            max_subjects: None,
        }
    }

    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    pub fn with_max_subjects(mut self, max: usize) -> Self {
        self.max_subjects = Some(max);
        self
    }

    /// Validate configuration.
    pub fn validate(&self) -> Result<()> {
        if !self.separator.is_ascii_punctuation() {
            return Err(VocabError::InvalidConfig(
                "separator must be ASCII punctuation",
            ));
        }
        if self.max_subjects == Some(0) {
            return Err(VocabError::InvalidConfig("max_subjects must be > 0"));
        }
        Ok(())
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self::new()
    }
}
