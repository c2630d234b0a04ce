//! Segmenter configuration

use crate::adapter::{Encoding, MalformedPolicy};
use crate::error::{Result, SegmentError};
use serde::{Deserialize, Serialize};

/// Segmenter configuration
///
/// Can be built fluently with [`SegmenterConfig::builder`] or loaded from
/// TOML:
///
/// ```toml
/// encoding = "utf-16le"
/// malformed = "replace"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SegmenterConfig {
    /// Encoding assumed for raw byte input when the caller does not declare one
    pub encoding: Encoding,
    /// Handling of malformed code unit sequences
    pub malformed: MalformedPolicy,
}

impl SegmenterConfig {
    /// Create a configuration builder
    pub fn builder() -> SegmenterConfigBuilder {
        SegmenterConfigBuilder::default()
    }

    /// Parse a configuration from TOML text
    ///
    /// # Errors
    ///
    /// Returns [`SegmentError::InvalidConfig`] for malformed TOML, unknown
    /// keys or unknown values.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: SegmenterConfig = toml::from_str(text)?;
        Ok(config)
    }
}

/// Fluent builder for [`SegmenterConfig`]
#[derive(Debug, Default)]
pub struct SegmenterConfigBuilder {
    encoding: Option<String>,
    malformed: Option<MalformedPolicy>,
}

impl SegmenterConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default encoding by label
    pub fn encoding(mut self, label: impl Into<String>) -> Self {
        self.encoding = Some(label.into());
        self
    }

    /// Set the malformed input policy
    pub fn malformed(mut self, policy: MalformedPolicy) -> Self {
        self.malformed = Some(policy);
        self
    }

    /// Replace malformed sequences instead of rejecting them
    pub fn lossy(self) -> Self {
        self.malformed(MalformedPolicy::Replace)
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns [`SegmentError::InvalidConfig`] for an unknown encoding label.
    pub fn build(self) -> Result<SegmenterConfig> {
        let mut config = SegmenterConfig::default();

        if let Some(label) = self.encoding {
            config.encoding = label.parse().map_err(|_| {
                SegmentError::InvalidConfig(format!("unsupported encoding '{label}'"))
            })?;
        }

        if let Some(policy) = self.malformed {
            config.malformed = policy;
        }

        Ok(config)
    }
}
