//! Sieve configuration.
//!
//! The only tunable is the window size. Larger windows mean fewer segments and
//! less per-segment overhead; smaller windows bound peak memory. The returned
//! prime never depends on it.

use std::path::Path;

use fsieve_error::{Result, SieveError};
use serde::{Deserialize, Serialize};

/// Default upper bound on a sieve window, in slots.
pub const DEFAULT_MAX_CHUNK_SIZE: usize = 10_000_000;

/// Largest accepted `max_chunk_size`.
pub const MAX_CHUNK_CEILING: usize = 1 << 31;

/// Engine configuration. Loadable from TOML:
///
/// ```toml
/// max_chunk_size = 1000000
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SieveConfig {
    /// Upper bound on the number of slots in one sieve window.
    pub max_chunk_size: usize,
}

impl Default for SieveConfig {
    fn default() -> Self {
        Self {
            max_chunk_size: DEFAULT_MAX_CHUNK_SIZE,
        }
    }
}

impl SieveConfig {
    /// Return a copy with `max_chunk_size` replaced.
    #[must_use]
    pub const fn with_max_chunk_size(mut self, max_chunk_size: usize) -> Self {
        self.max_chunk_size = max_chunk_size;
        self
    }

    /// Check that every field is in range.
    pub fn validate(&self) -> Result<()> {
        if self.max_chunk_size == 0 {
            return Err(SieveError::invalid_config(
                "max_chunk_size must be at least 1",
            ));
        }
        if self.max_chunk_size > MAX_CHUNK_CEILING {
            return Err(SieveError::invalid_config(format!(
                "max_chunk_size {} exceeds ceiling {MAX_CHUNK_CEILING}",
                self.max_chunk_size
            )));
        }
        Ok(())
    }

    /// Window size actually used when sieving below `limit`.
    #[must_use]
    pub fn chunk_size_for(&self, limit: u64) -> u64 {
        limit.min(self.max_chunk_size as u64)
    }

    /// Parse and validate a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)
            .map_err(|err| SieveError::invalid_config(format!("failed to parse TOML: {err}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML config file.
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|err| {
            SieveError::invalid_config(format!("failed to read {}: {err}", path.display()))
        })?;
        Self::from_toml_str(&text)
    }
}
