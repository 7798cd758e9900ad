//! Printify API version definitions.
//!
//! This module provides the [`ApiVersion`] enum for specifying which version
//! of the Printify API to use.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Printify API version.
///
/// The version is the first path segment of every request
/// (`https://api.printify.com/v1/...`). `Custom` covers versions this crate
/// does not know about yet.
///
/// # Example
///
/// ```rust
/// use printify_api::ApiVersion;
///
/// let version: ApiVersion = "v1".parse().unwrap();
/// assert_eq!(version, ApiVersion::V1);
/// assert_eq!(format!("{}", ApiVersion::V1), "v1");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum ApiVersion {
    /// API version 1.
    #[default]
    V1,
    /// Custom version segment for future or unrecognized versions.
    Custom(String),
}

impl ApiVersion {
    /// Returns the latest known API version.
    #[must_use]
    pub const fn latest() -> Self {
        Self::V1
    }

    /// Returns the path segment for this version.
    #[must_use]
    pub fn as_segment(&self) -> &str {
        match self {
            Self::V1 => "v1",
            Self::Custom(version) => version,
        }
    }

    /// Checks that the version is usable as a single URL path segment.
    ///
    /// `Custom` can be constructed directly, so configuration re-checks it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiVersion`] if the segment is empty,
    /// `.` or `..`, or contains `/`, `?`, `#` or whitespace.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_segment(self.as_segment())
    }
}

fn validate_segment(segment: &str) -> Result<(), ConfigError> {
    if segment.is_empty()
        || segment.contains(['/', '?', '#'])
        || segment.chars().any(char::is_whitespace)
        || segment == "."
        || segment == ".."
    {
        return Err(ConfigError::InvalidApiVersion {
            version: segment.to_string(),
        });
    }
    Ok(())
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_segment())
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        validate_segment(trimmed).map_err(|_| ConfigError::InvalidApiVersion {
            version: s.to_string(),
        })?;

        match trimmed {
            "v1" => Ok(Self::V1),
            other => Ok(Self::Custom(other.to_string())),
        }
    }
}
