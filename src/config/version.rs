//! monday.com API version definitions.
//!
//! This module provides the [`ApiVersion`] enum for specifying which version
//! of the monday.com API to use via the `API-Version` request header.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// monday.com API version.
///
/// monday.com releases new API versions quarterly (January, April, July,
/// October). This enum provides variants for known stable versions, plus a
/// `Custom` variant for future versions not yet listed here.
///
/// # Example
///
/// ```rust
/// use monday_api::ApiVersion;
///
/// // Use the latest stable version
/// let version = ApiVersion::latest();
/// assert!(version.is_stable());
///
/// // Parse from string
/// let version: ApiVersion = "2025-04".parse().unwrap();
/// assert_eq!(version, ApiVersion::V2025_04);
///
/// // Display as string
/// assert_eq!(format!("{}", ApiVersion::V2025_04), "2025-04");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    /// API version 2024-10 (October 2024)
    V2024_10,
    /// API version 2025-01 (January 2025)
    V2025_01,
    /// API version 2025-04 (April 2025)
    V2025_04,
    /// API version 2025-07 (July 2025)
    V2025_07,
    /// API version 2025-10 (October 2025)
    V2025_10,
    /// Custom version string for future or unrecognized versions.
    Custom(String),
}

impl ApiVersion {
    /// Returns the latest stable API version.
    ///
    /// This should be updated when new stable versions are released.
    #[must_use]
    pub const fn latest() -> Self {
        Self::V2025_10
    }

    /// Returns `true` if this is a known stable API version.
    ///
    /// Returns `false` for the `Custom` variant.
    #[must_use]
    pub const fn is_stable(&self) -> bool {
        !matches!(self, Self::Custom(_))
    }

    /// Returns the version string sent in the `API-Version` header.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::V2024_10 => "2024-10",
            Self::V2025_01 => "2025-01",
            Self::V2025_04 => "2025-04",
            Self::V2025_07 => "2025-07",
            Self::V2025_10 => "2025-10",
            Self::Custom(s) => s,
        }
    }

    /// Returns a numeric ordering value for version comparison.
    const fn ordinal(&self) -> u32 {
        match self {
            Self::V2024_10 => 1,
            Self::V2025_01 => 2,
            Self::V2025_04 => 3,
            Self::V2025_07 => 4,
            Self::V2025_10 => 5,
            // Custom sorts after known versions
            Self::Custom(_) => 100,
        }
    }
}

impl PartialOrd for ApiVersion {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ApiVersion {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match (self, other) {
            // Custom versions compare lexicographically with each other,
            // which matches chronological order for YYYY-MM strings
            (Self::Custom(a), Self::Custom(b)) => a.cmp(b),
            _ => self.ordinal().cmp(&other.ordinal()),
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    /// Parses an API version from a `YYYY-MM` string.
    ///
    /// Known versions parse to their named variants; other well-formed
    /// `YYYY-MM` strings parse to [`ApiVersion::Custom`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiVersion`] if the string is not in
    /// `YYYY-MM` format.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "2024-10" => return Ok(Self::V2024_10),
            "2025-01" => return Ok(Self::V2025_01),
            "2025-04" => return Ok(Self::V2025_04),
            "2025-07" => return Ok(Self::V2025_07),
            "2025-10" => return Ok(Self::V2025_10),
            _ => {}
        }

        let bytes = s.as_bytes();
        let well_formed = bytes.len() == 7
            && bytes[..4].iter().all(u8::is_ascii_digit)
            && bytes[4] == b'-'
            && bytes[5..].iter().all(u8::is_ascii_digit);

        if well_formed {
            Ok(Self::Custom(s.to_string()))
        } else {
            Err(ConfigError::InvalidApiVersion {
                version: s.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_is_stable() {
        assert!(ApiVersion::latest().is_stable());
    }

    #[test]
    fn test_display_format() {
        assert_eq!(ApiVersion::V2024_10.to_string(), "2024-10");
        assert_eq!(ApiVersion::V2025_10.to_string(), "2025-10");
        assert_eq!(
            ApiVersion::Custom("2026-01".to_string()).to_string(),
            "2026-01"
        );
    }

    #[test]
    fn test_parse_known_versions() {
        assert_eq!("2024-10".parse::<ApiVersion>().unwrap(), ApiVersion::V2024_10);
        assert_eq!("2025-10".parse::<ApiVersion>().unwrap(), ApiVersion::V2025_10);
    }

    #[test]
    fn test_parse_future_version_as_custom() {
        let version: ApiVersion = "2026-04".parse().unwrap();
        assert_eq!(version, ApiVersion::Custom("2026-04".to_string()));
        assert!(!version.is_stable());
    }

    #[test]
    fn test_parse_rejects_malformed_versions() {
        for input in ["", "2025", "2025-1", "25-01", "2025/01", "unstable"] {
            assert!(
                matches!(
                    input.parse::<ApiVersion>(),
                    Err(ConfigError::InvalidApiVersion { .. })
                ),
                "expected '{input}' to be rejected"
            );
        }
    }

    #[test]
    fn test_version_ordering() {
        assert!(ApiVersion::V2024_10 < ApiVersion::V2025_01);
        assert!(ApiVersion::V2025_01 < ApiVersion::latest());
        assert!(ApiVersion::latest() < ApiVersion::Custom("2026-01".to_string()));
    }

    #[test]
    fn test_custom_versions_order_chronologically() {
        let older = ApiVersion::Custom("2026-01".to_string());
        let newer = ApiVersion::Custom("2026-04".to_string());
        assert!(older < newer);
    }

    #[test]
    fn test_roundtrip_display_parse() {
        for version in [
            ApiVersion::V2024_10,
            ApiVersion::V2025_04,
            ApiVersion::Custom("2026-07".to_string()),
        ] {
            let parsed: ApiVersion = version.to_string().parse().unwrap();
            assert_eq!(parsed, version);
        }
    }
}
