// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Kubernetes control-plane version handling.
//!
//! Cluster specs write versions loosely (`1.21`, `v1.21.3`, `1.22.0-alpha.1`,
//! `1.21.x`). Option builders only care about the `(major, minor)` pair: a
//! string that is not strict semver is accepted as long as it starts with a
//! numeric major and a minor beginning with digits (`1.21+build`, `1.21.3.4`).

use crate::errors::OptionsError;
use std::fmt;
use std::str::FromStr;

/// Target control-plane version as a `(major, minor)` pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct KubernetesVersion {
    /// Major version (always `1` in practice)
    pub major: u64,
    /// Minor version, the only component option builders consult
    pub minor: u64,
}

impl KubernetesVersion {
    /// Construct a version from its components.
    #[must_use]
    pub const fn new(major: u64, minor: u64) -> Self {
        Self { major, minor }
    }

    /// Parse a version string as written in a cluster spec.
    ///
    /// Strict semantic versions (with an optional leading `v`) are parsed with
    /// `semver`. Anything else falls back to the leading `major.minor` pair,
    /// ignoring whatever follows the digits of the minor component.
    ///
    /// # Errors
    ///
    /// Returns [`OptionsError::InvalidKubernetesVersion`] if no `major.minor`
    /// prefix can be read from the string.
    pub fn parse(version: &str) -> Result<Self, OptionsError> {
        let trimmed = version.trim();
        let bare = trimmed.strip_prefix('v').unwrap_or(trimmed);

        match semver::Version::parse(bare) {
            Ok(parsed) => Ok(Self::from(&parsed)),
            Err(e) => Self::parse_major_minor(bare).ok_or_else(|| {
                OptionsError::InvalidKubernetesVersion {
                    version: version.to_string(),
                    reason: e.to_string(),
                }
            }),
        }
    }

    fn parse_major_minor(version: &str) -> Option<Self> {
        let mut components = version.splitn(3, '.');
        let major = components.next()?.parse().ok()?;

        let minor_component = components.next()?;
        let digits = minor_component
            .find(|c: char| !c.is_ascii_digit())
            .map_or(minor_component, |end| &minor_component[..end]);
        let minor = digits.parse().ok()?;

        Some(Self::new(major, minor))
    }
}

impl From<&semver::Version> for KubernetesVersion {
    fn from(version: &semver::Version) -> Self {
        Self::new(version.major, version.minor)
    }
}

impl FromStr for KubernetesVersion {
    type Err = OptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for KubernetesVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}
