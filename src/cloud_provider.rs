// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Cloud provider identifiers.
//!
//! The cluster spec stores the provider of the external cloud-controller-manager
//! as a free-form string. Option builders parse it into [`CloudProviderId`] to
//! decide whether they govern that controller-manager.

use crate::errors::OptionsError;
use std::fmt;
use std::str::FromStr;

/// Cloud providers a cluster can be provisioned on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CloudProviderId {
    /// Amazon Web Services
    Aws,
    /// Google Compute Engine
    Gce,
    /// `DigitalOcean`
    DigitalOcean,
    /// `OpenStack`
    OpenStack,
    /// Microsoft Azure
    Azure,
    /// Alibaba Cloud
    Alicloud,
}

impl CloudProviderId {
    /// Wire identifier as it appears in `cloudProvider` fields.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Aws => "aws",
            Self::Gce => "gce",
            Self::DigitalOcean => "digitalocean",
            Self::OpenStack => "openstack",
            Self::Azure => "azure",
            Self::Alicloud => "alicloud",
        }
    }
}

impl fmt::Display for CloudProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CloudProviderId {
    type Err = OptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "aws" => Ok(Self::Aws),
            "gce" => Ok(Self::Gce),
            "digitalocean" => Ok(Self::DigitalOcean),
            "openstack" => Ok(Self::OpenStack),
            "azure" => Ok(Self::Azure),
            "alicloud" => Ok(Self::Alicloud),
            other => Err(OptionsError::UnknownCloudProvider(other.to_string())),
        }
    }
}
