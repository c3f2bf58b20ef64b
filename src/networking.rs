// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Pod networking mode of a cluster.
//!
//! The `networking` block of a cluster spec is a set of optional sub-blocks,
//! one per backend. Option builders work on [`NetworkingMode`] instead, a closed
//! sum type in which at most one backend can be active.
//!
//! # Precedence
//!
//! When converting from [`NetworkingSpec`] the first populated sub-block wins,
//! in this order: kubenet, GCE, external, the CNI family, Kopeio. A present
//! block with no populated sub-block does not map to any mode and is rejected
//! with [`OptionsError::UnresolvedNetworkingMode`].

use crate::crd::NetworkingSpec;
use crate::errors::OptionsError;
use std::fmt;

/// Concrete CNI plugins. All share the same controller-manager implications.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CniPlugin {
    /// User-installed CNI plugin
    Generic,
    /// Weave Net
    Weave,
    /// Flannel
    Flannel,
    /// Calico
    Calico,
    /// Canal
    Canal,
    /// kube-router
    KubeRouter,
    /// Romana
    Romana,
    /// Amazon VPC CNI
    AmazonVpc,
    /// Cilium
    Cilium,
    /// Lyft VPC CNI
    LyftVpc,
}

impl CniPlugin {
    /// Field name of the plugin's sub-block in the `networking` block.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Generic => "cni",
            Self::Weave => "weave",
            Self::Flannel => "flannel",
            Self::Calico => "calico",
            Self::Canal => "canal",
            Self::KubeRouter => "kuberouter",
            Self::Romana => "romana",
            Self::AmazonVpc => "amazonvpc",
            Self::Cilium => "cilium",
            Self::LyftVpc => "lyftvpc",
        }
    }
}

/// The active pod networking backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NetworkingMode {
    /// No `networking` block configured
    Unset,
    /// Kubenet
    Kubenet,
    /// Any CNI plugin
    Cni(CniPlugin),
    /// GCE IP-alias networking
    Gce,
    /// Networking managed outside of the provisioner
    External,
    /// Kopeio VXLAN networking
    Kopeio,
}

impl NetworkingMode {
    /// Resolve the networking mode from a cluster's optional `networking` block.
    ///
    /// # Errors
    ///
    /// Returns [`OptionsError::UnresolvedNetworkingMode`] if the block is present
    /// but none of its sub-blocks is populated.
    pub fn from_spec(networking: Option<&NetworkingSpec>) -> Result<Self, OptionsError> {
        let Some(networking) = networking else {
            return Ok(Self::Unset);
        };

        if networking.kubenet.is_some() {
            Ok(Self::Kubenet)
        } else if networking.gce.is_some() {
            Ok(Self::Gce)
        } else if networking.external.is_some() {
            Ok(Self::External)
        } else if let Some(plugin) = cni_plugin(networking) {
            Ok(Self::Cni(plugin))
        } else if networking.kopeio.is_some() {
            Ok(Self::Kopeio)
        } else {
            Err(OptionsError::UnresolvedNetworkingMode)
        }
    }

    /// Whether pods on this backend are wired up through a CNI plugin.
    ///
    /// Every configured backend is CNI-based today; only a cluster without
    /// a networking block is not.
    #[must_use]
    pub const fn uses_cni(self) -> bool {
        !matches!(self, Self::Unset)
    }
}

impl fmt::Display for NetworkingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unset => f.write_str("unset"),
            Self::Kubenet => f.write_str("kubenet"),
            Self::Cni(plugin) => write!(f, "cni ({})", plugin.as_str()),
            Self::Gce => f.write_str("gce"),
            Self::External => f.write_str("external"),
            Self::Kopeio => f.write_str("kopeio"),
        }
    }
}

fn cni_plugin(networking: &NetworkingSpec) -> Option<CniPlugin> {
    [
        (networking.cni.is_some(), CniPlugin::Generic),
        (networking.weave.is_some(), CniPlugin::Weave),
        (networking.flannel.is_some(), CniPlugin::Flannel),
        (networking.calico.is_some(), CniPlugin::Calico),
        (networking.canal.is_some(), CniPlugin::Canal),
        (networking.kube_router.is_some(), CniPlugin::KubeRouter),
        (networking.romana.is_some(), CniPlugin::Romana),
        (networking.amazon_vpc.is_some(), CniPlugin::AmazonVpc),
        (networking.cilium.is_some(), CniPlugin::Cilium),
        (networking.lyft_vpc.is_some(), CniPlugin::LyftVpc),
    ]
    .into_iter()
    .find_map(|(set, plugin)| set.then_some(plugin))
}
