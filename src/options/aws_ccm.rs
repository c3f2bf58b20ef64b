// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Options for the AWS external cloud-controller-manager.
//!
//! Derives node-CIDR allocation, cloud-route management, the CIDR allocator
//! strategy and the container image from the cluster's networking mode and
//! Kubernetes version.
//!
//! | Networking mode | `configureCloudRoutes` | `cidrAllocatorType` |
//! |-----------------|------------------------|---------------------|
//! | unset, kubenet  | `true`                 | -                   |
//! | GCE             | `false`                | `CloudAllocator`    |
//! | external, CNI, Kopeio | `false`          | -                   |

use super::{OptionsBuilder, OptionsContext};
use crate::cloud_provider::CloudProviderId;
use crate::constants::CIDR_ALLOCATOR_CLOUD;
use crate::crd::ClusterSpec;
use crate::errors::OptionsError;
use crate::image::default_image;
use crate::networking::NetworkingMode;
use tracing::{debug, info};

/// Option builder for the AWS external cloud-controller-manager.
#[derive(Clone, Debug)]
pub struct AwsCloudControllerManagerOptionsBuilder {
    context: OptionsContext,
}

impl AwsCloudControllerManagerOptionsBuilder {
    /// Create a builder for the cluster described by `context`.
    #[must_use]
    pub fn new(context: OptionsContext) -> Self {
        Self { context }
    }
}

impl OptionsBuilder for AwsCloudControllerManagerOptionsBuilder {
    fn build_options(&self, spec: &mut ClusterSpec) -> Result<(), OptionsError> {
        build_aws_ccm_options(spec, &self.context)
    }
}

/// Refine `spec.externalCloudControllerManager` for AWS, in place.
///
/// Does nothing when the external cloud-controller-manager is absent or
/// configured for another provider. A user-supplied non-empty image is kept.
///
/// # Arguments
///
/// * `spec` - Cluster spec holding the controller-manager config to refine
/// * `context` - Cluster name and Kubernetes version
///
/// # Errors
///
/// Returns [`OptionsError::UnresolvedNetworkingMode`] if a `networking` block is
/// present without any backend. The cluster name, CIDR and node-CIDR allocation
/// have already been written at that point.
pub fn build_aws_ccm_options(
    spec: &mut ClusterSpec,
    context: &OptionsContext,
) -> Result<(), OptionsError> {
    let Some(eccm) = spec.external_cloud_controller_manager.as_mut() else {
        debug!("No external cloud-controller-manager configured, skipping AWS options");
        return Ok(());
    };

    if eccm.cloud_provider.parse::<CloudProviderId>().ok() != Some(CloudProviderId::Aws) {
        debug!(
            "External cloud-controller-manager is for provider '{}', skipping AWS options",
            eccm.cloud_provider
        );
        return Ok(());
    }

    eccm.cluster_name.clone_from(&context.cluster_name);
    eccm.cluster_cidr.clone_from(&spec.non_masquerade_cidr);
    eccm.allocate_node_cidrs = Some(true);
    eccm.configure_cloud_routes = Some(false);

    let mode = NetworkingMode::from_spec(spec.networking.as_ref())?;
    let configure_cloud_routes = match mode {
        NetworkingMode::Unset | NetworkingMode::Kubenet => true,
        NetworkingMode::Gce => {
            eccm.cidr_allocator_type = Some(CIDR_ALLOCATOR_CLOUD.to_string());
            if eccm.cluster_cidr.is_empty() {
                eccm.cluster_cidr.clone_from(&spec.pod_cidr);
            }
            false
        }
        // Kopeio is based on kubenet / external
        NetworkingMode::External | NetworkingMode::Cni(_) | NetworkingMode::Kopeio => false,
    };
    eccm.configure_cloud_routes = Some(configure_cloud_routes);
    debug!(
        "Networking mode {} (cni: {}): configureCloudRoutes={}",
        mode,
        mode.uses_cni(),
        configure_cloud_routes
    );

    if eccm.has_image() {
        debug!("Keeping user-supplied cloud-controller-manager image");
    } else {
        eccm.image = Some(default_image(&context.kubernetes_version));
    }

    info!(
        "Resolved AWS cloud-controller-manager options for cluster {} (kubernetes {}, networking {})",
        context.cluster_name, context.kubernetes_version, mode
    );

    Ok(())
}
