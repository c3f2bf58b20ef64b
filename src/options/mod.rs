// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Option builders for cluster components.
//!
//! An option builder refines one component's configuration inside a
//! [`ClusterSpec`] from the rest of the spec. Builders run as a sequence over
//! the same spec during a single option-resolution pass; the first error aborts
//! the pass.
//!
//! ## Builders
//!
//! - [`aws_ccm`] - AWS external cloud-controller-manager
//!
//! # Example
//!
//! ```rust,no_run
//! use ccm_options::crd::Cluster;
//! use ccm_options::options::{
//!     aws_ccm::AwsCloudControllerManagerOptionsBuilder, build_cluster_options, OptionsBuilder,
//!     OptionsContext,
//! };
//!
//! # fn example(mut cluster: Cluster) -> Result<(), ccm_options::errors::OptionsError> {
//! let context = OptionsContext::from_cluster(&cluster)?;
//! let aws_ccm = AwsCloudControllerManagerOptionsBuilder::new(context);
//!
//! build_cluster_options(&mut cluster, &[&aws_ccm as &dyn OptionsBuilder])?;
//! # Ok(())
//! # }
//! ```

pub mod aws_ccm;


use crate::crd::{Cluster, ClusterSpec};
use crate::errors::OptionsError;
use crate::version::KubernetesVersion;
use kube::ResourceExt;
use tracing::debug;

/// Cluster-wide facts shared by all option builders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionsContext {
    /// Name of the cluster being provisioned
    pub cluster_name: String,
    /// Target control-plane version
    pub kubernetes_version: KubernetesVersion,
}

impl OptionsContext {
    /// Create a context from explicit values.
    #[must_use]
    pub fn new(cluster_name: impl Into<String>, kubernetes_version: KubernetesVersion) -> Self {
        Self {
            cluster_name: cluster_name.into(),
            kubernetes_version,
        }
    }

    /// Derive the context from a `Cluster` resource.
    ///
    /// The cluster name comes from `metadata.name` and the version from
    /// `spec.kubernetesVersion`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The resource has no name
    /// - The spec has no `kubernetesVersion`
    /// - The version cannot be parsed
    pub fn from_cluster(cluster: &Cluster) -> Result<Self, OptionsError> {
        let cluster_name = cluster
            .metadata
            .name
            .clone()
            .ok_or(OptionsError::MissingClusterName)?;

        let version = cluster.spec.kubernetes_version.as_deref().ok_or_else(|| {
            OptionsError::MissingKubernetesVersion {
                cluster: cluster_name.clone(),
            }
        })?;

        let kubernetes_version = KubernetesVersion::parse(version)?;
        debug!(
            "Options context for cluster {}: kubernetes {}",
            cluster_name, kubernetes_version
        );

        Ok(Self::new(cluster_name, kubernetes_version))
    }
}

/// A single step of the option-resolution pass.
pub trait OptionsBuilder {
    /// Refine the component configuration this builder governs, in place.
    ///
    /// # Errors
    ///
    /// Returns an error if the spec leaves the component's configuration
    /// undecidable. The caller must abort the pass.
    fn build_options(&self, spec: &mut ClusterSpec) -> Result<(), OptionsError>;
}

/// Run `builders` in order over the cluster's spec.
///
/// # Errors
///
/// Returns the first builder error; later builders do not run.
pub fn build_cluster_options(
    cluster: &mut Cluster,
    builders: &[&dyn OptionsBuilder],
) -> Result<(), OptionsError> {
    debug!(
        "Building options for cluster {} with {} builder(s)",
        cluster.name_any(),
        builders.len()
    );

    for builder in builders {
        builder.build_options(&mut cluster.spec)?;
    }

    Ok(())
}

#[cfg(test)]
mod mod_tests;
