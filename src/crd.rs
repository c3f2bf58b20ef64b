// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Custom Resource Definition for the cluster specification.
//!
//! Only the parts of the `Cluster` resource that component option builders
//! read or refine are modelled here. Unknown fields are ignored on input.
//!
//! # Example: Declaring a cluster
//!
//! ```rust,no_run
//! use ccm_options::crd::{CloudControllerManagerConfig, ClusterSpec, NetworkingSpec, NetworkingPluginSpec};
//!
//! let spec = ClusterSpec {
//!     kubernetes_version: Some("1.21.2".to_string()),
//!     non_masquerade_cidr: "100.64.0.0/10".to_string(),
//!     networking: Some(NetworkingSpec {
//!         calico: Some(NetworkingPluginSpec::default()),
//!         ..Default::default()
//!     }),
//!     external_cloud_controller_manager: Some(CloudControllerManagerConfig {
//!         cloud_provider: "aws".to_string(),
//!         ..Default::default()
//!     }),
//!     ..Default::default()
//! };
//! ```

use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// `Cluster` describes the desired state of a provisioned Kubernetes cluster.
///
/// # Example
///
/// ```yaml
/// apiVersion: kops.k8s.io/v1alpha2
/// kind: Cluster
/// metadata:
///   name: prod.example.com
/// spec:
///   kubernetesVersion: 1.21.2
///   nonMasqueradeCIDR: 100.64.0.0/10
///   networking:
///     kubenet: {}
///   externalCloudControllerManager:
///     cloudProvider: aws
/// ```
#[derive(CustomResource, Clone, Debug, Default, Serialize, Deserialize, JsonSchema)]
#[kube(
    group = "kops.k8s.io",
    version = "v1alpha2",
    kind = "Cluster",
    doc = "Cluster describes a Kubernetes cluster to be provisioned: its control-plane version, pod networking and cloud integration."
)]
#[serde(rename_all = "camelCase")]
pub struct ClusterSpec {
    /// Target Kubernetes version (e.g. `1.21.2` or `v1.21.2`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kubernetes_version: Option<String>,

    /// CIDR covering all pod and service addresses that must not be masqueraded.
    #[serde(default, rename = "nonMasqueradeCIDR", skip_serializing_if = "String::is_empty")]
    pub non_masquerade_cidr: String,

    /// CIDR from which pod addresses are allocated.
    #[serde(default, rename = "podCIDR", skip_serializing_if = "String::is_empty")]
    pub pod_cidr: String,

    /// Pod networking backend. Absent means no backend was configured.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub networking: Option<NetworkingSpec>,

    /// External cloud-controller-manager settings. Absent disables it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_cloud_controller_manager: Option<CloudControllerManagerConfig>,
}

/// Pod networking backend selection.
///
/// Exactly one sub-block is expected to be set. Each sub-block marks its backend
/// as active; backend-specific settings inside it are preserved by the API
/// server but not interpreted here.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct NetworkingSpec {
    /// Kubenet: node-local bridge with cloud routes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kubenet: Option<NetworkingPluginSpec>,

    /// GCE IP-alias networking
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gce: Option<NetworkingPluginSpec>,

    /// Networking managed outside of the provisioner
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external: Option<NetworkingPluginSpec>,

    /// Generic CNI plugin installed by the user
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cni: Option<NetworkingPluginSpec>,

    /// Weave Net
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weave: Option<NetworkingPluginSpec>,

    /// Flannel
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flannel: Option<NetworkingPluginSpec>,

    /// Calico
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calico: Option<NetworkingPluginSpec>,

    /// Canal (Flannel + Calico policy)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canal: Option<NetworkingPluginSpec>,

    /// kube-router
    #[serde(default, rename = "kuberouter", skip_serializing_if = "Option::is_none")]
    pub kube_router: Option<NetworkingPluginSpec>,

    /// Romana
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub romana: Option<NetworkingPluginSpec>,

    /// Amazon VPC CNI
    #[serde(default, rename = "amazonvpc", skip_serializing_if = "Option::is_none")]
    pub amazon_vpc: Option<NetworkingPluginSpec>,

    /// Cilium
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cilium: Option<NetworkingPluginSpec>,

    /// Lyft VPC CNI
    #[serde(default, rename = "lyftvpc", skip_serializing_if = "Option::is_none")]
    pub lyft_vpc: Option<NetworkingPluginSpec>,

    /// Kopeio VXLAN networking
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kopeio: Option<NetworkingPluginSpec>,
}

/// Presence marker for a networking backend.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[schemars(extend("x-kubernetes-preserve-unknown-fields" = true))]
pub struct NetworkingPluginSpec {}

/// Configuration of the external cloud-controller-manager.
///
/// Created by the user (possibly with overrides) and refined in place by the
/// option builder for its cloud provider. Fields already set by the user take
/// precedence where noted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CloudControllerManagerConfig {
    /// Cloud provider this controller-manager integrates with (e.g. `aws`).
    #[serde(default)]
    pub cloud_provider: String,

    /// Name of the cluster, used to tag cloud resources.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub cluster_name: String,

    /// Pod CIDR used when programming cloud routes.
    #[serde(default, rename = "clusterCIDR", skip_serializing_if = "String::is_empty")]
    pub cluster_cidr: String,

    /// Whether node pod CIDRs are allocated by the controller-manager.
    #[serde(default, rename = "allocateNodeCIDRs", skip_serializing_if = "Option::is_none")]
    pub allocate_node_cidrs: Option<bool>,

    /// Whether the controller-manager programs cloud routes for pod CIDRs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configure_cloud_routes: Option<bool>,

    /// CIDR allocator strategy (e.g. `CloudAllocator`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cidr_allocator_type: Option<String>,

    /// Container image reference. A non-empty value set by the user is never replaced.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Address of the Kubernetes API server, if not discovered in-cluster.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub master: Option<String>,

    /// Log verbosity of the controller-manager process.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<i32>,

    /// Whether each controller uses its own service account credentials.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_service_account_credentials: Option<bool>,

    /// Leader election settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leader_election: Option<LeaderElectionConfiguration>,
}

impl CloudControllerManagerConfig {
    /// Whether the user has supplied an explicit image.
    #[must_use]
    pub fn has_image(&self) -> bool {
        self.image.as_deref().is_some_and(|image| !image.is_empty())
    }
}

/// Leader election settings for a control-plane component.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeaderElectionConfiguration {
    /// Whether to run leader election before executing the main loop.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leader_elect: Option<bool>,
}
