// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Global constants for the cloud-controller-manager option resolver.
//!
//! This module contains all string and numeric constants used throughout the codebase.
//! Constants are organized by category for easy maintenance.

// ============================================================================
// API Constants
// ============================================================================

/// API group for the `Cluster` resource
pub const API_GROUP: &str = "kops.k8s.io";

/// API version for the `Cluster` resource
pub const API_VERSION: &str = "v1alpha2";

/// Fully qualified API version (group/version)
pub const API_GROUP_VERSION: &str = "kops.k8s.io/v1alpha2";

/// Kind name for `Cluster` resource
pub const KIND_CLUSTER: &str = "Cluster";

// ============================================================================
// Cloud Controller Manager Constants
// ============================================================================

/// Registry hosting the AWS cloud-controller-manager images
pub const AWS_CCM_IMAGE_REGISTRY: &str = "k8s.gcr.io";

/// Repository path of the AWS cloud-controller-manager image within the registry
pub const AWS_CCM_IMAGE_REPOSITORY: &str = "provider-aws/cloud-controller-manager";

/// Tag used for any Kubernetes minor without a dedicated entry.
///
/// There is no `latest` tag upstream, so this is the newest tag that exists.
pub const AWS_CCM_FALLBACK_TAG: &str = "v1.22.0-alpha.0";

/// Image tags published for specific Kubernetes minors, as `(minor, tag)`.
pub const AWS_CCM_IMAGE_TAGS: &[(u64, &str)] = &[
    (18, "v1.18.0-alpha.1"),
    (19, "v1.19.0-alpha.1"),
    (20, "v1.20.0-alpha.0"),
    (21, "v1.21.0-alpha.0"),
];

/// CIDR allocator used when pod addresses come from the cloud (GCE IP aliases)
pub const CIDR_ALLOCATOR_CLOUD: &str = "CloudAllocator";

// ============================================================================
// CLI Constants
// ============================================================================

/// Environment variable holding the path to the cluster manifest
pub const ENV_CLUSTER_FILE: &str = "CCM_OPTIONS_CLUSTER";

/// Environment variable selecting the log output format (`text` or `json`)
pub const ENV_LOG_FORMAT: &str = "RUST_LOG_FORMAT";

/// Default log filter when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "info";
