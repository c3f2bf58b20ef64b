// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Error types for cluster option resolution.
//!
//! Option builders fail closed: any of these errors aborts the enclosing
//! option-resolution pass and is reported to the user as a configuration error.
//! Nothing here is retried.

use thiserror::Error;

/// Errors raised while resolving component options from a cluster specification.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OptionsError {
    /// A `networking` block is present but none of the known backends is populated.
    ///
    /// Every controller-manager flag derived from the networking mode would be
    /// meaningless, so resolution stops here instead of guessing a default.
    #[error("no networking mode set")]
    UnresolvedNetworkingMode,

    /// The cluster's `kubernetesVersion` could not be parsed.
    #[error("unable to parse kubernetes version '{version}': {reason}")]
    InvalidKubernetesVersion {
        /// The version string as written in the cluster spec
        version: String,
        /// Parser error message
        reason: String,
    },

    /// The cluster does not declare a `kubernetesVersion`.
    #[error("cluster '{cluster}' does not specify a kubernetes version")]
    MissingKubernetesVersion {
        /// Name of the offending cluster
        cluster: String,
    },

    /// The cluster resource has no `metadata.name`.
    #[error("cluster resource has no name")]
    MissingClusterName,

    /// A cloud provider identifier outside the supported set.
    #[error("unknown cloud provider '{0}'")]
    UnknownCloudProvider(String),
}
