// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! # ccm-options - cloud-controller-manager option resolution
//!
//! Derives the runtime configuration of the AWS external cloud-controller-manager
//! from a declarative `Cluster` specification. This is one step of a larger
//! option-resolution pass during cluster provisioning.
//!
//! ## Modules
//!
//! - [`crd`] - The `Cluster` custom resource and the fields option builders read
//! - [`networking`] - Networking mode derived from the `networking` block
//! - [`version`] - Kubernetes `(major, minor)` version parsing
//! - [`image`] - Controller-manager image selection per Kubernetes minor
//! - [`cloud_provider`] - Cloud provider identifiers
//! - [`options`] - Option builders, including the AWS cloud-controller-manager
//! - [`errors`] - Option resolution errors
//!
//! ## Example
//!
//! ```rust
//! use ccm_options::crd::{CloudControllerManagerConfig, ClusterSpec};
//! use ccm_options::options::{aws_ccm::build_aws_ccm_options, OptionsContext};
//! use ccm_options::version::KubernetesVersion;
//!
//! let mut spec = ClusterSpec {
//!     non_masquerade_cidr: "100.64.0.0/10".to_string(),
//!     external_cloud_controller_manager: Some(CloudControllerManagerConfig {
//!         cloud_provider: "aws".to_string(),
//!         ..Default::default()
//!     }),
//!     ..Default::default()
//! };
//!
//! let context = OptionsContext::new("prod.example.com", KubernetesVersion::new(1, 21));
//! build_aws_ccm_options(&mut spec, &context).unwrap();
//!
//! let eccm = spec.external_cloud_controller_manager.unwrap();
//! assert_eq!(eccm.configure_cloud_routes, Some(true));
//! assert_eq!(
//!     eccm.image.as_deref(),
//!     Some("k8s.gcr.io/provider-aws/cloud-controller-manager:v1.21.0-alpha.0")
//! );
//! ```

pub mod cloud_provider;
pub mod constants;
pub mod crd;
pub mod errors;
pub mod image;
pub mod networking;
pub mod options;
pub mod version;
