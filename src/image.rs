// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Container image selection for the AWS cloud-controller-manager.
//!
//! Upstream publishes one pre-release image per Kubernetes minor. The table in
//! [`crate::constants::AWS_CCM_IMAGE_TAGS`] lists them; every other minor maps
//! to [`crate::constants::AWS_CCM_FALLBACK_TAG`].

use crate::constants::{
    AWS_CCM_FALLBACK_TAG, AWS_CCM_IMAGE_REGISTRY, AWS_CCM_IMAGE_REPOSITORY, AWS_CCM_IMAGE_TAGS,
};
use crate::version::KubernetesVersion;

/// Image tag published for a given Kubernetes minor.
///
/// # Example
///
/// ```rust
/// use ccm_options::image::image_tag_for_minor;
///
/// assert_eq!(image_tag_for_minor(20), "v1.20.0-alpha.0");
/// assert_eq!(image_tag_for_minor(25), "v1.22.0-alpha.0");
/// ```
#[must_use]
pub fn image_tag_for_minor(minor: u64) -> &'static str {
    AWS_CCM_IMAGE_TAGS
        .iter()
        .find(|(known, _)| *known == minor)
        .map_or(AWS_CCM_FALLBACK_TAG, |&(_, tag)| tag)
}

/// Full image reference for the controller-manager matching `version`.
#[must_use]
pub fn default_image(version: &KubernetesVersion) -> String {
    format!(
        "{AWS_CCM_IMAGE_REGISTRY}/{AWS_CCM_IMAGE_REPOSITORY}:{}",
        image_tag_for_minor(version.minor)
    )
}
