// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Integration tests for the `ccm-options` binary.
//!
//! Each test writes a `Cluster` manifest to a temporary file, runs the binary
//! against it and checks the resolved configuration printed on stdout.

use ccm_options::crd::CloudControllerManagerConfig;
use std::io::Write;
use std::process::{Command, Output};
use tempfile::NamedTempFile;

// ============================================================================
// Helper Functions
// ============================================================================

/// Write `manifest` to a temp file and run the binary on it with `extra_args`.
fn run_with_manifest(manifest: &str, extra_args: &[&str]) -> Output {
    let mut file = NamedTempFile::new().expect("create temp manifest");
    file.write_all(manifest.as_bytes()).expect("write temp manifest");

    Command::new(env!("CARGO_BIN_EXE_ccm-options"))
        .arg("--cluster")
        .arg(file.path())
        .args(extra_args)
        .env("RUST_LOG", "warn")
        .output()
        .expect("run ccm-options")
}

fn parse_yaml_output(output: &Output) -> CloudControllerManagerConfig {
    assert!(
        output.status.success(),
        "ccm-options failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_yaml::from_slice(&output.stdout).expect("parse resolved configuration")
}

fn manifest(version: &str, networking: &str, eccm: &str) -> String {
    format!(
        "apiVersion: kops.k8s.io/v1alpha2
kind: Cluster
metadata:
  name: prod.example.com
spec:
  kubernetesVersion: {version}
  nonMasqueradeCIDR: 100.64.0.0/10
  podCIDR: 100.96.0.0/11
{networking}{eccm}"
    )
}

const AWS_ECCM: &str = "  externalCloudControllerManager:\n    cloudProvider: aws\n";

// ============================================================================
// Tests
// ============================================================================

#[test]
fn test_kubenet_cluster_resolves() {
    let output = run_with_manifest(
        &manifest("1.20.5", "  networking:\n    kubenet: {}\n", AWS_ECCM),
        &[],
    );
    let eccm = parse_yaml_output(&output);

    assert_eq!(eccm.cluster_name, "prod.example.com");
    assert_eq!(eccm.cluster_cidr, "100.64.0.0/10");
    assert_eq!(eccm.allocate_node_cidrs, Some(true));
    assert_eq!(eccm.configure_cloud_routes, Some(true));
    assert_eq!(
        eccm.image.as_deref(),
        Some("k8s.gcr.io/provider-aws/cloud-controller-manager:v1.20.0-alpha.0")
    );
}

#[test]
fn test_gce_cluster_resolves_as_json() {
    let output = run_with_manifest(
        &manifest("v1.25.0", "  networking:\n    gce: {}\n", AWS_ECCM),
        &["--output", "json"],
    );
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["cidrAllocatorType"], "CloudAllocator");
    assert_eq!(value["configureCloudRoutes"], false);
    assert_eq!(
        value["image"],
        "k8s.gcr.io/provider-aws/cloud-controller-manager:v1.22.0-alpha.0"
    );
}

#[test]
fn test_overrides_take_effect() {
    let output = run_with_manifest(
        &manifest("1.21.0", "  networking:\n    cilium: {}\n", AWS_ECCM),
        &[
            "--cluster-name",
            "staging.example.com",
            "--kubernetes-version",
            "1.18",
        ],
    );
    let eccm = parse_yaml_output(&output);

    assert_eq!(eccm.cluster_name, "staging.example.com");
    assert_eq!(eccm.configure_cloud_routes, Some(false));
    assert_eq!(
        eccm.image.as_deref(),
        Some("k8s.gcr.io/provider-aws/cloud-controller-manager:v1.18.0-alpha.1")
    );
}

#[test]
fn test_other_provider_is_printed_unchanged() {
    let output = run_with_manifest(
        &manifest(
            "1.21.0",
            "  networking: {}\n",
            "  externalCloudControllerManager:\n    cloudProvider: gce\n",
        ),
        &[],
    );
    let eccm = parse_yaml_output(&output);

    assert_eq!(eccm.cloud_provider, "gce");
    assert!(eccm.cluster_name.is_empty());
    assert_eq!(eccm.image, None);
}

#[test]
fn test_missing_external_ccm_prints_nothing() {
    let output = run_with_manifest(&manifest("1.21.0", "", ""), &[]);

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_missing_external_ccm_does_not_require_version() {
    let output = run_with_manifest(
        "apiVersion: kops.k8s.io/v1alpha2
kind: Cluster
metadata:
  name: prod.example.com
spec:
  nonMasqueradeCIDR: 100.64.0.0/10
",
        &[],
    );

    assert!(
        output.status.success(),
        "ccm-options failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(output.stdout.is_empty());
}

#[test]
fn test_empty_networking_block_fails() {
    let output = run_with_manifest(&manifest("1.21.0", "  networking: {}\n", AWS_ECCM), &[]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("no networking mode set"));
}

#[test]
fn test_invalid_version_fails() {
    let output = run_with_manifest(&manifest("latest", "", AWS_ECCM), &[]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr)
        .contains("unable to parse kubernetes version"));
}
