// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for the options context and builder sequencing.

#[cfg(test)]
mod tests {
    use super::super::{build_cluster_options, OptionsBuilder, OptionsContext};
    use crate::crd::{CloudControllerManagerConfig, Cluster, ClusterSpec, NetworkingSpec};
    use crate::errors::OptionsError;
    use crate::options::aws_ccm::AwsCloudControllerManagerOptionsBuilder;
    use crate::version::KubernetesVersion;
    use std::cell::Cell;

    fn create_test_cluster(name: &str, version: Option<&str>) -> Cluster {
        Cluster::new(
            name,
            ClusterSpec {
                kubernetes_version: version.map(str::to_string),
                non_masquerade_cidr: "100.64.0.0/10".to_string(),
                external_cloud_controller_manager: Some(CloudControllerManagerConfig {
                    cloud_provider: "aws".to_string(),
                    ..Default::default()
                }),
                ..Default::default()
            },
        )
    }

    /// Counts invocations so sequencing can be asserted.
    struct CountingBuilder {
        calls: Cell<usize>,
    }

    impl OptionsBuilder for CountingBuilder {
        fn build_options(&self, _spec: &mut ClusterSpec) -> Result<(), OptionsError> {
            self.calls.set(self.calls.get() + 1);
            Ok(())
        }
    }

    #[test]
    fn test_context_from_cluster() {
        let cluster = create_test_cluster("prod.example.com", Some("v1.20.4"));

        let context = OptionsContext::from_cluster(&cluster).unwrap();
        assert_eq!(
            context,
            OptionsContext::new("prod.example.com", KubernetesVersion::new(1, 20))
        );
    }

    #[test]
    fn test_context_requires_version() {
        let cluster = create_test_cluster("prod.example.com", None);

        assert_eq!(
            OptionsContext::from_cluster(&cluster),
            Err(OptionsError::MissingKubernetesVersion {
                cluster: "prod.example.com".to_string()
            })
        );
    }

    #[test]
    fn test_context_requires_name() {
        let mut cluster = create_test_cluster("prod.example.com", Some("1.21"));
        cluster.metadata.name = None;

        assert_eq!(
            OptionsContext::from_cluster(&cluster),
            Err(OptionsError::MissingClusterName)
        );
    }

    #[test]
    fn test_context_rejects_bad_version() {
        let cluster = create_test_cluster("prod.example.com", Some("stable"));

        assert!(matches!(
            OptionsContext::from_cluster(&cluster),
            Err(OptionsError::InvalidKubernetesVersion { .. })
        ));
    }

    #[test]
    fn test_build_cluster_options_runs_all_builders() {
        let mut cluster = create_test_cluster("prod.example.com", Some("1.21.1"));
        let context = OptionsContext::from_cluster(&cluster).unwrap();
        let aws_ccm = AwsCloudControllerManagerOptionsBuilder::new(context);
        let counter = CountingBuilder {
            calls: Cell::new(0),
        };

        build_cluster_options(&mut cluster, &[&aws_ccm as &dyn OptionsBuilder, &counter])
            .unwrap();

        assert_eq!(counter.calls.get(), 1);
        let eccm = cluster.spec.external_cloud_controller_manager.unwrap();
        assert_eq!(eccm.cluster_name, "prod.example.com");
        assert_eq!(
            eccm.image.as_deref(),
            Some("k8s.gcr.io/provider-aws/cloud-controller-manager:v1.21.0-alpha.0")
        );
    }

    #[test]
    fn test_build_cluster_options_stops_at_first_error() {
        let mut cluster = create_test_cluster("prod.example.com", Some("1.21.1"));
        cluster.spec.networking = Some(NetworkingSpec::default());
        let context = OptionsContext::from_cluster(&cluster).unwrap();
        let aws_ccm = AwsCloudControllerManagerOptionsBuilder::new(context);
        let counter = CountingBuilder {
            calls: Cell::new(0),
        };

        let result =
            build_cluster_options(&mut cluster, &[&aws_ccm as &dyn OptionsBuilder, &counter]);

        assert_eq!(result, Err(OptionsError::UnresolvedNetworkingMode));
        assert_eq!(counter.calls.get(), 0);
    }
}
