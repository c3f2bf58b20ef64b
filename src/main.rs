// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

use anyhow::{Context, Result};
use ccm_options::{
    constants::{DEFAULT_LOG_FILTER, ENV_CLUSTER_FILE, ENV_LOG_FORMAT},
    crd::Cluster,
    options::{
        aws_ccm::AwsCloudControllerManagerOptionsBuilder, build_cluster_options, OptionsBuilder,
        OptionsContext,
    },
};
use clap::{Parser, ValueEnum};
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Resolve the AWS external cloud-controller-manager options of a cluster.
#[derive(Debug, Parser)]
#[command(name = "ccm-options", version, about)]
struct Args {
    /// Path to the `Cluster` manifest (YAML or JSON)
    #[arg(long, env = ENV_CLUSTER_FILE)]
    cluster: PathBuf,

    /// Override the cluster name from `metadata.name`
    #[arg(long)]
    cluster_name: Option<String>,

    /// Override `spec.kubernetesVersion`
    #[arg(long)]
    kubernetes_version: Option<String>,

    /// Output format of the resolved configuration
    #[arg(long, value_enum, default_value_t = OutputFormat::Yaml)]
    output: OutputFormat,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Yaml,
    Json,
}

fn main() -> Result<()> {
    init_logging();

    let args = Args::parse();
    debug!("Arguments: {:?}", args);

    let raw = fs::read_to_string(&args.cluster)
        .with_context(|| format!("failed to read cluster manifest {}", args.cluster.display()))?;
    let mut cluster: Cluster = serde_yaml::from_str(&raw)
        .with_context(|| format!("failed to parse cluster manifest {}", args.cluster.display()))?;

    if let Some(name) = args.cluster_name {
        cluster.metadata.name = Some(name);
    }
    if let Some(version) = args.kubernetes_version {
        cluster.spec.kubernetes_version = Some(version);
    }

    if cluster.spec.external_cloud_controller_manager.is_none() {
        warn!("Cluster has no externalCloudControllerManager block, nothing to resolve");
        return Ok(());
    }

    let context = OptionsContext::from_cluster(&cluster)?;
    info!(
        "Resolving options for cluster {} (kubernetes {})",
        context.cluster_name, context.kubernetes_version
    );

    let aws_ccm = AwsCloudControllerManagerOptionsBuilder::new(context);
    let builders: [&dyn OptionsBuilder; 1] = [&aws_ccm];
    build_cluster_options(&mut cluster, &builders)
        .context("failed to build cloud-controller-manager options")?;

    let Some(eccm) = cluster.spec.external_cloud_controller_manager else {
        anyhow::bail!("externalCloudControllerManager block was removed during option building");
    };

    let rendered = match args.output {
        OutputFormat::Yaml => serde_yaml::to_string(&eccm)?,
        OutputFormat::Json => serde_json::to_string_pretty(&eccm)? + "\n",
    };
    print!("{rendered}");

    Ok(())
}

/// Initialize logging on stderr so stdout only carries the resolved configuration.
///
/// Respects `RUST_LOG` (default `info`) and `RUST_LOG_FORMAT` (`text` or `json`).
fn init_logging() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER));

    let log_format = std::env::var(ENV_LOG_FORMAT).unwrap_or_else(|_| "text".to_string());

    match log_format.to_lowercase().as_str() {
        "json" => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .with_file(true)
                .with_line_number(true)
                .with_target(false)
                .json()
                .init();
        }
        _ => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .with_file(true)
                .with_line_number(true)
                .with_target(false)
                .with_ansi(false)
                .compact()
                .init();
        }
    }
}
