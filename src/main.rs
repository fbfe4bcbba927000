// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{bail, Result};
use tracing::info;

use vigil::config::Config;
use vigil::rancher::{await_activation, await_removal, await_settled, HttpNamespaceClient};
use vigil::types::NamespaceHandle;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let mut args = std::env::args().skip(1);
    let (Some(cluster_id), Some(namespace_id), Some(phase)) =
        (args.next(), args.next(), args.next())
    else {
        bail!("usage: vigil <cluster-id> <namespace-id> <activation|settle|removal>");
    };

    // Load configuration
    let config = Config::from_env()?;
    info!("Watching namespaces on Rancher at {}", config.api_url);

    let client = HttpNamespaceClient::new(&config, &cluster_id)?;
    let handle = NamespaceHandle::new(cluster_id, namespace_id);

    let observed = match phase.as_str() {
        "activation" => await_activation(&client, &handle).await?,
        "settle" => await_settled(&client, &handle).await?,
        "removal" => await_removal(&client, &handle).await?,
        other => bail!("unknown phase \"{}\", expected activation, settle or removal", other),
    };

    info!("Namespace {} converged: {:?}", handle, observed);
    Ok(())
}
