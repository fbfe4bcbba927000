// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use std::env;
use url::Url;

/// Client configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the Rancher API server
    pub api_url: Url,
    /// Bearer token used to authenticate API calls
    pub token: String,
    /// Accept self-signed certificates from the API server
    pub insecure: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let api_url = env::var("RANCHER_URL")
            .context("RANCHER_URL environment variable not set")?;
        let api_url = Url::parse(&api_url).context("RANCHER_URL is not a valid URL")?;
        let token = env::var("RANCHER_TOKEN")
            .context("RANCHER_TOKEN environment variable not set")?;
        let insecure: bool = env::var("RANCHER_INSECURE")
            .unwrap_or("false".to_string())
            .parse()
            .unwrap_or(false);

        Ok(Config {
            api_url,
            token,
            insecure,
        })
    }
}
