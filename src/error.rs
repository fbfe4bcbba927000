// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use std::time::Duration;
use thiserror::Error;

/// Boxed error used to carry arbitrary probe failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Error, Debug)]
pub enum VigilError {
    #[error("Invalid wait configuration: {0}")]
    InvalidConfig(String),

    #[error("Timed out after {elapsed:?} waiting for {resource} (last state: {last_state})")]
    Timeout {
        resource: String,
        last_state: String,
        elapsed: Duration,
    },

    #[error("Unexpected state \"{state}\" for {resource}")]
    UnexpectedState { resource: String, state: String },

    #[error("Probe for {resource} failed: {source}")]
    Probe {
        resource: String,
        #[source]
        source: BoxError,
    },

    #[error("Failed to build API client: {0}")]
    ClientBuild(#[from] reqwest::Error),

    #[error("Invalid API endpoint: {0}")]
    Endpoint(String),

    #[error("Invalid project id \"{0}\", expected <cluster>:<project>")]
    InvalidProjectId(String),
}

pub type Result<T> = std::result::Result<T, VigilError>;
