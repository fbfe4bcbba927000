// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Generic wait loop for remote resources converging on a target state.

use crate::constants::{states, wait as defaults};
use crate::error::{Result, VigilError};
use std::collections::HashSet;
use std::future::Future;
use std::time::Duration;
use tokio::time::{sleep_until, Instant};
use tracing::{debug, info};

/// What a single probe observed about a remote resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Observation {
    /// The resource exists. `state` is the lifecycle label it reports;
    /// `removed` is set once the backend has stamped it for removal.
    Present { state: String, removed: bool },
    /// The backend no longer knows the resource.
    Absent,
}

impl Observation {
    /// The label used for classification. Absence and the removal marker
    /// both collapse into the synthetic "removed" state.
    pub fn state_label(&self) -> &str {
        match self {
            Observation::Absent => states::REMOVED,
            Observation::Present { removed: true, .. } => states::REMOVED,
            Observation::Present { state, .. } => state,
        }
    }
}

/// Classification sets and timings for one wait loop.
///
/// A label present in both sets classifies as target, so waits where a
/// resource may already be converged succeed on their first probe.
#[derive(Debug, Clone)]
pub struct PollConfig {
    pending: HashSet<String>,
    target: HashSet<String>,
    timeout: Duration,
    initial_delay: Duration,
    min_interval: Duration,
    max_interval: Duration,
}

impl PollConfig {
    /// Build a config with the default timings. Both sets must be non-empty.
    pub fn new<P, T>(pending: P, target: T) -> Result<Self>
    where
        P: IntoIterator,
        P::Item: Into<String>,
        T: IntoIterator,
        T::Item: Into<String>,
    {
        let min_interval = Duration::from_secs(defaults::MIN_INTERVAL_SECS);
        let config = Self {
            pending: pending.into_iter().map(Into::into).collect(),
            target: target.into_iter().map(Into::into).collect(),
            timeout: Duration::from_secs(defaults::TIMEOUT_SECS),
            initial_delay: Duration::from_secs(defaults::INITIAL_DELAY_SECS),
            min_interval,
            max_interval: min_interval,
        };
        config.validate()?;
        Ok(config)
    }

    /// Total time allowed, measured from loop start.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Delay before the first probe.
    pub fn initial_delay(mut self, delay: Duration) -> Self {
        self.initial_delay = delay;
        self
    }

    /// Floor for the interval between probes.
    pub fn min_interval(mut self, interval: Duration) -> Self {
        self.min_interval = interval;
        if self.max_interval < interval {
            self.max_interval = interval;
        }
        self
    }

    /// Double the interval after each probe, capped at `ceiling`.
    /// The minimum interval stays the floor.
    pub fn backoff_ceiling(mut self, ceiling: Duration) -> Self {
        self.max_interval = ceiling;
        self
    }

    fn validate(&self) -> Result<()> {
        if self.pending.is_empty() {
            return Err(VigilError::InvalidConfig(
                "pending state set must not be empty".to_string(),
            ));
        }
        if self.target.is_empty() {
            return Err(VigilError::InvalidConfig(
                "target state set must not be empty".to_string(),
            ));
        }
        if self.min_interval.is_zero() {
            return Err(VigilError::InvalidConfig(
                "minimum interval must be positive".to_string(),
            ));
        }
        if self.timeout <= self.min_interval {
            return Err(VigilError::InvalidConfig(
                "timeout must exceed the minimum interval".to_string(),
            ));
        }
        if self.max_interval < self.min_interval {
            return Err(VigilError::InvalidConfig(
                "backoff ceiling must not be below the minimum interval".to_string(),
            ));
        }
        Ok(())
    }
}

/// Probe `resource` until it reaches a target state or the timeout elapses.
///
/// Each observation is classified against the config's sets: a target label
/// resolves the wait with that observation, a pending label keeps polling,
/// and anything else fails immediately. A hard probe error is fatal and not
/// retried. No probe is issued once the deadline has passed; the final
/// sleep is clamped so the loop wakes at the deadline, not past it.
pub async fn wait<F, Fut, E>(resource: &str, config: &PollConfig, mut probe: F) -> Result<Observation>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = std::result::Result<Observation, E>>,
    E: std::error::Error + Send + Sync + 'static,
{
    config.validate()?;

    let start = Instant::now();
    let deadline = start + config.timeout;
    let mut interval = config.min_interval;
    let mut last_state = String::from("unknown");

    debug!(
        "Waiting for {} to reach one of {:?}, timeout {:?}",
        resource, config.target, config.timeout
    );
    sleep_until((start + config.initial_delay).min(deadline)).await;

    loop {
        if Instant::now() >= deadline {
            return Err(VigilError::Timeout {
                resource: resource.to_string(),
                last_state,
                elapsed: start.elapsed(),
            });
        }

        let observed = probe().await.map_err(|e| VigilError::Probe {
            resource: resource.to_string(),
            source: Box::new(e),
        })?;

        let label = observed.state_label().to_string();
        if config.target.contains(&label) {
            info!(
                "{} reached state \"{}\" after {:?}",
                resource,
                label,
                start.elapsed()
            );
            return Ok(observed);
        }
        if !config.pending.contains(&label) {
            return Err(VigilError::UnexpectedState {
                resource: resource.to_string(),
                state: label,
            });
        }

        debug!("{} still \"{}\", next probe in {:?}", resource, label, interval);
        last_state = label;

        sleep_until((Instant::now() + interval).min(deadline)).await;
        interval = (interval * 2).min(config.max_interval);
    }
}
