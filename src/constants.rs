// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Lifecycle states a Rancher namespace reports
pub mod states {
    pub const ACTIVATING: &str = "activating";
    pub const ACTIVE: &str = "active";
    pub const REMOVING: &str = "removing";
    /// Synthetic state for a namespace the backend no longer knows
    pub const REMOVED: &str = "removed";
}

/// Wait loop timing defaults
pub mod wait {
    /// Total time allowed for one wait in seconds
    pub const TIMEOUT_SECS: u64 = 600;
    /// Delay before the first probe in seconds
    pub const INITIAL_DELAY_SECS: u64 = 1;
    /// Minimum interval between probes in seconds
    pub const MIN_INTERVAL_SECS: u64 = 3;
    /// Maximum interval in seconds when backoff is enabled
    pub const MAX_INTERVAL_SECS: u64 = 60;
}
