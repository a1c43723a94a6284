//! Resolver configuration.

use std::time::Duration;

use anchorcam_models::SelectionPolicy;

/// Configuration for camera resolution.
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// Width requested for reconnaissance probes (default: 640)
    pub probe_width: u32,
    /// Height requested for reconnaissance probes (default: 480)
    pub probe_height: u32,
    /// Upper bound on one probe: acquire, introspect, release (default: 3s)
    pub probe_timeout: Duration,
    /// Upper bound on the label-unlocking permission request (default: 10s)
    pub permission_timeout: Duration,
    /// How to choose among several candidates
    pub policy: SelectionPolicy,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            probe_width: 640,
            probe_height: 480,
            probe_timeout: Duration::from_secs(3),
            permission_timeout: Duration::from_secs(10),
            policy: SelectionPolicy::Automatic,
        }
    }
}

impl ResolverConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            probe_width: std::env::var("ANCHORCAM_PROBE_WIDTH")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.probe_width),
            probe_height: std::env::var("ANCHORCAM_PROBE_HEIGHT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.probe_height),
            probe_timeout: std::env::var("ANCHORCAM_PROBE_TIMEOUT_MS")
                .ok()
                .and_then(|s| s.parse().ok())
                .map(Duration::from_millis)
                .unwrap_or(defaults.probe_timeout),
            permission_timeout: std::env::var("ANCHORCAM_PERMISSION_TIMEOUT_MS")
                .ok()
                .and_then(|s| s.parse().ok())
                .map(Duration::from_millis)
                .unwrap_or(defaults.permission_timeout),
            policy: std::env::var("ANCHORCAM_SELECTION_POLICY")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.policy),
        }
    }

    /// Set the selection policy.
    pub fn with_policy(mut self, policy: SelectionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Set the per-probe timeout.
    pub fn with_probe_timeout(mut self, timeout: Duration) -> Self {
        self.probe_timeout = timeout;
        self
    }

    /// Set the permission request timeout.
    pub fn with_permission_timeout(mut self, timeout: Duration) -> Self {
        self.permission_timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ResolverConfig::default();
        assert_eq!((config.probe_width, config.probe_height), (640, 480));
        assert_eq!(config.policy, SelectionPolicy::Automatic);
        assert!(config.probe_timeout < config.permission_timeout);
    }

    #[test]
    fn test_builders() {
        let config = ResolverConfig::default()
            .with_policy(SelectionPolicy::Interactive)
            .with_probe_timeout(Duration::from_millis(250));
        assert_eq!(config.policy, SelectionPolicy::Interactive);
        assert_eq!(config.probe_timeout, Duration::from_millis(250));
    }
}
