//! Periodic liveness sweep over the validator registry.

use crate::validator::registry::ValidatorRegistry;
use log::{debug, error, warn};
use std::sync::Arc;

/// Deactivates validators whose heartbeats have gone stale and reports
/// quorum risk.
///
/// Owns no timer: an external scheduler calls [`HealthMonitor::sweep`] on
/// whatever cadence it chooses. The sweep only flips liveness flags that
/// selection reads; membership stays fixed, so there is no automatic
/// replacement of a dead validator.
pub struct HealthMonitor {
    registry: Arc<ValidatorRegistry>,
}

impl HealthMonitor {
    pub fn new(registry: Arc<ValidatorRegistry>) -> Self {
        Self { registry }
    }

    /// One health-check pass: deactivate every active validator whose last
    /// heartbeat is older than the timeout, then raise a critical alert if
    /// the surviving set cannot reach quorum.
    pub fn sweep(&self) {
        debug!("Performing validator network health check...");

        let timeout = self.registry.config().heartbeat_timeout;
        for validator in self.registry.all() {
            if validator.is_active() && !validator.is_responsive() {
                let silent_ms = crate::validator::node::unix_millis()
                    .saturating_sub(validator.last_heartbeat_ms());
                warn!(
                    "Validator {} is inactive (no heartbeat for {} ms, timeout {} ms)",
                    validator.id(),
                    silent_ms,
                    timeout.as_millis()
                );
                validator.deactivate();
            }
        }

        let stats = self.registry.network_stats();
        if !stats.quorum_available {
            error!(
                "CRITICAL: Validator network unable to meet quorum! Active: {}/{}, Required: {}",
                stats.active_validators, stats.total_validators, stats.quorum_required
            );
        }
    }
}
