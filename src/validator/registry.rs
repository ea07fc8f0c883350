//! Registry owning the fixed set of validator nodes.

use crate::validator::error::BootstrapError;
use crate::validator::node::ValidatorNode;
use crate::validator::types::{NetworkConfig, ValidatorNetworkStats, ValidatorStatus};
use log::info;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Owns every validator node, keyed by validator id.
///
/// The map is structurally immutable after bootstrap (membership is fixed),
/// so the read lock is uncontended in steady state; per-node mutation goes
/// through each node's atomics. Many concurrent validation calls share one
/// registry behind an `Arc`.
pub struct ValidatorRegistry {
    nodes: RwLock<HashMap<String, Arc<ValidatorNode>>>,
    config: NetworkConfig,
}

impl ValidatorRegistry {
    /// Bootstrap the validator network: generate `total_validators` nodes
    /// with fresh key pairs. Called once at process startup; any key
    /// generation failure aborts the bootstrap.
    pub fn bootstrap(config: NetworkConfig) -> Result<Self, BootstrapError> {
        if config.quorum == 0 || config.quorum > config.total_validators {
            return Err(BootstrapError::InvalidConfig {
                quorum: config.quorum,
                total: config.total_validators,
            });
        }

        info!(
            "Initializing {}-node validator network with {}/{} quorum...",
            config.total_validators, config.quorum, config.total_validators
        );

        let mut nodes = HashMap::with_capacity(config.total_validators);
        for i in 1..=config.total_validators {
            let validator_id = format!("validator-{}", i);
            let validator_name = format!("Validator Node {}", i);
            let node = ValidatorNode::new(
                validator_id.clone(),
                validator_name,
                config.heartbeat_timeout,
            )
            .map_err(|source| BootstrapError::KeyGeneration {
                validator_id: validator_id.clone(),
                source,
            })?;
            info!("Initialized {} ({})", node.id(), node.name());
            nodes.insert(validator_id, Arc::new(node));
        }

        let registry = Self {
            nodes: RwLock::new(nodes),
            config,
        };

        info!(
            "Validator network ready: {}/{} nodes active, {}/{} quorum required",
            registry.active_and_responsive().len(),
            config.total_validators,
            config.quorum,
            config.total_validators
        );

        Ok(registry)
    }

    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    /// Look up a validator by id.
    pub fn get(&self, validator_id: &str) -> Option<Arc<ValidatorNode>> {
        self.nodes
            .read()
            .ok()?
            .get(validator_id)
            .map(Arc::clone)
    }

    /// Snapshot of every validator, active or not.
    pub fn all(&self) -> Vec<Arc<ValidatorNode>> {
        match self.nodes.read() {
            Ok(nodes) => nodes.values().map(Arc::clone).collect(),
            Err(_) => Vec::new(),
        }
    }

    /// Validators eligible for signing: active, responsive and with a
    /// nonzero reputation.
    pub fn active_and_responsive(&self) -> Vec<Arc<ValidatorNode>> {
        self.all()
            .into_iter()
            .filter(|node| node.is_active() && node.is_responsive() && node.reputation() > 0.0)
            .collect()
    }

    /// Process a liveness signal from a validator.
    ///
    /// Returns `false` for an unknown id, never errors.
    pub fn receive_heartbeat(&self, validator_id: &str) -> bool {
        match self.get(validator_id) {
            Some(node) => {
                node.heartbeat();
                true
            }
            None => false,
        }
    }

    /// Recompute network statistics from the current snapshot.
    pub fn network_stats(&self) -> ValidatorNetworkStats {
        let all = self.all();
        let active = self.active_and_responsive().len();
        let average_reputation = if all.is_empty() {
            0.0
        } else {
            all.iter().map(|node| node.reputation()).sum::<f64>() / all.len() as f64
        };

        ValidatorNetworkStats {
            total_validators: all.len(),
            active_validators: active,
            quorum_required: self.config.quorum,
            quorum_available: active >= self.config.quorum,
            average_reputation,
        }
    }

    /// Per-validator status report, ordered by validator id.
    pub fn status_report(&self) -> Vec<ValidatorStatus> {
        let mut report: Vec<ValidatorStatus> =
            self.all().iter().map(|node| node.status()).collect();
        report.sort_by(|a, b| a.validator_id.cmp(&b.validator_id));
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn test_config() -> NetworkConfig {
        NetworkConfig::default()
    }

    #[test]
    fn bootstrap_creates_full_membership() {
        let registry = ValidatorRegistry::bootstrap(test_config()).unwrap();
        assert_eq!(registry.all().len(), 7);
        assert_eq!(registry.active_and_responsive().len(), 7);
        for node in registry.all() {
            assert!(node.is_active());
            assert_eq!(node.reputation(), 100.0);
        }
    }

    #[test]
    fn bootstrap_rejects_degenerate_config() {
        let config = NetworkConfig {
            total_validators: 3,
            quorum: 4,
            heartbeat_timeout: Duration::from_secs(300),
        };
        assert!(matches!(
            ValidatorRegistry::bootstrap(config),
            Err(BootstrapError::InvalidConfig { quorum: 4, total: 3 })
        ));
    }

    #[test]
    fn get_returns_known_validators_only() {
        let registry = ValidatorRegistry::bootstrap(test_config()).unwrap();
        assert!(registry.get("validator-1").is_some());
        assert!(registry.get("validator-7").is_some());
        assert!(registry.get("validator-8").is_none());
    }

    #[test]
    fn heartbeat_for_unknown_validator_is_false() {
        let registry = ValidatorRegistry::bootstrap(test_config()).unwrap();
        assert!(registry.receive_heartbeat("validator-3"));
        assert!(!registry.receive_heartbeat("validator-99"));
    }

    #[test]
    fn deactivated_nodes_leave_the_eligible_set() {
        let registry = ValidatorRegistry::bootstrap(test_config()).unwrap();
        registry.get("validator-1").unwrap().deactivate();
        registry.get("validator-2").unwrap().deactivate();
        assert_eq!(registry.active_and_responsive().len(), 5);

        let stats = registry.network_stats();
        assert_eq!(stats.total_validators, 7);
        assert_eq!(stats.active_validators, 5);
        assert!(stats.quorum_available);
    }

    #[test]
    fn stats_flag_quorum_risk() {
        let registry = ValidatorRegistry::bootstrap(test_config()).unwrap();
        for i in 1..=4 {
            registry
                .get(&format!("validator-{}", i))
                .unwrap()
                .deactivate();
        }
        let stats = registry.network_stats();
        assert_eq!(stats.active_validators, 3);
        assert!(!stats.quorum_available);
    }

    #[test]
    fn status_report_is_ordered_and_complete() {
        let registry = ValidatorRegistry::bootstrap(test_config()).unwrap();
        let report = registry.status_report();
        assert_eq!(report.len(), 7);
        assert_eq!(report[0].validator_id, "validator-1");
        assert!(report.iter().all(|row| row.responsive));
    }
}
