//! Types for multi-signature bridge transaction validation.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use std::time::Duration;

/// Default validator network size.
pub const DEFAULT_TOTAL_VALIDATORS: usize = 7;

/// Default quorum: 4-of-7, tolerating 3 byzantine or unavailable validators.
pub const DEFAULT_QUORUM: usize = 4;

/// Default heartbeat timeout before a validator is considered unresponsive.
pub const DEFAULT_HEARTBEAT_TIMEOUT: Duration = Duration::from_secs(5 * 60);

/// Validator network sizing and liveness configuration.
///
/// The defaults reproduce the production 7-node, 4-of-7 network with a
/// 5-minute heartbeat timeout. The same timeout acts as the grace period
/// before reputation decay starts.
#[derive(Debug, Clone, Copy)]
pub struct NetworkConfig {
    /// Fixed membership size (`N`).
    pub total_validators: usize,

    /// Signatures required to approve a transaction (`Q`).
    pub quorum: usize,

    /// Silence beyond this marks a validator unresponsive.
    pub heartbeat_timeout: Duration,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            total_validators: DEFAULT_TOTAL_VALIDATORS,
            quorum: DEFAULT_QUORUM,
            heartbeat_timeout: DEFAULT_HEARTBEAT_TIMEOUT,
        }
    }
}

/// A bridge transaction submitted for multi-signature approval.
///
/// Transient: this core does not persist requests.
#[derive(Debug, Clone)]
pub struct ValidationRequest {
    /// Bridge transaction identifier.
    pub transaction_id: String,

    /// The transaction bytes each selected validator signs.
    pub payload: Vec<u8>,
}

impl ValidationRequest {
    pub fn new(transaction_id: impl Into<String>, payload: impl Into<Vec<u8>>) -> Self {
        Self {
            transaction_id: transaction_id.into(),
            payload: payload.into(),
        }
    }

    /// SHA-256 digest of the payload, the log-safe audit reference for
    /// this request (the payload itself is never logged).
    pub fn payload_digest(&self) -> [u8; 32] {
        Sha256::digest(&self.payload).into()
    }
}

/// One validator's signature over a transaction payload.
///
/// Immutable once produced; persisted by the audit-trail store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidatorSignature {
    /// Signing validator's id.
    pub validator_id: String,

    /// Signing validator's display name.
    pub validator_name: String,

    /// 64-byte ECDSA P-256 signature over the payload.
    pub signature: Vec<u8>,

    /// The validator's reputation at the moment of signing.
    pub reputation_at_signing: f64,
}

/// Outcome of one `validate_transaction` call.
///
/// Exactly one per call; the single authoritative decision for the
/// transaction. Callers do not retry internally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MultiSignatureValidationResult {
    pub transaction_id: String,

    /// True iff at least quorum-many signatures were collected.
    pub approved: bool,

    /// Collected signatures, in selection order.
    pub signatures: Vec<ValidatorSignature>,

    /// Failure reason when the request could not be attempted at all.
    pub error: Option<String>,
}

impl fmt::Display for MultiSignatureValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ValidationResult[tx={}, approved={}, signatures={}, error={}]",
            self.transaction_id,
            self.approved,
            self.signatures.len(),
            self.error.as_deref().unwrap_or("none")
        )
    }
}

/// Point-in-time validator network statistics, recomputed on demand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidatorNetworkStats {
    pub total_validators: usize,
    pub active_validators: usize,
    pub quorum_required: usize,

    /// Whether enough validators are active and responsive to reach quorum.
    pub quorum_available: bool,

    /// Mean reputation across all validators, active or not.
    pub average_reputation: f64,
}

impl fmt::Display for ValidatorNetworkStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ValidatorStats[active={}/{}, quorum={}, avgReputation={:.1}]",
            self.active_validators,
            self.total_validators,
            if self.quorum_available { "ok" } else { "at risk" },
            self.average_reputation
        )
    }
}

/// One row of the validator status report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidatorStatus {
    pub validator_id: String,
    pub validator_name: String,
    pub active: bool,
    pub responsive: bool,
    pub reputation: f64,
    pub success_count: u64,
    pub failure_count: u64,
}

impl fmt::Display for ValidatorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ValidatorStatus[{}, active={}, responsive={}, reputation={:.1}]",
            self.validator_id, self.active, self.responsive, self.reputation
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_4_of_7() {
        let config = NetworkConfig::default();
        assert_eq!(config.total_validators, 7);
        assert_eq!(config.quorum, 4);
        assert_eq!(config.heartbeat_timeout, Duration::from_secs(300));
    }

    #[test]
    fn payload_digest_is_stable_and_payload_sensitive() {
        let a = ValidationRequest::new("tx", b"data".to_vec());
        let b = ValidationRequest::new("tx", b"data".to_vec());
        let c = ValidationRequest::new("tx", b"Data".to_vec());
        assert_eq!(a.payload_digest(), b.payload_digest());
        assert_ne!(a.payload_digest(), c.payload_digest());
    }

    #[test]
    fn result_display_reports_counts() {
        let result = MultiSignatureValidationResult {
            transaction_id: "tx-1".into(),
            approved: false,
            signatures: vec![],
            error: Some("insufficient active validators for quorum".into()),
        };
        let rendered = result.to_string();
        assert!(rendered.contains("tx-1"));
        assert!(rendered.contains("signatures=0"));
        assert!(rendered.contains("insufficient"));
    }
}
