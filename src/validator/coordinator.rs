//! Quorum-gated signature collection and independent multi-signature
//! verification.

use crate::validator::node::ValidatorNode;
use crate::validator::registry::ValidatorRegistry;
use crate::validator::selection::select_signers;
use crate::validator::types::{
    MultiSignatureValidationResult, ValidationRequest, ValidatorNetworkStats, ValidatorSignature,
};
use log::{debug, info, warn};
use std::sync::Arc;

/// Error string returned when the eligible set cannot reach quorum.
const INSUFFICIENT_QUORUM: &str = "insufficient active validators for quorum";

/// Orchestrates validator selection, signature collection and quorum
/// tallying for bridge transactions, and independently verifies signature
/// sets supplied by external parties.
///
/// Stateless beyond the shared registry handle; safe to call from many
/// threads at once.
pub struct ValidationCoordinator {
    registry: Arc<ValidatorRegistry>,
}

impl ValidationCoordinator {
    pub fn new(registry: Arc<ValidatorRegistry>) -> Self {
        Self { registry }
    }

    /// Collect a quorum of signatures over the request payload.
    ///
    /// Short-circuits without attempting any signing when fewer than
    /// quorum-many validators are eligible. A selected validator that
    /// fails to sign is logged and skipped; no replacement signer is
    /// drafted in, so the decision stays auditable against the original
    /// selection. The returned result is the single authoritative outcome
    /// for this call.
    pub fn validate_transaction(
        &self,
        request: &ValidationRequest,
    ) -> MultiSignatureValidationResult {
        let quorum = self.registry.config().quorum;
        let eligible = self.registry.active_and_responsive();

        debug!(
            "Validating transaction {} (payload digest {})",
            request.transaction_id,
            hex::encode(&request.payload_digest()[..8])
        );

        if eligible.len() < quorum {
            warn!(
                "Insufficient active validators: {}/{} required for quorum (tx {})",
                eligible.len(),
                quorum,
                request.transaction_id
            );
            return MultiSignatureValidationResult {
                transaction_id: request.transaction_id.clone(),
                approved: false,
                signatures: Vec::new(),
                error: Some(INSUFFICIENT_QUORUM.to_string()),
            };
        }

        let selected = select_signers(&eligible, quorum);

        let mut signatures = Vec::with_capacity(selected.len());
        for validator in &selected {
            let reputation = validator.reputation();
            match validator.sign(&request.payload) {
                Ok(signature) => {
                    debug!(
                        "Signature collected from {} (reputation: {:.1})",
                        validator.id(),
                        reputation
                    );
                    signatures.push(ValidatorSignature {
                        validator_id: validator.id().to_string(),
                        validator_name: validator.name().to_string(),
                        signature,
                        reputation_at_signing: reputation,
                    });
                }
                Err(e) => {
                    warn!("Failed to get signature from {}: {}", validator.id(), e);
                }
            }
        }

        let approved = signatures.len() >= quorum;
        if approved {
            info!(
                "Quorum reached: {}/{} signatures collected for transaction {}",
                signatures.len(),
                quorum,
                request.transaction_id
            );
        } else {
            warn!(
                "Quorum not reached: {}/{} signatures for transaction {}",
                signatures.len(),
                quorum,
                request.transaction_id
            );
        }

        MultiSignatureValidationResult {
            transaction_id: request.transaction_id.clone(),
            approved,
            signatures,
            error: None,
        }
    }

    /// Independently verify an externally supplied signature set.
    ///
    /// Each entry is checked against the registry: unknown or inactive
    /// validators are skipped, invalid signatures are not counted, and
    /// extras beyond the threshold are ignored rather than penalized.
    /// Fails closed: `true` only when at least quorum-many entries verify.
    pub fn verify_multi_signature(
        &self,
        transaction_id: &str,
        payload: &[u8],
        signatures: &[ValidatorSignature],
    ) -> bool {
        let quorum = self.registry.config().quorum;

        if signatures.is_empty() {
            warn!("No signatures provided for transaction {}", transaction_id);
            return false;
        }

        if signatures.len() < quorum {
            warn!(
                "Insufficient signatures for transaction {}: {}/{} required",
                transaction_id,
                signatures.len(),
                quorum
            );
            return false;
        }

        let mut valid_count = 0usize;

        for entry in signatures {
            let Some(validator) = self.registry.get(&entry.validator_id) else {
                warn!(
                    "Unknown validator {} for transaction {}",
                    entry.validator_id, transaction_id
                );
                continue;
            };

            if !validator.is_active() {
                warn!(
                    "Validator {} is inactive for transaction {}",
                    entry.validator_id, transaction_id
                );
                continue;
            }

            if validator.verify(payload, &entry.signature) {
                valid_count += 1;
                debug!("Signature verified from {}", entry.validator_id);
            } else {
                warn!("Invalid signature from {}", entry.validator_id);
            }
        }

        let quorum_met = valid_count >= quorum;
        if quorum_met {
            info!(
                "Multi-signature verification passed: {}/{} valid signatures",
                valid_count, quorum
            );
        }
        quorum_met
    }

    /// Registry view of active-and-responsive validators, exposed for
    /// stats and operator UIs.
    pub fn active_validators(&self) -> Vec<Arc<ValidatorNode>> {
        self.registry.active_and_responsive()
    }

    /// Recompute network statistics on demand.
    pub fn network_stats(&self) -> ValidatorNetworkStats {
        self.registry.network_stats()
    }
}
