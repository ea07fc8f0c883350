//! A single bridge validator: key custody, signing, liveness and reputation.

use crate::validator::error::{KeyError, SigningError};
use crate::validator::keys::KeyMaterial;
use crate::validator::types::ValidatorStatus;
use log::debug;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Milliseconds since the unix epoch.
pub(crate) fn unix_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or(Duration::ZERO)
        .as_millis() as u64
}

/// One validator node in the bridge trust network.
///
/// Created once at bootstrap and never destroyed; membership is fixed.
/// All mutable state is atomic so that concurrent `sign` calls against the
/// same node (possible when it is selected for two in-flight transactions)
/// never race, and the health monitor can flip liveness flags while
/// selection reads them.
pub struct ValidatorNode {
    id: String,
    name: String,
    keys: KeyMaterial,
    active: AtomicBool,
    last_heartbeat_ms: AtomicU64,
    success_count: AtomicU64,
    failure_count: AtomicU64,
    created_at_ms: u64,
    heartbeat_timeout: Duration,
}

impl ValidatorNode {
    /// Create a validator with a freshly generated P-256 key pair.
    ///
    /// New validators start active, responsive and at reputation 100.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        heartbeat_timeout: Duration,
    ) -> Result<Self, KeyError> {
        let now = unix_millis();
        Ok(Self {
            id: id.into(),
            name: name.into(),
            keys: KeyMaterial::generate()?,
            active: AtomicBool::new(true),
            last_heartbeat_ms: AtomicU64::new(now),
            success_count: AtomicU64::new(0),
            failure_count: AtomicU64::new(0),
            created_at_ms: now,
            heartbeat_timeout,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unix-epoch milliseconds of node creation.
    pub fn created_at_ms(&self) -> u64 {
        self.created_at_ms
    }

    /// Sign `payload` with this validator's private key.
    ///
    /// Success and failure both land in the lifetime counters that feed
    /// reputation; a signing error is recorded, not silently dropped.
    pub fn sign(&self, payload: &[u8]) -> Result<Vec<u8>, SigningError> {
        match self.keys.sign(payload) {
            Ok(signature) => {
                self.success_count.fetch_add(1, Ordering::Relaxed);
                Ok(signature)
            }
            Err(e) => {
                self.failure_count.fetch_add(1, Ordering::Relaxed);
                Err(e)
            }
        }
    }

    /// Verify a signature over `payload` against this validator's public
    /// key. Pure; malformed bytes yield `false`.
    pub fn verify(&self, payload: &[u8], signature: &[u8]) -> bool {
        self.keys.verify(payload, signature)
    }

    /// Compressed SEC1 public key for the external key directory.
    pub fn public_key_bytes(&self) -> Vec<u8> {
        self.keys.public_key_bytes()
    }

    /// Record a liveness signal: refreshes the heartbeat timestamp and
    /// reactivates the node if the health monitor had deactivated it.
    pub fn heartbeat(&self) {
        self.last_heartbeat_ms.store(unix_millis(), Ordering::Relaxed);
        if !self.active.swap(true, Ordering::Relaxed) {
            debug!("Validator {} reactivated by heartbeat", self.id);
        }
    }

    /// Administrative/liveness flag. Cleared only by the health monitor,
    /// set again only by an explicit heartbeat.
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Relaxed)
    }

    /// Mark the node inactive. Called by the health monitor on timeout.
    pub fn deactivate(&self) {
        self.active.store(false, Ordering::Relaxed);
    }

    /// Whether the last heartbeat is within the configured timeout.
    pub fn is_responsive(&self) -> bool {
        self.heartbeat_age() < self.heartbeat_timeout
    }

    pub fn last_heartbeat_ms(&self) -> u64 {
        self.last_heartbeat_ms.load(Ordering::Relaxed)
    }

    fn heartbeat_age(&self) -> Duration {
        let now = unix_millis();
        Duration::from_millis(now.saturating_sub(self.last_heartbeat_ms()))
    }

    pub fn success_count(&self) -> u64 {
        self.success_count.load(Ordering::Relaxed)
    }

    pub fn failure_count(&self) -> u64 {
        self.failure_count.load(Ordering::Relaxed)
    }

    /// Reputation in `[0.0, 100.0]`, derived from the lifetime signing
    /// success rate with a decay penalty once the node stays silent past
    /// the heartbeat timeout.
    ///
    /// With no attempts yet the success rate counts as 1.0, so freshly
    /// bootstrapped validators start at 100.
    pub fn reputation(&self) -> f64 {
        let successes = self.success_count() as f64;
        let failures = self.failure_count() as f64;
        let attempts = successes + failures;
        let success_rate = if attempts == 0.0 {
            1.0
        } else {
            successes / attempts
        };

        let base = success_rate * 100.0;

        let inactive_minutes = self.heartbeat_age().as_secs_f64() / 60.0;
        let grace_minutes = self.heartbeat_timeout.as_secs_f64() / 60.0;
        let penalty = (inactive_minutes - grace_minutes).max(0.0) * 5.0;

        (base - penalty).clamp(0.0, 100.0)
    }

    /// Current status row for the network report.
    pub fn status(&self) -> ValidatorStatus {
        ValidatorStatus {
            validator_id: self.id.clone(),
            validator_name: self.name.clone(),
            active: self.is_active(),
            responsive: self.is_responsive(),
            reputation: self.reputation(),
            success_count: self.success_count(),
            failure_count: self.failure_count(),
        }
    }
}
