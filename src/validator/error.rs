//! Error types for the validator network.

use thiserror::Error;

/// Errors raised while handling validator key material.
#[derive(Debug, Error)]
pub enum KeyError {
    #[error("System RNG failure: {0}")]
    Rng(String),

    #[error("Generated scalar is not a valid P-256 private key")]
    InvalidScalar,

    #[error("Invalid public key encoding: {0}")]
    InvalidPublicKey(String),
}

/// Fatal errors during validator network bootstrap.
///
/// The network cannot start without a full membership of freshly keyed
/// validators, so these propagate to the caller and are never recovered.
#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("Key generation failed for {validator_id}: {source}")]
    KeyGeneration {
        validator_id: String,
        #[source]
        source: KeyError,
    },

    #[error("Invalid network config: quorum {quorum} of {total} validators")]
    InvalidConfig { quorum: usize, total: usize },
}

/// A single validator's signing attempt failed.
///
/// Recovered locally: the coordinator records the failure against the
/// validator and excludes it from the collected signature set.
#[derive(Debug, Error)]
pub enum SigningError {
    #[error("ECDSA signing failed: {0}")]
    Ecdsa(String),
}
