//! Trust layer for a cross-chain bridge: a 4-of-7 multi-signature
//! validator network with reputation-ranked signer selection and
//! heartbeat-driven failover.
//!
//! The [`validator`] module holds the whole core; see its docs for the
//! architecture and a usage sketch. Everything here is synchronous and
//! thread-safe: many in-flight bridge transactions may validate and
//! verify concurrently against one shared [`validator::ValidatorRegistry`].

pub mod validator;

pub use validator::{
    HealthMonitor, MultiSignatureValidationResult, NetworkConfig, ValidationCoordinator,
    ValidationRequest, ValidatorRegistry, ValidatorSignature,
};
