//! Multi-signature validator network for cross-chain bridge transactions.
//!
//! A fixed membership of 7 validator nodes jointly approves bridge
//! transactions under a 4-of-7 quorum, tolerating up to 3 byzantine or
//! unavailable validators. No single validator (or any group below the
//! quorum) can authorize a transfer, and the network stays available as
//! long as a quorum of nodes keeps heartbeating.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌─────────────────┐     ┌──────────────────────┐
//! │ KeyMaterial  │────▶│  ValidatorNode  │────▶│  ValidatorRegistry   │
//! │ (P-256 pair) │     │ (sign, liveness)│     │ (fixed set, by id)   │
//! └──────────────┘     └─────────────────┘     └──────────────────────┘
//!                                                   │            │
//!                              select_signers ◀─────┘            │
//!                                    │                           ▼
//!                                    ▼                  ┌─────────────────┐
//!                        ┌───────────────────────┐      │  HealthMonitor  │
//!                        │ ValidationCoordinator │      │ (liveness sweep)│
//!                        │ (quorum sign + verify)│      └─────────────────┘
//!                        └───────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```no_run
//! use std::sync::Arc;
//! use bridge_validator::validator::{
//!     HealthMonitor, NetworkConfig, ValidationCoordinator, ValidationRequest,
//!     ValidatorRegistry,
//! };
//!
//! let registry = Arc::new(ValidatorRegistry::bootstrap(NetworkConfig::default())?);
//! let coordinator = ValidationCoordinator::new(Arc::clone(&registry));
//! let monitor = HealthMonitor::new(Arc::clone(&registry));
//!
//! let request = ValidationRequest::new("tx-1", b"bridge transfer bytes".to_vec());
//! let result = coordinator.validate_transaction(&request);
//! if result.approved {
//!     // hand the signature set to the durable store / counterpart chain
//! }
//!
//! // driven by an external scheduler
//! monitor.sweep();
//! # Ok::<(), bridge_validator::validator::BootstrapError>(())
//! ```

pub mod coordinator;
pub mod error;
pub mod keys;
pub mod monitor;
pub mod node;
pub mod registry;
pub mod selection;
pub mod types;

// Re-export main types for convenience
pub use coordinator::ValidationCoordinator;
pub use error::{BootstrapError, KeyError, SigningError};
pub use keys::{verify_detached, KeyMaterial};
pub use monitor::HealthMonitor;
pub use node::ValidatorNode;
pub use registry::ValidatorRegistry;
pub use selection::select_signers;
pub use types::{
    MultiSignatureValidationResult, NetworkConfig, ValidationRequest, ValidatorNetworkStats,
    ValidatorSignature, ValidatorStatus,
};
