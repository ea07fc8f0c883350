use std::env;
use std::sync::Arc;
use std::time::Duration;

use bridge_validator::validator::{
    HealthMonitor, NetworkConfig, ValidationCoordinator, ValidationRequest, ValidatorRegistry,
};
use log::{error, info};

/// Demo driver for the validator network.
///
/// Stands in for the out-of-scope RPC surface: bootstraps the 7-node
/// network, keeps heartbeats flowing for part of the membership, drives the
/// health sweep on an interval (the external scheduler of the design), and
/// submits sample bridge transactions so the quorum path is visible in the
/// logs.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = NetworkConfig {
        heartbeat_timeout: env::var("HEARTBEAT_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(NetworkConfig::default().heartbeat_timeout),
        ..NetworkConfig::default()
    };
    let sweep_interval = env::var("SWEEP_INTERVAL_SECS")
        .ok()
        .and_then(|v| v.parse().ok())
        .map(Duration::from_secs)
        .unwrap_or(Duration::from_secs(60));

    let registry = Arc::new(ValidatorRegistry::bootstrap(config)?);
    let coordinator = Arc::new(ValidationCoordinator::new(Arc::clone(&registry)));
    let monitor = HealthMonitor::new(Arc::clone(&registry));

    // External scheduler for the liveness sweep.
    let sweep_registry = Arc::clone(&registry);
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(sweep_interval);
        loop {
            ticker.tick().await;
            monitor.sweep();
            info!("{}", sweep_registry.network_stats());
        }
    });

    // Simulated validator heartbeats. Validators 6 and 7 stay silent so a
    // later sweep demonstrates deactivation.
    let heartbeat_registry = Arc::clone(&registry);
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(Duration::from_secs(30));
        loop {
            ticker.tick().await;
            for i in 1..=5 {
                heartbeat_registry.receive_heartbeat(&format!("validator-{}", i));
            }
        }
    });

    // Submit a sample transaction every few seconds from concurrent tasks.
    let mut submitters = Vec::new();
    for worker in 0..2 {
        let coordinator = Arc::clone(&coordinator);
        submitters.push(tokio::spawn(async move {
            let mut ticker = tokio::time::interval(Duration::from_secs(5));
            for n in 0.. {
                ticker.tick().await;
                let tx_id = format!("bridge-tx-{}-{}", worker, n);
                let payload = format!("transfer:{}:amount:{}", tx_id, 100 + n).into_bytes();
                let request = ValidationRequest::new(tx_id, payload);
                let result = coordinator.validate_transaction(&request);
                info!("{}", result);

                if result.approved
                    && !coordinator.verify_multi_signature(
                        &result.transaction_id,
                        &request.payload,
                        &result.signatures,
                    )
                {
                    error!(
                        "Collected signature set failed verification for {}",
                        result.transaction_id
                    );
                }
            }
        }));
    }

    for row in registry.status_report() {
        info!("{}", row);
    }

    for submitter in submitters {
        submitter.await?;
    }
    Ok(())
}
