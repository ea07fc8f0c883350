//! Reputation-ranked signer selection.

use crate::validator::node::ValidatorNode;
use std::cmp::Ordering;
use std::sync::Arc;

/// Choose the validators that will sign a transaction.
///
/// Pure over the given snapshot: filters to eligible nodes (active,
/// responsive, nonzero reputation), ranks by reputation descending with
/// validator id ascending as the tie-break so selection is reproducible,
/// and takes the first `quorum`. Returns an empty set when fewer than
/// `quorum` are eligible; the caller treats that as "cannot reach quorum".
///
/// Selection is point-in-time: a node deactivated after this returns is
/// still asked to sign (no mid-request reselection).
pub fn select_signers(
    snapshot: &[Arc<ValidatorNode>],
    quorum: usize,
) -> Vec<Arc<ValidatorNode>> {
    let mut eligible: Vec<Arc<ValidatorNode>> = snapshot
        .iter()
        .filter(|node| node.is_active() && node.is_responsive() && node.reputation() > 0.0)
        .map(Arc::clone)
        .collect();

    if eligible.len() < quorum {
        return Vec::new();
    }

    eligible.sort_by(|a, b| {
        b.reputation()
            .partial_cmp(&a.reputation())
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.id().cmp(b.id()))
    });
    eligible.truncate(quorum);
    eligible
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn node(id: &str) -> Arc<ValidatorNode> {
        Arc::new(
            ValidatorNode::new(id, format!("Node {}", id), Duration::from_secs(300)).unwrap(),
        )
    }

    #[test]
    fn equal_reputation_breaks_ties_by_id() {
        let snapshot = vec![node("validator-3"), node("validator-1"), node("validator-2")];
        let selected = select_signers(&snapshot, 2);
        let ids: Vec<&str> = selected.iter().map(|n| n.id()).collect();
        assert_eq!(ids, vec!["validator-1", "validator-2"]);
    }

    #[test]
    fn selection_caps_at_quorum() {
        let snapshot: Vec<_> = (1..=7).map(|i| node(&format!("validator-{}", i))).collect();
        let selected = select_signers(&snapshot, 4);
        assert_eq!(selected.len(), 4);
    }

    #[test]
    fn insufficient_eligible_returns_empty() {
        let snapshot = vec![node("validator-1"), node("validator-2")];
        snapshot[1].deactivate();
        assert!(select_signers(&snapshot, 2).is_empty());
    }

    #[test]
    fn inactive_nodes_are_filtered_out() {
        let snapshot = vec![node("validator-1"), node("validator-2"), node("validator-3")];
        snapshot[2].deactivate();
        let selected = select_signers(&snapshot, 2);
        let ids: Vec<&str> = selected.iter().map(|n| n.id()).collect();
        assert_eq!(ids, vec!["validator-1", "validator-2"]);
    }
}
