//! Prerequisite gating: which milestones are interactable given the set of
//! completed ones.
//!
//! Everything here is a pure function over an immutable roadmap snapshot and
//! a completed-id set; callers recompute wholesale whenever either input
//! changes. Nothing mutates `Node::completed`.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::id::NodeId;
use crate::roadmap::Roadmap;

/// Per-node gating state as the rendering layer consumes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeStatus {
    /// Completed: always interactable (read-only detail view).
    Completed,
    /// Every prerequisite completed (or none): interactable.
    Unlocked,
    /// At least one prerequisite outstanding: clicks are ignored.
    Locked,
}

impl NodeStatus {
    /// Whether the node responds to interaction.
    pub fn interactable(self) -> bool {
        !matches!(self, NodeStatus::Locked)
    }

    /// Whether the node is gated for rendering purposes.
    pub fn is_locked(self) -> bool {
        matches!(self, NodeStatus::Locked)
    }
}

/// The set of unlocked node ids: nodes whose prerequisite list is empty or
/// entirely contained in `completed`.
pub fn unlocked_ids(roadmap: &Roadmap, completed: &HashSet<NodeId>) -> HashSet<NodeId> {
    roadmap
        .nodes()
        .filter(|n| n.prerequisites.iter().all(|p| completed.contains(p)))
        .map(|n| n.id.clone())
        .collect()
}

/// Status for every node in the roadmap. Completed wins over unlocked, so a
/// completed node stays interactable even if the completed set shrinks out
/// from under its prerequisites.
pub fn node_statuses(
    roadmap: &Roadmap,
    completed: &HashSet<NodeId>,
) -> HashMap<NodeId, NodeStatus> {
    roadmap
        .nodes()
        .map(|n| {
            let status = if completed.contains(&n.id) {
                NodeStatus::Completed
            } else if n.prerequisites.iter().all(|p| completed.contains(p)) {
                NodeStatus::Unlocked
            } else {
                NodeStatus::Locked
            };
            (n.id.clone(), status)
        })
        .collect()
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::ProofKind;
    use crate::test_utils::*;

    fn ids(names: &[&str]) -> HashSet<NodeId> {
        names.iter().map(|&n| NodeId::from(n)).collect()
    }

    // -----------------------------------------------------------------------
    // Test 1: start nodes are always unlocked
    // -----------------------------------------------------------------------
    #[test]
    fn start_nodes_always_unlocked() {
        let roadmap = diamond_roadmap();
        let unlocked = unlocked_ids(&roadmap, &HashSet::new());
        assert!(unlocked.contains("a"));
        assert!(!unlocked.contains("b"));
        assert!(!unlocked.contains("c"));
        assert!(!unlocked.contains("d"));
    }

    // -----------------------------------------------------------------------
    // Test 2: unlock requires every prerequisite
    // -----------------------------------------------------------------------
    #[test]
    fn unlock_requires_every_prerequisite() {
        let roadmap = diamond_roadmap();

        // With only A complete, B and C unlock but D does not.
        let unlocked = unlocked_ids(&roadmap, &ids(&["a"]));
        assert!(unlocked.contains("b"));
        assert!(unlocked.contains("c"));
        assert!(!unlocked.contains("d"));

        // With A, B, C complete, D unlocks.
        let unlocked = unlocked_ids(&roadmap, &ids(&["a", "b", "c"]));
        assert!(unlocked.contains("d"));

        // Removing either of D's prerequisites flips it back.
        assert!(!unlocked_ids(&roadmap, &ids(&["a", "b"])).contains("d"));
        assert!(!unlocked_ids(&roadmap, &ids(&["a", "c"])).contains("d"));
    }

    // -----------------------------------------------------------------------
    // Test 3: recomputation is pure -- inputs untouched
    // -----------------------------------------------------------------------
    #[test]
    fn evaluation_does_not_mutate_inputs() {
        let roadmap = diamond_roadmap();
        let completed = ids(&["a"]);

        let before = roadmap.clone();
        let _ = unlocked_ids(&roadmap, &completed);
        let _ = node_statuses(&roadmap, &completed);

        assert_eq!(roadmap, before);
        assert_eq!(completed, ids(&["a"]));
    }

    // -----------------------------------------------------------------------
    // Test 4: statuses -- completed wins over unlocked, locked is the rest
    // -----------------------------------------------------------------------
    #[test]
    fn statuses_partition_nodes() {
        let roadmap = diamond_roadmap();
        let statuses = node_statuses(&roadmap, &ids(&["a"]));

        assert_eq!(statuses["a"], NodeStatus::Completed);
        assert_eq!(statuses["b"], NodeStatus::Unlocked);
        assert_eq!(statuses["c"], NodeStatus::Unlocked);
        assert_eq!(statuses["d"], NodeStatus::Locked);

        assert!(statuses["a"].interactable());
        assert!(statuses["b"].interactable());
        assert!(!statuses["d"].interactable());
        assert!(statuses["d"].is_locked());
    }

    // -----------------------------------------------------------------------
    // Test 5: completed node stays interactable without its prerequisites
    // -----------------------------------------------------------------------
    #[test]
    fn completed_node_interactable_regardless_of_gating() {
        // D is marked completed even though B and C are not in the set.
        let roadmap = diamond_roadmap();
        let statuses = node_statuses(&roadmap, &ids(&["d"]));

        assert_eq!(statuses["d"], NodeStatus::Completed);
        assert!(statuses["d"].interactable());
    }

    // -----------------------------------------------------------------------
    // Test 6: single free-standing node is unlocked with nothing completed
    // -----------------------------------------------------------------------
    #[test]
    fn single_node_unlocked() {
        let roadmap = single_node_roadmap();
        let unlocked = unlocked_ids(&roadmap, &HashSet::new());
        assert_eq!(unlocked.len(), 1);
        assert!(unlocked.contains("solo"));
    }

    // -----------------------------------------------------------------------
    // Test 7: completed set from roadmap flags matches manual set
    // -----------------------------------------------------------------------
    #[test]
    fn flags_and_explicit_set_agree() {
        let nodes = vec![
            completed_node("a", &[], ProofKind::Reflection),
            node("b", &["a"], ProofKind::Link),
            node("c", &["b"], ProofKind::Photo),
        ];
        let roadmap =
            crate::roadmap::Roadmap::from_nodes(crate::id::RoadmapId(1), "goal", nodes).unwrap();

        let from_flags = unlocked_ids(&roadmap, &roadmap.completed_ids());
        let manual = unlocked_ids(&roadmap, &ids(&["a"]));
        assert_eq!(from_flags, manual);
    }
}
