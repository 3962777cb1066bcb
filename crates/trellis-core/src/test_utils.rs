//! Shared test helpers for unit tests, integration tests, and benchmarks.
//!
//! Gated behind `#[cfg(any(test, feature = "test-utils"))]` so these helpers
//! are available to this crate's tests and, via the `test-utils` feature, to
//! dependent crates' tests and benches.

use crate::id::{NodeId, RoadmapId};
use crate::node::{Node, ProofKind};
use crate::roadmap::Roadmap;

/// Build a node with the given id and prerequisites.
pub fn node(id: &str, prerequisites: &[&str], proof_type: ProofKind) -> Node {
    Node {
        id: NodeId::from(id),
        title: format!("Milestone {id}"),
        description: String::new(),
        tasks: Vec::new(),
        prerequisites: prerequisites.iter().map(|&p| NodeId::from(p)).collect(),
        proof_type,
        completed: false,
    }
}

/// Build a node already marked complete by the backend.
pub fn completed_node(id: &str, prerequisites: &[&str], proof_type: ProofKind) -> Node {
    Node {
        completed: true,
        ..node(id, prerequisites, proof_type)
    }
}

/// One node, no prerequisites, nothing completed.
pub fn single_node_roadmap() -> Roadmap {
    Roadmap::from_nodes(
        RoadmapId(1),
        "goal",
        vec![node("solo", &[], ProofKind::Reflection)],
    )
    .expect("valid roadmap")
}

/// Linear chain: a -> b -> c.
pub fn linear_roadmap() -> Roadmap {
    Roadmap::from_nodes(
        RoadmapId(1),
        "goal",
        vec![
            node("a", &[], ProofKind::Reflection),
            node("b", &["a"], ProofKind::Link),
            node("c", &["b"], ProofKind::Photo),
        ],
    )
    .expect("valid roadmap")
}

/// Diamond: a; b and c depend on a; d depends on b and c.
pub fn diamond_roadmap() -> Roadmap {
    Roadmap::from_nodes(
        RoadmapId(1),
        "goal",
        vec![
            node("a", &[], ProofKind::Reflection),
            node("b", &["a"], ProofKind::Link),
            node("c", &["a"], ProofKind::File),
            node("d", &["b", "c"], ProofKind::Photo),
        ],
    )
    .expect("valid roadmap")
}

/// One root fanning out to `width` dependents, each with a further dependent:
/// three tiers, the middle one `width` nodes wide.
pub fn fan_out_roadmap(width: usize) -> Roadmap {
    let mut nodes = vec![node("root", &[], ProofKind::Reflection)];
    for i in 0..width {
        let mid = format!("mid{i}");
        let leaf = format!("leaf{i}");
        nodes.push(node(&mid, &["root"], ProofKind::Link));
        nodes.push(node(&leaf, &[&mid], ProofKind::Photo));
    }
    Roadmap::from_nodes(RoadmapId(1), "goal", nodes).expect("valid roadmap")
}
