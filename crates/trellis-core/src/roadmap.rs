use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::id::{NodeId, RoadmapId};
use crate::node::{Node, ProofKind};

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can occur while constructing or validating a roadmap.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RoadmapError {
    #[error("duplicate node id: `{0}`")]
    DuplicateNode(NodeId),

    #[error("prerequisite `{prereq}` of node `{node}` does not exist")]
    UnknownPrerequisite { node: NodeId, prereq: NodeId },
}

// ---------------------------------------------------------------------------
// Roadmap
// ---------------------------------------------------------------------------

/// A skill-progression plan: a goal plus a set of milestone nodes whose
/// prerequisite references form a DAG.
///
/// Node insertion order is preserved; it is the deterministic tie-break for
/// tier ordering and the node-major key for journey ordering. Acyclicity is
/// not checked here -- the level assigner rejects cyclic graphs when a layout
/// is requested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Roadmap {
    /// Backend-assigned identifier.
    pub id: RoadmapId,

    /// The long-term goal this roadmap works toward.
    pub goal: String,

    nodes: Vec<Node>,
}

impl Roadmap {
    /// Create an empty roadmap.
    pub fn new(id: RoadmapId, goal: impl Into<String>) -> Self {
        Self {
            id,
            goal: goal.into(),
            nodes: Vec::new(),
        }
    }

    /// Build a roadmap from a complete node list, validating that ids are
    /// unique and every prerequisite references an existing node.
    pub fn from_nodes(
        id: RoadmapId,
        goal: impl Into<String>,
        nodes: Vec<Node>,
    ) -> Result<Self, RoadmapError> {
        let roadmap = Self {
            id,
            goal: goal.into(),
            nodes,
        };
        roadmap.validate()?;
        Ok(roadmap)
    }

    /// Assemble a roadmap the way the generation service hands one over:
    /// draft ids (and their prerequisite references) are prefixed with
    /// `"{roadmap_id}-"` so they are unique across roadmaps, a start node
    /// carrying the goal is prepended (already completed, so the first ring
    /// of milestones is unlocked), and drafts with no prerequisites are
    /// rewired to depend on the start node.
    pub fn assemble(
        id: RoadmapId,
        goal: impl Into<String>,
        drafts: Vec<Node>,
    ) -> Result<Self, RoadmapError> {
        let goal = goal.into();
        let prefix = format!("{}-", id.0);
        let start_id = NodeId::new(format!("{prefix}start"));

        let mut nodes = Vec::with_capacity(drafts.len() + 1);
        nodes.push(Node {
            id: start_id.clone(),
            title: goal.clone(),
            description: "Your goal".to_string(),
            tasks: Vec::new(),
            prerequisites: Vec::new(),
            proof_type: ProofKind::Reflection,
            completed: true,
        });

        for mut draft in drafts {
            draft.id = NodeId::new(format!("{prefix}{}", draft.id));
            if draft.prerequisites.is_empty() {
                draft.prerequisites = vec![start_id.clone()];
            } else {
                for prereq in &mut draft.prerequisites {
                    *prereq = NodeId::new(format!("{prefix}{prereq}"));
                }
            }
            nodes.push(draft);
        }

        Self::from_nodes(id, goal, nodes)
    }

    /// Append a node. The id must be unused and every prerequisite must
    /// reference a node already present.
    pub fn push(&mut self, node: Node) -> Result<(), RoadmapError> {
        if self.contains(node.id.as_str()) {
            return Err(RoadmapError::DuplicateNode(node.id));
        }
        for prereq in &node.prerequisites {
            if !self.contains(prereq.as_str()) {
                return Err(RoadmapError::UnknownPrerequisite {
                    node: node.id.clone(),
                    prereq: prereq.clone(),
                });
            }
        }
        self.nodes.push(node);
        Ok(())
    }

    /// Check id uniqueness and prerequisite references for the whole graph.
    pub fn validate(&self) -> Result<(), RoadmapError> {
        let mut seen: HashSet<&NodeId> = HashSet::with_capacity(self.nodes.len());
        for node in &self.nodes {
            if !seen.insert(&node.id) {
                return Err(RoadmapError::DuplicateNode(node.id.clone()));
            }
        }
        for node in &self.nodes {
            for prereq in &node.prerequisites {
                if !seen.contains(prereq) {
                    return Err(RoadmapError::UnknownPrerequisite {
                        node: node.id.clone(),
                        prereq: prereq.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// Get a node by id.
    pub fn get(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id.as_str() == id)
    }

    /// Returns true if a node with this id exists.
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the roadmap has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// Iterate over start nodes (no prerequisites) in insertion order.
    pub fn start_nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(|n| n.is_start())
    }

    /// Iterate over prerequisite edges as `(prerequisite, dependent)` id
    /// pairs, grouped by dependent in insertion order. The rendering layer
    /// draws one connector per pair.
    pub fn edges(&self) -> impl Iterator<Item = (&NodeId, &NodeId)> {
        self.nodes
            .iter()
            .flat_map(|n| n.prerequisites.iter().map(move |p| (p, &n.id)))
    }

    /// The set of completed node ids, derived from the backend's flags.
    pub fn completed_ids(&self) -> HashSet<NodeId> {
        self.nodes
            .iter()
            .filter(|n| n.completed)
            .map(|n| n.id.clone())
            .collect()
    }

    /// Returns true if every node is completed.
    pub fn all_complete(&self) -> bool {
        self.nodes.iter().all(|n| n.completed)
    }

    /// Content hash over node ids, prerequisite lists, and completion flags.
    /// Two roadmaps hash equal iff their graph structure and completion
    /// state agree; derived state keyed by this hash goes stale exactly when
    /// the hash changes.
    pub fn content_hash(&self) -> u64 {
        let mut hasher = ContentHash::new();
        hasher.write_u64(self.nodes.len() as u64);
        for node in &self.nodes {
            hasher.write_str(node.id.as_str());
            hasher.write_bool(node.completed);
            hasher.write_u64(node.prerequisites.len() as u64);
            for prereq in &node.prerequisites {
                hasher.write_str(prereq.as_str());
            }
        }
        hasher.finish()
    }
}

// ---------------------------------------------------------------------------
// Content hash
// ---------------------------------------------------------------------------

/// Incremental content hash for snapshot keys.
///
/// Uses FNV-1a (64-bit) for speed and simplicity. Not cryptographic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentHash(pub u64);

impl ContentHash {
    const FNV_OFFSET: u64 = 0xcbf29ce484222325;
    const FNV_PRIME: u64 = 0x100000001b3;

    /// Start a new hash.
    pub fn new() -> Self {
        Self(Self::FNV_OFFSET)
    }

    /// Feed bytes into the hash.
    pub fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.0 ^= b as u64;
            self.0 = self.0.wrapping_mul(Self::FNV_PRIME);
        }
    }

    /// Feed a u64 into the hash.
    pub fn write_u64(&mut self, v: u64) {
        self.write(&v.to_le_bytes());
    }

    /// Feed a bool into the hash.
    pub fn write_bool(&mut self, v: bool) {
        self.write(&[v as u8]);
    }

    /// Feed an f64 into the hash (by bit pattern).
    pub fn write_f64(&mut self, v: f64) {
        self.write(&v.to_bits().to_le_bytes());
    }

    /// Feed a string into the hash, length-prefixed so that adjacent
    /// strings cannot alias.
    pub fn write_str(&mut self, s: &str) {
        self.write_u64(s.len() as u64);
        self.write(s.as_bytes());
    }

    /// The final hash value.
    pub fn finish(self) -> u64 {
        self.0
    }
}

impl Default for ContentHash {
    fn default() -> Self {
        Self::new()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
