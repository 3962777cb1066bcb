//! Roadmap loading from the backend's JSON payload shape.
//!
//! Feature-gated behind `data-loader`. The backend serves a roadmap as
//! `{ id, goal, nodes: [...] }` with per-node `prerequisites`, `tasks`,
//! `proof_type`, and `completed`; this module deserializes that document and
//! runs the usual graph validation.

use serde::Deserialize;

use crate::id::{NodeId, RoadmapId};
use crate::node::{Node, ProofKind};
use crate::roadmap::{Roadmap, RoadmapError};

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can occur while loading a roadmap document.
#[derive(Debug, thiserror::Error)]
pub enum RoadmapLoadError {
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),
    #[error("roadmap error: {0}")]
    Roadmap(#[from] RoadmapError),
}

// ---------------------------------------------------------------------------
// JSON document structures
// ---------------------------------------------------------------------------

/// Top-level roadmap document.
#[derive(Debug, Deserialize)]
pub struct RoadmapDoc {
    pub id: u64,
    pub goal: String,
    #[serde(default)]
    pub nodes: Vec<NodeDoc>,
}

/// JSON representation of a milestone node.
#[derive(Debug, Deserialize)]
pub struct NodeDoc {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub prerequisites: Vec<String>,
    #[serde(default)]
    pub tasks: Vec<String>,
    pub proof_type: ProofKind,
    #[serde(default)]
    pub completed: bool,
}

// ---------------------------------------------------------------------------
// Loading functions
// ---------------------------------------------------------------------------

/// Load a validated roadmap from a JSON string.
pub fn load_roadmap_json(json: &str) -> Result<Roadmap, RoadmapLoadError> {
    let doc: RoadmapDoc = serde_json::from_str(json)?;
    Ok(build_roadmap(doc)?)
}

/// Load a validated roadmap from JSON bytes.
pub fn load_roadmap_json_bytes(bytes: &[u8]) -> Result<Roadmap, RoadmapLoadError> {
    let doc: RoadmapDoc = serde_json::from_slice(bytes)?;
    Ok(build_roadmap(doc)?)
}

fn build_roadmap(doc: RoadmapDoc) -> Result<Roadmap, RoadmapError> {
    let nodes = doc
        .nodes
        .into_iter()
        .map(|n| Node {
            id: NodeId::new(n.id),
            title: n.title,
            description: n.description,
            tasks: n.tasks,
            prerequisites: n.prerequisites.into_iter().map(NodeId::new).collect(),
            proof_type: n.proof_type,
            completed: n.completed,
        })
        .collect();
    Roadmap::from_nodes(RoadmapId(doc.id), doc.goal, nodes)
}

// ===========================================================================
// Tests
// ===========================================================================
