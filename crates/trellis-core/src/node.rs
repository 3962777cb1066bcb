use serde::{Deserialize, Serialize};

use crate::id::NodeId;

// ---------------------------------------------------------------------------
// Proof kinds
// ---------------------------------------------------------------------------

/// The kind of evidence a milestone asks for. Closed set; the wire format
/// uses the lowercase names (`link | reflection | photo | file`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProofKind {
    /// A URL pointing at the work (repo, article, deployed page).
    Link,
    /// Free-text reflection written by the user.
    Reflection,
    /// An uploaded image.
    Photo,
    /// An uploaded file of any type.
    File,
}

/// What a submission form must collect for a given proof kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputKind {
    /// A single URL field.
    Url,
    /// A multi-line text field.
    Text,
    /// A file upload, optionally restricted to images, plus an optional note.
    Upload { image_only: bool },
}

impl ProofKind {
    /// All proof kinds, in wire-format order.
    pub const ALL: [ProofKind; 4] = [
        ProofKind::Link,
        ProofKind::Reflection,
        ProofKind::Photo,
        ProofKind::File,
    ];

    /// The capability table mapping each kind to the input its form needs.
    /// Adding a proof kind means adding one arm here.
    pub fn required_input(self) -> InputKind {
        match self {
            ProofKind::Link => InputKind::Url,
            ProofKind::Reflection => InputKind::Text,
            ProofKind::Photo => InputKind::Upload { image_only: true },
            ProofKind::File => InputKind::Upload { image_only: false },
        }
    }

    /// The wire-format name of this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            ProofKind::Link => "link",
            ProofKind::Reflection => "reflection",
            ProofKind::Photo => "photo",
            ProofKind::File => "file",
        }
    }
}

// ---------------------------------------------------------------------------
// Node
// ---------------------------------------------------------------------------

/// A milestone in a roadmap. Definitions come from the backend and are
/// immutable here; `completed` is the backend's authoritative flag and is
/// only ever read by this workspace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Unique identifier within the roadmap.
    pub id: NodeId,

    /// Short skill/milestone name.
    pub title: String,

    /// One or two sentences describing the milestone.
    #[serde(default)]
    pub description: String,

    /// Concrete actions for this milestone, in display order.
    #[serde(default)]
    pub tasks: Vec<String>,

    /// Milestones that must be completed before this one unlocks.
    /// Empty for start nodes.
    #[serde(default)]
    pub prerequisites: Vec<NodeId>,

    /// The kind of proof this milestone asks for.
    pub proof_type: ProofKind,

    /// Whether the backend has marked this milestone complete.
    #[serde(default)]
    pub completed: bool,
}

impl Node {
    /// Returns true if this node is a start node (no prerequisites).
    pub fn is_start(&self) -> bool {
        self.prerequisites.is_empty()
    }
}
