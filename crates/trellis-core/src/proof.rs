//! Proof records and the read-model journal the UI derives affordances from.
//!
//! Proofs are append-only records owned by the backend; this module holds an
//! in-memory copy for querying. Nothing here touches `Node::completed` --
//! completion is authoritative from the backend and is deliberately not
//! inferred from proof contents.

use serde::{Deserialize, Serialize};

use crate::id::{NodeId, ProofId};
use crate::node::ProofKind;
use crate::roadmap::Roadmap;

// ---------------------------------------------------------------------------
// Proof record
// ---------------------------------------------------------------------------

/// A user-submitted artifact evidencing progress on a milestone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proof {
    /// Journal-assigned identifier, increasing in creation order.
    pub id: ProofId,

    /// The milestone this proof belongs to.
    pub node_id: NodeId,

    /// What kind of artifact this is.
    pub proof_type: ProofKind,

    /// Link URL, reflection text, or a note accompanying an upload.
    pub value: String,

    /// Backend-relative path of an uploaded file, when one exists.
    #[serde(default)]
    pub file_path: Option<String>,
}

// ---------------------------------------------------------------------------
// Journal
// ---------------------------------------------------------------------------

/// Append-only list of proofs across a roadmap, in creation order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProofJournal {
    entries: Vec<Proof>,
    next_id: u64,
}

impl ProofJournal {
    /// Create an empty journal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a proof and return its assigned id.
    pub fn append(
        &mut self,
        node_id: NodeId,
        proof_type: ProofKind,
        value: impl Into<String>,
        file_path: Option<String>,
    ) -> ProofId {
        let id = ProofId(self.next_id);
        self.next_id += 1;
        self.entries.push(Proof {
            id,
            node_id,
            proof_type,
            value: value.into(),
            file_path,
        });
        id
    }

    /// All proofs in creation order.
    pub fn entries(&self) -> &[Proof] {
        &self.entries
    }

    /// Proofs for one milestone, in creation order.
    pub fn for_node<'a>(&'a self, node_id: &str) -> impl Iterator<Item = &'a Proof> {
        let node_id = node_id.to_string();
        self.entries
            .iter()
            .filter(move |p| p.node_id.as_str() == node_id)
    }

    /// Number of proofs recorded for one milestone.
    pub fn count_for(&self, node_id: &str) -> usize {
        self.for_node(node_id).count()
    }

    /// Whether the milestone already has a proof of kind `Photo`. The
    /// submission UI keys its form choice off this predicate.
    pub fn has_photo(&self, node_id: &str) -> bool {
        self.for_node(node_id)
            .any(|p| p.proof_type == ProofKind::Photo)
    }

    /// All proofs ordered for the journey slideshow: by the roadmap's node
    /// insertion order, then by creation order within each node. Proofs for
    /// ids the roadmap does not contain are omitted.
    pub fn journey<'a>(&'a self, roadmap: &Roadmap) -> Vec<&'a Proof> {
        let mut ordered = Vec::with_capacity(self.entries.len());
        for node in roadmap.nodes() {
            ordered.extend(self.for_node(node.id.as_str()));
        }
        ordered
    }

    /// Total number of proofs.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no proofs have been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Form selection
// ---------------------------------------------------------------------------

/// Which submission form the UI presents for a milestone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProofForm {
    /// No photo proof yet: the photo upload is mandatory.
    MandatoryPhoto,
    /// A photo proof exists: further proofs of any kind are optional.
    ExtraProof,
}

impl ProofForm {
    /// Derive the form for a milestone from the journal contents.
    pub fn for_node(journal: &ProofJournal, node_id: &str) -> Self {
        if journal.has_photo(node_id) {
            ProofForm::ExtraProof
        } else {
            ProofForm::MandatoryPhoto
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
