//! Trellis Core -- the data model and derived-state functions for
//! skill-progression roadmaps.
//!
//! A roadmap is a DAG of milestones: each node carries prerequisite
//! references, a proof kind, and the backend's authoritative `completed`
//! flag. This crate owns the typed model, its validation, the proof journal
//! read-model, and the prerequisite-gating evaluation. Layout (tiers,
//! ordering, coordinates) lives in `trellis-layout`.
//!
//! Everything is a pure function over immutable snapshots: derived state is
//! recomputed wholesale whenever the graph or the completed set changes,
//! never mutated in place. The crate performs no I/O; the backend that
//! generates roadmaps, stores proofs, and flips completion flags is an
//! external collaborator.
//!
//! # Key Types
//!
//! - [`roadmap::Roadmap`] -- validated milestone graph with insertion order
//!   preserved, prerequisite edges, and an FNV-1a content hash for snapshot
//!   keying.
//! - [`node::Node`] / [`node::ProofKind`] -- milestone definitions and the
//!   closed proof-kind set with its input capability table.
//! - [`proof::ProofJournal`] -- append-only proof read-model: per-node
//!   queries, the photo predicate, journey ordering, form selection.
//! - [`unlock`] -- `unlocked_ids` and `node_statuses`, the pure
//!   prerequisite-gating evaluation.
//! - [`data_loader`] (feature `data-loader`) -- backend JSON document
//!   parsing into a validated [`roadmap::Roadmap`].

pub mod id;
pub mod node;
pub mod proof;
pub mod roadmap;
pub mod unlock;

#[cfg(feature = "data-loader")]
pub mod data_loader;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
