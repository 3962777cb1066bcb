use std::collections::{HashMap, HashSet};

use serde::Serialize;
use trellis_core::id::NodeId;
use trellis_core::roadmap::{ContentHash, Roadmap};
use trellis_core::unlock::{NodeStatus, node_statuses, unlocked_ids};

use crate::level::{LevelError, LevelMap, assign_levels};
use crate::order::order_within_levels;
use crate::position::{ConfigError, LayoutConfig, Position, compute_positions};

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can occur while computing a roadmap view. Every variant is a
/// fatal input error; a view is all-or-nothing so the renderer can never be
/// handed a structurally wrong diagram.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LayoutError {
    #[error(transparent)]
    Level(#[from] LevelError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

// ---------------------------------------------------------------------------
// Snapshot key
// ---------------------------------------------------------------------------

/// Identity of the inputs a view was computed from: the roadmap's content
/// hash combined with the layout geometry. Equal keys mean the view is still
/// current; a changed key means recompute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SnapshotKey(pub u64);

impl SnapshotKey {
    /// Key for a roadmap + config pair.
    pub fn of(roadmap: &Roadmap, config: &LayoutConfig) -> Self {
        let mut hasher = ContentHash::new();
        hasher.write_u64(roadmap.content_hash());
        hasher.write_f64(config.node_width);
        hasher.write_f64(config.node_height);
        hasher.write_f64(config.horizontal_gap);
        hasher.write_f64(config.vertical_gap);
        Self(hasher.finish())
    }
}

// ---------------------------------------------------------------------------
// RoadmapView
// ---------------------------------------------------------------------------

/// Everything the rendering layer needs, derived in one pass from an
/// immutable roadmap snapshot: tier assignment, within-tier ordering,
/// coordinates, and gating state.
///
/// Views are never mutated. When the roadmap or the completed set changes
/// (for example after a proof submission refresh), the presentation layer
/// computes a fresh view; [`RoadmapView::is_current`] tells it whether the
/// one it holds is stale.
#[derive(Debug, Clone, Serialize)]
pub struct RoadmapView {
    /// Tier index per node (dependency depth).
    pub levels: LevelMap,
    /// Node ids per tier, in final vertical order.
    pub tiers: Vec<Vec<NodeId>>,
    /// Final 2-D coordinate per node.
    pub positions: HashMap<NodeId, Position>,
    /// Nodes whose prerequisites are all completed.
    pub unlocked: HashSet<NodeId>,
    /// Render/interaction status per node.
    pub statuses: HashMap<NodeId, NodeStatus>,
    /// Identity of the inputs this view was computed from.
    pub key: SnapshotKey,
}

impl RoadmapView {
    /// Compute the full derived state for a roadmap. Configuration is
    /// validated first, so a bad config surfaces before any layout work.
    pub fn compute(roadmap: &Roadmap, config: &LayoutConfig) -> Result<Self, LayoutError> {
        config.validate()?;

        let levels = assign_levels(roadmap)?;
        let tiers = order_within_levels(roadmap, &levels);
        let positions = compute_positions(&tiers, config)?;

        let completed = roadmap.completed_ids();
        let unlocked = unlocked_ids(roadmap, &completed);
        let statuses = node_statuses(roadmap, &completed);

        Ok(Self {
            levels,
            tiers,
            positions,
            unlocked,
            statuses,
            key: SnapshotKey::of(roadmap, config),
        })
    }

    /// Returns true if this view was computed from inputs identical to the
    /// given roadmap + config.
    pub fn is_current(&self, roadmap: &Roadmap, config: &LayoutConfig) -> bool {
        self.key == SnapshotKey::of(roadmap, config)
    }

    /// Coordinate for a node, if it exists.
    pub fn position(&self, id: &str) -> Option<Position> {
        self.positions.get(id).copied()
    }

    /// Tier index for a node, if it exists.
    pub fn level(&self, id: &str) -> Option<usize> {
        self.levels.get(id).copied()
    }

    /// Whether a node is unlocked.
    pub fn is_unlocked(&self, id: &str) -> bool {
        self.unlocked.contains(id)
    }

    /// Whether a click on this node should open it. Unknown ids are inert.
    pub fn is_interactable(&self, id: &str) -> bool {
        self.statuses.get(id).is_some_and(|s| s.interactable())
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use trellis_core::id::RoadmapId;
    use trellis_core::node::ProofKind;
    use trellis_core::roadmap::Roadmap;
    use trellis_core::test_utils::*;

    // -----------------------------------------------------------------------
    // Test 1: view bundles levels, order, coordinates, and gating
    // -----------------------------------------------------------------------
    #[test]
    fn view_bundles_all_derived_state() {
        let roadmap = diamond_roadmap();
        let view = RoadmapView::compute(&roadmap, &LayoutConfig::default()).unwrap();

        assert_eq!(view.level("a"), Some(0));
        assert_eq!(view.level("d"), Some(2));
        assert_eq!(view.tiers.len(), 3);
        assert_eq!(view.positions.len(), 4);
        assert!(view.is_unlocked("a"));
        assert!(!view.is_unlocked("d"));
        assert_eq!(view.statuses["d"], NodeStatus::Locked);
        assert!(!view.is_interactable("d"));
        assert!(!view.is_interactable("ghost"));
    }

    // -----------------------------------------------------------------------
    // Test 2: key is stable for unchanged inputs, moves when they change
    // -----------------------------------------------------------------------
    #[test]
    fn snapshot_key_tracks_inputs() {
        let roadmap = diamond_roadmap();
        let config = LayoutConfig::default();

        let view = RoadmapView::compute(&roadmap, &config).unwrap();
        assert!(view.is_current(&roadmap, &config));

        // Recomputation from the same inputs lands on the same key.
        let again = RoadmapView::compute(&roadmap, &config).unwrap();
        assert_eq!(view.key, again.key);

        // A completion flip makes the view stale.
        let nodes = vec![
            completed_node("a", &[], ProofKind::Reflection),
            node("b", &["a"], ProofKind::Link),
            node("c", &["a"], ProofKind::File),
            node("d", &["b", "c"], ProofKind::Photo),
        ];
        let progressed = Roadmap::from_nodes(RoadmapId(1), "goal", nodes).unwrap();
        assert!(!view.is_current(&progressed, &config));

        // A geometry change makes the view stale.
        let wider = LayoutConfig {
            horizontal_gap: 300.0,
            ..config
        };
        assert!(!view.is_current(&roadmap, &wider));
    }

    // -----------------------------------------------------------------------
    // Test 3: bad config surfaces before layout, cycle surfaces as error
    // -----------------------------------------------------------------------
    #[test]
    fn errors_are_all_or_nothing() {
        let roadmap = diamond_roadmap();
        let bad = LayoutConfig {
            node_height: 0.0,
            ..LayoutConfig::default()
        };
        assert!(matches!(
            RoadmapView::compute(&roadmap, &bad),
            Err(LayoutError::Config(_))
        ));

        let nodes = vec![
            node("a", &["b"], ProofKind::Reflection),
            node("b", &["a"], ProofKind::Link),
        ];
        let cyclic = Roadmap::from_nodes(RoadmapId(1), "goal", nodes).unwrap();
        assert!(matches!(
            RoadmapView::compute(&cyclic, &LayoutConfig::default()),
            Err(LayoutError::Level(LevelError::CycleDetected { .. }))
        ));
    }

    // -----------------------------------------------------------------------
    // Test 4: view serializes for the render handoff
    // -----------------------------------------------------------------------
    #[test]
    fn view_serializes() {
        let roadmap = single_node_roadmap();
        let view = RoadmapView::compute(&roadmap, &LayoutConfig::default()).unwrap();
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["positions"]["solo"]["x"], 0.0);
        assert_eq!(json["positions"]["solo"]["y"], 0.0);
        assert_eq!(json["tiers"][0][0], "solo");
    }
}
