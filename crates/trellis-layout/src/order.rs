use std::collections::HashMap;

use trellis_core::id::NodeId;
use trellis_core::node::Node;
use trellis_core::roadmap::Roadmap;

use crate::level::LevelMap;

// ---------------------------------------------------------------------------
// Barycenter ordering
// ---------------------------------------------------------------------------

/// Order the nodes of each tier to reduce edge crossings.
///
/// Tier 0 keeps the roadmap's insertion order -- there is no prior tier to
/// anchor against. Each deeper tier is sorted by the barycenter heuristic:
/// a node's key is the mean position of its prerequisites in the previous
/// tier's finalized sequence (0 when none of its prerequisites sit there).
/// The sort is stable, so equal keys keep insertion order and the result is
/// reproducible. One pass in increasing tier order; no iteration to a fixed
/// point (exact crossing minimization is NP-hard).
///
/// Returns one sequence per tier, indexed by level. Levels are contiguous
/// because every node at level k > 0 has a prerequisite at level k - 1.
pub fn order_within_levels(roadmap: &Roadmap, levels: &LevelMap) -> Vec<Vec<NodeId>> {
    let Some(&max_level) = levels.values().max() else {
        return Vec::new();
    };

    // Bucket by tier in insertion order.
    let mut tiers: Vec<Vec<NodeId>> = vec![Vec::new(); max_level + 1];
    for node in roadmap.nodes() {
        if let Some(&level) = levels.get(&node.id) {
            tiers[level].push(node.id.clone());
        }
    }

    for level in 1..tiers.len() {
        let prev_position: HashMap<&str, usize> = tiers[level - 1]
            .iter()
            .enumerate()
            .map(|(i, id)| (id.as_str(), i))
            .collect();

        let mut keyed: Vec<(NodeId, f64)> = Vec::with_capacity(tiers[level].len());
        for id in &tiers[level] {
            let key = roadmap
                .get(id.as_str())
                .map(|node| barycenter(node, &prev_position))
                .unwrap_or(0.0);
            keyed.push((id.clone(), key));
        }
        keyed.sort_by(|a, b| a.1.total_cmp(&b.1));
        tiers[level] = keyed.into_iter().map(|(id, _)| id).collect();
    }

    tiers
}

/// Mean position of the node's prerequisites within the previous tier;
/// 0 when none of them sit there.
fn barycenter(node: &Node, prev_position: &HashMap<&str, usize>) -> f64 {
    let mut sum = 0.0;
    let mut found = 0u32;
    for prereq in &node.prerequisites {
        if let Some(&pos) = prev_position.get(prereq.as_str()) {
            sum += pos as f64;
            found += 1;
        }
    }
    if found == 0 { 0.0 } else { sum / found as f64 }
}

// ===========================================================================
// Tests
// ===========================================================================
