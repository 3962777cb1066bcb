use std::collections::{HashMap, VecDeque};

use trellis_core::id::NodeId;
use trellis_core::roadmap::Roadmap;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can occur during level assignment.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LevelError {
    /// The prerequisite relation is not a DAG. The named node is the
    /// lexicographically smallest id left unprocessed by the traversal; it
    /// lies on or downstream of a cycle.
    #[error("cycle detected involving node `{node}`")]
    CycleDetected { node: NodeId },

    #[error("prerequisite `{prereq}` of node `{node}` does not exist")]
    UnknownPrerequisite { node: NodeId, prereq: NodeId },
}

/// Maps each node id to its tier: longest-path distance from a start node.
pub type LevelMap = HashMap<NodeId, usize>;

// ---------------------------------------------------------------------------
// Level assignment (Kahn's algorithm with depth propagation)
// ---------------------------------------------------------------------------

/// Assign each node its dependency depth: 0 for nodes with no prerequisites,
/// otherwise one more than the deepest prerequisite.
///
/// Runs Kahn's algorithm over the prerequisite edges, propagating depth as
/// in-degrees drain, so each node is finalized exactly once and the whole
/// pass is linear in nodes + edges. A graph that cannot be drained contains
/// a cycle; that is a fatal input error and no partial mapping is returned.
pub fn assign_levels(roadmap: &Roadmap) -> Result<LevelMap, LevelError> {
    let count = roadmap.len();
    let index: HashMap<&str, usize> = roadmap
        .nodes()
        .enumerate()
        .map(|(i, n)| (n.id.as_str(), i))
        .collect();

    // Dependents adjacency and in-degrees from the prerequisite lists.
    let mut dependents: Vec<Vec<usize>> = vec![Vec::new(); count];
    let mut in_degree: Vec<usize> = vec![0; count];
    for (i, node) in roadmap.nodes().enumerate() {
        for prereq in &node.prerequisites {
            let &pi = index.get(prereq.as_str()).ok_or_else(|| {
                LevelError::UnknownPrerequisite {
                    node: node.id.clone(),
                    prereq: prereq.clone(),
                }
            })?;
            dependents[pi].push(i);
            in_degree[i] += 1;
        }
    }

    // Seed with start nodes; drain, pushing depth forward.
    let mut queue: VecDeque<usize> = (0..count).filter(|&i| in_degree[i] == 0).collect();
    let mut depth: Vec<usize> = vec![0; count];
    let mut processed = 0usize;

    while let Some(i) = queue.pop_front() {
        processed += 1;
        for &dep in &dependents[i] {
            if depth[i] + 1 > depth[dep] {
                depth[dep] = depth[i] + 1;
            }
            in_degree[dep] -= 1;
            if in_degree[dep] == 0 {
                queue.push_back(dep);
            }
        }
    }

    if processed != count {
        // Unprocessed nodes are exactly those whose in-degree never drained.
        let offender = roadmap
            .nodes()
            .zip(&in_degree)
            .filter(|&(_, &deg)| deg > 0)
            .map(|(node, _)| &node.id)
            .min()
            .cloned();
        if let Some(node) = offender {
            return Err(LevelError::CycleDetected { node });
        }
    }

    Ok(roadmap
        .nodes()
        .enumerate()
        .map(|(i, n)| (n.id.clone(), depth[i]))
        .collect())
}

// ===========================================================================
// Tests
// ===========================================================================
