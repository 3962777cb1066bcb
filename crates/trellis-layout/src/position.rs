use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use trellis_core::id::NodeId;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Fixed geometry for the tiered diagram. All dimensions must be positive;
/// `validate` is checked before any layout math runs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Width of a node box.
    pub node_width: f64,
    /// Height of a node box.
    pub node_height: f64,
    /// Horizontal gap between adjacent tiers.
    pub horizontal_gap: f64,
    /// Vertical gap between siblings within a tier.
    pub vertical_gap: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            node_width: 220.0,
            node_height: 100.0,
            horizontal_gap: 280.0,
            vertical_gap: 180.0,
        }
    }
}

/// Errors in layout configuration. Caught at validation time, before layout.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("layout dimension `{name}` must be positive, got {value}")]
    NonPositive { name: &'static str, value: f64 },
}

impl LayoutConfig {
    /// Reject non-positive (or NaN) dimensions, naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("node_width", self.node_width),
            ("node_height", self.node_height),
            ("horizontal_gap", self.horizontal_gap),
            ("vertical_gap", self.vertical_gap),
        ];
        for (name, value) in fields {
            if !(value > 0.0) {
                return Err(ConfigError::NonPositive { name, value });
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Positioning
// ---------------------------------------------------------------------------

/// A node's final 2-D coordinate (center-left anchored, like the renderer).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Convert ordered tiers into coordinates.
///
/// Each tier becomes a column: `x = level * (node_width + horizontal_gap)`.
/// Within a tier of `m` nodes the vertical extent is
/// `(m - 1) * vertical_gap + node_height`, centered on `y = 0`, so every
/// tier is vertically balanced regardless of its fan-out.
pub fn compute_positions(
    tiers: &[Vec<NodeId>],
    config: &LayoutConfig,
) -> Result<HashMap<NodeId, Position>, ConfigError> {
    config.validate()?;

    let mut positions = HashMap::with_capacity(tiers.iter().map(|t| t.len()).sum());
    for (level, tier) in tiers.iter().enumerate() {
        let x = level as f64 * (config.node_width + config.horizontal_gap);
        let extent = (tier.len().saturating_sub(1)) as f64 * config.vertical_gap
            + config.node_height;
        let first_y = -extent / 2.0 + config.node_height / 2.0;

        for (row, id) in tier.iter().enumerate() {
            positions.insert(
                id.clone(),
                Position {
                    x,
                    y: first_y + row as f64 * config.vertical_gap,
                },
            );
        }
    }
    Ok(positions)
}

// ===========================================================================
// Tests
// ===========================================================================
