//! Trellis Layout -- the tiered-diagram layout pipeline for roadmaps.
//!
//! Turns a validated [`trellis_core::roadmap::Roadmap`] into everything the
//! rendering layer needs to draw it:
//!
//! 1. **Levels** -- [`level::assign_levels`] gives each node a tier from its
//!    dependency depth (longest path from a start node). Cyclic input is a
//!    fatal error, never a partial result.
//! 2. **Order** -- [`order::order_within_levels`] sorts each tier by the
//!    barycenter heuristic (mean position of prerequisites in the previous
//!    tier) with a stable tie-break, approximating crossing minimization in
//!    a single pass.
//! 3. **Positions** -- [`position::compute_positions`] maps (tier, row) to
//!    coordinates: fixed column stride, each tier vertically centered.
//! 4. **View** -- [`view::RoadmapView`] bundles the above with the gating
//!    state from `trellis_core::unlock` under a content-hash snapshot key,
//!    so the presentation layer recomputes exactly when inputs change.
//!
//! All stages are pure, synchronous functions over immutable snapshots; the
//! crate performs no I/O and holds no mutable state between calls.

pub mod level;
pub mod order;
pub mod position;
pub mod view;

pub use level::{LevelError, LevelMap, assign_levels};
pub use order::order_within_levels;
pub use position::{ConfigError, LayoutConfig, Position, compute_positions};
pub use view::{LayoutError, RoadmapView, SnapshotKey};
