//! # rectangle-parser
//!
//! Axis-aligned rectangle geometry on the integer grid: corner derivation,
//! edge-point enumeration, and the pairwise relationships built on them
//! (intersection, containment, adjacency). Also loads rectangle collections
//! from XML.
//!
//! ## Rust Lesson #5: Modules and Re-exports
//!
//! `impl` blocks for a type don't have to live in the file that defines it.
//! `edges.rs` adds edge enumeration to `Rectangle` from its own module, and
//! the `pub use` lines below flatten everything callers need onto the crate
//! root.

pub mod edges;
pub mod geometry;
pub mod loader;
pub mod lookup;
pub mod relations;

// Re-export common types at crate root for convenience.
pub use geometry::{Corner, Point, Rectangle, Side};
pub use loader::{
    load_rectangles, load_rectangles_from_path, LoadError, LoadedRectangles, SkipReason,
    SkippedRecord,
};
pub use lookup::{find_by_id, select_pair, LookupError};
pub use relations::{
    does_contain, does_intersect, intersection_points, intersection_vertices, is_adjacent,
    overlaps, Adjacency, Intersection, RelationError,
};

// ============================================================================
// TESTS
// ============================================================================
//
// End-to-end over the shared fixture: load, then relate pairs by position.
