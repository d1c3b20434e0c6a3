//! Hierarchical auto-layout: BFS levels from the first node, one column per
//! level, nodes centered inside each column.

mod engine;
mod levels;
mod placement;
mod subtree;
mod types;
mod viewport;

pub use engine::LayoutEngine;
pub use levels::{assign_levels, group_nodes_by_level};
pub use placement::place_nodes;
pub use subtree::layout_subtree;
pub use types::{Arrangement, FitView, LevelMap, UnreachablePolicy};
pub use viewport::fit_view;
