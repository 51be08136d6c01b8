//! The eight classroom programs
//!
//! Each module is self-contained: it owns its data structures and algorithms
//! and exposes a single `run` entry that plays the fixed demonstration and
//! then the interactive menu. Nothing here is shared between demos.

pub mod brackets;
pub mod dijkstra;
pub mod doubly_linked;
pub mod graph_traversal;
pub mod heaps;
pub mod linked_list;
pub mod postfix;
pub mod sorting;
