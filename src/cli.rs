//! Command-line interface definitions using clap
//!
//! This module defines the CLI structure for dsa-lab using clap's derive
//! macros. Each classroom program is one subcommand.

use clap::{Parser, Subcommand};

/// dsa-lab - classic data-structure and algorithm demos
#[derive(Parser)]
#[command(name = "dsa-lab")]
#[command(version)]
#[command(about = "Classic data-structure and algorithm classroom demos", long_about = None)]
pub struct Cli {
    /// Run the fixed demonstration only and skip the interactive menu
    #[arg(long, global = true)]
    pub demo_only: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available programs
#[derive(Subcommand)]
pub enum Commands {
    /// Check bracket balance in an expression using a stack
    Brackets,

    /// Convert infix expressions to postfix and evaluate them
    Postfix,

    /// Reverse a singly linked list (recursive, iterative, in-place)
    ReverseList,

    /// Doubly linked-list insert, delete and traversal operations
    DoublyList,

    /// BFS and DFS traversal over an adjacency-matrix graph
    Traverse,

    /// Build and validate binary min and max heaps
    Heap,

    /// Dijkstra's shortest-path algorithm with a step-by-step trace
    Dijkstra,

    /// Compare bubble, selection, insertion and merge sort
    Sort,
}
