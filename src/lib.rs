//! dsa-lab - classic data-structure and algorithm classroom demos
//!
//! This library provides eight self-contained demonstration programs, each
//! covering one textbook technique. Every demo runs a fixed walkthrough first
//! and then drops into an interactive menu on standard input.
//!
//! # Programs
//! - **brackets**: bracket balance checking with a character stack
//! - **postfix**: infix to postfix conversion and evaluation (dual stacks)
//! - **reverse-list**: singly linked-list reversal, three ways
//! - **doubly-list**: doubly linked-list insert/delete/traverse
//! - **traverse**: BFS and DFS over an adjacency matrix
//! - **heap**: binary min/max heap construction and validation
//! - **dijkstra**: shortest paths with a step-by-step trace
//! - **sort**: four-way sorting comparison harness
//!
//! # Architecture
//! - `demos`: the eight programs, one module each, no cross-demo dependencies
//! - `cli`: command-line definitions (one subcommand per program)
//! - `config` lives under `system`: TOML file + environment overrides
//! - `errors`: error codes and colored error formatting
//! - `utils`: terminal prompt helpers and console styling

pub mod cli;
pub mod demos;
pub mod errors;
pub mod system;
pub mod utils;
