//! Graph BFS and DFS over an adjacency matrix
//!
//! Undirected graph bounded at `MAX_VERTICES`. BFS uses a FIFO queue, DFS is
//! shown both recursively and with an explicit stack; the iterative variant
//! pushes neighbors in reverse index order so both visit orders agree.

use std::collections::VecDeque;
use std::fmt::Write as _;

use crate::errors::DsaLabError;
use crate::utils::terminal::{banner, prompt_numbers, prompt_usize};
use crate::print_error;

pub const MAX_VERTICES: usize = 20;

pub struct Graph {
    vertices: usize,
    adj: [[u8; MAX_VERTICES]; MAX_VERTICES],
}

impl Graph {
    pub fn new(vertices: usize) -> Result<Self, DsaLabError> {
        if vertices == 0 || vertices > MAX_VERTICES {
            return Err(DsaLabError::invalid_vertex(format!(
                "vertex count must be between 1 and {}",
                MAX_VERTICES
            )));
        }
        Ok(Self {
            vertices,
            adj: [[0; MAX_VERTICES]; MAX_VERTICES],
        })
    }

    pub fn vertices(&self) -> usize {
        self.vertices
    }

    fn check_vertex(&self, vertex: usize) -> Result<(), DsaLabError> {
        if vertex >= self.vertices {
            return Err(DsaLabError::invalid_vertex(format!(
                "vertex {} is out of range (graph has {} vertices)",
                vertex, self.vertices
            )));
        }
        Ok(())
    }

    /// Add an undirected edge; both directions are recorded.
    pub fn add_edge(&mut self, src: usize, dest: usize) -> Result<(), DsaLabError> {
        self.check_vertex(src)?;
        self.check_vertex(dest)?;
        self.adj[src][dest] = 1;
        self.adj[dest][src] = 1;
        Ok(())
    }

    pub fn has_edge(&self, src: usize, dest: usize) -> bool {
        src < self.vertices && dest < self.vertices && self.adj[src][dest] == 1
    }

    /// Breadth-first traversal order from `start`.
    pub fn bfs(&self, start: usize) -> Result<Vec<usize>, DsaLabError> {
        self.check_vertex(start)?;

        let mut visited = vec![false; self.vertices];
        let mut queue = VecDeque::new();
        let mut order = Vec::new();

        visited[start] = true;
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            order.push(current);
            for next in 0..self.vertices {
                if self.adj[current][next] == 1 && !visited[next] {
                    visited[next] = true;
                    queue.push_back(next);
                }
            }
        }

        Ok(order)
    }

    /// Recursive depth-first traversal order from `start`.
    pub fn dfs_recursive(&self, start: usize) -> Result<Vec<usize>, DsaLabError> {
        self.check_vertex(start)?;

        let mut visited = vec![false; self.vertices];
        let mut order = Vec::new();
        self.dfs_visit(start, &mut visited, &mut order);
        Ok(order)
    }

    fn dfs_visit(&self, vertex: usize, visited: &mut [bool], order: &mut Vec<usize>) {
        visited[vertex] = true;
        order.push(vertex);
        for next in 0..self.vertices {
            if self.adj[vertex][next] == 1 && !visited[next] {
                self.dfs_visit(next, visited, order);
            }
        }
    }

    /// Iterative depth-first traversal using an explicit stack.
    pub fn dfs_iterative(&self, start: usize) -> Result<Vec<usize>, DsaLabError> {
        self.check_vertex(start)?;

        let mut visited = vec![false; self.vertices];
        let mut stack = vec![start];
        let mut order = Vec::new();

        while let Some(current) = stack.pop() {
            if !visited[current] {
                visited[current] = true;
                order.push(current);
            }
            // 逆序压栈，使访问顺序与递归版本一致
            for next in (0..self.vertices).rev() {
                if self.adj[current][next] == 1 && !visited[next] {
                    stack.push(next);
                }
            }
        }

        Ok(order)
    }

    /// A graph is connected when a DFS from vertex 0 reaches every vertex.
    pub fn is_connected(&self) -> bool {
        match self.dfs_recursive(0) {
            Ok(order) => order.len() == self.vertices,
            Err(_) => false,
        }
    }

    /// Adjacency matrix with row and column headers.
    pub fn render_matrix(&self) -> String {
        let mut out = String::from("   ");
        for i in 0..self.vertices {
            let _ = write!(out, "{:2} ", i);
        }
        out.push('\n');

        for i in 0..self.vertices {
            let _ = write!(out, "{:2}: ", i);
            for j in 0..self.vertices {
                let _ = write!(out, "{:2} ", self.adj[i][j]);
            }
            out.push('\n');
        }
        out
    }
}

fn display_graph(graph: &Graph) {
    println!("\nAdjacency Matrix:");
    print!("{}", graph.render_matrix());
}

fn show_traversal(label: &str, start: usize, result: Result<Vec<usize>, DsaLabError>) {
    match result {
        Ok(order) => {
            println!("\n{} starting from vertex {}:", label, start);
            let parts: Vec<String> = order.iter().map(usize::to_string).collect();
            println!("{}", parts.join(" "));
        }
        Err(e) => print_error!("{}", e.message()),
    }
}

fn connectivity_verdict(graph: &Graph) {
    println!(
        "Graph is {}",
        if graph.is_connected() {
            "connected"
        } else {
            "not connected"
        }
    );
}

/// Fixed walkthrough on the 6-vertex grid graph, then interactive graph entry.
pub fn run(interactive: bool) -> Result<(), DsaLabError> {
    banner("GRAPH TRAVERSAL (BFS & DFS)\nUsing Adjacency Matrix");
    println!();

    println!("Creating example graph with 6 vertices:\n");
    let mut graph = Graph::new(6)?;
    for (src, dest) in [(0, 1), (0, 3), (1, 2), (1, 4), (2, 5), (3, 4), (4, 5)] {
        graph.add_edge(src, dest)?;
    }

    println!("Graph Structure:");
    println!("    0 --- 1 --- 2");
    println!("    |     |     |");
    println!("    3 --- 4 --- 5");

    display_graph(&graph);

    show_traversal("BFS Traversal", 0, graph.bfs(0));
    show_traversal("BFS Traversal", 2, graph.bfs(2));
    show_traversal("DFS Traversal (Recursive)", 0, graph.dfs_recursive(0));
    show_traversal("DFS Traversal (Recursive)", 2, graph.dfs_recursive(2));
    show_traversal("DFS Traversal (Iterative)", 0, graph.dfs_iterative(0));

    println!();
    connectivity_verdict(&graph);

    if !interactive {
        return Ok(());
    }

    println!("\n=========================================");
    println!("Create your own graph:");
    println!("=========================================");

    let Some(vertices) = prompt_usize(&format!("Enter number of vertices (1-{}): ", MAX_VERTICES))
    else {
        return Ok(());
    };
    let mut user_graph = Graph::new(vertices)?;

    let Some(edges) = prompt_usize("Enter number of edges: ") else {
        return Ok(());
    };

    println!("Enter edges (source destination):");
    for i in 0..edges {
        let Some(pair) = prompt_numbers(&format!("Edge {}: ", i + 1), 2) else {
            return Ok(());
        };
        if pair[0] < 0 || pair[1] < 0 {
            print_error!("Invalid vertices!");
            continue;
        }
        if let Err(e) = user_graph.add_edge(pair[0] as usize, pair[1] as usize) {
            print_error!("Invalid vertices! ({})", e.message());
        }
    }

    display_graph(&user_graph);

    loop {
        println!();
        println!("1. BFS Traversal");
        println!("2. DFS Traversal (Recursive)");
        println!("3. DFS Traversal (Iterative)");
        println!("4. Check if connected");
        println!("5. Display graph");
        println!("6. Exit");
        let Some(choice) = prompt_usize("Enter choice: ") else {
            break;
        };

        match choice {
            1 => {
                let Some(start) = prompt_usize("Enter starting vertex: ") else {
                    break;
                };
                show_traversal("BFS Traversal", start, user_graph.bfs(start));
            }
            2 => {
                let Some(start) = prompt_usize("Enter starting vertex: ") else {
                    break;
                };
                show_traversal(
                    "DFS Traversal (Recursive)",
                    start,
                    user_graph.dfs_recursive(start),
                );
            }
            3 => {
                let Some(start) = prompt_usize("Enter starting vertex: ") else {
                    break;
                };
                show_traversal(
                    "DFS Traversal (Iterative)",
                    start,
                    user_graph.dfs_iterative(start),
                );
            }
            4 => connectivity_verdict(&user_graph),
            5 => display_graph(&user_graph),
            6 => {
                println!("Exiting...");
                break;
            }
            _ => print_error!("Invalid choice!"),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_graph() -> Graph {
        let mut graph = Graph::new(6).unwrap();
        for (src, dest) in [(0, 1), (0, 3), (1, 2), (1, 4), (2, 5), (3, 4), (4, 5)] {
            graph.add_edge(src, dest).unwrap();
        }
        graph
    }

    #[test]
    fn bfs_visits_in_breadth_order() {
        let graph = demo_graph();
        assert_eq!(graph.bfs(0).unwrap(), vec![0, 1, 3, 2, 4, 5]);
        assert_eq!(graph.bfs(2).unwrap(), vec![2, 1, 5, 0, 4, 3]);
    }

    #[test]
    fn dfs_visits_in_depth_order() {
        let graph = demo_graph();
        assert_eq!(graph.dfs_recursive(0).unwrap(), vec![0, 1, 2, 5, 4, 3]);
    }

    #[test]
    fn iterative_dfs_matches_recursive_dfs() {
        let graph = demo_graph();
        for start in 0..graph.vertices() {
            assert_eq!(
                graph.dfs_iterative(start).unwrap(),
                graph.dfs_recursive(start).unwrap(),
                "orders diverge from start {}",
                start
            );
        }
    }

    #[test]
    fn traversals_visit_each_vertex_exactly_once() {
        let graph = demo_graph();
        let mut order = graph.bfs(0).unwrap();
        order.sort_unstable();
        assert_eq!(order, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn connectivity_detection() {
        let graph = demo_graph();
        assert!(graph.is_connected());

        let mut split = Graph::new(4).unwrap();
        split.add_edge(0, 1).unwrap();
        split.add_edge(2, 3).unwrap();
        assert!(!split.is_connected());
    }

    #[test]
    fn edges_are_undirected() {
        let mut graph = Graph::new(3).unwrap();
        graph.add_edge(0, 2).unwrap();
        assert!(graph.has_edge(0, 2));
        assert!(graph.has_edge(2, 0));
        assert!(!graph.has_edge(0, 1));
    }

    #[test]
    fn out_of_range_vertices_are_rejected() {
        let mut graph = Graph::new(3).unwrap();
        assert_eq!(graph.add_edge(0, 3).unwrap_err().code(), "E004");
        assert!(graph.bfs(5).is_err());
        assert!(Graph::new(0).is_err());
        assert!(Graph::new(MAX_VERTICES + 1).is_err());
    }
}
