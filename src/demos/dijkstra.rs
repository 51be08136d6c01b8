//! Dijkstra's shortest-path algorithm over a weighted adjacency matrix
//!
//! The textbook O(V^2) form: every round selects the unvisited vertex with
//! the smallest tentative distance by linear scan, then relaxes its
//! neighbors. Each round is recorded as a trace step so the demo can replay
//! the algorithm step by step. Absent edges are `None`; weights are unsigned,
//! so the negative-weight restriction is enforced at input time.

use std::fmt::Write as _;

use colored::Colorize;

use crate::errors::DsaLabError;
use crate::utils::terminal::{banner, prompt_numbers, prompt_usize};
use crate::{print_error, print_warning};

pub const MAX_VERTICES: usize = 20;

pub struct WeightedGraph {
    vertices: usize,
    adj: [[Option<u32>; MAX_VERTICES]; MAX_VERTICES],
}

/// One relaxation performed while processing a selected vertex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relaxation {
    pub vertex: usize,
    pub old: Option<u64>,
    pub new: u64,
}

/// One round of the algorithm: the vertex selected and what it improved.
#[derive(Debug, Clone)]
pub struct TraceStep {
    pub selected: usize,
    pub distance: u64,
    pub relaxations: Vec<Relaxation>,
}

/// Result of a full run from one source.
#[derive(Debug)]
pub struct ShortestPaths {
    pub source: usize,
    pub dist: Vec<Option<u64>>,
    pub parent: Vec<Option<usize>>,
    pub trace: Vec<TraceStep>,
}

impl ShortestPaths {
    /// Reconstruct the path source -> ... -> vertex by walking parents.
    /// Empty when the vertex is unreachable.
    pub fn path_to(&self, vertex: usize) -> Vec<usize> {
        if self.dist.get(vertex).copied().flatten().is_none() {
            return Vec::new();
        }

        let mut path = vec![vertex];
        let mut current = vertex;
        while let Some(parent) = self.parent[current] {
            path.push(parent);
            current = parent;
        }
        path.reverse();
        path
    }
}

impl WeightedGraph {
    pub fn new(vertices: usize) -> Result<Self, DsaLabError> {
        if vertices == 0 || vertices > MAX_VERTICES {
            return Err(DsaLabError::invalid_vertex(format!(
                "vertex count must be between 1 and {}",
                MAX_VERTICES
            )));
        }

        let mut adj = [[None; MAX_VERTICES]; MAX_VERTICES];
        // 自身距离为 0
        for (i, row) in adj.iter_mut().enumerate().take(vertices) {
            row[i] = Some(0);
        }

        Ok(Self { vertices, adj })
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

    /// Add an undirected weighted edge.
    pub fn add_edge(&mut self, src: usize, dest: usize, weight: u32) -> Result<(), DsaLabError> {
        self.check_vertex(src)?;
        self.check_vertex(dest)?;
        self.adj[src][dest] = Some(weight);
        self.adj[dest][src] = Some(weight);
        Ok(())
    }

    pub fn weight(&self, src: usize, dest: usize) -> Option<u32> {
        if src < self.vertices && dest < self.vertices {
            self.adj[src][dest]
        } else {
            None
        }
    }

    /// Weighted adjacency matrix with INF for absent edges.
    pub fn render_matrix(&self) -> String {
        let mut out = String::from("     ");
        for i in 0..self.vertices {
            let _ = write!(out, "{:4} ", i);
        }
        out.push('\n');

        for i in 0..self.vertices {
            let _ = write!(out, "{:4}: ", i);
            for j in 0..self.vertices {
                match self.adj[i][j] {
                    Some(w) => {
                        let _ = write!(out, "{:4} ", w);
                    }
                    None => out.push_str(" INF "),
                }
            }
            out.push('\n');
        }
        out
    }

    /// Textbook Dijkstra with a linear min-distance scan per round.
    pub fn shortest_paths(&self, source: usize) -> Result<ShortestPaths, DsaLabError> {
        self.check_vertex(source)?;

        let n = self.vertices;
        let mut dist: Vec<Option<u64>> = vec![None; n];
        let mut parent: Vec<Option<usize>> = vec![None; n];
        let mut visited = vec![false; n];
        let mut trace = Vec::new();

        dist[source] = Some(0);

        for _ in 0..n {
            // 在未访问顶点中找最小距离
            let selected = (0..n)
                .filter(|&v| !visited[v])
                .filter_map(|v| dist[v].map(|d| (v, d)))
                .min_by_key(|&(v, d)| (d, v));

            let Some((u, d_u)) = selected else {
                break; // no more reachable vertices
            };
            visited[u] = true;

            let mut relaxations = Vec::new();
            for v in 0..n {
                if visited[v] {
                    continue;
                }
                let Some(weight) = self.adj[u][v] else {
                    continue;
                };
                let candidate = d_u + u64::from(weight);
                if dist[v].is_none_or(|current| candidate < current) {
                    relaxations.push(Relaxation {
                        vertex: v,
                        old: dist[v],
                        new: candidate,
                    });
                    dist[v] = Some(candidate);
                    parent[v] = Some(u);
                }
            }

            trace.push(TraceStep {
                selected: u,
                distance: d_u,
                relaxations,
            });
        }

        Ok(ShortestPaths {
            source,
            dist,
            parent,
            trace,
        })
    }
}

fn render_path(path: &[usize]) -> String {
    let parts: Vec<String> = path.iter().map(usize::to_string).collect();
    parts.join(" -> ")
}

fn display_graph(graph: &WeightedGraph) {
    println!("\nWeighted Adjacency Matrix:");
    print!("{}", graph.render_matrix());
}

fn run_and_display(graph: &WeightedGraph, source: usize) {
    let paths = match graph.shortest_paths(source) {
        Ok(paths) => paths,
        Err(e) => {
            print_error!("{}", e.message());
            return;
        }
    };

    println!("\n===========================================");
    println!("{}", "Dijkstra's Algorithm - Step by Step".bold());
    println!("===========================================");
    println!("Source Vertex: {}\n", source);

    for (round, step) in paths.trace.iter().enumerate() {
        println!(
            "Step {}: Selected vertex {} (distance: {})",
            round + 1,
            step.selected,
            step.distance
        );
        for relax in &step.relaxations {
            match relax.old {
                Some(old) => println!("  -> Updated vertex {}: {} to {}", relax.vertex, old, relax.new),
                None => println!("  -> Updated vertex {}: INF to {}", relax.vertex, relax.new),
            }
        }
        println!();
    }

    println!("===========================================");
    println!("Final Shortest Paths from Source {}:", source);
    println!("===========================================");
    println!("Vertex    Distance    Path");
    println!("-------------------------------------------");

    for vertex in 0..graph.vertices() {
        match paths.dist[vertex] {
            Some(distance) => {
                println!(
                    "{:4}      {:4}       {}",
                    vertex,
                    distance,
                    render_path(&paths.path_to(vertex))
                );
            }
            None => println!("{:4}      INF        No path", vertex),
        }
    }
    println!("===========================================");
}

/// Fixed run on the 6-vertex weighted graph, then interactive graph entry.
pub fn run(interactive: bool) -> Result<(), DsaLabError> {
    banner("DIJKSTRA'S SHORTEST PATH ALGORITHM");
    println!();

    println!("Example Graph with 6 vertices:\n");
    let mut graph = WeightedGraph::new(6)?;
    for (src, dest, weight) in [
        (0, 1, 4),
        (0, 3, 1),
        (1, 2, 2),
        (2, 3, 3),
        (3, 4, 2),
        (3, 5, 1),
        (4, 5, 1),
    ] {
        graph.add_edge(src, dest, weight)?;
    }

    println!("Graph Structure:");
    println!("       1");
    println!("   (4)/ \\(2)");
    println!("     /   \\");
    println!("    0     2");
    println!("   (1)\\  /(3)");
    println!("       3");
    println!("      / \\(1)");
    println!("   (2)/   \\");
    println!("     4     5");
    println!("      \\(1)/");

    display_graph(&graph);

    run_and_display(&graph, 0);
    println!("\n");
    run_and_display(&graph, 2);

    if !interactive {
        return Ok(());
    }

    println!("\n\n=========================================");
    println!("Create your own weighted graph:");
    println!("=========================================");

    let Some(vertices) = prompt_usize(&format!("Enter number of vertices (1-{}): ", MAX_VERTICES))
    else {
        return Ok(());
    };
    let mut user_graph = WeightedGraph::new(vertices)?;

    let Some(edges) = prompt_usize("Enter number of edges: ") else {
        return Ok(());
    };

    println!("Enter edges (source destination weight):");
    for i in 0..edges {
        let Some(triple) = prompt_numbers(&format!("Edge {}: ", i + 1), 3) else {
            return Ok(());
        };
        if triple[2] < 0 {
            print_warning!("Dijkstra's algorithm doesn't work with negative weights!");
            continue;
        }
        if triple[0] < 0 || triple[1] < 0 {
            print_error!("Invalid vertices!");
            continue;
        }
        if let Err(e) =
            user_graph.add_edge(triple[0] as usize, triple[1] as usize, triple[2] as u32)
        {
            print_error!("Invalid vertices! ({})", e.message());
        }
    }

    display_graph(&user_graph);

    loop {
        println!();
        println!("1. Find shortest paths from a source");
        println!("2. Display graph");
        println!("3. Exit");
        let Some(choice) = prompt_usize("Enter choice: ") else {
            break;
        };

        match choice {
            1 => {
                let Some(source) = prompt_usize("Enter source vertex: ") else {
                    break;
                };
                run_and_display(&user_graph, source);
            }
            2 => display_graph(&user_graph),
            3 => {
                println!("Exiting...");
                break;
            }
            _ => print_error!("Invalid choice!"),
        }
    }

    Ok(())
}
