//! Binary min/max heap construction and validation
//!
//! One array-backed implementation serves both orderings: `HeapKind` decides
//! whether a parent must be <= or >= its children. Building from a slice uses
//! bottom-up heapify from the last internal node; insertion sifts up.

use std::fmt::Write as _;

use colored::Colorize;

use crate::errors::DsaLabError;
use crate::utils::terminal::{banner, prompt_i32, prompt_usize, prompt_values, rule};
use crate::{print_error, print_success};

/// Classroom capacity bound carried over from the original exercise.
pub const MAX_SIZE: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapKind {
    Min,
    Max,
}

impl HeapKind {
    pub fn label(&self) -> &'static str {
        match self {
            HeapKind::Min => "Min",
            HeapKind::Max => "Max",
        }
    }
}

#[derive(Debug)]
pub struct BinaryHeap {
    kind: HeapKind,
    data: Vec<i32>,
}

fn parent(i: usize) -> usize {
    (i - 1) / 2
}

fn left_child(i: usize) -> usize {
    2 * i + 1
}

fn right_child(i: usize) -> usize {
    2 * i + 2
}

impl BinaryHeap {
    pub fn new(kind: HeapKind) -> Self {
        Self {
            kind,
            data: Vec::new(),
        }
    }

    /// Build a heap from `values` by heapifying every internal node,
    /// last to first.
    pub fn build(kind: HeapKind, values: &[i32]) -> Result<Self, DsaLabError> {
        if values.len() > MAX_SIZE {
            return Err(DsaLabError::capacity_exceeded(format!(
                "array of {} elements exceeds the heap capacity of {}",
                values.len(),
                MAX_SIZE
            )));
        }

        let mut heap = Self {
            kind,
            data: values.to_vec(),
        };
        for i in (0..heap.data.len() / 2).rev() {
            heap.sift_down(i);
        }
        Ok(heap)
    }

    pub fn kind(&self) -> HeapKind {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn peek(&self) -> Option<i32> {
        self.data.first().copied()
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.data
    }

    /// True when `a` may be the parent of `b` under this heap's ordering.
    fn ordered(&self, a: i32, b: i32) -> bool {
        match self.kind {
            HeapKind::Min => a <= b,
            HeapKind::Max => a >= b,
        }
    }

    /// Insert a value and restore the heap property by sifting up.
    pub fn insert(&mut self, value: i32) -> Result<(), DsaLabError> {
        if self.data.len() >= MAX_SIZE {
            return Err(DsaLabError::capacity_exceeded("Heap is full"));
        }
        self.data.push(value);
        self.sift_up(self.data.len() - 1);
        Ok(())
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let p = parent(index);
            if self.ordered(self.data[p], self.data[index]) {
                break;
            }
            self.data.swap(p, index);
            index = p;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let n = self.data.len();
        loop {
            let mut best = index;
            let left = left_child(index);
            let right = right_child(index);

            if left < n && !self.ordered(self.data[best], self.data[left]) {
                best = left;
            }
            if right < n && !self.ordered(self.data[best], self.data[right]) {
                best = right;
            }
            if best == index {
                break;
            }
            self.data.swap(index, best);
            index = best;
        }
    }

    /// Verify the parent/child ordering for every index.
    pub fn is_valid(&self) -> bool {
        let n = self.data.len();
        for i in 0..n {
            let left = left_child(i);
            let right = right_child(i);
            if left < n && !self.ordered(self.data[i], self.data[left]) {
                return false;
            }
            if right < n && !self.ordered(self.data[i], self.data[right]) {
                return false;
            }
        }
        true
    }

    /// Level-order rendering: one line per tree level, node counts doubling.
    pub fn render_tree(&self) -> String {
        if self.data.is_empty() {
            return "Empty heap\n".to_string();
        }

        let mut out = String::new();
        let mut level = 0;
        let mut nodes_in_level = 1;
        let mut index = 0;

        while index < self.data.len() {
            let _ = write!(out, "Level {}: ", level);
            for _ in 0..nodes_in_level {
                if index >= self.data.len() {
                    break;
                }
                let _ = write!(out, "{} ", self.data[index]);
                index += 1;
            }
            out.push('\n');
            level += 1;
            nodes_in_level *= 2;
        }
        out
    }
}

fn display_heap(heap: &BinaryHeap) {
    let parts: Vec<String> = heap.as_slice().iter().map(i32::to_string).collect();
    println!("{} Heap: {}", heap.kind().label(), parts.join(" "));
}

fn display_heap_tree(heap: &BinaryHeap) {
    println!("\n{} Heap Tree Structure:", heap.kind().label());
    rule();
    print!("{}", heap.render_tree());
    rule();
}

fn validity_verdict(heap: &BinaryHeap) {
    let verdict = if heap.is_valid() {
        "YES".green().bold()
    } else {
        "NO".red().bold()
    };
    println!("{} Heap Valid: {}", heap.kind().label(), verdict);
}

fn demo_case(label: &str, values: &[i32], with_trees: bool) -> Result<(), DsaLabError> {
    println!("{}:", label);
    rule();
    let parts: Vec<String> = values.iter().map(i32::to_string).collect();
    println!("Original Array: {}\n", parts.join(" "));

    let min_heap = BinaryHeap::build(HeapKind::Min, values)?;
    display_heap(&min_heap);
    if with_trees {
        display_heap_tree(&min_heap);
        validity_verdict(&min_heap);
        println!();
    }

    let max_heap = BinaryHeap::build(HeapKind::Max, values)?;
    display_heap(&max_heap);
    if with_trees {
        display_heap_tree(&max_heap);
        validity_verdict(&max_heap);
    }
    println!();
    Ok(())
}

/// Three fixed build demonstrations, then the interactive heap workshop.
pub fn run(interactive: bool) -> Result<(), DsaLabError> {
    banner("MIN HEAP AND MAX HEAP IMPLEMENTATION");
    println!();

    demo_case("Test Case 1", &[15, 10, 20, 8, 12, 25, 6], true)?;
    demo_case("Test Case 2", &[4, 10, 3, 5, 1], true)?;
    demo_case("Test Case 3", &[50, 30, 20, 15, 10, 8, 16], false)?;

    if !interactive {
        return Ok(());
    }

    println!("=========================================");
    println!("Create your own heap:");
    println!("=========================================");

    let Some(count) = prompt_usize("Enter number of elements: ") else {
        return Ok(());
    };
    if count == 0 || count > MAX_SIZE {
        return Err(DsaLabError::validation(format!(
            "element count must be between 1 and {}",
            MAX_SIZE
        )));
    }

    let Some(values) = prompt_values(&format!("Enter {} elements:", count), count) else {
        return Ok(());
    };

    let mut min_heap = BinaryHeap::new(HeapKind::Min);
    let mut max_heap = BinaryHeap::new(HeapKind::Max);

    loop {
        println!();
        println!("1. Build Min Heap");
        println!("2. Build Max Heap");
        println!("3. Insert into Min Heap");
        println!("4. Insert into Max Heap");
        println!("5. Display heaps");
        println!("6. Exit");
        let Some(choice) = prompt_usize("Enter choice: ") else {
            break;
        };

        match choice {
            1 => {
                min_heap = BinaryHeap::build(HeapKind::Min, &values)?;
                print_success!("Min Heap built successfully!");
                display_heap(&min_heap);
                display_heap_tree(&min_heap);
            }
            2 => {
                max_heap = BinaryHeap::build(HeapKind::Max, &values)?;
                print_success!("Max Heap built successfully!");
                display_heap(&max_heap);
                display_heap_tree(&max_heap);
            }
            3 => {
                let Some(value) = prompt_i32("Enter value to insert: ") else {
                    break;
                };
                match min_heap.insert(value) {
                    Ok(()) => {
                        print_success!("Inserted {} into Min Heap", value);
                        display_heap(&min_heap);
                    }
                    Err(e) => print_error!("{}!", e.message()),
                }
            }
            4 => {
                let Some(value) = prompt_i32("Enter value to insert: ") else {
                    break;
                };
                match max_heap.insert(value) {
                    Ok(()) => {
                        print_success!("Inserted {} into Max Heap", value);
                        display_heap(&max_heap);
                    }
                    Err(e) => print_error!("{}!", e.message()),
                }
            }
            5 => {
                println!("\nCurrent Heaps:");
                display_heap(&min_heap);
                display_heap(&max_heap);
            }
            6 => {
                println!("Exiting...");
                break;
            }
            _ => print_error!("Invalid choice!"),
        }
    }

    Ok(())
}
