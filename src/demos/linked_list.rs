//! Singly linked-list reversal, three ways
//!
//! The list owns its nodes through `Option<Box<Node>>` links. Reverse
//! traversal is shown twice (recursively, and iteratively through a collected
//! buffer) and the list itself can be reversed in place by pointer rewiring.

use colored::Colorize;

use crate::errors::DsaLabError;
use crate::utils::terminal::{banner, prompt_i32, prompt_usize, rule};
use crate::{print_error, print_success};

struct Node {
    data: i32,
    next: Option<Box<Node>>,
}

#[derive(Default)]
pub struct SinglyLinkedList {
    head: Option<Box<Node>>,
}

impl SinglyLinkedList {
    pub fn new() -> Self {
        Self { head: None }
    }

    /// Append a value by walking to the tail.
    pub fn push_back(&mut self, data: i32) {
        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }
        *cursor = Some(Box::new(Node { data, next: None }));
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn len(&self) -> usize {
        self.values().len()
    }

    /// Snapshot of the payloads in forward order.
    pub fn values(&self) -> Vec<i32> {
        let mut out = Vec::new();
        let mut cursor = &self.head;
        while let Some(node) = cursor {
            out.push(node.data);
            cursor = &node.next;
        }
        out
    }

    /// In-place reversal by iterative pointer rewiring.
    pub fn reverse(&mut self) {
        let mut prev: Option<Box<Node>> = None;
        let mut current = self.head.take();

        while let Some(mut node) = current {
            current = node.next.take(); // store next node
            node.next = prev; // reverse the link
            prev = Some(node); // move prev forward
        }

        self.head = prev;
    }

    /// `10 -> 20 -> 30 -> NULL`
    pub fn render_forward(&self) -> String {
        let parts: Vec<String> = self.values().iter().map(i32::to_string).collect();
        format!("{} -> NULL", parts.join(" -> "))
    }

    /// `NULL <- 10 <- 20 <- 30`, built by recursing to the tail first.
    pub fn render_reverse_recursive(&self) -> String {
        fn walk(node: &Node, parts: &mut Vec<String>) {
            if let Some(next) = &node.next {
                walk(next, parts);
            }
            parts.push(node.data.to_string());
        }

        let mut parts = Vec::new();
        if let Some(head) = &self.head {
            walk(head, &mut parts);
        }
        format!("NULL <- {}", parts.join(" <- "))
    }

    /// Same rendering, but iteratively through a collected buffer.
    pub fn render_reverse_iterative(&self) -> String {
        let mut values = self.values();
        values.reverse();
        let parts: Vec<String> = values.iter().map(i32::to_string).collect();
        format!("NULL <- {}", parts.join(" <- "))
    }
}

fn display_forward(list: &SinglyLinkedList) {
    if list.is_empty() {
        println!("List is empty.");
    } else {
        println!("Forward: {}", list.render_forward());
    }
}

fn display_reverse_recursive(list: &SinglyLinkedList) {
    if list.is_empty() {
        println!("List is empty.");
    } else {
        println!("Reverse (Recursive): {}", list.render_reverse_recursive());
    }
}

fn display_reverse_iterative(list: &SinglyLinkedList) {
    if list.is_empty() {
        println!("List is empty.");
    } else {
        println!("Reverse (Iterative): {}", list.render_reverse_iterative());
    }
}

/// Fixed walkthrough on [10, 20, 30, 40, 50], then the interactive menu.
pub fn run(interactive: bool) -> Result<(), DsaLabError> {
    banner("LINKED LIST REVERSE TRAVERSAL");
    println!();

    println!("Creating linked list with values: 10, 20, 30, 40, 50\n");
    let mut list = SinglyLinkedList::new();
    for value in [10, 20, 30, 40, 50] {
        list.push_back(value);
    }

    println!("Original Linked List:");
    display_forward(&list);
    println!("Number of nodes: {}\n", list.len());

    println!("Reverse Traversal Methods:");
    rule();
    display_reverse_recursive(&list);
    display_reverse_iterative(&list);
    println!();

    println!("Reversing the actual linked list...");
    list.reverse();
    println!("After reversal:");
    display_forward(&list);
    println!();

    println!("Reversing back to original order...");
    list.reverse();
    println!("After reversal:");
    display_forward(&list);
    println!();

    if !interactive {
        return Ok(());
    }

    rule();
    println!("Add your own elements:");

    loop {
        println!();
        println!("1. Insert element");
        println!("2. Display forward");
        println!("3. Display reverse (Recursive)");
        println!("4. Display reverse (Iterative)");
        println!("5. Reverse the list");
        println!("6. Exit");
        let Some(choice) = prompt_usize("Enter choice: ") else {
            break;
        };

        match choice {
            1 => {
                let Some(value) = prompt_i32("Enter value to insert: ") else {
                    break;
                };
                list.push_back(value);
                print_success!("Inserted {}", value);
            }
            2 => display_forward(&list),
            3 => display_reverse_recursive(&list),
            4 => display_reverse_iterative(&list),
            5 => {
                list.reverse();
                println!("{}", "List reversed!".green());
                display_forward(&list);
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

#[cfg(test)]
mod tests {
    use super::*;

    fn build(values: &[i32]) -> SinglyLinkedList {
        let mut list = SinglyLinkedList::new();
        for &v in values {
            list.push_back(v);
        }
        list
    }

    #[test]
    fn push_back_preserves_order() {
        let list = build(&[10, 20, 30, 40, 50]);
        assert_eq!(list.values(), vec![10, 20, 30, 40, 50]);
        assert_eq!(list.len(), 5);
    }

    #[test]
    fn reverse_reverses_in_place() {
        let mut list = build(&[10, 20, 30, 40, 50]);
        list.reverse();
        assert_eq!(list.values(), vec![50, 40, 30, 20, 10]);
    }

    #[test]
    fn reverse_is_an_involution() {
        let mut list = build(&[1, 2, 3]);
        list.reverse();
        list.reverse();
        assert_eq!(list.values(), vec![1, 2, 3]);
    }

    #[test]
    fn reverse_of_empty_and_singleton() {
        let mut empty = SinglyLinkedList::new();
        empty.reverse();
        assert!(empty.is_empty());

        let mut one = build(&[7]);
        one.reverse();
        assert_eq!(one.values(), vec![7]);
    }

    #[test]
    fn render_formats_match_the_console_output() {
        let list = build(&[10, 20, 30]);
        assert_eq!(list.render_forward(), "10 -> 20 -> 30 -> NULL");
        assert_eq!(list.render_reverse_recursive(), "NULL <- 30 <- 20 <- 10");
    }

    #[test]
    fn recursive_and_iterative_renderings_agree() {
        let list = build(&[5, 1, 4, 2, 3]);
        assert_eq!(
            list.render_reverse_recursive(),
            list.render_reverse_iterative()
        );
    }
}
