//! Doubly linked-list insert, delete and traversal operations
//!
//! Nodes live in a slot arena and link to each other by index, which keeps
//! the textbook prev/next rewiring while staying in safe Rust. Freed slots
//! go on a free list and are reused by later insertions.

use colored::Colorize;

use crate::errors::DsaLabError;
use crate::utils::terminal::{banner, prompt_i32, prompt_usize, rule};
use crate::print_error;

#[derive(Debug, Clone, Copy)]
struct Node {
    data: i32,
    prev: Option<usize>,
    next: Option<usize>,
}

#[derive(Default)]
pub struct DoublyLinkedList {
    nodes: Vec<Node>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl DoublyLinkedList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    fn alloc(&mut self, data: i32) -> usize {
        let node = Node {
            data,
            prev: None,
            next: None,
        };
        match self.free.pop() {
            Some(idx) => {
                self.nodes[idx] = node;
                idx
            }
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        }
    }

    /// Index of the first node holding `data`, searching from the head.
    fn find(&self, data: i32) -> Option<usize> {
        let mut cursor = self.head;
        while let Some(idx) = cursor {
            if self.nodes[idx].data == data {
                return Some(idx);
            }
            cursor = self.nodes[idx].next;
        }
        None
    }

    pub fn contains(&self, data: i32) -> bool {
        self.find(data).is_some()
    }

    pub fn push_front(&mut self, data: i32) {
        let idx = self.alloc(data);
        match self.head {
            Some(old_head) => {
                self.nodes[idx].next = Some(old_head);
                self.nodes[old_head].prev = Some(idx);
                self.head = Some(idx);
            }
            None => {
                self.head = Some(idx);
                self.tail = Some(idx);
            }
        }
        self.len += 1;
    }

    pub fn push_back(&mut self, data: i32) {
        let idx = self.alloc(data);
        match self.tail {
            Some(old_tail) => {
                self.nodes[idx].prev = Some(old_tail);
                self.nodes[old_tail].next = Some(idx);
                self.tail = Some(idx);
            }
            None => {
                self.head = Some(idx);
                self.tail = Some(idx);
            }
        }
        self.len += 1;
    }

    /// Insert `data` directly after the first node holding `target`.
    pub fn insert_after(&mut self, target: i32, data: i32) -> Result<(), DsaLabError> {
        let Some(at) = self.find(target) else {
            return Err(DsaLabError::not_found(format!(
                "Node with data {} not found",
                target
            )));
        };

        let idx = self.alloc(data);
        let after = self.nodes[at].next;

        self.nodes[idx].prev = Some(at);
        self.nodes[idx].next = after;

        match after {
            Some(next) => self.nodes[next].prev = Some(idx),
            None => self.tail = Some(idx),
        }
        self.nodes[at].next = Some(idx);
        self.len += 1;
        Ok(())
    }

    /// Insert `data` directly before the first node holding `target`.
    pub fn insert_before(&mut self, target: i32, data: i32) -> Result<(), DsaLabError> {
        let Some(at) = self.find(target) else {
            return Err(DsaLabError::not_found(format!(
                "Node with data {} not found",
                target
            )));
        };

        let idx = self.alloc(data);
        let before = self.nodes[at].prev;

        self.nodes[idx].prev = before;
        self.nodes[idx].next = Some(at);

        match before {
            Some(prev) => self.nodes[prev].next = Some(idx),
            // 新节点成为头结点
            None => self.head = Some(idx),
        }
        self.nodes[at].prev = Some(idx);
        self.len += 1;
        Ok(())
    }

    /// Unlink and free the first node holding `data`.
    pub fn remove(&mut self, data: i32) -> Result<(), DsaLabError> {
        if self.is_empty() {
            return Err(DsaLabError::validation("List is empty"));
        }

        let Some(at) = self.find(data) else {
            return Err(DsaLabError::not_found(format!(
                "Node with data {} not found",
                data
            )));
        };

        let (prev, next) = (self.nodes[at].prev, self.nodes[at].next);

        match prev {
            Some(prev) => self.nodes[prev].next = next,
            None => self.head = next,
        }
        match next {
            Some(next) => self.nodes[next].prev = prev,
            None => self.tail = prev,
        }

        self.free.push(at);
        self.len -= 1;
        Ok(())
    }

    /// Payload snapshot walking head to tail.
    pub fn values_forward(&self) -> Vec<i32> {
        let mut out = Vec::with_capacity(self.len);
        let mut cursor = self.head;
        while let Some(idx) = cursor {
            out.push(self.nodes[idx].data);
            cursor = self.nodes[idx].next;
        }
        out
    }

    /// Payload snapshot walking tail to head.
    pub fn values_backward(&self) -> Vec<i32> {
        let mut out = Vec::with_capacity(self.len);
        let mut cursor = self.tail;
        while let Some(idx) = cursor {
            out.push(self.nodes[idx].data);
            cursor = self.nodes[idx].prev;
        }
        out
    }

    /// `NULL <-> 10 <-> 20 <-> NULL`
    pub fn render(&self, values: &[i32]) -> String {
        let parts: Vec<String> = values.iter().map(i32::to_string).collect();
        format!("NULL <-> {} <-> NULL", parts.join(" <-> "))
    }
}

fn display_forward(list: &DoublyLinkedList) {
    if list.is_empty() {
        println!("List is empty.");
    } else {
        println!("Forward: {}", list.render(&list.values_forward()));
    }
}

fn display_backward(list: &DoublyLinkedList) {
    if list.is_empty() {
        println!("List is empty.");
    } else {
        println!("Backward: {}", list.render(&list.values_backward()));
    }
}

fn report(result: Result<(), DsaLabError>, success: String) {
    match result {
        Ok(()) => println!("{}", success.green()),
        Err(e) => print_error!("{}!", e.message()),
    }
}

/// Fixed CRUD walkthrough, then the nine-option interactive menu.
pub fn run(interactive: bool) -> Result<(), DsaLabError> {
    banner("DOUBLY LINKED LIST IMPLEMENTATION");
    println!();

    println!("Creating doubly linked list with values: 10, 20, 30, 40, 50\n");
    let mut list = DoublyLinkedList::new();
    for value in [10, 20, 30, 40, 50] {
        list.push_back(value);
    }

    println!("Initial List:");
    display_forward(&list);
    display_backward(&list);
    println!("Number of nodes: {}\n", list.len());

    rule();
    println!("Insert Operations:");
    rule();
    report(list.insert_after(30, 35), "Inserted 35 after node with value 30".into());
    display_forward(&list);
    println!();

    report(list.insert_after(50, 60), "Inserted 60 after node with value 50".into());
    display_forward(&list);
    println!();

    report(list.insert_before(10, 5), "Inserted 5 before node with value 10".into());
    display_forward(&list);
    println!();

    rule();
    println!("Delete Operations:");
    rule();
    report(list.remove(35), "Deleted node with value 35".into());
    display_forward(&list);
    println!();

    report(list.remove(5), "Deleted node with value 5".into());
    display_forward(&list);
    println!();

    report(list.remove(60), "Deleted node with value 60".into());
    display_forward(&list);
    display_backward(&list);
    println!();

    if !interactive {
        return Ok(());
    }

    rule();
    println!("Interactive Menu:");
    rule();

    loop {
        println!();
        println!("1. Insert at beginning");
        println!("2. Insert at end");
        println!("3. Insert after node");
        println!("4. Insert before node");
        println!("5. Delete node");
        println!("6. Display forward");
        println!("7. Display backward");
        println!("8. Count nodes");
        println!("9. Exit");
        let Some(choice) = prompt_usize("Enter choice: ") else {
            break;
        };

        match choice {
            1 => {
                let Some(value) = prompt_i32("Enter value: ") else {
                    break;
                };
                list.push_front(value);
                println!("Inserted {} at beginning", value);
                display_forward(&list);
            }
            2 => {
                let Some(value) = prompt_i32("Enter value: ") else {
                    break;
                };
                list.push_back(value);
                println!("Inserted {} at end", value);
                display_forward(&list);
            }
            3 => {
                let Some(target) = prompt_i32("Enter target node value: ") else {
                    break;
                };
                let Some(value) = prompt_i32("Enter new value: ") else {
                    break;
                };
                report(
                    list.insert_after(target, value),
                    format!("Inserted {} after node with value {}", value, target),
                );
                display_forward(&list);
            }
            4 => {
                let Some(target) = prompt_i32("Enter target node value: ") else {
                    break;
                };
                let Some(value) = prompt_i32("Enter new value: ") else {
                    break;
                };
                report(
                    list.insert_before(target, value),
                    format!("Inserted {} before node with value {}", value, target),
                );
                display_forward(&list);
            }
            5 => {
                let Some(value) = prompt_i32("Enter value to delete: ") else {
                    break;
                };
                report(
                    list.remove(value),
                    format!("Deleted node with value {}", value),
                );
                display_forward(&list);
            }
            6 => display_forward(&list),
            7 => display_backward(&list),
            8 => println!("Number of nodes: {}", list.len()),
            9 => {
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

    fn build(values: &[i32]) -> DoublyLinkedList {
        let mut list = DoublyLinkedList::new();
        for &v in values {
            list.push_back(v);
        }
        list
    }

    fn assert_mirrored(list: &DoublyLinkedList) {
        let mut backward = list.values_backward();
        backward.reverse();
        assert_eq!(list.values_forward(), backward);
    }

    #[test]
    fn push_front_and_back() {
        let mut list = DoublyLinkedList::new();
        list.push_back(20);
        list.push_front(10);
        list.push_back(30);
        assert_eq!(list.values_forward(), vec![10, 20, 30]);
        assert_mirrored(&list);
    }

    #[test]
    fn insert_after_middle_and_tail() {
        let mut list = build(&[10, 20, 30]);
        list.insert_after(20, 25).unwrap();
        list.insert_after(30, 40).unwrap();
        assert_eq!(list.values_forward(), vec![10, 20, 25, 30, 40]);
        assert_mirrored(&list);
    }

    #[test]
    fn insert_before_head_moves_head() {
        let mut list = build(&[10, 20]);
        list.insert_before(10, 5).unwrap();
        assert_eq!(list.values_forward(), vec![5, 10, 20]);
        assert_mirrored(&list);
    }

    #[test]
    fn remove_head_middle_tail() {
        let mut list = build(&[5, 10, 20, 30, 40]);
        list.remove(5).unwrap(); // head
        list.remove(20).unwrap(); // middle
        list.remove(40).unwrap(); // tail
        assert_eq!(list.values_forward(), vec![10, 30]);
        assert_mirrored(&list);
    }

    #[test]
    fn remove_last_node_empties_the_list() {
        let mut list = build(&[7]);
        list.remove(7).unwrap();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert!(list.values_forward().is_empty());
    }

    #[test]
    fn missing_target_is_not_found() {
        let mut list = build(&[1, 2, 3]);
        assert_eq!(list.insert_after(9, 10).unwrap_err().code(), "E002");
        assert_eq!(list.insert_before(9, 10).unwrap_err().code(), "E002");
        assert_eq!(list.remove(9).unwrap_err().code(), "E002");
    }

    #[test]
    fn remove_on_empty_list_is_a_validation_error() {
        let mut list = DoublyLinkedList::new();
        assert_eq!(list.remove(1).unwrap_err().code(), "E001");
    }

    #[test]
    fn freed_slots_are_reused() {
        let mut list = build(&[1, 2, 3]);
        list.remove(2).unwrap();
        let slots_before = list.nodes.len();
        list.push_back(4);
        assert_eq!(list.nodes.len(), slots_before);
        assert_eq!(list.values_forward(), vec![1, 3, 4]);
        assert_mirrored(&list);
    }

    #[test]
    fn demo_sequence_matches_the_walkthrough() {
        let mut list = build(&[10, 20, 30, 40, 50]);
        list.insert_after(30, 35).unwrap();
        list.insert_after(50, 60).unwrap();
        list.insert_before(10, 5).unwrap();
        assert_eq!(list.values_forward(), vec![5, 10, 20, 30, 35, 40, 50, 60]);

        list.remove(35).unwrap();
        list.remove(5).unwrap();
        list.remove(60).unwrap();
        assert_eq!(list.values_forward(), vec![10, 20, 30, 40, 50]);
        assert_mirrored(&list);
    }
}
