//! Line-oriented prompt helpers for the interactive menus
//!
//! Every demo reads its menu choices and values through these functions.
//! `None` always means EOF on stdin, which the menu loops treat as "exit".

use std::io::{self, BufRead, Write};

use colored::Colorize;

use crate::print_warning;

/// Print a prompt and read one line from stdin. Returns None on EOF.
pub fn read_line(prompt: &str) -> Option<String> {
    print!("{}", prompt);
    io::stdout().flush().ok();

    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
        Err(_) => None,
    }
}

/// Prompt until the user enters a valid i32. Returns None on EOF.
pub fn prompt_i32(prompt: &str) -> Option<i32> {
    loop {
        let line = read_line(prompt)?;
        match line.trim().parse::<i32>() {
            Ok(value) => return Some(value),
            Err(_) => print_warning!("Please enter a whole number"),
        }
    }
}

/// Prompt until the user enters a valid non-negative integer. None on EOF.
pub fn prompt_usize(prompt: &str) -> Option<usize> {
    loop {
        let line = read_line(prompt)?;
        match line.trim().parse::<usize>() {
            Ok(value) => return Some(value),
            Err(_) => print_warning!("Please enter a non-negative whole number"),
        }
    }
}

/// Prompt for exactly `count` whitespace-separated integers on one line.
/// Re-prompts on malformed input; returns None on EOF.
pub fn prompt_numbers(prompt: &str, count: usize) -> Option<Vec<i64>> {
    loop {
        let line = read_line(prompt)?;
        let parsed: Result<Vec<i64>, _> = line.split_whitespace().map(str::parse).collect();
        match parsed {
            Ok(values) if values.len() == count => return Some(values),
            _ => print_warning!("Expected {} numbers separated by spaces", count),
        }
    }
}

/// Collect `count` integers, accepting any number of values per line
/// (scanf-style whitespace separation). Returns None on EOF.
pub fn prompt_values(prompt: &str, count: usize) -> Option<Vec<i32>> {
    println!("{}", prompt);
    let mut values = Vec::with_capacity(count);
    while values.len() < count {
        let line = read_line("")?;
        for token in line.split_whitespace() {
            if values.len() == count {
                break;
            }
            match token.parse::<i32>() {
                Ok(value) => values.push(value),
                Err(_) => print_warning!("Skipping '{}': not a whole number", token),
            }
        }
    }
    Some(values)
}

/// Print a ruled banner, the way every program announces itself.
/// Multi-line titles render one centered-ish line each.
pub fn banner(title: &str) {
    println!("{}", "=========================================".cyan());
    for line in title.lines() {
        println!("{}", format!("  {}", line).bold().cyan());
    }
    println!("{}", "=========================================".cyan());
}

/// Section separator line.
pub fn rule() {
    println!("-------------------------------------------");
}
