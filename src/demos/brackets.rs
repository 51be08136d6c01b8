//! Balanced parentheses checking with a character stack
//!
//! Opening brackets are pushed, closing brackets must match the top of the
//! stack, and the expression is balanced iff the stack ends empty.

use colored::Colorize;

use crate::errors::DsaLabError;
use crate::utils::terminal::{banner, read_line, rule};

/// Longest expression the checker accepts, matching the classroom limit.
pub const MAX_SIZE: usize = 100;

fn is_opening(ch: char) -> bool {
    matches!(ch, '(' | '[' | '{')
}

fn is_closing(ch: char) -> bool {
    matches!(ch, ')' | ']' | '}')
}

fn is_matching_pair(opening: char, closing: char) -> bool {
    matches!((opening, closing), ('(', ')') | ('[', ']') | ('{', '}'))
}

/// Core balance check. Non-bracket characters are ignored.
pub fn is_balanced(expression: &str) -> bool {
    let mut stack: Vec<char> = Vec::new();

    for current in expression.chars() {
        if is_opening(current) {
            stack.push(current);
        } else if is_closing(current) {
            match stack.pop() {
                Some(top) if is_matching_pair(top, current) => {}
                // 没有匹配的开括号，或括号类型不匹配
                _ => return false,
            }
        }
    }

    stack.is_empty()
}

/// Length-validated entry point used by the interactive session.
pub fn check(expression: &str) -> Result<bool, DsaLabError> {
    if expression.chars().count() > MAX_SIZE {
        return Err(DsaLabError::validation(format!(
            "expression exceeds {} characters",
            MAX_SIZE
        )));
    }
    Ok(is_balanced(expression))
}

fn check_and_display(expression: &str) {
    println!("\nExpression: {}", expression);

    match check(expression) {
        Ok(true) => println!("Result: {}", "BALANCED ✓".green().bold()),
        Ok(false) => println!("Result: {}", "NOT BALANCED ✗".red().bold()),
        Err(e) => println!("Result: {}", e.format_simple().red()),
    }
    rule();
}

/// Fixed demonstration followed by one interactive check.
pub fn run(interactive: bool) -> Result<(), DsaLabError> {
    banner("BALANCED PARENTHESES CHECKER");

    // Test expressions from the assignment, plus two extra cases
    let samples = [
        "a + (b - c) * (d",
        "m + [a - b * (c + d * {m)]",
        "a + (b - c)",
        "{[()]}",
        "((a + b) * (c - d))",
    ];

    for expression in samples {
        check_and_display(expression);
    }

    if interactive {
        if let Some(expression) = read_line("\nEnter your own expression (max 100 chars): ") {
            check_and_display(&expression);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assignment_expressions() {
        assert!(!is_balanced("a + (b - c) * (d"));
        assert!(!is_balanced("m + [a - b * (c + d * {m)]"));
        assert!(is_balanced("a + (b - c)"));
        assert!(is_balanced("{[()]}"));
        assert!(is_balanced("((a + b) * (c - d))"));
    }

    #[test]
    fn empty_expression_is_balanced() {
        assert!(is_balanced(""));
        assert!(is_balanced("no brackets at all"));
    }

    #[test]
    fn lone_closer_is_unbalanced() {
        assert!(!is_balanced(")"));
        assert!(!is_balanced("a + b)"));
    }

    #[test]
    fn interleaved_pairs_are_unbalanced() {
        assert!(!is_balanced("([)]"));
        assert!(!is_balanced("{(})"));
    }

    #[test]
    fn unclosed_opener_is_unbalanced() {
        assert!(!is_balanced("((("));
        assert!(!is_balanced("{[("));
    }

    #[test]
    fn length_limit_is_enforced() {
        let long = "(".repeat(MAX_SIZE + 1);
        assert!(check(&long).is_err());

        let exactly = "()".repeat(MAX_SIZE / 2);
        assert_eq!(check(&exactly).ok(), Some(true));
    }
}
