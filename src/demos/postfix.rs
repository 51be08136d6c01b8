//! Infix to postfix conversion and evaluation
//!
//! Conversion is the shunting-yard algorithm with an operator stack;
//! evaluation runs the result through an operand stack. Operands are single
//! alphanumeric characters (digits when evaluating), operators are
//! `+ - * / ^` with `^` binding tightest and associating right.

use colored::Colorize;

use crate::errors::DsaLabError;
use crate::utils::terminal::{banner, read_line, rule};

pub fn is_operator(ch: char) -> bool {
    matches!(ch, '+' | '-' | '*' | '/' | '^')
}

pub fn precedence(op: char) -> u8 {
    match op {
        '^' => 3,
        '*' | '/' => 2,
        '+' | '-' => 1,
        _ => 0,
    }
}

fn is_right_associative(op: char) -> bool {
    op == '^'
}

/// Convert an infix expression to a space-separated postfix token string.
/// Whitespace in the input is skipped; unknown characters are ignored.
pub fn infix_to_postfix(infix: &str) -> String {
    let mut stack: Vec<char> = Vec::new();
    let mut output: Vec<String> = Vec::new();

    for current in infix.chars() {
        if current.is_whitespace() {
            continue;
        }

        if current.is_alphanumeric() {
            output.push(current.to_string());
        } else if current == '(' {
            stack.push(current);
        } else if current == ')' {
            // 弹出直到遇到左括号
            while let Some(&top) = stack.last() {
                if top == '(' {
                    break;
                }
                stack.pop();
                output.push(top.to_string());
            }
            stack.pop(); // discard '('
        } else if is_operator(current) {
            while let Some(&top) = stack.last() {
                let pops = top != '('
                    && (precedence(top) > precedence(current)
                        || (precedence(top) == precedence(current)
                            && !is_right_associative(current)));
                if !pops {
                    break;
                }
                stack.pop();
                output.push(top.to_string());
            }
            stack.push(current);
        }
    }

    while let Some(op) = stack.pop() {
        output.push(op.to_string());
    }

    output.join(" ")
}

/// Integer power with the truncating semantics of casting `pow()` to int:
/// negative exponents collapse to zero.
fn int_pow(base: i64, exp: i64) -> i64 {
    if exp < 0 {
        return 0;
    }
    base.saturating_pow(exp.min(u32::MAX as i64) as u32)
}

/// Evaluate a postfix expression over single-digit operands.
pub fn evaluate_postfix(postfix: &str) -> Result<i64, DsaLabError> {
    let mut stack: Vec<i64> = Vec::new();

    for current in postfix.chars() {
        if current.is_whitespace() {
            continue;
        }

        if let Some(digit) = current.to_digit(10) {
            stack.push(i64::from(digit));
        } else if is_operator(current) {
            let rhs = stack.pop().ok_or_else(|| {
                DsaLabError::validation("postfix expression underflows the operand stack")
            })?;
            let lhs = stack.pop().ok_or_else(|| {
                DsaLabError::validation("postfix expression underflows the operand stack")
            })?;

            let value = match current {
                '+' => lhs + rhs,
                '-' => lhs - rhs,
                '*' => lhs * rhs,
                '/' => {
                    if rhs == 0 {
                        return Err(DsaLabError::division_by_zero(
                            "division by zero while evaluating postfix expression",
                        ));
                    }
                    lhs / rhs
                }
                '^' => int_pow(lhs, rhs),
                _ => {
                    return Err(DsaLabError::validation(format!(
                        "unknown operator '{}'",
                        current
                    )));
                }
            };
            stack.push(value);
        } else {
            return Err(DsaLabError::validation(format!(
                "unexpected token '{}' in postfix expression",
                current
            )));
        }
    }

    stack
        .pop()
        .ok_or_else(|| DsaLabError::validation("empty postfix expression"))
}

fn convert_and_display(infix: &str) {
    println!("Infix Expression:   {}", infix);

    let postfix = infix_to_postfix(infix);
    println!("Postfix Expression: {}", postfix.cyan());

    match evaluate_postfix(&postfix) {
        Ok(result) => println!("Evaluation Result:  {}", result.to_string().green().bold()),
        Err(e) => println!("Evaluation Result:  {}", e.format_simple().red()),
    }
}

/// Fixed test cases followed by one interactive conversion.
pub fn run(interactive: bool) -> Result<(), DsaLabError> {
    banner("INFIX TO POSTFIX CONVERTER & EVALUATOR");
    println!();

    let test_cases = ["3+4*2", "3+4*2/(1-5)^2", "(3+4)*2", "5+3*2-8/4", "2^3^2"];

    for (i, infix) in test_cases.iter().enumerate() {
        println!("Test Case {}:", i + 1);
        convert_and_display(infix);
        rule();
        println!();
    }

    if interactive {
        if let Some(infix) = read_line("Enter your infix expression (digits and operators only): ")
        {
            println!();
            convert_and_display(&infix);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversion_matches_textbook_output() {
        assert_eq!(infix_to_postfix("3+4*2"), "3 4 2 * +");
        assert_eq!(infix_to_postfix("(3+4)*2"), "3 4 + 2 *");
        assert_eq!(infix_to_postfix("5+3*2-8/4"), "5 3 2 * + 8 4 / -");
    }

    #[test]
    fn exponent_is_right_associative() {
        assert_eq!(infix_to_postfix("2^3^2"), "2 3 2 ^ ^");
    }

    #[test]
    fn mixed_precedence_with_parentheses() {
        assert_eq!(infix_to_postfix("3+4*2/(1-5)^2"), "3 4 2 * 1 5 - 2 ^ / +");
    }

    #[test]
    fn whitespace_is_skipped() {
        assert_eq!(infix_to_postfix(" 3 + 4 * 2 "), "3 4 2 * +");
    }

    #[test]
    fn evaluation_of_fixed_cases() {
        assert_eq!(evaluate_postfix(&infix_to_postfix("3+4*2")).ok(), Some(11));
        assert_eq!(
            evaluate_postfix(&infix_to_postfix("3+4*2/(1-5)^2")).ok(),
            Some(3)
        );
        assert_eq!(evaluate_postfix(&infix_to_postfix("(3+4)*2")).ok(), Some(14));
        assert_eq!(
            evaluate_postfix(&infix_to_postfix("5+3*2-8/4")).ok(),
            Some(9)
        );
        assert_eq!(evaluate_postfix(&infix_to_postfix("2^3^2")).ok(), Some(512));
    }

    #[test]
    fn division_by_zero_is_an_error() {
        let err = evaluate_postfix(&infix_to_postfix("1/0")).unwrap_err();
        assert_eq!(err.code(), "E005");
    }

    #[test]
    fn operand_underflow_is_an_error() {
        assert!(evaluate_postfix("+").is_err());
        assert!(evaluate_postfix("1 +").is_err());
    }

    #[test]
    fn empty_expression_is_an_error() {
        assert!(evaluate_postfix("").is_err());
    }
}
