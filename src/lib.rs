//! # shunter
//!
//! shunter is an arithmetic expression evaluator written in Rust.
//! It tokenizes an infix expression, reorders it into postfix (Reverse
//! Polish) form with the shunting-yard algorithm, and evaluates the result
//! with a single stack pass.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::{Error, ParseError},
    interpreter::{evaluator::evaluate_postfix, lexer::tokenize, postfix::to_postfix},
};

/// Provides unified error types for tokenization, conversion, and evaluation.
///
/// This module defines all errors that can be raised while an expression is
/// tokenized, reordered into postfix form, or evaluated. It standardizes
/// error reporting and carries detailed information about failures, including
/// error kinds, offending tokens, and source offsets.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (conversion, evaluation).
/// - Attaches source offsets and offending token text for context.
/// - Supports integration with standard error handling traits and reporting
///   utilities.
pub mod error;
/// Orchestrates the entire process of expression evaluation.
///
/// This module ties together the lexer, the infix-to-postfix converter, and
/// the postfix evaluator to provide a complete pipeline for computing the
/// value of an arithmetic expression.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, converter, and evaluator.
/// - Provides the individual stage functions for callers that need them.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Evaluates an infix arithmetic expression and returns its value.
///
/// The expression may use the binary operators `+`, `-`, `*` and `/`,
/// floating-point literals, and parentheses for grouping. Multiplication and
/// division bind tighter than addition and subtraction; operators of equal
/// precedence associate left to right. All arithmetic is performed in `f64`.
///
/// Each call is independent: tokenization, conversion, and evaluation work on
/// state local to the call, so the function may be used concurrently from
/// any number of callers.
///
/// # Errors
/// Returns an error if the expression is empty, contains a token that is
/// neither a number, an operator, nor a parenthesis, closes a parenthesis
/// that was never opened, applies an operator to fewer than two operands,
/// divides by zero, or leaves more than one value behind after evaluation.
///
/// # Examples
/// ```
/// use shunter::evaluate;
///
/// assert_eq!(evaluate("3 + 2").unwrap(), 5.0);
/// assert_eq!(evaluate("2 + 3 * 4").unwrap(), 14.0);
/// assert_eq!(evaluate("(2 + 3) * 4").unwrap(), 20.0);
///
/// // Division by zero is an error, not infinity.
/// assert!(evaluate("5 / 0").is_err());
/// ```
pub fn evaluate(expression: &str) -> Result<f64, Error> {
    let tokens = tokenize(expression);
    if tokens.is_empty() {
        return Err(Error::Parse(ParseError::EmptyExpression));
    }

    let postfix = to_postfix(&tokens)?;
    let value = evaluate_postfix(&postfix)?;

    Ok(value)
}
