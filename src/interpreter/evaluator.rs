use crate::{
    error::RuntimeError,
    interpreter::lexer::{Operator, Token},
};

pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates a postfix token sequence into a single value.
///
/// The stream is walked left to right with an operand stack. A number pushes
/// its value; an operator pops the right operand, then the left, and pushes
/// the result of applying itself. When the stream is exhausted the stack must
/// hold exactly one value, which is the result.
///
/// # Parameters
/// - `tokens`: Postfix token stream with byte offsets, as produced by
///   [`to_postfix`](crate::interpreter::postfix::to_postfix).
///
/// # Returns
/// The computed value.
///
/// # Errors
/// - `RuntimeError::InsufficientOperands` if an operator finds fewer than two
///   stacked values.
/// - `RuntimeError::DivisionByZero` if a divisor is exactly zero.
/// - `RuntimeError::UnknownToken` if the stream contains a token that cannot
///   be evaluated, including a parenthesis that survived conversion.
/// - `RuntimeError::MalformedExpression` if evaluation finishes with an
///   operand count other than one.
///
/// # Example
/// ```
/// use shunter::interpreter::{evaluator::evaluate_postfix, lexer::tokenize, postfix::to_postfix};
///
/// let postfix = to_postfix(&tokenize("10 / 2 / 5")).unwrap();
/// assert_eq!(evaluate_postfix(&postfix).unwrap(), 1.0);
/// ```
pub fn evaluate_postfix(tokens: &[(Token, usize)]) -> EvalResult<f64> {
    let mut stack: Vec<f64> = Vec::new();

    for (token, position) in tokens {
        match token {
            Token::Number(value) => stack.push(*value),

            Token::Operator(op) => {
                // The right operand was pushed last.
                let (left, right) = match (stack.pop(), stack.pop()) {
                    (Some(right), Some(left)) => (left, right),
                    _ => {
                        return Err(RuntimeError::InsufficientOperands { operator: *op,
                                                                        position: *position, });
                    },
                };
                stack.push(apply_operator(*op, left, right, *position)?);
            },

            Token::Paren(paren) => {
                return Err(RuntimeError::UnknownToken { token:    paren.to_string(),
                                                        position: *position, });
            },

            Token::Unknown(lexeme) => {
                return Err(RuntimeError::UnknownToken { token:    lexeme.clone(),
                                                        position: *position, });
            },
        }
    }

    match stack.as_slice() {
        [value] => Ok(*value),
        _ => Err(RuntimeError::MalformedExpression { operands: stack.len() }),
    }
}

/// Applies a binary arithmetic operator to two operands.
///
/// Division checks the divisor against exactly zero before dividing; every
/// other operation is plain `f64` arithmetic, so overflow produces infinity
/// rather than an error.
///
/// # Parameters
/// - `op`: The arithmetic operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `position`: Byte offset of the operator for error reporting.
///
/// # Returns
/// An `EvalResult<f64>` containing the computed value.
///
/// # Example
/// ```
/// use shunter::interpreter::{evaluator::apply_operator, lexer::Operator};
///
/// let value = apply_operator(Operator::Mul, 1.5, 2.0, 0).unwrap();
/// assert_eq!(value, 3.0);
/// ```
pub fn apply_operator(op: Operator, left: f64, right: f64, position: usize) -> EvalResult<f64> {
    match op {
        Operator::Add => Ok(left + right),
        Operator::Sub => Ok(left - right),
        Operator::Mul => Ok(left * right),
        Operator::Div => {
            if right == 0.0 {
                return Err(RuntimeError::DivisionByZero { position });
            }
            Ok(left / right)
        },
    }
}
