use crate::interpreter::lexer::Operator;

#[derive(Debug)]
/// Represents all errors that can occur during postfix evaluation.
pub enum RuntimeError {
    /// Found a token that cannot be evaluated.
    UnknownToken {
        /// The offending token text.
        token:    String,
        /// Byte offset of the token in the source expression.
        position: usize,
    },
    /// An operator was applied with fewer than two operands available.
    InsufficientOperands {
        /// The operator that was being applied.
        operator: Operator,
        /// Byte offset of the operator in the source expression.
        position: usize,
    },
    /// The divisor of a division was exactly zero.
    DivisionByZero {
        /// Byte offset of the division operator.
        position: usize,
    },
    /// Evaluation finished with an operand count other than one.
    MalformedExpression {
        /// How many operands were left on the stack.
        operands: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownToken { token, position } => {
                write!(f, "Error at offset {position}: Unknown token: {token}.")
            },

            Self::InsufficientOperands { operator, position } => write!(f,
                                                                        "Error at offset {position}: Operator '{operator}' requires two operands."),

            Self::DivisionByZero { position } => {
                write!(f, "Error at offset {position}: Division by zero.")
            },

            Self::MalformedExpression { operands } => write!(f,
                                                             "Evaluation finished with {operands} operands instead of one."),
        }
    }
}

impl std::error::Error for RuntimeError {}
