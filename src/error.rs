/// Parsing errors.
///
/// Defines all error types that can occur while tokens are classified and
/// reordered into postfix form. Parse errors include empty input, tokens the
/// lexer could not make sense of, and parentheses without a match.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while a postfix sequence is
/// evaluated. Runtime errors include division by zero, operators with missing
/// operands, and streams that do not reduce to a single value.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

#[derive(Debug)]
/// Represents any error the evaluation pipeline can produce.
///
/// Both phases report through this enum so callers can branch on the exact
/// failure kind with a single `match`.
pub enum Error {
    /// Tokenization or postfix conversion failed.
    Parse(ParseError),
    /// Postfix evaluation failed.
    Runtime(RuntimeError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for Error {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}
