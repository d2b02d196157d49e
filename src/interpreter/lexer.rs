use logos::Logos;

/// Represents a binary arithmetic operator.
///
/// Operators are classified once by the lexer; the converter and the
/// evaluator only ever match on this enum.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl Operator {
    /// Returns the binding strength of the operator.
    ///
    /// Multiplication and division bind tighter than addition and
    /// subtraction. The mapping is fixed and never changes at runtime.
    ///
    /// # Example
    /// ```
    /// use shunter::interpreter::lexer::Operator;
    ///
    /// assert!(Operator::Mul.precedence() > Operator::Add.precedence());
    /// assert_eq!(Operator::Sub.precedence(), Operator::Add.precedence());
    /// ```
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
        }
    }

    /// Returns the source character for the operator.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Represents a parenthesis.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Paren {
    /// `(`
    Open,
    /// `)`
    Close,
}

impl Paren {
    /// Returns the source character for the parenthesis.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Open => '(',
            Self::Close => ')',
        }
    }
}

impl std::fmt::Display for Paren {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Represents a lexical token in the source expression.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r" +")]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14` or `.5`.
    #[regex(r"[0-9.]+", parse_number)]
    Number(f64),
    /// `+`, `-`, `*` or `/`
    #[token("+", |_| Operator::Add)]
    #[token("-", |_| Operator::Sub)]
    #[token("*", |_| Operator::Mul)]
    #[token("/", |_| Operator::Div)]
    Operator(Operator),
    /// `(` or `)`
    #[token("(", |_| Paren::Open)]
    #[token(")", |_| Paren::Close)]
    Paren(Paren),
    /// Any other character, carried through verbatim.
    ///
    /// The lexer never fails; unrecognized input is rejected by the converter
    /// or the evaluator when it is consumed.
    #[regex(r".", |lex| lex.slice().to_string(), priority = 1)]
    Unknown(String),
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Operator(op) => write!(f, "{op}"),
            Self::Paren(paren) => write!(f, "{paren}"),
            Self::Unknown(lexeme) => write!(f, "{lexeme}"),
        }
    }
}

/// Splits an expression into tokens paired with their byte offsets.
///
/// Digits and decimal points are accumulated into numeric literals, spaces
/// are discarded, and every other character becomes its own token. This
/// function never fails: a run of digits and dots that is not a valid float
/// (such as `1.2.3`), or a character with no meaning here, is emitted as a
/// [`Token::Unknown`] and reported once a later stage consumes it.
///
/// # Parameters
/// - `expression`: The raw expression text.
///
/// # Returns
/// The tokens in source order, each paired with the byte offset of its first
/// character.
///
/// # Example
/// ```
/// use shunter::interpreter::lexer::{Operator, Token, tokenize};
///
/// let tokens = tokenize("1 + 2");
/// assert_eq!(tokens,
///            vec![(Token::Number(1.0), 0),
///                 (Token::Operator(Operator::Add), 2),
///                 (Token::Number(2.0), 4)]);
/// ```
#[must_use]
pub fn tokenize(expression: &str) -> Vec<(Token, usize)> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(expression);

    while let Some(token) = lexer.next() {
        let position = lexer.span().start;
        match token {
            Ok(tok) => tokens.push((tok, position)),
            // A matched literal that failed numeric parsing.
            Err(()) => tokens.push((Token::Unknown(lexer.slice().to_string()), position)),
        }
    }

    tokens
}

/// Parses a numeric literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed value if the slice is a valid float.
/// - `None`: If the slice is not a valid float.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}
