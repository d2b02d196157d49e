/// The evaluator module computes the value of a postfix token sequence.
///
/// The evaluator walks the postfix stream left to right with an operand
/// stack, applying each operator to the two most recently pushed values. It
/// is the final stage of the pipeline and the only one that performs
/// arithmetic.
///
/// # Responsibilities
/// - Evaluates postfix token sequences into a single `f64` value.
/// - Applies the four arithmetic operators with left/right operand order
///   preserved.
/// - Reports runtime errors such as division by zero or missing operands.
pub mod evaluator;
/// The lexer module tokenizes an expression for further processing.
///
/// The lexer (tokenizer) reads the raw expression text and produces a stream
/// of tokens: numeric literals, operators, and parentheses. This is the first
/// stage of evaluation and the only one that inspects characters.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with type and source
///   offset.
/// - Classifies each token exactly once; later stages match on variants.
/// - Defers malformed input to later stages as `Unknown` tokens instead of
///   failing.
pub mod lexer;
/// The postfix module reorders infix tokens into postfix form.
///
/// The converter applies the shunting-yard algorithm to the token stream
/// produced by the lexer, using an operator stack and the fixed precedence
/// table to emit operands and operators in Reverse Polish order.
///
/// # Responsibilities
/// - Converts infix token sequences into postfix token sequences.
/// - Enforces operator precedence and left-to-right associativity.
/// - Matches parentheses, reporting a closing parenthesis that was never
///   opened.
pub mod postfix;
