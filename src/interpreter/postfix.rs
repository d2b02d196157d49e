use crate::{
    error::ParseError,
    interpreter::lexer::{Paren, Token},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Reorders an infix token sequence into postfix (Reverse Polish) form.
///
/// This is the shunting-yard algorithm. Numbers are appended to the output
/// directly. An operator first pops every stacked operator whose precedence
/// is greater than or equal to its own (the tie case is what makes operators
/// of equal precedence associate left to right), then pushes itself. An
/// opening parenthesis is pushed unconditionally; a closing parenthesis pops
/// operators into the output until the matching `(` is found and discarded.
///
/// After the scan, whatever remains on the stack is flushed into the output
/// in pop order. An opening parenthesis that was never closed is flushed
/// along with the operators and rejected by the evaluator when it is
/// consumed.
///
/// # Parameters
/// - `tokens`: Infix token stream with byte offsets.
///
/// # Returns
/// The same tokens in postfix order. Parentheses that matched are dropped,
/// so for well-formed input the output holds exactly the number and operator
/// tokens.
///
/// # Errors
/// - `ParseError::MismatchedParenthesis` if a `)` has no matching `(`.
/// - `ParseError::UnknownToken` if the stream contains a token that is
///   neither a number, an operator, nor a parenthesis.
///
/// # Example
/// ```
/// use shunter::interpreter::{lexer::tokenize, postfix::to_postfix};
///
/// let postfix = to_postfix(&tokenize("2 + 3 * 4")).unwrap();
/// let rendered: Vec<String> = postfix.iter().map(|(token, _)| token.to_string()).collect();
/// assert_eq!(rendered, ["2", "3", "4", "*", "+"]);
/// ```
pub fn to_postfix(tokens: &[(Token, usize)]) -> ParseResult<Vec<(Token, usize)>> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<(Token, usize)> = Vec::new();

    for (token, position) in tokens {
        match token {
            Token::Number(_) => output.push((token.clone(), *position)),

            Token::Operator(op) => {
                while let Some((Token::Operator(top), _)) = stack.last() {
                    if top.precedence() < op.precedence() {
                        break;
                    }
                    if let Some(entry) = stack.pop() {
                        output.push(entry);
                    }
                }
                stack.push((token.clone(), *position));
            },

            Token::Paren(Paren::Open) => stack.push((token.clone(), *position)),

            Token::Paren(Paren::Close) => loop {
                match stack.pop() {
                    Some((Token::Paren(Paren::Open), _)) => break,
                    Some(entry) => output.push(entry),
                    None => {
                        return Err(ParseError::MismatchedParenthesis { position: *position });
                    },
                }
            },

            Token::Unknown(lexeme) => {
                return Err(ParseError::UnknownToken { token:    lexeme.clone(),
                                                      position: *position, });
            },
        }
    }

    output.extend(stack.into_iter().rev());

    Ok(output)
}
