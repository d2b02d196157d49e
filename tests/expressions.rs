use shunter::{
    error::{Error, ParseError, RuntimeError},
    evaluate,
    interpreter::{
        lexer::{Token, tokenize},
        postfix::to_postfix,
    },
};

fn assert_value(src: &str, expected: f64) {
    match evaluate(src) {
        Ok(value) => assert_eq!(value, expected,
                                "Expression '{src}' evaluated to {value}, expected {expected}"),
        Err(e) => panic!("Expression '{src}' failed: {e}"),
    }
}

fn assert_failure(src: &str) -> Error {
    match evaluate(src) {
        Ok(value) => panic!("Expression '{src}' succeeded with {value} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn basic_arithmetic() {
    assert_value("3 + 2", 5.0);
    assert_value("8 - 5", 3.0);
    assert_value("7 * 9", 63.0);
    assert_value("10 / 2", 5.0);
    assert_value("2 - 5", -3.0);
}

#[test]
fn operator_precedence() {
    assert_value("2 * 3 + 4", 10.0);
    assert_value("2 + 3 * 4", 14.0);
    assert_value("10 - 6 / 2", 7.0);
    assert_value("2 * 3 + 4 * 5", 26.0);
}

#[test]
fn parenthetical_grouping() {
    assert_value("(2 + 3) * 4", 20.0);
    assert_value("10 / (2 + 3)", 2.0);
    assert_value("((1 + 2)) * 3", 9.0);
    assert_value("(2 * (3 + 4)) - 5", 9.0);
}

#[test]
fn left_to_right_associativity() {
    assert_value("10 / 2 / 5", 1.0);
    assert_value("10 - 4 - 3", 3.0);
    assert_value("100 / 10 * 2", 20.0);
    assert_value("8 - 3 + 2", 7.0);
}

#[test]
fn floating_point_literals() {
    assert_value("1.5 * 2", 3.0);
    assert_value(".5 + .5", 1.0);
    assert_value("2. + 1", 3.0);
    assert_value("1.25 + 2.5", 3.75);
}

#[test]
fn whitespace_is_ignored() {
    assert_value("2+3*4", 14.0);
    assert_value("  2 + 3  ", 5.0);
    assert_value(" ( 1 + 2 ) * 3 ", 9.0);
}

#[test]
fn division_by_zero() {
    assert_value("0 / 5", 0.0);

    for src in ["5 / 0", "1 / 0.0", "5 / (2 - 2)"] {
        let err = assert_failure(src);
        assert!(matches!(err, Error::Runtime(RuntimeError::DivisionByZero { .. })),
                "Expression '{src}' produced unexpected error: {err:?}");
    }
}

#[test]
fn empty_expression() {
    for src in ["", "   "] {
        let err = assert_failure(src);
        assert!(matches!(err, Error::Parse(ParseError::EmptyExpression)),
                "Expression '{src:?}' produced unexpected error: {err:?}");
    }
}

#[test]
fn mismatched_closing_parenthesis() {
    for src in ["1 + 2)", ")", "(1 + 2))"] {
        let err = assert_failure(src);
        assert!(matches!(err, Error::Parse(ParseError::MismatchedParenthesis { .. })),
                "Expression '{src}' produced unexpected error: {err:?}");
    }
}

#[test]
fn unmatched_open_parenthesis() {
    // A stray `(` is not caught during conversion. It is flushed into the
    // postfix output together with the operators and rejected once the
    // evaluator consumes it.
    for src in ["(1 + 2", "((2 + 3) * 4"] {
        match assert_failure(src) {
            Error::Runtime(RuntimeError::UnknownToken { token, .. }) => {
                assert_eq!(token, "(", "Expression '{src}' reported the wrong token");
            },
            other => panic!("Expression '{src}' produced unexpected error: {other:?}"),
        }
    }
}

#[test]
fn adjacent_operators_lack_operands() {
    // Operators are classified at tokenization time, so a stray operator
    // always surfaces as a missing-operand failure during evaluation.
    for src in ["3 + + 2", "-3 + 2", "2 * / 3"] {
        let err = assert_failure(src);
        assert!(matches!(err, Error::Runtime(RuntimeError::InsufficientOperands { .. })),
                "Expression '{src}' produced unexpected error: {err:?}");
    }
}

#[test]
fn unknown_tokens_are_rejected() {
    for (src, lexeme) in [("2 @ 3", "@"),
                          ("two + 2", "t"),
                          ("1.2.3", "1.2.3"),
                          (".", "."),
                          ("..1 + 2", "..1")]
    {
        match assert_failure(src) {
            Error::Parse(ParseError::UnknownToken { token, .. }) => {
                assert_eq!(token, lexeme, "Expression '{src}' reported the wrong token");
            },
            other => panic!("Expression '{src}' produced unexpected error: {other:?}"),
        }
    }
}

#[test]
fn malformed_expressions() {
    for (src, count) in [("2 3", 2), ("()", 0), ("(2)(3)", 2)] {
        match assert_failure(src) {
            Error::Runtime(RuntimeError::MalformedExpression { operands }) => {
                assert_eq!(operands, count, "Expression '{src}' left the wrong operand count");
            },
            other => panic!("Expression '{src}' produced unexpected error: {other:?}"),
        }
    }
}

#[test]
fn overflow_yields_infinity() {
    // No overflow checking beyond what floating point provides.
    let big = format!("1{} * 10", "0".repeat(308));
    match evaluate(&big) {
        Ok(value) => assert!(value.is_infinite(), "Expected infinity, got {value}"),
        Err(e) => panic!("Overflowing expression failed: {e}"),
    }
}

#[test]
fn repeated_evaluation_is_stable() {
    let src = "(2 + 3) * 4 - 10 / 2";
    let first = evaluate(src).unwrap();
    for _ in 0..10 {
        assert_eq!(evaluate(src).unwrap(), first);
    }
}

#[test]
fn conversion_drops_parentheses() {
    // For well-formed input the postfix form holds exactly the number and
    // operator tokens of the infix form.
    for src in ["(2 + 3) * 4", "1 + (2 * (3 + 4))", "10 / 2 / 5"] {
        let tokens = tokenize(src);
        let operands_and_operators =
            tokens.iter()
                  .filter(|(token, _)| matches!(token, Token::Number(_) | Token::Operator(_)))
                  .count();

        let postfix = to_postfix(&tokens).unwrap_or_else(|e| panic!("'{src}' failed: {e}"));
        assert_eq!(postfix.len(), operands_and_operators);
        assert!(postfix.iter().all(|(token, _)| !matches!(token, Token::Paren(_))),
                "Postfix form of '{src}' retained a parenthesis");
    }
}
