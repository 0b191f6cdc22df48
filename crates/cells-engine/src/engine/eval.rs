//! Arithmetic evaluation of tokenized formulas.
//!
//! Supports numeric literals, cell references and the binary operators
//! `+ - * /` with the usual precedence (`*` and `/` before `+` and `-`, all
//! left-associative). An operand may carry one leading sign (`=-A1`,
//! `=2*-3`). There are no parentheses and no functions.

use regex::Regex;
use std::iter::Peekable;
use std::sync::OnceLock;

use super::deps::is_reference_shape;
use super::token::{Operator, Token};
use crate::error::{FormulaError, FormulaResult};

/// Evaluate a token sequence produced by [`tokenize`](super::tokenize).
///
/// `resolve` maps a reference symbol to the referenced cell's current display
/// value, or None when the symbol is not a cell of the grid. An empty value
/// counts as `0`; anything else must be a number.
pub fn evaluate<'a, F>(tokens: &[Token], resolve: F) -> FormulaResult<f64>
where
    F: Fn(&str) -> Option<&'a str>,
{
    let mut iter = tokens.iter().peekable();
    if iter.next() != Some(&Token::Equals) {
        return Err(FormulaError::Parse("formula must start with '='".to_string()));
    }

    let mut values: Vec<f64> = Vec::new();
    let mut ops: Vec<Operator> = Vec::new();

    loop {
        values.push(read_operand(&mut iter, &resolve)?);

        match iter.next() {
            None => break,
            Some(Token::Operator(op)) => {
                while let Some(&top) = ops.last() {
                    if top.precedence() < op.precedence() {
                        break;
                    }
                    ops.pop();
                    reduce(&mut values, top)?;
                }
                ops.push(*op);
            }
            Some(Token::Equals) => {
                return Err(FormulaError::Evaluation("unexpected '='".to_string()));
            }
            Some(Token::Operand(symbol)) => {
                return Err(FormulaError::Evaluation(format!(
                    "unexpected operand '{}'",
                    symbol
                )));
            }
        }
    }

    while let Some(op) = ops.pop() {
        reduce(&mut values, op)?;
    }

    match values.as_slice() {
        [result] if result.is_finite() => Ok(*result),
        [_] => Err(FormulaError::NonFinite),
        _ => Err(FormulaError::Evaluation("malformed expression".to_string())),
    }
}

fn read_operand<'a, 't, I, F>(iter: &mut Peekable<I>, resolve: &F) -> FormulaResult<f64>
where
    I: Iterator<Item = &'t Token>,
    F: Fn(&str) -> Option<&'a str>,
{
    let mut sign = 1.0;
    if let Some(Token::Operator(op @ (Operator::Add | Operator::Sub))) = iter.peek() {
        if *op == Operator::Sub {
            sign = -1.0;
        }
        iter.next();
    }

    match iter.next() {
        Some(Token::Operand(symbol)) => Ok(sign * operand_value(symbol, resolve)?),
        Some(Token::Operator(op)) => Err(FormulaError::Evaluation(format!(
            "missing operand before '{}'",
            op
        ))),
        Some(Token::Equals) => Err(FormulaError::Evaluation("unexpected '='".to_string())),
        None => Err(FormulaError::Evaluation("missing operand".to_string())),
    }
}

fn operand_value<'a, F>(symbol: &str, resolve: &F) -> FormulaResult<f64>
where
    F: Fn(&str) -> Option<&'a str>,
{
    if is_reference_shape(symbol) {
        if let Some(value) = resolve(symbol) {
            if value.trim().is_empty() {
                return Ok(0.0);
            }
            return parse_number(value)
                .ok_or_else(|| FormulaError::NonNumeric(format!("{} = {:?}", symbol, value)));
        }
    }
    parse_number(symbol).ok_or_else(|| FormulaError::NonNumeric(symbol.to_string()))
}

fn reduce(values: &mut Vec<f64>, op: Operator) -> FormulaResult<()> {
    let (Some(rhs), Some(lhs)) = (values.pop(), values.pop()) else {
        return Err(FormulaError::Evaluation(format!("missing operand for '{}'", op)));
    };
    let result = op.apply(lhs, rhs);
    if !result.is_finite() {
        return Err(FormulaError::NonFinite);
    }
    values.push(result);
    Ok(())
}

/// Parse a plain decimal number (optional sign, fraction and exponent).
///
/// Surrounding whitespace is allowed. Words like `inf` or `NaN` and values
/// that overflow to infinity are rejected.
pub fn parse_number(text: &str) -> Option<f64> {
    static NUMBER_RE: OnceLock<Regex> = OnceLock::new();
    let re = NUMBER_RE.get_or_init(|| {
        Regex::new(r"^[+-]?([0-9]+(\.[0-9]*)?|\.[0-9]+)([eE][+-]?[0-9]+)?$")
            .expect("number regex must compile")
    });

    let trimmed = text.trim();
    if !re.is_match(trimmed) {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Whether raw input is a literal rather than a formula: a plain number, or blank.
pub fn is_plain_number(text: &str) -> bool {
    text.trim().is_empty() || parse_number(text).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::tokenize;

    fn eval_str(formula: &str) -> FormulaResult<f64> {
        let tokens = tokenize(formula)?;
        evaluate(&tokens, |_| None)
    }

    fn eval_with<'a>(formula: &str, cells: &'a [(&'a str, &'a str)]) -> FormulaResult<f64> {
        let tokens = tokenize(formula)?;
        evaluate(&tokens, |symbol| {
            cells
                .iter()
                .find(|(id, _)| *id == symbol)
                .map(|(_, value)| *value)
        })
    }

    #[test]
    fn test_precedence_and_left_associativity() {
        assert_eq!(eval_str("=1+2*3").unwrap(), 7.0);
        assert_eq!(eval_str("=10-4-3").unwrap(), 3.0);
        assert_eq!(eval_str("=8/4/2").unwrap(), 1.0);
        assert_eq!(eval_str("=2*3-8/4+1").unwrap(), 5.0);
    }

    #[test]
    fn test_unary_sign() {
        assert_eq!(eval_str("=-5").unwrap(), -5.0);
        assert_eq!(eval_str("=2*-3").unwrap(), -6.0);
        assert_eq!(eval_str("=1--2").unwrap(), 3.0);
        assert_eq!(eval_str("=+4").unwrap(), 4.0);
        assert!(eval_str("=1---2").is_err());
    }

    #[test]
    fn test_references_resolve_to_values() {
        let cells = [("A1", "5"), ("B1", ""), ("C1", "-2.5")];
        assert_eq!(eval_with("=A1+10", &cells).unwrap(), 15.0);
        assert_eq!(eval_with("=B1+1", &cells).unwrap(), 1.0);
        assert_eq!(eval_with("=A1*C1", &cells).unwrap(), -12.5);
        assert_eq!(eval_with("=A1-C1", &cells).unwrap(), 7.5);
    }

    #[test]
    fn test_error_operand_fails() {
        let cells = [("A1", "ERROR")];
        assert!(matches!(
            eval_with("=A1+1", &cells),
            Err(FormulaError::NonNumeric(_))
        ));
    }

    #[test]
    fn test_unknown_symbol_fails() {
        assert!(matches!(eval_str("=abc+1"), Err(FormulaError::NonNumeric(_))));
        assert!(matches!(eval_str("=Z99"), Err(FormulaError::NonNumeric(_))));
    }

    #[test]
    fn test_malformed_expressions_fail() {
        assert!(matches!(eval_str("=1+"), Err(FormulaError::Evaluation(_))));
        assert!(matches!(eval_str("="), Err(FormulaError::Evaluation(_))));
        assert!(matches!(eval_str("=*2"), Err(FormulaError::Evaluation(_))));
        assert!(matches!(eval_str("=1=2"), Err(FormulaError::Evaluation(_))));
        assert!(matches!(eval_str("=1+*2"), Err(FormulaError::Evaluation(_))));
    }

    #[test]
    fn test_non_finite_results_fail() {
        assert_eq!(eval_str("=1/0"), Err(FormulaError::NonFinite));
        assert_eq!(eval_str("=0/0"), Err(FormulaError::NonFinite));
        assert_eq!(eval_str("=1e308*10"), Err(FormulaError::NonFinite));
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("42"), Some(42.0));
        assert_eq!(parse_number(" -3.5 "), Some(-3.5));
        assert_eq!(parse_number(".5"), Some(0.5));
        assert_eq!(parse_number("1e3"), Some(1000.0));
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("1e999"), None);
        assert_eq!(parse_number("0x10"), None);
        assert_eq!(parse_number(""), None);
    }

    #[test]
    fn test_is_plain_number() {
        assert!(is_plain_number("20"));
        assert!(is_plain_number(""));
        assert!(is_plain_number("  "));
        assert!(!is_plain_number("=A1"));
        assert!(!is_plain_number("hello"));
    }
}
