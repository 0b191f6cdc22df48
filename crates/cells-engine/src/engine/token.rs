//! Formula tokenizer.
//!
//! Splits a formula such as `=A1 + 2*B3` into symbols. Whitespace carries no
//! meaning and is dropped. Operands are the maximal runs of characters between
//! operators; they are classified (number, reference, garbage) later, by
//! [`extract_references`](super::extract_references) and
//! [`evaluate`](super::evaluate).

use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

use crate::error::{FormulaError, FormulaResult};

/// A binary arithmetic operator.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    pub fn from_char(c: char) -> Option<Operator> {
        match c {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Sub),
            '*' => Some(Operator::Mul),
            '/' => Some(Operator::Div),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }

    /// Binding strength; higher binds tighter.
    pub fn precedence(self) -> u8 {
        match self {
            Operator::Add | Operator::Sub => 1,
            Operator::Mul | Operator::Div => 2,
        }
    }

    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Operator::Add => lhs + rhs,
            Operator::Sub => lhs - rhs,
            Operator::Mul => lhs * rhs,
            Operator::Div => lhs / rhs,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// One symbol of a formula.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Token {
    Equals,
    Operator(Operator),
    Operand(String),
}

/// Tokenize a formula. The formula must start with `=`.
pub fn tokenize(formula: &str) -> FormulaResult<Vec<Token>> {
    let compact: String = formula.chars().filter(|c| !c.is_whitespace()).collect();
    if !compact.starts_with('=') {
        return Err(FormulaError::Parse(format!(
            "formula must start with '=': {:?}",
            formula
        )));
    }

    let mut tokens = Vec::new();
    let mut operand = String::new();

    for ch in compact.chars() {
        if ch == '=' {
            flush_operand(&mut operand, &mut tokens);
            tokens.push(Token::Equals);
            continue;
        }
        // Keep the sign of an exponent inside its numeric literal (`1e-3`).
        if matches!(ch, '+' | '-') && is_exponent_prefix(&operand) {
            operand.push(ch);
            continue;
        }
        match Operator::from_char(ch) {
            Some(op) => {
                flush_operand(&mut operand, &mut tokens);
                tokens.push(Token::Operator(op));
            }
            None => operand.push(ch),
        }
    }
    flush_operand(&mut operand, &mut tokens);

    Ok(tokens)
}

fn flush_operand(operand: &mut String, tokens: &mut Vec<Token>) {
    if !operand.is_empty() {
        tokens.push(Token::Operand(std::mem::take(operand)));
    }
}

fn is_exponent_prefix(operand: &str) -> bool {
    static EXP_RE: OnceLock<Regex> = OnceLock::new();
    EXP_RE
        .get_or_init(|| {
            Regex::new(r"^([0-9]+\.?[0-9]*|\.[0-9]+)[eE]$").expect("exponent regex must compile")
        })
        .is_match(operand)
}
