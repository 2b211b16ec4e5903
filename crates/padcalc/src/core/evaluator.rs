//! Evaluator boundary and the bundled AST evaluator
//!
//! The input state machine only sees [`Evaluate`]: text in, number or
//! failure out. [`Evaluator`] is the implementation shipped with the crate;
//! tests and embedders can plug in any closure with the same shape.

use crate::core::parser::{AstNode, Parser};
use crate::core::{CalcResult, Calculator};

/// Turns display text into a number
pub trait Evaluate {
    /// Evaluates `expression`, or reports why it could not be evaluated
    fn evaluate(&mut self, expression: &str) -> CalcResult<f64>;
}

impl<F> Evaluate for F
where
    F: FnMut(&str) -> CalcResult<f64>,
{
    fn evaluate(&mut self, expression: &str) -> CalcResult<f64> {
        self(expression)
    }
}

/// Evaluator for display expressions
#[derive(Debug, Default, Clone, Copy)]
pub struct Evaluator;

impl Evaluator {
    /// Creates a new evaluator
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Evaluates an AST node and returns the result
    pub fn evaluate_ast(&self, node: &AstNode) -> CalcResult<f64> {
        match node {
            AstNode::Number(n) => Ok(*n),
            AstNode::Negate(inner) => Ok(-self.evaluate_ast(inner)?),
            AstNode::BinaryOp { left, op, right } => {
                let left_val = self.evaluate_ast(left)?;
                let right_val = self.evaluate_ast(right)?;
                Calculator::calculate(left_val, right_val, *op)
            }
        }
    }

    /// Parses and evaluates a string expression
    pub fn evaluate_str(&self, input: &str) -> CalcResult<f64> {
        let ast = Parser::parse_str(input)?;
        self.evaluate_ast(&ast)
    }
}

impl Evaluate for Evaluator {
    fn evaluate(&mut self, expression: &str) -> CalcResult<f64> {
        self.evaluate_str(expression)
    }
}
