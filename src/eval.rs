use crate::{
    error::Error,
    tree::{
        BinaryOp::{self, *},
        BinaryOperation, Constant, Node, Variable,
    },
    visitor::{Visitor, lookup},
};
use tracing::instrument;

impl BinaryOp {
    /// Compute the result of the operation on `lhs` and `rhs`.
    pub fn apply(&self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Add => lhs + rhs,
            Subtract => lhs - rhs,
            Multiply => lhs * rhs,
            Pow => f64::powf(lhs, rhs),
        }
    }
}

/// Computes the numeric value of a tree, given the values of its
/// variables as positional arguments.
#[derive(Debug, Default, Copy, Clone)]
pub struct ValueEvaluator;

impl Visitor for ValueEvaluator {
    type Input = f64;
    type Output = f64;

    fn visit_constant(&self, node: &Constant, _args: &[f64]) -> Result<f64, Error> {
        Ok(node.value)
    }

    fn visit_variable(&self, node: &Variable, args: &[f64]) -> Result<f64, Error> {
        lookup(node, args).copied()
    }

    fn visit_binary_operation(&self, node: &BinaryOperation, args: &[f64]) -> Result<f64, Error> {
        let lhs = node.left().evaluate(args, self)?;
        let rhs = node.right().evaluate(args, self)?;
        Ok(node.op().apply(lhs, rhs))
    }
}

impl Node {
    /// Compute the value of this tree with `args` as the values of its
    /// variables.
    #[instrument(level = "trace", skip_all)]
    pub fn value(&self, args: &[f64]) -> Result<f64, Error> {
        self.evaluate(args, &ValueEvaluator)
    }
}
