use crate::{
    error::Error,
    tree::{BinaryOp::*, BinaryOperation, Constant, Variable},
    visitor::{Visitor, lookup},
};
use inari::Interval;

/// Create an interval from the bounds, swapping them if they're out of order.
pub fn interval(mut lower: f64, mut upper: f64) -> Result<Interval, Error> {
    if upper < lower {
        (lower, upper) = (upper, lower);
    }
    inari::interval!(lower, upper).map_err(|_| Error::InvalidInterval)
}

/// Computes an interval guaranteed to contain every value the tree can take
/// when each argument varies within its interval.
#[derive(Debug, Default, Copy, Clone)]
pub struct IntervalEvaluator;

impl Visitor for IntervalEvaluator {
    type Input = Interval;
    type Output = Interval;

    fn visit_constant(&self, node: &Constant, _args: &[Interval]) -> Result<Interval, Error> {
        interval(node.value, node.value)
    }

    fn visit_variable(&self, node: &Variable, args: &[Interval]) -> Result<Interval, Error> {
        let it = *lookup(node, args)?;
        if it.is_empty() {
            return Err(Error::InvalidInterval);
        }
        Ok(it)
    }

    fn visit_binary_operation(
        &self,
        node: &BinaryOperation,
        args: &[Interval],
    ) -> Result<Interval, Error> {
        let lhs = node.left().evaluate(args, self)?;
        let rhs = node.right().evaluate(args, self)?;
        let out = match node.op() {
            Add => lhs + rhs,
            Subtract => lhs - rhs,
            Multiply => lhs * rhs,
            Pow => {
                let exponent = rhs.inf();
                if rhs.is_singleton()
                    && exponent.fract() == 0.
                    && exponent.abs() <= i32::MAX as f64
                {
                    // Integer powers are defined for negative bases and give
                    // tighter intervals, e.g. when squaring.
                    lhs.pown(exponent as i32)
                } else {
                    // Only defined for non-negative bases.
                    lhs.pow(rhs)
                }
            }
        };
        if out.is_empty() {
            tracing::debug!(op = ?node.op(), "empty interval result");
            return Err(Error::InvalidInterval);
        }
        Ok(out)
    }
}
