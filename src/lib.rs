pub mod derivative;
pub mod error;
pub mod eval;
pub mod interval;
pub mod latex;
pub mod tree;
pub mod visitor;

mod io;
mod macros;
mod ops;

pub use derivative::Differentiator;
pub use error::Error;
pub use eval::ValueEvaluator;
pub use interval::{IntervalEvaluator, interval};
pub use io::InfixPrinter;
pub use latex::LatexPrinter;
pub use ops::pow;
pub use tree::{BinaryOp, BinaryOperation, Constant, MaybeNode, Node, Variable};
pub use visitor::{Visitor, dispatch};

#[cfg(test)]
mod test_util;
