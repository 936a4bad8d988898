use crate::{
    error::Error,
    tree::{BinaryOp, BinaryOp::*, BinaryOperation, Constant, Node, Variable},
    visitor::Visitor,
};

/// Renders a tree as plain infix text, e.g. `x0 * (x0 - 1)`, with only the
/// parentheses needed to preserve the structure of the tree.
#[derive(Debug, Default, Copy, Clone)]
pub struct InfixPrinter;

fn precedence(op: BinaryOp) -> u8 {
    match op {
        Add | Subtract => 1,
        Multiply => 2,
        Pow => 3,
    }
}

/// Check if `child`, as the left or right operand of `parent`, must be
/// wrapped in parentheses.
fn needs_parens(parent: BinaryOp, child: &Node, is_right: bool) -> bool {
    match child {
        Node::Binary(bin) => {
            let (pp, cp) = (precedence(parent), precedence(bin.op()));
            cp < pp
                || (cp == pp
                    && match parent {
                        Subtract => is_right,
                        Pow => !is_right, // Right associative.
                        Add | Multiply => false,
                    })
        }
        Node::Constant(c) => c.value < 0. && (is_right || parent == Pow),
        Node::Variable(_) => false,
    }
}

impl Visitor for InfixPrinter {
    type Input = f64;
    type Output = String;

    fn visit_constant(&self, node: &Constant, _args: &[f64]) -> Result<String, Error> {
        Ok(node.value.to_string())
    }

    fn visit_variable(&self, node: &Variable, _args: &[f64]) -> Result<String, Error> {
        Ok(format!("x{}", node.index))
    }

    fn visit_binary_operation(
        &self,
        node: &BinaryOperation,
        args: &[f64],
    ) -> Result<String, Error> {
        let op = node.op();
        let operand = |child: &Node, is_right: bool| -> Result<String, Error> {
            let text = child.evaluate(args, self)?;
            Ok(if needs_parens(op, child, is_right) {
                format!("({text})")
            } else {
                text
            })
        };
        let lhs = operand(node.left(), false)?;
        let rhs = operand(node.right(), true)?;
        let symbol = match op {
            Add => "+",
            Subtract => "-",
            Multiply => "*",
            Pow => "^",
        };
        Ok(format!("{lhs} {symbol} {rhs}"))
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = self
            .evaluate(&[], &InfixPrinter)
            .map_err(|_| std::fmt::Error)?;
        write!(f, "{text}")
    }
}
