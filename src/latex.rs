use crate::{
    error::Error,
    tree::{BinaryOp::*, BinaryOperation, Constant, Node, Variable},
    visitor::Visitor,
};

/// Renders a tree as a latex expression. The arguments are ignored, so
/// this can be dispatched with an empty argument list.
#[derive(Debug, Default, Copy, Clone)]
pub struct LatexPrinter;

impl Visitor for LatexPrinter {
    type Input = f64;
    type Output = String;

    fn visit_constant(&self, node: &Constant, _args: &[f64]) -> Result<String, Error> {
        Ok(node.value.to_string())
    }

    fn visit_variable(&self, node: &Variable, _args: &[f64]) -> Result<String, Error> {
        Ok(format!("x_{{{}}}", node.index))
    }

    fn visit_binary_operation(
        &self,
        node: &BinaryOperation,
        args: &[f64],
    ) -> Result<String, Error> {
        let (lnode, rnode) = (node.left(), node.right());
        let lx = lnode.evaluate(args, self)?;
        let rx = rnode.evaluate(args, self)?;
        Ok(match node.op() {
            Add | Subtract => {
                let (lx, rx) = (parens_add_sub(lnode, lx), parens_add_sub(rnode, rx));
                if node.op() == Add {
                    format!("{{{lx}}} + {{{rx}}}")
                } else {
                    format!("{{{lx}}} - {{{rx}}}")
                }
            }
            Multiply => {
                let (lx, rx) = (parens_mul(lnode, lx), parens_mul(rnode, rx));
                format!("{{{lx}}}\\cdot{{{rx}}}")
            }
            Pow => {
                let lx = match lnode {
                    Node::Binary(_) => with_parens(lx),
                    Node::Constant(_) if lx.len() > 1 => with_parens(lx),
                    Node::Constant(_) | Node::Variable(_) => lx,
                };
                format!("{{{lx}}}^{{{rx}}}")
            }
        })
    }
}

impl Node {
    /// Produce the latex expression for the tree.
    pub fn to_latex(&self) -> Result<String, Error> {
        self.evaluate(&[], &LatexPrinter)
    }
}

/// Given `node` that is an operand of a multiplication and wrap its `latex`
/// string in parentheses if necessary.
fn parens_mul(node: &Node, latex: String) -> String {
    match node {
        Node::Binary(bin) => match bin.op() {
            Add | Subtract | Multiply => with_parens(latex),
            Pow => latex,
        },
        Node::Constant(c) if c.value < 0. => with_parens(latex),
        Node::Constant(_) | Node::Variable(_) => latex,
    }
}

/// Given a `node` that is an operand of an addition or subtraction, wrap its
/// `latex` string in parentheses if necessary.
fn parens_add_sub(node: &Node, latex: String) -> String {
    match node {
        Node::Binary(bin) => match bin.op() {
            Add | Subtract => with_parens(latex),
            Multiply | Pow => latex,
        },
        Node::Constant(c) if c.value < 0. => with_parens(latex),
        Node::Constant(_) | Node::Variable(_) => latex,
    }
}

fn with_parens(latex: String) -> String {
    format!("\\left({latex}\\right)")
}
