use crate::{
    error::Error,
    tree::{BinaryOperation, Constant, Node, Variable},
};

/// An interpretation of an expression tree. The set of node variants is
/// closed, so every visitor must handle all of them. New interpretations
/// are added by implementing this trait, without touching the nodes.
///
/// Visitors are expected to be stateless with respect to any particular
/// tree or call, so a single instance can be reused for many trees and
/// shared between threads.
pub trait Visitor {
    /// Type of the positional arguments the tree is evaluated with.
    type Input;
    /// Type of the value produced for each node.
    type Output;

    fn visit_constant(&self, node: &Constant, args: &[Self::Input])
    -> Result<Self::Output, Error>;

    fn visit_variable(&self, node: &Variable, args: &[Self::Input])
    -> Result<Self::Output, Error>;

    fn visit_binary_operation(
        &self,
        node: &BinaryOperation,
        args: &[Self::Input],
    ) -> Result<Self::Output, Error>;
}

impl Node {
    /// Route this node to the method of `visitor` matching its variant, with
    /// `args` passed through unchanged. The node does no computation of its
    /// own. Visitors recurse into child nodes by calling this function on
    /// them.
    ///
    /// The recursion is as deep as the tree (see `Node::depth`). Very deep
    /// trees can overflow the stack, both here and when they are
    /// dropped. Callers building trees from untrusted sizes should bound the
    /// depth before evaluating.
    pub fn evaluate<V: Visitor + ?Sized>(
        &self,
        args: &[V::Input],
        visitor: &V,
    ) -> Result<V::Output, Error> {
        match self {
            Node::Constant(c) => visitor.visit_constant(c, args),
            Node::Variable(v) => visitor.visit_variable(v, args),
            Node::Binary(b) => visitor.visit_binary_operation(b, args),
        }
    }
}

/// Evaluate `node` with `args` using `visitor`. Same as `Node::evaluate`.
pub fn dispatch<V: Visitor + ?Sized>(
    node: &Node,
    args: &[V::Input],
    visitor: &V,
) -> Result<V::Output, Error> {
    node.evaluate(args, visitor)
}

/// Look up the argument referred to by `var`.
pub(crate) fn lookup<'a, T>(var: &Variable, args: &'a [T]) -> Result<&'a T, Error> {
    args.get(var.index).ok_or_else(|| {
        tracing::debug!(index = var.index, num_args = args.len(), "variable out of range");
        Error::IndexOutOfRange(var.index, args.len())
    })
}
