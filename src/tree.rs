use crate::error::Error;
use std::str::FromStr;

/// Represents an operation with two inputs.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Pow,
}

impl BinaryOp {
    /// All supported binary operators.
    pub const ALL: [BinaryOp; 4] = [
        BinaryOp::Add,
        BinaryOp::Subtract,
        BinaryOp::Multiply,
        BinaryOp::Pow,
    ];
}

impl FromStr for BinaryOp {
    type Err = Error;

    /// Parse an operator tag, either the symbol or the name of the
    /// operator. Anything else is rejected with `InvalidOperator`.
    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        use BinaryOp::*;
        Ok(match tag {
            "+" | "add" => Add,
            "-" | "sub" | "subtract" => Subtract,
            "*" | "mul" | "multiply" => Multiply,
            "^" | "pow" => Pow,
            _ => {
                tracing::debug!(tag, "rejected operator tag");
                return Err(Error::InvalidOperator(tag.to_string()));
            }
        })
    }
}

/// Leaf holding a numeric value.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Constant {
    pub value: f64,
}

/// Leaf referring to a positional argument supplied at evaluation time.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Variable {
    pub index: usize,
}

/// An operator applied to two exclusively owned subtrees.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryOperation {
    op: BinaryOp,
    left: Box<Node>,
    right: Box<Node>,
}

impl BinaryOperation {
    pub fn op(&self) -> BinaryOp {
        self.op
    }

    pub fn left(&self) -> &Node {
        &self.left
    }

    pub fn right(&self) -> &Node {
        &self.right
    }
}

/// Represents a node in an expression tree. A node owns its children, so
/// every node is also the root of its own subtree. Nodes are never mutated
/// after construction; new trees are made by composing existing ones.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Constant(Constant),
    Variable(Variable),
    Binary(BinaryOperation),
}

/// Result of a fallible construction, used to chain builder calls.
pub type MaybeNode = Result<Node, Error>;

impl Node {
    /// Create a node representing a constant value.
    pub fn constant(value: f64) -> Node {
        Node::Constant(Constant { value })
    }

    /// Create a node representing the `index`-th argument.
    pub fn variable(index: usize) -> Node {
        Node::Variable(Variable { index })
    }

    /// Create a node applying `op` to `left` and `right`.
    pub fn binary(op: BinaryOp, left: Node, right: Node) -> Node {
        Node::Binary(BinaryOperation {
            op,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    /// Create a binary operation from a raw operator tag. Fails
    /// immediately with `InvalidOperator` if the tag is not supported.
    pub fn from_tag(tag: &str, left: Node, right: Node) -> MaybeNode {
        Ok(Node::binary(tag.parse()?, left, right))
    }

    /// The number of nodes in this tree.
    pub fn len(&self) -> usize {
        match self {
            Node::Constant(_) | Node::Variable(_) => 1,
            Node::Binary(bin) => 1 + bin.left.len() + bin.right.len(),
        }
    }

    /// The number of nodes on the longest path from this node to a leaf,
    /// including both ends. Evaluating a tree recurses this deep.
    pub fn depth(&self) -> usize {
        match self {
            Node::Constant(_) | Node::Variable(_) => 1,
            Node::Binary(bin) => 1 + usize::max(bin.left.depth(), bin.right.depth()),
        }
    }

    /// The minimum number of arguments this tree must be evaluated
    /// with. This is one more than the largest variable index, or zero if
    /// the tree has no variables.
    pub fn num_args(&self) -> usize {
        match self {
            Node::Constant(_) => 0,
            Node::Variable(var) => var.index + 1,
            Node::Binary(bin) => usize::max(bin.left.num_args(), bin.right.num_args()),
        }
    }
}

macro_rules! binary_func {
    ($name:ident, $op:ident) => {
        pub fn $name(lhs: MaybeNode, rhs: MaybeNode) -> MaybeNode {
            Ok(Node::binary(BinaryOp::$op, lhs?, rhs?))
        }
    };
}

binary_func!(add, Add);
binary_func!(sub, Subtract);
binary_func!(mul, Multiply);
binary_func!(pow_tree, Pow);

/// Combine `lhs` and `rhs` with the operator identified by `tag`.
pub fn binary(tag: &str, lhs: MaybeNode, rhs: MaybeNode) -> MaybeNode {
    let op: BinaryOp = tag.parse()?;
    Ok(Node::binary(op, lhs?, rhs?))
}

impl From<f64> for Node {
    fn from(value: f64) -> Self {
        Node::constant(value)
    }
}

impl From<i32> for Node {
    fn from(value: i32) -> Self {
        Node::constant(value as f64)
    }
}

impl From<Variable> for Node {
    fn from(var: Variable) -> Self {
        Node::Variable(var)
    }
}

impl From<Constant> for Node {
    fn from(c: Constant) -> Self {
        Node::Constant(c)
    }
}
