use crate::tree::{BinaryOp, Node};

macro_rules! binary_operator {
    ($trait:ident, $method:ident, $op:ident) => {
        impl core::ops::$trait<Node> for Node {
            type Output = Node;

            fn $method(self, rhs: Node) -> Node {
                Node::binary(BinaryOp::$op, self, rhs)
            }
        }

        impl core::ops::$trait<f64> for Node {
            type Output = Node;

            fn $method(self, rhs: f64) -> Node {
                Node::binary(BinaryOp::$op, self, Node::constant(rhs))
            }
        }

        impl core::ops::$trait<Node> for f64 {
            type Output = Node;

            fn $method(self, rhs: Node) -> Node {
                Node::binary(BinaryOp::$op, Node::constant(self), rhs)
            }
        }
    };
}

binary_operator!(Add, add, Add);
binary_operator!(Sub, sub, Subtract);
binary_operator!(Mul, mul, Multiply);

/// Raise `base` to the power of `exponent`.
pub fn pow(base: impl Into<Node>, exponent: impl Into<Node>) -> Node {
    Node::binary(BinaryOp::Pow, base.into(), exponent.into())
}
