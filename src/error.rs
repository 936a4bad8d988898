use crate::tree::BinaryOp;
use std::fmt::{Debug, Display};

#[derive(Clone, PartialEq, Eq)]
pub enum Error {
    // Construction.
    /// The operator tag is not one of the supported binary operators.
    InvalidOperator(String),

    // Evaluation related errors
    /// A variable refers to an argument that was not supplied. Contains the
    /// index of the variable and the number of arguments.
    IndexOutOfRange(usize, usize),
    /// The visitor has no rule for this operator.
    UnsupportedOperator(BinaryOp),
    /// Something went wrong when trying to do interval airthmetic.
    InvalidInterval,
}

impl Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use Error::*;
        match self {
            InvalidOperator(tag) => f.debug_tuple("InvalidOperator").field(tag).finish(),
            IndexOutOfRange(index, len) => f
                .debug_tuple("IndexOutOfRange")
                .field(index)
                .field(len)
                .finish(),
            UnsupportedOperator(op) => f.debug_tuple("UnsupportedOperator").field(op).finish(),
            InvalidInterval => write!(f, "InvalidInterval"),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use Error::*;
        match self {
            InvalidOperator(tag) => {
                write!(f, "unknown operator '{tag}', expecting one of ")?;
                for (i, op) in BinaryOp::ALL.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{op:?}")?;
                }
                Ok(())
            }
            IndexOutOfRange(index, len) => write!(
                f,
                "variable index {index} is out of range for {len} argument(s)"
            ),
            UnsupportedOperator(op) => write!(f, "unsupported operator {op:?}"),
            InvalidInterval => write!(f, "invalid interval"),
        }
    }
}

impl std::error::Error for Error {}
