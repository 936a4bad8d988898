use crate::{
    error::Error,
    eval::ValueEvaluator,
    tree::{BinaryOp::*, BinaryOperation, Constant, Node, Variable},
    visitor::Visitor,
};
use tracing::instrument;

/// Computes the value of the derivative of a tree at the point given by the
/// positional arguments. This is a number, not a symbolic expression.
///
/// Every variable is treated as an independent input whose derivative with
/// respect to itself is one. For trees with more than one variable, the
/// result is therefore the derivative along the direction where all
/// arguments increase together, i.e. the sum of the partial derivatives.
#[derive(Debug, Default, Copy, Clone)]
pub struct Differentiator {
    /// Used for the plain values of subtrees, which the product rule needs.
    values: ValueEvaluator,
}

impl Differentiator {
    pub fn new() -> Differentiator {
        Differentiator {
            values: ValueEvaluator,
        }
    }
}

impl Visitor for Differentiator {
    type Input = f64;
    type Output = f64;

    fn visit_constant(&self, _node: &Constant, _args: &[f64]) -> Result<f64, Error> {
        Ok(0.)
    }

    fn visit_variable(&self, _node: &Variable, _args: &[f64]) -> Result<f64, Error> {
        Ok(1.)
    }

    fn visit_binary_operation(&self, node: &BinaryOperation, args: &[f64]) -> Result<f64, Error> {
        let (lhs, rhs) = (node.left(), node.right());
        match node.op() {
            Add => Ok(lhs.evaluate(args, self)? + rhs.evaluate(args, self)?),
            Subtract => Ok(lhs.evaluate(args, self)? - rhs.evaluate(args, self)?),
            Multiply => {
                // Product rule.
                let lval = lhs.evaluate(args, &self.values)?;
                let lderiv = lhs.evaluate(args, self)?;
                let rval = rhs.evaluate(args, &self.values)?;
                let rderiv = rhs.evaluate(args, self)?;
                Ok(lval * rderiv + lderiv * rval)
            }
            op @ Pow => {
                tracing::debug!(?op, "no differentiation rule");
                Err(Error::UnsupportedOperator(op))
            }
        }
    }
}

impl Node {
    /// Compute the value of the derivative of this tree at `args`. See
    /// `Differentiator` for how multiple variables are treated.
    #[instrument(level = "trace", skip_all)]
    pub fn derivative(&self, args: &[f64]) -> Result<f64, Error> {
        self.evaluate(args, &Differentiator::new())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        assert_float_eq, deftree,
        test_util::{Sampler, check_derivative_eval},
    };

    #[test]
    fn t_constant() {
        let tree = deftree!(const 2.5).unwrap();
        assert_eq!(tree.derivative(&[]), Ok(0.));
        assert_eq!(tree.derivative(&[1., 2.]), Ok(0.));
    }

    #[test]
    fn t_variable() {
        assert_eq!(deftree!(var 0).unwrap().derivative(&[-3.]), Ok(1.));
        assert_eq!(deftree!(var 2).unwrap().derivative(&[0., 0., 9.]), Ok(1.));
        // The index is not looked up, so it doesn't matter if it is in range.
        assert_eq!(deftree!(var 2).unwrap().derivative(&[0.]), Ok(1.));
        assert_eq!(Node::variable(5).derivative(&[]), Ok(1.));
        assert_eq!(deftree!(+ (var 1) 3.).unwrap().derivative(&[2.]), Ok(1.));
    }

    #[test]
    fn t_product_rule() {
        // d/dx (x^2 - x) = 2x - 1.
        let tree = deftree!(* (var 0) (- (var 0) 1.)).unwrap();
        assert_eq!(tree.value(&[7.]), Ok(42.));
        assert_eq!(tree.derivative(&[7.]), Ok(13.));
        assert_eq!(
            tree.evaluate(&[7.], &Differentiator::default()),
            tree.derivative(&[7.])
        );
    }

    #[test]
    fn t_linearity() {
        let p = deftree!(* (var 0) (* (var 0) 3.)).unwrap();
        let q = deftree!(- (* 2. (var 0)) 5.).unwrap();
        let mut sampler = Sampler::new(&[(-10., 10.)], 50, 42);
        while let Some(args) = sampler.next() {
            let dp = p.derivative(args).unwrap();
            let dq = q.derivative(args).unwrap();
            let sum = (p.clone() + q.clone()).derivative(args).unwrap();
            let diff = (p.clone() - q.clone()).derivative(args).unwrap();
            assert_float_eq!(sum, dp + dq);
            assert_float_eq!(diff, dp - dq);
        }
    }

    #[test]
    fn t_pow_unsupported() {
        let tree = deftree!(+ 1. (pow (var 0) 2.)).unwrap();
        // Evaluation is fine.
        assert_eq!(tree.value(&[3.]), Ok(10.));
        assert_eq!(tree.derivative(&[3.]), Err(Error::UnsupportedOperator(Pow)));
    }

    #[test]
    fn t_error_propagates_through_product() {
        let tree = deftree!(* (var 0) (+ (var 1) 1.)).unwrap();
        assert_eq!(tree.derivative(&[2.]), Err(Error::IndexOutOfRange(1, 1)));
    }

    #[test]
    fn t_two_variables() {
        // Each variable contributes its own partial derivative.
        let tree = deftree!(* (var 0) (var 1)).unwrap();
        assert_eq!(tree.derivative(&[3., 5.]), Ok(8.));
    }

    #[test]
    fn t_cubic_against_finite_difference() {
        check_derivative_eval(
            deftree!(- (* (var 0) (* (var 0) (var 0))) (* 4. (var 0))).unwrap(),
            &[(-3., 3.)],
            100,
            1e-6,
        );
    }

    #[test]
    fn t_multivariate_against_finite_difference() {
        check_derivative_eval(
            deftree!(+ (* (+ (var 0) 2.) (- (var 1) (var 0))) (* (var 2) (* (var 1) 0.5)))
                .unwrap(),
            &[(-5., 5.), (-5., 5.), (-5., 5.)],
            8,
            1e-6,
        );
    }
}
