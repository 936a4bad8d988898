/// Construct a tree from the lisp expresion. Variables are written as
/// `(var N)` where `N` is the position of the argument. Any operator other
/// than `+`, `-` and `*` is looked up by its tag, so `(pow a b)` and `(^ a
/// b)` both work, while an unknown operator yields `InvalidOperator`.
#[macro_export]
macro_rules! deftree {
    () => {}; // empty;
    (($($a:tt)*)) => { // Unwrap redundant parens.
        $crate::deftree!($($a)*)
    };
    ($a:block) => { // Embed existing nodes or numbers.
        {
            let out: $crate::tree::MaybeNode = Ok($crate::tree::Node::from($a));
            out
        }
    };
    // Constants.
    (const $tt:expr) => {{
        let out: $crate::tree::MaybeNode = Ok($crate::tree::Node::constant($tt));
        out
    }};
    // Variables.
    (var $index:literal) => {{
        let out: $crate::tree::MaybeNode = Ok($crate::tree::Node::variable($index));
        out
    }};
    // Operators.
    (+ $a:tt $b:tt) => {
        $crate::tree::add($crate::deftree!($a), $crate::deftree!($b))
    };
    (- $a:tt $b:tt) => {
        $crate::tree::sub($crate::deftree!($a), $crate::deftree!($b))
    };
    (* $a:tt $b:tt) => {
        $crate::tree::mul($crate::deftree!($a), $crate::deftree!($b))
    };
    // Any other operator, by tag.
    ($op:tt $a:tt $b:tt) => {
        $crate::tree::binary(stringify!($op), $crate::deftree!($a), $crate::deftree!($b))
    };
    // Constants
    ($a:literal) => {{
        let out: $crate::tree::MaybeNode = Ok($crate::tree::Node::from($a));
        out
    }};
}

/// Assert that the floating point numbers are equal within the given epsilon.
#[macro_export]
macro_rules! assert_float_eq {
    ($a:expr, $b:expr, $eps:expr, $debug:expr) => {{
        // Make variables to avoid evaluating experssions multiple times.
        let a = $a;
        let b = $b;
        let eps = $eps;
        let error = f64::abs(a - b);
        if error > eps {
            eprintln!("{:?}", $debug);
        }
        assert!(
            error <= eps,
            "Assertion failed: |({}) - ({})| = {:e} <= {:e}",
            a,
            b,
            error,
            eps
        );
    }};
    ($a:expr, $b:expr, $eps:expr) => {
        $crate::assert_float_eq!($a, $b, $eps, "")
    };
    ($a:expr, $b:expr) => {
        $crate::assert_float_eq!($a, $b, f64::EPSILON)
    };
}
