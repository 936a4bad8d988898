use symvisit::{Differentiator, Error, Node, ValueEvaluator, deftree};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    // The same tree, built with operators and with the macro.
    let x = Node::variable(0);
    let tree = x.clone() * (x - 1.);
    assert_eq!(tree, deftree!(* (var 0) (- (var 0) 1.))?);
    println!("f(x) = {tree}\n");
    println!("$f(x) = {}$\n", tree.to_latex()?);
    let native = |x: f64| x * (x - 1.);
    println!("native f(7) = {}", native(7.));
    println!("tree f(7) = {}", tree.evaluate(&[7.], &ValueEvaluator)?);
    // d(x * (x - 1))/dx = d(x^2 - x)/dx = 2x - 1
    println!("tree f'(7) = {}", tree.evaluate(&[7.], &Differentiator::new())?);
    // Operators without a differentiation rule are reported, not guessed.
    let cube = deftree!(pow (var 0) 3.)?;
    match cube.derivative(&[2.]) {
        Ok(val) => println!("d/dx {cube} at 2 = {val}"),
        Err(e) => println!("d/dx {cube} at 2: {e}"),
    }
    Ok(())
}
