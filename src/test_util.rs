use crate::{assert_float_eq, tree::Node};
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Helper for sampling multiple variables at once.
pub(crate) struct Sampler {
    samples_per_var: usize,
    var_samples: Vec<f64>,
    sample: Vec<f64>,
    counter: Vec<usize>,
    done: bool,
}

impl Sampler {
    /**
    Create a sampler for all the variables. `ranges` should contain a
    tuple of (lower bound, upper bound) for each positional argument. The
    arguments are sampled between the bounds, `samples_per_var` times.
    */
    pub(crate) fn new(ranges: &[(f64, f64)], samples_per_var: usize, seed: u64) -> Sampler {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut var_samples = Vec::with_capacity(ranges.len() * samples_per_var);
        for &(lower, upper) in ranges {
            let span = upper - lower;
            for _ in 0..samples_per_var {
                var_samples.push(lower + rng.random::<f64>() * span);
            }
        }
        Sampler {
            samples_per_var,
            var_samples,
            sample: vec![f64::NAN; ranges.len()],
            counter: vec![0; ranges.len()],
            done: samples_per_var == 0,
        }
    }

    pub(crate) fn next(&mut self) -> Option<&[f64]> {
        if self.done {
            return None;
        }
        for (i, c) in self.counter.iter().enumerate() {
            self.sample[i] = self.var_samples[i * self.samples_per_var + *c];
        }
        for c in self.counter.iter_mut() {
            *c += 1;
            if *c < self.samples_per_var {
                break;
            } else {
                *c = 0;
            }
        }
        if self.counter.iter().all(|c| *c == 0) {
            self.done = true;
        }
        Some(&self.sample)
    }
}

/**
Helper function to evaluate the tree with randomly sampled argument values and
compare the result to the one returned by the `expectedfn` for the same
arguments. The values must be within `eps` of each other.

Each argument is sampled within the range indicated by the corresponding entry
in `ranges`.
*/
pub(crate) fn check_value_eval<F>(
    tree: Node,
    mut expectedfn: F,
    ranges: &[(f64, f64)],
    samples_per_var: usize,
    eps: f64,
) where
    F: FnMut(&[f64]) -> f64,
{
    let mut sampler = Sampler::new(ranges, samples_per_var, 42);
    while let Some(sample) = sampler.next() {
        let result = tree.value(sample).unwrap();
        assert_float_eq!(expectedfn(sample), result, eps, sample);
    }
}

/**
Compare the derivative computed by the `Differentiator` with a central
finite difference, at randomly sampled arguments. All arguments are perturbed
together, because that is the direction the `Differentiator` differentiates
along.
*/
pub(crate) fn check_derivative_eval(
    tree: Node,
    ranges: &[(f64, f64)],
    samples_per_var: usize,
    eps: f64,
) {
    const STEP: f64 = 1e-5;
    let mut sampler = Sampler::new(ranges, samples_per_var, 42);
    let mut shifted = vec![0.; ranges.len()];
    while let Some(sample) = sampler.next() {
        let deriv = tree.derivative(sample).unwrap();
        shifted
            .iter_mut()
            .zip(sample.iter())
            .for_each(|(s, x)| *s = x + STEP);
        let forward = tree.value(&shifted).unwrap();
        shifted
            .iter_mut()
            .zip(sample.iter())
            .for_each(|(s, x)| *s = x - STEP);
        let backward = tree.value(&shifted).unwrap();
        let expected = (forward - backward) / (2. * STEP);
        assert_float_eq!(expected, deriv, eps, sample);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn t_sampler_combinations() {
        let mut sampler = Sampler::new(&[(0., 1.), (10., 20.)], 3, 42);
        let mut count = 0;
        while let Some(sample) = sampler.next() {
            assert_eq!(sample.len(), 2);
            assert!((0. ..=1.).contains(&sample[0]));
            assert!((10. ..=20.).contains(&sample[1]));
            count += 1;
        }
        assert_eq!(count, 9);
    }

    #[test]
    fn t_sampler_empty() {
        let mut sampler = Sampler::new(&[(0., 1.)], 0, 42);
        assert!(sampler.next().is_none());
    }
}
