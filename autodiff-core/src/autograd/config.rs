/// Options of a single backward pass.
///
/// ```
/// use autodiff_core::{autograd::BackwardConfig, Var};
///
/// let x = Var::new(3.0);
/// let y = &x * &x;
/// y.backward_with(BackwardConfig::default().with_seed(0.5)).unwrap();
/// assert_eq!(x.grad(), 3.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackwardConfig {
    /// Gradient seeded at the terminal node.
    pub seed: f64,
    /// When `true`, this pass adds onto the gradients already stored in the
    /// graph instead of replacing them.
    pub accumulate: bool,
}

impl Default for BackwardConfig {
    fn default() -> Self {
        BackwardConfig {
            seed: 1.0,
            accumulate: false,
        }
    }
}

impl BackwardConfig {
    pub fn with_seed(mut self, seed: f64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_accumulate(mut self, accumulate: bool) -> Self {
        self.accumulate = accumulate;
        self
    }
}
