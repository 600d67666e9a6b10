//! Reverse-mode automatic differentiation over scalar values.
//!
//! Leaves are created with [`Var::new`]; arithmetic on `Var`s evaluates
//! eagerly and records how each result was produced. [`Var::backward`] then
//! walks that record in reverse topological order and leaves
//! \( \partial\,\text{terminal} / \partial\,\text{node} \) in `grad()` of every
//! node the terminal depends on.
//!
//! ```
//! use autodiff_core::Var;
//!
//! let x1 = Var::new(2.0);
//! let x2 = Var::new(3.0);
//! let y = &x1 * &x2;
//! y.backward().unwrap();
//! assert_eq!(x1.grad(), 3.0);
//! assert_eq!(x2.grad(), 2.0);
//! ```

pub mod autograd;
pub mod error;
pub mod ops;
pub mod var;

pub use autograd::BackwardConfig;
pub use error::AutodiffError;
pub use var::Var;
