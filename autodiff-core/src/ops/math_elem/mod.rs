// Element-wise math functions on a single scalar
pub mod exp;
pub mod ln;
pub mod sqrt;
pub mod tanh;
pub mod trig;

pub use exp::exp_op;
pub use ln::ln_op;
pub use sqrt::sqrt_op;
pub use tanh::tanh_op;
pub use trig::{cos_op, sin_op};
