//! # Algorithms
//!
//! Algorithms on matrices: transposition, multiplication, integer powers and inversion. They are
//! expressed in terms of element access only, and are therefore agnostic of the backing of the
//! matrices involved; the backing does determine the constant factor of each access.
pub mod inverse;
pub mod power;
pub mod product;

pub use inverse::InverseSettings;
