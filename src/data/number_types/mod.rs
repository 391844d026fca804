//! # Number types
//!
//! Vectors and matrices are generic over their element type. This module defines the contract
//! those element types satisfy, and implements it for the primitive numbers.
//!
//! A benefit of this approach is that the algorithms can be tested for correctness using exact
//! integer arithmetic, while the same code is used without adaptation with floating point numbers.
pub mod traits;
