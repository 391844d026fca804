//! # Storing of vectors and matrices in memory
//!
//! This module provides the data structures used to represent vectors and matrices in memory, as
//! well as the number types they are defined over. Algorithms on these structures live in
//! `algorithm`.

pub mod linear_algebra;
pub mod number_types;
