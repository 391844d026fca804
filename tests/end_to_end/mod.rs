//! Scenarios combining several operations, repeated for both backings.
use cute_linalg::Backing;

mod matrix;
mod vector;

const BACKINGS: [Backing; 2] = [Backing::Dense, Backing::Sparse];
