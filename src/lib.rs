pub mod bound;
pub mod common;
pub mod multiplier;
pub mod random;
