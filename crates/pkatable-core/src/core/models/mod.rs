//! Immutable record types produced by the parsers and consumed by the join.
//!
//! Every record is created once at parse time and never mutated afterwards; sequences of
//! records are plain `Vec`s whose positions carry meaning for the positional join.

pub mod potential;
pub mod residue;
pub mod sample;
pub mod summary;
