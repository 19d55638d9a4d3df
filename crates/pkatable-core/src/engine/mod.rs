//! # Engine Module
//!
//! Configuration, error reporting, progress events and the positional join that turns the
//! parsed inputs into summary rows.

pub mod config;
pub mod error;
pub mod join;
pub mod progress;
