//! # Core Module
//!
//! Stateless building blocks for the tabulation pipeline.
//!
//! - **Records** ([`models`]) - One immutable type per input format plus the joined output row
//! - **Derivation** ([`pka`]) - The shifted-pKa formula applied to every potential record
//! - **File I/O** ([`io`]) - Readers for the mom, potential and sample files and the summary
//!   table reader/writer
//! - **Numerics** ([`utils`]) - Decimal rounding shared by the join and the writers

pub mod io;
pub mod models;
pub mod pka;
pub mod utils;
