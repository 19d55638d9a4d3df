//! # pkatable Core Library
//!
//! Turns the per-residue output of an electrostatics run into a compact summary table of
//! residues, sampled energies, shifted pKa values and charges.
//!
//! ## Architectural Philosophy
//!
//! The library keeps the same three layers throughout:
//!
//! - **[`core`]: The Foundation.** Immutable record types (`MomRecord`, `PotentialRecord`,
//!   `SampleRecord`, `JoinedRecord`), the pKa derivation, and readers/writers for every file
//!   format involved.
//!
//! - **[`engine`]: The Logic Core.** Configuration, error types, progress reporting and the
//!   positional join that assembles one summary row per sampled residue.
//!
//! - **[`workflows`]: The Public API.** The straight-line pipeline that reads all inputs,
//!   derives, joins and writes the summary table in one call.

pub mod core;
pub mod engine;
pub mod workflows;
