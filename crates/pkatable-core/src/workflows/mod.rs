//! # Workflows Module
//!
//! High-level entry points that run a complete pipeline from input files to written output.
//!
//! - **Tabulation Workflow** ([`tabulate`]) - Reads the mom, potential and sample files,
//!   derives pKa values, joins them by residue index and writes the summary table.

pub mod tabulate;
