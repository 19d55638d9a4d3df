//! Provides input/output functionality for every file format the pipeline touches.
//!
//! Line-oriented text inputs (mom and potential files) implement the [`traits::RecordFile`]
//! trait. The sample spreadsheet and the summary table live in container formats (workbooks
//! or CSV) and are read and written by path, dispatching on the file extension through
//! [`format::SpreadsheetFormat`].

pub(crate) mod cells;
pub mod format;
pub mod mom;
pub mod potentials;
pub mod samples;
pub mod table;
pub mod traits;
