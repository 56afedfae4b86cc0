// ttsclean/src/ui/mod.rs
//! Terminal output helpers: colored status messages, diffs and tables.

pub mod diff_viewer;
pub mod output_format;
pub mod tables;
