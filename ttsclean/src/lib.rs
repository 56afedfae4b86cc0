// ttsclean/src/lib.rs
//! # ttsclean CLI Application
//!
//! Command-line front end for `ttsclean-core`: sanitizes text for speech
//! synthesis, explains how characters are classified and lists the active
//! markdown rules.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;
