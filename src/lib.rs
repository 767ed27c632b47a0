//! # clean-bin-obj
//!
//! A small CLI tool that finds `bin/` and `obj/` build folders in a directory
//! tree, asks for confirmation, and deletes them.
//!
//! The library exposes each step separately: [`scanner`] finds the folders,
//! [`prompt`] asks the user, [`cleaner`] deletes them, and [`runner::run`]
//! strings the three together. All messages go through an [`output::Output`]
//! sink so callers decide where they end up.

pub mod cleaner;
pub mod cli;
pub mod config;
pub mod output;
pub mod prompt;
pub mod runner;
pub mod scanner;
