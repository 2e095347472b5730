//! Integration test module
//!
//! End-to-end tests through the C surface, the Rust handle API and the CLI.

pub mod common;
pub mod ffi_tests;
