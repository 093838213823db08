//! Error types for the front-end.
//!
//! The lexer never fails; everything here is produced by the parser and
//! collected rather than returned early. It includes:
//!
//! - Error structures with source position information
//! - One variant per kind of grammar violation
//! - Names and suggestions for user-facing diagnostics

pub mod errors;
