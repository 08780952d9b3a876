//! Diagnostics for the GDL front end.
//!
//! Every error the scanner or the parser records converts into a
//! [`Diagnostic`]: an [`ErrorCode`] for searchability, a message saying what
//! went wrong, a primary [`Label`] saying where, and optional notes.

mod diagnostic;
mod error_code;

pub use diagnostic::{Diagnostic, Label, Severity};
pub use error_code::ErrorCode;
