//! Request-shaped operations built on the lyrics core.
//!
//! These are the entry points a request layer or the command-line tool calls;
//! they own parsing, language selection and serialization around the pure
//! functions in [`crate::lyrics`].

pub mod api;
pub mod content;
pub mod storage;
