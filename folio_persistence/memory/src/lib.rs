//! Process-local storage backend.
//!
//! Everything lives in memory and is lost when the process exits.

pub mod contact;
