//! Scope guard primitive for paired begin/end calls.
//!
//! Foundation crate -- no toolkit or I/O dependencies.

pub mod guard;

pub use guard::{defer, Scoped};
